//! Gallows drawings, one per number of lives left.

/// Lives a new game starts with; also the index of the empty gallows.
pub const MAX_LIVES: u8 = 6;

/// Ordered from the complete figure (0 lives) to the empty gallows (6 lives).
const STAGES: [&str; 7] = [
    "  +---+
  |   |
  O   |
 /|\\  |
 / \\  |
      |
=========",
    "  +---+
  |   |
  O   |
 /|\\  |
 /    |
      |
=========",
    "  +---+
  |   |
  O   |
 /|\\  |
      |
      |
=========",
    "  +---+
  |   |
  O   |
 /|   |
      |
      |
=========",
    "  +---+
  |   |
  O   |
  |   |
      |
      |
=========",
    "  +---+
  |   |
  O   |
      |
      |
      |
=========",
    "  +---+
  |   |
      |
      |
      |
      |
=========",
];

/// Drawing for `lives` remaining, or `None` outside `0..=6`.
pub fn gallows(lives: i32) -> Option<&'static str> {
    usize::try_from(lives).ok().and_then(|i| STAGES.get(i).copied())
}
