//! Built-in dictionary and random word selection.

use rand::seq::IndexedRandom;
use rand::Rng;

pub const WORDS: &[&str] = &[
    "golang",
    "programacion",
    "computadora",
    "desarrollo",
    "teclado",
    "algoritmo",
    "variable",
    "funcion",
    "paquete",
    "interfaz",
    "estructura",
    "puntero",
];

/// Pick a word uniformly at random from [`WORDS`] with the process-wide generator.
///
/// `rand::rng()` is seeded from OS entropy once per thread and reused for
/// every later draw, so successive runs differ without reseeding per call.
pub fn select_word() -> &'static str {
    select_word_with(&mut rand::rng())
}

/// Pick a word with a caller-supplied generator (seeded runs, tests).
pub fn select_word_with<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    // WORDS is a non-empty const
    WORDS.choose(rng).copied().unwrap_or(WORDS[0])
}
