use std::io::Cursor;
use std::time::Duration;

use ahorcado::core::engine::Finished;
use ahorcado::core::terminal::TerminalContext;
use ahorcado::games::hangman::HangmanState;
use ahorcado::{run_game, GameConfig, GameStatus};

fn quiet_config() -> GameConfig {
    GameConfig {
        pause: Duration::ZERO,
        color: false,
        ..GameConfig::default()
    }
}

fn play(config: &GameConfig, word: &str, input: &str) -> (anyhow::Result<Finished<HangmanState>>, String) {
    let mut input = Cursor::new(input.to_string());
    let mut ctx = TerminalContext::new(Vec::new(), config.color);
    let result = run_game(config, word, &mut input, &mut ctx);
    let output = String::from_utf8(ctx.into_inner()).unwrap();
    (result, output)
}

#[test]
fn guessing_both_letters_wins() {
    let (result, out) = play(&quiet_config(), "go", "Ana\ng\no\n");
    let finished = result.unwrap();

    assert_eq!(finished.status, GameStatus::Won);
    assert_eq!(finished.state.lives(), 6);
    assert!(out.contains("Hello, Ana. Guess the word!"));
    assert!(out.contains("CONGRATULATIONS, Ana! You guessed the word: go"));
    assert!(!out.contains("ran out of lives"));
}

#[test]
fn six_wrong_letters_lose_and_reveal_the_word() {
    let (result, out) = play(&quiet_config(), "go", "Ana\na\nb\nc\nd\ne\nf\n");
    let finished = result.unwrap();

    assert_eq!(finished.status, GameStatus::Lost);
    assert_eq!(finished.state.lives(), 0);
    assert_eq!(finished.state.failed(), &['a', 'b', 'c', 'd', 'e', 'f']);
    assert!(out.contains("Oh no, Ana! You ran out of lives."));
    assert!(out.contains("The word was: go"));
    assert!(!out.contains("CONGRATULATIONS"));
}

#[test]
fn repeating_a_wrong_letter_costs_one_life() {
    let (result, out) = play(&quiet_config(), "go", "Ana\nx\nx\nX\ng\no\n");
    let finished = result.unwrap();

    assert_eq!(finished.status, GameStatus::Won);
    assert_eq!(finished.state.lives(), 5);
    assert_eq!(out.matches("already tried 'x'").count(), 2);
}

#[test]
fn repeating_a_correct_letter_costs_nothing() {
    let (result, out) = play(&quiet_config(), "go", "Ana\ng\ng\no\n");
    let finished = result.unwrap();

    assert_eq!(finished.state.lives(), 6);
    assert_eq!(finished.state.guessed().len(), 2);
    assert!(out.contains("You already guessed 'g'"));
}

#[test]
fn empty_lines_are_reprompted_without_penalty() {
    let (result, out) = play(&quiet_config(), "go", "Ana\n\n   \ng\no\n");
    let finished = result.unwrap();

    assert_eq!(finished.status, GameStatus::Won);
    assert_eq!(finished.state.lives(), 6);
    assert_eq!(out.matches("You didn't enter anything. Try again.").count(), 2);
}

#[test]
fn only_the_first_character_of_a_line_counts() {
    let (result, _) = play(&quiet_config(), "go", "Ana\ngxyz\noops\n");
    let finished = result.unwrap();

    assert_eq!(finished.status, GameStatus::Won);
    assert!(finished.state.failed().is_empty());
}

#[test]
fn configured_name_skips_the_prompt() {
    let config = GameConfig {
        player_name: Some("Bo".to_string()),
        ..quiet_config()
    };
    let (result, out) = play(&config, "go", "g\no\n");

    assert_eq!(result.unwrap().status, GameStatus::Won);
    assert!(!out.contains("Please enter your name"));
    assert!(out.contains("CONGRATULATIONS, Bo!"));
}

#[test]
fn each_turn_shows_the_board_before_the_prompt() {
    let (result, out) = play(&quiet_config(), "go", "Ana\nz\ng\no\n");
    result.unwrap();

    let first_board = out.find("Word: _ _ ").unwrap();
    let first_prompt = out.find("Enter a letter: ").unwrap();
    assert!(first_board < first_prompt);
    assert!(out.contains("Lives left: 5"));
    assert!(out.contains("Wrong letters: z"));
    assert!(out.contains("Word: g _ "));
}

#[test]
fn closed_input_mid_game_is_an_error() {
    let (result, _) = play(&quiet_config(), "go", "Ana\ng\n");
    let err = result.unwrap_err();
    assert!(err.to_string().contains("input closed"));
}

#[test]
fn closed_input_before_name_is_an_error() {
    let (result, _) = play(&quiet_config(), "go", "");
    assert!(result.is_err());
}
