//! End-to-end games against the embedded word lists

use wordle_unlimited::challenge::{challenge_link, pick_target, token_from_query};
use wordle_unlimited::core::{LetterState, ROWS, Word};
use wordle_unlimited::dictionary::Dictionary;
use wordle_unlimited::game::{
    GameState, Input, InputController, InputOutcome, InputStatus, Outcome, SubmitOutcome,
};
use wordle_unlimited::output::{game_result, share_message};

fn controller_for<'a>(dictionary: &'a Dictionary, target: &str) -> InputController<'a> {
    InputController::new(GameState::new(dictionary, Word::new(target).unwrap()))
}

fn play(controller: &mut InputController, word: &str) -> InputOutcome {
    for ch in word.chars() {
        controller.handle(Input::Letter(ch));
    }
    controller.handle(Input::Enter)
}

#[test]
fn solving_on_the_first_row() {
    let dictionary = Dictionary::embedded().unwrap();
    let mut controller = controller_for(&dictionary, "crane");

    let outcome = play(&mut controller, "crane");
    assert!(matches!(
        outcome,
        InputOutcome::Submitted(SubmitOutcome::Won(feedback)) if feedback.is_perfect()
    ));

    let game = controller.game().unwrap();
    assert_eq!(game.outcome(), Some(Outcome::Won));
    assert_eq!(game.score(), Some(1));
    assert_eq!(controller.status(), InputStatus::Locked);
    assert_eq!(
        game_result("Wordle Unlimited", game),
        "Wordle Unlimited 1/6\n\n🟩🟩🟩🟩🟩\n"
    );

    // Locked: further input is ignored
    assert_eq!(controller.handle(Input::Letter('a')), InputOutcome::Ignored);
}

#[test]
fn unknown_word_clears_the_row() {
    let dictionary = Dictionary::embedded().unwrap();
    let mut controller = controller_for(&dictionary, "crane");

    assert_eq!(
        play(&mut controller, "xxxxx"),
        InputOutcome::Submitted(SubmitOutcome::Rejected)
    );

    let game = controller.game().unwrap();
    assert_eq!(game.grid().row(0).text(), "");
    assert_eq!(game.cursor().row(), 0);
    assert_eq!(game.cursor().col(), 0);
    assert_eq!(controller.status(), InputStatus::AcceptingInput);
}

#[test]
fn duplicate_letters_follow_target_counts() {
    let dictionary = Dictionary::embedded().unwrap();
    let mut controller = controller_for(&dictionary, "allow");

    play(&mut controller, "llama");
    let game = controller.game().unwrap();
    let states: Vec<LetterState> = game
        .grid()
        .row(0)
        .cells()
        .iter()
        .map(|cell| cell.state())
        .collect();
    assert_eq!(
        states,
        [
            LetterState::WrongPosition,
            LetterState::Correct,
            LetterState::WrongPosition,
            LetterState::Incorrect,
            LetterState::Incorrect,
        ]
    );
    assert_eq!(game.letter_state('L'), LetterState::Correct);
    assert_eq!(game.letter_state('M'), LetterState::Incorrect);
}

#[test]
fn six_misses_lose_the_game() {
    let dictionary = Dictionary::embedded().unwrap();
    let mut controller = controller_for(&dictionary, "crane");

    for row in 0..ROWS {
        let outcome = play(&mut controller, "slate");
        if row + 1 < ROWS {
            assert!(matches!(
                outcome,
                InputOutcome::Submitted(SubmitOutcome::Scored(_))
            ));
        } else {
            assert!(matches!(
                outcome,
                InputOutcome::Submitted(SubmitOutcome::Lost(_))
            ));
        }
    }

    let game = controller.game().unwrap();
    assert!(game.is_exhausted());
    assert_eq!(game.score(), Some(ROWS));
    assert_eq!(game_result("W", game).lines().count(), 2 + ROWS);
}

#[test]
fn challenge_link_round_trips_into_a_game() {
    let dictionary = Dictionary::embedded().unwrap();
    let link = challenge_link("https://example.com/play", "robot");

    let token = token_from_query(&link);
    let target = pick_target(token, &dictionary, &mut rand::rng());
    assert_eq!(target.text(), "robot");

    let mut controller = InputController::new(GameState::new(&dictionary, target));
    play(&mut controller, "floor");
    play(&mut controller, "robot");

    let game = controller.game().unwrap();
    assert!(game.is_completed());
    let shared = share_message("Wordle Unlimited", game, "https://example.com/play");
    assert!(shared.starts_with("Wordle Unlimited 2/6\n\n"));
    assert!(shared.ends_with(&format!("Try and beat my score: {link}")));
}

#[test]
fn bad_challenge_falls_back_to_random_target() {
    let dictionary = Dictionary::embedded().unwrap();
    let target = pick_target(Some("!!not-base64!!"), &dictionary, &mut rand::rng());
    assert!(dictionary.is_target(&target));
}

#[test]
fn new_game_unlocks_the_controller() {
    let dictionary = Dictionary::embedded().unwrap();
    let mut controller = controller_for(&dictionary, "crane");
    play(&mut controller, "crane");
    assert_eq!(controller.status(), InputStatus::Locked);

    controller.new_game(&mut rand::rng());
    let game = controller.game().unwrap();
    assert_eq!(controller.status(), InputStatus::AcceptingInput);
    assert_eq!(game.scored_rows(), 0);
    assert!(dictionary.is_target(game.target()));
}
