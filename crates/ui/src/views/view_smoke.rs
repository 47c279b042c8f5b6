use std::sync::Arc;

use quiz_core::model::Catalog;
use services::QuizLoopService;

use crate::views::test_harness::{setup_view_harness, setup_view_harness_with_loop};
use crate::vm::{AUDIO_ERROR_MESSAGE, QUESTION_PROMPT, QuizIntent};

const COMPOSERS: [&str; 5] = [
    "Wolfgang Amadeus Mozart",
    "Antonio Vivaldi",
    "Johann Sebastian Bach",
    "Giuseppe Verdi",
    "Frédéric Chopin",
];

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_first_question() {
    let harness = setup_view_harness(11);
    let html = harness.render();

    assert!(html.contains(QUESTION_PROMPT), "missing prompt in {html}");
    assert!(html.contains("Question 1 of 5"), "missing counter in {html}");
    assert!(html.contains("4 left"), "missing remaining count in {html}");
    assert!(html.contains("Score: 0/0"), "missing score in {html}");
    for composer in COMPOSERS {
        assert!(html.contains(composer), "missing {composer} in {html}");
    }
    assert!(html.contains("<audio"), "missing player in {html}");
    assert!(!html.contains("Fun Fact:"), "feedback shown too early in {html}");
    assert!(!html.contains("Game Over!"), "unexpected modal in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_correct_answer_shows_feedback() {
    let mut harness = setup_view_harness(12);
    let composer = harness.current_composer();

    harness.send(QuizIntent::Select(composer));
    harness.send(QuizIntent::Check);

    let html = harness.render();
    assert!(html.contains("Correct! 🎉"), "missing verdict in {html}");
    assert!(html.contains("Fun Fact:"), "missing trivia in {html}");
    assert!(html.contains("Title:"), "missing title in {html}");
    assert!(html.contains("Score: 1/1"), "missing score in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_wrong_answer_names_composer() {
    let mut harness = setup_view_harness(13);
    let correct = harness.current_composer();
    let wrong = harness.wrong_composer();

    harness.send(QuizIntent::Select(wrong));
    harness.send(QuizIntent::Check);

    let html = harness.render();
    let expected = format!("Oops! The correct answer was {correct}.");
    assert!(html.contains(&expected), "missing reveal in {html}");
    assert!(html.contains("Score: 0/1"), "missing score in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_check_without_selection_is_ignored() {
    let mut harness = setup_view_harness(14);
    let before = harness.session();

    harness.send(QuizIntent::Check);

    assert_eq!(harness.session(), before);
    let html = harness.render();
    assert!(html.contains("Score: 0/0"), "score changed in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_audio_failure_shows_message() {
    let mut harness = setup_view_harness(15);

    harness.send(QuizIntent::AudioFailed);

    let html = harness.render();
    assert!(html.contains(AUDIO_ERROR_MESSAGE), "missing audio error in {html}");
    assert!(!html.contains("<audio"), "player still rendered in {html}");

    harness.send(QuizIntent::Restart);
    let html = harness.render();
    assert!(!html.contains(AUDIO_ERROR_MESSAGE), "audio error survived restart in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_full_game_reaches_game_over_and_restarts() {
    let mut harness = setup_view_harness(16);

    while !harness.session().is_game_over() {
        let composer = harness.current_composer();
        harness.send(QuizIntent::Select(composer));
        harness.send(QuizIntent::Check);
        harness.send(QuizIntent::Next);
    }

    let html = harness.render();
    assert!(html.contains("Game Over!"), "missing modal in {html}");
    assert!(html.contains("Your final score: 5/5"), "missing final score in {html}");
    assert!(html.contains("Play Again"), "missing restart button in {html}");

    harness.send(QuizIntent::Restart);
    let html = harness.render();
    assert!(html.contains("Question 1 of 5"), "restart did not reset in {html}");
    assert!(html.contains("4 left"), "restart did not refill pool in {html}");
    assert!(html.contains("Score: 0/0"), "restart kept score in {html}");
    assert!(!html.contains("Game Over!"), "modal survived restart in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_empty_catalog_opens_on_game_over() {
    let quiz_loop = Arc::new(QuizLoopService::new(Arc::new(Catalog::default())));
    let harness = setup_view_harness_with_loop(quiz_loop);

    let html = harness.render();
    assert!(html.contains("Game Over!"), "missing modal in {html}");
    assert!(html.contains("Your final score: 0/0"), "missing final score in {html}");
    assert!(!html.contains("question-number"), "unexpected counter in {html}");
}
