//! Text and highlight state for the question screen.
//!
//! The engine only hands out numbers. These helpers turn its snapshots into
//! the strings and button colours the question screen shows, so a renderer
//! never has to re-derive correctness itself.

use serde::{Deserialize, Serialize};

use crate::quiz_engine::models::{AnswerResult, QuestionView, SessionSummary};

/// Confirmation shown before `quit()` is forwarded to the engine.
pub const QUIT_CONFIRMATION: &str = "Are you sure you want to quit?";

/// How one answer button should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChoiceHighlight {
    /// Nothing selected, or this button was not the one pressed.
    Neutral,
    Correct,
    Wrong,
}

/// "The 7 Times Tables"
pub fn heading(view: &QuestionView) -> String {
    format!("The {} Times Tables", view.table)
}

/// "Question 2 of 10"
pub fn progress(view: &QuestionView) -> String {
    format!("Question {} of {}", view.question_index, view.question_count)
}

/// "What is 4 x 7?"
pub fn prompt(view: &QuestionView) -> String {
    format!("What is {}?", view.question())
}

/// Highlight for every button, in display order.
///
/// Only the pressed button changes colour; the correct one is not revealed
/// when the user picks wrong.
pub fn highlights(view: &QuestionView, selected: Option<u32>) -> Vec<(u32, ChoiceHighlight)> {
    let correct = view.question().correct_answer();
    view.choices
        .iter()
        .map(|choice| {
            let highlight = match selected {
                Some(s) if s == choice && choice == correct => ChoiceHighlight::Correct,
                Some(s) if s == choice => ChoiceHighlight::Wrong,
                _ => ChoiceHighlight::Neutral,
            };
            (choice, highlight)
        })
        .collect()
}

pub fn feedback_title(result: &AnswerResult) -> String {
    if result.correct {
        "Correct".to_string()
    } else {
        format!("Wrong, the answer is {}", result.correct_answer)
    }
}

pub fn feedback_message(result: &AnswerResult) -> String {
    if result.is_session_over {
        format!("Well done, that's the end of the game. You scored {}", result.score)
    } else {
        format!("Your Score is {}", result.score)
    }
}

/// Label of the single button on the feedback alert.
pub fn feedback_action(result: &AnswerResult) -> &'static str {
    if result.is_session_over { "New Game" } else { "Continue" }
}

/// "5 / 10"
pub fn summary_line(summary: &SessionSummary) -> String {
    format!("{} / {}", summary.final_score, summary.question_count)
}
