//! # times_table_quiz
//!
//! An offline engine for a multiple-choice times-table practice quiz.
//!
//! A user picks a table (1–12) and a question count (5, 10 or 20 by default),
//! then answers questions of the form "What is 4 x 7?" by choosing one of
//! three buttons. The engine draws the multiplier, builds two plausible
//! distractors, keeps score and reports a summary at the end.
//!
//! ## How it works
//!
//! 1. Build [`QuizSettings`] (or load them with [`QuizSettings::from_json`])
//!    and create a [`QuizEngine`].
//! 2. Keep a [`SetupForm`] for the setup screen and call
//!    [`QuizEngine::start`] with its [`SessionConfig`].
//! 3. For each question: [`QuizEngine::submit_answer`], show the feedback,
//!    [`QuizEngine::acknowledge`], then [`QuizEngine::advance`]. The last
//!    advance returns a [`SessionSummary`].
//! 4. Drain [`SessionEvent`]s to drive animations and screen swaps. On
//!    `SessionEvent::Ended` call [`SetupForm::on_session_ended`].
//!
//! ## Key features
//!
//! - **Deterministic**: set `rng_seed` (or inject any `rand::Rng` via
//!   [`QuizEngine::with_rng`]) to replay the exact same questions.
//! - **Checked protocol**: calls made out of order return
//!   [`QuizError::ProtocolViolation`] instead of corrupting the score.
//!
//! ## Quick start
//!
//! ```rust
//! use times_table_quiz::{Advance, QuizEngine, QuizSettings, SetupForm};
//!
//! let settings = QuizSettings::default().with_seed(42);
//! let mut form = SetupForm::new(&settings);
//! form.set_table(5).unwrap();
//!
//! let mut engine = QuizEngine::new(settings).unwrap();
//! let mut view = engine.start(form.config()).unwrap();
//! let summary = loop {
//!     let answer = view.question().correct_answer();
//!     engine.submit_answer(answer).unwrap();
//!     engine.acknowledge().unwrap();
//!     match engine.advance().unwrap() {
//!         Advance::NextQuestion(next) => view = next,
//!         Advance::Completed(summary) => break summary,
//!     }
//! };
//! assert_eq!(summary.final_score, 5);
//! ```

pub mod quiz_engine;

// Convenience re-exports so callers can use `times_table_quiz::QuizEngine`
// directly without reaching into `quiz_engine::`.
pub use quiz_engine::{
    generate_choices, view, Advance, AnswerChoices, AnswerResult, Question, QuestionView,
    QuizEngine, QuizError, QuizSettings, RoundStep, SessionConfig, SessionEvent, SessionPhase,
    SessionSummary, SetupForm,
};
