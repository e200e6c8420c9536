//! Core quiz engine — answer generation, session state machine, setup state.
//!
//! ## Module overview
//!
//! | Module     | Purpose |
//! |------------|---------|
//! | `models`   | Shared types: config, question, choices, snapshots, events |
//! | `choices`  | Multiplier draw and the three-button answer generator |
//! | `engine`   | `QuizEngine` — the `Configuring -> Active -> Completed` state machine |
//! | `setup`    | Table stepper / question-count picker state |
//! | `view`     | Strings and button highlights for the question screen |
//! | `settings` | `QuizSettings`, JSON-loadable with stock defaults |
//! | `error`    | `QuizError` contract violations |

pub mod choices;
pub mod engine;
pub mod error;
pub mod models;
pub mod settings;
pub mod setup;
pub mod view;

pub use choices::{draw_multiplier, generate_choices};
pub use engine::QuizEngine;
pub use error::QuizError;
pub use models::{
    Advance, AnswerChoices, AnswerResult, Question, QuestionView, RoundStep, SessionConfig,
    SessionEvent, SessionPhase, SessionSummary,
};
pub use settings::QuizSettings;
pub use setup::SetupForm;
