use thiserror::Error;

use crate::quiz_engine::models::SessionPhase;

/// Contract violations raised by the quiz engine and its helpers.
///
/// None of these are transient: they mean the caller broke the engine's
/// contract and must not be retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("times table {table} is outside 1..=12")]
    InvalidTable { table: u32 },

    #[error("multiplier {multiplier} is outside 1..=12")]
    InvalidMultiplier { multiplier: u32 },

    #[error("question count {count} is not one of {allowed:?}")]
    InvalidQuestionCount { count: u32, allowed: Vec<u32> },

    #[error("answer {choice} is not one of the offered choices {offered:?}")]
    AnswerNotOffered { choice: u32, offered: [u32; 3] },

    #[error("`{operation}` is not valid while {phase}")]
    ProtocolViolation {
        operation: &'static str,
        phase: SessionPhase,
    },

    #[error("choice pool for table {table} has only {available} distractors")]
    ChoicePoolExhausted { table: u32, available: usize },

    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    #[error("could not parse settings: {0}")]
    SettingsParse(String),
}

impl From<serde_json::Error> for QuizError {
    fn from(err: serde_json::Error) -> Self {
        QuizError::SettingsParse(err.to_string())
    }
}
