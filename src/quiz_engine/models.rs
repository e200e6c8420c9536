use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Domain bounds
// ---------------------------------------------------------------------------

/// Smallest times table that can be practised.
pub const MIN_TABLE: u32 = 1;
/// Largest times table that can be practised.
pub const MAX_TABLE: u32 = 12;
/// Multipliers are drawn from `1..=MAX_MULTIPLIER`.
pub const MAX_MULTIPLIER: u32 = 12;
/// Number of buttons shown per question.
pub const CHOICE_COUNT: usize = 3;

// ---------------------------------------------------------------------------
// Configuration / question primitives
// ---------------------------------------------------------------------------

/// What the setup screen hands to the engine on "start".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub table: u32,
    pub question_count: u32,
}

impl SessionConfig {
    pub fn new(table: u32, question_count: u32) -> Self {
        SessionConfig { table, question_count }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub table: u32,
    pub multiplier: u32,
}

impl Question {
    pub fn correct_answer(self) -> u32 {
        self.table * self.multiplier
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.multiplier, self.table)
    }
}

/// Exactly three pairwise-distinct candidate answers, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerChoices([u32; CHOICE_COUNT]);

impl AnswerChoices {
    /// Callers must uphold distinctness; only the choice generator builds these.
    pub(crate) fn from_array(values: [u32; CHOICE_COUNT]) -> Self {
        AnswerChoices(values)
    }

    pub fn contains(&self, value: u32) -> bool {
        self.0.contains(&value)
    }

    pub fn as_array(&self) -> [u32; CHOICE_COUNT] {
        self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }
}

impl fmt::Display for AnswerChoices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{a} / {b} / {c}")
    }
}

// ---------------------------------------------------------------------------
// Session snapshots
// ---------------------------------------------------------------------------

/// Where the current round is while a session is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundStep {
    AwaitingAnswer,
    /// An answer was submitted and its feedback has not been acknowledged yet.
    ShowingFeedback,
    FeedbackAcknowledged,
}

impl fmt::Display for RoundStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundStep::AwaitingAnswer       => write!(f, "awaiting an answer"),
            RoundStep::ShowingFeedback      => write!(f, "showing feedback"),
            RoundStep::FeedbackAcknowledged => write!(f, "feedback acknowledged"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    Configuring,
    Active {
        question_index: u32,
        score: u32,
        step: RoundStep,
    },
    Completed,
}

impl SessionPhase {
    pub fn is_active(self) -> bool {
        matches!(self, SessionPhase::Active { .. })
    }
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionPhase::Configuring => write!(f, "configuring"),
            SessionPhase::Active { question_index, score, step } => write!(
                f,
                "active (question {question_index}, score {score}, {step})"
            ),
            SessionPhase::Completed => write!(f, "completed"),
        }
    }
}

/// Everything the question screen needs to draw the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionView {
    pub table: u32,
    pub multiplier: u32,
    pub choices: AnswerChoices,
    pub question_index: u32,
    pub question_count: u32,
}

impl QuestionView {
    pub fn question(&self) -> Question {
        Question { table: self.table, multiplier: self.multiplier }
    }
}

/// Outcome of a single `submit_answer` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerResult {
    pub correct: bool,
    pub selected: u32,
    pub correct_answer: u32,
    pub score: u32,
    /// Already incremented past the question that was just answered.
    pub question_index: u32,
    pub question_count: u32,
    pub is_session_over: bool,
}

/// Reported once, when the last question's feedback is advanced past.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub final_score: u32,
    pub question_count: u32,
}

/// Result of `advance()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Advance {
    NextQuestion(QuestionView),
    Completed(SessionSummary),
}

/// Transition notifications for the UI layer (animations, alerts, screen swaps).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    Started(QuestionView),
    Answered(AnswerResult),
    Advanced(QuestionView),
    Completed(SessionSummary),
    /// The setup screen should be shown again.
    Ended,
}
