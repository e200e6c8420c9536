use log::debug;
use serde::{Deserialize, Serialize};

use crate::quiz_engine::{
    error::QuizError,
    models::{SessionConfig, MAX_TABLE, MIN_TABLE},
    settings::QuizSettings,
};

/// Non-visual state of the setup screen: the table stepper and the
/// question-count picker.
///
/// The form only produces [`SessionConfig`] values; the engine keeps its own
/// copy once a session starts, so editing the form afterwards has no effect
/// on the running session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupForm {
    table: u32,
    question_count: u32,
    default_table: u32,
    question_choices: Vec<u32>,
}

impl SetupForm {
    pub fn new(settings: &QuizSettings) -> Self {
        SetupForm {
            table: settings.default_table,
            question_count: settings.default_question_count,
            default_table: settings.default_table,
            question_choices: settings.allowed_question_counts.clone(),
        }
    }

    pub fn table(&self) -> u32 {
        self.table
    }

    pub fn question_count(&self) -> u32 {
        self.question_count
    }

    /// Picker segments, in display order.
    pub fn question_choices(&self) -> &[u32] {
        &self.question_choices
    }

    /// Stepper "+"; stays put at the top of the range.
    pub fn increment_table(&mut self) -> u32 {
        self.table = (self.table + 1).min(MAX_TABLE);
        self.table
    }

    /// Stepper "-"; stays put at the bottom of the range.
    pub fn decrement_table(&mut self) -> u32 {
        self.table = self.table.saturating_sub(1).max(MIN_TABLE);
        self.table
    }

    pub fn set_table(&mut self, table: u32) -> Result<(), QuizError> {
        if !(MIN_TABLE..=MAX_TABLE).contains(&table) {
            return Err(QuizError::InvalidTable { table });
        }
        self.table = table;
        Ok(())
    }

    pub fn select_question_count(&mut self, count: u32) -> Result<(), QuizError> {
        if !self.question_choices.contains(&count) {
            return Err(QuizError::InvalidQuestionCount {
                count,
                allowed: self.question_choices.clone(),
            });
        }
        self.question_count = count;
        Ok(())
    }

    pub fn config(&self) -> SessionConfig {
        SessionConfig::new(self.table, self.question_count)
    }

    /// Call on [`SessionEvent::Ended`](crate::quiz_engine::models::SessionEvent::Ended).
    /// The table goes back to its default, the question count is kept.
    pub fn on_session_ended(&mut self) {
        debug!("setup reset: table {} -> {}", self.table, self.default_table);
        self.table = self.default_table;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_from_settings_defaults() {
        let form = SetupForm::new(&QuizSettings::default());
        assert_eq!(form.config(), SessionConfig::new(1, 5));
        assert_eq!(form.question_choices(), &[5, 10, 20]);
    }

    #[test]
    fn stepper_clamps_at_both_ends() {
        let mut form = SetupForm::new(&QuizSettings::default());
        assert_eq!(form.decrement_table(), 1);
        for _ in 0..20 {
            form.increment_table();
        }
        assert_eq!(form.table(), 12);
        assert_eq!(form.decrement_table(), 11);
    }

    #[test]
    fn set_table_rejects_out_of_range() {
        let mut form = SetupForm::new(&QuizSettings::default());
        assert_eq!(form.set_table(0), Err(QuizError::InvalidTable { table: 0 }));
        assert_eq!(form.set_table(13), Err(QuizError::InvalidTable { table: 13 }));
        form.set_table(8).unwrap();
        assert_eq!(form.table(), 8);
    }

    #[test]
    fn picker_only_accepts_offered_counts() {
        let mut form = SetupForm::new(&QuizSettings::default());
        form.select_question_count(20).unwrap();
        assert_eq!(form.question_count(), 20);
        assert!(form.select_question_count(15).is_err());
        assert_eq!(form.question_count(), 20);
    }

    #[test]
    fn session_end_resets_table_but_keeps_count() {
        let mut form = SetupForm::new(&QuizSettings::default());
        form.set_table(9).unwrap();
        form.select_question_count(10).unwrap();
        form.on_session_ended();
        assert_eq!(form.config(), SessionConfig::new(1, 10));
    }
}
