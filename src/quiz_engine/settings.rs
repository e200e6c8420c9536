use std::time::Duration;
use serde::{Deserialize, Serialize};

use crate::quiz_engine::{
    error::QuizError,
    models::{SessionConfig, MAX_TABLE, MIN_TABLE},
};

/// Engine and setup-screen configuration.
///
/// Every field has a default matching the stock app, so a host can ship a
/// partial JSON document (or none at all).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizSettings {
    /// Values offered by the question-count picker, in display order.
    pub allowed_question_counts: Vec<u32>,
    /// Table preselected on the setup screen and restored when a session ends.
    pub default_table: u32,
    pub default_question_count: u32,
    /// `Some(seed)` makes every session reproducible; `None` uses entropy.
    pub rng_seed: Option<u64>,
    /// Cosmetic pause between pressing "Go" and showing the first question.
    /// The engine never waits on it.
    pub start_delay_ms: u64,
}

impl Default for QuizSettings {
    fn default() -> Self {
        QuizSettings {
            allowed_question_counts: vec![5, 10, 20],
            default_table: 1,
            default_question_count: 5,
            rng_seed: None,
            start_delay_ms: 1000,
        }
    }
}

impl QuizSettings {
    /// Parse and validate settings from JSON.
    pub fn from_json(json: &str) -> Result<Self, QuizError> {
        let settings: QuizSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn start_delay(&self) -> Duration {
        Duration::from_millis(self.start_delay_ms)
    }

    pub fn validate(&self) -> Result<(), QuizError> {
        if self.allowed_question_counts.is_empty() {
            return Err(QuizError::InvalidSettings(
                "allowed_question_counts must not be empty".into(),
            ));
        }
        if self.allowed_question_counts.contains(&0) {
            return Err(QuizError::InvalidSettings(
                "allowed_question_counts must be positive".into(),
            ));
        }
        if !(MIN_TABLE..=MAX_TABLE).contains(&self.default_table) {
            return Err(QuizError::InvalidSettings(format!(
                "default_table {} is outside {MIN_TABLE}..={MAX_TABLE}",
                self.default_table
            )));
        }
        if !self.allowed_question_counts.contains(&self.default_question_count) {
            return Err(QuizError::InvalidSettings(format!(
                "default_question_count {} is not one of {:?}",
                self.default_question_count, self.allowed_question_counts
            )));
        }
        Ok(())
    }

    /// Check a session config against these settings.
    pub fn check_config(&self, config: &SessionConfig) -> Result<(), QuizError> {
        if !(MIN_TABLE..=MAX_TABLE).contains(&config.table) {
            return Err(QuizError::InvalidTable { table: config.table });
        }
        if !self.allowed_question_counts.contains(&config.question_count) {
            return Err(QuizError::InvalidQuestionCount {
                count: config.question_count,
                allowed: self.allowed_question_counts.clone(),
            });
        }
        Ok(())
    }

    /// The config the setup screen shows before the user touches anything.
    pub fn default_config(&self) -> SessionConfig {
        SessionConfig::new(self.default_table, self.default_question_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_app() {
        let s = QuizSettings::default();
        assert_eq!(s.allowed_question_counts, vec![5, 10, 20]);
        assert_eq!(s.default_config(), SessionConfig::new(1, 5));
        assert_eq!(s.start_delay(), Duration::from_secs(1));
        assert!(s.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let s = QuizSettings::from_json(r#"{ "rng_seed": 42, "start_delay_ms": 0 }"#).unwrap();
        assert_eq!(s.rng_seed, Some(42));
        assert_eq!(s.start_delay(), Duration::ZERO);
        assert_eq!(s.allowed_question_counts, vec![5, 10, 20]);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = QuizSettings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, QuizError::SettingsParse(_)), "got {err:?}");
    }

    #[test]
    fn default_count_must_be_offered() {
        let err = QuizSettings::from_json(
            r#"{ "allowed_question_counts": [3, 6], "default_question_count": 5 }"#,
        )
        .unwrap_err();
        assert!(matches!(err, QuizError::InvalidSettings(_)), "got {err:?}");
    }

    #[test]
    fn empty_or_zero_counts_are_rejected() {
        let mut s = QuizSettings::default();
        s.allowed_question_counts.clear();
        assert!(s.validate().is_err());

        let mut s = QuizSettings::default();
        s.allowed_question_counts.push(0);
        assert!(s.validate().is_err());
    }

    #[test]
    fn check_config_enforces_table_and_count_domains() {
        let s = QuizSettings::default();
        assert!(s.check_config(&SessionConfig::new(12, 20)).is_ok());
        assert_eq!(
            s.check_config(&SessionConfig::new(0, 5)),
            Err(QuizError::InvalidTable { table: 0 })
        );
        assert_eq!(
            s.check_config(&SessionConfig::new(3, 7)),
            Err(QuizError::InvalidQuestionCount { count: 7, allowed: vec![5, 10, 20] })
        );
    }
}
