use serde::{Deserialize, Serialize};

use lm_align::Scoring;

use crate::error::MergeResult;

/// How an absent scalar in an override is compared with the origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AbsentPolicy {
    /// Absent equals absent: an override that leaves a value out where the
    /// origin also left it out changes nothing.
    #[default]
    MatchesOrigin,
    /// An absent override value always counts as a change and writes the
    /// configured default, even when the origin is absent too.
    Overrides,
}

/// Configuration for the record merger.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// Scoring for the global aligner that folds the chain (phase 1).
    pub fold_scoring: Scoring,
    /// Scoring for the extended aligner that reconciles phase 2 content.
    pub reconcile_scoring: Scoring,
    /// Priority written when an override changes it to an absent value.
    pub default_priority: u16,
    /// Ducking volume written when an override changes it to an absent value.
    pub default_ducking_decibel: f32,
    /// Fade duration written when an override changes it to an absent value.
    pub default_fade_duration: f32,
    pub absent_policy: AbsentPolicy,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            fold_scoring: Scoring::GLOBAL_DEFAULT,
            reconcile_scoring: Scoring::EXTENDED_DEFAULT,
            default_priority: 50,
            default_ducking_decibel: 0.0,
            default_fade_duration: 0.0,
            absent_policy: AbsentPolicy::MatchesOrigin,
        }
    }
}

impl MergeConfig {
    /// Parse a TOML document. Missing keys take their default values.
    pub fn from_toml_str(s: &str) -> MergeResult<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Check both scorings.
    pub fn validate(&self) -> MergeResult<()> {
        self.fold_scoring.validate()?;
        self.reconcile_scoring.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MergeError;

    #[test]
    fn default_config() {
        let c = MergeConfig::default();
        assert_eq!(c.fold_scoring, Scoring::GLOBAL_DEFAULT);
        assert_eq!(c.reconcile_scoring, Scoring::EXTENDED_DEFAULT);
        assert_eq!(c.default_priority, 50);
        assert_eq!(c.default_ducking_decibel, 0.0);
        assert_eq!(c.absent_policy, AbsentPolicy::MatchesOrigin);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(MergeConfig::from_toml_str("").unwrap(), MergeConfig::default());
    }

    #[test]
    fn partial_toml_overrides() {
        let c = MergeConfig::from_toml_str(
            r#"
            default_priority = 10
            absent_policy = "overrides"

            [fold_scoring]
            match_score = 2
            gap_score = -5
            "#,
        )
        .unwrap();
        assert_eq!(c.default_priority, 10);
        assert_eq!(c.absent_policy, AbsentPolicy::Overrides);
        assert_eq!(c.fold_scoring, Scoring::new(2, -5).unwrap());
        assert_eq!(c.reconcile_scoring, Scoring::EXTENDED_DEFAULT);
    }

    #[test]
    fn invalid_scoring_is_rejected() {
        let err = MergeConfig::from_toml_str(
            r#"
            [reconcile_scoring]
            match_score = 1
            gap_score = 2
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, MergeError::InvalidScoring(_)));
        assert!(!err.is_precondition_violation());
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = MergeConfig::from_toml_str("default_priority = \"high\"").unwrap_err();
        assert!(matches!(err, MergeError::ConfigParse(_)));
    }
}
