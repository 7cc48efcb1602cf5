use serde::{Deserialize, Serialize};

use crate::error::{AlignError, AlignResult};

/// Match reward and gap penalty for an alignment.
///
/// Equal elements score `+match_score`, unequal elements `-match_score`, and
/// every gap `gap_score`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoring {
    pub match_score: i32,
    pub gap_score: i32,
}

impl Scoring {
    /// Scoring used to fold adjacent overrides with the global aligner.
    pub const GLOBAL_DEFAULT: Self = Self {
        match_score: 1,
        gap_score: -3,
    };

    /// Scoring used with the extended aligner.
    pub const EXTENDED_DEFAULT: Self = Self {
        match_score: 1,
        gap_score: -2,
    };

    /// Create a validated scoring.
    pub fn new(match_score: i32, gap_score: i32) -> AlignResult<Self> {
        let scoring = Self {
            match_score,
            gap_score,
        };
        scoring.validate()?;
        Ok(scoring)
    }

    /// Check `match_score > 0` and `gap_score < 0`.
    pub fn validate(&self) -> AlignResult<()> {
        if self.match_score <= 0 || self.gap_score >= 0 {
            return Err(AlignError::InvalidScoring {
                match_score: self.match_score,
                gap_score: self.gap_score,
            });
        }
        Ok(())
    }

    #[inline]
    pub(crate) fn similarity<T: PartialEq>(&self, left: &T, right: &T) -> i64 {
        let score = i64::from(self.match_score);
        if left == right {
            score
        } else {
            -score
        }
    }

    #[inline]
    pub(crate) fn gap(&self) -> i64 {
        i64::from(self.gap_score)
    }
}

/// Which alignment algorithm to run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignMode {
    /// Needleman-Wunsch over both full sequences.
    #[default]
    Global,
    /// Best local region, with head and tail forced onto straight lines.
    Extended,
}
