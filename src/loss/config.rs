//! Ranking loss configuration.

use serde::{Deserialize, Serialize};

use crate::error::{RankLossError, Result};

/// How the negatives of one group reduce to a single score for the hinge loss.
///
/// Irrelevant when `neg_num == 1`: both variants return the lone negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NegativeAggregation {
    /// Highest-scoring (hardest) negative of the group.
    #[default]
    Max,
    /// Arithmetic mean of the group's negatives.
    Mean,
}

impl NegativeAggregation {
    /// Reduces a non-empty slice of negative scores. A NaN negative yields NaN.
    pub(crate) fn reduce(self, negatives: &[f32]) -> f32 {
        match self {
            Self::Max => negatives.iter().fold(f32::NEG_INFINITY, |a, &b| {
                if a.is_nan() || b.is_nan() {
                    f32::NAN
                } else {
                    a.max(b)
                }
            }),
            Self::Mean => negatives.iter().sum::<f32>() / negatives.len() as f32,
        }
    }
}

/// Shared configuration of the ranking losses.
///
/// Scores are grouped positionally: every run of `1 + neg_num` consecutive
/// instances holds the positive at index 0 followed by `neg_num` negatives.
///
/// # Examples
///
/// ```
/// use rankloss::loss::RankingConfig;
///
/// let config = RankingConfig::new(2.0, 3).unwrap();
/// assert_eq!(config.group_size(), 4);
///
/// assert!(RankingConfig::new(-1.0, 1).is_err());
/// assert!(RankingConfig::new(1.0, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Minimum required gap between positive and negative scores.
    pub margin: f32,
    /// Number of negatives grouped with each positive.
    pub neg_num: usize,
    /// Negative reduction used by the hinge loss.
    pub negatives: NegativeAggregation,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            margin: 1.0,
            neg_num: 1,
            negatives: NegativeAggregation::default(),
        }
    }
}

impl RankingConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RankLossError::InvalidConfig`] if `margin` is negative or
    /// not finite, or if `neg_num` is zero or so large that `1 + neg_num`
    /// overflows.
    pub fn new(margin: f32, neg_num: usize) -> Result<Self> {
        let config = Self {
            margin,
            neg_num,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Sets the margin.
    #[must_use]
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    /// Sets the number of negatives per group.
    #[must_use]
    pub fn with_neg_num(mut self, neg_num: usize) -> Self {
        self.neg_num = neg_num;
        self
    }

    /// Sets the hinge loss negative reduction.
    #[must_use]
    pub fn with_negatives(mut self, negatives: NegativeAggregation) -> Self {
        self.negatives = negatives;
        self
    }

    /// Number of instances per group (`1 + neg_num`).
    ///
    /// Saturates at `usize::MAX`; [`validate`](Self::validate) rejects a
    /// `neg_num` for which the true size does not fit.
    #[must_use]
    pub fn group_size(&self) -> usize {
        self.neg_num.saturating_add(1)
    }

    /// Checks the configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`RankLossError::InvalidConfig`] naming the first violated field.
    pub fn validate(&self) -> Result<()> {
        if !self.margin.is_finite() || self.margin < 0.0 {
            tracing::debug!(margin = self.margin, "rejecting ranking config");
            return Err(RankLossError::invalid_config(
                "margin",
                self.margin,
                "a finite value >= 0",
            ));
        }
        if self.neg_num < 1 || self.neg_num.checked_add(1).is_none() {
            tracing::debug!(neg_num = self.neg_num, "rejecting ranking config");
            return Err(RankLossError::invalid_config(
                "neg_num",
                self.neg_num,
                ">= 1 and < usize::MAX",
            ));
        }
        Ok(())
    }

    /// Parses a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`RankLossError::Serialization`] on malformed JSON and
    /// [`RankLossError::InvalidConfig`] if the parsed values are invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use rankloss::loss::{NegativeAggregation, RankingConfig};
    ///
    /// let config = RankingConfig::from_json(r#"{"neg_num": 4, "negatives": "mean"}"#).unwrap();
    /// assert_eq!(config.neg_num, 4);
    /// assert_eq!(config.margin, 1.0);
    /// assert_eq!(config.negatives, NegativeAggregation::Mean);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration to JSON.
    ///
    /// # Errors
    ///
    /// Returns [`RankLossError::Serialization`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
