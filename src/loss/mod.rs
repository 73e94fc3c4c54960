//! Ranking loss functions for text-matching models.
//!
//! Both losses consume scores grouped positionally: each run of
//! `1 + neg_num` consecutive instances is one positive followed by its
//! negatives (see [`ScoreGroups`]). Configuration is passed explicitly via
//! [`RankingConfig`].
//!
//! # Usage
//!
//! ```
//! use rankloss::loss::{rank_crossentropy_loss, rank_hinge_loss, RankingConfig};
//! use rankloss::primitives::Vector;
//!
//! let config = RankingConfig::default();
//! let y_true = Vector::from_slice(&[1.0, 0.0, 1.0, 0.0]);
//! let y_pred = Vector::from_slice(&[1.2, 0.1, 0.0, -0.3]);
//!
//! let hinge = rank_hinge_loss(&y_true, &y_pred, &config).unwrap();
//! assert!((hinge - 0.35).abs() < 1e-6);
//!
//! let ce = rank_crossentropy_loss(&y_true, &y_pred, &config).unwrap();
//! assert!(ce > 0.0);
//! ```

mod config;
mod groups;

pub use config::{NegativeAggregation, RankingConfig};
pub use groups::{ScoreGroup, ScoreGroups};

use crate::error::{RankLossError, Result};
use crate::primitives::Vector;

/// Pairwise hinge ranking loss.
///
/// For every group, compares the positive score with the group's
/// aggregated negative score (see [`NegativeAggregation`]):
///
/// ```text
/// L = (1/k) * Σ_groups max(0, margin - s_pos + s_neg)
/// ```
///
/// A group whose positive beats its negative by at least `margin`
/// contributes zero. `y_true` is only checked for shape; the hinge loss
/// depends on the predicted scores alone.
///
/// A NaN score anywhere makes the loss NaN. Infinities follow IEEE
/// arithmetic: a `+inf` positive contributes zero, a `+inf` negative
/// makes the loss `+inf`.
///
/// # Arguments
///
/// * `y_true` - Relevance labels, same length as `y_pred`
/// * `y_pred` - Predicted scores, grouped positive-first
/// * `config` - Margin, group size and negative reduction
///
/// # Errors
///
/// * [`RankLossError::InvalidConfig`] if `config` fails validation
/// * [`RankLossError::DimensionMismatch`] if the two vectors differ in length
/// * [`RankLossError::InvalidInputShape`] if the length is zero or not a
///   multiple of `1 + neg_num`
///
/// # Example
///
/// ```
/// use rankloss::loss::{rank_hinge_loss, RankingConfig};
/// use rankloss::primitives::Vector;
///
/// let y_true = Vector::from_slice(&[1.2, 1.0, 1.0, 1.0]);
/// let y_pred = Vector::from_slice(&[1.2, 0.1, 0.0, -0.3]);
///
/// let config = RankingConfig::new(2.0, 1).unwrap();
/// let loss = rank_hinge_loss(&y_true, &y_pred, &config).unwrap();
/// assert!((loss - 1.3).abs() < 1e-6);
/// ```
pub fn rank_hinge_loss(
    y_true: &Vector<f32>,
    y_pred: &Vector<f32>,
    config: &RankingConfig,
) -> Result<f32> {
    let groups = prepare(y_true, y_pred, config)?;

    let total: f32 = groups
        .iter()
        .map(|g| {
            let negative = config.negatives.reduce(g.negatives());
            hinge(config.margin - g.positive() + negative)
        })
        .sum();
    let loss = total / groups.len() as f32;

    tracing::trace!(groups = groups.len(), loss, "rank hinge loss");
    Ok(loss)
}

/// Listwise softmax cross-entropy ranking loss.
///
/// Applies a softmax over the predicted scores of every group and
/// accumulates the label-weighted negative log-likelihood:
///
/// ```text
/// L = (1/k) * Σ_groups -Σ_i y_i * log(softmax(s)_i)
/// ```
///
/// With labels one-hot at the group's first position this is
/// `-log p(positive)`. The softmax is max-shifted, so large scores do not
/// overflow.
///
/// A NaN or `+inf` score makes the loss NaN. A `-inf` score gives NaN
/// under a zero label and `+inf` under a positive one.
///
/// # Arguments
///
/// * `y_true` - Relevance labels (typically 0/1), same length as `y_pred`
/// * `y_pred` - Raw predicted scores, grouped positive-first
/// * `config` - Group size (`neg_num`)
///
/// # Errors
///
/// Same conditions as [`rank_hinge_loss`].
///
/// # Example
///
/// ```
/// use rankloss::loss::{rank_crossentropy_loss, RankingConfig};
/// use rankloss::primitives::Vector;
///
/// let y_true = Vector::from_slice(&[1.0, 0.0, 0.0]);
/// let y_pred = Vector::from_slice(&[0.0, 0.0, 0.0]);
///
/// let config = RankingConfig::new(1.0, 2).unwrap();
/// let loss = rank_crossentropy_loss(&y_true, &y_pred, &config).unwrap();
/// assert!((loss - 3.0_f32.ln()).abs() < 1e-6);
/// ```
pub fn rank_crossentropy_loss(
    y_true: &Vector<f32>,
    y_pred: &Vector<f32>,
    config: &RankingConfig,
) -> Result<f32> {
    let groups = prepare(y_true, y_pred, config)?;
    let labels = y_true.as_slice().chunks_exact(config.group_size());

    let total: f32 = groups
        .iter()
        .zip(labels)
        .map(|(g, y)| {
            log_softmax(g.scores())
                .iter()
                .zip(y)
                .map(|(log_p, &label)| -label * log_p)
                .sum::<f32>()
        })
        .sum();
    let loss = total / groups.len() as f32;

    tracing::trace!(groups = groups.len(), loss, "rank cross-entropy loss");
    Ok(loss)
}

/// `max(0, x)` that keeps NaN instead of clipping it to zero.
fn hinge(x: f32) -> f32 {
    if x.is_nan() || x > 0.0 {
        x
    } else {
        0.0
    }
}

/// Validates config and shapes shared by both losses.
fn prepare<'a>(
    y_true: &Vector<f32>,
    y_pred: &'a Vector<f32>,
    config: &RankingConfig,
) -> Result<ScoreGroups<'a>> {
    config.validate()?;
    if y_true.len() != y_pred.len() {
        tracing::debug!(
            y_true = y_true.len(),
            y_pred = y_pred.len(),
            "label and score lengths differ"
        );
        return Err(RankLossError::DimensionMismatch {
            expected: y_pred.len(),
            actual: y_true.len(),
        });
    }
    ScoreGroups::new(y_pred.as_slice(), config.group_size())
}

/// Numerically stable softmax over a slice.
///
/// Returns an empty vector for empty input.
///
/// # Example
///
/// ```
/// use rankloss::loss::softmax;
///
/// let p = softmax(&[1000.0, 1000.0]);
/// assert!((p[0] - 0.5).abs() < 1e-6);
/// ```
#[must_use]
pub fn softmax(x: &[f32]) -> Vec<f32> {
    let max_val = x.iter().fold(f32::NEG_INFINITY, |a, &b| a.max(b));
    let exps: Vec<f32> = x.iter().map(|&v| (v - max_val).exp()).collect();
    let sum: f32 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

/// Numerically stable log-softmax over a slice.
///
/// Computed as `x_i - max - ln Σ exp(x_j - max)`, so no probability is
/// formed and no `ln(0)` occurs for finite input.
#[must_use]
pub fn log_softmax(x: &[f32]) -> Vec<f32> {
    let max_val = x.iter().fold(f32::NEG_INFINITY, |a, &b| a.max(b));
    let log_sum = x.iter().map(|&v| (v - max_val).exp()).sum::<f32>().ln();
    x.iter().map(|&v| v - max_val - log_sum).collect()
}

/// Trait for ranking loss functions.
///
/// Implemented by loss objects that carry their own [`RankingConfig`].
///
/// `compute` takes `(y_pred, y_true)`, the reverse of the free functions
/// [`rank_hinge_loss`] and [`rank_crossentropy_loss`], which take
/// `(y_true, y_pred)`.
pub trait RankingLoss {
    /// Computes the loss between predicted scores `y_pred` and labels `y_true`.
    ///
    /// # Errors
    ///
    /// Returns an error when the inputs or the configuration are invalid.
    fn compute(&self, y_pred: &Vector<f32>, y_true: &Vector<f32>) -> Result<f32>;

    /// Returns the name of the loss function.
    fn name(&self) -> &str;
}

/// Hinge ranking loss (struct wrapper).
#[derive(Debug, Clone, Copy, Default)]
pub struct RankHingeLoss {
    config: RankingConfig,
}

impl RankHingeLoss {
    /// Creates a hinge loss bound to `config`.
    ///
    /// # Example
    ///
    /// ```
    /// use rankloss::loss::{RankHingeLoss, RankingConfig, RankingLoss};
    /// use rankloss::primitives::Vector;
    ///
    /// let loss_fn = RankHingeLoss::new(RankingConfig::default());
    /// let y_true = Vector::from_slice(&[1.0, 0.0]);
    /// let y_pred = Vector::from_slice(&[3.0, 0.5]);
    ///
    /// assert_eq!(loss_fn.compute(&y_pred, &y_true).unwrap(), 0.0);
    /// ```
    #[must_use]
    pub fn new(config: RankingConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &RankingConfig {
        &self.config
    }
}

impl RankingLoss for RankHingeLoss {
    fn compute(&self, y_pred: &Vector<f32>, y_true: &Vector<f32>) -> Result<f32> {
        rank_hinge_loss(y_true, y_pred, &self.config)
    }

    fn name(&self) -> &'static str {
        "RankHinge"
    }
}

/// Listwise cross-entropy ranking loss (struct wrapper).
#[derive(Debug, Clone, Copy, Default)]
pub struct RankCrossEntropyLoss {
    config: RankingConfig,
}

impl RankCrossEntropyLoss {
    /// Creates a cross-entropy loss bound to `config`.
    #[must_use]
    pub fn new(config: RankingConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &RankingConfig {
        &self.config
    }
}

impl RankingLoss for RankCrossEntropyLoss {
    fn compute(&self, y_pred: &Vector<f32>, y_true: &Vector<f32>) -> Result<f32> {
        rank_crossentropy_loss(y_true, y_pred, &self.config)
    }

    fn name(&self) -> &'static str {
        "RankCrossEntropy"
    }
}


#[cfg(test)]
mod tests_rank_contract;
