//! Positional grouping of scored instances.
//!
//! A score vector of length `k * group_size` holds `k` groups laid out back
//! to back. Index 0 of every group is the positive instance; the remaining
//! `group_size - 1` entries are its negatives.

use crate::error::{RankLossError, Result};

/// Validated view of a score slice split into equal-sized groups.
///
/// # Examples
///
/// ```
/// use rankloss::loss::ScoreGroups;
///
/// let scores = [1.2, 0.1, -0.5, 0.0, -2.0, -0.3];
/// let groups = ScoreGroups::new(&scores, 3).unwrap();
/// assert_eq!(groups.len(), 2);
///
/// let second = groups.iter().nth(1).unwrap();
/// assert_eq!(second.positive(), 0.0);
/// assert_eq!(second.negatives(), &[-2.0, -0.3]);
///
/// assert!(ScoreGroups::new(&scores, 4).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ScoreGroups<'a> {
    scores: &'a [f32],
    group_size: usize,
}

impl<'a> ScoreGroups<'a> {
    /// Splits `scores` into groups of `group_size`.
    ///
    /// # Errors
    ///
    /// Returns [`RankLossError::InvalidInputShape`] if `scores` is empty or
    /// its length is not a multiple of `group_size`, and
    /// [`RankLossError::InvalidConfig`] if `group_size < 2`.
    pub fn new(scores: &'a [f32], group_size: usize) -> Result<Self> {
        if group_size < 2 {
            return Err(RankLossError::invalid_config(
                "group_size",
                group_size,
                ">= 2 (one positive and at least one negative)",
            ));
        }
        if scores.is_empty() || scores.len() % group_size != 0 {
            tracing::debug!(
                len = scores.len(),
                group_size,
                "score vector does not split into whole groups"
            );
            return Err(RankLossError::InvalidInputShape {
                len: scores.len(),
                group_size,
            });
        }
        Ok(Self { scores, group_size })
    }

    /// Number of groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len() / self.group_size
    }

    /// Always false: construction rejects empty input.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Instances per group.
    #[must_use]
    pub fn group_size(&self) -> usize {
        self.group_size
    }

    /// Iterates over the groups in order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = ScoreGroup<'a>> + 'a {
        self.scores
            .chunks_exact(self.group_size)
            .map(|scores| ScoreGroup { scores })
    }
}

/// One positive instance followed by its negatives.
#[derive(Debug, Clone, Copy)]
pub struct ScoreGroup<'a> {
    scores: &'a [f32],
}

impl<'a> ScoreGroup<'a> {
    /// Score of the positive instance.
    #[must_use]
    pub fn positive(&self) -> f32 {
        self.scores[0]
    }

    /// Scores of the negative instances.
    #[must_use]
    pub fn negatives(&self) -> &'a [f32] {
        &self.scores[1..]
    }

    /// All scores of the group, positive first.
    #[must_use]
    pub fn scores(&self) -> &'a [f32] {
        self.scores
    }
}
