//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use rankloss::prelude::*;
//! ```

pub use crate::error::{RankLossError, Result};
pub use crate::loss::{
    rank_crossentropy_loss, rank_hinge_loss, NegativeAggregation, RankCrossEntropyLoss,
    RankHingeLoss, RankingConfig, RankingLoss,
};
pub use crate::primitives::Vector;
