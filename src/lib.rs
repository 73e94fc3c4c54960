//! Rankloss: ranking loss functions for text-matching models in pure Rust.
//!
//! Scores for (query, document) instances arrive grouped: one positive
//! followed by `neg_num` negatives, repeated. The losses reduce those
//! groups to a single scalar suitable for training a ranker.
//!
//! # Quick Start
//!
//! ```
//! use rankloss::prelude::*;
//!
//! let config = RankingConfig::new(1.0, 1).unwrap();
//! let y_true = Vector::from_slice(&[1.0, 0.0, 0.0, 1.0]);
//! let y_pred = Vector::from_slice(&[0.8, 0.1, 0.8, 0.1]);
//!
//! let hinge = rank_hinge_loss(&y_true, &y_pred, &config).unwrap();
//! let ce = rank_crossentropy_loss(&y_true, &y_pred, &config).unwrap();
//! assert!(hinge >= 0.0 && ce >= 0.0);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Vector type
//! - [`loss`]: Rank hinge and rank cross-entropy losses, configuration, grouping
//! - [`error`]: Error type and `Result` alias

pub mod error;
pub mod loss;
pub mod prelude;
pub mod primitives;
