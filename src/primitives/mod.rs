//! Core compute primitives.
//!
//! Scores and labels travel through the loss functions as [`Vector`]s.

mod vector;

pub use vector::Vector;
