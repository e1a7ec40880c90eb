//! Defines the regression tree learner.

/// These file defines the regression tree producer.
pub mod rtree;
/// This file defines the regression tree regressor.
pub mod rtree_regressor;

/// This file defines the loss type.
pub mod loss;

/// Regression Tree builder.
pub mod builder;

/// Defines the summary stored in the leaves.
pub mod summary;


pub use rtree::RegressionTree;
pub use rtree_regressor::RegressionTreeRegressor;
pub use loss::{LossType, RegressionSplit, regression_score};
pub use builder::RegressionTreeBuilder;
pub use summary::LeafSummary;
