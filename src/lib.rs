#![warn(missing_docs)]

//!
//! A crate that grows binary decision trees
//! on small tabular samples.
//!
//! Each row of a [`Sample`] is a sequence of fields whose last field is
//! the target. A tree is grown by recursively splitting the rows
//! with a single-feature rule `(column, threshold)`:
//! a numeric threshold routes a row by `>=`,
//! a categorical threshold routes it by `==`.
//!
//! This crate includes two tree learners.
//!
//! - [`DecisionTree`] for classification.
//!     Each split maximizes the impurity decrease
//!     (Gini index or entropy) and the leaves hold label counts.
//!
//! - [`RegressionTree`] for regression.
//!     Each split minimizes the loss (squared or absolute error)
//!     of both sides and the leaves hold the mean/median
//!     of the targets.
//!
//! The fitted models are plain owned trees.
//! They predict new rows and render themselves
//! as indented text or as a dot file.

pub mod errors;
pub mod sample;
pub mod common;
pub mod learner;
pub mod classifier;
pub mod regressor;
pub mod decision_tree;
pub mod regression_tree;
pub mod prelude;


pub use errors::{Result, TreeError};

pub use sample::{Sample, SampleReader, Value};

pub use common::{Node, Splitter, partition};

pub use learner::Learner;
pub use classifier::Classifier;
pub use regressor::Regressor;

pub use decision_tree::{
    Criterion,
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    ClassDistribution,
};

pub use regression_tree::{
    LossType,
    LeafSummary,
    RegressionTree,
    RegressionTreeBuilder,
    RegressionTreeRegressor,
};


/// Grows a decision tree with the default parameters,
/// i.e., Gini index and no depth limit.
pub fn build_tree(sample: &Sample) -> Result<DecisionTreeClassifier> {
    DecisionTreeBuilder::new()
        .build()
        .fit(sample)
}


/// Grows a regression tree with the default parameters,
/// i.e., squared error and at least 2 rows on each side of a split.
pub fn build_regression_tree(sample: &Sample)
    -> Result<RegressionTreeRegressor>
{
    RegressionTreeBuilder::new()
        .build()
        .fit(sample)
}
