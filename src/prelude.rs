//! Exports the tree learners, the models, and the traits.
//!
pub use crate::sample::{
    Sample,
    SampleReader,
    Value,
};


pub use crate::learner::Learner;


pub use crate::decision_tree::{
    // Classification ---------------------------
    Criterion,
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    ClassDistribution,
};


pub use crate::regression_tree::{
    // Regression -------------------------------
    LossType,
    LeafSummary,
    RegressionTree,
    RegressionTreeBuilder,
    RegressionTreeRegressor,
};


pub use crate::classifier::Classifier;
pub use crate::regressor::Regressor;


pub use crate::common::{
    Node,
    Splitter,
    partition,
};


pub use crate::errors::TreeError;


pub use crate::{build_tree, build_regression_tree};
