//! Defines the decision tree learner for classification.

/// Defines the decision tree algorithm.
pub mod dtree;
/// Defines the classifier produced by `DecisionTree`.
pub mod dtree_classifier;
/// Defines the builder of `DecisionTree`.
pub mod builder;
/// Defines the impurity measures and the split search.
pub mod criterion;
/// Defines the label distribution stored in the leaves.
pub mod distribution;


pub use dtree::DecisionTree;
pub use dtree_classifier::DecisionTreeClassifier;
pub use builder::DecisionTreeBuilder;
pub use criterion::{
    Criterion,
    label_counts,
    gini_impurity,
    entropic_impurity,
    information_gain,
};
pub use distribution::{ClassDistribution, LabelCounts};
