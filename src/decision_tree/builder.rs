use crate::DecisionTree;
use crate::common::type_and_struct::Depth;
use super::criterion::*;


/// The minimal gain set as default.
pub const DEFAULT_MIN_GAIN: f64 = 0.0;


/// A struct that builds `DecisionTree`.
/// `DecisionTreeBuilder` keeps parameters for constructing `DecisionTree`.
///
/// # Example
///
/// ```
/// use minitrees::prelude::*;
///
/// let learner = DecisionTreeBuilder::new()
///     .max_depth(4)
///     .criterion(Criterion::Entropy)
///     .build();
/// ```
#[derive(Clone)]
pub struct DecisionTreeBuilder {
    max_depth: Option<usize>,
    criterion: Criterion,
    min_gain: f64,
}


impl DecisionTreeBuilder {
    /// Construct a new instance of [`DecisionTreeBuilder`].
    /// By default, [`DecisionTreeBuilder`] sets the parameters as follows;
    /// ```text
    /// max_depth: None (grow until no split improves the impurity),
    /// criterion: Criterion::Gini,
    /// min_gain: DEFAULT_MIN_GAIN == 0.0,
    /// ```
    pub fn new() -> Self {
        Self {
            max_depth: None,
            criterion: Criterion::Gini,
            min_gain: DEFAULT_MIN_GAIN,
        }
    }


    /// Specify the maximal depth of the tree.
    /// By default, the depth is unbounded.
    pub fn max_depth(mut self, depth: usize) -> Self {
        assert!(depth > 0, "Tree must have positive depth");
        self.max_depth = Some(depth);

        self
    }


    /// Set the node splitting rule.
    /// Default value is `Criterion::Gini`.
    /// See [`Criterion`] for other rules.
    #[inline]
    pub fn criterion(mut self, criterion: Criterion) -> Self {
        self.criterion = criterion;
        self
    }


    /// A split is accepted only if its gain exceeds `min_gain`.
    /// Default value is `0.0`.
    pub fn min_gain(mut self, min_gain: f64) -> Self {
        assert!(min_gain >= 0.0, "Minimal gain must be non-negative");
        self.min_gain = min_gain;
        self
    }


    /// Build a `DecisionTree`.
    /// This method consumes `self`.
    pub fn build(self) -> DecisionTree {
        DecisionTree::from_components(
            self.criterion,
            Depth::from(self.max_depth),
            self.min_gain,
        )
    }
}


impl Default for DecisionTreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
