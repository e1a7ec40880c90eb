use crate::RegressionTree;
use crate::common::type_and_struct::Depth;
use super::loss::*;


/// The minimal number of rows on each side of a split set as default.
pub const DEFAULT_MIN_SAMPLES: usize = 2;


/// A struct that builds `RegressionTree`.
/// `RegressionTreeBuilder` keeps parameters for constructing `RegressionTree`.
///
/// # Example
///
/// ```
/// use minitrees::prelude::*;
///
/// let learner = RegressionTreeBuilder::new()
///     .max_depth(3)
///     .loss(LossType::L1)
///     .min_samples(5)
///     .build();
/// ```
#[derive(Clone)]
pub struct RegressionTreeBuilder {
    max_depth: Option<usize>,


    /// Stop growing if a side of the best split
    /// has fewer rows than this.
    min_samples: usize,

    /// Loss function
    loss: LossType,
}


impl RegressionTreeBuilder {
    /// Construct a new instance of `RegressionTreeBuilder`.
    /// By default,
    /// `RegressionTreeBuilder` sets the parameters as follows;
    /// ```text
    /// max_depth: None,
    /// min_samples: DEFAULT_MIN_SAMPLES == 2,
    /// loss: LossType::L2,
    /// ```
    pub fn new() -> Self {
        Self {
            max_depth: None,
            min_samples: DEFAULT_MIN_SAMPLES,
            loss: LossType::L2,
        }
    }


    /// Specify the loss type. Default is `LossType::L2`.
    pub fn loss(mut self, loss: LossType) -> Self {
        self.loss = loss;
        self
    }


    /// Set the minimal number of rows on each side of a split.
    pub fn min_samples(mut self, min_samples: usize) -> Self {
        assert!(min_samples > 0, "Each side of a split holds some rows");
        self.min_samples = min_samples;
        self
    }


    /// Specify the maximal depth of the tree.
    /// By default, the depth is unbounded.
    pub fn max_depth(mut self, depth: usize) -> Self {
        assert!(depth > 0, "Tree must have positive depth");
        self.max_depth = Some(depth);

        self
    }


    /// Build a `RegressionTree`.
    /// This method consumes `self`.
    pub fn build(self) -> RegressionTree {
        RegressionTree::from_components(
            Depth::from(self.max_depth),
            self.min_samples,
            self.loss,
        )
    }
}


impl Default for RegressionTreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
