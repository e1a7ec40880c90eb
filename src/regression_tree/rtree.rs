use log::{debug, info, warn};

use crate::errors::{Result, TreeError};
use crate::{Learner, Sample};
use crate::common::{
    Node,
    split_rule::partition,
    type_and_struct::Depth,
};

use super::{
    loss::*,
    summary::LeafSummary,
    rtree_regressor::RegressionTreeRegressor,
};


use std::fmt;


/// This struct produces a regression tree for the given sample.
/// Every node is split by the rule minimizing the loss,
/// and the growth stops when
/// - no rule splits the rows,
/// - a side of the best rule has fewer than `min_samples` rows,
/// - the best rule does not lower the loss of the node, or
/// - the depth limit is reached.
///
/// # Example
/// ```
/// use minitrees::prelude::*;
///
/// let rows = (0..8)
///     .map(|x| {
///         let y = if x < 4 { 1.0 } else { 5.0 };
///         vec![Value::from(x), Value::from(y)]
///     })
///     .collect::<Vec<_>>();
/// let sample = Sample::from_rows(rows).unwrap();
///
/// let f = RegressionTreeBuilder::new()
///     .build()
///     .fit(&sample)
///     .unwrap();
///
/// let row: Vec<Value> = vec![6.into()];
/// assert_eq!(f.predict(&row).unwrap(), 5.0);
/// ```
pub struct RegressionTree {
    // The maximal depth of the output trees
    max_depth: Depth,

    // The minimal number of rows on each side of a split
    min_samples: usize,

    // LossType function
    loss_type: LossType,
}


impl RegressionTree {
    #[inline]
    pub(super) fn from_components(
        max_depth: Depth,
        min_samples: usize,
        loss_type: LossType,
    ) -> Self
    {
        Self { max_depth, min_samples, loss_type, }
    }


    /// Returns the best split of the rows indexed by `indices`.
    /// See [`LossType::best_split`].
    #[inline]
    pub fn best_split(&self, sample: &Sample, indices: &[usize])
        -> Result<Option<RegressionSplit>>
    {
        self.loss_type.best_split(sample, indices)
    }


    #[inline]
    fn full_tree(
        &self,
        sample: &Sample,
        indices: Vec<usize>,
        depth: Depth,
    ) -> Result<Node<LeafSummary>>
    {
        let targets = targets(sample, &indices)?;
        let node_loss = self.loss_type.loss(&targets);
        let tolerance = self.loss_type.tolerance(&targets);
        let leaf = || Node::leaf(LeafSummary::new(&targets, self.loss_type));


        if depth.is_exhausted() {
            if node_loss > tolerance {
                warn!(
                    "Depth limit reached with {} rows and loss {node_loss}",
                    indices.len()
                );
            }
            return Ok(leaf());
        }


        let split = self.loss_type
            .best_split_over(sample, &indices, &targets)?;
        let split = match split {
            Some(split) => split,
            None => {
                debug!("Leaf over {} rows: no rule splits them", indices.len());
                return Ok(leaf());
            },
        };


        if split.n_true < self.min_samples || split.n_false < self.min_samples {
            debug!(
                "Leaf over {} rows: best split leaves {} / {} rows",
                indices.len(),
                split.n_true,
                split.n_false,
            );
            return Ok(leaf());
        }


        if split.score >= node_loss - tolerance {
            debug!("Leaf over {} rows: loss {node_loss} does not decrease",
                indices.len()
            );
            return Ok(leaf());
        }


        let rule = split.rule;
        let (lindices, rindices) = partition(sample, &indices, &rule)?;
        debug!(
            "Split {} rows by [{rule}] (loss {node_loss:.6} -> {:.6})",
            indices.len(),
            split.score,
        );


        let depth = depth.decrease();
        let ltree = self.full_tree(sample, lindices, depth)?;
        let rtree = self.full_tree(sample, rindices, depth)?;


        Ok(Node::branch(rule, ltree, rtree))
    }
}


impl Learner for RegressionTree {
    type Model = RegressionTreeRegressor;


    fn name(&self) -> &str {
        "Regression Tree"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let info = Vec::from([
            ("Max depth", format!("{}", self.max_depth)),
            ("Min samples", format!("{}", self.min_samples)),
            ("Loss function", format!("{}", self.loss_type)),
        ]);
        Some(info)
    }


    fn fit(&self, sample: &Sample) -> Result<Self::Model> {
        if sample.is_empty() {
            return Err(TreeError::InvalidInput(
                "Cannot grow a regression tree on an empty sample".to_string()
            ));
        }

        let indices = sample.all_indices();
        let root = self.full_tree(sample, indices, self.max_depth)?;

        info!(
            "Grew a regression tree with {} leaves and depth {}",
            root.n_leaves(),
            root.depth(),
        );

        let feature_names = sample.feature_names().to_vec();
        Ok(RegressionTreeRegressor::new(root, feature_names))
    }
}


impl fmt::Display for RegressionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\
            ----------\n\
            # Regression Tree\n\n\
            - Max depth: {}\n\
            - Min samples: {}\n\
            - Loss function: {}\n\
            ----------\
            ",
            self.max_depth,
            self.min_samples,
            self.loss_type,
        )
    }
}
