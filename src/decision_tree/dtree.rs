use log::{debug, info, warn};

use crate::errors::{Result, TreeError};
use crate::{Learner, Sample};
use crate::common::{
    Node,
    split_rule::partition,
    type_and_struct::Depth,
};
use super::{
    criterion::*,
    distribution::ClassDistribution,
    dtree_classifier::DecisionTreeClassifier,
};

use std::fmt;


/// The Decision Tree algorithm.
/// Given a set of training examples for classification,
/// [`DecisionTree`] grows a binary tree by repeatedly choosing
/// the `(column, threshold)` pair with the largest impurity decrease,
/// and outputs a [`DecisionTreeClassifier`].
///
/// [`DecisionTree`] is constructed
/// by [`DecisionTreeBuilder`](crate::DecisionTreeBuilder).
///
/// # Example
/// ```
/// use minitrees::prelude::*;
///
/// let rows = vec![
///     vec!["Green".into(),  3.into(), "Apple".into()],
///     vec!["Yellow".into(), 3.into(), "Apple".into()],
///     vec!["Red".into(),    1.into(), "Grape".into()],
///     vec!["Red".into(),    1.into(), "Grape".into()],
///     vec!["Yellow".into(), 3.into(), "Lemon".into()],
/// ];
/// let sample = Sample::from_rows(rows)
///     .unwrap()
///     .set_header(["color", "diameter"])
///     .unwrap();
///
/// let tree = DecisionTreeBuilder::new().build();
/// let f = tree.fit(&sample).unwrap();
///
/// let row: Vec<Value> = vec!["Red".into(), 1.into()];
/// assert_eq!(f.predict(&row).unwrap(), Value::from("Grape"));
/// println!("{f}");
/// ```
pub struct DecisionTree {
    criterion: Criterion,
    max_depth: Depth,
    min_gain: f64,
}


impl DecisionTree {
    /// Initialize [`DecisionTree`].
    /// This method is called only via `DecisionTreeBuilder::build`.
    #[inline]
    pub(super) fn from_components(
        criterion: Criterion,
        max_depth: Depth,
        min_gain: f64,
    ) -> Self
    {
        Self { criterion, max_depth, min_gain, }
    }


    /// Returns the best split of the rows indexed by `indices`
    /// together with its gain.
    /// See [`Criterion::best_split`].
    #[inline]
    pub fn best_split(&self, sample: &Sample, indices: &[usize])
        -> Result<(f64, Option<crate::Splitter>)>
    {
        self.criterion.best_split(sample, indices, self.min_gain)
    }


    /// Grow the tree over the rows indexed by `indices`.
    fn full_tree(
        &self,
        sample: &Sample,
        indices: Vec<usize>,
        depth: Depth,
    ) -> Result<Node<ClassDistribution>>
    {
        if depth.is_exhausted() {
            let dist = ClassDistribution::from(label_counts(sample, &indices));
            if dist.counts().len() > 1 {
                warn!(
                    "Depth limit reached with {} rows of {} labels",
                    indices.len(),
                    dist.counts().len(),
                );
            }
            return Ok(Node::leaf(dist));
        }


        let (gain, rule) = self.best_split(sample, &indices)?;


        // If no split decreases the impurity, construct a leaf node.
        let rule = match rule {
            Some(rule) => rule,
            None => {
                debug!("Leaf over {} rows", indices.len());
                return Ok(leaf(sample, &indices));
            },
        };


        // Split the train data for true/false childrens.
        // Both parts are non-empty by the construction of `best_split`.
        let (lindices, rindices) = partition(sample, &indices, &rule)?;
        debug!(
            "Split {} rows by [{rule}] (gain {gain:.6}) into {} / {}",
            indices.len(),
            lindices.len(),
            rindices.len(),
        );


        let depth = depth.decrease();
        let ltree = self.full_tree(sample, lindices, depth)?;
        let rtree = self.full_tree(sample, rindices, depth)?;


        Ok(Node::branch(rule, ltree, rtree))
    }
}


impl Learner for DecisionTree {
    type Model = DecisionTreeClassifier;


    fn name(&self) -> &str {
        "Decision Tree"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let info = Vec::from([
            ("Max depth", format!("{}", self.max_depth)),
            ("Split criterion", format!("{}", self.criterion)),
            ("Min gain", format!("{}", self.min_gain)),
        ]);
        Some(info)
    }


    fn fit(&self, sample: &Sample) -> Result<Self::Model> {
        if sample.is_empty() {
            return Err(TreeError::InvalidInput(
                "Cannot grow a decision tree on an empty sample".to_string()
            ));
        }

        let indices = sample.all_indices();
        let root = self.full_tree(sample, indices, self.max_depth)?;

        info!(
            "Grew a decision tree with {} leaves and depth {}",
            root.n_leaves(),
            root.depth(),
        );

        let feature_names = sample.feature_names().to_vec();
        Ok(DecisionTreeClassifier::new(root, feature_names))
    }
}


#[inline]
fn leaf(sample: &Sample, indices: &[usize]) -> Node<ClassDistribution> {
    Node::leaf(ClassDistribution::from(label_counts(sample, indices)))
}


impl fmt::Display for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\
            ----------\n\
            # Decision Tree\n\n\
            - Max depth: {}\n\
            - Splitting criterion: {}\n\
            - Min gain: {}\n\
            ----------\
            ",
            self.max_depth,
            self.criterion,
            self.min_gain,
        )
    }
}
