//! Defines the decision tree classifier.
use serde::{Serialize, Deserialize};

use std::fmt;
use std::path::Path;

use crate::errors::{Result, TreeError};
use crate::{Classifier, Value};
use crate::common::Node;
use super::distribution::ClassDistribution;


/// Decision tree classifier.
/// This struct is a wrapper of the root `Node`
/// together with the feature names used for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTreeClassifier {
    root: Node<ClassDistribution>,
    feature_names: Vec<String>,
}


impl DecisionTreeClassifier {
    #[inline]
    pub(super) fn new(
        root: Node<ClassDistribution>,
        feature_names: Vec<String>,
    ) -> Self
    {
        Self { root, feature_names }
    }


    /// Returns the root node.
    #[inline]
    pub fn root(&self) -> &Node<ClassDistribution> {
        &self.root
    }


    /// Returns the label distribution of the leaf `row` reaches.
    #[inline]
    pub fn distribution(&self, row: &[Value]) -> Result<&ClassDistribution> {
        self.root.leaf_for(row)
    }


    /// Returns the depth of the tree.
    #[inline]
    pub fn depth(&self) -> usize {
        self.root.depth()
    }


    /// Returns the number of leaves.
    #[inline]
    pub fn n_leaves(&self) -> usize {
        self.root.n_leaves()
    }


    /// Returns an indented, human readable form of the tree.
    pub fn render(&self) -> String {
        let mut out = String::new();
        // Writing into a `String` never fails.
        let _ = self.root.render_into(&self.feature_names, 0, &mut out);
        out
    }


    /// Returns the current decision tree in dot format.
    #[inline]
    pub fn to_dot(&self) -> String {
        self.root.to_dot(&self.feature_names, "DecisionTree")
    }


    /// Write the current decision tree to dot file.
    #[inline]
    pub fn to_dot_file<P>(&self, path: P) -> Result<()>
        where P: AsRef<Path>
    {
        self.root.to_dot_file(&self.feature_names, "DecisionTree", path)
    }
}


impl Classifier for DecisionTreeClassifier {
    fn predict(&self, row: &[Value]) -> Result<Value> {
        self.distribution(row)?
            .majority()
            .cloned()
            .ok_or_else(|| {
                TreeError::InvalidInput(
                    "Reached a leaf without labels".to_string()
                )
            })
    }
}


impl fmt::Display for DecisionTreeClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
