use serde::{
    Serialize,
    Deserialize,
};

use std::fmt;
use std::path::Path;

use crate::errors::Result;
use crate::{Regressor, Value};
use crate::common::Node;
use super::summary::LeafSummary;


/// Regression Tree regressor.
/// This struct is a wrapper of the root `Node`
/// together with the feature names used for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionTreeRegressor {
    root: Node<LeafSummary>,
    feature_names: Vec<String>,
}


impl Regressor for RegressionTreeRegressor {
    fn predict(&self, row: &[Value]) -> Result<f64> {
        Ok(self.summary(row)?.prediction)
    }
}


impl RegressionTreeRegressor {
    #[inline]
    pub(super) fn new(root: Node<LeafSummary>, feature_names: Vec<String>)
        -> Self
    {
        Self { root, feature_names }
    }


    /// Returns the root node.
    #[inline]
    pub fn root(&self) -> &Node<LeafSummary> {
        &self.root
    }


    /// Returns the summary of the leaf `row` reaches.
    #[inline]
    pub fn summary(&self, row: &[Value]) -> Result<&LeafSummary> {
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


    /// Returns the current regression tree in dot format.
    #[inline]
    pub fn to_dot(&self) -> String {
        self.root.to_dot(&self.feature_names, "RegressionTree")
    }


    /// Write the current regression tree to dot file.
    #[inline]
    pub fn to_dot_file<P>(&self, path: P) -> Result<()>
        where P: AsRef<Path>
    {
        self.root.to_dot_file(&self.feature_names, "RegressionTree", path)
    }
}


impl fmt::Display for RegressionTreeRegressor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
