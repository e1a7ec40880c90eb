//! Defines the inner representation of the trees.
//! A tree is a `Node` that exclusively owns its children.
use serde::{Serialize, Deserialize};

use std::fmt::{self, Write};
use std::path::Path;
use std::fs::File;
use std::io::Write as _;

use crate::errors::{Result, TreeError};
use crate::Value;
use super::split_rule::Splitter;


/// Enumeration of branch nodes and leaf nodes.
/// `L` is the summary stored in the leaves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node<L> {
    /// A node that have two childrens.
    /// Rows satisfying `rule` go to `true_branch`.
    Branch {
        /// Splitting rule.
        rule: Splitter,
        /// Child for the rows that satisfy `rule`.
        true_branch: Box<Node<L>>,
        /// Child for the rows that do not satisfy `rule`.
        false_branch: Box<Node<L>>,
    },


    /// A node that have no child.
    Leaf(L),
}


impl<L> Node<L> {
    /// Construct a branch node.
    #[inline]
    pub fn branch(rule: Splitter, true_branch: Self, false_branch: Self)
        -> Self
    {
        Self::Branch {
            rule,
            true_branch: Box::new(true_branch),
            false_branch: Box::new(false_branch),
        }
    }


    /// Construct a leaf node.
    #[inline]
    pub fn leaf(summary: L) -> Self {
        Self::Leaf(summary)
    }


    /// Returns `true` if this node is a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }


    /// Descends from this node along `row` and
    /// returns the summary of the leaf it reaches.
    pub fn leaf_for(&self, row: &[Value]) -> Result<&L> {
        let mut node = self;
        loop {
            match node {
                Self::Branch { rule, true_branch, false_branch } => {
                    node = if rule.matches(row)? {
                        true_branch.as_ref()
                    } else {
                        false_branch.as_ref()
                    };
                },
                Self::Leaf(summary) => return Ok(summary),
            }
        }
    }


    /// Returns the number of edges on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Self::Branch { true_branch, false_branch, .. } => {
                1 + true_branch.depth().max(false_branch.depth())
            },
            Self::Leaf(_) => 0,
        }
    }


    /// Returns the number of leaves of this sub-tree.
    pub fn n_leaves(&self) -> usize {
        match self {
            Self::Branch { true_branch, false_branch, .. } => {
                true_branch.n_leaves() + false_branch.n_leaves()
            },
            Self::Leaf(_) => 1,
        }
    }
}


impl<L: fmt::Display> Node<L> {
    /// Writes an indented, human readable form of this sub-tree
    /// into `out`.
    pub(crate) fn render_into(
        &self,
        feature_names: &[String],
        depth: usize,
        out: &mut String,
    ) -> fmt::Result
    {
        let indent = "    ".repeat(depth);
        match self {
            Self::Branch { rule, true_branch, false_branch } => {
                writeln!(out, "{indent}{}", rule.describe(feature_names))?;
                writeln!(out, "{indent}--> True:")?;
                true_branch.render_into(feature_names, depth + 1, out)?;
                writeln!(out, "{indent}--> False:")?;
                false_branch.render_into(feature_names, depth + 1, out)
            },
            Self::Leaf(summary) => {
                writeln!(out, "{indent}Predict {summary}")
            },
        }
    }


    pub(crate) fn to_dot_info(&self, feature_names: &[String], id: usize)
        -> (Vec<String>, usize)
    {
        match self {
            Self::Branch { rule, true_branch, false_branch } => {
                let label = rule.describe(feature_names)
                    .replace('"', "\\\"");
                let splitter = format!(
                    "\tnode_{id} [ label = \"{label}\" ];\n",
                );

                let true_id = id + 1;
                let (mut info,  false_id) = true_branch
                    .to_dot_info(feature_names, true_id);
                let (mut rest, return_id) = false_branch
                    .to_dot_info(feature_names, false_id);

                info.push(splitter);
                info.append(&mut rest);

                let true_edge = format!(
                    "\tnode_{id} -- node_{true_id} [ label = \"True\" ];\n",
                );
                info.push(true_edge);
                let false_edge = format!(
                    "\tnode_{id} -- node_{false_id} [ label = \"False\" ];\n",
                );
                info.push(false_edge);

                (info, return_id)
            },
            Self::Leaf(summary) => {
                let label = summary.to_string().replace('"', "\\\"");
                let info = format!(
                    "\tnode_{id} [ label = \"{label}\", shape = box ];\n",
                );

                (vec![info], id + 1)
            }
        }
    }


    /// Returns the Graphviz representation of this sub-tree.
    pub(crate) fn to_dot(&self, feature_names: &[String], graph: &str)
        -> String
    {
        let mut dot = format!("graph {graph} {{\n");
        let info = self.to_dot_info(feature_names, 0).0;
        info.into_iter()
            .for_each(|row| dot.push_str(&row));
        dot.push('}');
        dot
    }


    /// Write this sub-tree to dot file.
    pub(crate) fn to_dot_file<P>(
        &self,
        feature_names: &[String],
        graph: &str,
        path: P,
    ) -> Result<()>
        where P: AsRef<Path>
    {
        let path = path.as_ref();
        let unable_to_write = |e: std::io::Error| {
            TreeError::UnableToWrite(format!("{}: {e}", path.display()))
        };

        let mut f = File::create(path).map_err(unable_to_write)?;
        f.write_all(self.to_dot(feature_names, graph).as_bytes())
            .map_err(unable_to_write)?;

        Ok(())
    }
}
