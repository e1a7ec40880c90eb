//! Building blocks shared by the decision tree and the regression tree.

/// Defines the splitting rule and the partition of rows.
pub mod split_rule;

/// Defines the tree nodes.
pub mod node;

pub(crate) mod type_and_struct;


pub use split_rule::{Splitter, partition};
pub use node::Node;
