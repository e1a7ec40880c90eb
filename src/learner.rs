//! The core trait for the tree learners.
//!
//! A learner holds the parameters of a tree-growing algorithm.
//! Given a training [`Sample`], it returns a fitted model
//! that answers queries on new rows.
use crate::errors::Result;
use crate::Sample;


/// A trait that defines the behavior of a tree learner.
/// You only need to implement `fit` method.
pub trait Learner {
    /// The model returned by `fit`.
    type Model;


    /// Returns the name of the learner.
    fn name(&self) -> &str;


    /// Returns the pairs of parameter name and its value.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }


    /// Grows a tree over all rows of `sample`.
    fn fit(&self, sample: &Sample) -> Result<Self::Model>;
}
