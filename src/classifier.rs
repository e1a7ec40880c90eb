//! Defines the trait for classification models.
use crate::errors::Result;
use crate::{Sample, Value};


/// A trait that defines the behavor of classifier.
/// You only need to implement `predict` method.
pub trait Classifier {
    /// Predicts the label of `row`.
    /// `row` holds at least the feature fields;
    /// a trailing target field is ignored.
    fn predict(&self, row: &[Value]) -> Result<Value>;


    /// Predicts the labels of every row of `sample`.
    fn predict_all(&self, sample: &Sample) -> Result<Vec<Value>> {
        sample.rows()
            .iter()
            .map(|row| self.predict(row))
            .collect()
    }
}
