//! Defines the trait for regression models.
use crate::errors::Result;
use crate::{Sample, Value};


/// A trait that defines the behavor of regressor.
/// You only need to implement `predict` method.
pub trait Regressor {
    /// Predicts the target value of `row`.
    fn predict(&self, row: &[Value]) -> Result<f64>;


    /// Predicts the target values of every row of `sample`.
    fn predict_all(&self, sample: &Sample) -> Result<Vec<f64>> {
        sample.rows()
            .iter()
            .map(|row| self.predict(row))
            .collect()
    }
}
