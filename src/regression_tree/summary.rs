use serde::{Serialize, Deserialize};

use std::fmt;

use super::loss::{LossType, mean};


/// The summary held by a leaf of a regression tree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LeafSummary {
    /// The value predicted for the rows reaching this leaf.
    /// This is the mean for `LossType::L2`,
    /// the median for `LossType::L1`.
    pub prediction: f64,
    /// Mean of the targets.
    pub mean: f64,
    /// Population variance of the targets.
    pub variance: f64,
    /// The number of training rows that reached this leaf.
    pub n_sample: usize,
}


impl LeafSummary {
    /// Summarize `targets` under the loss `loss_type`.
    pub fn new(targets: &[f64], loss_type: LossType) -> Self {
        let n_sample = targets.len();
        let mean = mean(targets);
        let variance = if n_sample == 0 {
            0.0
        } else {
            LossType::L2.loss(targets) / n_sample as f64
        };
        let prediction = loss_type.prediction(targets);

        Self { prediction, mean, variance, n_sample }
    }
}


impl fmt::Display for LeafSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.4} (n = {}, variance = {:.4})",
            self.prediction,
            self.n_sample,
            self.variance,
        )
    }
}
