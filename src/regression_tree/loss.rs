//! Defines some criterions for regression tree.
use serde::{
    Serialize,
    Deserialize
};

use std::fmt;

use crate::errors::{Result, TreeError};
use crate::Sample;
use crate::common::split_rule::{
    Splitter,
    distinct_values,
};


/// The type of loss (error) function.
/// Each side of a split is scored around its own center,
/// and lower is better.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LossType {
    /// Least Absolute Error.
    /// The center of a set of targets is their median.
    L1,


    /// Least Squared Error.
    /// The center of a set of targets is their mean.
    #[default]
    L2,
}


impl fmt::Display for LossType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let loss = match self {
            Self::L1 => "L1 (Least Absolute) loss",
            Self::L2 => "L2 (Least  Squared) loss",
        };
        write!(f, "{loss}")
    }
}


/// The best split found by [`LossType::best_split`].
#[derive(Clone, Debug, PartialEq)]
pub struct RegressionSplit {
    /// Sum of the losses of both sides.
    pub score: f64,
    /// The splitting rule.
    pub rule: Splitter,
    /// The number of rows satisfying `rule`.
    pub n_true: usize,
    /// The number of rows not satisfying `rule`.
    pub n_false: usize,
}


impl LossType {
    /// Returns the value that minimizes this loss over `targets`.
    /// Returns `0.0` for no targets.
    pub fn prediction(&self, targets: &[f64]) -> f64 {
        match self {
            Self::L1 => median(targets),
            Self::L2 => mean(targets),
        }
    }


    /// Returns the loss of `targets` around their own center.
    pub fn loss(&self, targets: &[f64]) -> f64 {
        let center = self.prediction(targets);
        match self {
            Self::L1 => {
                targets.iter()
                    .map(|y| (y - center).abs())
                    .sum::<f64>()
            },
            Self::L2 => {
                targets.iter()
                    .map(|y| (y - center).powi(2))
                    .sum::<f64>()
            },
        }
    }


    /// Returns the loss below which `targets` count as constant.
    /// The loss of equal targets such as `0.1` is a rounding residue,
    /// not `0.0`. A split must lower the loss by more than this.
    pub fn tolerance(&self, targets: &[f64]) -> f64 {
        let scale = match self {
            Self::L1 => targets.iter().map(|y| y.abs()).sum::<f64>(),
            Self::L2 => targets.iter().map(|y| y * y).sum::<f64>(),
        };
        f64::EPSILON * scale
    }


    /// Returns the best splitting rule based on the loss function.
    ///
    /// Columns are scanned in ascending order and,
    /// for each column, its distinct values in ascending order.
    /// Candidates leaving one side empty are skipped.
    /// A candidate replaces the current best one
    /// if its score is at most the best score so far,
    /// so ties go to the candidate evaluated last.
    /// Returns `None` if every candidate leaves one side empty.
    pub fn best_split(&self, sample: &Sample, indices: &[usize])
        -> Result<Option<RegressionSplit>>
    {
        if indices.is_empty() {
            return Err(TreeError::InvalidInput(
                "Cannot split an empty set of rows".to_string()
            ));
        }
        let targets = targets(sample, indices)?;
        self.best_split_over(sample, indices, &targets)
    }


    /// Same as [`LossType::best_split`],
    /// where `targets[k]` is the target of the row `indices[k]`.
    pub(crate) fn best_split_over(
        &self,
        sample: &Sample,
        indices: &[usize],
        targets: &[f64],
    ) -> Result<Option<RegressionSplit>>
    {
        let n_feature = sample.shape().1;

        let mut best: Option<RegressionSplit> = None;
        for feature in 0..n_feature {
            for threshold in distinct_values(sample, indices, feature) {
                let rule = Splitter::new(feature, threshold);

                let mut left = Vec::new();
                let mut right = Vec::new();
                for (&i, &y) in indices.iter().zip(targets) {
                    if rule.matches(&sample[i])? {
                        left.push(y);
                    } else {
                        right.push(y);
                    }
                }

                if left.is_empty() || right.is_empty() {
                    continue;
                }

                let score = self.loss(&left) + self.loss(&right);

                if best.as_ref().map_or(true, |b| score <= b.score) {
                    best = Some(RegressionSplit {
                        score,
                        rule,
                        n_true: left.len(),
                        n_false: right.len(),
                    });
                }
            }
        }

        Ok(best)
    }
}


/// Returns the sum of squared deviations of each side
/// from its own mean.
/// Lower is better.
#[inline]
pub fn regression_score(left: &[f64], right: &[f64]) -> f64 {
    LossType::L2.loss(left) + LossType::L2.loss(right)
}


/// Returns the numeric targets of the rows indexed by `indices`.
pub(crate) fn targets(sample: &Sample, indices: &[usize])
    -> Result<Vec<f64>>
{
    indices.iter()
        .map(|&i| sample.numeric_target(i))
        .collect()
}


pub(crate) fn mean(targets: &[f64]) -> f64 {
    if targets.is_empty() { return 0.0; }
    targets.iter().sum::<f64>() / targets.len() as f64
}


fn median(targets: &[f64]) -> f64 {
    if targets.is_empty() { return 0.0; }

    let mut sorted = targets.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        0.5 * (sorted[n / 2 - 1] + sorted[n / 2])
    }
}
