//! Defines the impurity measures and the split search
//! of the decision tree.
use std::fmt;

use crate::errors::{Result, TreeError};
use crate::Sample;
use crate::common::split_rule::{
    Splitter,
    partition,
    distinct_values,
};
use super::distribution::LabelCounts;


/// Splitting criteria for growing decision tree.
/// Both of them choose the split with the largest impurity decrease.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Criterion {
    /// Gini index.
    #[default]
    Gini,
    /// Entropy function (natural logarithm).
    Entropy,
}


impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Gini => "Gini index",
            Self::Entropy => "Entropy",
        };

        write!(f, "{name}")
    }
}


impl Criterion {
    /// Returns the impurity of the rows indexed by `indices`.
    /// Fails with `InvalidInput` on an empty set of rows.
    pub fn impurity(&self, sample: &Sample, indices: &[usize])
        -> Result<f64>
    {
        if indices.is_empty() {
            return Err(TreeError::InvalidInput(
                "Impurity of an empty set of rows is undefined".to_string()
            ));
        }
        let counts = label_counts(sample, indices);
        let impurity = match self {
            Self::Gini => gini(&counts),
            Self::Entropy => entropy(&counts),
        };
        Ok(impurity)
    }


    /// Returns the impurity decrease from `parent_impurity`
    /// achieved by splitting into `left` and `right`.
    pub fn information_gain(
        &self,
        sample: &Sample,
        left: &[usize],
        right: &[usize],
        parent_impurity: f64,
    ) -> Result<f64>
    {
        let n_left = left.len() as f64;
        let n_right = right.len() as f64;
        let p = n_left / (n_left + n_right);

        let left_impurity = self.impurity(sample, left)?;
        let right_impurity = self.impurity(sample, right)?;

        Ok(parent_impurity - p * left_impurity - (1.0 - p) * right_impurity)
    }


    /// Returns the best splitting rule based on the criterion
    /// together with its gain.
    ///
    /// Columns are scanned in ascending order and,
    /// for each column, its distinct values in ascending order.
    /// Candidates leaving one side empty are skipped.
    /// A candidate replaces the current best one
    /// if its gain is at least the best gain so far and
    /// strictly greater than `min_gain`,
    /// so ties go to the candidate evaluated last.
    /// If no candidate qualifies, returns `(0.0, None)`.
    pub fn best_split(
        &self,
        sample: &Sample,
        indices: &[usize],
        min_gain: f64,
    ) -> Result<(f64, Option<Splitter>)>
    {
        let parent_impurity = self.impurity(sample, indices)?;
        let n_feature = sample.shape().1;

        let mut best_gain = 0.0;
        let mut best_rule = None;
        for feature in 0..n_feature {
            for threshold in distinct_values(sample, indices, feature) {
                let rule = Splitter::new(feature, threshold);
                let (lindices, rindices) = partition(sample, indices, &rule)?;

                if lindices.is_empty() || rindices.is_empty() {
                    continue;
                }

                let gain = self.information_gain(
                    sample, &lindices, &rindices, parent_impurity
                )?;
                if gain >= best_gain && gain > min_gain {
                    best_gain = gain;
                    best_rule = Some(rule);
                }
            }
        }

        Ok((best_gain, best_rule))
    }
}


/// Returns the map from label to the number of rows
/// indexed by `indices` that carry the label.
pub fn label_counts(sample: &Sample, indices: &[usize]) -> LabelCounts {
    let mut counts = LabelCounts::new();
    for &i in indices {
        let entry = counts.entry(sample.target(i).clone()).or_insert(0);
        *entry += 1;
    }
    counts
}


/// Returns the gini-impurity of the rows indexed by `indices`.
/// Fails with `InvalidInput` on an empty set of rows.
#[inline]
pub fn gini_impurity(sample: &Sample, indices: &[usize]) -> Result<f64> {
    Criterion::Gini.impurity(sample, indices)
}


/// Returns the entropic-impurity of the rows indexed by `indices`.
/// Fails with `InvalidInput` on an empty set of rows.
#[inline]
pub fn entropic_impurity(sample: &Sample, indices: &[usize])
    -> Result<f64>
{
    Criterion::Entropy.impurity(sample, indices)
}


/// Returns the decrease of the gini-impurity from `parent_impurity`
/// achieved by splitting into `left` and `right`.
/// Both sides must be non-empty.
#[inline]
pub fn information_gain(
    sample: &Sample,
    left: &[usize],
    right: &[usize],
    parent_impurity: f64,
) -> Result<f64>
{
    Criterion::Gini.information_gain(sample, left, right, parent_impurity)
}


/// Returns the gini-impurity of the given map.
fn gini(counts: &LabelCounts) -> f64 {
    let total = counts.values().sum::<usize>() as f64;

    let correct = counts.values()
        .map(|&c| (c as f64 / total).powi(2))
        .sum::<f64>();

    (1.0 - correct).max(0.0)
}


/// Returns the entropic-impurity of the given map.
fn entropy(counts: &LabelCounts) -> f64 {
    let total = counts.values().sum::<usize>() as f64;

    counts.values()
        .map(|&c| {
            let r = c as f64 / total;
            if r <= 0.0 { 0.0 } else { -r * r.ln() }
        })
        .sum::<f64>()
}
