//! This file defines split rules for decision tree.
use serde::{Serialize, Deserialize};

use std::fmt;

use crate::errors::{Result, TreeError};
use crate::{Sample, Value};


/// A splitting rule `(column, threshold)`.
/// A numeric threshold sends a row to the `true` side
/// if `row[column] >= threshold`,
/// a categorical one if `row[column] == threshold`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Splitter {
    pub(crate) feature: usize,
    pub(crate) threshold: Value,
}


impl Splitter {
    /// Construct a new rule on column `feature`.
    #[inline]
    pub fn new(feature: usize, threshold: Value) -> Self {
        Self { feature, threshold }
    }


    /// Returns the column index this rule reads.
    #[inline]
    pub fn feature(&self) -> usize {
        self.feature
    }


    /// Returns the threshold.
    #[inline]
    pub fn threshold(&self) -> &Value {
        &self.threshold
    }


    /// Returns the comparison operator, `>=` or `==`.
    #[inline]
    pub fn operator(&self) -> &'static str {
        if self.threshold.is_numeric() { ">=" } else { "==" }
    }


    /// Evaluates the rule on `row`.
    pub fn matches(&self, row: &[Value]) -> Result<bool> {
        let value = row.get(self.feature)
            .ok_or_else(|| {
                TreeError::InvalidInput(format!(
                    "Column {} is out of range for a row of width {}",
                    self.feature,
                    row.len(),
                ))
            })?;

        match (&self.threshold, value) {
            (Value::Numeric(t), Value::Numeric(x)) => Ok(x >= t),
            (Value::Categorical(t), Value::Categorical(x)) => Ok(x == t),
            (t, x) => Err(TreeError::TypeMismatch(
                self.feature,
                t.kind().to_string(),
                x.kind().to_string(),
            )),
        }
    }


    /// Human readable form of this rule, e.g., `Is color == Red?`.
    pub fn describe(&self, feature_names: &[String]) -> String {
        let name = feature_names.get(self.feature)
            .cloned()
            .unwrap_or_else(|| format!("Feat. [{}]", self.feature + 1));
        format!("Is {name} {} {}?", self.operator(), self.threshold)
    }
}


impl fmt::Display for Splitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "column {} {} {}",
            self.feature,
            self.operator(),
            self.threshold,
        )
    }
}


/// Split the rows of `sample` indexed by `indices` into
/// the rows that satisfy `rule` and the rows that do not.
/// Both parts keep the order of `indices`.
pub fn partition(sample: &Sample, indices: &[usize], rule: &Splitter)
    -> Result<(Vec<usize>, Vec<usize>)>
{
    let mut true_indices = Vec::new();
    let mut false_indices = Vec::new();
    for &i in indices {
        if rule.matches(&sample[i])? {
            true_indices.push(i);
        } else {
            false_indices.push(i);
        }
    }

    Ok((true_indices, false_indices))
}


/// Collects the distinct values of column `feature` over `indices`,
/// sorted in ascending order.
pub(crate) fn distinct_values(
    sample: &Sample,
    indices: &[usize],
    feature: usize,
) -> Vec<Value>
{
    let mut values = indices.iter()
        .map(|&i| sample[i][feature].clone())
        .collect::<Vec<_>>();
    values.sort();
    values.dedup();
    values
}
