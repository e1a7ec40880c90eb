use serde::{Serialize, Deserialize};

use std::fmt;
use std::collections::BTreeMap;

use crate::Value;


/// This is an alias from a label to the number of rows
/// carrying that label.
pub type LabelCounts = BTreeMap<Value, usize>;


/// The label distribution held by a leaf of a decision tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassDistribution {
    counts: LabelCounts,
}


impl From<LabelCounts> for ClassDistribution {
    #[inline]
    fn from(counts: LabelCounts) -> Self {
        Self { counts }
    }
}


impl ClassDistribution {
    /// Returns the map from label to count.
    #[inline]
    pub fn counts(&self) -> &LabelCounts {
        &self.counts
    }


    /// Returns the number of rows that reached this leaf.
    #[inline]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }


    /// Returns the most frequent label.
    /// Ties go to the smallest label.
    pub fn majority(&self) -> Option<&Value> {
        let mut best: Option<(&Value, usize)> = None;
        for (label, &count) in self.counts.iter() {
            if best.map_or(true, |(_, c)| count > c) {
                best = Some((label, count));
            }
        }
        best.map(|(label, _)| label)
    }


    /// Returns the empirical probability of `label` on this leaf.
    pub fn probability(&self, label: &Value) -> f64 {
        let total = self.total();
        if total == 0 { return 0.0; }

        let count = self.counts.get(label).copied().unwrap_or(0);
        count as f64 / total as f64
    }
}


impl fmt::Display for ClassDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = self.counts.iter()
            .map(|(label, count)| format!("{label}: {count}"))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{{{line}}}")
    }
}
