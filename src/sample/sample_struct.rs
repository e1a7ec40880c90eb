use std::path::Path;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::ops::Index;

use crate::errors::{Result, TreeError};
use super::value::Value;


/// Struct `Sample` holds a batch of rows of equal width.
/// The last field of each row is the target,
/// the other fields are the features.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub(super) rows: Vec<Vec<Value>>,
    pub(super) feature_names: Vec<String>,
    pub(super) target_name: Option<String>,
    pub(super) n_sample: usize,
    pub(super) n_feature: usize,
}


impl Sample {
    /// Construct a `Sample` from the given rows.
    /// Every row must have the same, positive width
    /// and no numeric field may be `NaN`.
    /// A `-0.0` field is stored as `0.0`.
    /// The features are named `Feat. [1]`, `Feat. [2]`, ...
    /// until [`Sample::set_header`] replaces them.
    pub fn from_rows(mut rows: Vec<Vec<Value>>) -> Result<Self> {
        let n_sample = rows.len();
        let width = rows.first().map(|row| row.len()).unwrap_or(0);

        if n_sample > 0 && width == 0 {
            return Err(TreeError::InvalidInput(
                "A row must contain at least the target field".to_string()
            ));
        }

        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(TreeError::InvalidInput(format!(
                    "Row {i} has {} fields, expected {width}",
                    row.len()
                )));
            }

            let has_nan = row.iter()
                .any(|x| x.as_f64().is_some_and(f64::is_nan));
            if has_nan {
                return Err(TreeError::InvalidInput(format!(
                    "Row {i} contains a NaN field"
                )));
            }
        }

        rows.iter_mut()
            .flat_map(|row| row.iter_mut())
            .for_each(Value::normalize);

        let n_feature = width.saturating_sub(1);
        let feature_names = dummy_names(n_feature);

        let sample = Self {
            rows, feature_names, target_name: None, n_sample, n_feature,
        };
        Ok(sample)
    }


    /// Set the feature (column) names.
    /// The number of names must equal the number of features;
    /// the target column is not named here.
    pub fn set_header<S, T>(mut self, names: T) -> Result<Self>
        where S: ToString,
              T: AsRef<[S]>,
    {
        let names = names.as_ref();
        if names.len() != self.n_feature {
            return Err(TreeError::InvalidInput(format!(
                "Got {} feature names for {} features",
                names.len(),
                self.n_feature,
            )));
        }

        self.feature_names = names.iter()
            .map(|name| name.to_string())
            .collect();
        Ok(self)
    }


    /// Set the name of the target column.
    pub fn set_target_name<S: ToString>(mut self, name: S) -> Self {
        self.target_name = Some(name.to_string());
        self
    }


    /// Read a CSV format file to `Sample` type.
    /// The last column is the target.
    /// If `has_header` is `true`, the first line names every column.
    pub fn from_csv<P>(file: P, has_header: bool) -> Result<Self>
        where P: AsRef<Path>,
    {
        let path = file.as_ref();
        let file = File::open(path)
            .map_err(|e| {
                TreeError::UnableToRead(format!("{}: {e}", path.display()))
            })?;
        Self::from_reader(file, has_header)
    }


    /// Read CSV formatted text from `reader` to `Sample` type.
    /// See [`Sample::from_csv`].
    pub fn from_reader<R: Read>(reader: R, has_header: bool) -> Result<Self> {
        let mut lines = BufReader::new(reader).lines();

        let mut header = None;
        if has_header {
            if let Some(line) = lines.next() {
                let line = line
                    .map_err(|e| TreeError::UnableToRead(e.to_string()))?;
                let names = line.split(',')
                    .map(|name| name.trim().to_string())
                    .collect::<Vec<_>>();
                header = Some(names);
            }
        }

        let mut rows = Vec::new();
        for line in lines {
            let line = line
                .map_err(|e| TreeError::UnableToRead(e.to_string()))?;
            if line.trim().is_empty() { continue; }

            let row = line.split(',')
                .map(Value::parse)
                .collect::<Vec<_>>();
            rows.push(row);
        }

        let mut sample = Self::from_rows(rows)?;

        if let Some(mut names) = header {
            if !sample.is_empty() && names.len() != sample.n_feature + 1 {
                return Err(TreeError::InvalidInput(format!(
                    "The header has {} columns, but rows have {}",
                    names.len(),
                    sample.n_feature + 1,
                )));
            }
            let target = names.pop();
            if !sample.is_empty() {
                sample = sample.set_header(names)?;
            }
            sample.target_name = target;
        }

        Ok(sample)
    }


    /// Returns the pair of the number of examples and
    /// the number of features
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.n_sample, self.n_feature)
    }


    /// Returns `true` if the sample has no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n_sample == 0
    }


    /// Returns all rows.
    #[inline]
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows[..]
    }


    /// Returns the target of the `idx`-th row.
    #[inline]
    pub fn target(&self, idx: usize) -> &Value {
        &self.rows[idx][self.n_feature]
    }


    /// Returns the target of the `idx`-th row as `f64`.
    /// Fails with `TypeMismatch` for a categorical target.
    pub(crate) fn numeric_target(&self, idx: usize) -> Result<f64> {
        let y = self.target(idx);
        y.as_f64()
            .ok_or_else(|| {
                TreeError::TypeMismatch(
                    self.n_feature,
                    "numeric".to_string(),
                    y.kind().to_string(),
                )
            })
    }


    /// Returns the feature names.
    #[inline]
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names[..]
    }


    /// Returns the name of the target column, if any.
    #[inline]
    pub fn target_name(&self) -> Option<&str> {
        self.target_name.as_deref()
    }


    /// Returns the indices of all rows.
    #[inline]
    pub(crate) fn all_indices(&self) -> Vec<usize> {
        (0..self.n_sample).collect()
    }
}


impl Index<usize> for Sample {
    type Output = [Value];
    #[inline]
    fn index(&self, idx: usize) -> &Self::Output {
        &self.rows[idx][..]
    }
}


fn dummy_names(n_feature: usize) -> Vec<String> {
    (1..=n_feature).map(|i| format!("Feat. [{i}]"))
        .collect()
}
