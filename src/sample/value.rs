//! Defines the field type of a row.
use serde::{Serialize, Deserialize};

use std::fmt;
use std::cmp::Ordering;


/// A single field of a row.
/// Categorical fields are compared by equality,
/// numeric fields are compared by threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Value {
    /// A discrete value such as `"Red"`.
    Categorical(String),
    /// An ordered value such as `3.0`.
    Numeric(f64),
}


impl Value {
    /// Parse a raw field.
    /// A field that reads as a finite `f64` becomes [`Value::Numeric`],
    /// anything else becomes [`Value::Categorical`].
    pub fn parse<S: AsRef<str>>(raw: S) -> Self {
        let raw = raw.as_ref().trim();
        match raw.parse::<f64>() {
            Ok(x) if x.is_finite() => Self::Numeric(signless_zero(x)),
            _ => Self::Categorical(raw.to_string()),
        }
    }


    /// Returns `true` if this value is numeric.
    #[inline]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Numeric(_))
    }


    /// Returns the numeric content, if any.
    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Numeric(x) => Some(*x),
            Self::Categorical(_) => None,
        }
    }


    /// Replaces `-0.0` by `0.0`.
    #[inline]
    pub(crate) fn normalize(&mut self) {
        if let Self::Numeric(x) = self {
            *x = signless_zero(*x);
        }
    }


    /// Name of the kind of this value, used in error messages.
    #[inline]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Categorical(_) => "categorical",
            Self::Numeric(_) => "numeric",
        }
    }
}


// Numeric values come first, ordered by `f64::total_cmp`
// with `-0.0` read as `0.0`.
// Categorical values follow in lexicographic order.
impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Numeric(a), Self::Numeric(b)) => {
                signless_zero(*a).total_cmp(&signless_zero(*b))
            },
            (Self::Categorical(a), Self::Categorical(b)) => a.cmp(b),
            (Self::Numeric(_), Self::Categorical(_)) => Ordering::Less,
            (Self::Categorical(_), Self::Numeric(_)) => Ordering::Greater,
        }
    }
}


impl PartialOrd for Value {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}


impl PartialEq for Value {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}


impl Eq for Value {}


impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Categorical(s) => write!(f, "{s}"),
            Self::Numeric(x) => write!(f, "{x}"),
        }
    }
}


impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Self::Categorical(value.to_string())
    }
}


impl From<String> for Value {
    #[inline]
    fn from(value: String) -> Self {
        Self::Categorical(value)
    }
}


impl From<f64> for Value {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Numeric(signless_zero(value))
    }
}


impl From<i32> for Value {
    #[inline]
    fn from(value: i32) -> Self {
        Self::Numeric(value as f64)
    }
}



/// `-0.0` and `0.0` compare equal by `>=`,
/// so both are stored as `0.0`.
#[inline]
fn signless_zero(x: f64) -> f64 {
    if x == 0.0 { 0.0 } else { x }
}
