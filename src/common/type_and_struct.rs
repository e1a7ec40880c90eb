use std::fmt;


/// Struct `Depth` holds the remaining depth budget of a growing tree.
/// `Depth(None)` never runs out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(transparent)]
pub(crate) struct Depth(Option<usize>);


impl From<Option<usize>> for Depth {
    #[inline]
    fn from(depth: Option<usize>) -> Self {
        Self(depth)
    }
}


impl Depth {
    /// Returns `true` if no more branch node can be grown.
    #[inline]
    pub(crate) fn is_exhausted(&self) -> bool {
        self.0 == Some(0)
    }


    /// Returns the budget for the children of a node.
    #[inline]
    pub(crate) fn decrease(self) -> Self {
        Self(self.0.map(|d| d.saturating_sub(1)))
    }
}


impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(depth) => write!(f, "{depth}"),
            None => write!(f, "unbounded"),
        }
    }
}
