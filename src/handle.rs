use std::{fmt, num::NonZeroUsize};

/// A stable handle to a vertex stored in a [VertexPool](crate::VertexPool).
///
/// Handles are plain pool indices and stay valid for the remainder of a drive, no matter how
/// the pool grows. `Option<VertexRef>` is the same size as `VertexRef`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct VertexRef(NonZeroUsize);

impl VertexRef {
    pub fn new(index: usize) -> Self {
        // usize::MAX can never be a real pool index
        debug_assert!(index != usize::MAX, "vertex index out of range");
        let index = index.wrapping_add(1);
        Self(NonZeroUsize::new(index).unwrap_or(NonZeroUsize::MAX))
    }

    pub fn index(self) -> usize {
        self.0.get() - 1
    }
}

impl fmt::Debug for VertexRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.index())
    }
}

impl fmt::Display for VertexRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.index())
    }
}

impl From<usize> for VertexRef {
    #[inline(always)]
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}
