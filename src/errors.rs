use std::{error, fmt};

use backtrace::Backtrace;

use crate::PrimitiveKind;

/// Describes why the input contours were rejected before tessellation started
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidInput {
    /// No contours were provided
    NoContours,
    /// A contour has fewer than 3 usable vertices once a duplicate closing vertex is removed
    NotEnoughVertices {
        contour: usize,
        vertices: usize,
    },
    /// A coordinate is NaN, infinite, or cannot be represented as an `f64`
    NonFiniteCoordinate {
        contour: usize,
        vertex: usize,
    },
}

impl error::Error for InvalidInput { }

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoContours => write!(f, "No contours were provided"),
            Self::NotEnoughVertices { contour, vertices } => write!(f, "Contour {} only contains {} usable vertices", contour, vertices),
            Self::NonFiniteCoordinate { contour, vertex } => write!(f, "Vertex {} of contour {} has a non-finite coordinate", vertex, contour),
        }
    }
}

/// A primitive batch kind which cannot be assembled into triangles.
///
/// This is never returned from [Driver::process](crate::Driver::process); vertices of such a batch are
/// dropped and the condition is logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsupportedPrimitive(pub Option<PrimitiveKind>);

impl error::Error for UnsupportedPrimitive { }

impl fmt::Display for UnsupportedPrimitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(kind) => write!(f, "Unsupported primitive batch kind {:?}", kind),
            None => write!(f, "Vertex received before any primitive batch began"),
        }
    }
}

#[derive(Debug)]
pub struct InternalError {
    pub msg: String,
    pub backtrace: Backtrace,
}

impl InternalError {
    #[cold]
    #[inline(always)]
    pub(crate) fn new(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            backtrace: Backtrace::new_unresolved(),
        }
    }
}

impl fmt::Display for InternalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{:?}", self.msg, self.backtrace)
    }
}

impl error::Error for InternalError { }

/// Describes an error which occurred while processing a polygon
#[derive(Debug)]
#[non_exhaustive]
pub enum TessellationError {
    /// The input was rejected before the tessellator was invoked
    InvalidInput(InvalidInput),
    /// The tessellator reported an error during the drive. Holds the first reported message.
    TessellationFailed(String),
    /// A collected triangle violated a pool invariant, or a bug was encountered.
    InternalError(InternalError),
}

impl TessellationError {
    #[inline(always)]
    pub(crate) fn internal(msg: impl Into<String>) -> Self {
        TessellationError::InternalError(InternalError::new(msg))
    }
}

impl From<InvalidInput> for TessellationError {
    fn from(e: InvalidInput) -> Self {
        Self::InvalidInput(e)
    }
}

impl fmt::Display for TessellationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(error) => fmt::Display::fmt(error, f),
            Self::TessellationFailed(msg) => write!(f, "Tessellation failed: {}", msg),
            Self::InternalError(error) => fmt::Display::fmt(error, f),
        }
    }
}

impl error::Error for TessellationError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::InvalidInput(error) => Some(error),
            Self::InternalError(error) => Some(error),
            Self::TessellationFailed(_) => None,
        }
    }
}
