use std::fmt::Debug;

use num_traits::real::Real;

/// A two-dimensional point supplied by the caller.
///
/// The coordinate type must implement [num_traits::real::Real], reexported as [crate::Real].
pub trait Vertex {
    /// The type of the individual `x` and `y` coordinates
    type Coordinate: Real;

    /// The x [Vertex::Coordinate] value
    fn x(&self) -> Self::Coordinate;
    /// The y [Vertex::Coordinate] value
    fn y(&self) -> Self::Coordinate;
}

impl<C: Debug + Real> Vertex for [C; 2] {
    type Coordinate = C;

    #[inline(always)]
    fn x(&self) -> Self::Coordinate {
        self[0]
    }

    #[inline(always)]
    fn y(&self) -> Self::Coordinate {
        self[1]
    }
}

impl<C: Debug + Real> Vertex for (C, C) {
    type Coordinate = C;

    #[inline(always)]
    fn x(&self) -> Self::Coordinate {
        self.0
    }

    #[inline(always)]
    fn y(&self) -> Self::Coordinate {
        self.1
    }
}

impl<V: Vertex> Vertex for &V {
    type Coordinate = V::Coordinate;

    #[inline(always)]
    fn x(&self) -> Self::Coordinate {
        (**self).x()
    }

    #[inline(always)]
    fn y(&self) -> Self::Coordinate {
        (**self).y()
    }
}
