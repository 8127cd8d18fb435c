use num_traits::ToPrimitive;

use crate::{InvalidInput, Vertex};

/// Strips a duplicate closing vertex (first and last vertex equal) and checks that at least
/// 3 vertices remain.
pub(crate) fn usable_vertices<V: Vertex>(contour: &[V], contour_index: usize) -> Result<&[V], InvalidInput> {
    let usable = match (contour.first(), contour.last()) {
        (Some(first), Some(last)) if contour.len() > 1 && first.x() == last.x() && first.y() == last.y() => &contour[..contour.len() - 1],
        _ => contour,
    };

    if usable.len() < 3 {
        Err(InvalidInput::NotEnoughVertices { contour: contour_index, vertices: usable.len() })
    } else {
        Ok(usable)
    }
}

/// Converts a caller vertex to `f64` coordinates, rejecting anything non-finite.
pub(crate) fn coords<V: Vertex>(v: &V, contour_index: usize, vertex_index: usize) -> Result<[f64; 2], InvalidInput> {
    match (v.x().to_f64(), v.y().to_f64()) {
        (Some(x), Some(y)) if x.is_finite() && y.is_finite() => Ok([x, y]),
        _ => Err(InvalidInput::NonFiniteCoordinate { contour: contour_index, vertex: vertex_index }),
    }
}
