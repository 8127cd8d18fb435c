use crate::{Point3, PrimitiveKind, VertexRef};

/// The rule deciding which regions enclosed by the contours are filled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum WindingRule {
    /// A point is inside if a ray from it crosses the contours an odd number of times
    Odd,
}

/// An input vertex handed to a [Tessellator], along with the handle it must be reported back with
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContourVertex {
    pub vertex: VertexRef,
    pub position: Point3,
}

/// Everything a [Tessellator] needs to know about the polygon being processed.
///
/// The first contour is the outer boundary, any further contours are holes.
#[derive(Debug, Clone)]
pub struct TessInput {
    pub contours: Vec<Vec<ContourVertex>>,
    pub winding_rule: WindingRule,
    pub normal: [f64; 3],
}

impl TessInput {
    /// Positive Z, the normal of the XY plane all input lies in
    pub const UP: [f64; 3] = [0.0, 0.0, 1.0];

    pub fn vertex_count(&self) -> usize {
        self.contours.iter().map(Vec::len).sum()
    }

    /// All input vertices, contour by contour
    pub fn vertices(&self) -> impl Iterator<Item=&ContourVertex> + '_ {
        self.contours.iter().flatten()
    }
}

/// The receiving end of a tessellation. A [Tessellator] reports its result exclusively through
/// these calls, made synchronously from within [Tessellator::tessellate].
pub trait TessellationEvents {
    /// A new primitive batch starts. Following [TessellationEvents::vertex] calls belong to it.
    fn begin_batch(&mut self, kind: PrimitiveKind);

    /// The next vertex of the current batch. `vertex` is either the handle of an input
    /// [ContourVertex] or one previously returned by [TessellationEvents::combine].
    fn vertex(&mut self, vertex: VertexRef);

    /// The tessellator needs a vertex which is not part of the input (e.g. at an intersection).
    /// `neighbors` are the vertices it was derived from, with their interpolation weights.
    ///
    /// Returns the handle to use for the new vertex in later [TessellationEvents::vertex] calls.
    fn combine(&mut self, position: Point3, neighbors: &[(VertexRef, f32)]) -> VertexRef;

    /// The tessellator encountered an error. It may keep reporting batches afterwards.
    fn error(&mut self, message: &str);
}

/// An external polygon tessellator.
///
/// Implementations are free to triangulate however they like, as long as the result is
/// described through `events` before returning.
pub trait Tessellator {
    fn tessellate(&mut self, input: &TessInput, events: &mut dyn TessellationEvents);
}

impl<T: Tessellator + ?Sized> Tessellator for &mut T {
    fn tessellate(&mut self, input: &TessInput, events: &mut dyn TessellationEvents) {
        (**self).tessellate(input, events)
    }
}

impl<T: Tessellator + ?Sized> Tessellator for Box<T> {
    fn tessellate(&mut self, input: &TessInput, events: &mut dyn TessellationEvents) {
        (**self).tessellate(input, events)
    }
}
