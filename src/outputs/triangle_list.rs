/// A destination for exported triangles, each given as 3 points of type `P`.
///
/// Triangles are only ever appended. Prior contents are preserved, so several polygons can be
/// accumulated into one list.
pub trait TriangleList<P> {
    fn push_triangle(&mut self, p0: P, p1: P, p2: P);

    /// The number of complete triangles held
    fn triangle_count(&self) -> usize;
}

/// Flat list, 3 consecutive points per triangle
impl<P> TriangleList<P> for Vec<P> {
    fn push_triangle(&mut self, p0: P, p1: P, p2: P) {
        self.push(p0);
        self.push(p1);
        self.push(p2);
    }

    fn triangle_count(&self) -> usize {
        self.len() / 3
    }
}

impl<P> TriangleList<P> for Vec<[P; 3]> {
    fn push_triangle(&mut self, p0: P, p1: P, p2: P) {
        self.push([p0, p1, p2]);
    }

    fn triangle_count(&self) -> usize {
        self.len()
    }
}

impl<P> TriangleList<P> for Vec<(P, P, P)> {
    fn push_triangle(&mut self, p0: P, p1: P, p2: P) {
        self.push((p0, p1, p2));
    }

    fn triangle_count(&self) -> usize {
        self.len()
    }
}

impl<P, L: TriangleList<P> + ?Sized> TriangleList<P> for &mut L {
    fn push_triangle(&mut self, p0: P, p1: P, p2: P) {
        (**self).push_triangle(p0, p1, p2)
    }

    fn triangle_count(&self) -> usize {
        (**self).triangle_count()
    }
}
