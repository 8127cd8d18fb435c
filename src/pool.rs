use std::ops;

use crate::{InvalidInput, Vertex, VertexRef, inputs};

/// The z coordinate given to every loaded vertex; input is planar with +Z as its normal.
pub const PLANE_Z: f64 = 1.0;

/// A vertex position as seen by the tessellator
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn planar(x: f64, y: f64) -> Self {
        Self::new(x, y, PLANE_Z)
    }
}

impl From<[f64; 3]> for Point3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

/// Growable, append-only vertex storage for a single drive.
///
/// Input vertices are loaded first and occupy `0..loaded()`. Vertices synthesized by the
/// tessellator are appended after them. Vertices are only ever addressed through
/// [VertexRef] indices, so growing the underlying storage never invalidates a handle.
#[derive(Debug, Default)]
pub struct VertexPool {
    vertices: Vec<Point3>,
    loaded: usize,
}

impl VertexPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empties the pool and reserves room for `inputs` loaded vertices plus `inputs * (reserve_factor - 1)`
    /// synthesized ones.
    pub fn reset(&mut self, inputs: usize, reserve_factor: usize) {
        self.vertices.clear();
        self.loaded = 0;
        self.vertices.reserve(inputs.saturating_mul(reserve_factor.max(2)));
    }

    /// Empties the pool and loads a single contour into it.
    pub fn load<V: Vertex>(&mut self, contour: &[V]) -> Result<ops::Range<usize>, InvalidInput> {
        self.reset(contour.len(), 2);
        self.append_contour(contour, 0)
    }

    /// Appends the usable vertices of `contour` (see [Driver::process](crate::Driver::process)) with z fixed
    /// to [PLANE_Z], returning the index range they occupy.
    ///
    /// Contours must all be appended before the first vertex is synthesized.
    pub fn append_contour<V: Vertex>(&mut self, contour: &[V], contour_index: usize) -> Result<ops::Range<usize>, InvalidInput> {
        debug_assert_eq!(self.synthesized(), 0, "contours loaded after synthesis");

        let usable = inputs::usable_vertices(contour, contour_index)?;
        let start = self.vertices.len();
        for (vertex_index, v) in usable.iter().enumerate() {
            let [x, y] = match inputs::coords(v, contour_index, vertex_index) {
                Ok(coords) => coords,
                Err(err) => {
                    self.vertices.truncate(start);
                    return Err(err);
                }
            };
            self.vertices.push(Point3::planar(x, y));
        }
        self.loaded = self.vertices.len();
        Ok(start..self.loaded)
    }

    /// Appends a vertex created by the tessellator and returns its handle.
    pub fn synthesize(&mut self, position: Point3) -> VertexRef {
        let vr = VertexRef::new(self.vertices.len());
        self.vertices.push(position);
        vr
    }

    /// Bounds-checked read
    pub fn at(&self, vr: VertexRef) -> Option<Point3> {
        self.vertices.get(vr.index()).copied()
    }

    pub fn contains(&self, vr: VertexRef) -> bool {
        vr.index() < self.vertices.len()
    }

    /// The number of vertices loaded from input contours
    pub fn loaded(&self) -> usize {
        self.loaded
    }

    /// The number of vertices synthesized since the last reset
    pub fn synthesized(&self) -> usize {
        self.vertices.len() - self.loaded
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.vertices.capacity()
    }

    pub fn iter(&self) -> impl Iterator<Item=(VertexRef, &Point3)> + '_ {
        self.vertices.iter().enumerate().map(|(i, p)| (VertexRef::new(i), p))
    }
}

impl ops::Index<VertexRef> for VertexPool {
    type Output = Point3;

    fn index(&self, vr: VertexRef) -> &Self::Output {
        &self.vertices[vr.index()]
    }
}
