use std::slice;

use crate::Triangle;

/// Ordered, append-only store of the [Triangle]s assembled during one drive.
///
/// Clearing keeps the allocation, so a collector reused across drives only grows once.
#[derive(Debug, Default)]
pub struct TriangleCollector {
    triangles: Vec<Triangle>,
}

impl TriangleCollector {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(capacity),
        }
    }

    /// Empties the collector and makes sure at least `capacity` triangles fit without growing
    pub fn reset(&mut self, capacity: usize) {
        self.triangles.clear();
        self.triangles.reserve(capacity);
    }

    pub fn push(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.triangles.capacity()
    }

    pub fn iter(&self) -> slice::Iter<'_, Triangle> {
        self.triangles.iter()
    }

    pub fn as_slice(&self) -> &[Triangle] {
        &self.triangles
    }
}

impl<'a> IntoIterator for &'a TriangleCollector {
    type Item = &'a Triangle;
    type IntoIter = slice::Iter<'a, Triangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.triangles.iter()
    }
}
