use crate::{Point3, PrimitiveAssembler, PrimitiveKind, TessellationEvents, TriangleCollector, VertexPool, VertexRef};

/// The state of a single drive: the vertex pool, the batch being assembled, the collected
/// triangles, and the first reported error.
#[derive(Debug, Default)]
pub(crate) struct Session {
    pub pool: VertexPool,
    pub assembler: PrimitiveAssembler,
    pub collector: TriangleCollector,
    pub error: Option<String>,
}

impl Session {
    pub fn new(triangle_capacity: usize) -> Self {
        Self {
            collector: TriangleCollector::with_capacity(triangle_capacity),
            ..Self::default()
        }
    }

    /// Clears everything left over from a previous drive
    pub fn reset(&mut self, inputs: usize, reserve_factor: usize, triangle_capacity: usize) {
        self.pool.reset(inputs, reserve_factor);
        self.assembler.reset();
        self.collector.reset(triangle_capacity);
        self.error = None;
    }

    fn record_error(&mut self, message: &str) {
        if self.error.is_none() {
            tracing::warn!("tessellator reported an error: {}", message);
            self.error = Some(message.to_owned());
        }
    }
}

impl TessellationEvents for Session {
    fn begin_batch(&mut self, kind: PrimitiveKind) {
        self.assembler.begin_batch(kind);
    }

    fn vertex(&mut self, vertex: VertexRef) {
        if !self.pool.contains(vertex) {
            tracing::warn!("vertex {} is not in the pool of {} vertices", vertex, self.pool.len());
            self.record_error(&format!("unknown vertex reference {}", vertex));
            return;
        }

        if let Some(triangle) = self.assembler.push_vertex(vertex) {
            self.collector.push(triangle);
        }
    }

    fn combine(&mut self, position: Point3, neighbors: &[(VertexRef, f32)]) -> VertexRef {
        let vr = self.pool.synthesize(position);
        tracing::trace!("synthesized {} at ({}, {}, {}) from {:?}", vr, position.x, position.y, position.z, neighbors);
        vr
    }

    fn error(&mut self, message: &str) {
        self.record_error(message);
    }
}
