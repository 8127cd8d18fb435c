use smallvec::SmallVec;

use crate::{UnsupportedPrimitive, VertexRef};

/// The encoding of a primitive batch announced by the tessellator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum PrimitiveKind {
    /// Every 3 vertices form an unrelated triangle
    IndependentTriangles,
    /// The first vertex is shared by every triangle; each new vertex forms a triangle with the previous one
    Fan,
    /// Each new vertex forms a triangle with the previous two, alternating orientation
    Strip,
    /// A closed boundary loop. Not assembled.
    LineLoop,
    /// A tessellator-specific code with no known meaning. Not assembled.
    Other(u32),
}

/// Three [VertexRef]s, in winding order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triangle(pub [VertexRef; 3]);

impl Triangle {
    pub fn new(a: VertexRef, b: VertexRef, c: VertexRef) -> Self {
        Self([a, b, c])
    }

    pub fn vertices(&self) -> [VertexRef; 3] {
        self.0
    }

    /// The raw pool indices of the vertices
    pub fn indices(&self) -> [usize; 3] {
        [self.0[0].index(), self.0[1].index(), self.0[2].index()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    List,
    Fan,
    Strip,
}

impl Mode {
    fn from_kind(kind: PrimitiveKind) -> Option<Self> {
        match kind {
            PrimitiveKind::IndependentTriangles => Some(Mode::List),
            PrimitiveKind::Fan => Some(Mode::Fan),
            PrimitiveKind::Strip => Some(Mode::Strip),
            PrimitiveKind::LineLoop | PrimitiveKind::Other(_) => None,
        }
    }
}

/// Turns the vertex stream of list, fan, and strip batches into [Triangle]s.
#[derive(Debug, Default)]
pub struct PrimitiveAssembler {
    kind: Option<PrimitiveKind>,
    mode: Option<Mode>,
    pending: SmallVec<[VertexRef; 2]>,
    // Strip only: the next triangle has its last two vertices swapped
    odd: bool,
    warned: bool,
    dropped: usize,
}

impl PrimitiveAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets the current batch as well as the dropped vertex count
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn begin_batch(&mut self, kind: PrimitiveKind) {
        self.kind = Some(kind);
        self.mode = Mode::from_kind(kind);
        self.pending.clear();
        self.odd = false;
        self.warned = false;
    }

    /// Feeds the next vertex of the current batch, returning the triangle it completes, if any.
    pub fn push_vertex(&mut self, vr: VertexRef) -> Option<Triangle> {
        let mode = match self.mode {
            Some(mode) => mode,
            None => {
                self.drop_vertex();
                return None;
            }
        };

        if self.pending.len() < 2 {
            self.pending.push(vr);
            return None;
        }

        let (v0, v1) = (self.pending[0], self.pending[1]);
        let triangle = match mode {
            Mode::List => {
                self.pending.clear();
                Triangle::new(v0, v1, vr)
            }
            Mode::Fan => {
                self.pending[1] = vr;
                Triangle::new(v0, v1, vr)
            }
            Mode::Strip => {
                let triangle = if self.odd {
                    Triangle::new(v0, vr, v1)
                } else {
                    Triangle::new(v0, v1, vr)
                };
                self.pending[0] = v1;
                self.pending[1] = vr;
                self.odd = !self.odd;
                triangle
            }
        };
        Some(triangle)
    }

    /// The kind of the current batch, if one has begun
    pub fn kind(&self) -> Option<PrimitiveKind> {
        self.kind
    }

    /// The number of vertices dropped because their batch kind could not be assembled
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    fn drop_vertex(&mut self) {
        self.dropped += 1;
        if !self.warned {
            self.warned = true;
            tracing::warn!("{}; dropping its vertices", UnsupportedPrimitive(self.kind));
        }
    }
}
