use smallvec::SmallVec;

use crate::{Point3, PrimitiveKind, TessInput, TessellationEvents, Tessellator, VertexRef};

/// Identifies a vertex within an [EventScript]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptRef {
    /// The n-th input vertex, counting through all contours in order
    Input(usize),
    /// The vertex created by the n-th [ScriptEvent::Combine] of the script
    Synthesized(usize),
}

/// One recorded [TessellationEvents] call
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptEvent {
    Begin(PrimitiveKind),
    Vertex(ScriptRef),
    Combine {
        position: Point3,
        neighbors: SmallVec<[(ScriptRef, f32); 4]>,
    },
    Error(String),
}

/// A [Tessellator] which ignores the polygon and replays a fixed list of events.
///
/// Useful for feeding the output of a tessellator which cannot be driven directly (recorded
/// elsewhere, or produced by foreign code), and for exercising specific batch sequences.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventScript {
    events: Vec<ScriptEvent>,
}

impl EventScript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[ScriptEvent] {
        &self.events
    }

    pub fn push(&mut self, event: ScriptEvent) -> &mut Self {
        self.events.push(event);
        self
    }

    pub fn begin(mut self, kind: PrimitiveKind) -> Self {
        self.events.push(ScriptEvent::Begin(kind));
        self
    }

    /// Appends one [ScriptEvent::Vertex] per input vertex index
    pub fn vertices<I: IntoIterator<Item=usize>>(mut self, inputs: I) -> Self {
        self.events.extend(inputs.into_iter().map(|i| ScriptEvent::Vertex(ScriptRef::Input(i))));
        self
    }

    pub fn vertex(mut self, vertex: ScriptRef) -> Self {
        self.events.push(ScriptEvent::Vertex(vertex));
        self
    }

    pub fn combine<N: IntoIterator<Item=(ScriptRef, f32)>>(mut self, position: Point3, neighbors: N) -> Self {
        self.events.push(ScriptEvent::Combine {
            position,
            neighbors: neighbors.into_iter().collect(),
        });
        self
    }

    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.events.push(ScriptEvent::Error(message.into()));
        self
    }

    /// A single batch of `kind` over the given input vertices
    pub fn batch<I: IntoIterator<Item=usize>>(kind: PrimitiveKind, inputs: I) -> Self {
        Self::new().begin(kind).vertices(inputs)
    }
}

impl From<Vec<ScriptEvent>> for EventScript {
    fn from(events: Vec<ScriptEvent>) -> Self {
        Self { events }
    }
}

impl Tessellator for EventScript {
    fn tessellate(&mut self, input: &TessInput, events: &mut dyn TessellationEvents) {
        let inputs: Vec<VertexRef> = input.vertices().map(|cv| cv.vertex).collect();
        let mut synthesized: Vec<VertexRef> = Vec::new();

        let resolve = |sr: ScriptRef, synthesized: &[VertexRef]| match sr {
            ScriptRef::Input(i) => inputs.get(i).copied(),
            ScriptRef::Synthesized(i) => synthesized.get(i).copied(),
        };

        for event in &self.events {
            match event {
                ScriptEvent::Begin(kind) => events.begin_batch(*kind),
                ScriptEvent::Vertex(sr) => match resolve(*sr, synthesized.as_slice()) {
                    Some(vr) => events.vertex(vr),
                    None => events.error(&format!("script refers to missing vertex {:?}", sr)),
                },
                ScriptEvent::Combine { position, neighbors } => {
                    let neighbors: SmallVec<[(VertexRef, f32); 4]> = neighbors.iter()
                        .filter_map(|&(sr, weight)| resolve(sr, synthesized.as_slice()).map(|vr| (vr, weight)))
                        .collect();
                    synthesized.push(events.combine(*position, &neighbors));
                }
                ScriptEvent::Error(message) => events.error(message),
            }
        }
    }
}
