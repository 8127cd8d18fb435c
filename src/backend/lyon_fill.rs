use std::{collections::HashMap, convert::TryFrom};

use lyon::math::{point, Point};
use lyon::path::{EndpointId, Path};
use lyon::tessellation::{FillGeometryBuilder, FillOptions, FillRule, FillTessellator, FillVertex, GeometryBuilder, GeometryBuilderError, VertexId, VertexSource};
use smallvec::SmallVec;

use crate::{Point3, PrimitiveKind, TessInput, TessellationEvents, Tessellator, VertexRef, WindingRule, pool::PLANE_Z};

/// A [Tessellator] running lyon's sweep-line fill tessellator.
///
/// lyon reports plain triangles, so everything arrives as a single
/// [PrimitiveKind::IndependentTriangles] batch. Vertices lyon creates at edge intersections are
/// reported through [TessellationEvents::combine] with the two edge endpoints as neighbors.
pub struct LyonTessellator {
    tessellator: FillTessellator,
    tolerance: f32,
}

impl LyonTessellator {
    pub fn new() -> Self {
        Self {
            tessellator: FillTessellator::new(),
            tolerance: FillOptions::DEFAULT_TOLERANCE,
        }
    }

    /// Sets the flattening tolerance passed to lyon
    pub fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance;
        self
    }

    fn fill_options(&self, winding_rule: WindingRule) -> FillOptions {
        let fill_rule = match winding_rule {
            WindingRule::Odd => FillRule::EvenOdd,
        };
        FillOptions::tolerance(self.tolerance).with_fill_rule(fill_rule)
    }
}

impl Default for LyonTessellator {
    fn default() -> Self {
        Self::new()
    }
}

fn to_point(p: Point3) -> Point {
    point(p.x as f32, p.y as f32)
}

impl Tessellator for LyonTessellator {
    fn tessellate(&mut self, input: &TessInput, events: &mut dyn TessellationEvents) {
        let mut endpoints = HashMap::with_capacity(input.vertex_count());
        let mut builder = Path::builder();
        for contour in &input.contours {
            let mut vertices = contour.iter();
            let first = match vertices.next() {
                Some(first) => first,
                None => continue,
            };
            endpoints.insert(builder.begin(to_point(first.position)), first.vertex);
            for cv in vertices {
                endpoints.insert(builder.line_to(to_point(cv.position)), cv.vertex);
            }
            builder.end(true);
        }
        let path = builder.build();
        let options = self.fill_options(input.winding_rule);

        let mut output = EventBuilder {
            events,
            endpoints: &endpoints,
            batch_started: false,
        };
        if let Err(err) = self.tessellator.tessellate_with_ids(path.id_iter(), &path, None, &options, &mut output) {
            output.events.error(&format!("lyon fill tessellation failed: {:?}", err));
        }
    }
}

/// Translates lyon's geometry builder callbacks into [TessellationEvents]
struct EventBuilder<'e> {
    events: &'e mut dyn TessellationEvents,
    endpoints: &'e HashMap<EndpointId, VertexRef>,
    batch_started: bool,
}

impl<'e> EventBuilder<'e> {
    fn resolve(&self, id: EndpointId) -> Option<VertexRef> {
        self.endpoints.get(&id).copied()
    }
}

impl<'e> GeometryBuilder for EventBuilder<'e> {
    fn add_triangle(&mut self, a: VertexId, b: VertexId, c: VertexId) {
        if !self.batch_started {
            self.events.begin_batch(PrimitiveKind::IndependentTriangles);
            self.batch_started = true;
        }
        for id in [a, b, c].iter() {
            self.events.vertex(VertexRef::new(id.0 as usize));
        }
    }
}

impl<'e> FillGeometryBuilder for EventBuilder<'e> {
    fn add_fill_vertex(&mut self, vertex: FillVertex) -> Result<VertexId, GeometryBuilderError> {
        let mut neighbors: SmallVec<[(VertexRef, f32); 4]> = SmallVec::new();
        for source in vertex.sources() {
            match source {
                VertexSource::Endpoint { id } => {
                    if let Some(vr) = self.resolve(id) {
                        return to_vertex_id(vr);
                    }
                }
                VertexSource::Edge { from, to, t } => {
                    if let (Some(from), Some(to)) = (self.resolve(from), self.resolve(to)) {
                        neighbors.push((from, 1.0 - t));
                        neighbors.push((to, t));
                    }
                }
            }
        }

        let position = vertex.position();
        let vr = self.events.combine(Point3::new(position.x as f64, position.y as f64, PLANE_Z), &neighbors);
        to_vertex_id(vr)
    }
}

fn to_vertex_id(vr: VertexRef) -> Result<VertexId, GeometryBuilderError> {
    u32::try_from(vr.index())
        .map(VertexId)
        .map_err(|_| GeometryBuilderError::TooManyVertices)
}
