use std::slice;

use crate::{ContourVertex, IntPoint, InvalidInput, TessInput, TessOptions, TessellationError, Tessellator, TriangleList, Vertex, VertexRef, WindingRule, export, session::Session};

#[cfg(feature = "debugging")]
use crate::debug;
#[cfg(feature = "lyon")]
use crate::LyonTessellator;

/// Where a [Driver] is within a call to [Driver::process]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    /// No polygon has been loaded for the current call
    Idle,
    /// The input contours are in the vertex pool
    Loaded,
    /// The tessellator is reporting its result
    Drawing,
    /// The call finished, successfully or not
    Done,
}

/// Runs a [Tessellator] over caller polygons and converts its primitive batches into a flat,
/// degenerate-free list of integer triangles.
///
/// A `Driver` may be reused for any number of polygons, one at a time. Nothing from a previous
/// call influences the next one; only allocations are kept.
pub struct Driver<T: Tessellator> {
    tessellator: T,
    options: TessOptions,
    session: Session,
    state: DriverState,
    #[cfg(feature = "debugging")]
    svg_step: usize,
}

impl<T: Tessellator> Driver<T> {
    pub fn new(tessellator: T) -> Self {
        Self::with_options(tessellator, TessOptions::default())
    }

    pub fn with_options(tessellator: T, options: TessOptions) -> Self {
        Self {
            tessellator,
            options,
            session: Session::new(options.triangle_capacity),
            state: DriverState::Idle,
            #[cfg(feature = "debugging")]
            svg_step: 0,
        }
    }

    pub fn options(&self) -> &TessOptions {
        &self.options
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn tessellator(&self) -> &T {
        &self.tessellator
    }

    pub fn tessellator_mut(&mut self) -> &mut T {
        &mut self.tessellator
    }

    pub fn into_tessellator(self) -> T {
        self.tessellator
    }

    /// Tessellates a single contour and appends the resulting triangles to `result`, 3 points
    /// per triangle.
    ///
    /// If the last vertex of `contour` equals the first, it is ignored. At least 3 vertices must
    /// remain. Triangles whose vertices all share an x or all share a y coordinate are
    /// discarded, and coordinates are truncated toward zero.
    ///
    /// On error, `result` is left as it was.
    pub fn process<V, L>(&mut self, contour: &[V], result: &mut L) -> Result<(), TessellationError>
    where
        V: Vertex,
        L: TriangleList<IntPoint> + ?Sized,
    {
        self.process_contours::<V, &[V], L>(slice::from_ref(&contour), result)
    }

    /// Like [Driver::process], for a polygon with holes. The first contour is the outer
    /// boundary and all others are holes. Every contour must have at least 3 usable vertices.
    pub fn process_contours<V, C, L>(&mut self, contours: &[C], result: &mut L) -> Result<(), TessellationError>
    where
        V: Vertex,
        C: AsRef<[V]>,
        L: TriangleList<IntPoint> + ?Sized,
    {
        self.state = DriverState::Idle;
        let outcome = match self.preprocess(contours) {
            Ok(input) => {
                self.drive(&input);
                self.postprocess(result)
            }
            Err(err) => Err(err),
        };
        self.state = DriverState::Done;
        outcome
    }

    fn preprocess<V: Vertex, C: AsRef<[V]>>(&mut self, contours: &[C]) -> Result<TessInput, TessellationError> {
        if contours.is_empty() {
            return Err(InvalidInput::NoContours.into());
        }

        let vertex_count = contours.iter().map(|c| c.as_ref().len()).sum();
        self.session.reset(vertex_count, self.options.pool_reserve_factor, self.options.triangle_capacity);

        let mut ranges = Vec::with_capacity(contours.len());
        for (contour_index, contour) in contours.iter().enumerate() {
            ranges.push(self.session.pool.append_contour(contour.as_ref(), contour_index)?);
        }

        let pool = &self.session.pool;
        let tess_contours = ranges.into_iter()
            .map(|range| range.map(|i| {
                let vertex = VertexRef::new(i);
                ContourVertex { vertex, position: pool[vertex] }
            }).collect())
            .collect();

        self.state = DriverState::Loaded;
        tracing::debug!("loaded {} contours, {} vertices", contours.len(), pool.loaded());

        Ok(TessInput {
            contours: tess_contours,
            winding_rule: WindingRule::Odd,
            normal: TessInput::UP,
        })
    }

    fn drive(&mut self, input: &TessInput) {
        self.state = DriverState::Drawing;
        self.tessellator.tessellate(input, &mut self.session);
    }

    fn postprocess<L: TriangleList<IntPoint> + ?Sized>(&mut self, result: &mut L) -> Result<(), TessellationError> {
        if let Some(message) = self.session.error.take() {
            return Err(TessellationError::TessellationFailed(message));
        }

        #[cfg(feature = "debugging")]
        self.output_svg();

        let session = &self.session;
        let summary = export::export(session.collector.as_slice(), &session.pool, result)?;
        tracing::debug!(
            "collected {} triangles: {} exported, {} degenerate; {} vertices synthesized, {} dropped",
            session.collector.len(),
            summary.exported,
            summary.degenerate,
            session.pool.synthesized(),
            session.assembler.dropped(),
        );
        Ok(())
    }

    #[cfg(feature = "debugging")]
    fn output_svg(&mut self) {
        if let Some(context) = debug::svg::SvgContext::from_env(&self.session.pool) {
            let mut svg = debug::svg::SvgOutput::new(&context);
            let file_name = format!("{:03}.svg", self.svg_step);
            if svg.append_drive(&self.session.pool, &self.session.collector).is_ok() {
                if let Err(err) = svg.save(&file_name) {
                    tracing::warn!("failed to write {}: {}", file_name, err);
                }
            }
            self.svg_step += 1;
        }
    }
}

#[cfg(feature = "lyon")]
impl Default for Driver<LyonTessellator> {
    fn default() -> Self {
        Self::new(LyonTessellator::new())
    }
}

/// Tessellates `contour` with a fresh [LyonTessellator]-backed [Driver]. See [Driver::process].
#[cfg(feature = "lyon")]
pub fn tessellate<V, L>(contour: &[V], result: &mut L) -> Result<(), TessellationError>
where
    V: Vertex,
    L: TriangleList<IntPoint> + ?Sized,
{
    Driver::<LyonTessellator>::default().process(contour, result)
}
