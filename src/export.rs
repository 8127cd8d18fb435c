use crate::{IntPoint, Point3, TessellationError, Triangle, TriangleList, VertexPool};

/// Counts from a single [export] call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExportSummary {
    pub exported: usize,
    pub degenerate: usize,
}

/// Whether all 3 vertices share an x coordinate, or all 3 share a y coordinate.
///
/// This only catches axis-aligned slivers; a thin diagonal triangle is not considered degenerate.
pub fn is_degenerate(p0: &Point3, p1: &Point3, p2: &Point3) -> bool {
    (p0.x == p1.x && p0.x == p2.x && p1.x == p2.x)
        || (p0.y == p1.y && p0.y == p2.y && p1.y == p2.y)
}

/// Appends every non-degenerate triangle to `output` as 3 [IntPoint]s, truncating coordinates
/// toward zero.
///
/// Fails without touching `output` if any triangle refers to a vertex missing from `pool`.
pub fn export<L>(triangles: &[Triangle], pool: &VertexPool, output: &mut L) -> Result<ExportSummary, TessellationError>
where
    L: TriangleList<IntPoint> + ?Sized,
{
    if let Some(triangle) = triangles.iter().find(|t| !t.vertices().iter().all(|&vr| pool.contains(vr))) {
        return Err(TessellationError::internal(format!("Triangle {:?} refers outside of a pool of {} vertices", triangle, pool.len())));
    }

    let mut summary = ExportSummary::default();
    for triangle in triangles {
        let [v0, v1, v2] = triangle.vertices();
        let (p0, p1, p2) = (&pool[v0], &pool[v1], &pool[v2]);

        if is_degenerate(p0, p1, p2) {
            summary.degenerate += 1;
            continue;
        }

        output.push_triangle(
            IntPoint::truncate(p0.x, p0.y),
            IntPoint::truncate(p1.x, p1.y),
            IntPoint::truncate(p2.x, p2.y),
        );
        summary.exported += 1;
    }

    Ok(summary)
}
