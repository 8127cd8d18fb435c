use std::collections::HashSet;

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{tessellate, ContourVertex, Driver, IntPoint, LyonTessellator, Point3, PrimitiveKind, TessInput, TessellationEvents, Tessellator, Vertex, VertexRef, WindingRule};

use super::util::{self, polygon, VTest};

/// Collects the raw events of a single tessellation
#[derive(Default)]
struct Events {
    loaded: usize,
    batches: Vec<PrimitiveKind>,
    vertices: Vec<VertexRef>,
    combines: Vec<Vec<(VertexRef, f32)>>,
    errors: Vec<String>,
}

impl TessellationEvents for Events {
    fn begin_batch(&mut self, kind: PrimitiveKind) {
        self.batches.push(kind);
    }

    fn vertex(&mut self, vertex: VertexRef) {
        self.vertices.push(vertex);
    }

    fn combine(&mut self, _position: Point3, neighbors: &[(VertexRef, f32)]) -> VertexRef {
        self.combines.push(neighbors.to_vec());
        VertexRef::new(self.loaded + self.combines.len() - 1)
    }

    fn error(&mut self, message: &str) {
        self.errors.push(message.to_owned());
    }
}

fn events_for(contour: &[VTest]) -> Events {
    let input = TessInput {
        contours: vec![contour.iter().enumerate().map(|(i, v)| ContourVertex {
            vertex: VertexRef::new(i),
            position: Point3::planar(v.x(), v.y()),
        }).collect()],
        winding_rule: WindingRule::Odd,
        normal: TessInput::UP,
    };
    let mut events = Events { loaded: contour.len(), ..Events::default() };
    LyonTessellator::new().tessellate(&input, &mut events);
    events
}

fn run(contours: &[Vec<VTest>]) -> Vec<[IntPoint; 3]> {
    util::init_logging();
    let mut output: Vec<[IntPoint; 3]> = Vec::new();
    Driver::<LyonTessellator>::default().process_contours(contours, &mut output).expect("Tessellation failed");
    output
}

fn truncated(contour: &[VTest]) -> HashSet<IntPoint> {
    contour.iter()
        .map(|v| IntPoint::truncate(v.x(), v.y()))
        .collect()
}

fn assert_uses_input_vertices(triangles: &[[IntPoint; 3]], contour: &[VTest]) {
    let inputs = truncated(contour);
    for triangle in triangles {
        assert!(triangle.iter().all(|p| inputs.contains(p)), "{:?} uses a vertex outside of the input", triangle);
        assert!(triangle[0] != triangle[1] && triangle[1] != triangle[2] && triangle[0] != triangle[2]);
    }
}

#[test]
fn square() {
    let triangles = run(&[polygon::square()]);
    assert_eq!(triangles.len(), 2);
    assert_uses_input_vertices(&triangles, &polygon::square());
}

#[test]
fn closed_square() {
    let mut open = run(&[polygon::square()]);
    let mut closed = run(&[polygon::closed_square()]);
    open.sort();
    closed.sort();
    assert_eq!(open, closed);
}

#[test]
fn regular_polygons() {
    for n in 3..=64 {
        let contour = polygon::regular(n, 1000.);
        let triangles = run(&[contour.clone()]);
        assert_eq!(triangles.len(), n - 2, "{}-gon", n);
        assert_uses_input_vertices(&triangles, &contour);
    }
}

#[test]
fn random_convex_polygons() {
    let mut rng = StdRng::seed_from_u64(0x7e55);
    for _ in 0..50 {
        let n = rng.gen_range(3..30);
        // 5 degrees apart keeps rounded points on the circle in strictly convex position
        let mut degrees: Vec<i32> = Vec::new();
        while degrees.len() < n {
            let d = rng.gen_range(0..360);
            if degrees.iter().all(|&e| (e - d).abs() >= 5 && 360 - (e - d).abs() >= 5) {
                degrees.push(d);
            }
        }
        degrees.sort_unstable();
        let contour: Vec<VTest> = degrees.iter()
            .map(|&d| {
                let (y, x) = (d as f64).to_radians().sin_cos();
                VTest::new((x * 5000.).round(), (y * 5000.).round())
            })
            .collect();

        let triangles = run(&[contour.clone()]);
        assert_eq!(triangles.len(), n - 2, "{:?}", contour);
        assert_uses_input_vertices(&triangles, &contour);
    }
}

#[test]
fn square_with_hole() {
    let triangles = run(&[polygon::square(), polygon::square_hole()]);
    assert_eq!(triangles.len(), 8);

    let mut inputs = truncated(&polygon::square());
    inputs.extend(truncated(&polygon::square_hole()));
    for triangle in &triangles {
        assert!(triangle.iter().all(|p| inputs.contains(p)));
    }
}

#[test]
fn concave_star() {
    let triangles = run(&[polygon::star()]);
    assert_eq!(triangles.len(), 6);
    assert_uses_input_vertices(&triangles, &polygon::star());
}

#[test]
fn self_intersection_synthesizes_vertex() {
    let triangles = run(&[polygon::bowtie()]);
    assert_eq!(triangles.len(), 2);

    let inputs = truncated(&polygon::bowtie());
    let synthesized: Vec<&IntPoint> = triangles.iter().flatten().filter(|p| !inputs.contains(*p)).collect();
    assert!(!synthesized.is_empty());
    for p in synthesized {
        assert!((4..=5).contains(&p.x) && (4..=5).contains(&p.y), "{}", p);
    }
}

#[test]
fn idempotent() {
    let mut driver = Driver::<LyonTessellator>::default();
    let mut first: Vec<IntPoint> = Vec::new();
    let mut second: Vec<IntPoint> = Vec::new();
    for contour in polygon::all() {
        driver.process(&contour, &mut first).unwrap();
        driver.process(&contour, &mut second).unwrap();
    }
    assert_eq!(first, second);
}

#[test]
fn top_level_tessellate() {
    let mut output: Vec<IntPoint> = vec![IntPoint::new(42, 42)];
    tessellate(&[[0f64, 0.], [10., 0.], [0., 10.]], &mut output).unwrap();
    assert_eq!(output.len(), 4);
    assert_eq!(output[0], IntPoint::new(42, 42));
}

#[test]
fn reports_input_handles() {
    for n in 3..=32 {
        let events = events_for(&polygon::regular(n, 1000.));
        assert!(events.errors.is_empty());
        assert!(events.combines.is_empty(), "{}-gon synthesized {} vertices", n, events.combines.len());
        assert_eq!(events.batches, vec![PrimitiveKind::IndependentTriangles]);
        assert_eq!(events.vertices.len(), 3 * (n - 2));
        for triangle in events.vertices.chunks(3) {
            assert!(triangle.iter().all(|vr| vr.index() < n), "{:?}", triangle);
            assert!(triangle[0] != triangle[1] && triangle[1] != triangle[2] && triangle[0] != triangle[2]);
        }
    }
}

#[test]
fn intersection_combines_edge_endpoints() {
    let events = events_for(&polygon::bowtie());
    assert!(events.errors.is_empty());
    assert_eq!(events.combines.len(), 1);

    let neighbors = &events.combines[0];
    assert!(neighbors.len() >= 2);
    assert!(neighbors.iter().all(|(vr, weight)| vr.index() < 4 && (0.0..=1.0).contains(weight)));

    let synthesized = VertexRef::new(4);
    assert_eq!(events.vertices.iter().filter(|&&vr| vr == synthesized).count(), 2);
    assert!(events.vertices.iter().all(|vr| vr.index() <= 4));
}

#[test]
fn input_coordinates_are_not_rounded_through_f32() {
    // x = -499.9999999999998 truncates to -499, while its nearest f32 is -500
    let contour = polygon::regular(3, 1000.);
    let triangles = run(&[contour.clone()]);
    assert_eq!(triangles.len(), 1);
    let mut points = triangles[0].to_vec();
    points.sort();
    assert_eq!(points, vec![IntPoint::new(-500, -866), IntPoint::new(-499, 866), IntPoint::new(1000, 0)]);
}
