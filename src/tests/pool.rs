use crate::{InvalidInput, Point3, VertexPool, VertexRef, PLANE_Z};

use super::util::{polygon, VTest};

#[test]
fn load_sets_plane_z() {
    let mut pool = VertexPool::new();
    let range = pool.load(&polygon::square()).unwrap();
    assert_eq!(range, 0..4);
    assert_eq!(pool.loaded(), 4);
    assert_eq!(pool.synthesized(), 0);
    assert_eq!(pool.at(VertexRef::new(2)), Some(Point3::new(10.0, 10.0, PLANE_Z)));
    assert!(pool.iter().all(|(_, p)| p.z == PLANE_Z));
}

#[test]
fn load_drops_closing_vertex() {
    let mut pool = VertexPool::new();
    pool.load(&polygon::closed_square()).unwrap();
    assert_eq!(pool.loaded(), 4);
    assert_eq!(pool.at(VertexRef::new(4)), None);
}

#[test]
fn load_reserves_room_for_synthesis() {
    let mut pool = VertexPool::new();
    pool.load(&polygon::star()).unwrap();
    assert!(pool.capacity() >= 16);
}

#[test]
fn load_clears_previous_contents() {
    let mut pool = VertexPool::new();
    pool.load(&polygon::star()).unwrap();
    pool.synthesize(Point3::planar(1.0, 1.0));
    pool.load(&polygon::square()).unwrap();
    assert_eq!(pool.len(), 4);
    assert_eq!(pool.synthesized(), 0);
}

#[test]
fn too_few_vertices() {
    let mut pool = VertexPool::new();
    let closed_pair = vec![VTest::new(0., 0.), VTest::new(1., 1.), VTest::new(0., 0.)];
    assert_eq!(pool.load(&closed_pair), Err(InvalidInput::NotEnoughVertices { contour: 0, vertices: 2 }));
    assert_eq!(pool.load::<VTest>(&[]), Err(InvalidInput::NotEnoughVertices { contour: 0, vertices: 0 }));
}

#[test]
fn non_finite_coordinate() {
    let mut pool = VertexPool::new();
    let contour = vec![[0f64, 0.], [1., f64::NAN], [1., 1.]];
    assert_eq!(pool.load(&contour), Err(InvalidInput::NonFiniteCoordinate { contour: 0, vertex: 1 }));
    assert!(pool.is_empty());
}

#[test]
fn append_contours() {
    let mut pool = VertexPool::new();
    pool.reset(8, 2);
    assert_eq!(pool.append_contour(&polygon::square(), 0).unwrap(), 0..4);
    assert_eq!(pool.append_contour(&polygon::square_hole(), 1).unwrap(), 4..8);
    assert_eq!(pool.loaded(), 8);
    assert_eq!(pool[VertexRef::new(4)], Point3::planar(3.0, 3.0));
}

#[test]
fn synthesize_appends_after_loaded() {
    let mut pool = VertexPool::new();
    pool.load(&polygon::square()).unwrap();
    let vr = pool.synthesize(Point3::new(5.0, 5.0, 0.5));
    assert_eq!(vr.index(), 4);
    assert_eq!(pool.synthesized(), 1);
    assert_eq!(pool.at(vr), Some(Point3::new(5.0, 5.0, 0.5)));
}

#[test]
fn handles_survive_growth() {
    let mut pool = VertexPool::new();
    pool.load(&polygon::square()).unwrap();
    let capacity = pool.capacity();

    let handles: Vec<_> = (0..capacity * 4)
        .map(|i| pool.synthesize(Point3::planar(i as f64, -(i as f64))))
        .collect();

    assert!(pool.capacity() > capacity);
    for (i, vr) in handles.into_iter().enumerate() {
        assert_eq!(vr.index(), 4 + i);
        assert_eq!(pool[vr], Point3::planar(i as f64, -(i as f64)));
    }
}

#[test]
fn at_is_bounds_checked() {
    let mut pool = VertexPool::new();
    pool.load(&polygon::square()).unwrap();
    assert!(pool.contains(VertexRef::new(3)));
    assert!(!pool.contains(VertexRef::new(4)));
    assert_eq!(pool.at(VertexRef::new(100)), None);
}

#[test]
fn handle_round_trips_index() {
    assert_eq!(VertexRef::new(0).index(), 0);
    assert_eq!(VertexRef::new(usize::MAX - 1).index(), usize::MAX - 1);
}

#[test]
#[should_panic]
#[cfg(debug_assertions)]
fn handle_rejects_max_index() {
    VertexRef::new(usize::MAX);
}
