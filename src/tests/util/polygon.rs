use super::vtest::VTest;

pub fn square() -> Vec<VTest> {
    vec![
        (0.0, 0.0).into(),
        (0.0, 10.0).into(),
        (10.0, 10.0).into(),
        (10.0, 0.0).into(),
    ]
}

/// [square], explicitly closed by repeating the first vertex
pub fn closed_square() -> Vec<VTest> {
    let mut p = square();
    p.push(p[0]);
    p
}

pub fn square_hole() -> Vec<VTest> {
    vec![
        (3.0, 3.0).into(),
        (7.0, 3.0).into(),
        (7.0, 7.0).into(),
        (3.0, 7.0).into(),
    ]
}

pub fn star() -> Vec<VTest> {
    vec![
        (10.0, 0.0).into(),
        (20.0, 20.0).into(),
        (0.0, 10.0).into(),
        (-20.0, 20.0).into(),
        (-10.0, 0.0).into(),
        (-20.0, -20.0).into(),
        (0.0, -10.0).into(),
        (20.0, -20.0).into(),
    ]
}

/// Two triangles touching at a single self-intersection at (5, 5)
pub fn bowtie() -> Vec<VTest> {
    vec![
        (0.0, 0.0).into(),
        (10.0, 10.0).into(),
        (10.0, 0.0).into(),
        (0.0, 10.0).into(),
    ]
}

/// A regular `n`-gon around the origin
pub fn regular(n: usize, radius: f64) -> Vec<VTest> {
    (0..n).map(|i| {
        let theta = std::f64::consts::PI * 2. * (i as f64) / (n as f64);
        let (y, x) = theta.sin_cos();
        VTest::new(x * radius, y * radius)
    }).collect()
}

pub fn all() -> Vec<Vec<VTest>> {
    vec![square(), star(), regular(12, 100.0)]
}
