use std::fmt;

/// An exported vertex, with coordinates truncated toward zero
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IntPoint {
    pub x: i32,
    pub y: i32,
}

impl IntPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Truncates both coordinates toward zero. Values outside the `i32` range saturate.
    #[inline(always)]
    pub fn truncate(x: f64, y: f64) -> Self {
        Self::new(x as i32, y as i32)
    }
}

impl fmt::Display for IntPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for IntPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<[i32; 2]> for IntPoint {
    fn from([x, y]: [i32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<IntPoint> for (i32, i32) {
    fn from(p: IntPoint) -> Self {
        (p.x, p.y)
    }
}

impl From<IntPoint> for [i32; 2] {
    fn from(p: IntPoint) -> Self {
        [p.x, p.y]
    }
}
