mod vertex;
pub use vertex::Vertex;
mod contour;
pub(crate) use contour::{usable_vertices, coords};
