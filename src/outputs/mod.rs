mod int_point;
pub use int_point::IntPoint;
mod triangle_list;
pub use triangle_list::TriangleList;
