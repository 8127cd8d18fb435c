//! [Tessellator](crate::Tessellator) implementations backed by third-party tessellation crates

#[cfg(feature = "lyon")]
mod lyon_fill;
#[cfg(feature = "lyon")]
pub use lyon_fill::LyonTessellator;
