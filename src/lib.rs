mod handle;
mod pool;
mod assembler;
mod collector;
mod collaborator;
mod session;
mod driver;
mod script;
mod options;
pub mod backend;
pub mod export;
mod inputs;
mod outputs;
mod errors;

#[cfg(feature = "debugging")]
mod debug;

#[cfg(any(test, feature = "benchmarking"))]
pub mod tests;

pub use errors::{InternalError, InvalidInput, TessellationError, UnsupportedPrimitive};

pub use handle::VertexRef;
pub use pool::{Point3, VertexPool, PLANE_Z};
pub use assembler::{PrimitiveAssembler, PrimitiveKind, Triangle};
pub use collector::TriangleCollector;
pub use collaborator::{ContourVertex, TessInput, TessellationEvents, Tessellator, WindingRule};
pub use driver::{Driver, DriverState};
#[cfg(feature = "lyon")]
pub use driver::tessellate;
#[cfg(feature = "lyon")]
pub use backend::LyonTessellator;
pub use script::{EventScript, ScriptEvent, ScriptRef};
pub use options::TessOptions;

pub use inputs::*;
pub use outputs::*;

pub use num_traits::real::Real;
