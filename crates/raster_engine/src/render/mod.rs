//! CPU-side rendering types
//!
//! - [`Point`]: interpolatable vertex record
//! - [`Mesh`]: flat triangle list loaded from OBJ text
//! - [`VisualServer`]: boundary to whatever rasterizes the triangles

pub mod point;
pub mod mesh;
pub mod server;

pub use point::Point;
pub use mesh::{Mesh, MeshError};
pub use server::{PolygonRecorder, VisualServer};
