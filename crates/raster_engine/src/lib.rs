//! # Raster Engine
//!
//! CPU-side core of a small real-time rendering engine.
//!
//! ## Features
//!
//! - **Vertex Math**: [`render::Point`] carries position, color, normal and
//!   texture coordinate, and blends them all at once for barycentric
//!   interpolation
//! - **Mesh Loading**: Wavefront OBJ subset, fan-triangulated into a flat
//!   triangle list with checked indices
//! - **Scripts**: heterogeneous per-node behaviours behind the move-only
//!   [`scene::AnyScript`] wrapper
//! - **Configuration**: TOML / RON engine configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use raster_engine::prelude::*;
//!
//! let mut mesh = Mesh::new();
//! mesh.load_from_str("v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n")?;
//!
//! let mut scene = Scene::new();
//! let node = scene.add_node("quad");
//! scene.attach_script(node, MeshRenderer::new(mesh))?;
//!
//! let mut server = PolygonRecorder::new();
//! scene.process(1.0 / 60.0);
//! scene.draw(&mut server);
//! assert_eq!(server.triangle_count(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::must_use_candidate)]

// Core engine modules
pub mod core;

pub mod foundation;
pub mod config;
pub mod assets;
pub mod render;
pub mod scene;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        assets::{Asset, AssetError, AssetLoader, ObjError, ObjLoader},
        core::config::{AssetConfig, Config, EngineConfig, FrameConfig},
        foundation::{
            collections::NodeId,
            math::{Vec3, Vec4},
        },
        render::{Mesh, MeshError, Point, PolygonRecorder, VisualServer},
        scene::{AnyScript, MeshRenderer, Node, Scene, SceneError, Script},
    };
}
