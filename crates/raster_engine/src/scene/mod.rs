//! Scene-side behaviour attachment
//!
//! - [`Script`] / [`AnyScript`]: type-erased per-node behaviours
//! - [`Scene`] / [`Node`]: flat host that owns scripts and runs frames
//! - [`MeshRenderer`]: built-in script that draws a mesh

pub mod script;
pub mod node;
pub mod mesh_renderer;

pub use script::{AnyScript, Script};
pub use node::{Node, Scene, SceneError};
pub use mesh_renderer::MeshRenderer;
pub use crate::foundation::collections::NodeId;
