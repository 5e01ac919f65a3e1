//! # Core Engine Module
//!
//! Shared abstractions other subsystems depend on.
//!
//! ## Organization
//!
//! - **Config**: configuration structures for all engine subsystems

pub mod config;

// Re-export foundation modules for convenience
pub use crate::foundation;

// Re-export commonly used config types
pub use config::{
    EngineConfig,
    AssetConfig,
    FrameConfig,
    Config,
    ConfigError,
};
