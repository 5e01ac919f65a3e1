//! Asset loading
//!
//! Assets are plain values built from raw bytes. [`AssetLoader`] resolves
//! relative names against the configured search paths and hands the file
//! contents to [`Asset::from_bytes`].

pub mod obj_loader;

pub use obj_loader::{AttributeKind, ObjError, ObjLoader};

use std::path::PathBuf;

use thiserror::Error;

use crate::core::config::AssetConfig;
use crate::render::MeshError;

/// Asset trait for loadable resources
pub trait Asset: Sized + 'static {
    /// Load asset from raw bytes
    fn from_bytes(bytes: &[u8]) -> Result<Self, AssetError>;
}

/// Asset loading errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// Asset not found in any search path
    #[error("Asset not found: {0}")]
    NotFound(String),

    /// IO error during asset loading
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Mesh data could not be decoded
    #[error("Invalid mesh: {0}")]
    Mesh(#[from] MeshError),
}

/// Resolves asset names and builds assets from files
#[derive(Debug, Clone)]
pub struct AssetLoader {
    search_paths: Vec<PathBuf>,
}

impl AssetLoader {
    /// Create a loader from the asset configuration
    pub fn new(config: &AssetConfig) -> Self {
        Self {
            search_paths: config.search_paths.iter().map(PathBuf::from).collect(),
        }
    }

    /// Directories searched for relative names, in order
    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// Find the file `path` refers to
    ///
    /// Each search path is tried in order; if none contains the file, `path`
    /// is used as given.
    pub fn resolve(&self, path: &str) -> Result<PathBuf, AssetError> {
        let found = self
            .search_paths
            .iter()
            .map(|dir| dir.join(path))
            .find(|candidate| candidate.is_file());

        let file_path = found.unwrap_or_else(|| PathBuf::from(path));
        if file_path.is_file() {
            Ok(file_path)
        } else {
            Err(AssetError::NotFound(path.to_string()))
        }
    }

    /// Read and decode an asset
    pub fn load<T: Asset>(&self, path: &str) -> Result<T, AssetError> {
        let file_path = self.resolve(path)?;
        log::debug!("Loading asset {} from {}", path, file_path.display());
        let bytes = std::fs::read(&file_path)?;
        T::from_bytes(&bytes)
    }
}
