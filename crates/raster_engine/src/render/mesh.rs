//! Mesh representation for the software rasterizer
//!
//! A [`Mesh`] is a flat, denormalized triangle list: every three consecutive
//! [`Point`]s form one triangle. There is no index buffer; the list is handed
//! to a [`VisualServer`] exactly as stored.

use std::io::BufRead;
use std::path::Path;

use thiserror::Error;

use crate::assets::obj_loader::{ObjError, ObjLoader};
use crate::assets::{Asset, AssetError};

use super::point::Point;
use super::server::VisualServer;

/// Errors raised while (re)loading a mesh
#[derive(Error, Debug)]
pub enum MeshError {
    /// Reading or parsing the OBJ source failed
    #[error(transparent)]
    Obj(#[from] ObjError),

    /// Asset bytes were not valid UTF-8 text
    #[error("Mesh source is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}

/// Triangle list geometry
///
/// # Invariant
/// `points().len()` is always a multiple of 3.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    triangles: Vec<Point>,
}

impl Mesh {
    /// Create an empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mesh from explicit triangles
    pub fn from_triangles(triangles: impl IntoIterator<Item = [Point; 3]>) -> Self {
        Self {
            triangles: triangles.into_iter().flatten().collect(),
        }
    }

    /// Replace the triangle list with the contents of the OBJ file at `path`
    ///
    /// All-or-nothing: on error the previous triangles are kept.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<(), MeshError> {
        let triangles = ObjLoader::load_obj(path)?;
        self.replace(triangles);
        Ok(())
    }

    /// Same as [`Mesh::load`] but reads from an already open source
    pub fn load_from_reader<R: BufRead>(&mut self, reader: R) -> Result<(), MeshError> {
        let triangles = ObjLoader::parse(reader)?;
        self.replace(triangles);
        Ok(())
    }

    /// Same as [`Mesh::load`] but parses in-memory OBJ text
    pub fn load_from_str(&mut self, source: &str) -> Result<(), MeshError> {
        self.load_from_reader(source.as_bytes())
    }

    /// Hand the whole triangle list to `server`
    pub fn draw(&self, server: &mut dyn VisualServer) {
        log::trace!("Drawing mesh with {} triangle(s)", self.triangle_count());
        server.draw_polygon(&self.triangles);
    }

    /// Flat point list, three per triangle
    pub fn points(&self) -> &[Point] {
        &self.triangles
    }

    /// Iterate over triangles in load order
    pub fn triangles(&self) -> impl Iterator<Item = [Point; 3]> + '_ {
        self.triangles.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Number of triangles
    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    /// Whether the mesh has no triangles
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Drop all triangles
    pub fn clear(&mut self) {
        self.triangles.clear();
    }

    fn replace(&mut self, triangles: Vec<Point>) {
        debug_assert_eq!(triangles.len() % 3, 0);
        self.triangles = triangles;
    }
}

impl Asset for Mesh {
    fn from_bytes(bytes: &[u8]) -> Result<Self, AssetError> {
        let source = std::str::from_utf8(bytes).map_err(MeshError::from)?;
        let mut mesh = Mesh::new();
        mesh.load_from_str(source)?;
        Ok(mesh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec4;
    use crate::render::PolygonRecorder;

    const TRIANGLE: &str = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";
    const QUAD: &str = "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n";

    #[test]
    fn test_new_mesh_is_empty() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.triangle_count(), 0);
    }

    #[test]
    fn test_load_replaces_previous_content() {
        let mut mesh = Mesh::new();
        mesh.load_from_str(QUAD).unwrap();
        assert_eq!(mesh.triangle_count(), 2);

        mesh.load_from_str(TRIANGLE).unwrap();
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.points().len(), 3);
    }

    #[test]
    fn test_failed_load_keeps_previous_content() {
        let mut mesh = Mesh::new();
        mesh.load_from_str(QUAD).unwrap();
        let before = mesh.clone();

        let err = mesh.load_from_str("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 99\n").unwrap_err();
        assert!(matches!(err, MeshError::Obj(ObjError::IndexOutOfRange { index: 99, .. })));
        assert_eq!(mesh, before);
    }

    #[test]
    fn test_triangles_iterator() {
        let mut mesh = Mesh::new();
        mesh.load_from_str(QUAD).unwrap();

        let tris: Vec<[Point; 3]> = mesh.triangles().collect();
        assert_eq!(tris.len(), 2);
        assert_eq!(tris[0][0], tris[1][0]);
        assert_eq!(tris[0][2], tris[1][1]);
        assert_eq!(tris[1][2].position, Vec4::new(0.0, 1.0, 0.0, 1.0));
    }

    #[test]
    fn test_draw_hands_whole_list_to_server() {
        let mut mesh = Mesh::new();
        mesh.load_from_str(QUAD).unwrap();

        let mut server = PolygonRecorder::new();
        mesh.draw(&mut server);

        assert_eq!(server.draw_calls(), 1);
        assert_eq!(server.polygons()[0].as_slice(), mesh.points());
    }

    #[test]
    fn test_from_triangles() {
        let p = Point::default();
        let mesh = Mesh::from_triangles(vec![[p, p, p], [p, p, p]]);
        assert_eq!(mesh.points().len(), 6);
    }

    #[test]
    fn test_asset_from_bytes() {
        let mesh = Mesh::from_bytes(TRIANGLE.as_bytes()).unwrap();
        assert_eq!(mesh.triangle_count(), 1);

        let err = Mesh::from_bytes(&[0xff, 0xfe, 0x00]).unwrap_err();
        assert!(matches!(err, AssetError::Mesh(MeshError::InvalidUtf8(_))));
    }
}
