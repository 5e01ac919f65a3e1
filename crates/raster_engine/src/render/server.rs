//! Boundary to the rendering backend
//!
//! The engine never rasterizes by itself. Anything that can consume a flat
//! triangle list implements [`VisualServer`].

use super::point::Point;

/// Rendering backend that receives triangle lists
pub trait VisualServer {
    /// Rasterize `points`, read as consecutive runs of three (one triangle each)
    fn draw_polygon(&mut self, points: &[Point]);
}

/// A [`VisualServer`] that keeps every submitted polygon
///
/// Used by tools and tests to observe exactly what was handed to the backend.
#[derive(Debug, Default, Clone)]
pub struct PolygonRecorder {
    polygons: Vec<Vec<Point>>,
}

impl PolygonRecorder {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `draw_polygon` call so far, oldest first
    pub fn polygons(&self) -> &[Vec<Point>] {
        &self.polygons
    }

    /// Number of `draw_polygon` calls so far
    pub fn draw_calls(&self) -> usize {
        self.polygons.len()
    }

    /// Total triangles submitted across all calls
    pub fn triangle_count(&self) -> usize {
        self.polygons.iter().map(|p| p.len() / 3).sum()
    }

    /// Forget everything recorded so far
    pub fn clear(&mut self) {
        self.polygons.clear();
    }
}

impl VisualServer for PolygonRecorder {
    fn draw_polygon(&mut self, points: &[Point]) {
        self.polygons.push(points.to_vec());
    }
}
