//! Script that draws a mesh every frame

use crate::foundation::collections::NodeId;
use crate::render::{Mesh, VisualServer};

use super::script::Script;

/// Draws its [`Mesh`] each frame while visible
#[derive(Debug, Clone, Default)]
pub struct MeshRenderer {
    mesh: Mesh,
    owner: Option<NodeId>,
    visible: bool,
}

impl MeshRenderer {
    /// Create a visible renderer for `mesh`
    pub fn new(mesh: Mesh) -> Self {
        Self {
            mesh,
            owner: None,
            visible: true,
        }
    }

    /// The rendered mesh
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Swap in a different mesh
    pub fn set_mesh(&mut self, mesh: Mesh) {
        self.mesh = mesh;
    }

    /// Node this renderer is attached to, if any
    pub fn owner(&self) -> Option<NodeId> {
        self.owner
    }

    /// Whether `draw` submits anything
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the mesh
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

impl Script for MeshRenderer {
    fn process(&mut self, _delta: f32) {}

    fn draw(&self, server: &mut dyn VisualServer) {
        if self.visible && !self.mesh.is_empty() {
            self.mesh.draw(server);
        }
    }

    fn set_owner(&mut self, owner: NodeId) {
        self.owner = Some(owner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::PolygonRecorder;
    use crate::scene::Scene;

    fn quad() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.load_from_str("v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n").unwrap();
        mesh
    }

    #[test]
    fn test_draws_through_scene() {
        let mut scene = Scene::new();
        let id = scene.add_node("quad");
        scene.attach_script(id, MeshRenderer::new(quad())).unwrap();

        let mut server = PolygonRecorder::new();
        scene.draw(&mut server);
        assert_eq!(server.triangle_count(), 2);

        let renderer = scene.node(id).unwrap().scripts()[0].downcast_ref::<MeshRenderer>().unwrap();
        assert_eq!(renderer.owner(), Some(id));
    }

    #[test]
    fn test_hidden_or_empty_draws_nothing() {
        let mut server = PolygonRecorder::new();

        let mut renderer = MeshRenderer::new(quad());
        renderer.set_visible(false);
        renderer.draw(&mut server);
        MeshRenderer::new(Mesh::new()).draw(&mut server);

        assert_eq!(server.draw_calls(), 0);
    }
}
