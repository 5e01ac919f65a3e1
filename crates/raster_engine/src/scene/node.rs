//! Minimal node host for scripts
//!
//! A [`Scene`] is a flat set of [`Node`]s, each owning its scripts. It has
//! no hierarchy or transforms; it exists to give scripts an owner and to
//! drive the per-frame `process` / `draw` calls in a stable order.

use thiserror::Error;

use crate::foundation::collections::{NodeId, NodeMap};
use crate::render::VisualServer;

use super::script::AnyScript;

/// Scene errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneError {
    /// The node id does not resolve (never existed or was removed)
    #[error("Node not found: {0:?}")]
    NodeNotFound(NodeId),
}

/// A named holder of scripts
#[derive(Debug)]
pub struct Node {
    name: String,
    scripts: Vec<AnyScript>,
}

impl Node {
    fn new(name: String) -> Self {
        Self {
            name,
            scripts: Vec::new(),
        }
    }

    /// Node name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Scripts in attach order
    pub fn scripts(&self) -> &[AnyScript] {
        &self.scripts
    }

    /// Mutable access to the scripts, in attach order
    pub fn scripts_mut(&mut self) -> &mut [AnyScript] {
        &mut self.scripts
    }
}

/// Flat collection of nodes driven once per frame
#[derive(Debug, Default)]
pub struct Scene {
    nodes: NodeMap<Node>,
    order: Vec<NodeId>,
}

impl Scene {
    /// Create an empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node and return its handle
    pub fn add_node(&mut self, name: impl Into<String>) -> NodeId {
        let id = self.nodes.insert(Node::new(name.into()));
        self.order.push(id);
        log::debug!("Added node {:?} ({})", id, self.nodes[id].name);
        id
    }

    /// Remove a node, returning it together with its scripts
    pub fn remove_node(&mut self, id: NodeId) -> Option<Node> {
        let node = self.nodes.remove(id)?;
        self.order.retain(|&other| other != id);
        Some(node)
    }

    /// Look up a node
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Look up a node mutably
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    /// First node with the given name, in insertion order
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.order
            .iter()
            .copied()
            .find(|&id| self.nodes.get(id).is_some_and(|node| node.name == name))
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the scene has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total number of scripts across all nodes
    pub fn script_count(&self) -> usize {
        self.nodes.values().map(|node| node.scripts.len()).sum()
    }

    /// Give `script` to the node `id`
    ///
    /// The script's owner is set to `id` before it is stored.
    pub fn attach_script(&mut self, id: NodeId, script: impl Into<AnyScript>) -> Result<(), SceneError> {
        let node = self.nodes.get_mut(id).ok_or(SceneError::NodeNotFound(id))?;
        let mut script = script.into();
        script.set_owner(id);
        log::debug!("Attached {} to node {}", script.type_name(), node.name);
        node.scripts.push(script);
        Ok(())
    }

    /// Call `process` on every script, node insertion order first
    pub fn process(&mut self, delta: f32) {
        for &id in &self.order {
            if let Some(node) = self.nodes.get_mut(id) {
                for script in &mut node.scripts {
                    script.process(delta);
                }
            }
        }
    }

    /// Call `draw` on every script, in the same order as [`Scene::process`]
    pub fn draw(&self, server: &mut dyn VisualServer) {
        for node in self.order.iter().filter_map(|&id| self.nodes.get(id)) {
            for script in &node.scripts {
                script.draw(server);
            }
        }
    }
}
