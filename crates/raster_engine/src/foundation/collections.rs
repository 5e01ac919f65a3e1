//! Specialized collection types

pub use slotmap::{SlotMap, Key};

slotmap::new_key_type! {
    /// Stable, copyable handle to a node hosted by a [`crate::scene::Scene`]
    ///
    /// A `NodeId` never keeps its node alive. Once the node is removed the
    /// handle simply stops resolving.
    pub struct NodeId;
}

/// Handle-based map keyed by [`NodeId`]
pub type NodeMap<T> = SlotMap<NodeId, T>;
