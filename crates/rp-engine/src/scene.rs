//! Rendering collaborator seam
//!
//! The evaluator's display and highlight routines only need a container
//! that can hold text and line primitives. `MemoryScene` is a retained
//! implementation with an event journal; real rendering lives elsewhere.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// Identifier of a node inside a scene container
pub type NodeId = u64;

/// Displayable primitives used by the win presentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SceneNode {
    /// A text label
    Text { content: String, x: f64, y: f64 },
    /// A straight line segment
    Line {
        from: (f64, f64),
        to: (f64, f64),
        width: f64,
        color: u32,
    },
}

/// Scene-graph container contract consumed by the pipeline
pub trait SceneContainer {
    /// Add a node, returning its id
    fn add_child(&mut self, node: SceneNode) -> NodeId;

    /// Remove a node; returns false if the id was not present
    fn remove_child(&mut self, id: NodeId) -> bool;
}

/// One recorded container mutation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SceneEvent {
    Added { id: NodeId, node: SceneNode },
    Removed { id: NodeId },
}

/// Retained in-memory scene with an append-only journal
///
/// The journal preserves mutation order, which is what the sequencing
/// tests assert against.
#[derive(Debug, Default)]
pub struct MemoryScene {
    next_id: NodeId,
    nodes: BTreeMap<NodeId, SceneNode>,
    journal: Vec<SceneEvent>,
}

impl MemoryScene {
    /// Create an empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently attached nodes
    pub fn nodes(&self) -> &BTreeMap<NodeId, SceneNode> {
        &self.nodes
    }

    /// Node lookup
    pub fn get(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(&id)
    }

    /// Full mutation history
    pub fn journal(&self) -> &[SceneEvent] {
        &self.journal
    }

    /// Number of attached nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if no nodes are attached
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl SceneContainer for MemoryScene {
    fn add_child(&mut self, node: SceneNode) -> NodeId {
        let id = self.next_id;
        self.next_id += 1;
        self.nodes.insert(id, node.clone());
        self.journal.push(SceneEvent::Added { id, node });
        id
    }

    fn remove_child(&mut self, id: NodeId) -> bool {
        if self.nodes.remove(&id).is_some() {
            self.journal.push(SceneEvent::Removed { id });
            true
        } else {
            log::warn!("remove_child: node {id} not attached");
            false
        }
    }
}

/// A scene shared between the pipeline and an outer driver
pub type SharedScene = Arc<Mutex<MemoryScene>>;

/// Create a shareable scene
pub fn shared_scene() -> SharedScene {
    Arc::new(Mutex::new(MemoryScene::new()))
}

impl SceneContainer for SharedScene {
    fn add_child(&mut self, node: SceneNode) -> NodeId {
        self.lock().add_child(node)
    }

    fn remove_child(&mut self, id: NodeId) -> bool {
        self.lock().remove_child(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_remove_and_journal() {
        let mut scene = MemoryScene::new();
        let text = SceneNode::Text {
            content: "hello".into(),
            x: 0.0,
            y: 0.0,
        };
        let id = scene.add_child(text.clone());
        assert_eq!(scene.get(id), Some(&text));
        assert!(scene.remove_child(id));
        assert!(!scene.remove_child(id));
        assert!(scene.is_empty());
        assert_eq!(
            scene.journal(),
            &[
                SceneEvent::Added { id, node: text },
                SceneEvent::Removed { id },
            ]
        );
    }

    #[test]
    fn test_shared_scene_delegates() {
        let mut scene = shared_scene();
        let id = scene.add_child(SceneNode::Line {
            from: (0.0, 0.0),
            to: (10.0, 0.0),
            width: 1.0,
            color: 0xff0000,
        });
        assert_eq!(scene.lock().len(), 1);
        assert!(scene.remove_child(id));
        assert!(scene.lock().is_empty());
    }
}
