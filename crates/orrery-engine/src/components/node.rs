use glam::Vec3;
use crate::api::types::NodeId;
use crate::components::shape::ShapeComponent;

/// Fat scene node — a single struct with optional components.
/// Designed for simplicity over ECS purity; a solar system is dozens of
/// nodes, not thousands.
///
/// `translation` and `rotation` are world-space values. Nodes in a
/// transform hierarchy get them overwritten by propagation; free nodes
/// keep whatever was set at spawn.
#[derive(Debug, Clone)]
pub struct Node {
    /// Unique identifier.
    pub id: NodeId,
    /// String tag for finding nodes by name.
    pub tag: String,
    /// Whether this node is visible (hidden nodes are skipped at render).
    pub visible: bool,
    /// Position in world space.
    pub translation: Vec3,
    /// Euler rotation in radians, world space. Unbounded — the engine
    /// never normalizes angles.
    pub rotation: Vec3,
    /// Shape component (optional — nodes without shapes are invisible
    /// grouping points, e.g. orbit pivots).
    pub shape: Option<ShapeComponent>,
}

impl Node {
    /// Create a new node with the given ID at the origin.
    pub fn new(id: NodeId) -> Self {
        Self {
            id,
            tag: String::new(),
            visible: true,
            translation: Vec3::ZERO,
            rotation: Vec3::ZERO,
            shape: None,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_translation(mut self, translation: Vec3) -> Self {
        self.translation = translation;
        self
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_shape(mut self, shape: ShapeComponent) -> Self {
        self.shape = Some(shape);
        self
    }
}
