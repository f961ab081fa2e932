// core/transform.rs
//
// Transform hierarchy — tracks parent-child relationships by NodeId.
// Completely decoupled from Node/Scene internals.
//
// Orbit pivots are the canonical use: a pivot sits at the origin, its child
// sphere carries an offset along +X, and spinning the pivot's Y rotation
// sweeps the sphere around a circle of that radius.
//
// Usage:
//   let mut tree = TransformTree::new();
//   tree.set_parent(sphere_id, Some(pivot_id));
//   tree.propagate(&mut scene);  // Writes world transforms into nodes

use std::collections::HashMap;
use glam::Vec3;
use crate::api::types::NodeId;
use crate::core::scene::Scene;

/// Local transform data for nodes in a hierarchy.
///
/// Rotation is Euler angles in radians. Angles are accumulated without
/// wraparound; consumers that need a bounded angle normalize themselves.
#[derive(Debug, Clone, Copy)]
pub struct LocalTransform {
    /// Position relative to parent (or world if no parent).
    pub offset: Vec3,
    /// Rotation relative to parent.
    pub rotation: Vec3,
}

impl Default for LocalTransform {
    fn default() -> Self {
        Self {
            offset: Vec3::ZERO,
            rotation: Vec3::ZERO,
        }
    }
}

impl LocalTransform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_offset(mut self, offset: Vec3) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }
}

/// Node entry in the transform hierarchy.
#[derive(Debug, Clone, Default)]
struct TransformNode {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    local: LocalTransform,
}

/// Transform hierarchy tree — manages parent-child relationships.
///
/// Exists separately from Scene to keep the flat node store simple.
/// Position composition uses the parent's Y (vertical-axis) rotation only:
/// that is the one axis orbit pivots ever rotate on, and it keeps child
/// offsets in the orbital plane. Rotations compose by component-wise sum,
/// which is exact while parents carry pure Y rotations; leaf-only X or Z
/// rotation (ring tilt) passes through untouched.
#[derive(Debug, Default)]
pub struct TransformTree {
    nodes: HashMap<NodeId, TransformNode>,
    /// Nodes with no parent (top-level).
    roots: Vec<NodeId>,
    /// Dirty flag — set when the hierarchy changes, cleared after propagate.
    dirty: bool,
}

impl TransformTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node in the hierarchy with a default local transform.
    /// Must be called before setting parent/children.
    pub fn register(&mut self, id: NodeId) {
        self.nodes.entry(id).or_default();
        if !self.roots.contains(&id) {
            self.roots.push(id);
        }
        self.dirty = true;
    }

    /// Register a node with a specific local transform.
    pub fn register_with(&mut self, id: NodeId, local: LocalTransform) {
        let node = self.nodes.entry(id).or_default();
        node.local = local;
        if !self.roots.contains(&id) {
            self.roots.push(id);
        }
        self.dirty = true;
    }

    /// Set the parent of a node. Pass `None` to make it a root.
    pub fn set_parent(&mut self, child: NodeId, parent: Option<NodeId>) {
        // Ensure both exist
        self.nodes.entry(child).or_default();
        if let Some(p) = parent {
            self.nodes.entry(p).or_default();
        }

        // Remove from old parent's children
        if let Some(old_parent) = self.nodes.get(&child).and_then(|n| n.parent) {
            if let Some(old_node) = self.nodes.get_mut(&old_parent) {
                old_node.children.retain(|&c| c != child);
            }
        }

        // Update child's parent
        if let Some(node) = self.nodes.get_mut(&child) {
            node.parent = parent;
        }

        // Add to new parent's children
        if let Some(p) = parent {
            if let Some(parent_node) = self.nodes.get_mut(&p) {
                if !parent_node.children.contains(&child) {
                    parent_node.children.push(child);
                }
            }
            self.roots.retain(|&r| r != child);
        } else {
            if !self.roots.contains(&child) {
                self.roots.push(child);
            }
        }

        self.dirty = true;
    }

    /// Set the local transform for a node.
    pub fn set_local(&mut self, id: NodeId, local: LocalTransform) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.local = local;
            self.dirty = true;
        }
    }

    /// Get the local transform for a node.
    pub fn get_local(&self, id: NodeId) -> Option<&LocalTransform> {
        self.nodes.get(&id).map(|n| &n.local)
    }

    /// Get the local transform mutably.
    pub fn get_local_mut(&mut self, id: NodeId) -> Option<&mut LocalTransform> {
        self.dirty = true;
        self.nodes.get_mut(&id).map(|n| &mut n.local)
    }

    /// Get the parent of a node.
    pub fn get_parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(&id).and_then(|n| n.parent)
    }

    /// Get the children of a node.
    pub fn get_children(&self, id: NodeId) -> Option<&[NodeId]> {
        self.nodes.get(&id).map(|n| n.children.as_slice())
    }

    /// Remove a node from the hierarchy.
    /// Children become roots (orphaned).
    pub fn remove(&mut self, id: NodeId) {
        if let Some(node) = self.nodes.remove(&id) {
            if let Some(parent) = node.parent {
                if let Some(parent_node) = self.nodes.get_mut(&parent) {
                    parent_node.children.retain(|&c| c != id);
                }
            }

            // Orphan children (make them roots)
            for child in node.children {
                if let Some(child_node) = self.nodes.get_mut(&child) {
                    child_node.parent = None;
                }
                if !self.roots.contains(&child) {
                    self.roots.push(child);
                }
            }

            self.roots.retain(|&r| r != id);
        }
        self.dirty = true;
    }

    /// Propagate transforms from roots down through the hierarchy.
    /// Updates Node.translation/rotation from parent transforms.
    /// No-op while nothing changed since the last call.
    pub fn propagate(&mut self, scene: &mut Scene) {
        if !self.dirty {
            return;
        }

        let roots: Vec<NodeId> = self.roots.clone();
        for root in roots {
            self.propagate_recursive(root, Vec3::ZERO, Vec3::ZERO, scene);
        }

        self.dirty = false;
    }

    fn propagate_recursive(
        &self,
        id: NodeId,
        parent_pos: Vec3,
        parent_rot: Vec3,
        scene: &mut Scene,
    ) {
        let Some(node) = self.nodes.get(&id) else { return };
        let local = &node.local;

        // Swing the offset around the parent's vertical axis, then translate.
        let cos_y = parent_rot.y.cos();
        let sin_y = parent_rot.y.sin();
        let rotated_offset = Vec3::new(
            local.offset.x * cos_y + local.offset.z * sin_y,
            local.offset.y,
            -local.offset.x * sin_y + local.offset.z * cos_y,
        );
        let world_pos = parent_pos + rotated_offset;
        let world_rot = parent_rot + local.rotation;

        if let Some(scene_node) = scene.get_mut(id) {
            scene_node.translation = world_pos;
            scene_node.rotation = world_rot;
        }

        let children: Vec<NodeId> = node.children.clone();
        for child in children {
            self.propagate_recursive(child, world_pos, world_rot, scene);
        }
    }

    /// Check if the hierarchy has pending changes.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the hierarchy as needing propagation.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Number of nodes in the hierarchy.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the hierarchy is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Clear all hierarchy data.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.roots.clear();
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::node::Node;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn parent_child_relationship() {
        let mut tree = TransformTree::new();
        let pivot = NodeId(1);
        let sphere = NodeId(2);

        tree.register(pivot);
        tree.register(sphere);
        tree.set_parent(sphere, Some(pivot));

        assert_eq!(tree.get_parent(sphere), Some(pivot));
        assert_eq!(tree.get_children(pivot), Some([sphere].as_slice()));
    }

    #[test]
    fn propagate_applies_offset() {
        let mut tree = TransformTree::new();
        let mut scene = Scene::new();

        let pivot = NodeId(1);
        let sphere = NodeId(2);

        scene.spawn(Node::new(pivot));
        scene.spawn(Node::new(sphere));

        tree.register(pivot);
        tree.register_with(sphere, LocalTransform::new().with_offset(Vec3::new(62.0, 0.0, 0.0)));
        tree.set_parent(sphere, Some(pivot));

        tree.propagate(&mut scene);

        let n = scene.get(sphere).unwrap();
        assert_eq!(n.translation, Vec3::new(62.0, 0.0, 0.0));
    }

    #[test]
    fn pivot_rotation_sweeps_child_around_vertical_axis() {
        let mut tree = TransformTree::new();
        let mut scene = Scene::new();

        let pivot = NodeId(1);
        let sphere = NodeId(2);

        scene.spawn(Node::new(pivot));
        scene.spawn(Node::new(sphere));

        tree.register(pivot);
        tree.register_with(sphere, LocalTransform::new().with_offset(Vec3::new(10.0, 0.0, 0.0)));
        tree.set_parent(sphere, Some(pivot));

        // Quarter turn: +X offset swings toward -Z.
        tree.get_local_mut(pivot).unwrap().rotation.y = FRAC_PI_2;
        tree.propagate(&mut scene);

        let n = scene.get(sphere).unwrap();
        assert!(n.translation.x.abs() < 1e-5, "x was {}", n.translation.x);
        assert!((n.translation.z + 10.0).abs() < 1e-5, "z was {}", n.translation.z);

        // Half turn: offset mirrored through the origin.
        tree.get_local_mut(pivot).unwrap().rotation.y = PI;
        tree.propagate(&mut scene);

        let n = scene.get(sphere).unwrap();
        assert!((n.translation.x + 10.0).abs() < 1e-5);
        assert!(n.translation.z.abs() < 1e-4);
    }

    #[test]
    fn child_rotation_sums_with_parent() {
        let mut tree = TransformTree::new();
        let mut scene = Scene::new();

        let pivot = NodeId(1);
        let sphere = NodeId(2);

        scene.spawn(Node::new(pivot));
        scene.spawn(Node::new(sphere));

        tree.register(pivot);
        tree.register(sphere);
        tree.set_parent(sphere, Some(pivot));

        tree.get_local_mut(pivot).unwrap().rotation.y = 0.4;
        tree.get_local_mut(sphere).unwrap().rotation.y = 0.3;
        tree.propagate(&mut scene);

        let n = scene.get(sphere).unwrap();
        assert!((n.rotation.y - 0.7).abs() < 1e-6);
    }

    #[test]
    fn leaf_tilt_survives_parent_rotation() {
        let mut tree = TransformTree::new();
        let mut scene = Scene::new();

        let pivot = NodeId(1);
        let ring = NodeId(2);

        scene.spawn(Node::new(pivot));
        scene.spawn(Node::new(ring));

        tree.register(pivot);
        tree.register_with(
            ring,
            LocalTransform::new()
                .with_offset(Vec3::new(138.0, 0.0, 0.0))
                .with_rotation(Vec3::new(-FRAC_PI_2, 0.0, 0.0)),
        );
        tree.set_parent(ring, Some(pivot));

        tree.get_local_mut(pivot).unwrap().rotation.y = 1.25;
        tree.propagate(&mut scene);

        let n = scene.get(ring).unwrap();
        assert!((n.rotation.x + FRAC_PI_2).abs() < 1e-6);
        assert!((n.rotation.y - 1.25).abs() < 1e-6);
    }

    #[test]
    fn propagate_skips_when_clean() {
        let mut tree = TransformTree::new();
        let mut scene = Scene::new();
        let id = NodeId(1);

        scene.spawn(Node::new(id));
        tree.register(id);
        tree.propagate(&mut scene);
        assert!(!tree.is_dirty());

        // Mutating the scene directly leaves the tree clean; propagate must
        // not overwrite the manual change.
        scene.get_mut(id).unwrap().translation = Vec3::new(5.0, 5.0, 5.0);
        tree.propagate(&mut scene);
        assert_eq!(scene.get(id).unwrap().translation, Vec3::new(5.0, 5.0, 5.0));
    }

    #[test]
    fn remove_orphans_children() {
        let mut tree = TransformTree::new();
        let pivot = NodeId(1);
        let sphere = NodeId(2);

        tree.register(pivot);
        tree.register(sphere);
        tree.set_parent(sphere, Some(pivot));

        tree.remove(pivot);

        assert_eq!(tree.get_parent(sphere), None);
        assert!(tree.roots.contains(&sphere));
    }
}
