use crate::components::node::Node;
use crate::components::shape::{sample_orbit_path, Geometry};
use crate::renderer::packet::{FramePacket, PathVertex, RingInstance, SphereInstance};

/// Wire encoding for "no texture": the renderer falls back to the flat
/// material color.
const NO_TEXTURE: f32 = -1.0;

/// Rebuild the frame packet from a set of nodes.
/// Call after transform propagation so translations and rotations are
/// world-space. Nodes route by geometry: spheres and rings become
/// instances, orbit paths are sampled into the shared line-strip section.
pub fn build_frame_packet<'a>(nodes: impl Iterator<Item = &'a Node>, packet: &mut FramePacket) {
    packet.clear();

    for node in nodes {
        if !node.visible {
            continue;
        }

        let shape = match &node.shape {
            Some(s) => s,
            None => continue,
        };

        let texture_slot = shape
            .material
            .texture
            .map(|slot| slot.0 as f32)
            .unwrap_or(NO_TEXTURE);

        match shape.geometry {
            Geometry::Sphere { radius, segments } => {
                packet.push_sphere(SphereInstance {
                    x: node.translation.x,
                    y: node.translation.y,
                    z: node.translation.z,
                    spin: node.rotation.y,
                    radius,
                    texture_slot,
                    emissive_intensity: shape.material.emissive_intensity,
                    alpha: shape.material.alpha,
                    emissive_r: shape.material.emissive[0],
                    emissive_g: shape.material.emissive[1],
                    emissive_b: shape.material.emissive[2],
                    segments: segments as f32,
                });
            }
            Geometry::Ring { inner, outer, segments } => {
                packet.push_ring(RingInstance {
                    x: node.translation.x,
                    y: node.translation.y,
                    z: node.translation.z,
                    spin: node.rotation.y,
                    inner,
                    outer,
                    texture_slot,
                    alpha: shape.material.alpha,
                    segments: segments as f32,
                    _pad0: 0.0,
                    _pad1: 0.0,
                    _pad2: 0.0,
                });
            }
            Geometry::OrbitPath { radius, segments } => {
                for point in sample_orbit_path(node.translation, radius, segments) {
                    packet.push_path_vertex(PathVertex {
                        x: point.x,
                        y: point.y,
                        z: point.z,
                    });
                }
            }
        }
    }
}
