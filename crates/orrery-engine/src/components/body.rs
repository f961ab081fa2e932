use crate::api::types::NodeId;

/// Everything needed to spawn one orbiting body: a textured sphere swinging
/// around the origin on a pivot, an optional flat ring, and a static orbit
/// line tracing the path.
///
/// Values are trusted literals from the caller's tables; the factory does
/// no validation.
#[derive(Debug, Clone, Copy)]
pub struct BodySpec {
    /// Body name, used as the sphere's scene tag.
    pub name: &'static str,
    /// Sphere radius in world units.
    pub radius: f32,
    /// Texture name resolved through the registry at spawn.
    pub texture: &'static str,
    /// Distance from the origin to the sphere center.
    pub orbit_radius: f32,
    /// Optional ring annulus around the sphere.
    pub ring: Option<RingSpec>,
}

/// Flat ring annulus description. The inner radius commonly equals the
/// body radius, so the ring visually touches the sphere surface.
#[derive(Debug, Clone, Copy)]
pub struct RingSpec {
    pub inner: f32,
    pub outer: f32,
    pub texture: &'static str,
}

impl BodySpec {
    pub fn new(name: &'static str, radius: f32, texture: &'static str, orbit_radius: f32) -> Self {
        Self {
            name,
            radius,
            texture,
            orbit_radius,
            ring: None,
        }
    }

    pub fn with_ring(mut self, inner: f32, outer: f32, texture: &'static str) -> Self {
        self.ring = Some(RingSpec { inner, outer, texture });
        self
    }
}

/// Handles returned by the body factory. The pivot drives the orbit angle;
/// the sphere drives self-rotation. Ring and orbit-line nodes are spawned
/// too but never addressed after construction, so no handles are kept.
#[derive(Debug, Clone, Copy)]
pub struct BodyHandles {
    pub pivot: NodeId,
    pub sphere: NodeId,
}
