use glam::Vec3;
use crate::components::material::Material;

/// Tessellation density for planet spheres (the sun uses a denser mesh,
/// picked per-body at spawn time).
pub const PLANET_SPHERE_SEGMENTS: u32 = 48;

/// Tessellation density for ring annuli.
pub const RING_SEGMENTS: u32 = 64;

/// Divisions for orbit-path circles. Sampling emits `segments + 1` vertices
/// with the last equal to the first, closing the loop.
pub const ORBIT_PATH_SEGMENTS: u32 = 100;

/// Geometry primitive attached to a node.
/// Parameters are trusted literals; nothing validates radii or ordering.
#[derive(Debug, Clone, Copy)]
pub enum Geometry {
    /// UV sphere of the given radius.
    Sphere { radius: f32, segments: u32 },
    /// Flat annulus between two radii, lying in the orbital plane.
    Ring { inner: f32, outer: f32, segments: u32 },
    /// Static closed circle traced as a line loop.
    OrbitPath { radius: f32, segments: u32 },
}

impl Geometry {
    pub fn sphere(radius: f32, segments: u32) -> Self {
        Self::Sphere { radius, segments }
    }

    pub fn ring(inner: f32, outer: f32) -> Self {
        Self::Ring {
            inner,
            outer,
            segments: RING_SEGMENTS,
        }
    }

    pub fn orbit_path(radius: f32) -> Self {
        Self::OrbitPath {
            radius,
            segments: ORBIT_PATH_SEGMENTS,
        }
    }
}

/// Renderable component: geometry plus its surface.
#[derive(Debug, Clone, Copy)]
pub struct ShapeComponent {
    pub geometry: Geometry,
    pub material: Material,
}

impl ShapeComponent {
    pub fn new(geometry: Geometry, material: Material) -> Self {
        Self { geometry, material }
    }
}

/// Sample a circle of `radius` in the XZ plane around `center`.
/// Emits `segments + 1` points; the final point repeats the first so a
/// line-strip draw closes visually.
pub fn sample_orbit_path(center: Vec3, radius: f32, segments: u32) -> Vec<Vec3> {
    let mut points = Vec::with_capacity(segments as usize + 1);
    for i in 0..=segments {
        let angle = (i as f32 / segments as f32) * std::f32::consts::TAU;
        points.push(Vec3::new(
            center.x + radius * angle.cos(),
            center.y,
            center.z + radius * angle.sin(),
        ));
    }
    points
}
