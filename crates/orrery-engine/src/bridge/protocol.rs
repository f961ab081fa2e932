/// SharedArrayBuffer layout.
/// Must stay in sync with TypeScript `protocol.ts`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 16 floats]
/// [Spheres: max_spheres × 12 floats]
/// [Rings: max_rings × 12 floats]
/// [Path vertices: max_path_vertices × 3 floats]
/// [Lights: max_lights × 8 floats]
/// [Camera: 16 floats]
/// [Sky: 4 floats]
/// ```
///
/// Capacities are written once into the header at init.
/// TypeScript reads them from the header to compute offsets dynamically.

use crate::api::app::AppConfig;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_MAX_SPHERES: usize = 2;
pub const HEADER_SPHERE_COUNT: usize = 3;
pub const HEADER_MAX_RINGS: usize = 4;
pub const HEADER_RING_COUNT: usize = 5;
pub const HEADER_MAX_PATH_VERTICES: usize = 6;
pub const HEADER_PATH_VERTEX_COUNT: usize = 7;
pub const HEADER_MAX_LIGHTS: usize = 8;
pub const HEADER_LIGHT_COUNT: usize = 9;
pub const HEADER_PROTOCOL_VERSION: usize = 10;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per sphere instance (wire format — never changes).
pub const SPHERE_FLOATS: usize = 12;

/// Floats per ring instance (wire format — never changes).
pub const RING_FLOATS: usize = 12;

/// Floats per path vertex: x, y, z (wire format — never changes).
pub const PATH_VERTEX_FLOATS: usize = 3;

/// Floats per point light: x, y, z, r, g, b, intensity, range.
pub const LIGHT_FLOATS: usize = 8;

/// Floats in the camera block.
pub const CAMERA_FLOATS: usize = 16;

/// Floats in the sky block.
pub const SKY_FLOATS: usize = 4;

/// Default light capacity when an app does not override it.
pub const DEFAULT_MAX_LIGHTS: usize = 4;

/// Runtime-computed buffer layout, derived from app capacities.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    /// Maximum sphere instances.
    pub max_spheres: usize,
    /// Maximum ring instances.
    pub max_rings: usize,
    /// Maximum path vertices.
    pub max_path_vertices: usize,
    /// Maximum point lights.
    pub max_lights: usize,

    /// Size of sphere data section in floats.
    pub sphere_data_floats: usize,
    /// Size of ring data section in floats.
    pub ring_data_floats: usize,
    /// Size of path data section in floats.
    pub path_data_floats: usize,
    /// Size of light data section in floats.
    pub light_data_floats: usize,

    /// Offset (in floats) where sphere data begins.
    pub sphere_data_offset: usize,
    /// Offset (in floats) where ring data begins.
    pub ring_data_offset: usize,
    /// Offset (in floats) where path data begins.
    pub path_data_offset: usize,
    /// Offset (in floats) where light data begins.
    pub light_data_offset: usize,
    /// Offset (in floats) where the camera block begins.
    pub camera_offset: usize,
    /// Offset (in floats) where the sky block begins.
    pub sky_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(
        max_spheres: usize,
        max_rings: usize,
        max_path_vertices: usize,
        max_lights: usize,
    ) -> Self {
        let sphere_data_floats = max_spheres * SPHERE_FLOATS;
        let ring_data_floats = max_rings * RING_FLOATS;
        let path_data_floats = max_path_vertices * PATH_VERTEX_FLOATS;
        let light_data_floats = max_lights * LIGHT_FLOATS;

        let sphere_data_offset = HEADER_FLOATS;
        let ring_data_offset = sphere_data_offset + sphere_data_floats;
        let path_data_offset = ring_data_offset + ring_data_floats;
        let light_data_offset = path_data_offset + path_data_floats;
        let camera_offset = light_data_offset + light_data_floats;
        let sky_offset = camera_offset + CAMERA_FLOATS;

        let buffer_total_floats = sky_offset + SKY_FLOATS;
        let buffer_total_bytes = buffer_total_floats * 4;

        Self {
            max_spheres,
            max_rings,
            max_path_vertices,
            max_lights,
            sphere_data_floats,
            ring_data_floats,
            path_data_floats,
            light_data_floats,
            sphere_data_offset,
            ring_data_offset,
            path_data_offset,
            light_data_offset,
            camera_offset,
            sky_offset,
            buffer_total_floats,
            buffer_total_bytes,
        }
    }

    /// Compute layout from an AppConfig.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.max_spheres,
            config.max_rings,
            config.max_path_vertices,
            config.max_lights,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_default_config_matches_expected_sizes() {
        let layout = ProtocolLayout::from_config(&AppConfig::default());

        assert_eq!(layout.max_spheres, 16);
        assert_eq!(layout.max_rings, 4);
        assert_eq!(layout.max_path_vertices, 1024);
        assert_eq!(layout.max_lights, DEFAULT_MAX_LIGHTS);

        assert_eq!(layout.sphere_data_floats, 16 * 12);
        assert_eq!(layout.ring_data_floats, 4 * 12);
        assert_eq!(layout.path_data_floats, 1024 * 3);
        assert_eq!(layout.light_data_floats, 4 * 8);

        let expected_total = HEADER_FLOATS
            + 16 * 12
            + 4 * 12
            + 1024 * 3
            + 4 * 8
            + CAMERA_FLOATS
            + SKY_FLOATS;
        assert_eq!(layout.buffer_total_floats, expected_total);
        assert_eq!(layout.buffer_total_bytes, expected_total * 4);
    }

    #[test]
    fn custom_capacities_compute_correctly() {
        let layout = ProtocolLayout::new(32, 8, 2048, 2);

        assert_eq!(layout.sphere_data_floats, 32 * 12);
        assert_eq!(layout.ring_data_floats, 8 * 12);
        assert_eq!(layout.path_data_floats, 2048 * 3);
        assert_eq!(layout.light_data_floats, 2 * 8);
    }

    #[test]
    fn offsets_are_contiguous() {
        let layout = ProtocolLayout::new(100, 20, 500, 6);

        assert_eq!(layout.sphere_data_offset, HEADER_FLOATS);
        assert_eq!(layout.ring_data_offset, layout.sphere_data_offset + layout.sphere_data_floats);
        assert_eq!(layout.path_data_offset, layout.ring_data_offset + layout.ring_data_floats);
        assert_eq!(layout.light_data_offset, layout.path_data_offset + layout.path_data_floats);
        assert_eq!(layout.camera_offset, layout.light_data_offset + layout.light_data_floats);
        assert_eq!(layout.sky_offset, layout.camera_offset + CAMERA_FLOATS);
        assert_eq!(layout.buffer_total_floats, layout.sky_offset + SKY_FLOATS);
    }

    #[test]
    fn default_solar_scene_fits_the_layout() {
        // Sun + 8 planets = 9 spheres; 2 rings; 8 orbit paths × 101 vertices.
        let layout = ProtocolLayout::from_config(&AppConfig::default());
        assert!(9 <= layout.max_spheres);
        assert!(2 <= layout.max_rings);
        assert!(8 * 101 <= layout.max_path_vertices);
    }
}
