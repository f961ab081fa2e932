/// Point light and sky state for the 3D lighting pass.
///
/// Lights are persistent — they stay until explicitly removed.
/// Each frame, the engine serializes active lights to the SAB
/// for the renderer's lighting pass.

use glam::Vec3;

use crate::api::types::NodeId;
use crate::components::material::TextureSlot;
use crate::core::scene::Scene;

/// A point light with position, color, intensity, and falloff range.
///
/// Wire format (8 floats / 32 bytes):
/// `[x, y, z, r, g, b, intensity, range]`
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct PointLight {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub intensity: f32,
    /// Falloff distance in world units; 0 means infinite.
    pub range: f32,
}

impl PointLight {
    /// Create a new point light at the given position.
    ///
    /// - `pos`: World-space position
    /// - `color`: RGB color (typically [0..1] but can exceed 1.0 for HDR)
    /// - `intensity`: Light strength multiplier
    /// - `range`: Falloff distance in world units
    pub fn new(pos: Vec3, color: [f32; 3], intensity: f32, range: f32) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            z: pos.z,
            r: color[0],
            g: color[1],
            b: color[2],
            intensity,
            range,
        }
    }

    /// Set the position.
    pub fn with_pos(mut self, pos: Vec3) -> Self {
        self.x = pos.x;
        self.y = pos.y;
        self.z = pos.z;
        self
    }
}

/// Active lights plus the ambient term for the scene.
///
/// Lights are persistent — add them once and they stay until removed.
/// Ambient color defaults to white; the intensity scalar is what the
/// day/night presets drive.
pub struct LightRig {
    lights: Vec<PointLight>,
    ambient_color: [f32; 3],
    ambient_intensity: f32,
}

impl LightRig {
    pub fn new() -> Self {
        Self {
            lights: Vec::new(),
            ambient_color: [1.0, 1.0, 1.0],
            ambient_intensity: 0.1,
        }
    }

    /// Create a LightRig with a specific light capacity.
    pub fn with_capacity(max_lights: usize) -> Self {
        Self {
            lights: Vec::with_capacity(max_lights),
            ambient_color: [1.0, 1.0, 1.0],
            ambient_intensity: 0.1,
        }
    }

    /// Add a point light to the scene.
    pub fn add(&mut self, light: PointLight) {
        self.lights.push(light);
    }

    /// Remove all lights.
    pub fn clear(&mut self) {
        self.lights.clear();
    }

    /// Get an iterator over active lights.
    pub fn iter(&self) -> impl Iterator<Item = &PointLight> {
        self.lights.iter()
    }

    /// Get a mutable iterator over active lights.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut PointLight> {
        self.lights.iter_mut()
    }

    /// Number of active lights.
    pub fn count(&self) -> usize {
        self.lights.len()
    }

    /// Set the ambient light color (default: white).
    pub fn set_ambient_color(&mut self, r: f32, g: f32, b: f32) {
        self.ambient_color = [r, g, b];
    }

    /// Get the ambient color.
    pub fn ambient_color(&self) -> [f32; 3] {
        self.ambient_color
    }

    /// Set the ambient intensity scalar.
    pub fn set_ambient_intensity(&mut self, intensity: f32) {
        self.ambient_intensity = intensity;
    }

    /// Get the ambient intensity scalar.
    pub fn ambient_intensity(&self) -> f32 {
        self.ambient_intensity
    }

    /// Pointer to the lights data for SAB serialization.
    pub fn buffer_ptr(&self) -> *const f32 {
        self.lights.as_ptr() as *const f32
    }
}

impl Default for LightRig {
    fn default() -> Self {
        Self::new()
    }
}

/// Which backdrop the renderer draws behind the scene.
///
/// Night shows the star cubemap; day swaps in a flat daylight texture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyState {
    pub night: bool,
    /// Texture slot for the day backdrop, when loaded.
    pub day_texture: Option<TextureSlot>,
}

impl Default for SkyState {
    fn default() -> Self {
        Self {
            night: true,
            day_texture: None,
        }
    }
}

impl SkyState {
    /// Wire encoding of the mode: 1.0 = night (starfield), 0.0 = day.
    pub fn mode_flag(&self) -> f32 {
        if self.night {
            1.0
        } else {
            0.0
        }
    }
}

/// One coordinated lighting look: ambient level, sun light strength,
/// and how hard the sun sphere glows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightingPreset {
    pub ambient: f32,
    pub sun_light: f32,
    pub sun_emissive: f32,
}

/// Dark scene: starfield, dim ambient, strong sun.
pub const NIGHT_PRESET: LightingPreset = LightingPreset {
    ambient: 0.1,
    sun_light: 2.0,
    sun_emissive: 1.5,
};

/// Daylight scene: flat bright ambient, soft sun.
pub const DAY_PRESET: LightingPreset = LightingPreset {
    ambient: 0.5,
    sun_light: 0.8,
    sun_emissive: 0.3,
};

/// Switch the whole scene between the night and day looks.
///
/// Applies the matching preset to the ambient term, the primary light
/// (slot 0 by convention: the sun), the sun sphere's emissive strength,
/// and the sky backdrop. Safe to call redundantly; applying the current
/// mode again is a no-op in effect.
pub fn apply_lighting_mode(
    night: bool,
    lights: &mut LightRig,
    sky: &mut SkyState,
    scene: &mut Scene,
    sun_sphere: NodeId,
) {
    let preset = if night { NIGHT_PRESET } else { DAY_PRESET };

    sky.night = night;
    lights.set_ambient_intensity(preset.ambient);
    if let Some(sun_light) = lights.iter_mut().next() {
        sun_light.intensity = preset.sun_light;
    }
    if let Some(node) = scene.get_mut(sun_sphere) {
        if let Some(shape) = node.shape.as_mut() {
            shape.material.emissive_intensity = preset.sun_emissive;
        }
    }
}
