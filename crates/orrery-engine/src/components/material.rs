/// Index of a texture in the renderer's texture array.
/// Assigned by the registry from manifest order; stable for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureSlot(pub u32);

/// Surface description for a shaded node.
///
/// Spheres default to lit, single-sided surfaces; rings and orbit lines
/// opt out of lighting via `unlit()`. Emissive output is a color scaled by
/// an intensity so mode presets can dim the glow without losing the tint.
#[derive(Debug, Clone, Copy)]
pub struct Material {
    /// Texture to sample, or None for a flat-color surface.
    pub texture: Option<TextureSlot>,
    /// Base color multiplier (white = texture as-is).
    pub color: [f32; 3],
    /// Opacity (1.0 = opaque; below 1.0 the renderer alpha-blends).
    pub alpha: f32,
    /// Emissive color, emitted regardless of incident light.
    pub emissive: [f32; 3],
    /// Emissive strength multiplier (0.0 = no glow).
    pub emissive_intensity: f32,
    /// Whether scene lights affect this surface.
    pub lit: bool,
    /// Render back faces too (flat geometry seen from both sides).
    pub double_sided: bool,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            texture: None,
            color: [1.0, 1.0, 1.0],
            alpha: 1.0,
            emissive: [0.0, 0.0, 0.0],
            emissive_intensity: 0.0,
            lit: true,
            double_sided: false,
        }
    }
}

impl Material {
    /// Lit, textured surface — the planet default.
    pub fn textured(texture: Option<TextureSlot>) -> Self {
        Self {
            texture,
            ..Default::default()
        }
    }

    /// Unlit flat-color line material.
    pub fn line(color: [f32; 3], alpha: f32) -> Self {
        Self {
            color,
            alpha,
            lit: false,
            ..Default::default()
        }
    }

    // -- Builder pattern --

    pub fn with_color(mut self, color: [f32; 3]) -> Self {
        self.color = color;
        self
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_emissive(mut self, color: [f32; 3], intensity: f32) -> Self {
        self.emissive = color;
        self.emissive_intensity = intensity;
        self
    }

    pub fn unlit(mut self) -> Self {
        self.lit = false;
        self
    }

    pub fn double_sided(mut self) -> Self {
        self.double_sided = true;
        self
    }
}
