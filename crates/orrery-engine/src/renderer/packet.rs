use bytemuck::{Pod, Zeroable};

/// Per-sphere render data written to SharedArrayBuffer for the TypeScript
/// renderer. Must match the TypeScript protocol: 12 floats = 48 bytes stride.
///
/// `texture_slot` is the manifest index cast to f32, or -1.0 when the
/// texture is missing and the renderer should fall back to a flat color.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct SphereInstance {
    /// X position in world space.
    pub x: f32,
    /// Y position in world space.
    pub y: f32,
    /// Z position in world space.
    pub z: f32,
    /// Self-rotation about the vertical axis, radians.
    pub spin: f32,
    /// Sphere radius in world units.
    pub radius: f32,
    /// Texture slot index, or -1.0 for none.
    pub texture_slot: f32,
    /// Emissive strength multiplier; 0.0 for a plain lit body.
    pub emissive_intensity: f32,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
    pub emissive_r: f32,
    pub emissive_g: f32,
    pub emissive_b: f32,
    /// Mesh tessellation: latitude/longitude band count.
    pub segments: f32,
}

impl SphereInstance {
    pub const FLOATS: usize = 12;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Per-ring render data: a flat annulus around a body.
/// 12 floats = 48 bytes stride.
///
/// The renderer orients each ring as `RotY(spin) * RotX(-pi/2)`: flat in
/// the orbital plane, carried around by the ring owner's pivot rotation.
/// Rings are always drawn double-sided and alpha-blended.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct RingInstance {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Pivot rotation inherited from the ring's parent, radians.
    pub spin: f32,
    /// Inner annulus radius.
    pub inner: f32,
    /// Outer annulus radius.
    pub outer: f32,
    /// Texture slot index, or -1.0 for none.
    pub texture_slot: f32,
    /// Opacity.
    pub alpha: f32,
    /// Annulus tessellation segment count.
    pub segments: f32,
    pub _pad0: f32,
    pub _pad1: f32,
    pub _pad2: f32,
}

impl RingInstance {
    pub const FLOATS: usize = 12;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// One vertex of a line strip, 3 floats.
///
/// Orbit guide lines are pre-sampled on the Rust side; the renderer draws
/// each consecutive run of `segments + 1` vertices as one strip, white at
/// 30% opacity.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct PathVertex {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl PathVertex {
    pub const FLOATS: usize = 3;
}

/// Camera state block, 16 floats. Written once per frame.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct CameraBlock {
    pub px: f32,
    pub py: f32,
    pub pz: f32,
    pub _pad0: f32,
    pub tx: f32,
    pub ty: f32,
    pub tz: f32,
    pub _pad1: f32,
    /// Vertical field of view in degrees.
    pub fov_y_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub viewport_w: f32,
    pub viewport_h: f32,
    pub pixel_ratio: f32,
    pub _pad2: f32,
}

impl CameraBlock {
    pub const FLOATS: usize = 16;
}

/// Sky backdrop block, 4 floats: `[mode, day_texture_slot, pad, pad]`.
/// `mode` 1.0 = night starfield cubemap, 0.0 = day texture.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct SkyBlock {
    pub mode: f32,
    /// Texture slot of the day backdrop, or -1.0 when not loaded.
    pub day_texture_slot: f32,
    pub _pad0: f32,
    pub _pad1: f32,
}

impl SkyBlock {
    pub const FLOATS: usize = 4;
}

/// Everything the renderer needs for one frame, rebuilt from the scene
/// after transform propagation. Section capacities are fixed at startup
/// so buffer pointers stay stable across frames.
pub struct FramePacket {
    spheres: Vec<SphereInstance>,
    rings: Vec<RingInstance>,
    path_vertices: Vec<PathVertex>,
    camera: CameraBlock,
    sky: SkyBlock,
    max_spheres: usize,
    max_rings: usize,
    max_path_vertices: usize,
}

impl FramePacket {
    pub fn new(max_spheres: usize, max_rings: usize, max_path_vertices: usize) -> Self {
        Self {
            spheres: Vec::with_capacity(max_spheres),
            rings: Vec::with_capacity(max_rings),
            path_vertices: Vec::with_capacity(max_path_vertices),
            camera: CameraBlock::default(),
            sky: SkyBlock::default(),
            max_spheres,
            max_rings,
            max_path_vertices,
        }
    }

    /// Reset the per-frame sections. Camera and sky blocks persist; they
    /// are overwritten in place each frame.
    pub fn clear(&mut self) {
        self.spheres.clear();
        self.rings.clear();
        self.path_vertices.clear();
    }

    /// Append a sphere. Silently dropped when the section is full.
    pub fn push_sphere(&mut self, instance: SphereInstance) {
        if self.spheres.len() < self.max_spheres {
            self.spheres.push(instance);
        }
    }

    /// Append a ring. Silently dropped when the section is full.
    pub fn push_ring(&mut self, instance: RingInstance) {
        if self.rings.len() < self.max_rings {
            self.rings.push(instance);
        }
    }

    /// Append a line-strip vertex. Silently dropped when the section is full.
    pub fn push_path_vertex(&mut self, vertex: PathVertex) {
        if self.path_vertices.len() < self.max_path_vertices {
            self.path_vertices.push(vertex);
        }
    }

    pub fn set_camera(&mut self, camera: CameraBlock) {
        self.camera = camera;
    }

    pub fn set_sky(&mut self, sky: SkyBlock) {
        self.sky = sky;
    }

    pub fn sphere_count(&self) -> u32 {
        self.spheres.len() as u32
    }

    pub fn ring_count(&self) -> u32 {
        self.rings.len() as u32
    }

    pub fn path_vertex_count(&self) -> u32 {
        self.path_vertices.len() as u32
    }

    /// Raw pointer to sphere data for SharedArrayBuffer reads.
    pub fn spheres_ptr(&self) -> *const f32 {
        self.spheres.as_ptr() as *const f32
    }

    pub fn rings_ptr(&self) -> *const f32 {
        self.rings.as_ptr() as *const f32
    }

    pub fn path_vertices_ptr(&self) -> *const f32 {
        self.path_vertices.as_ptr() as *const f32
    }

    pub fn camera_ptr(&self) -> *const f32 {
        &self.camera as *const CameraBlock as *const f32
    }

    pub fn sky_ptr(&self) -> *const f32 {
        &self.sky as *const SkyBlock as *const f32
    }

    pub fn camera(&self) -> &CameraBlock {
        &self.camera
    }

    pub fn sky(&self) -> &SkyBlock {
        &self.sky
    }
}
