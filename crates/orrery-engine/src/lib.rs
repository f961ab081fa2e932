pub mod api;
pub mod assets;
pub mod bridge;
pub mod components;
pub mod core;
pub mod input;
pub mod renderer;
pub mod sim;
pub mod systems;

// Re-export key types at crate root for convenience
pub use crate::api::app::{App, AppConfig, EngineContext};
pub use crate::api::types::NodeId;
pub use crate::assets::manifest::{AssetManifest, TextureDescriptor};
pub use crate::assets::registry::TextureRegistry;
pub use crate::bridge::protocol::{ProtocolLayout, DEFAULT_MAX_LIGHTS, LIGHT_FLOATS};
pub use crate::components::body::{BodyHandles, BodySpec, RingSpec};
pub use crate::components::material::{Material, TextureSlot};
pub use crate::components::node::Node;
pub use crate::components::shape::{
    sample_orbit_path, Geometry, ShapeComponent, ORBIT_PATH_SEGMENTS, PLANET_SPHERE_SEGMENTS,
    RING_SEGMENTS,
};
pub use crate::core::scene::Scene;
pub use crate::core::time::FrameClock;
pub use crate::core::transform::{LocalTransform, TransformTree};
pub use crate::input::queue::{InputEvent, InputQueue};
pub use crate::renderer::camera::{Camera, OrbitController};
pub use crate::renderer::packet::{
    CameraBlock, FramePacket, PathVertex, RingInstance, SkyBlock, SphereInstance,
};
pub use crate::sim::panel::{
    apply_panel_events, BodyFolder, PanelSchema, SliderDef, ToggleDef, CTRL_SET_NIGHT_MODE,
    CTRL_SET_ORBIT_RATE, CTRL_SET_PAUSED, CTRL_SET_SPEED, CTRL_SET_SPIN_RATE,
};
pub use crate::sim::settings::{BodyRates, SettingsChange, SettingsStore, SimSettings};
pub use crate::systems::lighting::{
    apply_lighting_mode, LightRig, LightingPreset, PointLight, SkyState, DAY_PRESET, NIGHT_PRESET,
};
pub use crate::systems::motion::{advance_rotations, SUN_SPIN_RATE};
pub use crate::systems::render::build_frame_packet;
