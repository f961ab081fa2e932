use orrery_engine::systems::render::build_frame_packet;
use orrery_engine::{
    App, AppConfig, AssetManifest, EngineContext, FrameClock, FramePacket, InputEvent, InputQueue,
    ProtocolLayout, SkyBlock,
};

/// Generic app runner that wires up the engine loop.
///
/// Each concrete app (e.g., `solar-system`) creates a `thread_local!` AppRunner
/// and exports free functions via `#[wasm_bindgen]`, because wasm-bindgen
/// cannot export generic structs directly.
pub struct AppRunner<A: App> {
    app: A,
    ctx: EngineContext,
    input: InputQueue,
    packet: FramePacket,
    clock: FrameClock,
    config: AppConfig,
    layout: ProtocolLayout,
    initialized: bool,
}

impl<A: App> AppRunner<A> {
    pub fn new(app: A) -> Self {
        let config = app.config();
        let layout = ProtocolLayout::from_config(&config);
        let packet = FramePacket::new(config.max_spheres, config.max_rings, config.max_path_vertices);

        let mut ctx = EngineContext::new();
        ctx.camera
            .set_viewport(config.viewport_width, config.viewport_height, 1.0);
        ctx.controller.set_viewport_height(config.viewport_height);

        Self {
            app,
            ctx,
            input: InputQueue::new(),
            packet,
            clock: FrameClock::new(),
            layout,
            config,
            initialized: false,
        }
    }

    /// Initialize the app. Call once after construction.
    pub fn init(&mut self) {
        self.config = self.app.config();
        self.layout = ProtocolLayout::from_config(&self.config);
        self.app.init(&mut self.ctx);
        self.initialized = true;
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Propagate a viewport resize to the camera and the orbit controller.
    pub fn resize(&mut self, width: f32, height: f32, pixel_ratio: f32) {
        self.ctx.camera.set_viewport(width, height, pixel_ratio);
        self.ctx.controller.set_viewport_height(height);
    }

    /// Replace the asset manifest from host-supplied JSON.
    /// Malformed JSON leaves the current manifest in place.
    pub fn load_manifest(&mut self, json: &str) {
        match AssetManifest::from_json(json) {
            Ok(manifest) => self.ctx.install_manifest(manifest),
            Err(err) => log::warn!("manifest parse failed: {}", err),
        }
    }

    /// Run one frame: update the app, ease the camera, propagate
    /// transforms, rebuild the frame packet.
    ///
    /// `now_seconds` is the host's animation-frame timestamp. The camera
    /// controller runs every frame regardless of app state, so navigation
    /// keeps easing while the simulation is paused.
    pub fn tick(&mut self, now_seconds: f64) {
        if !self.initialized {
            return;
        }

        let dt = self.clock.tick(now_seconds);

        // Navigation events go straight to the controller; the app sees
        // the same queue for its own (panel) events.
        for event in self.input.iter() {
            self.ctx.controller.handle(event);
        }

        self.app.update(&mut self.ctx, &self.input, dt);

        // Drain input after update
        self.input.drain();

        self.ctx.update_camera();
        self.ctx.propagate_transforms();

        build_frame_packet(self.ctx.scene.iter(), &mut self.packet);
        self.packet.set_camera(self.ctx.camera.block());
        self.packet.set_sky(SkyBlock {
            mode: self.ctx.sky.mode_flag(),
            day_texture_slot: self
                .ctx
                .sky
                .day_texture
                .map(|slot| slot.0 as f32)
                .unwrap_or(-1.0),
            _pad0: 0.0,
            _pad1: 0.0,
        });
    }

    // ---- Pointer accessors for SharedArrayBuffer reads ----

    pub fn spheres_ptr(&self) -> *const f32 {
        self.packet.spheres_ptr()
    }

    pub fn sphere_count(&self) -> u32 {
        self.packet.sphere_count()
    }

    pub fn rings_ptr(&self) -> *const f32 {
        self.packet.rings_ptr()
    }

    pub fn ring_count(&self) -> u32 {
        self.packet.ring_count()
    }

    pub fn path_vertices_ptr(&self) -> *const f32 {
        self.packet.path_vertices_ptr()
    }

    pub fn path_vertex_count(&self) -> u32 {
        self.packet.path_vertex_count()
    }

    pub fn lights_ptr(&self) -> *const f32 {
        self.ctx.lights.buffer_ptr()
    }

    pub fn light_count(&self) -> u32 {
        self.ctx.lights.count() as u32
    }

    pub fn ambient_intensity(&self) -> f32 {
        self.ctx.lights.ambient_intensity()
    }

    pub fn ambient_r(&self) -> f32 {
        self.ctx.lights.ambient_color()[0]
    }

    pub fn ambient_g(&self) -> f32 {
        self.ctx.lights.ambient_color()[1]
    }

    pub fn ambient_b(&self) -> f32 {
        self.ctx.lights.ambient_color()[2]
    }

    pub fn camera_ptr(&self) -> *const f32 {
        self.packet.camera_ptr()
    }

    pub fn sky_ptr(&self) -> *const f32 {
        self.packet.sky_ptr()
    }

    // ---- Startup JSON accessors ----

    /// Control panel schema for the host to build its widgets from.
    pub fn panel_schema_json(&self) -> String {
        self.ctx.panel.to_json().unwrap_or_default()
    }

    /// Texture manifest for the host's asset loader.
    pub fn texture_manifest_json(&self) -> String {
        self.ctx.assets.to_json().unwrap_or_default()
    }

    // ---- Capacity accessors (read by TypeScript via wasm_bindgen exports) ----

    pub fn max_spheres(&self) -> u32 {
        self.layout.max_spheres as u32
    }

    pub fn max_rings(&self) -> u32 {
        self.layout.max_rings as u32
    }

    pub fn max_path_vertices(&self) -> u32 {
        self.layout.max_path_vertices as u32
    }

    pub fn max_lights(&self) -> u32 {
        self.layout.max_lights as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }

    // ---- Test access ----

    /// Engine state, for native tests that drive the runner directly.
    pub fn ctx(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn ctx_mut(&mut self) -> &mut EngineContext {
        &mut self.ctx
    }
}
