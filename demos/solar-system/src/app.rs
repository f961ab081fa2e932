/// Solar system — interactive 3D orrery.
///
/// Sun at the origin, 8 planets sweeping around it on pivots, rings on
/// Saturn and Uranus, translucent orbit guides, and a control panel for
/// speed, pause, per-planet rates, and the day/night look.

use glam::Vec3;
use orrery_engine::*;

use crate::bodies::{self, PLANETS};

// ── Camera ───────────────────────────────────────────────────────────

const CAMERA_FOV_DEG: f32 = 65.0;
const CAMERA_NEAR: f32 = 0.1;
const CAMERA_FAR: f32 = 2000.0;
/// High three-quarter view; far enough back that Neptune's orbit fits.
const CAMERA_START: Vec3 = Vec3::new(-60.0, 100.0, 180.0);

// ── Lighting ─────────────────────────────────────────────────────────

/// Falloff range of the sun's point light, in display units.
const SUN_LIGHT_RANGE: f32 = 1000.0;

// ── App struct ───────────────────────────────────────────────────────

pub struct SolarSystemApp {
    /// Sun sphere node; spins in place, anchors the lighting presets.
    sun: Option<NodeId>,
    /// Pivot/sphere handle pairs, indexed like `PLANETS`.
    bodies: Vec<BodyHandles>,
    store: SettingsStore,
}

impl SolarSystemApp {
    pub fn new() -> Self {
        Self {
            sun: None,
            bodies: Vec::new(),
            store: SettingsStore::new(PLANETS.iter().map(|p| p.rates()).collect()),
        }
    }
}

impl Default for SolarSystemApp {
    fn default() -> Self {
        Self::new()
    }
}

impl App for SolarSystemApp {
    fn init(&mut self, ctx: &mut EngineContext) {
        ctx.install_manifest(bodies::manifest());

        ctx.camera.set_lens(CAMERA_FOV_DEG, CAMERA_NEAR, CAMERA_FAR);
        ctx.camera.look_from(CAMERA_START);
        ctx.controller = OrbitController::from_position(CAMERA_START, Vec3::ZERO);
        ctx.controller.set_viewport_height(ctx.camera.viewport_height);

        ctx.lights.set_ambient_color(1.0, 1.0, 1.0);
        ctx.lights.add(PointLight::new(
            Vec3::ZERO,
            [1.0, 1.0, 1.0],
            NIGHT_PRESET.sun_light,
            SUN_LIGHT_RANGE,
        ));

        // The sun spins in place; no pivot, just a registered root node.
        let sun = ctx.next_id();
        ctx.scene.spawn(
            Node::new(sun).with_tag("sun").with_shape(ShapeComponent::new(
                Geometry::sphere(bodies::SUN_RADIUS, bodies::SUN_SEGMENTS),
                Material::textured(ctx.textures.get(bodies::SUN_TEXTURE))
                    .with_emissive(bodies::SUN_EMISSIVE_COLOR, NIGHT_PRESET.sun_emissive),
            )),
        );
        ctx.transforms.register(sun);
        self.sun = Some(sun);

        for planet in &PLANETS {
            self.bodies.push(ctx.spawn_body(&planet.body_spec()));
        }

        ctx.sky.day_texture = ctx.textures.get(bodies::DAY_TEXTURE);

        let names: Vec<&str> = PLANETS.iter().map(|p| p.name).collect();
        ctx.panel = PanelSchema::build(&names, &self.store);

        // Startup look matches the stored default (night).
        apply_lighting_mode(
            self.store.sim().night_mode,
            &mut ctx.lights,
            &mut ctx.sky,
            &mut ctx.scene,
            sun,
        );

        log::info!("solar system ready: {} nodes", ctx.scene.len());
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue, dt: f32) {
        apply_panel_events(&mut self.store, input.iter());

        for change in self.store.drain_changes() {
            if let SettingsChange::NightMode(night) = change {
                if let Some(sun) = self.sun {
                    apply_lighting_mode(night, &mut ctx.lights, &mut ctx.sky, &mut ctx.scene, sun);
                    log::debug!("lighting mode: {}", if night { "night" } else { "day" });
                }
            }
        }

        // Pausing skips the step entirely; no time is banked, resuming
        // continues from the frozen angles.
        let sim = self.store.sim();
        if !sim.paused {
            if let Some(sun) = self.sun {
                advance_rotations(
                    &mut ctx.transforms,
                    sun,
                    &self.bodies,
                    self.store.rates(),
                    sim.speed,
                    dt,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::{EARTH, MERCURY};
    use orrery_web::AppRunner;

    fn started_runner() -> AppRunner<SolarSystemApp> {
        let mut runner = AppRunner::new(SolarSystemApp::new());
        runner.init();
        // First tick establishes the clock reference; dt is zero.
        runner.tick(0.0);
        runner
    }

    fn pivot_angle(runner: &AppRunner<SolarSystemApp>, tag: &str) -> f32 {
        let ctx = runner.ctx();
        let id = ctx.scene.find_by_tag(tag).unwrap().id;
        ctx.transforms.get_local(id).unwrap().rotation.y
    }

    #[test]
    fn scene_composes_every_body() {
        let runner = started_runner();

        // Sun + 8 planets; Saturn and Uranus rings; 8 orbit guides of
        // 101 vertices each.
        assert_eq!(runner.sphere_count(), 9);
        assert_eq!(runner.ring_count(), 2);
        assert_eq!(runner.path_vertex_count(), 8 * 101);
        assert_eq!(runner.light_count(), 1);
    }

    #[test]
    fn first_frame_renders_at_rest() {
        let mut runner = AppRunner::new(SolarSystemApp::new());
        runner.init();
        // Host clocks rarely start at zero; the first tick must not jump.
        runner.tick(1234.5);
        assert_eq!(runner.sphere_count(), 9);
        assert_eq!(pivot_angle(&runner, "earth-pivot"), 0.0);
    }

    #[test]
    fn earth_sweeps_one_radian_in_five_seconds() {
        let mut runner = started_runner();
        runner.tick(5.0);

        let angle = pivot_angle(&runner, "earth-pivot");
        assert!((angle - 1.0).abs() < 1e-5, "angle was {}", angle);

        // World position follows: offset (62, 0, 0) swung by one radian.
        let earth = runner.ctx().scene.find_by_tag("earth").unwrap();
        assert!((earth.translation.x - 62.0 * 1.0_f32.cos()).abs() < 1e-3);
        assert!((earth.translation.z + 62.0 * 1.0_f32.sin()).abs() < 1e-3);
    }

    #[test]
    fn sun_spins_in_place() {
        let mut runner = started_runner();
        runner.tick(5.0);

        let ctx = runner.ctx();
        let sun = ctx.scene.find_by_tag("sun").unwrap();
        assert_eq!(sun.translation, Vec3::ZERO);
        assert!((sun.rotation.y - 1.0).abs() < 1e-5);
    }

    #[test]
    fn global_speed_scales_all_motion() {
        let mut runner = started_runner();
        runner.push_input(InputEvent::Custom {
            kind: CTRL_SET_SPEED,
            a: 2.0,
            b: 0.0,
            c: 0.0,
        });
        runner.tick(5.0);

        // Double speed: earth covers two radians in the same five seconds.
        let angle = pivot_angle(&runner, "earth-pivot");
        assert!((angle - 2.0).abs() < 1e-5, "angle was {}", angle);
    }

    #[test]
    fn per_planet_rate_overrides_one_body() {
        let mut runner = started_runner();
        runner.push_input(InputEvent::Custom {
            kind: CTRL_SET_ORBIT_RATE,
            a: EARTH as f32,
            b: 0.0,
            c: 0.0,
        });
        runner.tick(5.0);

        assert_eq!(pivot_angle(&runner, "earth-pivot"), 0.0);
        // Mercury keeps its default rate of 0.4 rad/s.
        let mercury = pivot_angle(&runner, "mercury-pivot");
        assert!((mercury - 5.0 * PLANETS[MERCURY].rates().orbit).abs() < 1e-4);
    }

    #[test]
    fn pause_freezes_bodies_but_not_the_camera() {
        let mut runner = started_runner();
        runner.tick(1.0);
        let frozen = pivot_angle(&runner, "earth-pivot");

        runner.push_input(InputEvent::Custom {
            kind: CTRL_SET_PAUSED,
            a: 1.0,
            b: 0.0,
            c: 0.0,
        });
        runner.tick(2.0);
        runner.tick(10.0);
        assert_eq!(pivot_angle(&runner, "earth-pivot"), frozen);

        // Navigation stays live while paused.
        let radius_before = runner.ctx().controller.radius();
        runner.push_input(InputEvent::Scroll { delta: -120.0 });
        runner.tick(11.0);
        assert!(runner.ctx().controller.radius() < radius_before);
    }

    #[test]
    fn resume_continues_without_catch_up() {
        let mut runner = started_runner();
        runner.push_input(InputEvent::Custom {
            kind: CTRL_SET_PAUSED,
            a: 1.0,
            b: 0.0,
            c: 0.0,
        });
        runner.tick(100.0);

        runner.push_input(InputEvent::Custom {
            kind: CTRL_SET_PAUSED,
            a: 0.0,
            b: 0.0,
            c: 0.0,
        });
        runner.tick(101.0);
        runner.tick(102.0);

        // Only the two post-resume seconds count; the paused 100 are gone.
        let angle = pivot_angle(&runner, "earth-pivot");
        assert!((angle - 0.4).abs() < 1e-5, "angle was {}", angle);
    }

    #[test]
    fn night_mode_toggle_swaps_the_whole_look() {
        let mut runner = started_runner();

        // Defaults: night.
        assert_eq!(runner.ambient_intensity(), 0.1);
        assert_eq!(runner.ctx().lights.iter().next().unwrap().intensity, 2.0);
        let sun_emissive = |r: &AppRunner<SolarSystemApp>| {
            r.ctx()
                .scene
                .find_by_tag("sun")
                .unwrap()
                .shape
                .as_ref()
                .unwrap()
                .material
                .emissive_intensity
        };
        assert_eq!(sun_emissive(&runner), 1.5);
        assert!(runner.ctx().sky.night);

        runner.push_input(InputEvent::Custom {
            kind: CTRL_SET_NIGHT_MODE,
            a: 0.0,
            b: 0.0,
            c: 0.0,
        });
        runner.tick(1.0);

        assert_eq!(runner.ambient_intensity(), 0.5);
        assert_eq!(runner.ctx().lights.iter().next().unwrap().intensity, 0.8);
        assert_eq!(sun_emissive(&runner), 0.3);
        assert!(!runner.ctx().sky.night);

        runner.push_input(InputEvent::Custom {
            kind: CTRL_SET_NIGHT_MODE,
            a: 1.0,
            b: 0.0,
            c: 0.0,
        });
        runner.tick(2.0);
        assert_eq!(runner.ambient_intensity(), 0.1);
        assert_eq!(sun_emissive(&runner), 1.5);
    }

    #[test]
    fn redundant_mode_event_changes_nothing() {
        let mut runner = started_runner();
        runner.push_input(InputEvent::Custom {
            kind: CTRL_SET_NIGHT_MODE,
            a: 1.0,
            b: 0.0,
            c: 0.0,
        });
        runner.tick(1.0);
        assert_eq!(runner.ambient_intensity(), 0.1);
        assert!(runner.ctx().sky.night);
    }

    #[test]
    fn resize_tracks_viewport_exactly() {
        let mut runner = started_runner();
        let earth_before = runner.ctx().scene.find_by_tag("earth").unwrap().translation;

        runner.resize(1024.0, 512.0, 2.0);
        assert_eq!(runner.ctx().camera.aspect, 2.0);
        assert_eq!(runner.ctx().camera.pixel_ratio, 2.0);
        assert_eq!(runner.ctx().camera.viewport_width, 1024.0);

        // Resize retunes the lens only; the scene stays put.
        let earth_after = runner.ctx().scene.find_by_tag("earth").unwrap().translation;
        assert_eq!(earth_after, earth_before);
    }

    #[test]
    fn angles_accumulate_past_full_turns() {
        let mut runner = started_runner();
        // Mercury at 0.4 rad/s for 60 seconds: ~3.8 full turns.
        for i in 1..=60 {
            runner.tick(i as f64);
        }
        let angle = pivot_angle(&runner, "mercury-pivot");
        assert!((angle - 24.0).abs() < 1e-3, "angle was {}", angle);
    }

    #[test]
    fn panel_schema_reflects_planet_table() {
        let runner = started_runner();
        let json = runner.panel_schema_json();
        assert!(json.contains("Global Speed"));
        assert!(json.contains("Mercury"));
        assert!(json.contains("Neptune"));

        let schema = &runner.ctx().panel;
        assert_eq!(schema.bodies.len(), 8);
        assert!((schema.bodies[EARTH].orbit.value - 0.2).abs() < 1e-6);
    }

    #[test]
    fn manifest_reaches_the_host() {
        let runner = started_runner();
        let json = runner.texture_manifest_json();
        assert!(json.contains("./image/earth.jpg"));
        assert!(json.contains("./image/stars.jpg"));
    }
}
