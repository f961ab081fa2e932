use std::f32::consts::FRAC_PI_2;

use glam::Vec3;

use crate::api::types::NodeId;
use crate::assets::manifest::AssetManifest;
use crate::assets::registry::TextureRegistry;
use crate::components::body::{BodyHandles, BodySpec};
use crate::components::material::Material;
use crate::components::node::Node;
use crate::components::shape::{Geometry, ShapeComponent, PLANET_SPHERE_SEGMENTS};
use crate::core::scene::Scene;
use crate::core::transform::{LocalTransform, TransformTree};
use crate::input::queue::InputQueue;
use crate::renderer::camera::{Camera, OrbitController};
use crate::sim::panel::PanelSchema;
use crate::systems::lighting::{LightRig, SkyState};

/// Configuration for the engine, provided by the app.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Initial viewport width in CSS pixels.
    pub viewport_width: f32,
    /// Initial viewport height in CSS pixels.
    pub viewport_height: f32,
    /// Maximum number of sphere instances (default: 16).
    pub max_spheres: usize,
    /// Maximum number of ring instances (default: 4).
    pub max_rings: usize,
    /// Maximum number of orbit-path vertices (default: 1024).
    pub max_path_vertices: usize,
    /// Maximum number of point lights (default: 4).
    pub max_lights: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            viewport_width: 1280.0,
            viewport_height: 720.0,
            max_spheres: 16,
            max_rings: 4,
            max_path_vertices: 1024,
            max_lights: 4,
        }
    }
}

/// The core contract every app must fulfill.
pub trait App {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> AppConfig {
        AppConfig::default()
    }

    /// Setup initial state: spawn bodies, place the camera, add lights.
    fn init(&mut self, ctx: &mut EngineContext);

    /// The per-frame tick. Apply settings, advance the simulation.
    /// `dt` is wall-clock seconds since the previous frame.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue, dt: f32);
}

/// Mutable access to engine state, passed to App::init and App::update.
pub struct EngineContext {
    pub scene: Scene,
    pub transforms: TransformTree,
    pub lights: LightRig,
    pub sky: SkyState,
    pub camera: Camera,
    pub controller: OrbitController,
    pub assets: AssetManifest,
    pub textures: TextureRegistry,
    pub panel: PanelSchema,
    next_id: u32,
}

impl EngineContext {
    pub fn new() -> Self {
        let camera = Camera::new(1280.0, 720.0);
        let controller = OrbitController::from_position(camera.position, camera.target);
        Self {
            scene: Scene::new(),
            transforms: TransformTree::new(),
            lights: LightRig::new(),
            sky: SkyState::default(),
            camera,
            controller,
            assets: AssetManifest::default(),
            textures: TextureRegistry::default(),
            panel: PanelSchema::default(),
            next_id: 1,
        }
    }

    /// Generate the next unique node ID.
    pub fn next_id(&mut self) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Install the asset manifest and rebuild the texture registry from it.
    /// Call before spawning anything that resolves texture names.
    pub fn install_manifest(&mut self, manifest: AssetManifest) {
        self.textures = TextureRegistry::from_manifest(&manifest);
        self.assets = manifest;
    }

    /// Spawn the full node group for one orbiting body:
    ///
    /// - a shapeless pivot at the origin (tag `{name}-pivot`), whose Y
    ///   rotation is the orbit angle;
    /// - the textured sphere (tag `{name}`), offset along +X by the orbit
    ///   radius and parented to the pivot;
    /// - optionally a flat ring (tag `{name}-ring`) riding the same pivot,
    ///   tilted into the orbital plane;
    /// - a static orbit line (tag `{name}-orbit`) traced around the origin,
    ///   deliberately outside the transform tree.
    ///
    /// Unknown texture names resolve to None and render as flat color.
    pub fn spawn_body(&mut self, spec: &BodySpec) -> BodyHandles {
        let pivot = self.next_id();
        self.scene
            .spawn(Node::new(pivot).with_tag(format!("{}-pivot", spec.name)));
        self.transforms.register(pivot);

        let sphere = self.next_id();
        self.scene.spawn(
            Node::new(sphere)
                .with_tag(spec.name)
                .with_shape(ShapeComponent::new(
                    Geometry::sphere(spec.radius, PLANET_SPHERE_SEGMENTS),
                    Material::textured(self.textures.get(spec.texture)),
                )),
        );
        self.transforms.register_with(
            sphere,
            LocalTransform::new().with_offset(Vec3::new(spec.orbit_radius, 0.0, 0.0)),
        );
        self.transforms.set_parent(sphere, Some(pivot));

        if let Some(ring) = spec.ring {
            let ring_id = self.next_id();
            self.scene.spawn(
                Node::new(ring_id)
                    .with_tag(format!("{}-ring", spec.name))
                    .with_shape(ShapeComponent::new(
                        Geometry::ring(ring.inner, ring.outer),
                        Material::textured(self.textures.get(ring.texture))
                            .unlit()
                            .double_sided(),
                    )),
            );
            self.transforms.register_with(
                ring_id,
                LocalTransform::new()
                    .with_offset(Vec3::new(spec.orbit_radius, 0.0, 0.0))
                    .with_rotation(Vec3::new(-FRAC_PI_2, 0.0, 0.0)),
            );
            self.transforms.set_parent(ring_id, Some(pivot));
        }

        let path = self.next_id();
        self.scene.spawn(
            Node::new(path)
                .with_tag(format!("{}-orbit", spec.name))
                .with_shape(ShapeComponent::new(
                    Geometry::orbit_path(spec.orbit_radius),
                    Material::line([1.0, 1.0, 1.0], 0.3),
                )),
        );

        BodyHandles { pivot, sphere }
    }

    /// Ease the orbital camera toward its rest pose. Called by the app
    /// runner every frame, after input has been fed to the controller.
    pub fn update_camera(&mut self) {
        self.controller.update(&mut self.camera);
    }

    /// Flush local transforms into world-space node positions. Called by
    /// the app runner after App::update().
    pub fn propagate_transforms(&mut self) {
        self.transforms.propagate(&mut self.scene);
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx_with_textures() -> EngineContext {
        let mut ctx = EngineContext::new();
        ctx.install_manifest(
            AssetManifest::default()
                .with_texture("saturn", "./image/saturn.jpg")
                .with_texture("saturn_ring", "./image/saturn_ring.png"),
        );
        ctx
    }

    #[test]
    fn next_id_is_unique_and_increasing() {
        let mut ctx = EngineContext::new();
        let a = ctx.next_id();
        let b = ctx.next_id();
        assert_ne!(a, b);
        assert_eq!(b.0, a.0 + 1);
    }

    #[test]
    fn spawn_body_builds_the_node_group() {
        let mut ctx = ctx_with_textures();
        let spec = BodySpec::new("saturn", 10.0, "saturn", 138.0)
            .with_ring(10.0, 20.0, "saturn_ring");
        let handles = ctx.spawn_body(&spec);

        // pivot + sphere + ring + orbit line
        assert_eq!(ctx.scene.len(), 4);
        assert!(ctx.scene.find_by_tag("saturn-pivot").is_some());
        assert!(ctx.scene.find_by_tag("saturn").is_some());
        assert!(ctx.scene.find_by_tag("saturn-ring").is_some());
        assert!(ctx.scene.find_by_tag("saturn-orbit").is_some());

        assert_eq!(ctx.transforms.get_parent(handles.sphere), Some(handles.pivot));
        let offset = ctx.transforms.get_local(handles.sphere).unwrap().offset;
        assert_eq!(offset, Vec3::new(138.0, 0.0, 0.0));
    }

    #[test]
    fn ringless_body_spawns_three_nodes() {
        let mut ctx = ctx_with_textures();
        let handles = ctx.spawn_body(&BodySpec::new("earth", 6.0, "earth", 62.0));
        assert_eq!(ctx.scene.len(), 3);
        assert!(ctx.scene.find_by_tag("earth-ring").is_none());
        assert!(ctx.transforms.get_local(handles.pivot).is_some());
    }

    #[test]
    fn orbit_line_stays_out_of_the_transform_tree() {
        let mut ctx = ctx_with_textures();
        ctx.spawn_body(&BodySpec::new("earth", 6.0, "earth", 62.0));
        let line = ctx.scene.find_by_tag("earth-orbit").unwrap();
        assert!(ctx.transforms.get_local(line.id).is_none());
        assert_eq!(line.translation, Vec3::ZERO);
    }

    #[test]
    fn ring_starts_tilted_into_the_orbital_plane() {
        let mut ctx = ctx_with_textures();
        let spec = BodySpec::new("saturn", 10.0, "saturn", 138.0)
            .with_ring(10.0, 20.0, "saturn_ring");
        ctx.spawn_body(&spec);

        let ring = ctx.scene.find_by_tag("saturn-ring").unwrap();
        let local = ctx.transforms.get_local(ring.id).unwrap();
        assert!((local.rotation.x + FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn unknown_texture_resolves_to_flat_color() {
        let mut ctx = EngineContext::new();
        ctx.spawn_body(&BodySpec::new("earth", 6.0, "earth", 62.0));
        let sphere = ctx.scene.find_by_tag("earth").unwrap();
        assert!(sphere.shape.as_ref().unwrap().material.texture.is_none());
    }

    #[test]
    fn sphere_orbits_after_propagation() {
        let mut ctx = ctx_with_textures();
        let handles = ctx.spawn_body(&BodySpec::new("earth", 6.0, "earth", 62.0));

        ctx.transforms.get_local_mut(handles.pivot).unwrap().rotation.y =
            std::f32::consts::FRAC_PI_2;
        ctx.propagate_transforms();

        let sphere = ctx.scene.get(handles.sphere).unwrap();
        assert!(sphere.translation.x.abs() < 1e-4);
        assert!((sphere.translation.z + 62.0).abs() < 1e-4);
    }
}
