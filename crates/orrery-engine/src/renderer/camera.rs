use std::f32::consts::{PI, TAU};

use glam::{Mat4, Vec3};

use crate::input::queue::InputEvent;
use crate::renderer::packet::CameraBlock;

/// Keeps the polar angle away from the poles so the view never flips.
const PHI_EPS: f32 = 1e-6;
/// Closest the orbit camera may dolly toward its target.
const MIN_RADIUS: f32 = 1.0;
/// Per-notch dolly factor; one wheel notch scales the distance by this.
const ZOOM_STEP: f32 = 0.95;

/// Perspective camera for 3D rendering.
/// Produces a projection matrix mapping world units to clip space.
pub struct Camera {
    /// Vertical field of view in degrees.
    pub fov_y_deg: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    /// Eye position in world space.
    pub position: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
    /// Viewport size in CSS pixels.
    pub viewport_width: f32,
    pub viewport_height: f32,
    /// Device pixel ratio, forwarded so the renderer can size its
    /// backing canvas.
    pub pixel_ratio: f32,
}

impl Camera {
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            fov_y_deg: 60.0,
            aspect: viewport_width / viewport_height,
            near: 0.1,
            far: 1000.0,
            position: Vec3::new(0.0, 0.0, 10.0),
            target: Vec3::ZERO,
            viewport_width,
            viewport_height,
            pixel_ratio: 1.0,
        }
    }

    /// Set the lens parameters, keeping the current aspect ratio.
    pub fn set_lens(&mut self, fov_y_deg: f32, near: f32, far: f32) {
        self.fov_y_deg = fov_y_deg;
        self.near = near;
        self.far = far;
    }

    /// Resize the viewport (e.g. on window resize).
    /// The aspect ratio follows the viewport exactly; no letterboxing.
    pub fn set_viewport(&mut self, width: f32, height: f32, pixel_ratio: f32) {
        self.viewport_width = width;
        self.viewport_height = height;
        self.aspect = width / height;
        self.pixel_ratio = pixel_ratio;
    }

    /// Place the eye.
    pub fn look_from(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Aim at a world-space point.
    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Build a right-handed perspective projection matrix, Z in [0, 1].
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y_deg.to_radians(), self.aspect, self.near, self.far)
    }

    /// Snapshot for the wire protocol.
    pub fn block(&self) -> CameraBlock {
        CameraBlock {
            px: self.position.x,
            py: self.position.y,
            pz: self.position.z,
            _pad0: 0.0,
            tx: self.target.x,
            ty: self.target.y,
            tz: self.target.z,
            _pad1: 0.0,
            fov_y_deg: self.fov_y_deg,
            aspect: self.aspect,
            near: self.near,
            far: self.far,
            viewport_w: self.viewport_width,
            viewport_h: self.viewport_height,
            pixel_ratio: self.pixel_ratio,
            _pad2: 0.0,
        }
    }
}

/// Pointer-driven orbital navigation around a fixed target.
///
/// The eye lives on a sphere described by spherical coordinates
/// (radius, theta, phi): theta is the azimuth around the vertical axis,
/// phi the polar angle from straight up. Dragging feeds angle deltas;
/// `update` applies them with exponential damping each frame, so motion
/// eases out over several frames after the pointer stops. Scroll events
/// dolly the radius immediately.
pub struct OrbitController {
    /// Pivot point the camera orbits.
    pub target: Vec3,
    /// Inertia factor per frame; the fraction of the pending delta
    /// consumed each update. Smaller = floatier.
    pub damping: f32,
    /// Drag sensitivity multiplier.
    pub rotate_speed: f32,
    radius: f32,
    theta: f32,
    phi: f32,
    delta_theta: f32,
    delta_phi: f32,
    zoom_factor: f32,
    dragging: bool,
    last: (f32, f32),
    viewport_height: f32,
}

impl OrbitController {
    /// Build a controller whose spherical pose reproduces the given eye
    /// position relative to the target.
    pub fn from_position(position: Vec3, target: Vec3) -> Self {
        let offset = position - target;
        let radius = offset.length().max(MIN_RADIUS);
        let theta = offset.x.atan2(offset.z);
        let phi = (offset.y / radius).clamp(-1.0, 1.0).acos();
        Self {
            target,
            damping: 0.05,
            rotate_speed: 1.0,
            radius,
            theta,
            phi,
            delta_theta: 0.0,
            delta_phi: 0.0,
            zoom_factor: 1.0,
            dragging: false,
            last: (0.0, 0.0),
            viewport_height: 720.0,
        }
    }

    /// Drag sensitivity is normalized by viewport height; keep this in
    /// sync with resizes.
    pub fn set_viewport_height(&mut self, height: f32) {
        self.viewport_height = height.max(1.0);
    }

    /// Current distance from the target.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Feed one input event. Pointer drags accumulate angle deltas for
    /// the next `update`; scroll adjusts the pending dolly factor.
    pub fn handle(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::PointerDown { x, y } => {
                self.dragging = true;
                self.last = (x, y);
            }
            InputEvent::PointerUp { .. } => {
                self.dragging = false;
            }
            InputEvent::PointerMove { x, y } => {
                if self.dragging {
                    let dx = x - self.last.0;
                    let dy = y - self.last.1;
                    // A full viewport-height drag sweeps one whole turn.
                    self.delta_theta -= TAU * dx / self.viewport_height * self.rotate_speed;
                    self.delta_phi -= TAU * dy / self.viewport_height * self.rotate_speed;
                    self.last = (x, y);
                }
            }
            InputEvent::Scroll { delta } => {
                if delta > 0.0 {
                    self.zoom_factor /= ZOOM_STEP;
                } else if delta < 0.0 {
                    self.zoom_factor *= ZOOM_STEP;
                }
            }
            InputEvent::Custom { .. } => {}
        }
    }

    /// Advance the damped motion one frame and write the resulting pose
    /// into the camera. Runs every frame, paused or not, so released
    /// drags keep easing out.
    pub fn update(&mut self, camera: &mut Camera) {
        self.theta += self.delta_theta * self.damping;
        self.phi += self.delta_phi * self.damping;
        self.phi = self.phi.clamp(PHI_EPS, PI - PHI_EPS);

        self.delta_theta *= 1.0 - self.damping;
        self.delta_phi *= 1.0 - self.damping;

        self.radius = (self.radius * self.zoom_factor).max(MIN_RADIUS);
        self.zoom_factor = 1.0;

        let sin_phi = self.phi.sin();
        camera.position = self.target
            + Vec3::new(
                self.radius * sin_phi * self.theta.sin(),
                self.radius * self.phi.cos(),
                self.radius * sin_phi * self.theta.cos(),
            );
        camera.target = self.target;
    }
}
