//! Per-frame rotation stepping for the sun and the orbiting bodies.
//!
//! All motion in the scene is rotation about the vertical axis: the sun
//! spins in place, each body's pivot sweeps it along its orbit, and each
//! sphere spins about its own axis. Angles accumulate without wrapping;
//! the sine/cosine taken during transform propagation handle periodicity.

use crate::api::types::NodeId;
use crate::components::body::BodyHandles;
use crate::core::transform::TransformTree;
use crate::sim::settings::BodyRates;

/// Sun self-rotation rate in radians per simulated second.
pub const SUN_SPIN_RATE: f32 = 0.2;

/// Advance every rotation by one frame.
///
/// `step = dt * speed` scales all rates uniformly; pausing is handled by
/// the caller simply not calling this. `bodies` and `rates` are parallel
/// slices; extra entries on either side are ignored.
pub fn advance_rotations(
    transforms: &mut TransformTree,
    sun: NodeId,
    bodies: &[BodyHandles],
    rates: &[BodyRates],
    speed: f32,
    dt: f32,
) {
    let step = dt * speed;
    if step == 0.0 {
        return;
    }

    if let Some(local) = transforms.get_local_mut(sun) {
        local.rotation.y += step * SUN_SPIN_RATE;
    }

    for (handles, rates) in bodies.iter().zip(rates.iter()) {
        if let Some(local) = transforms.get_local_mut(handles.pivot) {
            local.rotation.y += step * rates.orbit;
        }
        if let Some(local) = transforms.get_local_mut(handles.sphere) {
            local.rotation.y += step * rates.spin;
        }
    }
}
