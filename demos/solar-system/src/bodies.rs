/// Planetary data — sizes, orbit radii, rotation rates, texture names.
///
/// Distances and radii are display units, not astronomy: relative orbit
/// ordering is faithful, absolute scale is compressed so Neptune fits in
/// frame. Rates are tuned for a pleasing idle animation at speed 1.

use orrery_engine::{AssetManifest, BodyRates, BodySpec};

/// Planet index constants.
pub const MERCURY: usize = 0;
pub const VENUS: usize = 1;
pub const EARTH: usize = 2;
pub const MARS: usize = 3;
pub const JUPITER: usize = 4;
pub const SATURN: usize = 5;
pub const URANUS: usize = 6;
pub const NEPTUNE: usize = 7;
pub const PLANET_COUNT: usize = 8;

/// Base orbit rates below are per-frame-ish author values; this scale
/// converts them to radians per second so the motion step can be purely
/// time-based.
pub const ORBIT_RATE_SCALE: f32 = 40.0;

// ── Sun ──────────────────────────────────────────────────────────────

pub const SUN_RADIUS: f32 = 15.0;
/// The sun gets a denser mesh than the planets; it fills more of the frame.
pub const SUN_SEGMENTS: u32 = 64;
pub const SUN_TEXTURE: &str = "sun";
/// Warm yellow glow, scaled by the day/night lighting presets.
pub const SUN_EMISSIVE_COLOR: [f32; 3] = [1.0, 1.0, 0.2];

// ── Planets ──────────────────────────────────────────────────────────

/// Ring annulus for the two ringed planets.
pub struct RingDef {
    pub inner: f32,
    pub outer: f32,
    pub texture: &'static str,
}

/// Static description of one planet.
pub struct PlanetDef {
    pub name: &'static str,
    /// Sphere radius in display units.
    pub radius: f32,
    pub texture: &'static str,
    /// Distance from the sun to the sphere center.
    pub orbit_radius: f32,
    /// Base orbit sweep rate, before `ORBIT_RATE_SCALE`.
    pub orbit_rate: f32,
    /// Self-rotation rate in radians per second.
    pub spin_rate: f32,
    pub ring: Option<RingDef>,
}

impl PlanetDef {
    /// Spawnable body description for the engine's factory.
    pub fn body_spec(&self) -> BodySpec {
        let spec = BodySpec::new(self.name, self.radius, self.texture, self.orbit_radius);
        match &self.ring {
            Some(ring) => spec.with_ring(ring.inner, ring.outer, ring.texture),
            None => spec,
        }
    }

    /// Starting angular rates for the settings store.
    pub fn rates(&self) -> BodyRates {
        BodyRates {
            orbit: self.orbit_rate * ORBIT_RATE_SCALE,
            spin: self.spin_rate,
        }
    }
}

/// All 8 planets, ordered outward from the sun. Farther planets orbit
/// slower, echoing Kepler without simulating him.
pub const PLANETS: [PlanetDef; PLANET_COUNT] = [
    PlanetDef {
        name: "mercury",
        radius: 3.2,
        texture: "mercury",
        orbit_radius: 28.0,
        orbit_rate: 0.010,
        spin_rate: 0.15,
        ring: None,
    },
    PlanetDef {
        name: "venus",
        radius: 5.8,
        texture: "venus",
        orbit_radius: 44.0,
        orbit_rate: 0.007,
        spin_rate: 0.10,
        ring: None,
    },
    PlanetDef {
        name: "earth",
        radius: 6.0,
        texture: "earth",
        orbit_radius: 62.0,
        orbit_rate: 0.005,
        spin_rate: 0.20,
        ring: None,
    },
    PlanetDef {
        name: "mars",
        radius: 4.0,
        texture: "mars",
        orbit_radius: 78.0,
        orbit_rate: 0.004,
        spin_rate: 0.18,
        ring: None,
    },
    PlanetDef {
        name: "jupiter",
        radius: 12.0,
        texture: "jupiter",
        orbit_radius: 100.0,
        orbit_rate: 0.002,
        spin_rate: 0.30,
        ring: None,
    },
    PlanetDef {
        name: "saturn",
        radius: 10.0,
        texture: "saturn",
        orbit_radius: 138.0,
        orbit_rate: 0.0015,
        spin_rate: 0.28,
        // Inner radius matches the body so the ring hugs the sphere.
        ring: Some(RingDef {
            inner: 10.0,
            outer: 20.0,
            texture: "saturn_ring",
        }),
    },
    PlanetDef {
        name: "uranus",
        radius: 7.0,
        texture: "uranus",
        orbit_radius: 176.0,
        orbit_rate: 0.001,
        spin_rate: 0.25,
        ring: Some(RingDef {
            inner: 7.0,
            outer: 12.0,
            texture: "uranus_ring",
        }),
    },
    PlanetDef {
        name: "neptune",
        radius: 7.0,
        texture: "neptune",
        orbit_radius: 200.0,
        orbit_rate: 0.0007,
        spin_rate: 0.26,
        ring: None,
    },
];

// ── Assets ───────────────────────────────────────────────────────────

/// Texture name used for the daylight backdrop.
pub const DAY_TEXTURE: &str = "day";

/// Build the full asset manifest: sun, every planet, ring textures, the
/// day backdrop, and six identical starfield faces for the night cubemap.
pub fn manifest() -> AssetManifest {
    let mut manifest = AssetManifest::default().with_texture(SUN_TEXTURE, "./image/sun.jpg");
    for planet in &PLANETS {
        manifest = manifest.with_texture(planet.texture, format!("./image/{}.jpg", planet.texture));
        if let Some(ring) = &planet.ring {
            manifest = manifest.with_texture(ring.texture, format!("./image/{}.png", ring.texture));
        }
    }
    manifest
        .with_texture(DAY_TEXTURE, "./image/day.jpg")
        .with_skybox(vec!["./image/stars.jpg".to_string(); 6])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_planets_ordered_outward() {
        assert_eq!(PLANETS.len(), PLANET_COUNT);
        for pair in PLANETS.windows(2) {
            assert!(pair[0].orbit_radius < pair[1].orbit_radius);
        }
        assert_eq!(PLANETS[EARTH].name, "earth");
        assert_eq!(PLANETS[NEPTUNE].orbit_radius, 200.0);
    }

    #[test]
    fn only_saturn_and_uranus_carry_rings() {
        for (i, planet) in PLANETS.iter().enumerate() {
            let expected = i == SATURN || i == URANUS;
            assert_eq!(planet.ring.is_some(), expected, "{}", planet.name);
        }
    }

    #[test]
    fn earth_orbit_rate_scales_to_fifth_radian() {
        let rates = PLANETS[EARTH].rates();
        assert!((rates.orbit - 0.2).abs() < 1e-6);
        assert!((rates.spin - 0.2).abs() < 1e-6);
    }

    #[test]
    fn farther_planets_orbit_slower() {
        for pair in PLANETS.windows(2) {
            assert!(pair[0].rates().orbit > pair[1].rates().orbit);
        }
    }

    #[test]
    fn manifest_covers_every_texture() {
        let manifest = manifest();
        let has = |name: &str| manifest.textures.iter().any(|t| t.name == name);

        assert!(has(SUN_TEXTURE));
        assert!(has(DAY_TEXTURE));
        for planet in &PLANETS {
            assert!(has(planet.texture), "{}", planet.texture);
        }
        assert!(has("saturn_ring"));
        assert!(has("uranus_ring"));
        // sun + 8 planets + 2 rings + day
        assert_eq!(manifest.textures.len(), 12);
        assert_eq!(manifest.skybox.len(), 6);
    }

    #[test]
    fn ring_specs_carry_through() {
        let spec = PLANETS[SATURN].body_spec();
        let ring = spec.ring.unwrap();
        assert_eq!(ring.inner, 10.0);
        assert_eq!(ring.outer, 20.0);
        assert!(PLANETS[EARTH].body_spec().ring.is_none());
    }
}
