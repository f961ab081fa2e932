/// Global simulation settings, owned by the settings store.
///
/// Panel widgets clamp their values before events reach the store, so the
/// setters trust incoming numbers as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimSettings {
    /// Global time multiplier, >= 0. Scales every rotation rate uniformly.
    pub speed: f32,
    /// While true, the motion step is skipped entirely. Elapsed time is
    /// not banked; resuming continues from the frozen angles.
    pub paused: bool,
    /// Night mode: starfield background and bright sun. Day mode flattens
    /// the lighting for a daylight backdrop.
    pub night_mode: bool,
}

impl Default for SimSettings {
    fn default() -> Self {
        Self {
            speed: 1.0,
            paused: false,
            night_mode: true,
        }
    }
}

/// Per-body angular speeds in radians per simulated second, before the
/// global multiplier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyRates {
    /// Orbit sweep rate (pivot rotation).
    pub orbit: f32,
    /// Self-rotation rate (sphere rotation).
    pub spin: f32,
}

/// A settings mutation, published for same-frame subscribers.
/// Only actual value changes are announced; setting a field to its
/// current value stays silent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SettingsChange {
    Speed(f32),
    Paused(bool),
    NightMode(bool),
    OrbitRate { index: usize, value: f32 },
    SpinRate { index: usize, value: f32 },
}

/// Single owner of all tunable simulation state.
///
/// Mutations go through the setters, which queue `SettingsChange` events;
/// the app drains the queue once per frame and reacts to the changes it
/// cares about (lighting listens for `NightMode`, everything else is read
/// directly during the motion step).
pub struct SettingsStore {
    sim: SimSettings,
    rates: Vec<BodyRates>,
    changes: Vec<SettingsChange>,
}

impl SettingsStore {
    pub fn new(rates: Vec<BodyRates>) -> Self {
        Self {
            sim: SimSettings::default(),
            rates,
            changes: Vec::new(),
        }
    }

    pub fn sim(&self) -> SimSettings {
        self.sim
    }

    pub fn rates(&self) -> &[BodyRates] {
        &self.rates
    }

    pub fn rate(&self, index: usize) -> Option<BodyRates> {
        self.rates.get(index).copied()
    }

    pub fn set_speed(&mut self, speed: f32) {
        if self.sim.speed != speed {
            self.sim.speed = speed;
            self.changes.push(SettingsChange::Speed(speed));
        }
    }

    pub fn set_paused(&mut self, paused: bool) {
        if self.sim.paused != paused {
            self.sim.paused = paused;
            self.changes.push(SettingsChange::Paused(paused));
        }
    }

    pub fn set_night_mode(&mut self, night_mode: bool) {
        if self.sim.night_mode != night_mode {
            self.sim.night_mode = night_mode;
            self.changes.push(SettingsChange::NightMode(night_mode));
        }
    }

    /// Set one body's orbit rate. Out-of-range indices are ignored.
    pub fn set_orbit_rate(&mut self, index: usize, value: f32) {
        if let Some(rates) = self.rates.get_mut(index) {
            if rates.orbit != value {
                rates.orbit = value;
                self.changes.push(SettingsChange::OrbitRate { index, value });
            }
        }
    }

    /// Set one body's spin rate. Out-of-range indices are ignored.
    pub fn set_spin_rate(&mut self, index: usize, value: f32) {
        if let Some(rates) = self.rates.get_mut(index) {
            if rates.spin != value {
                rates.spin = value;
                self.changes.push(SettingsChange::SpinRate { index, value });
            }
        }
    }

    /// Take all changes queued since the last drain.
    pub fn drain_changes(&mut self) -> Vec<SettingsChange> {
        std::mem::take(&mut self.changes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_two_bodies() -> SettingsStore {
        SettingsStore::new(vec![
            BodyRates { orbit: 0.4, spin: 0.15 },
            BodyRates { orbit: 0.2, spin: 0.2 },
        ])
    }

    #[test]
    fn defaults_start_running_at_night() {
        let store = SettingsStore::new(Vec::new());
        assert_eq!(store.sim().speed, 1.0);
        assert!(!store.sim().paused);
        assert!(store.sim().night_mode);
    }

    #[test]
    fn changes_are_published_once() {
        let mut store = store_with_two_bodies();
        store.set_night_mode(false);
        let changes = store.drain_changes();
        assert_eq!(changes, vec![SettingsChange::NightMode(false)]);
        assert!(store.drain_changes().is_empty());
    }

    #[test]
    fn same_value_is_silent() {
        let mut store = store_with_two_bodies();
        store.set_night_mode(true); // already true
        store.set_speed(1.0); // already 1.0
        assert!(store.drain_changes().is_empty());
    }

    #[test]
    fn rate_setters_hit_the_right_body() {
        let mut store = store_with_two_bodies();
        store.set_orbit_rate(1, 1.5);
        store.set_spin_rate(0, 0.9);
        assert_eq!(store.rate(1).unwrap().orbit, 1.5);
        assert_eq!(store.rate(0).unwrap().spin, 0.9);
        // Untouched fields stay put
        assert_eq!(store.rate(1).unwrap().spin, 0.2);
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let mut store = store_with_two_bodies();
        store.set_orbit_rate(99, 1.0);
        assert!(store.drain_changes().is_empty());
    }

    #[test]
    fn multiple_changes_queue_in_order() {
        let mut store = store_with_two_bodies();
        store.set_speed(2.5);
        store.set_paused(true);
        let changes = store.drain_changes();
        assert_eq!(changes.len(), 2);
        assert_eq!(changes[0], SettingsChange::Speed(2.5));
        assert_eq!(changes[1], SettingsChange::Paused(true));
    }
}
