//! Control panel schema and event routing.
//!
//! The engine owns the panel definition; the host renders it with whatever
//! widget library it likes (lil-gui, dat.gui, hand-rolled HTML) and reports
//! interactions back as custom input events carrying one of the `CTRL_*`
//! control codes. Widgets clamp to the advertised min/max before sending,
//! so the store receives in-range values.

use serde::{Deserialize, Serialize};

use crate::input::queue::InputEvent;
use crate::sim::settings::{BodyRates, SettingsStore};

/// Control codes for panel-originated custom events.
pub const CTRL_SET_SPEED: u32 = 1;
pub const CTRL_SET_PAUSED: u32 = 2;
pub const CTRL_SET_NIGHT_MODE: u32 = 3;
/// `a` = body index, `b` = new rate.
pub const CTRL_SET_ORBIT_RATE: u32 = 4;
/// `a` = body index, `b` = new rate.
pub const CTRL_SET_SPIN_RATE: u32 = 5;

/// Slider bounds advertised to the host.
pub const SPEED_RANGE: (f32, f32) = (0.0, 5.0);
pub const ORBIT_RATE_RANGE: (f32, f32) = (0.0, 2.0);
pub const SPIN_RATE_RANGE: (f32, f32) = (0.0, 1.0);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SliderDef {
    pub label: String,
    /// `CTRL_*` code the host sends when this slider moves.
    pub control: u32,
    pub min: f32,
    pub max: f32,
    /// Current value, so the host can seed the widget.
    pub value: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleDef {
    pub label: String,
    pub control: u32,
    pub value: bool,
}

/// One collapsible folder per body, holding its two rate sliders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyFolder {
    pub label: String,
    /// Body index to echo back in the `a` field of rate events.
    pub index: u32,
    pub orbit: SliderDef,
    pub spin: SliderDef,
}

/// Full panel layout, serialized to JSON for the host once at startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PanelSchema {
    pub speed: Option<SliderDef>,
    pub pause: Option<ToggleDef>,
    pub night_mode: Option<ToggleDef>,
    pub folder_label: String,
    pub bodies: Vec<BodyFolder>,
}

impl PanelSchema {
    /// Build the schema from the current store state so widgets open at
    /// the live values.
    pub fn build(names: &[&str], store: &SettingsStore) -> Self {
        let sim = store.sim();
        let bodies = names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let rates = store.rate(i).unwrap_or(BodyRates { orbit: 0.0, spin: 0.0 });
                BodyFolder {
                    label: capitalize(name),
                    index: i as u32,
                    orbit: SliderDef {
                        label: "Orbit".into(),
                        control: CTRL_SET_ORBIT_RATE,
                        min: ORBIT_RATE_RANGE.0,
                        max: ORBIT_RATE_RANGE.1,
                        value: rates.orbit,
                    },
                    spin: SliderDef {
                        label: "Spin".into(),
                        control: CTRL_SET_SPIN_RATE,
                        min: SPIN_RATE_RANGE.0,
                        max: SPIN_RATE_RANGE.1,
                        value: rates.spin,
                    },
                }
            })
            .collect();

        Self {
            speed: Some(SliderDef {
                label: "Global Speed".into(),
                control: CTRL_SET_SPEED,
                min: SPEED_RANGE.0,
                max: SPEED_RANGE.1,
                value: sim.speed,
            }),
            pause: Some(ToggleDef {
                label: "Pause / Resume".into(),
                control: CTRL_SET_PAUSED,
                value: sim.paused,
            }),
            night_mode: Some(ToggleDef {
                label: "Toggle Dark Mode".into(),
                control: CTRL_SET_NIGHT_MODE,
                value: sim.night_mode,
            }),
            folder_label: "Individual Speeds".into(),
            bodies,
        }
    }

    /// Serialize to JSON for the host's widget builder.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Route panel events from the frame's input into the store.
///
/// Non-panel events (pointer, scroll) and unknown control codes pass
/// through untouched.
pub fn apply_panel_events<'a, I>(store: &mut SettingsStore, events: I)
where
    I: IntoIterator<Item = &'a InputEvent>,
{
    for event in events {
        if let InputEvent::Custom { kind, a, b, .. } = *event {
            match kind {
                CTRL_SET_SPEED => store.set_speed(a),
                CTRL_SET_PAUSED => store.set_paused(a != 0.0),
                CTRL_SET_NIGHT_MODE => store.set_night_mode(a != 0.0),
                CTRL_SET_ORBIT_RATE => store.set_orbit_rate(a as usize, b),
                CTRL_SET_SPIN_RATE => store.set_spin_rate(a as usize, b),
                _ => {}
            }
        }
    }
}
