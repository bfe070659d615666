//! Scripted button scenarios — a timestamped list of press/release events
//! loaded from JSON, plus the built-in demo script.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use dice_core::DieSize;

/// A timestamped button action.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Press the button for `faces`.
    Press,
    /// Release every button.
    Release,
}

/// One scripted event.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Event {
    /// Simulated time at which the event fires, in milliseconds.
    pub at_ms: u64,
    /// What happens.
    pub action: Action,
    /// Face count of the die to press (`press` only): 4, 6, 8, 10, 12, 20
    /// or 100.
    #[serde(default)]
    pub faces: Option<u8>,
}

impl Event {
    /// Resolve the die this event presses, if it is a press.
    pub fn die(&self) -> Result<Option<DieSize>> {
        match self.action {
            Action::Release => Ok(None),
            Action::Press => {
                let faces = self
                    .faces
                    .context("press event is missing the `faces` field")?;
                let die = DieSize::from_faces(faces)
                    .with_context(|| format!("no die has {faces} faces"))?;
                Ok(Some(die))
            }
        }
    }
}

/// A full simulation script.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    /// Total simulated duration in milliseconds.
    pub run_ms: u64,
    /// Events, in any order; the simulator sorts them by timestamp.
    #[serde(default)]
    pub events: Vec<Event>,
}

impl Scenario {
    /// Load a scenario from a JSON file.
    pub fn load(path: &Path) -> Result<Scenario> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading scenario {}", path.display()))?;
        let mut scenario: Scenario = serde_json::from_str(&text)
            .with_context(|| format!("parsing scenario {}", path.display()))?;
        scenario.events.sort_by_key(|e| e.at_ms);
        Ok(scenario)
    }

    /// The built-in demo: roll each die for half a second, then go idle
    /// long enough for the inactivity blanking to kick in.
    pub fn demo() -> Scenario {
        let mut events = Vec::new();
        let mut t = 100;
        for die in DieSize::ALL {
            events.push(Event {
                at_ms: t,
                action: Action::Press,
                faces: Some(die.faces()),
            });
            events.push(Event {
                at_ms: t + 500,
                action: Action::Release,
                faces: None,
            });
            t += 900;
        }
        Scenario {
            // Leave ~10 s of idle tail so the timeout blank shows up.
            run_ms: t + 10_000,
            events,
        }
    }
}
