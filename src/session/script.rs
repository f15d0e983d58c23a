use crate::foundation::core::Millis;
use crate::foundation::error::{ArError, ArResult};
use crate::screen::state::UiEvent;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Longest session a script may describe: one day of simulated time.
pub const MAX_SCRIPT_DURATION_MS: u64 = 24 * 60 * 60 * 1000;

/// One button press at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptEvent {
    /// When the button is pressed, in ms since the screen appeared.
    pub at_ms: u64,
    /// Which button.
    pub event: UiEvent,
}

/// A timeline of button presses driving a [`crate::ScreenSession`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionScript {
    /// Length of the session; the last timer firing is at or before this.
    pub duration_ms: u64,
    /// Button presses; need not be sorted.
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

impl SessionScript {
    /// Script with no button presses.
    pub fn idle(duration_ms: u64) -> Self {
        Self {
            duration_ms,
            events: Vec::new(),
        }
    }

    /// Append a press at `at_ms` (builder style).
    pub fn press(mut self, at_ms: u64, event: UiEvent) -> Self {
        self.events.push(ScriptEvent { at_ms, event });
        self
    }

    /// Parse a script from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> ArResult<Self> {
        serde_json::from_reader(r).map_err(|e| ArError::serde(format!("parse session script: {e}")))
    }

    /// Parse a script from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ArResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ArError::validation(format!("open session script '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// The duration is capped at [`MAX_SCRIPT_DURATION_MS`] and every press must fall inside
    /// the session.
    pub fn validate(&self) -> ArResult<()> {
        if self.duration_ms > MAX_SCRIPT_DURATION_MS {
            return Err(ArError::validation(format!(
                "duration_ms {} exceeds the {MAX_SCRIPT_DURATION_MS} ms limit",
                self.duration_ms
            )));
        }
        if let Some(ev) = self.events.iter().find(|e| e.at_ms > self.duration_ms) {
            return Err(ArError::validation(format!(
                "script event {:?} at {} ms is past duration_ms {}",
                ev.event, ev.at_ms, self.duration_ms
            )));
        }
        Ok(())
    }

    /// Presses ordered by time; presses sharing a timestamp keep their script order.
    pub fn timeline(&self) -> Vec<(Millis, UiEvent)> {
        let mut out: Vec<(Millis, UiEvent)> = self
            .events
            .iter()
            .map(|e| (Millis(e.at_ms), e.event))
            .collect();
        out.sort_by_key(|(at, _)| *at);
        out
    }
}
