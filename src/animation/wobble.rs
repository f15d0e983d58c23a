use crate::foundation::core::{Millis, Vec2};
use crate::foundation::error::{ArError, ArResult};
use serde::{Deserialize, Serialize};

/// Parameters of the "floating" offset applied to every object at draw time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WobbleConfig {
    /// Peak offset in pixels along each axis.
    pub amplitude_px: f64,
    /// Phase (in ms) is divided by this before taking sin/cos.
    pub phase_divisor_ms: f64,
    /// The phase restarts every `cycle_ms` (millisecond-of-second by default).
    pub cycle_ms: u64,
}

impl Default for WobbleConfig {
    fn default() -> Self {
        Self {
            amplitude_px: 10.0,
            phase_divisor_ms: 200.0,
            cycle_ms: 1000,
        }
    }
}

impl WobbleConfig {
    pub(crate) fn validate(&self) -> ArResult<()> {
        if !self.amplitude_px.is_finite() || self.amplitude_px < 0.0 {
            return Err(ArError::validation(
                "wobble.amplitude_px must be finite and >= 0",
            ));
        }
        if !self.phase_divisor_ms.is_finite() || self.phase_divisor_ms <= 0.0 {
            return Err(ArError::validation(
                "wobble.phase_divisor_ms must be finite and > 0",
            ));
        }
        if self.cycle_ms == 0 {
            return Err(ArError::validation("wobble.cycle_ms must be > 0"));
        }
        Ok(())
    }

    /// Offset shared by all objects in the frame drawn at `now`.
    ///
    /// `(sin(phase / divisor), cos(phase / divisor)) * amplitude`, `phase = now mod cycle`.
    pub fn offset_at(&self, now: Millis) -> Vec2 {
        let phase = (now.0 % self.cycle_ms.max(1)) as f64 / self.phase_divisor_ms;
        Vec2::new(
            phase.sin() * self.amplitude_px,
            phase.cos() * self.amplitude_px,
        )
    }
}
