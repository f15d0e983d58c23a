use crate::animation::wobble::WobbleConfig;
use crate::clock::ticker::DEFAULT_TICK_INTERVAL_MS;
use crate::foundation::core::{Canvas, Rgba8};
use crate::foundation::error::{ArError, ArResult};
use crate::render::draw::{DrawStyle, GridConfig};
use crate::scene::spawner::SpawnConfig;
use crate::scene::star::DEFAULT_STAR_POINTS;
use crate::screen::view::ViewBindings;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// JSON-facing screen configuration. Every field is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScreenConfig {
    /// Screen size.
    pub canvas: Canvas,
    /// Background fill.
    pub background: Rgba8,
    /// Floor grid.
    pub grid: GridConfig,
    /// Per-frame object offset.
    pub wobble: WobbleConfig,
    /// Points on each star.
    pub star_points: u32,
    /// Redraw timer period.
    pub tick_interval_ms: u64,
    /// Ranges used by the Add button.
    pub spawn: SpawnConfig,
    /// Seed for the Add button's picks.
    pub seed: u64,
    /// Which widgets around the canvas are bound.
    pub bindings: ViewBindings,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            background: Rgba8::BLACK,
            grid: GridConfig::default(),
            wobble: WobbleConfig::default(),
            star_points: DEFAULT_STAR_POINTS,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            spawn: SpawnConfig::default(),
            seed: 0,
            bindings: ViewBindings::default(),
        }
    }
}

impl ScreenConfig {
    /// Parse a configuration from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> ArResult<Self> {
        serde_json::from_reader(r).map_err(|e| ArError::serde(format!("parse screen config: {e}")))
    }

    /// Parse a configuration from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ArResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ArError::validation(format!("open screen config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Pretty JSON, suitable as a starting point for a config file.
    pub fn to_json_pretty(&self) -> ArResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ArError::serde(format!("serialize screen config: {e}")))
    }

    /// Check every section.
    pub fn validate(&self) -> ArResult<()> {
        self.canvas.validate()?;
        if self.tick_interval_ms == 0 {
            return Err(ArError::validation("tick_interval_ms must be > 0"));
        }
        self.spawn.validate()?;
        self.draw_style().validate()
    }

    /// Style handed to the draw routine.
    pub fn draw_style(&self) -> DrawStyle {
        DrawStyle {
            background: self.background,
            grid: self.grid,
            wobble: self.wobble,
            star_points: self.star_points,
        }
    }
}
