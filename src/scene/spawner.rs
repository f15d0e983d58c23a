use crate::foundation::core::{Point, Rgba8};
use crate::foundation::error::{ArError, ArResult};
use crate::foundation::math::{hash_to_range, hash_u32};
use crate::scene::color::default_palette;
use crate::scene::object::{ArObject, ShapeKind};
use serde::{Deserialize, Serialize};

/// Ranges and choices for objects created by the Add button.
///
/// Integer ranges are half-open `[lo, hi)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpawnConfig {
    /// Horizontal position of the bounding square's left edge.
    pub x: [i64; 2],
    /// Vertical position of the bounding square's top edge.
    pub y: [i64; 2],
    /// Side of the bounding square.
    pub size: [i64; 2],
    /// Fill colors, picked uniformly.
    pub palette: Vec<Rgba8>,
    /// Kinds, picked uniformly.
    pub kinds: Vec<ShapeKind>,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            x: [50, 300],
            y: [50, 400],
            size: [40, 80],
            palette: default_palette(),
            kinds: vec![ShapeKind::Circle, ShapeKind::Star],
        }
    }
}

impl SpawnConfig {
    pub(crate) fn validate(&self) -> ArResult<()> {
        for (name, [lo, hi]) in [("x", self.x), ("y", self.y), ("size", self.size)] {
            if lo >= hi {
                return Err(ArError::validation(format!(
                    "spawn.{name} range must satisfy lo < hi (got [{lo}, {hi}])"
                )));
            }
        }
        if self.size[0] <= 0 {
            return Err(ArError::validation("spawn.size lower bound must be > 0"));
        }
        if self.palette.is_empty() {
            return Err(ArError::validation("spawn.palette must not be empty"));
        }
        if self.kinds.is_empty() {
            return Err(ArError::validation("spawn.kinds must not be empty"));
        }
        Ok(())
    }
}

// Salts keep the per-field picks of one draw independent.
const SALT_X: u64 = 1;
const SALT_Y: u64 = 2;
const SALT_SIZE: u64 = 3;
const SALT_COLOR: u64 = 4;
const SALT_KIND: u64 = 5;

/// Seeded, replayable source of new objects.
#[derive(Debug, Clone)]
pub struct ObjectSpawner {
    cfg: SpawnConfig,
    seed: u64,
    draws: u64,
}

impl ObjectSpawner {
    /// Create a spawner; `cfg` must be valid.
    pub fn new(cfg: SpawnConfig, seed: u64) -> ArResult<Self> {
        cfg.validate()?;
        Ok(Self {
            cfg,
            seed,
            draws: 0,
        })
    }

    /// Number of objects produced so far (clears do not reset it).
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Produce the next object, tagged with `id`.
    pub fn spawn(&mut self, id: usize) -> ArObject {
        let draw = self.draws;
        self.draws += 1;

        let seed = self.seed;
        let pick = |salt: u64, lo: i64, hi: i64| hash_to_range(hash_u32(seed, draw, salt), lo, hi);

        let x = pick(SALT_X, self.cfg.x[0], self.cfg.x[1]);
        let y = pick(SALT_Y, self.cfg.y[0], self.cfg.y[1]);
        let size = pick(SALT_SIZE, self.cfg.size[0], self.cfg.size[1]);
        let color_idx = pick(SALT_COLOR, 0, self.cfg.palette.len() as i64) as usize;
        let kind_idx = pick(SALT_KIND, 0, self.cfg.kinds.len() as i64) as usize;

        ArObject {
            id,
            position: Point::new(x as f64, y as f64),
            size: size as f64,
            color: self.cfg.palette[color_idx],
            kind: self.cfg.kinds[kind_idx],
        }
    }
}
