use crate::foundation::error::{ArError, ArResult};

pub use kurbo::{BezPath, Point, Rect, Vec2};

/// Milliseconds elapsed since the screen appeared.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Millis(pub u64);

impl Millis {
    /// Saturating addition of `ms` milliseconds.
    pub fn add_ms(self, ms: u64) -> Self {
        Self(self.0.saturating_add(ms))
    }
}

/// 0-based index of a rendered frame, in redraw order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Screen dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Create a validated canvas.
    pub fn new(width: u32, height: u32) -> ArResult<Self> {
        let c = Self { width, height };
        c.validate()?;
        Ok(c)
    }

    /// Both dimensions must be non-zero and fit the rasterizer's `u16` target size.
    pub fn validate(self) -> ArResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ArError::validation("canvas width/height must be > 0"));
        }
        self.dims_u16().map(|_| ())
    }

    /// Dimensions as `u16`, the size type of the CPU raster target.
    pub fn dims_u16(self) -> ArResult<(u16, u16)> {
        let w = u16::try_from(self.width)
            .map_err(|_| ArError::validation("canvas width must fit in u16"))?;
        let h = u16::try_from(self.height)
            .map_err(|_| ArError::validation("canvas height must fit in u16"))?;
        Ok((w, h))
    }

    /// Full-canvas rectangle.
    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 400,
            height: 600,
        }
    }
}

/// Straight-alpha RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque color from RGB channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color from all four channels.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
