use crate::foundation::core::{FrameIndex, Millis};
use crate::foundation::error::{ArError, ArResult};
use crate::render::backend::FrameRGBA;
use std::path::{Path, PathBuf};

/// Configuration provided to a [`FrameSink`] before the first frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkConfig {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Period of the redraw timer; frames land on multiples of it (plus the initial frame at 0).
    pub tick_interval_ms: u64,
}

/// Sink contract for consuming rendered frames in redraw order.
///
/// Ordering contract: `push_frame` is called with strictly increasing `FrameIndex` and
/// non-decreasing timestamps.
pub trait FrameSink {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> ArResult<()>;
    /// Push one frame drawn at `at`.
    fn push_frame(&mut self, idx: FrameIndex, at: Millis, frame: &FrameRGBA) -> ArResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> ArResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, Millis, FrameRGBA)>,
    ended: bool,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<&SinkConfig> {
        self.cfg.as_ref()
    }

    /// Captured frames in redraw order.
    pub fn frames(&self) -> &[(FrameIndex, Millis, FrameRGBA)] {
        &self.frames
    }

    /// Whether `end` was called.
    pub fn is_ended(&self) -> bool {
        self.ended
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> ArResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.ended = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, at: Millis, frame: &FrameRGBA) -> ArResult<()> {
        self.frames.push((idx, at, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> ArResult<()> {
        self.ended = true;
        Ok(())
    }
}

/// Writes each frame as `frame_00000.png`, `frame_00001.png`, ... into a directory.
#[derive(Debug)]
pub struct PngSequenceSink {
    dir: PathBuf,
    written: Vec<PathBuf>,
    cfg: Option<SinkConfig>,
}

impl PngSequenceSink {
    /// Sink writing into `dir` (created on `begin`).
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            written: Vec::new(),
            cfg: None,
        }
    }

    /// Paths written so far, in frame order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// File name used for frame `idx`.
    pub fn file_name(idx: FrameIndex) -> String {
        format!("frame_{:05}.png", idx.0)
    }
}

impl FrameSink for PngSequenceSink {
    fn begin(&mut self, cfg: SinkConfig) -> ArResult<()> {
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            ArError::encode(format!(
                "create output dir '{}': {e}",
                self.dir.display()
            ))
        })?;
        self.written.clear();
        self.cfg = Some(cfg);
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, _at: Millis, frame: &FrameRGBA) -> ArResult<()> {
        let Some(cfg) = self.cfg.as_ref() else {
            return Err(ArError::encode("png sink: push_frame called before begin"));
        };
        if frame.width != cfg.width || frame.height != cfg.height {
            return Err(ArError::encode(format!(
                "png sink: frame is {}x{}, expected {}x{}",
                frame.width, frame.height, cfg.width, cfg.height
            )));
        }
        let path = self.dir.join(Self::file_name(idx));
        write_png(&path, frame)?;
        self.written.push(path);
        Ok(())
    }

    fn end(&mut self) -> ArResult<()> {
        tracing::info!(
            frames = self.written.len(),
            dir = %self.dir.display(),
            "png sequence written"
        );
        Ok(())
    }
}

/// Save a frame as an RGBA8 PNG.
pub fn write_png(path: &Path, frame: &FrameRGBA) -> ArResult<()> {
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| ArError::encode(format!("write png '{}': {e}", path.display())))
}
