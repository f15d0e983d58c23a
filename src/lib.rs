//! arscreen is a headless "augmented reality" demo screen.
//!
//! A black canvas with a green floor grid shows user-added circles and stars that float on a
//! sinusoidal wobble. Three buttons add an object, pause/resume the animation and clear the
//! screen. The UI event loop is simulated on one thread:
//!
//! - Configure a [`ScreenConfig`] (or use the defaults)
//! - Create a [`ScreenSession`]
//! - Play a [`SessionScript`] of button presses into a [`FrameSink`], or press buttons directly
//!   and render single frames
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod clock;
/// Frame sinks.
pub mod encode;
mod foundation;
mod render;
mod scene;
mod screen;
mod session;

pub use crate::animation::wobble::WobbleConfig;
pub use crate::clock::ticker::{DEFAULT_TICK_INTERVAL_MS, RedrawTicker, Tick};
pub use crate::encode::sink::{FrameSink, InMemorySink, PngSequenceSink, SinkConfig, write_png};
pub use crate::foundation::core::{BezPath, Canvas, FrameIndex, Millis, Point, Rect, Rgba8, Vec2};
pub use crate::foundation::error::{ArError, ArResult};
pub use crate::render::backend::{BackendKind, FrameRGBA, RenderBackend, create_backend};
pub use crate::render::cpu::CpuBackend;
pub use crate::render::draw::{DrawCmd, DrawList, DrawStyle, GridConfig, build_draw_list};
pub use crate::scene::object::{ArObject, ShapeKind};
pub use crate::scene::spawner::{ObjectSpawner, SpawnConfig};
pub use crate::scene::star::{DEFAULT_STAR_POINTS, star_path, star_vertices};
pub use crate::screen::state::{ArScreen, UiEvent};
pub use crate::screen::view::{Button, Label, ScreenView, ViewBindings};
pub use crate::session::config::ScreenConfig;
pub use crate::session::runner::{RunStats, ScreenSession};
pub use crate::session::script::{MAX_SCRIPT_DURATION_MS, ScriptEvent, SessionScript};
