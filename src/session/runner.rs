use crate::clock::ticker::{RedrawTicker, Tick};
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{FrameIndex, Millis};
use crate::foundation::error::ArResult;
use crate::render::backend::{BackendKind, FrameRGBA, RenderBackend, create_backend};
use crate::render::draw::{DrawList, DrawStyle, build_draw_list};
use crate::scene::spawner::ObjectSpawner;
use crate::screen::state::{ArScreen, UiEvent};
use crate::screen::view::ScreenView;
use crate::session::config::ScreenConfig;
use crate::session::script::SessionScript;
use std::collections::VecDeque;

/// Counters reported by [`ScreenSession::run`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Frames pushed to the sink, including the initial one.
    pub frames_rendered: u64,
    /// Timer firings.
    pub ticks_fired: u64,
    /// Timer firings that did nothing because the animation was paused.
    pub ticks_skipped: u64,
    /// Button presses dispatched.
    pub events_dispatched: u64,
    /// Handler failures logged and swallowed during the run.
    pub ui_failures: u64,
}

/// Single-threaded event loop for one screen.
///
/// Owns the screen and a render backend. Time is simulated: button presses and timer firings are
/// processed in timestamp order, presses first when they share a timestamp.
pub struct ScreenSession {
    cfg: ScreenConfig,
    style: DrawStyle,
    screen: ArScreen,
    backend: Box<dyn RenderBackend>,
}

impl ScreenSession {
    /// Validate `cfg` and build a session with the CPU backend.
    pub fn new(cfg: ScreenConfig) -> ArResult<Self> {
        Self::with_backend(cfg, create_backend(BackendKind::Cpu))
    }

    /// Validate `cfg` and build a session drawing through `backend`.
    pub fn with_backend(cfg: ScreenConfig, backend: Box<dyn RenderBackend>) -> ArResult<Self> {
        cfg.validate()?;
        let screen = fresh_screen(&cfg)?;
        Ok(Self {
            style: cfg.draw_style(),
            cfg,
            screen,
            backend,
        })
    }

    /// Configuration in use.
    pub fn config(&self) -> &ScreenConfig {
        &self.cfg
    }

    /// The screen being driven.
    pub fn screen(&self) -> &ArScreen {
        &self.screen
    }

    /// Press a button outside of a script.
    pub fn dispatch(&mut self, event: UiEvent) {
        self.screen.dispatch(event);
    }

    /// Draw list for the current screen at `now`.
    pub fn draw_list_at(&self, now: Millis) -> ArResult<DrawList> {
        build_draw_list(self.cfg.canvas, self.screen.objects(), now, &self.style)
    }

    /// Render the current screen at `now`, regardless of the animation flag.
    pub fn render_at(&mut self, now: Millis) -> ArResult<FrameRGBA> {
        let list = self.draw_list_at(now)?;
        self.backend.render(&list)
    }

    /// Reset the screen, apply the script's presses up to and including `at`, then render a
    /// frame at `at`.
    ///
    /// Earlier presses and runs on this session are discarded, so repeated calls with the same
    /// script produce the same screen. The replayed state stays in place afterwards.
    pub fn snapshot_at(&mut self, script: &SessionScript, at: Millis) -> ArResult<FrameRGBA> {
        script.validate()?;
        self.screen = fresh_screen(&self.cfg)?;
        for (when, event) in script.timeline() {
            if when > at {
                break;
            }
            self.screen.dispatch(event);
        }
        self.render_at(at)
    }

    /// Play `script` from t = 0, pushing one frame per redraw into `sink`.
    ///
    /// The screen is drawn once at t = 0 and then on every timer firing while the animation is
    /// active. Presses never trigger a redraw on their own.
    #[tracing::instrument(skip_all, fields(duration_ms = script.duration_ms))]
    pub fn run(&mut self, script: &SessionScript, sink: &mut dyn FrameSink) -> ArResult<RunStats> {
        script.validate()?;

        let mut stats = RunStats::default();
        let failures_before = self.screen.ui_failures();
        let mut pending: VecDeque<(Millis, UiEvent)> = script.timeline().into();
        let end = Millis(script.duration_ms);
        let mut ticker = RedrawTicker::new(self.cfg.tick_interval_ms)?;

        sink.begin(SinkConfig {
            width: self.cfg.canvas.width,
            height: self.cfg.canvas.height,
            tick_interval_ms: ticker.interval_ms(),
        })?;

        self.dispatch_until(&mut pending, Millis(0), &mut stats);
        self.push_frame(Millis(0), sink, &mut stats)?;

        while ticker.next_due() <= end {
            let due = ticker.next_due();
            self.dispatch_until(&mut pending, due, &mut stats);
            let (at, tick) = ticker.fire(self.screen.is_animation_active());
            stats.ticks_fired += 1;
            match tick {
                Tick::Redraw => self.push_frame(at, sink, &mut stats)?,
                Tick::Skipped => {
                    stats.ticks_skipped += 1;
                    tracing::trace!(at_ms = at.0, "tick skipped, animation paused");
                }
            }
            // The clock saturates at u64::MAX.
            if ticker.next_due() == due {
                break;
            }
        }
        self.dispatch_until(&mut pending, end, &mut stats);

        sink.end()?;
        stats.ui_failures = self.screen.ui_failures() - failures_before;
        tracing::info!(
            frames = stats.frames_rendered,
            ticks = stats.ticks_fired,
            skipped = stats.ticks_skipped,
            events = stats.events_dispatched,
            ui_failures = stats.ui_failures,
            objects = self.screen.objects().len(),
            "session finished"
        );
        Ok(stats)
    }

    fn dispatch_until(
        &mut self,
        pending: &mut VecDeque<(Millis, UiEvent)>,
        until: Millis,
        stats: &mut RunStats,
    ) {
        while let Some(&(at, event)) = pending.front() {
            if at > until {
                break;
            }
            pending.pop_front();
            tracing::debug!(at_ms = at.0, ?event, "button pressed");
            self.screen.dispatch(event);
            stats.events_dispatched += 1;
        }
    }

    fn push_frame(
        &mut self,
        at: Millis,
        sink: &mut dyn FrameSink,
        stats: &mut RunStats,
    ) -> ArResult<()> {
        let frame = self.render_at(at)?;
        sink.push_frame(FrameIndex(stats.frames_rendered), at, &frame)?;
        stats.frames_rendered += 1;
        Ok(())
    }
}

fn fresh_screen(cfg: &ScreenConfig) -> ArResult<ArScreen> {
    let spawner = ObjectSpawner::new(cfg.spawn.clone(), cfg.seed)?;
    Ok(ArScreen::new(spawner, ScreenView::new(cfg.bindings)))
}
