use crate::foundation::core::BezPath;
use crate::foundation::error::{ArError, ArResult};
use crate::render::backend::{FrameRGBA, RenderBackend};
use crate::render::draw::{DrawCmd, DrawList};

/// CPU backend powered by `vello_cpu`.
///
/// The render context and target pixmap are reused across frames of the same size.
#[derive(Default)]
pub struct CpuBackend {
    ctx: Option<vello_cpu::RenderContext>,
    target: Option<vello_cpu::Pixmap>,
}

impl CpuBackend {
    /// Create a backend; buffers are allocated on first render.
    pub fn new() -> Self {
        Self::default()
    }

    fn with_ctx_mut<R>(
        &mut self,
        width: u16,
        height: u16,
        f: impl FnOnce(&mut vello_cpu::RenderContext) -> ArResult<R>,
    ) -> ArResult<R> {
        let mut ctx = match self.ctx.take() {
            None => vello_cpu::RenderContext::new(width, height),
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            Some(_) => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        let out = f(&mut ctx)?;
        self.ctx = Some(ctx);
        Ok(out)
    }

    fn take_target(&mut self, width: u16, height: u16) -> vello_cpu::Pixmap {
        match self.target.take() {
            Some(mut pm) if pm.width() == width && pm.height() == height => {
                clear_pixmap_to_transparent(&mut pm);
                pm
            }
            _ => vello_cpu::Pixmap::new(width, height),
        }
    }
}

impl RenderBackend for CpuBackend {
    fn render(&mut self, list: &DrawList) -> ArResult<FrameRGBA> {
        let (width, height) = list.canvas.dims_u16()?;
        if list.cmds.is_empty() {
            return Err(ArError::render("draw list has no commands"));
        }
        let mut target = self.take_target(width, height);

        self.with_ctx_mut(width, height, |ctx| {
            for cmd in &list.cmds {
                match cmd {
                    DrawCmd::FillRect { rect, color } => {
                        if !rect.is_finite() {
                            return Err(ArError::render(format!("non-finite rect {rect:?}")));
                        }
                        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                            color.r, color.g, color.b, color.a,
                        ));
                        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                            rect.x0, rect.y0, rect.x1, rect.y1,
                        ));
                    }
                    DrawCmd::FillPath { path, color } => {
                        if !path.elements().iter().all(el_is_finite) {
                            return Err(ArError::render("path has non-finite coordinates"));
                        }
                        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                            color.r, color.g, color.b, color.a,
                        ));
                        ctx.fill_path(&bezpath_to_cpu(path));
                    }
                }
            }
            ctx.flush();
            ctx.render_to_pixmap(&mut target);
            Ok(())
        })?;

        let frame = FrameRGBA {
            width: list.canvas.width,
            height: list.canvas.height,
            data: target.data_as_u8_slice().to_vec(),
            premultiplied: true,
        };
        self.target = Some(target);
        Ok(frame)
    }
}

fn clear_pixmap_to_transparent(pixmap: &mut vello_cpu::Pixmap) {
    pixmap.data_as_u8_slice_mut().fill(0);
}

fn el_is_finite(el: &kurbo::PathEl) -> bool {
    use kurbo::PathEl;

    match *el {
        PathEl::MoveTo(p) | PathEl::LineTo(p) => p.is_finite(),
        PathEl::QuadTo(p1, p2) => p1.is_finite() && p2.is_finite(),
        PathEl::CurveTo(p1, p2, p3) => p1.is_finite() && p2.is_finite() && p3.is_finite(),
        PathEl::ClosePath => true,
    }
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}
