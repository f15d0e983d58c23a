use crate::animation::wobble::WobbleConfig;
use crate::foundation::core::{BezPath, Canvas, Millis, Rect, Rgba8};
use crate::foundation::error::{ArError, ArResult};
use crate::scene::object::{ArObject, ShapeKind};
use crate::scene::star::{DEFAULT_STAR_POINTS, star_path};
use kurbo::Shape;
use serde::{Deserialize, Serialize};

const CIRCLE_TOLERANCE: f64 = 0.1;

/// Floor grid painted under the objects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridConfig {
    /// Distance between consecutive lines.
    pub spacing_px: f64,
    /// Line thickness.
    pub line_width_px: f64,
    /// Line color.
    pub color: Rgba8,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            spacing_px: 80.0,
            line_width_px: 1.0,
            color: Rgba8::DARK_GREEN,
        }
    }
}

/// Everything the draw routine needs besides the objects and the clock.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawStyle {
    /// Background fill.
    pub background: Rgba8,
    /// Floor grid.
    pub grid: GridConfig,
    /// Per-frame object offset.
    pub wobble: WobbleConfig,
    /// Points on each star.
    pub star_points: u32,
}

impl Default for DrawStyle {
    fn default() -> Self {
        Self {
            background: Rgba8::BLACK,
            grid: GridConfig::default(),
            wobble: WobbleConfig::default(),
            star_points: DEFAULT_STAR_POINTS,
        }
    }
}

impl DrawStyle {
    pub(crate) fn validate(&self) -> ArResult<()> {
        if !self.grid.spacing_px.is_finite() || self.grid.spacing_px < 1.0 {
            return Err(ArError::validation(
                "grid.spacing_px must be finite and >= 1",
            ));
        }
        if !self.grid.line_width_px.is_finite() || self.grid.line_width_px <= 0.0 {
            return Err(ArError::validation(
                "grid.line_width_px must be finite and > 0",
            ));
        }
        if self.star_points < 2 {
            return Err(ArError::validation("star_points must be >= 2"));
        }
        self.wobble.validate()
    }
}

/// One fill operation, in canvas pixel space.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Fill an axis-aligned rectangle.
    FillRect {
        /// Area to fill.
        rect: Rect,
        /// Fill color.
        color: Rgba8,
    },
    /// Fill an arbitrary closed path (non-zero winding).
    FillPath {
        /// Outline to fill.
        path: BezPath,
        /// Fill color.
        color: Rgba8,
    },
}

/// Backend-agnostic description of one frame, painted in order.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawList {
    /// Target size.
    pub canvas: Canvas,
    /// Commands, back to front.
    pub cmds: Vec<DrawCmd>,
}

/// Build the frame for `now`: background, grid, then every object offset by the wobble.
pub fn build_draw_list(
    canvas: Canvas,
    objects: &[ArObject],
    now: Millis,
    style: &DrawStyle,
) -> ArResult<DrawList> {
    let w = f64::from(canvas.width);
    let h = f64::from(canvas.height);
    let grid = &style.grid;

    let mut cmds = Vec::with_capacity(
        1 + grid_line_count(w, grid.spacing_px)
            + grid_line_count(h, grid.spacing_px)
            + objects.len(),
    );

    cmds.push(DrawCmd::FillRect {
        rect: canvas.rect(),
        color: style.background,
    });

    for i in 0..grid_line_count(w, grid.spacing_px) {
        let x = i as f64 * grid.spacing_px;
        cmds.push(DrawCmd::FillRect {
            rect: Rect::new(x, 0.0, x + grid.line_width_px, h),
            color: grid.color,
        });
    }
    for i in 0..grid_line_count(h, grid.spacing_px) {
        let y = i as f64 * grid.spacing_px;
        cmds.push(DrawCmd::FillRect {
            rect: Rect::new(0.0, y, w, y + grid.line_width_px),
            color: grid.color,
        });
    }

    let offset = style.wobble.offset_at(now);
    for obj in objects {
        let bounds = obj.bounds_at(offset);
        let path = match obj.kind {
            ShapeKind::Circle => kurbo::Ellipse::from_rect(bounds).to_path(CIRCLE_TOLERANCE),
            ShapeKind::Star => star_path(bounds, style.star_points)?,
        };
        cmds.push(DrawCmd::FillPath {
            path,
            color: obj.color,
        });
    }

    Ok(DrawList { canvas, cmds })
}

/// Lines at `0, s, 2s, ...` strictly below `extent`.
fn grid_line_count(extent: f64, spacing: f64) -> usize {
    if extent <= 0.0 || spacing <= 0.0 {
        return 0;
    }
    (extent / spacing).ceil() as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::core::Point;

    fn obj(id: usize, kind: ShapeKind, color: Rgba8) -> ArObject {
        ArObject {
            id,
            position: Point::new(100.0, 100.0),
            size: 60.0,
            color,
            kind,
        }
    }

    #[test]
    fn empty_screen_is_background_plus_grid() {
        let canvas = Canvas::new(400, 600).unwrap();
        let list = build_draw_list(canvas, &[], Millis(0), &DrawStyle::default()).unwrap();
        // 5 vertical (0..=320) + 8 horizontal (0..=560) lines.
        assert_eq!(list.cmds.len(), 1 + 5 + 8);
        assert_eq!(
            list.cmds[0],
            DrawCmd::FillRect {
                rect: Rect::new(0.0, 0.0, 400.0, 600.0),
                color: Rgba8::BLACK,
            }
        );
        assert_eq!(
            list.cmds[5],
            DrawCmd::FillRect {
                rect: Rect::new(320.0, 0.0, 321.0, 600.0),
                color: Rgba8::DARK_GREEN,
            }
        );
    }

    #[test]
    fn grid_stops_strictly_below_extent() {
        assert_eq!(grid_line_count(160.0, 80.0), 2);
        assert_eq!(grid_line_count(161.0, 80.0), 3);
        assert_eq!(grid_line_count(1.0, 80.0), 1);
        assert_eq!(grid_line_count(0.0, 80.0), 0);
    }

    #[test]
    fn objects_follow_grid_in_list_order_with_wobble() {
        let canvas = Canvas::new(400, 600).unwrap();
        let objects = [
            obj(0, ShapeKind::Circle, Rgba8::RED),
            obj(1, ShapeKind::Star, Rgba8::BLUE),
        ];
        let list = build_draw_list(canvas, &objects, Millis(0), &DrawStyle::default()).unwrap();
        assert_eq!(list.cmds.len(), 14 + 2);

        let DrawCmd::FillPath { path, color } = &list.cmds[14] else {
            panic!("expected circle path");
        };
        assert_eq!(*color, Rgba8::RED);
        // At t=0 the wobble is (0, +10).
        let bb = path.bounding_box();
        assert!((bb.x0 - 100.0).abs() < 0.5 && (bb.y0 - 110.0).abs() < 0.5);
        assert!((bb.x1 - 160.0).abs() < 0.5 && (bb.y1 - 170.0).abs() < 0.5);

        let DrawCmd::FillPath { color, .. } = &list.cmds[15] else {
            panic!("expected star path");
        };
        assert_eq!(*color, Rgba8::BLUE);
    }

    #[test]
    fn invalid_style_is_rejected() {
        let style = DrawStyle {
            star_points: 1,
            ..DrawStyle::default()
        };
        assert!(style.validate().is_err());

        let style = DrawStyle {
            grid: GridConfig {
                spacing_px: 0.0,
                ..GridConfig::default()
            },
            ..DrawStyle::default()
        };
        assert!(style.validate().is_err());
    }
}
