use crate::foundation::core::{BezPath, Point, Rect};
use crate::foundation::error::{ArError, ArResult};
use std::f64::consts::{FRAC_PI_2, PI};

/// Default number of star points.
pub const DEFAULT_STAR_POINTS: u32 = 5;

/// Vertices of an `points`-pointed star around `center`.
///
/// Emits `2 * points` vertices at equal angular steps of `π / points`, starting at the top
/// (`-π/2`) and alternating between `outer_radius` and `outer_radius / 2`.
pub fn star_vertices(center: Point, outer_radius: f64, points: u32) -> ArResult<Vec<Point>> {
    if points < 2 {
        return Err(ArError::validation("star must have at least 2 points"));
    }
    if !outer_radius.is_finite() || outer_radius < 0.0 {
        return Err(ArError::validation(
            "star outer radius must be finite and >= 0",
        ));
    }

    let inner_radius = outer_radius * 0.5;
    let step = PI / f64::from(points);
    let n = points as usize * 2;
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let angle = -FRAC_PI_2 + step * i as f64;
        let r = if i % 2 == 0 {
            outer_radius
        } else {
            inner_radius
        };
        out.push(Point::new(
            center.x + r * angle.cos(),
            center.y + r * angle.sin(),
        ));
    }
    Ok(out)
}

/// Closed star path centered in `bounds`, outer radius half the shorter side.
pub fn star_path(bounds: Rect, points: u32) -> ArResult<BezPath> {
    let outer = bounds.width().min(bounds.height()) * 0.5;
    let verts = star_vertices(bounds.center(), outer, points)?;

    let mut path = BezPath::new();
    let mut it = verts.into_iter();
    if let Some(first) = it.next() {
        path.move_to(first);
        for p in it {
            path.line_to(p);
        }
        path.close_path();
    }
    Ok(path)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/star.rs"]
mod tests;
