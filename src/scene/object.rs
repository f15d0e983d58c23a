use crate::foundation::core::{Point, Rect, Rgba8, Vec2};

/// Shape drawn for an [`ArObject`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// Filled circle inscribed in the object's bounding square.
    Circle,
    /// Filled star centered in the object's bounding square.
    Star,
}

/// One user-added shape.
///
/// Records are immutable once created; the wobble is applied at draw time and never stored.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ArObject {
    /// Creation-order index; equals the object's position in the screen's list.
    pub id: usize,
    /// Top-left corner of the bounding square.
    pub position: Point,
    /// Side length of the bounding square.
    pub size: f64,
    /// Fill color.
    pub color: Rgba8,
    /// Shape kind.
    pub kind: ShapeKind,
}

impl ArObject {
    /// Bounding square at rest.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.position, (self.size, self.size))
    }

    /// Bounding square shifted by `offset`.
    pub fn bounds_at(&self, offset: Vec2) -> Rect {
        Rect::from_origin_size(self.position + offset, (self.size, self.size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_follow_position_and_offset() {
        let obj = ArObject {
            id: 0,
            position: Point::new(100.0, 50.0),
            size: 40.0,
            color: Rgba8::RED,
            kind: ShapeKind::Circle,
        };
        assert_eq!(obj.bounds(), Rect::new(100.0, 50.0, 140.0, 90.0));
        assert_eq!(
            obj.bounds_at(Vec2::new(-5.0, 10.0)),
            Rect::new(95.0, 60.0, 135.0, 100.0)
        );
    }

    #[test]
    fn kind_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&ShapeKind::Star).unwrap(),
            "\"star\""
        );
    }
}
