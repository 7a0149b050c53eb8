use crate::math::Point2;

/// An axis-aligned bounding box in the XY plane.
#[derive(Debug, Clone, Copy)]
pub struct BoundingBox {
    /// Minimum corner of the bounding box.
    pub min: Point2,
    /// Maximum corner of the bounding box.
    pub max: Point2,
}

impl BoundingBox {
    /// Creates a bounding box from raw corner coordinates.
    ///
    /// Coordinates are sorted, so `(x_min, x_max)` may be passed in either
    /// order.
    #[must_use]
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            min: Point2::new(x0.min(x1), y0.min(y1)),
            max: Point2::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// Computes the bounding box of a set of points.
    ///
    /// Returns `None` for an empty set.
    #[must_use]
    pub fn of<'a, I: IntoIterator<Item = &'a Point2>>(points: I) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bbox = Self { min: *first, max: *first };
        for p in iter {
            bbox.min.x = bbox.min.x.min(p.x);
            bbox.min.y = bbox.min.y.min(p.y);
            bbox.max.x = bbox.max.x.max(p.x);
            bbox.max.y = bbox.max.y.max(p.y);
        }
        Some(bbox)
    }

    /// Extent along x.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Extent along y.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Length of the box diagonal.
    ///
    /// No chord of a polygon exceeds the diagonal of its bounding box, which
    /// makes the diagonal both a safe probe half-length and the "no crossing
    /// found" sentinel for minimum-width searches.
    #[must_use]
    pub fn diagonal(&self) -> f64 {
        self.width().hypot(self.height())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::math::TOLERANCE;

    #[test]
    fn new_sorts_corners() {
        let bbox = BoundingBox::new(3.0, 4.0, 1.0, 2.0);
        assert!((bbox.min.x - 1.0).abs() < TOLERANCE);
        assert!((bbox.min.y - 2.0).abs() < TOLERANCE);
        assert!((bbox.max.x - 3.0).abs() < TOLERANCE);
        assert!((bbox.max.y - 4.0).abs() < TOLERANCE);
    }

    #[test]
    fn of_points() {
        let pts = vec![
            Point2::new(1.0, 5.0),
            Point2::new(-2.0, 0.5),
            Point2::new(3.0, 2.0),
        ];
        let bbox = BoundingBox::of(&pts).unwrap();
        assert!((bbox.min.x + 2.0).abs() < TOLERANCE);
        assert!((bbox.min.y - 0.5).abs() < TOLERANCE);
        assert!((bbox.max.x - 3.0).abs() < TOLERANCE);
        assert!((bbox.max.y - 5.0).abs() < TOLERANCE);
    }

    #[test]
    fn of_empty_is_none() {
        let empty: Vec<Point2> = Vec::new();
        assert!(BoundingBox::of(&empty).is_none());
    }

    #[test]
    fn diagonal_3_4_5() {
        let bbox = BoundingBox::new(0.0, 0.0, 3.0, 4.0);
        assert_relative_eq!(bbox.diagonal(), 5.0, epsilon = TOLERANCE);
        assert_relative_eq!(bbox.width(), 3.0, epsilon = TOLERANCE);
        assert_relative_eq!(bbox.height(), 4.0, epsilon = TOLERANCE);
    }
}
