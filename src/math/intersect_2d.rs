use super::{Point2, TOLERANCE};

/// Bounded segment-segment intersection in 2D.
///
/// Given segments `a0→a1` and `b0→b1`, returns `(t, u)` with both parameters
/// in `[0, 1]`, or `None` if the segments are parallel or do not cross.
#[must_use]
pub fn segment_segment_params(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
) -> Option<(f64, f64)> {
    let dax = a1.x - a0.x;
    let day = a1.y - a0.y;
    let dbx = b1.x - b0.x;
    let dby = b1.y - b0.y;

    let cross = dax * dby - day * dbx;
    if cross.abs() < TOLERANCE {
        return None;
    }

    let dx = b0.x - a0.x;
    let dy = b0.y - a0.y;
    let t = (dx * dby - dy * dbx) / cross;
    let u = (dx * day - dy * dax) / cross;

    // Use a small epsilon to include endpoints.
    let eps = TOLERANCE;
    if t >= -eps && t <= 1.0 + eps && u >= -eps && u <= 1.0 + eps {
        Some((t.clamp(0.0, 1.0), u.clamp(0.0, 1.0)))
    } else {
        None
    }
}

/// Linear interpolation along segment `a→b` at parameter `t`.
#[must_use]
pub fn point_at(a: &Point2, b: &Point2, t: f64) -> Point2 {
    Point2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn segment_segment_crossing() {
        let a0 = Point2::new(0.0, 0.0);
        let a1 = Point2::new(2.0, 2.0);
        let b0 = Point2::new(0.0, 2.0);
        let b1 = Point2::new(2.0, 0.0);
        let (t, u) = segment_segment_params(&a0, &a1, &b0, &b1).unwrap();
        assert!((t - 0.5).abs() < TOLERANCE);
        assert!((u - 0.5).abs() < TOLERANCE);
    }

    #[test]
    fn segment_segment_parallel_returns_none() {
        let a0 = Point2::new(0.0, 0.0);
        let a1 = Point2::new(1.0, 0.0);
        let b0 = Point2::new(0.0, 1.0);
        let b1 = Point2::new(1.0, 1.0);
        assert!(segment_segment_params(&a0, &a1, &b0, &b1).is_none());
    }

    #[test]
    fn segment_segment_disjoint_returns_none() {
        let a0 = Point2::new(0.0, 0.0);
        let a1 = Point2::new(1.0, 0.0);
        let b0 = Point2::new(2.0, -1.0);
        let b1 = Point2::new(2.0, 1.0);
        assert!(segment_segment_params(&a0, &a1, &b0, &b1).is_none());
    }

    #[test]
    fn segment_segment_touching_endpoint() {
        // b starts exactly on a's endpoint.
        let a0 = Point2::new(0.0, 0.0);
        let a1 = Point2::new(1.0, 0.0);
        let b0 = Point2::new(1.0, 0.0);
        let b1 = Point2::new(1.0, 1.0);
        let (t, u) = segment_segment_params(&a0, &a1, &b0, &b1).unwrap();
        assert!((t - 1.0).abs() < TOLERANCE);
        assert!(u.abs() < TOLERANCE);
    }

    #[test]
    fn point_at_interpolation() {
        let a = Point2::new(1.0, 2.0);
        let b = Point2::new(5.0, 8.0);
        let p = point_at(&a, &b, 0.5);
        assert!((p.x - 3.0).abs() < TOLERANCE);
        assert!((p.y - 5.0).abs() < TOLERANCE);
    }
}
