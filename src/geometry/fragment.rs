use crate::math::{azimuth, Point2};

/// A probe segment oriented along an azimuth, long enough to fully traverse
/// the polygon it is measured against.
#[derive(Debug, Clone, Copy)]
pub struct SampleLine {
    /// First endpoint.
    pub a: Point2,
    /// Second endpoint.
    pub b: Point2,
}

impl SampleLine {
    /// Builds a sample line of half-length `l` through `anchor`, oriented
    /// along the normalized azimuth `az`.
    ///
    /// With `l` set to the bounding-box diagonal the total length `2l`
    /// guarantees the line exits the polygon on both sides regardless of
    /// where the anchor sits. The endpoint signs follow the quadrant
    /// convention of [`azimuth::displacement`].
    #[must_use]
    pub fn through(anchor: &Point2, az: f64, l: f64) -> Self {
        let d = azimuth::displacement(l, az);
        if az >= 90.0 {
            Self {
                a: Point2::new(anchor.x - d.x, anchor.y + d.y),
                b: Point2::new(anchor.x + d.x, anchor.y - d.y),
            }
        } else {
            Self {
                a: Point2::new(anchor.x - d.x, anchor.y - d.y),
                b: Point2::new(anchor.x + d.x, anchor.y + d.y),
            }
        }
    }
}

/// One contiguous piece of the intersection between a sample line and a
/// polygon.
///
/// Degenerate fragments (a point touch) carry length 0 and are excluded from
/// ranking computations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fragment {
    /// First endpoint.
    pub start: Point2,
    /// Second endpoint.
    pub end: Point2,
}

impl Fragment {
    /// Creates a fragment from its endpoints.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Euclidean length of the fragment.
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.end.x - self.start.x).hypot(self.end.y - self.start.y)
    }

    /// Whether the fragment is a degenerate point touch.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.length() < crate::math::TOLERANCE
    }
}
