use crate::geometry::{BoundingBox, Polygon, SampleLine};
use crate::math::Point2;

use super::Algorithm;

/// Clamps a sweep step so the narrower bounding-box dimension receives at
/// least ~100 samples.
///
/// A coarse step tuned for a continent would otherwise skip a small island
/// in the same dataset entirely.
#[must_use]
pub fn clamp_step(step: f64, bbox: &BoundingBox) -> f64 {
    let threshold = bbox.width().min(bbox.height()) / 100.0;
    // A degenerate box yields a zero threshold; keep the caller's step so
    // the sweep still terminates.
    if threshold > 0.0 {
        step.min(threshold)
    } else {
        step
    }
}

/// Lazy single-pass sequence of probe lines across a polygon's bounding box.
///
/// Emits the vertex-anchored lines first (for [`Algorithm::ByVertex`] and
/// [`Algorithm::Mix`]), then the stepped sweep (for [`Algorithm::ByStep`]
/// and [`Algorithm::Mix`]).
pub struct SampleLines<'a> {
    az: f64,
    half_len: f64,
    vertices: std::iter::Flatten<std::slice::Iter<'a, Vec<Point2>>>,
    sweep: Option<StepSweep>,
}

impl<'a> SampleLines<'a> {
    /// Creates the probe sequence for one computation.
    ///
    /// `az` must already be normalized to `[0, 180)` and `step` already
    /// clamped via [`clamp_step`] when the algorithm uses one.
    #[must_use]
    pub fn new(
        polygon: &'a Polygon,
        bbox: &BoundingBox,
        az: f64,
        algorithm: Algorithm,
        step: f64,
    ) -> Self {
        static NO_RINGS: &[Vec<Point2>] = &[];
        let vertices = match algorithm {
            Algorithm::ByVertex | Algorithm::Mix => polygon.rings().iter().flatten(),
            Algorithm::ByStep => NO_RINGS.iter().flatten(),
        };
        let sweep = match algorithm {
            Algorithm::ByStep | Algorithm::Mix => Some(StepSweep::new(bbox, az, step)),
            Algorithm::ByVertex => None,
        };
        Self {
            az,
            half_len: bbox.diagonal(),
            vertices,
            sweep,
        }
    }
}

impl Iterator for SampleLines<'_> {
    type Item = SampleLine;

    fn next(&mut self) -> Option<SampleLine> {
        if let Some(vertex) = self.vertices.next() {
            return Some(SampleLine::through(vertex, self.az, self.half_len));
        }
        let sweep = self.sweep.as_mut()?;
        let anchor = sweep.next()?;
        Some(SampleLine::through(&anchor, self.az, self.half_len))
    }
}

/// Anchor walk for the stepped sweep.
///
/// The anchor starts at the quadrant's corner, advances the y coordinate
/// across the box, then advances x along the far edge until it passes the
/// opposite corner. This L-shaped path covers the whole box for any oblique
/// azimuth, since every probe spans twice the box diagonal.
struct StepSweep {
    x: f64,
    y: f64,
    x_max: f64,
    y_limit: f64,
    x_step: f64,
    y_step: f64,
}

impl StepSweep {
    fn new(bbox: &BoundingBox, az: f64, step: f64) -> Self {
        if az >= 90.0 {
            Self {
                x: bbox.min.x,
                y: bbox.min.y,
                x_max: bbox.max.x,
                y_limit: bbox.max.y,
                x_step: step,
                y_step: step,
            }
        } else {
            Self {
                x: bbox.min.x,
                y: bbox.max.y,
                x_max: bbox.max.x,
                y_limit: bbox.min.y,
                x_step: step,
                y_step: -step,
            }
        }
    }

    fn y_in_range(&self) -> bool {
        if self.y_step > 0.0 {
            self.y <= self.y_limit
        } else {
            self.y >= self.y_limit
        }
    }
}

impl Iterator for StepSweep {
    type Item = Point2;

    fn next(&mut self) -> Option<Point2> {
        if self.x > self.x_max {
            return None;
        }
        let anchor = Point2::new(self.x, self.y);
        if self.y_in_range() {
            self.y += self.y_step;
        } else {
            self.x += self.x_step;
        }
        Some(anchor)
    }
}
