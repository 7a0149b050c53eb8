use crate::error::GeometryError;
use crate::geometry::{Fragment, Polygon, SampleLine};
use crate::math::intersect_2d::{point_at, segment_segment_params};
use crate::math::TOLERANCE;

use super::merge::merge_fragments;
use super::{Aggregation, Mode};

/// The external intersection primitive.
///
/// Implementations clip a probe line against a polygon and return the
/// contiguous pieces of the intersection. A feature store backed by a
/// geometry engine plugs in here; [`PlanarIntersector`] is the built-in
/// engine-free implementation.
pub trait Intersector {
    /// Intersects a probe line with the polygon boundary.
    ///
    /// # Errors
    ///
    /// Implementations should report an engine result that is neither empty
    /// nor a set of line fragments (a collection mixing geometry kinds, for
    /// instance) as [`GeometryError::UnexpectedIntersection`]; the batch
    /// loop then skips the feature instead of aborting the run.
    fn intersect(&self, line: &SampleLine, polygon: &Polygon)
        -> Result<Vec<Fragment>, GeometryError>;
}

/// Plain planar clipper: collects the probe's edge-crossing parameters and
/// classifies each sub-interval by its midpoint, emitting one fragment per
/// interval that lies inside the polygon.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlanarIntersector;

impl Intersector for PlanarIntersector {
    fn intersect(
        &self,
        line: &SampleLine,
        polygon: &Polygon,
    ) -> Result<Vec<Fragment>, GeometryError> {
        let mut params = vec![0.0, 1.0];
        for (a, b) in polygon.edges() {
            if let Some((t, _)) = segment_segment_params(&line.a, &line.b, a, b) {
                params.push(t);
            }
        }
        params.sort_by(f64::total_cmp);
        // A crossing exactly at a polygon vertex is reported by both incident
        // edges; collapse the duplicates.
        params.dedup_by(|a, b| (*a - *b).abs() < TOLERANCE);

        let mut fragments = Vec::new();
        for pair in params.windows(2) {
            let mid = point_at(&line.a, &line.b, 0.5 * (pair[0] + pair[1]));
            if polygon.contains_point(&mid) {
                fragments.push(Fragment::new(
                    point_at(&line.a, &line.b, pair[0]),
                    point_at(&line.a, &line.b, pair[1]),
                ));
            }
        }
        Ok(fragments)
    }
}

/// Reduces one probe line's fragments to a single scalar length.
///
/// `Abs` sums every fragment. `Rel` merges contiguous fragments first, then
/// takes the longest (max mode) or the shortest non-zero (min mode) merged
/// fragment; when no fragment survives, the sentinels −1 (max) and `l`
/// (min, the bounding-box diagonal) guarantee the probe loses the
/// aggregation comparison.
///
/// # Errors
///
/// Propagates intersection failures and ambiguous merges.
pub fn measure_line<I: Intersector>(
    intersector: &I,
    line: &SampleLine,
    polygon: &Polygon,
    aggregation: Aggregation,
    mode: Mode,
    l: f64,
) -> Result<f64, GeometryError> {
    let fragments = intersector.intersect(line, polygon)?;
    match aggregation {
        Aggregation::Abs => Ok(fragments.iter().map(Fragment::length).sum()),
        Aggregation::Rel => {
            let merged = merge_fragments(&fragments)?;
            let lengths = merged.iter().map(Fragment::length);
            match mode {
                Mode::Max => Ok(lengths.fold(-1.0, f64::max)),
                Mode::Min => Ok(lengths.filter(|&len| len > 0.0).fold(l, f64::min)),
            }
        }
    }
}
