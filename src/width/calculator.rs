use tracing::{debug, info, warn};

use crate::error::{GeometryError, PolyspanError, Result};
use crate::geometry::Polygon;
use crate::math::azimuth;

use super::aggregate::WidthAggregator;
use super::measure::{measure_line, Intersector, PlanarIntersector};
use super::sample::{clamp_step, SampleLines};
use super::WidthParams;

/// Computes the min/max width of polygons along a compass azimuth.
///
/// The calculator is a pure function of its inputs: it never mutates a
/// polygon, and per-feature computations are fully independent.
#[derive(Debug, Default, Clone, Copy)]
pub struct WidthCalculator<I = PlanarIntersector> {
    intersector: I,
}

impl WidthCalculator<PlanarIntersector> {
    /// Creates a calculator using the built-in planar intersector.
    #[must_use]
    pub fn new() -> Self {
        Self {
            intersector: PlanarIntersector,
        }
    }
}

impl<I: Intersector> WidthCalculator<I> {
    /// Creates a calculator backed by an external intersection primitive.
    #[must_use]
    pub fn with_intersector(intersector: I) -> Self {
        Self { intersector }
    }

    /// Computes the width of one polygon.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::InvalidParameter`] for parameters outside
    /// their domain and [`GeometryError`] for an empty polygon or an
    /// ambiguous fragment merge.
    pub fn compute(&self, polygon: &Polygon, params: &WidthParams) -> Result<f64> {
        params.validate()?;

        let bbox = polygon
            .bounding_box()
            .ok_or(GeometryError::EmptyPolygon)?;
        let az = azimuth::normalize(params.azimuth);
        let l = bbox.diagonal();
        let step = params
            .step
            .map_or(0.0, |step| clamp_step(step, &bbox));

        let mut aggregator = WidthAggregator::new(params.mode, l);
        for line in SampleLines::new(polygon, &bbox, az, params.algorithm, step) {
            let w = measure_line(
                &self.intersector,
                &line,
                polygon,
                params.aggregation,
                params.mode,
                l,
            )?;
            aggregator.push(w);
        }
        Ok(aggregator.finish())
    }

    /// Computes widths for a batch of features.
    ///
    /// Parameters are validated once before any feature is processed. A
    /// [`GeometryError`] on one feature is logged and yields `None` for that
    /// slot while the rest of the batch continues; writing the returned
    /// values back to an attribute field is the caller's concern.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::InvalidParameter`] before processing if the
    /// parameters are out of domain.
    pub fn compute_batch(
        &self,
        polygons: &[Polygon],
        params: &WidthParams,
    ) -> Result<Vec<Option<f64>>> {
        params.validate()?;
        info!(
            features = polygons.len(),
            azimuth = params.azimuth,
            mode = ?params.mode,
            algorithm = ?params.algorithm,
            "computing polygon widths"
        );

        let mut widths = Vec::with_capacity(polygons.len());
        for (feature, polygon) in polygons.iter().enumerate() {
            match self.compute(polygon, params) {
                Ok(width) => {
                    debug!(feature, width, "width computed");
                    widths.push(Some(width));
                }
                Err(PolyspanError::Geometry(err)) => {
                    warn!(feature, error = %err, "skipping feature");
                    widths.push(None);
                }
                Err(err) => return Err(err),
            }
        }
        Ok(widths)
    }
}
