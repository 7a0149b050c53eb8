//! The sweep/measure/merge/reduce pipeline answering "what is the
//! narrowest/widest crossing of this polygon along direction θ?".

pub mod aggregate;
pub mod calculator;
pub mod measure;
pub mod merge;
pub mod sample;

use std::str::FromStr;

use crate::error::InvalidParameter;

pub use calculator::WidthCalculator;
pub use measure::{Intersector, PlanarIntersector};

/// Whether the reported width is the narrowest or widest measured crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Min,
    Max,
}

impl FromStr for Mode {
    type Err = InvalidParameter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "min" => Ok(Self::Min),
            "max" => Ok(Self::Max),
            _ => Err(InvalidParameter::UnknownKeyword {
                parameter: "mode",
                value: s.to_owned(),
                allowed: "min, max",
            }),
        }
    }
}

/// How multiple fragments at one sample line combine into a single length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregation {
    /// Sum of all fragment lengths: total crossing length, appropriate when
    /// indentations along the line should combine.
    Abs,
    /// Longest (max mode) or shortest non-zero (min mode) merged fragment.
    Rel,
}

impl FromStr for Aggregation {
    type Err = InvalidParameter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "abs" => Ok(Self::Abs),
            "rel" => Ok(Self::Rel),
            _ => Err(InvalidParameter::UnknownKeyword {
                parameter: "aggregation",
                value: s.to_owned(),
                allowed: "abs, rel",
            }),
        }
    }
}

/// Sampling strategy for placing probe lines across the polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// One probe per polygon vertex. Exact at vertices; for convex polygons
    /// this finds the true maximum crossing exactly. It does not reliably
    /// find the true minimum crossing in general, since the minimum may
    /// occur mid-edge where no vertex anchors a probe.
    ByVertex,
    /// Probes anchored at fixed linear steps across the bounding box.
    ByStep,
    /// Both sequences, folded into the same aggregation pass.
    Mix,
}

impl Algorithm {
    /// Whether the algorithm needs a step.
    #[must_use]
    pub fn needs_step(self) -> bool {
        matches!(self, Self::ByStep | Self::Mix)
    }

    fn name(self) -> &'static str {
        match self {
            Self::ByVertex => "byVertex",
            Self::ByStep => "byStep",
            Self::Mix => "Mix",
        }
    }
}

impl FromStr for Algorithm {
    type Err = InvalidParameter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "byVertex" => Ok(Self::ByVertex),
            "byStep" => Ok(Self::ByStep),
            "Mix" => Ok(Self::Mix),
            _ => Err(InvalidParameter::UnknownKeyword {
                parameter: "algorithm",
                value: s.to_owned(),
                allowed: "byVertex, byStep, Mix",
            }),
        }
    }
}

/// Parameters of one width computation.
#[derive(Debug, Clone, Copy)]
pub struct WidthParams {
    /// Compass direction in decimal degrees, `[0, 360]`.
    pub azimuth: f64,
    /// Min or max width.
    pub mode: Mode,
    /// Per-line fragment aggregation.
    pub aggregation: Aggregation,
    /// Probe placement strategy.
    pub algorithm: Algorithm,
    /// Sweep increment in CRS units; required for [`Algorithm::ByStep`] and
    /// [`Algorithm::Mix`].
    pub step: Option<f64>,
}

impl WidthParams {
    /// Validates parameter domains.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidParameter`] if the azimuth is outside `[0, 360]`, a
    /// required step is missing, or the step is not positive.
    pub fn validate(&self) -> Result<(), InvalidParameter> {
        if !(0.0..=360.0).contains(&self.azimuth) || !self.azimuth.is_finite() {
            return Err(InvalidParameter::AzimuthOutOfRange(self.azimuth));
        }
        if self.algorithm.needs_step() {
            match self.step {
                None => return Err(InvalidParameter::MissingStep(self.algorithm.name())),
                Some(step) if step <= 0.0 || !step.is_finite() => {
                    return Err(InvalidParameter::NonPositiveStep(step));
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}
