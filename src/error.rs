use thiserror::Error;

/// Top-level error type for the polyspan width library.
#[derive(Debug, Error)]
pub enum PolyspanError {
    #[error(transparent)]
    InvalidParameter(#[from] InvalidParameter),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    DataSource(#[from] DataSourceError),
}

/// A caller-supplied parameter outside its allowed domain.
///
/// Fatal to the invocation; reported before any feature is processed.
#[derive(Debug, Error)]
pub enum InvalidParameter {
    #[error("azimuth {0} is out of range [0, 360]")]
    AzimuthOutOfRange(f64),

    #[error("step {0} must be greater than 0")]
    NonPositiveStep(f64),

    #[error("algorithm '{0}' requires a step")]
    MissingStep(&'static str),

    #[error("unknown {parameter} '{value}', expected one of {allowed}")]
    UnknownKeyword {
        parameter: &'static str,
        value: String,
        allowed: &'static str,
    },
}

/// A geometric computation failed on one feature.
///
/// Recoverable per feature: batch processing skips the feature and continues.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error(
        "ambiguous fragment merge: {fragments} fragments leave {endpoints} \
         unmatched endpoints, expected 2"
    )]
    AmbiguousMerge { fragments: usize, endpoints: usize },

    #[error(
        "non-collinear fragment chain: merged span {span} differs from \
         summed fragment length {sum}"
    )]
    NonCollinearChain { span: f64, sum: f64 },

    #[error("polygon has no vertices")]
    EmptyPolygon,

    #[error("unexpected intersection geometry: {0}")]
    UnexpectedIntersection(String),
}

/// Errors owned by the external feature-store layer.
///
/// The core never produces these; the variant exists so data-source failures
/// surface through the same error type.
#[derive(Debug, Error)]
pub enum DataSourceError {
    #[error("failed to load data source: {0}")]
    LoadFailed(String),

    #[error("failed to create attribute field '{0}'")]
    FieldCreationFailed(String),
}

/// Convenience type alias for results using [`PolyspanError`].
pub type Result<T> = std::result::Result<T, PolyspanError>;
