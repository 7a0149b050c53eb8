pub mod error;
pub mod geometry;
pub mod math;
pub mod width;

pub use error::{PolyspanError, Result};
pub use geometry::{BoundingBox, Fragment, Polygon, SampleLine};
pub use width::{Aggregation, Algorithm, Mode, WidthCalculator, WidthParams};
