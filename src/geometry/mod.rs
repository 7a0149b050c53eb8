pub mod bbox;
pub mod fragment;
pub mod polygon;

pub use bbox::BoundingBox;
pub use fragment::{Fragment, SampleLine};
pub use polygon::Polygon;
