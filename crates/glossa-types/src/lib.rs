pub mod geometry;
pub mod types;

pub use geometry::{BoundingBox, PagePoint, SurfacePoint};
pub use types::*;
