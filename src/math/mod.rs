pub mod bounds;

pub use bounds::Bounds2;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;
