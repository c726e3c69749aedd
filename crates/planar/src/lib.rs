//! Validated 2D shapes with canonical text output.
//!
//! - `geom2::RadialShape`: a center with equidistant neighbors.
//! - `geom2::SquareShape`: four points forming a square.
//!
//! Shapes are immutable values: construction validates, transformations
//! (`translate_by`, `rotate_by`, `canonical`) return new shapes.
//!
//! API Policy
//! - Prefer clarity over compatibility; `api` is a curated surface for the CLI
//!   and benches, not a stability promise.

pub mod api;
pub mod geom2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{draw_radial, draw_square, ReplayToken};
    pub use crate::geom2::{GeomCfg, InvalidShapeError, Point, RadialShape, Shape, SquareShape};
    pub use nalgebra::Vector2 as Vec2;
}
