//! Curated API for the CLI and benches (UNSTABLE).
//!
//! - Not a public API. Breaking changes are allowed when they improve the design.
//! - Prefer these re-exports for consistency across drivers.

// Shapes
pub use crate::geom2::{GeomCfg, InvalidShapeError, Point, RadialShape, Shape, SquareShape};
// Random shapes
pub use crate::geom2::rand::{
    draw_radial, draw_square, polar, NeighborCount, RadialCfg, ReplayToken, SquareCfg,
};
