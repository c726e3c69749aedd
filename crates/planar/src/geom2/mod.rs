//! Validated 2D shapes: radial shapes and squares.
//!
//! Purpose
//! - Immutable point-based shapes that are checked once at construction and
//!   then only transformed into new values (translate, rotate, canonicalize).
//! - Canonical text output independent of the order points were supplied in:
//!   points are sorted counterclockwise around the shape's center.
//!
//! Numerics
//! - Length comparisons use `GeomCfg` (relative 1e-9, absolute 1e-12 by default).
//! - Rotations by multiples of 90° are exact; the rotation center never drifts.
//!
//! Code cross-refs: `RadialShape`, `SquareShape`, `Shape`, `Point`, `GeomCfg`

mod error;
mod radial;
pub mod rand;
mod shape;
mod square;
mod types;
mod util;

pub use error::InvalidShapeError;
pub use radial::RadialShape;
pub use shape::Shape;
pub use square::SquareShape;
pub use types::{GeomCfg, Point};

#[cfg(test)]
mod tests_props;
