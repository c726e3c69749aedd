use std::fmt;

use super::types::Point;

/// Operations shared by every validated shape.
///
/// Transformations never mutate `self`; they return a new shape.
pub trait Shape: fmt::Display {
    /// Short lowercase name of the shape family.
    fn kind(&self) -> &'static str;
    /// Reference point of the shape (radial center or square centroid).
    fn center(&self) -> Point;
    fn translate_by(&self, dx: f64, dy: f64) -> Self
    where
        Self: Sized;
    /// Counterclockwise rotation about `center()`.
    fn rotate_by(&self, degrees: f64) -> Self
    where
        Self: Sized;
    /// Points in formatting order.
    fn canonical_points(&self) -> Vec<Point>;
}
