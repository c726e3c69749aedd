//! Square: four points forming a non-degenerate square.
//!
//! Invariants
//! - In storage order `a→b→c→d→a` is the boundary: four equal positive sides,
//!   both diagonals with squared length twice the squared side.
//! - Formatting uses the canonical order (counterclockwise around the centroid,
//!   ties nearest first), one decimal.
//! - Validation is scale-free: lengths are compared after normalizing the corners
//!   to unit extent, so neither huge nor tiny squares hit overflow or the
//!   absolute tolerance floor.
//! - Transforms keep every coordinate finite; a transform whose result would not
//!   be finite returns the square unchanged.

use std::fmt;

use nalgebra::Vector2;

use super::error::InvalidShapeError;
use super::shape::Shape;
use super::types::{GeomCfg, Point};
use super::util::{
    centroid, fmt_point_list, is_full_turn, rotate_about, rotation, sin_cos_deg,
    sort_by_angle_then_distance,
};

#[derive(Clone, Debug)]
pub struct SquareShape {
    points: [Point; 4],
}

impl SquareShape {
    pub fn new(a: Point, b: Point, c: Point, d: Point) -> Result<Self, InvalidShapeError> {
        Self::with_cfg(a, b, c, d, GeomCfg::default())
    }

    pub fn with_cfg(
        a: Point,
        b: Point,
        c: Point,
        d: Point,
        cfg: GeomCfg,
    ) -> Result<Self, InvalidShapeError> {
        let points = [a, b, c, d];
        if let Err(e) = validate(&points, cfg) {
            tracing::debug!(error = %e, "square rejected");
            return Err(e);
        }
        Ok(Self { points })
    }

    /// Accept the corners in any order: sort them around their centroid, then validate.
    pub fn from_unordered(points: [Point; 4]) -> Result<Self, InvalidShapeError> {
        Self::from_unordered_with_cfg(points, GeomCfg::default())
    }

    pub fn from_unordered_with_cfg(
        points: [Point; 4],
        cfg: GeomCfg,
    ) -> Result<Self, InvalidShapeError> {
        let mut points = points;
        if points.iter().all(Point::is_finite) {
            sort_by_angle_then_distance(centroid(&points), &mut points);
        }
        let [a, b, c, d] = points;
        Self::with_cfg(a, b, c, d, cfg)
    }

    #[inline]
    pub fn a(&self) -> &Point {
        &self.points[0]
    }
    #[inline]
    pub fn b(&self) -> &Point {
        &self.points[1]
    }
    #[inline]
    pub fn c(&self) -> &Point {
        &self.points[2]
    }
    #[inline]
    pub fn d(&self) -> &Point {
        &self.points[3]
    }
    /// Corners in storage order `a, b, c, d`.
    #[inline]
    pub fn points(&self) -> &[Point; 4] {
        &self.points
    }

    /// Centroid, named `"Center"`.
    pub fn center(&self) -> Point {
        Point::from_pos("Center", centroid(&self.points))
    }

    pub fn side_length(&self) -> f64 {
        self.points[0].distance(&self.points[1])
    }

    pub fn translate_by(&self, dx: f64, dy: f64) -> Self {
        let d = Vector2::new(dx, dy);
        let moved = self.points.clone().map(|p| p.translated(d));
        if !moved.iter().all(Point::is_finite) {
            tracing::debug!(dx, dy, "square translation is not finite; unchanged");
            return self.clone();
        }
        Self { points: moved }
    }

    /// Counterclockwise rotation about the centroid; labels follow the canonical order.
    pub fn rotate_by(&self, degrees: f64) -> Self {
        if is_full_turn(degrees) {
            return self.canonical();
        }
        let (s, c) = sin_cos_deg(degrees);
        let m = rotation(s, c);
        let o = centroid(&self.points);
        let rotated = self
            .points
            .clone()
            .map(|p| p.moved_to(rotate_about(o, &m, p.pos)));
        if !rotated.iter().all(Point::is_finite) {
            tracing::debug!(degrees, "square rotation is not finite; unchanged");
            return self.clone();
        }
        Self { points: rotated }.canonical()
    }

    /// Corners in canonical order.
    pub fn canonical_corners(&self) -> [Point; 4] {
        let mut out = self.points.clone();
        sort_by_angle_then_distance(centroid(&self.points), &mut out);
        out
    }

    /// Same square with `a..d` reassigned in canonical order.
    pub fn canonical(&self) -> Self {
        Self {
            points: self.canonical_corners(),
        }
    }

    /// Same names in the same storage order, coordinates within `eps`.
    pub fn approx_eq(&self, other: &Self, eps: f64) -> bool {
        self.points
            .iter()
            .zip(&other.points)
            .all(|(p, q)| p.name == q.name && p.same_position_eps(q, eps))
    }
}

fn validate(points: &[Point; 4], cfg: GeomCfg) -> Result<(), InvalidShapeError> {
    if let Some(bad) = points.iter().find(|p| !p.is_finite()) {
        return Err(InvalidShapeError::NonFinite {
            name: bad.name.clone(),
        });
    }
    let non_positive = || InvalidShapeError::NonPositiveSide {
        from: points[0].name.clone(),
        to: points[1].name.clone(),
    };
    // Offsets from `a`, later scaled to unit extent. Corners spanning more than
    // `f64::MAX` are shrunk by their largest coordinate before subtracting.
    let mut pre = 1.0;
    let mut rel: [Vector2<f64>; 4] = std::array::from_fn(|k| points[k].pos - points[0].pos);
    if !rel.iter().all(|d| d.x.is_finite() && d.y.is_finite()) {
        pre = points.iter().map(|p| p.pos.amax()).fold(0.0, f64::max);
        rel = std::array::from_fn(|k| points[k].pos / pre - points[0].pos / pre);
    }
    let extent = rel.iter().map(|d| d.amax()).fold(0.0, f64::max);
    if extent == 0.0 {
        return Err(non_positive());
    }
    let unit: [Vector2<f64>; 4] = std::array::from_fn(|k| rel[k] / extent);
    let sq = |i: usize, j: usize| (unit[i] - unit[j]).norm_squared();
    // squared lengths are reported in input units
    let scale = pre * extent;
    let to_input = |v: f64| v * scale * scale;

    let side = sq(0, 1);
    if side <= cfg.eps_abs {
        return Err(non_positive());
    }
    for k in 1..4 {
        let found = sq(k, (k + 1) % 4);
        if !cfg.approx_eq(side, found) {
            return Err(InvalidShapeError::UnequalSides {
                from: points[k].name.clone(),
                to: points[(k + 1) % 4].name.clone(),
                expected: to_input(side),
                found: to_input(found),
            });
        }
    }
    for k in 0..2 {
        let found = sq(k, k + 2);
        if !cfg.approx_eq(2.0 * side, found) {
            return Err(InvalidShapeError::DiagonalMismatch {
                from: points[k].name.clone(),
                to: points[k + 2].name.clone(),
                expected: to_input(2.0 * side),
                found: to_input(found),
            });
        }
    }
    Ok(())
}

impl fmt::Display for SquareShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_point_list(f, &self.canonical_corners(), 1)
    }
}

impl Shape for SquareShape {
    fn kind(&self) -> &'static str {
        "square"
    }
    fn center(&self) -> Point {
        SquareShape::center(self)
    }
    fn translate_by(&self, dx: f64, dy: f64) -> Self {
        SquareShape::translate_by(self, dx, dy)
    }
    fn rotate_by(&self, degrees: f64) -> Self {
        SquareShape::rotate_by(self, degrees)
    }
    fn canonical_points(&self) -> Vec<Point> {
        self.canonical_corners().into()
    }
}
