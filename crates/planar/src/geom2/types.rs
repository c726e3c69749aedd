//! Basic 2D types and tolerances shared by the shapes.
//!
//! - `GeomCfg`: centralizes the tolerances used by shape validation.
//! - `Point`: immutable named coordinate; equality is geometric (names ignored).
//!
//! Code cross-refs: `radial::RadialShape`, `square::SquareShape`, `util::fmt_point`

use std::fmt;

use nalgebra::Vector2;

use super::util::fmt_point;

/// Geometry configuration (tolerances).
///
/// Two lengths `a`, `b` are considered equal when
/// `|a - b| <= eps_abs + eps_rel * max(|a|, |b|)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    pub eps_rel: f64,
    pub eps_abs: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_rel: 1e-9,
            eps_abs: 1e-12,
        }
    }
}

impl GeomCfg {
    #[inline]
    pub fn approx_eq(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.eps_abs + self.eps_rel * a.abs().max(b.abs())
    }
}

/// Named point in the plane.
///
/// `PartialEq` compares coordinates only; use `name` explicitly when labels matter.
#[derive(Clone, Debug)]
pub struct Point {
    pub name: String,
    pub pos: Vector2<f64>,
}

impl Point {
    #[inline]
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self::from_pos(name, Vector2::new(x, y))
    }
    #[inline]
    pub fn from_pos(name: impl Into<String>, pos: Vector2<f64>) -> Self {
        Self {
            name: name.into(),
            pos,
        }
    }
    #[inline]
    pub fn x(&self) -> f64 {
        self.pos.x
    }
    #[inline]
    pub fn y(&self) -> f64 {
        self.pos.y
    }
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.pos.x.is_finite() && self.pos.y.is_finite()
    }
    /// Euclidean distance; `hypot` keeps huge offsets from overflowing.
    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        let d = self.pos - other.pos;
        d.x.hypot(d.y)
    }
    #[inline]
    pub fn distance_squared(&self, other: &Point) -> f64 {
        (self.pos - other.pos).norm_squared()
    }
    /// Same name, position moved by `d`.
    #[inline]
    pub fn translated(&self, d: Vector2<f64>) -> Point {
        Point::from_pos(self.name.clone(), self.pos + d)
    }
    /// Same name, position replaced.
    #[inline]
    pub fn moved_to(&self, pos: Vector2<f64>) -> Point {
        Point::from_pos(self.name.clone(), pos)
    }
    /// Coordinates within `eps` (max-abs metric).
    #[inline]
    pub fn same_position_eps(&self, other: &Point, eps: f64) -> bool {
        (self.pos - other.pos).amax() <= eps
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

/// `(name, x, y)` with two decimals.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_point(f, self, 2)
    }
}
