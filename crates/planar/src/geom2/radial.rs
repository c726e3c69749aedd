//! Radial shape: a center with equidistant neighbors.
//!
//! Invariants
//! - Every neighbor lies at the same distance from the center (`GeomCfg` tolerance).
//! - Neighbors keep insertion order; the canonical (counterclockwise from +x)
//!   order is computed on demand and used for formatting.
//! - Rotation leaves the center bit-identical.
//! - Transforms keep every coordinate finite; a transform whose result would not
//!   be finite returns the shape unchanged.

use std::fmt;

use nalgebra::Vector2;

use super::error::InvalidShapeError;
use super::shape::Shape;
use super::types::{GeomCfg, Point};
use super::util::{
    fmt_point_list, is_full_turn, rotate_about, rotation, sin_cos_deg, sort_by_angle,
};

#[derive(Clone, Debug)]
pub struct RadialShape {
    center: Point,
    neighbors: Vec<Point>,
}

impl RadialShape {
    /// Center only; always valid.
    pub fn lonely(center: Point) -> Self {
        Self {
            center,
            neighbors: Vec::new(),
        }
    }

    pub fn new(center: Point, neighbors: Vec<Point>) -> Result<Self, InvalidShapeError> {
        Self::with_cfg(center, neighbors, GeomCfg::default())
    }

    /// Validate that all neighbors share the first neighbor's distance to `center`.
    pub fn with_cfg(
        center: Point,
        neighbors: Vec<Point>,
        cfg: GeomCfg,
    ) -> Result<Self, InvalidShapeError> {
        if let Some(bad) = std::iter::once(&center)
            .chain(&neighbors)
            .find(|p| !p.is_finite())
        {
            tracing::debug!(point = %bad.name, "radial shape rejected: non-finite coordinate");
            return Err(InvalidShapeError::NonFinite {
                name: bad.name.clone(),
            });
        }
        if let Some(first) = neighbors.first() {
            let expected = first.distance(&center);
            for p in &neighbors[1..] {
                let found = p.distance(&center);
                if !cfg.approx_eq(expected, found) {
                    tracing::debug!(
                        neighbor = %p.name,
                        expected,
                        found,
                        "radial shape rejected: unequal radius"
                    );
                    return Err(InvalidShapeError::UnequalRadius {
                        name: p.name.clone(),
                        expected,
                        found,
                    });
                }
            }
        }
        Ok(Self { center, neighbors })
    }

    #[inline]
    pub fn center(&self) -> &Point {
        &self.center
    }
    /// Neighbors in insertion order.
    #[inline]
    pub fn neighbors(&self) -> &[Point] {
        &self.neighbors
    }
    #[inline]
    pub fn neighbor_count(&self) -> usize {
        self.neighbors.len()
    }
    #[inline]
    pub fn is_lonely(&self) -> bool {
        self.neighbors.is_empty()
    }
    /// Distance of the first neighbor from the center; `None` when lonely.
    pub fn radius(&self) -> Option<f64> {
        self.neighbors.first().map(|p| p.distance(&self.center))
    }

    pub fn translate_by(&self, dx: f64, dy: f64) -> Self {
        let d = Vector2::new(dx, dy);
        let moved = Self {
            center: self.center.translated(d),
            neighbors: self.neighbors.iter().map(|p| p.translated(d)).collect(),
        };
        if !moved.is_finite() {
            tracing::debug!(dx, dy, "radial translation is not finite; unchanged");
            return self.clone();
        }
        moved
    }

    /// Counterclockwise rotation of the neighbors about the (unchanged) center.
    pub fn rotate_by(&self, degrees: f64) -> Self {
        if is_full_turn(degrees) {
            return self.clone();
        }
        let (s, c) = sin_cos_deg(degrees);
        let m = rotation(s, c);
        let o = self.center.pos;
        let rotated = Self {
            center: self.center.clone(),
            neighbors: self
                .neighbors
                .iter()
                .map(|p| p.moved_to(rotate_about(o, &m, p.pos)))
                .collect(),
        };
        if !rotated.is_finite() {
            tracing::debug!(degrees, "radial rotation is not finite; unchanged");
            return self.clone();
        }
        rotated
    }

    fn is_finite(&self) -> bool {
        self.center.is_finite() && self.neighbors.iter().all(Point::is_finite)
    }

    /// Neighbors sorted counterclockwise from the positive x-axis (stable for ties).
    pub fn canonical_neighbors(&self) -> Vec<Point> {
        let mut out = self.neighbors.clone();
        sort_by_angle(self.center.pos, &mut out);
        out
    }

    /// Same shape with neighbors stored in canonical order.
    pub fn canonical(&self) -> Self {
        Self {
            center: self.center.clone(),
            neighbors: self.canonical_neighbors(),
        }
    }

    /// Same names in the same storage order, coordinates within `eps`.
    pub fn approx_eq(&self, other: &Self, eps: f64) -> bool {
        self.neighbors.len() == other.neighbors.len()
            && std::iter::once((&self.center, &other.center))
                .chain(self.neighbors.iter().zip(&other.neighbors))
                .all(|(p, q)| p.name == q.name && p.same_position_eps(q, eps))
    }
}

impl fmt::Display for RadialShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let neighbors = self.canonical_neighbors();
        fmt_point_list(f, std::iter::once(&self.center).chain(&neighbors), 2)
    }
}

impl Shape for RadialShape {
    fn kind(&self) -> &'static str {
        "radial"
    }
    fn center(&self) -> Point {
        self.center.clone()
    }
    fn translate_by(&self, dx: f64, dy: f64) -> Self {
        RadialShape::translate_by(self, dx, dy)
    }
    fn rotate_by(&self, degrees: f64) -> Self {
        RadialShape::rotate_by(self, degrees)
    }
    fn canonical_points(&self) -> Vec<Point> {
        let mut out = Vec::with_capacity(self.neighbors.len() + 1);
        out.push(self.center.clone());
        out.extend(self.canonical_neighbors());
        out
    }
}
