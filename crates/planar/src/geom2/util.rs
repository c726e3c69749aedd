use std::cmp::Ordering;
use std::f64::consts::TAU;
use std::fmt;

use nalgebra::{Matrix2, Vector2};

use super::types::Point;

/// Angles this far below zero are treated as exactly zero.
const ANGLE_SNAP: f64 = 1e-9;
/// Resolution at which angles are compared when ordering points.
const ANGLE_QUANTUM: f64 = 1e-9;

/// Counterclockwise angle of `p` seen from `center`, in [0, 2π).
#[inline]
pub(crate) fn angle_about(center: Vector2<f64>, p: Vector2<f64>) -> f64 {
    let d = p - center;
    let a = d.y.atan2(d.x);
    if a < -ANGLE_SNAP {
        a + TAU
    } else {
        a.max(0.0)
    }
}

#[inline]
fn angle_key(center: Vector2<f64>, p: Vector2<f64>) -> i64 {
    (angle_about(center, p) / ANGLE_QUANTUM).round() as i64
}

/// Stable counterclockwise sort around `center`; equal angles keep their order.
pub(crate) fn sort_by_angle(center: Vector2<f64>, points: &mut [Point]) {
    points.sort_by_cached_key(|p| angle_key(center, p.pos));
}

/// Counterclockwise sort around `center`, equal angles ordered nearest first.
pub(crate) fn sort_by_angle_then_distance(center: Vector2<f64>, points: &mut [Point]) {
    points.sort_by(|p, q| {
        match angle_key(center, p.pos).cmp(&angle_key(center, q.pos)) {
            Ordering::Equal => (p.pos - center)
                .norm_squared()
                .total_cmp(&(q.pos - center).norm_squared()),
            o => o,
        }
    });
}

/// Whole number of turns (including zero).
#[inline]
pub(crate) fn is_full_turn(degrees: f64) -> bool {
    degrees.rem_euclid(360.0) == 0.0
}

/// (sin, cos) of an angle in degrees; quarter turns are exact.
pub(crate) fn sin_cos_deg(degrees: f64) -> (f64, f64) {
    let r = degrees.rem_euclid(360.0);
    if r == 0.0 {
        (0.0, 1.0)
    } else if r == 90.0 {
        (1.0, 0.0)
    } else if r == 180.0 {
        (0.0, -1.0)
    } else if r == 270.0 {
        (-1.0, 0.0)
    } else {
        r.to_radians().sin_cos()
    }
}

/// Counterclockwise rotation matrix from a precomputed (sin, cos).
#[inline]
pub(crate) fn rotation(sin: f64, cos: f64) -> Matrix2<f64> {
    Matrix2::new(cos, -sin, sin, cos)
}

/// Rotate `p` about `center` by `m`.
#[inline]
pub(crate) fn rotate_about(
    center: Vector2<f64>,
    m: &Matrix2<f64>,
    p: Vector2<f64>,
) -> Vector2<f64> {
    center + m * (p - center)
}

/// Fixed-point text with `decimals` digits, never printing `-0`.
///
/// Rounds half away from zero on the shortest decimal representation of `v`
/// (the digits `{}` would print), so `0.285` gives `0.29` even though the
/// nearest double lies just below the tie. Works on digit strings, so huge
/// magnitudes never overflow.
pub(crate) fn fmt_coord(v: f64, decimals: usize) -> String {
    if !v.is_finite() {
        return format!("{v}");
    }
    // shortest round-trip digits: "d.ddde<exp>"
    let sci = format!("{:e}", v.abs());
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return format!("{:.*}", decimals, v);
    };
    let Ok(exp) = exp.parse::<i64>() else {
        return format!("{:.*}", decimals, v);
    };
    let digits: Vec<u8> = mantissa
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();
    // |v| * 10^decimals has `keep` digits before its decimal point
    let keep = exp + 1 + decimals as i64;
    let mut kept: Vec<u8> = if keep <= 0 {
        Vec::new()
    } else {
        let keep = keep as usize;
        (0..keep).map(|i| digits.get(i).copied().unwrap_or(0)).collect()
    };
    let round_up = keep >= 0 && digits.get(keep as usize).is_some_and(|&d| d >= 5);
    if round_up {
        let mut carry = true;
        for d in kept.iter_mut().rev() {
            if *d == 9 {
                *d = 0;
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, 1);
        }
    }
    let negative = v < 0.0 && kept.iter().any(|&d| d != 0);
    if kept.len() <= decimals {
        let mut padded = vec![0; decimals + 1 - kept.len()];
        padded.extend(kept);
        kept = padded;
    }
    let (int, frac) = kept.split_at(kept.len() - decimals);
    let mut out = String::with_capacity(kept.len() + 2);
    if negative {
        out.push('-');
    }
    out.extend(int.iter().map(|&d| char::from(b'0' + d)));
    if decimals > 0 {
        out.push('.');
        out.extend(frac.iter().map(|&d| char::from(b'0' + d)));
    }
    out
}

pub(crate) fn fmt_point(f: &mut fmt::Formatter<'_>, p: &Point, decimals: usize) -> fmt::Result {
    write!(
        f,
        "({}, {}, {})",
        p.name,
        fmt_coord(p.x(), decimals),
        fmt_coord(p.y(), decimals)
    )
}

/// `[p; q; ...]`
pub(crate) fn fmt_point_list<'a>(
    f: &mut fmt::Formatter<'_>,
    points: impl IntoIterator<Item = &'a Point>,
    decimals: usize,
) -> fmt::Result {
    f.write_str("[")?;
    for (i, p) in points.into_iter().enumerate() {
        if i > 0 {
            f.write_str("; ")?;
        }
        fmt_point(f, p, decimals)?;
    }
    f.write_str("]")
}

/// Arithmetic mean of the positions.
pub(crate) fn centroid<'a>(points: impl IntoIterator<Item = &'a Point>) -> Vector2<f64> {
    let mut sum = Vector2::zeros();
    let mut n = 0usize;
    for p in points {
        sum += p.pos;
        n += 1;
    }
    if n == 0 {
        sum
    } else {
        sum / n as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn angles_are_normalized() {
        let o = Vector2::zeros();
        assert_eq!(angle_about(o, Vector2::new(1.0, 0.0)), 0.0);
        assert!((angle_about(o, Vector2::new(0.0, 1.0)) - FRAC_PI_2).abs() < 1e-15);
        assert!((angle_about(o, Vector2::new(-1.0, 0.0)) - PI).abs() < 1e-15);
        assert!((angle_about(o, Vector2::new(0.0, -1.0)) - 1.5 * PI).abs() < 1e-15);
        // float noise just below the x-axis snaps to zero instead of wrapping to 2π
        assert_eq!(angle_about(o, Vector2::new(1.0, -1e-17)), 0.0);
    }

    #[test]
    fn quarter_turns_are_exact() {
        assert_eq!(sin_cos_deg(90.0), (1.0, 0.0));
        assert_eq!(sin_cos_deg(-90.0), (-1.0, 0.0));
        assert_eq!(sin_cos_deg(360.0), (0.0, 1.0));
        assert_eq!(sin_cos_deg(540.0), (0.0, -1.0));
        let (s, c) = sin_cos_deg(30.0);
        assert!((s - 0.5).abs() < 1e-15);
        assert!((c - 3f64.sqrt() / 2.0).abs() < 1e-15);
    }

    #[test]
    fn coordinates_round_half_away_and_drop_negative_zero() {
        assert_eq!(fmt_coord(1.005_000_1, 2), "1.01");
        assert_eq!(fmt_coord(-0.001, 2), "0.00");
        assert_eq!(fmt_coord(-6.123e-17, 1), "0.0");
        assert_eq!(fmt_coord(-2.25, 1), "-2.3");
        assert_eq!(fmt_coord(3.0, 1), "3.0");
        assert_eq!(fmt_coord(0.995, 2), "1.00");
        assert_eq!(fmt_coord(-99.96, 1), "-100.0");
        assert_eq!(fmt_coord(12.0, 0), "12");
    }

    #[test]
    fn decimal_ties_round_on_the_printed_digits() {
        // neither 0.285 nor 1.005 is exactly representable; both sit just below the tie
        assert_eq!(fmt_coord(0.285, 2), "0.29");
        assert_eq!(fmt_coord(1.005, 2), "1.01");
        assert_eq!(fmt_coord(-0.285, 2), "-0.29");
        assert_eq!(fmt_coord(0.05, 1), "0.1");
    }

    #[test]
    fn huge_coordinates_do_not_overflow() {
        assert_eq!(fmt_coord(1e307, 2), format!("1{}.00", "0".repeat(307)));
        assert_eq!(fmt_coord(-2.5e300, 1), format!("-25{}.0", "0".repeat(299)));
        assert_eq!(fmt_coord(f64::MAX, 0).len(), 309);
    }

    #[test]
    fn stable_sort_keeps_ties_in_order() {
        let mut pts = vec![
            Point::new("far", 2.0, 0.0),
            Point::new("up", 0.0, 1.0),
            Point::new("near", 1.0, 0.0),
        ];
        sort_by_angle(Vector2::zeros(), &mut pts);
        let names: Vec<_> = pts.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["far", "near", "up"]);

        sort_by_angle_then_distance(Vector2::zeros(), &mut pts);
        let names: Vec<_> = pts.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["near", "far", "up"]);
    }
}
