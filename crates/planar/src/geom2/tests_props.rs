//! Property tests over seeded random shapes.
//!
//! Shapes come from `rand::{draw_radial, draw_square}` so every case is a valid
//! shape; proptest varies the replay token and the transformation parameters.

use super::rand::{draw_radial, draw_square, RadialCfg, ReplayToken, SquareCfg};
use super::*;
use proptest::prelude::*;

const EPS: f64 = 1e-9;

fn radial(seed: u64) -> RadialShape {
    draw_radial(RadialCfg::default(), ReplayToken { seed, index: 0 }).unwrap()
}

fn square(seed: u64) -> SquareShape {
    draw_square(SquareCfg::default(), ReplayToken { seed, index: 0 }).unwrap()
}

proptest! {
    #[test]
    fn radial_neighbors_are_equidistant(seed in any::<u64>()) {
        let g = radial(seed);
        if let Some(r) = g.radius() {
            for p in g.neighbors() {
                prop_assert!((p.distance(g.center()) - r).abs() <= EPS * r.max(1.0));
            }
        }
    }

    #[test]
    fn radial_translate_round_trip(
        seed in any::<u64>(),
        dx in -100.0..100.0f64,
        dy in -100.0..100.0f64,
    ) {
        let g = radial(seed);
        let back = g.translate_by(dx, dy).translate_by(-dx, -dy);
        prop_assert!(back.approx_eq(&g, EPS));
    }

    #[test]
    fn radial_rotate_round_trip(seed in any::<u64>(), deg in -720.0..720.0f64) {
        let g = radial(seed);
        let rotated = g.rotate_by(deg);
        prop_assert_eq!(&rotated.center().pos, &g.center().pos);
        prop_assert!(rotated.rotate_by(-deg).approx_eq(&g, EPS));
    }

    #[test]
    fn radial_full_turn_is_identity(seed in any::<u64>(), turns in -3i32..=3) {
        let g = radial(seed);
        prop_assert!(g.rotate_by(360.0 * turns as f64).approx_eq(&g, 0.0));
    }

    #[test]
    fn radial_format_ignores_neighbor_order(seed in any::<u64>(), shuffle_seed in any::<u64>()) {
        use ::rand::{seq::SliceRandom, SeedableRng};
        let g = radial(seed);
        let mut shuffled = g.neighbors().to_vec();
        shuffled.shuffle(&mut ::rand::rngs::StdRng::seed_from_u64(shuffle_seed));
        let h = RadialShape::new(g.center().clone(), shuffled).unwrap();
        prop_assert_eq!(h.to_string(), g.to_string());
    }

    #[test]
    fn square_translate_round_trip(
        seed in any::<u64>(),
        dx in -100.0..100.0f64,
        dy in -100.0..100.0f64,
    ) {
        let s = square(seed);
        prop_assert!(s.translate_by(dx, dy).translate_by(-dx, -dy).approx_eq(&s, EPS));
    }

    #[test]
    fn square_rotation_keeps_centroid_and_side(seed in any::<u64>(), deg in -720.0..720.0f64) {
        let s = square(seed);
        let r = s.rotate_by(deg);
        prop_assert!(r.center().same_position_eps(&s.center(), EPS * 10.0));
        prop_assert!((r.side_length() - s.side_length()).abs() <= EPS * 10.0);
        // labels are reassigned, so compare canonical forms
        prop_assert!(r.rotate_by(-deg).approx_eq(&s.canonical(), EPS * 10.0));
    }

    #[test]
    fn square_from_any_permutation(
        seed in any::<u64>(),
        perm in Just(vec![0usize, 1, 2, 3]).prop_shuffle(),
    ) {
        let s = square(seed);
        let pts = [0, 1, 2, 3].map(|i| s.points()[perm[i]].clone());
        let t = SquareShape::from_unordered(pts).unwrap();
        prop_assert_eq!(t.to_string(), s.to_string());
    }
}
