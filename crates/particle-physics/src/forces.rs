//! Pairwise force kernel for particle life
//!
//! The kernel maps a normalized distance and an attraction coefficient to a
//! scalar radial acceleration. Below `BETA` particles always repel, between
//! `BETA` and 1 they feel a triangular bump scaled by the coefficient, and
//! beyond 1 there is no interaction.

use crate::constants::BETA;
use glam::Vec3;

/// Radial acceleration for a normalized distance `r` and attraction `a`.
///
/// Exactly `BETA` and anything at or past 1 fall through to zero, which keeps
/// both joins of the piecewise function exact.
pub fn radial_acceleration(r: f32, a: f32) -> f32 {
    if r < BETA {
        r / BETA - 1.0
    } else if BETA < r && r < 1.0 {
        a * (1.0 - (2.0 * r - 1.0 - BETA).abs() / (1.0 - BETA))
    } else {
        0.0
    }
}

/// Unscaled acceleration contribution felt at `from` due to a particle at `to`.
///
/// Returns zero for coincident particles and for anything at or beyond `r_max`.
pub fn pair_acceleration(from: Vec3, to: Vec3, r_max: f32, attraction: f32) -> Vec3 {
    let delta = to - from;
    let r = delta.length();

    if r > 0.0 && r < r_max {
        delta / r * radial_acceleration(r / r_max, attraction)
    } else {
        Vec3::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    #[test]
    fn repulsion_saturates_at_zero_distance() {
        assert_eq!(radial_acceleration(0.0, 1.0), -1.0);
        assert_eq!(radial_acceleration(0.0, -1.0), -1.0);
    }

    #[test]
    fn continuous_at_beta_and_one() {
        for a in [-1.0, -0.3, 0.0, 0.5, 1.0] {
            assert_eq!(radial_acceleration(BETA, a), 0.0);
            assert_eq!(radial_acceleration(1.0, a), 0.0);
            assert!(radial_acceleration(BETA - 1e-5, a).abs() < 1e-3);
            assert!(radial_acceleration(BETA + 1e-5, a).abs() < 1e-3);
            assert!(radial_acceleration(1.0 - 1e-5, a).abs() < 1e-3);
        }
    }

    #[test]
    fn repulsion_branch_ignores_attraction() {
        for i in 0..100 {
            let r = BETA * i as f32 / 100.0;
            for a in [-1.0, 0.0, 1.0] {
                let value = radial_acceleration(r, a);
                assert!((-1.0..=0.0).contains(&value), "r={r} a={a} -> {value}");
                assert_eq!(value, radial_acceleration(r, 0.25));
            }
        }
    }

    #[test]
    fn bump_follows_sign_and_is_bounded_by_attraction() {
        for i in 1..100 {
            let r = BETA + (1.0 - BETA) * i as f32 / 100.0;
            for a in [-0.8, -0.1, 0.1, 0.8] {
                let value = radial_acceleration(r, a);
                assert_eq!(value.signum(), a.signum(), "r={r} a={a} -> {value}");
                assert!(value.abs() <= a.abs() + EPS);
            }
        }
    }

    #[test]
    fn bump_peaks_at_midpoint() {
        let peak = (1.0 + BETA) / 2.0;
        assert!((radial_acceleration(peak, 0.7) - 0.7).abs() < EPS);
    }

    #[test]
    fn nothing_beyond_unit_distance() {
        assert_eq!(radial_acceleration(1.5, 1.0), 0.0);
        assert_eq!(radial_acceleration(100.0, -1.0), 0.0);
    }

    #[test]
    fn pair_acceleration_points_along_displacement() {
        let acc = pair_acceleration(Vec3::ZERO, Vec3::new(0.1, 0.0, 0.0), 0.3, 0.5);
        let expected = radial_acceleration(0.1 / 0.3, 0.5);
        assert!((acc.x - expected).abs() < EPS);
        assert_eq!(acc.y, 0.0);
        assert_eq!(acc.z, 0.0);
    }

    #[test]
    fn pair_acceleration_skips_coincident_and_distant() {
        let p = Vec3::new(0.2, -0.1, 0.4);
        assert_eq!(pair_acceleration(p, p, 0.3, 1.0), Vec3::ZERO);
        assert_eq!(
            pair_acceleration(Vec3::ZERO, Vec3::new(0.3, 0.0, 0.0), 0.3, 1.0),
            Vec3::ZERO
        );
    }
}
