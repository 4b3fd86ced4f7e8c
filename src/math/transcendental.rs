use super::constants::BRANCH_WIDTH;

/// Starting point for the `n`-th branch, `r0 = n (pi/2) / (P + pi/2) = n / (P / (pi/2) + 1)`.
///
/// Computed from the same quotient `P / (pi/2)` that the state count floors, so
/// `n <= N(P)` keeps `r0` inside `(0, 1]` after rounding, also on a branch boundary.
#[inline]
pub fn initial_guess(strength: f64, n: u32) -> f64 {
    f64::from(n) / (strength / BRANCH_WIDTH + 1.0)
}

/// Residual of the eigen-equation, `eta(r) = n (pi/2) - asin(r) - r P`.
///
/// Strictly decreasing in `r`. Evaluates to NaN for `r > 1`.
#[inline]
pub fn residual(strength: f64, n: u32, momentum: f64) -> f64 {
    f64::from(n) * BRANCH_WIDTH - momentum.asin() - momentum * strength
}

/// Linearized correction `t = P sqrt(1 - r²) / (1 + P sqrt(1 - r²)) * eta`.
#[inline]
pub fn linearized_correction(strength: f64, momentum: f64, residual: f64) -> f64 {
    let cosine = (1.0 - momentum * momentum).sqrt();
    let p_cos = strength * cosine;
    p_cos / (1.0 + p_cos) * residual
}

/// Relaxed candidate `(1 - w) r + w (r + t)`.
#[inline]
pub fn relaxed_step(momentum: f64, correction: f64, weight: f64) -> f64 {
    (1.0 - weight) * momentum + weight * (momentum + correction)
}

/// Dimensionless energy `E = 2 (P r)²` for a converged momentum.
#[inline]
pub fn scaled_energy(strength: f64, momentum: f64) -> f64 {
    let alpha = strength * momentum;
    2.0 * alpha * alpha
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_initial_guess_limits() {
        assert_relative_eq!(initial_guess(0.0, 1), 1.0);
        assert!(initial_guess(1e9, 1) < 1e-8);

        let p = 3.0 * FRAC_PI_2;
        assert_relative_eq!(initial_guess(p, 4), 1.0, epsilon = 1e-15);
        assert!(initial_guess(p, 3) < 1.0);
    }

    #[test]
    fn test_initial_guess_stays_bounded_on_branch_boundaries() {
        for k in 1..=2000_u32 {
            let p = f64::from(k) * FRAC_PI_2;
            for strength in [p, f64::from_bits(p.to_bits() - 3)] {
                let top = crate::math::scaling::num_states_scaled(strength).unwrap();
                let r0 = initial_guess(strength, top);
                assert!(r0 > 0.0 && r0 <= 1.0, "P = {}, n = {}, r0 = {}", strength, top, r0);
            }
        }
    }

    #[test]
    fn test_residual_decreases_in_momentum() {
        let p = 4.5;
        let mut previous = residual(p, 2, 0.0);
        for step in 1..=10 {
            let r = f64::from(step) / 10.0;
            let current = residual(p, 2, r);
            assert!(current < previous);
            previous = current;
        }
        assert_relative_eq!(residual(p, 2, 0.0), 2.0 * FRAC_PI_2);
    }

    #[test]
    fn test_residual_beyond_unit_momentum_is_nan() {
        assert!(residual(1.0, 1, 1.0 + 1e-12).is_nan());
    }

    #[test]
    fn test_linearized_correction_vanishes_at_unit_momentum() {
        assert_eq!(linearized_correction(5.0, 1.0, 0.3), 0.0);
        assert_eq!(linearized_correction(0.0, 0.5, 0.3), 0.0);
    }

    #[test]
    fn test_linearized_correction_matches_newton_step_at_unit_strength() {
        let r = 0.6;
        let eta = residual(1.0, 1, r);
        let derivative = -1.0 / (1.0 - r * r).sqrt() - 1.0;
        let newton = -eta / derivative;
        assert_relative_eq!(linearized_correction(1.0, r, eta), newton, epsilon = 1e-15);
    }

    #[test]
    fn test_relaxed_step_interpolates() {
        assert_relative_eq!(relaxed_step(0.5, 0.2, 1.0), 0.7);
        assert_relative_eq!(relaxed_step(0.5, 0.2, 0.5), 0.6);
        assert_relative_eq!(relaxed_step(0.5, 0.2, 0.0), 0.5);
    }

    #[test]
    fn test_scaled_energy() {
        assert_relative_eq!(scaled_energy(3.0, 0.5), 4.5);
        assert_eq!(scaled_energy(0.0, 1.0), 0.0);
    }
}
