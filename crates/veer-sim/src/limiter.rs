//! Actuator limits applied after the safety filter.

use glam::DVec2;

use veer_core::types::{ControlInput, RobotLimits};

/// Clamp a filtered command to the robot's physical limits.
///
/// The planar components are rescaled jointly, so direction is preserved
/// and the magnitude caps exactly at `max_trans_speed`; a command already
/// under the limit passes through unchanged. The heading rate is clamped
/// symmetrically to the per-tick budget `max_rot_speed · dt`.
pub fn apply_limits(velocity: DVec2, omega: f64, limits: &RobotLimits, dt: f64) -> ControlInput {
    let speed = velocity.length();
    let velocity = if speed > limits.max_trans_speed {
        velocity * (limits.max_trans_speed / speed)
    } else {
        velocity
    };
    let omega_budget = limits.max_rot_speed * dt;
    ControlInput::new(velocity, omega.clamp(-omega_budget, omega_budget))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn limits() -> RobotLimits {
        RobotLimits {
            max_trans_speed: 0.5,
            max_rot_speed: 5.0,
            radius: 0.21,
        }
    }

    #[test]
    fn test_under_limit_passes_through_unchanged() {
        let velocity = DVec2::new(0.2, -0.3);
        let input = apply_limits(velocity, 0.01, &limits(), 0.01);
        assert_eq!(input.velocity, velocity);
        assert_eq!(input.omega, 0.01);
    }

    #[test]
    fn test_over_limit_caps_magnitude_and_keeps_direction() {
        let velocity = DVec2::new(3.0, 4.0);
        let input = apply_limits(velocity, 0.0, &limits(), 0.01);
        assert!((input.speed() - 0.5).abs() < 1e-12);
        // Direction preserved: output is a positive scalar multiple.
        let direction_in = velocity.normalize();
        let direction_out = input.velocity.normalize();
        assert!((direction_in - direction_out).length() < 1e-12);
    }

    #[test]
    fn test_omega_clamped_on_both_sides() {
        let budget = 5.0 * 0.01;
        let high = apply_limits(DVec2::ZERO, 1.0, &limits(), 0.01);
        let low = apply_limits(DVec2::ZERO, -1.0, &limits(), 0.01);
        assert_eq!(high.omega, budget);
        assert_eq!(low.omega, -budget);

        let inside = apply_limits(DVec2::ZERO, 0.03, &limits(), 0.01);
        assert_eq!(inside.omega, 0.03);
    }

    #[test]
    fn test_randomized_inputs_never_exceed_limits() {
        let limits = limits();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..1000 {
            let velocity = DVec2::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0));
            let omega = rng.gen_range(-20.0..20.0);
            let input = apply_limits(velocity, omega, &limits, 0.01);

            assert!(input.speed() <= limits.max_trans_speed + 1e-12);
            assert!(input.omega.abs() <= limits.max_rot_speed * 0.01 + 1e-12);
            // Rescaling never flips or rotates the velocity.
            if velocity.length() > 1e-9 {
                assert!(input.velocity.dot(velocity) >= 0.0);
                assert!(input.velocity.perp_dot(velocity).abs() < 1e-9);
            }
        }
    }
}
