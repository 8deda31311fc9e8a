//! CBF constraint builder for the static circular obstacle.
//!
//! The barrier candidate is h(p) = ‖p − o‖² − d_safe², non-negative
//! outside the inflated obstacle. Keeping ḣ ≥ −γ·h linearizes, for
//! single-integrator dynamics, to one half-plane constraint on velocity:
//! −2Δᵀ·v ≤ γ·h(p), with Δ the vector from obstacle center to robot.

use glam::DVec2;

use veer_core::types::Obstacle;

/// One linear inequality over planar velocity: `normal · v ≤ bound`.
///
/// Constraints live for exactly one tick and are rebuilt from the current
/// position. The QP filter accepts any number of them stacked; a second
/// obstacle would simply contribute a second row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalfPlane {
    pub normal: DVec2,
    pub bound: f64,
}

impl HalfPlane {
    /// Whether a velocity satisfies this constraint.
    pub fn admits(&self, velocity: DVec2) -> bool {
        self.normal.dot(velocity) <= self.bound
    }

    /// Signed slack at a velocity; non-negative when satisfied.
    pub fn slack(&self, velocity: DVec2) -> f64 {
        self.bound - self.normal.dot(velocity)
    }
}

/// Barrier value h(p) = ‖p − o‖² − d_safe².
pub fn barrier_value(position: DVec2, obstacle: &Obstacle, d_safe: f64) -> f64 {
    let delta = position - obstacle.center;
    delta.length_squared() - d_safe * d_safe
}

/// Build the CBF half-plane for the current position.
pub fn obstacle_constraint(
    position: DVec2,
    obstacle: &Obstacle,
    d_safe: f64,
    gamma: f64,
) -> HalfPlane {
    let delta = position - obstacle.center;
    HalfPlane {
        normal: delta * -2.0,
        bound: gamma * (delta.length_squared() - d_safe * d_safe),
    }
}
