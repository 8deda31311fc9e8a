//! Go-to-goal policy — the nominal control law, blind to obstacles.
//!
//! The distance-dependent gain saturates the commanded speed at the
//! translational limit far from the goal and scales it down linearly
//! close to it, so the robot decelerates smoothly into the goal.

use glam::DVec2;

use veer_core::config::NavConfig;
use veer_core::constants::GAIN_EPSILON;
use veer_core::types::Pose;

/// Nominal command produced by the policy, before safety filtering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NominalCommand {
    /// Planar velocity toward the goal (m/s).
    pub velocity: DVec2,
    /// Heading rate toward the goal heading (rad/s). This channel is not
    /// subject to the obstacle constraint and bypasses the QP.
    pub omega: f64,
}

/// Compute the nominal command for the current pose.
///
/// Returns `None` once the planar distance to the goal drops below the
/// configured tolerance — the run's normal terminal condition, not an
/// error.
pub fn go_to_goal(pose: &Pose, goal: &Pose, config: &NavConfig) -> Option<NominalCommand> {
    let error = goal.position - pose.position;
    let distance = error.length();
    if distance < config.goal_tolerance {
        return None;
    }
    let gain = approach_gain(distance, config);
    Some(NominalCommand {
        velocity: error * gain,
        omega: pose.heading_error_to(goal) * gain,
    })
}

/// The distance-dependent gain K(r) = v_max · (1 − e^(−β·r)) / (r + δ).
///
/// K(r)·r approaches v_max as r grows; K itself approaches β·v_max as r
/// shrinks. The additive δ keeps the division finite at r = 0.
pub fn approach_gain(distance: f64, config: &NavConfig) -> f64 {
    let v_max = config.limits.max_trans_speed;
    v_max * (1.0 - (-config.beta * distance).exp()) / (distance + GAIN_EPSILON)
}
