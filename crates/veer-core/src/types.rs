//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Normalize an angle to (−π, π].
pub fn wrap_angle(angle: f64) -> f64 {
    use std::f64::consts::{PI, TAU};
    -((-angle + PI).rem_euclid(TAU) - PI)
}

/// Planar pose: position in meters, heading in radians.
/// Heading is kept in (−π, π] after every update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: DVec2,
    pub heading: f64,
}

impl Pose {
    pub fn new(x: f64, y: f64, heading: f64) -> Self {
        Self {
            position: DVec2::new(x, y),
            heading: wrap_angle(heading),
        }
    }

    /// Planar distance to another pose (meters).
    pub fn distance_to(&self, other: &Pose) -> f64 {
        self.position.distance(other.position)
    }

    /// Signed heading error toward another pose, wrapped to (−π, π].
    pub fn heading_error_to(&self, other: &Pose) -> f64 {
        wrap_angle(other.heading - self.heading)
    }
}

/// Per-tick command applied to the robot: planar velocity (m/s) and
/// heading rate (rad/s). Recomputed every tick, never carried over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlInput {
    pub velocity: DVec2,
    pub omega: f64,
}

impl ControlInput {
    pub fn new(velocity: DVec2, omega: f64) -> Self {
        Self { velocity, omega }
    }

    /// Translational speed magnitude (m/s).
    pub fn speed(&self) -> f64 {
        self.velocity.length()
    }
}

/// Circular static obstacle, immutable for the run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub center: DVec2,
    /// Obstacle radius (meters).
    pub radius: f64,
}

impl Obstacle {
    pub fn new(x: f64, y: f64, radius: f64) -> Self {
        Self {
            center: DVec2::new(x, y),
            radius,
        }
    }

    /// Center-to-point distance (meters).
    pub fn distance_to(&self, point: DVec2) -> f64 {
        self.center.distance(point)
    }
}

/// Physical actuator limits of the robot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RobotLimits {
    /// Maximum translational speed (m/s).
    pub max_trans_speed: f64,
    /// Maximum rotational speed (rad/s).
    pub max_rot_speed: f64,
    /// Robot body radius (meters).
    pub radius: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}
