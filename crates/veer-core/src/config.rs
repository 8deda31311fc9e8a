//! Run configuration — every parameter is fixed at start, passed by
//! reference into the components, and never reconfigured at runtime.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ConfigError;
use crate::types::{Obstacle, Pose, RobotLimits};

/// Immutable configuration for a single run.
///
/// `Default` is the benchmark scenario: start at (−2, −0.5), goal at
/// (2, 1), a 0.5 m obstacle at the origin directly on the line between
/// them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavConfig {
    /// Control period in seconds.
    pub dt: f64,
    /// Tick budget before the run stops with `IterationLimitReached`.
    pub max_ticks: u64,
    /// Initial robot pose.
    pub start: Pose,
    /// Goal pose.
    pub goal: Pose,
    /// Goal drift velocity (m/s); zero keeps the goal static.
    pub goal_velocity: DVec2,
    pub obstacle: Obstacle,
    pub limits: RobotLimits,
    /// Additive buffer on top of the two radii when deriving d_safe.
    pub safety_margin: f64,
    /// Approach-aggressiveness shape of the go-to-goal gain.
    pub beta: f64,
    /// CBF decay rate.
    pub gamma: f64,
    /// Positional tolerance below which the goal counts as reached.
    pub goal_tolerance: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        let (sx, sy, sth) = START_POSE;
        let (gx, gy, gth) = GOAL_POSE;
        let (ox, oy, orad) = OBSTACLE;
        Self {
            dt: DT,
            max_ticks: (RUN_SECS / DT).round() as u64,
            start: Pose::new(sx, sy, sth),
            goal: Pose::new(gx, gy, gth),
            goal_velocity: DVec2::ZERO,
            obstacle: Obstacle::new(ox, oy, orad),
            limits: RobotLimits {
                max_trans_speed: MAX_TRANS_SPEED,
                max_rot_speed: MAX_ROT_SPEED,
                radius: ROBOT_RADIUS,
            },
            safety_margin: SAFETY_MARGIN,
            beta: APPROACH_BETA,
            gamma: CBF_GAMMA,
            goal_tolerance: GOAL_TOLERANCE,
        }
    }
}

impl NavConfig {
    /// Minimum allowed center-to-center distance to the obstacle,
    /// strictly greater than the sum of the two radii.
    pub fn safe_distance(&self) -> f64 {
        self.obstacle.radius + self.limits.radius + self.safety_margin
    }

    /// Reject malformed configurations before any tick runs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.dt > 0.0) {
            return Err(ConfigError::NonPositiveDt(self.dt));
        }
        if self.max_ticks == 0 {
            return Err(ConfigError::ZeroMaxTicks);
        }
        positive("max_trans_speed", self.limits.max_trans_speed)?;
        positive("max_rot_speed", self.limits.max_rot_speed)?;
        positive("safety_margin", self.safety_margin)?;
        positive("beta", self.beta)?;
        positive("gamma", self.gamma)?;
        positive("goal_tolerance", self.goal_tolerance)?;
        non_negative("robot radius", self.limits.radius)?;
        non_negative("obstacle radius", self.obstacle.radius)?;
        Ok(())
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositiveParam { name, value })
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NegativeRadius { name, value })
    }
}
