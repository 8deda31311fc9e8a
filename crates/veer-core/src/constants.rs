//! Default scenario constants and tuning parameters.

/// Control period in seconds (100 Hz).
pub const DT: f64 = 0.01;

/// Default run budget in seconds.
pub const RUN_SECS: f64 = 4.0 * std::f64::consts::PI;

// --- Robot limits ---

/// Maximum translational speed (m/s).
pub const MAX_TRANS_SPEED: f64 = 0.5;

/// Maximum rotational speed (rad/s).
pub const MAX_ROT_SPEED: f64 = 5.0;

/// Robot body radius (meters).
pub const ROBOT_RADIUS: f64 = 0.21;

// --- Safety filter ---

/// Additive buffer on top of the two radii when deriving the minimum
/// center-to-center distance (meters).
pub const SAFETY_MARGIN: f64 = 1e-3;

/// CBF decay rate. Larger values let the robot close on the safety
/// boundary faster before the constraint bites.
pub const CBF_GAMMA: f64 = 10.0;

// --- Go-to-goal policy ---

/// Approach-aggressiveness shape of the go-to-goal gain.
pub const APPROACH_BETA: f64 = 5.0;

/// Additive guard against division by zero in the gain denominator.
pub const GAIN_EPSILON: f64 = 1e-10;

/// Positional tolerance below which the goal counts as reached (meters).
pub const GOAL_TOLERANCE: f64 = 0.005;

// --- Benchmark scenario ---

/// Initial pose (x, y, heading).
pub const START_POSE: (f64, f64, f64) = (-2.0, -0.5, 0.0);

/// Goal pose (x, y, heading).
pub const GOAL_POSE: (f64, f64, f64) = (2.0, 1.0, 0.0);

/// Obstacle (x, y, radius), sitting on the straight line start → goal.
pub const OBSTACLE: (f64, f64, f64) = (0.0, 0.0, 0.5);
