//! Simulation loop — owns the robot state and drives the per-tick
//! pipeline.
//!
//! Each tick runs policy → constraint build → QP filter → limiter →
//! history record → Euler integration, in that order. Ticks are strictly
//! sequential: the next state depends on this tick's applied input, so
//! there is no cross-tick parallelism and exactly one writer of state and
//! history.

use log::{error, info};

use veer_core::config::NavConfig;
use veer_core::error::{ConfigError, SimError};
use veer_core::state::{BarrierSample, RunHistory, RunReport, RunStatus};
use veer_core::types::{wrap_angle, Pose, SimTime};

use crate::barrier;
use crate::limiter;
use crate::policy;
use crate::solver::{filter_velocity, OsqpSolver, QpSolver};

/// The simulation engine. Owns the robot pose, the goal, and all run
/// state; everything else is pure functions over them.
pub struct Simulation<S: QpSolver = OsqpSolver> {
    config: NavConfig,
    solver: S,
    pose: Pose,
    goal: Pose,
    d_safe: f64,
    time: SimTime,
    status: RunStatus,
    history: RunHistory,
}

impl Simulation<OsqpSolver> {
    /// Create a simulation with the default OSQP-backed filter.
    ///
    /// Fails fast on a malformed configuration; no tick runs on error.
    pub fn new(config: NavConfig) -> Result<Self, ConfigError> {
        Self::with_solver(config, OsqpSolver::new())
    }
}

impl<S: QpSolver> Simulation<S> {
    /// Create a simulation with a caller-supplied QP backend.
    pub fn with_solver(config: NavConfig, solver: S) -> Result<Self, ConfigError> {
        config.validate()?;
        let pose = config.start;
        let goal = config.goal;
        let d_safe = config.safe_distance();
        Ok(Self {
            config,
            solver,
            pose,
            goal,
            d_safe,
            time: SimTime::default(),
            status: RunStatus::default(),
            history: RunHistory::default(),
        })
    }

    /// Advance the simulation by one tick and return the status after it.
    ///
    /// Terminal states are sticky: stepping a finished run is a no-op.
    /// A solver failure aborts the run, reporting the failing tick.
    pub fn step(&mut self) -> Result<RunStatus, SimError> {
        if self.status.is_terminal() {
            return Ok(self.status);
        }

        let nominal = match policy::go_to_goal(&self.pose, &self.goal, &self.config) {
            Some(command) => command,
            None => {
                self.status = RunStatus::GoalReached;
                info!("goal reached after {} ticks", self.time.tick);
                return Ok(self.status);
            }
        };

        let h = barrier::barrier_value(self.pose.position, &self.config.obstacle, self.d_safe);
        let constraint = barrier::obstacle_constraint(
            self.pose.position,
            &self.config.obstacle,
            self.d_safe,
            self.config.gamma,
        );

        let safe = filter_velocity(&self.solver, nominal.velocity, &[constraint]).map_err(
            |source| {
                error!("safety filter failed at tick {}: {source}", self.time.tick);
                SimError::Solver {
                    tick: self.time.tick,
                    source,
                }
            },
        )?;

        let input = limiter::apply_limits(safe, nominal.omega, &self.config.limits, self.config.dt);

        self.history.push(
            self.pose,
            self.goal,
            input,
            BarrierSample {
                value: h,
                slack: constraint.slack(input.velocity),
            },
        );

        // Explicit Euler over single-integrator dynamics.
        self.pose.position += input.velocity * self.config.dt;
        self.pose.heading = wrap_angle(self.pose.heading + input.omega * self.config.dt);
        self.goal.position += self.config.goal_velocity * self.config.dt;
        self.time.advance(self.config.dt);

        if self.time.tick >= self.config.max_ticks {
            self.status = RunStatus::IterationLimitReached;
            info!(
                "tick budget {} elapsed before reaching the goal",
                self.config.max_ticks
            );
        }
        Ok(self.status)
    }

    /// Run to a terminal state and return the recorded report.
    pub fn run(&mut self) -> Result<RunReport, SimError> {
        info!(
            "starting run: budget {} ticks, dt {:.3} s, d_safe {:.3} m",
            self.config.max_ticks, self.config.dt, self.d_safe
        );
        while !self.status.is_terminal() {
            self.step()?;
        }
        Ok(self.report())
    }

    /// Snapshot of the run so far.
    pub fn report(&self) -> RunReport {
        RunReport {
            status: self.status,
            ticks: self.time.tick,
            history: self.history.clone(),
        }
    }

    /// Current robot pose.
    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// Current goal pose (moves only when a goal velocity is configured).
    pub fn goal(&self) -> Pose {
        self.goal
    }

    /// Current run status.
    pub fn status(&self) -> RunStatus {
        self.status
    }

    /// Current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Read-only view of the recorded history.
    pub fn history(&self) -> &RunHistory {
        &self.history
    }

    /// The configuration this run was started with.
    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    /// The derived minimum center-to-center obstacle distance.
    pub fn safe_distance(&self) -> f64 {
        self.d_safe
    }
}
