//! Error taxonomy: configuration rejection, per-tick solver failures,
//! and aborted runs. Goal-reached and budget-elapsed are *not* errors —
//! they are [`crate::state::RunStatus`] values.

use thiserror::Error;

/// Rejected configuration, reported before any simulation tick runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("tick period must be positive, got {0}")]
    NonPositiveDt(f64),

    #[error("run budget must be at least one tick")]
    ZeroMaxTicks,

    #[error("{name} must be positive, got {value}")]
    NonPositiveParam { name: &'static str, value: f64 },

    #[error("{name} must be non-negative, got {value}")]
    NegativeRadius { name: &'static str, value: f64 },
}

/// QP solve failure for a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SolverError {
    /// The constraint set admits no velocity at all.
    #[error("constraint set is infeasible")]
    Infeasible,

    /// The solver failed to set up or converge.
    #[error("solver did not converge")]
    Unsolved,
}

/// A run that aborted mid-flight rather than reaching a terminal status.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// The safety filter failed at a specific tick.
    #[error("safety filter failed at tick {tick}: {source}")]
    Solver {
        tick: u64,
        #[source]
        source: SolverError,
    },
}
