//! Run status, per-tick history buffers, and the serializable run report
//! handed to presentation consumers.

use serde::{Deserialize, Serialize};

use crate::types::{ControlInput, Pose};

/// Lifecycle state of a simulation run.
///
/// Both terminal outcomes are normal results, not failures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunStatus {
    /// The run is still advancing.
    #[default]
    Running,
    /// The robot came within the goal tolerance.
    GoalReached,
    /// The tick budget elapsed before the goal was reached.
    IterationLimitReached,
}

impl RunStatus {
    /// Whether the run has ended.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RunStatus::Running)
    }
}

/// Per-tick safety diagnostics: the barrier value h(p) and the slack of
/// the CBF constraint at the applied velocity. Both stay non-negative on
/// a healthy run that starts outside the unsafe set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BarrierSample {
    /// h(p) = ‖p − o‖² − d_safe².
    pub value: f64,
    /// bound − normal · v at the applied input.
    pub slack: f64,
}

/// Append-only per-tick records, index = tick number.
///
/// All four buffers always have the same length: one entry per completed
/// tick. A tick that terminates the run (goal reached) is not recorded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunHistory {
    pub poses: Vec<Pose>,
    pub goals: Vec<Pose>,
    pub inputs: Vec<ControlInput>,
    pub barriers: Vec<BarrierSample>,
}

impl RunHistory {
    /// Number of recorded ticks.
    pub fn len(&self) -> usize {
        self.poses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }

    /// Append the record of one completed tick.
    pub fn push(&mut self, pose: Pose, goal: Pose, input: ControlInput, barrier: BarrierSample) {
        self.poses.push(pose);
        self.goals.push(goal);
        self.inputs.push(input);
        self.barriers.push(barrier);
    }
}

/// Everything a presentation consumer needs from a finished run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub status: RunStatus,
    /// Number of ticks executed.
    pub ticks: u64,
    pub history: RunHistory,
}
