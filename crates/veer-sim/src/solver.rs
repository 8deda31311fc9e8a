//! QP safety filter — projection of the nominal velocity onto the
//! constraint set.
//!
//! The per-tick problem is tiny (2 variables, a handful of rows) but still
//! a real convex QP, solved fresh each tick through OSQP behind a minimal
//! solver trait. No warm starting; no state carried between ticks.

use std::borrow::Cow;

use glam::DVec2;
use osqp::{CscMatrix, Problem, Settings, Status};

use veer_core::error::SolverError;

use crate::barrier::HalfPlane;

/// Minimal convex-QP interface: minimize ½·vᵀQv + cᵀv subject to
/// `normal_i · v ≤ bound_i` for every constraint. Any convex-QP-capable
/// backend can stand in for the default OSQP implementation.
pub trait QpSolver {
    fn solve(
        &self,
        q: [[f64; 2]; 2],
        c: [f64; 2],
        constraints: &[HalfPlane],
    ) -> Result<DVec2, SolverError>;
}

/// Project a nominal velocity onto the constraint set:
/// minimize ‖v − nominal‖² subject to the stacked half-planes.
///
/// When every constraint already admits the nominal velocity it is
/// returned exactly, untouched by solver tolerance.
pub fn filter_velocity<S: QpSolver>(
    solver: &S,
    nominal: DVec2,
    constraints: &[HalfPlane],
) -> Result<DVec2, SolverError> {
    if constraints.iter().all(|c| c.admits(nominal)) {
        return Ok(nominal);
    }
    // ‖v − u‖² expands to vᵀv − 2uᵀv + const, i.e. Q = 2·I₂, c = −2u.
    let q = [[2.0, 0.0], [0.0, 2.0]];
    let c = [-2.0 * nominal.x, -2.0 * nominal.y];
    solver.solve(q, c, constraints)
}

/// OSQP-backed solver with tightened termination tolerances.
pub struct OsqpSolver {
    settings: Settings,
}

impl OsqpSolver {
    pub fn new() -> Self {
        Self {
            settings: Settings::default()
                .verbose(false)
                .eps_abs(1e-8)
                .eps_rel(1e-8),
        }
    }
}

impl Default for OsqpSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl QpSolver for OsqpSolver {
    fn solve(
        &self,
        q: [[f64; 2]; 2],
        c: [f64; 2],
        constraints: &[HalfPlane],
    ) -> Result<DVec2, SolverError> {
        // Upper-triangular P in CSC form (column-major).
        let p = CscMatrix {
            nrows: 2,
            ncols: 2,
            indptr: Cow::Owned(vec![0, 1, 3]),
            indices: Cow::Owned(vec![0, 0, 1]),
            data: Cow::Owned(vec![q[0][0], q[0][1], q[1][1]]),
        };

        // m×2 constraint matrix, one row per half-plane, one dense CSC
        // column per variable.
        let rows = constraints.len();
        let mut indptr = Vec::with_capacity(3);
        let mut indices = Vec::with_capacity(2 * rows);
        let mut data = Vec::with_capacity(2 * rows);
        indptr.push(0);
        for (row, constraint) in constraints.iter().enumerate() {
            indices.push(row);
            data.push(constraint.normal.x);
        }
        indptr.push(data.len());
        for (row, constraint) in constraints.iter().enumerate() {
            indices.push(row);
            data.push(constraint.normal.y);
        }
        indptr.push(data.len());
        let a = CscMatrix {
            nrows: rows,
            ncols: 2,
            indptr: Cow::Owned(indptr),
            indices: Cow::Owned(indices),
            data: Cow::Owned(data),
        };

        // One-sided rows: l = −∞, u = bound.
        let lower = vec![f64::NEG_INFINITY; rows];
        let upper: Vec<f64> = constraints.iter().map(|c| c.bound).collect();

        let mut problem = Problem::new(p, &c, a, &lower, &upper, &self.settings)
            .map_err(|_| SolverError::Unsolved)?;

        match problem.solve() {
            Status::Solved(solution) | Status::SolvedInaccurate(solution) => {
                let x = solution.x();
                Ok(DVec2::new(x[0], x[1]))
            }
            Status::PrimalInfeasible(_) | Status::PrimalInfeasibleInaccurate(_) => {
                Err(SolverError::Infeasible)
            }
            _ => Err(SolverError::Unsolved),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::barrier::{obstacle_constraint, HalfPlane};
    use veer_core::types::Obstacle;

    #[test]
    fn test_inactive_constraint_passes_nominal_through_exactly() {
        let solver = OsqpSolver::new();
        let nominal = DVec2::new(0.31, -0.17);
        let constraint = HalfPlane {
            normal: DVec2::new(1.0, 0.0),
            bound: 10.0,
        };
        let filtered = filter_velocity(&solver, nominal, &[constraint]).unwrap();
        // Bit-exact, not merely close.
        assert_eq!(filtered, nominal);
    }

    #[test]
    fn test_no_constraints_passes_nominal_through() {
        let solver = OsqpSolver::new();
        let nominal = DVec2::new(0.5, 0.0);
        let filtered = filter_velocity(&solver, nominal, &[]).unwrap();
        assert_eq!(filtered, nominal);
    }

    #[test]
    fn test_active_constraint_matches_half_plane_projection() {
        // Single active constraint: the QP optimum is the closed-form
        // projection u − ((H·u − b)/‖H‖²)·H.
        let solver = OsqpSolver::new();
        let obstacle = Obstacle::new(0.0, 0.0, 0.5);
        let constraint = obstacle_constraint(DVec2::new(-0.72, 0.0), &obstacle, 0.711, 10.0);
        let nominal = DVec2::new(0.5, 0.0);
        assert!(!constraint.admits(nominal));

        let filtered = filter_velocity(&solver, nominal, &[constraint]).unwrap();

        let violation = constraint.normal.dot(nominal) - constraint.bound;
        let expected = nominal - constraint.normal * (violation / constraint.normal.length_squared());
        assert!(
            (filtered - expected).length() < 1e-5,
            "expected {expected:?}, got {filtered:?}"
        );
        // The filtered velocity satisfies the constraint (up to tolerance).
        assert!(constraint.slack(filtered) > -1e-6);
    }

    #[test]
    fn test_stacked_constraints_all_respected() {
        let solver = OsqpSolver::new();
        let nominal = DVec2::new(1.0, 1.0);
        let constraints = [
            HalfPlane {
                normal: DVec2::new(1.0, 0.0),
                bound: 0.25,
            },
            HalfPlane {
                normal: DVec2::new(0.0, 1.0),
                bound: 0.5,
            },
        ];
        let filtered = filter_velocity(&solver, nominal, &constraints).unwrap();
        for constraint in &constraints {
            assert!(constraint.slack(filtered) > -1e-6);
        }
        // Box-constrained projection of (1, 1) is the corner (0.25, 0.5).
        assert!((filtered - DVec2::new(0.25, 0.5)).length() < 1e-5);
    }

    #[test]
    fn test_contradictory_constraints_report_infeasible() {
        // v_x ≤ −1 and −v_x ≤ −1 cannot both hold.
        let solver = OsqpSolver::new();
        let constraints = [
            HalfPlane {
                normal: DVec2::new(1.0, 0.0),
                bound: -1.0,
            },
            HalfPlane {
                normal: DVec2::new(-1.0, 0.0),
                bound: -1.0,
            },
        ];
        let result = filter_velocity(&solver, DVec2::ZERO, &constraints);
        assert!(result.is_err(), "infeasible QP must surface an error");
    }
}
