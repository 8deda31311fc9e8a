//! Core types and definitions for the VEER safety-filtering controller.
//!
//! This crate defines the vocabulary shared across the workspace:
//! geometric types, run configuration, the error taxonomy, and the
//! run-state/history types handed to presentation consumers.
//! It has no dependency on any QP solver.

pub mod config;
pub mod constants;
pub mod error;
pub mod state;
pub mod types;
