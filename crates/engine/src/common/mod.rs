//! Common types shared by every component of the allocation simulator.
//!
//! This module provides the fundamental building blocks used across the engine:
//! 1. **Errors:** The input-validation error taxonomy ([`SimError`]).
//! 2. **Fit Policies:** First/best/worst fit selection with the earliest-candidate tie-break.
//! 3. **Processes:** Simulated process descriptions and their terminal (allocated) form.

/// Input validation error types.
pub mod error;

/// Fit policy selection (first/best/worst fit).
pub mod policy;

/// Simulated process types.
pub mod process;

pub use error::SimError;
pub use policy::FitPolicy;
pub use process::{FinishedProcess, Process};
