//! API Module
//!
//! Caller-facing surface over `logic`. The dashboard view-model lives here and
//! owns all mutable state explicitly.
//!
//! Structure:
//! - dashboard.rs: `DashboardState` and the import boundary

pub mod dashboard;

pub use dashboard::{DashboardState, Section};
