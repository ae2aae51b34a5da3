//! Cairn Planner: a GPS-style means-ends planner over string facts.
//!
//! Goals are achieved one at a time, left to right. For an unsatisfied goal
//! the planner commits to the first action schema that adds it, achieves
//! that schema's preconditions recursively, and applies it. There is no
//! backtracking over alternative schemas, so the planner is incomplete and
//! can be defeated by goal ordering; a depth guard keeps it terminating.

#![forbid(unsafe_code)]

pub mod facts;
pub mod gps;

pub use facts::{FactState, Schema};
pub use gps::{gps, GpsConfig, Plan, PlanFailure};
