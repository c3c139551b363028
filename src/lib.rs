//! Scheduling Compliance & Staffing Engine for workforce rosters.
//!
//! This crate derives schedule state from raw roster data: the effective
//! shift assigned to an employee on any date, biweekly hour and free-weekend
//! statistics, staffing sufficiency and layered overtime availability,
//! preference-match scoring, and validation of proposed shift swaps between
//! employees. It evaluates and validates existing assignments; it never
//! generates schedules.

#![warn(missing_docs)]

pub mod engine;
pub mod error;
pub mod models;
pub mod store;
