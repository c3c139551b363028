//! Error types for the scheduling engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the failure conditions that can occur during roster computation and
//! mutation. Swap validation failures are deliberately not represented
//! here: they are ordinary values (see [`crate::engine::SwapViolation`]),
//! reported to the caller rather than raised.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the scheduling engine.
///
/// # Example
///
/// ```
/// use roster_engine::error::EngineError;
///
/// let error = EngineError::EmployeeNotFound {
///     id: "emp_001".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee not found: emp_001");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// An employee id referenced by an operation no longer exists in the
    /// roster. Raised by swap commit, which is all-or-nothing.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The employee id that was not found.
        id: String,
    },

    /// A shift id referenced by a mutation does not exist in the catalog.
    #[error("Shift not found: {id}")]
    ShiftNotFound {
        /// The shift id that was not found.
        id: String,
    },

    /// An overtime entry edit referenced a date with no entry.
    #[error("No overtime entry for shift '{shift_id}' on {date}")]
    OvertimeEntryNotFound {
        /// The shift whose entries were searched.
        shift_id: String,
        /// The date that had no entry.
        date: NaiveDate,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
