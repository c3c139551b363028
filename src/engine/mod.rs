//! The calculation engine.
//!
//! Every function here is a pure read over roster data except the overtime
//! mutators and [`SwapSession::commit`], which funnel their writes through
//! the [store](crate::store) seam.

mod hours;
mod limits;
mod overtime;
mod preference;
mod report;
mod resolver;
mod staffing;
mod swap;

pub use hours::{BIWEEKLY_PERIOD_DAYS, biweekly_hours, date_range, free_weekends};
pub use limits::{consecutive_shift_run, exceeds_max_consecutive_shifts, violates_min_rest};
pub use overtime::{
    move_overtime_entry, remove_overtime_entry, set_global_overtime, set_shift_overtime,
    upsert_overtime_entry,
};
pub use preference::match_percentage;
pub use report::{
    ComplianceReport, EmployeeComplianceRow, HoursStatus, ShiftStaffingRow, StaffingDay,
    build_report,
};
pub use resolver::resolve;
pub use staffing::{overtime_available, scheduled_count};
pub use swap::{PendingSwap, SwapSession, SwapViolation, SwapViolationKind};
