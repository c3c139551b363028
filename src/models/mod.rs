//! Data models for the scheduling engine.
//!
//! Shift templates and the catalog, employees with their override maps and
//! leave records, the rule set, and the derived effective-assignment type.

mod assignment;
mod employee;
mod rules;
mod shift;
mod weekday;

pub use assignment::EffectiveAssignment;
pub use employee::{BlockedShift, Employee, LeaveRecord};
pub use rules::Rules;
pub use shift::{DAY_OFF, OvertimeEntry, ShiftCatalog, ShiftTemplate};
pub use weekday::{WeekdayMap, normalize_day_key, weekday_key};
