//! Effective-assignment resolution.
//!
//! Determines the single effective assignment for an (employee, date) pair
//! by applying the precedence chain: active leave, then a manual per-date
//! override, then the fixed weekly pattern, then a day off. The function is
//! a pure read and can be recomputed on every input change.

use chrono::{Datelike, NaiveDate};
use tracing::warn;

use crate::models::{DAY_OFF, EffectiveAssignment, Employee, ShiftCatalog};

/// Resolves the effective assignment for an employee on a date.
///
/// Precedence, highest first:
///
/// 1. An active, non-archived leave record whose inclusive range contains
///    `date` resolves to [`EffectiveAssignment::OnLeave`].
/// 2. A manual override *key* for `date` wins over the fixed pattern, even
///    when the stored cell is empty or `day-off` — an explicit manual
///    day off must not fall through to the weekly pattern.
/// 3. The fixed pattern entry for the date's weekday, if present and not
///    `day-off`.
/// 4. Otherwise [`EffectiveAssignment::DayOff`].
///
/// Weekdays come from the calendar date itself, so the same date always
/// resolves to the same weekday regardless of environment.
///
/// A resolved shift id missing from the catalog is tolerated (downstream
/// aggregation treats it as zero hours) but logged as a warning.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use roster_engine::engine::resolve;
/// use roster_engine::models::{EffectiveAssignment, Employee, ShiftCatalog};
///
/// let mut employee = Employee::new("emp_001", "Alex");
/// employee.fixed_shifts.insert("monday", "day".to_string());
///
/// // 2024-06-03 is a Monday
/// let monday = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
/// let assignment = resolve(&employee, monday, &ShiftCatalog::default());
/// assert_eq!(assignment.shift_id(), Some("day"));
/// ```
pub fn resolve(
    employee: &Employee,
    date: NaiveDate,
    catalog: &ShiftCatalog,
) -> EffectiveAssignment {
    if let Some(leave) = employee.leave_on(date) {
        return EffectiveAssignment::OnLeave {
            leave_type: leave.leave_type.clone(),
            hours_per_day: leave.hours_per_day,
        };
    }

    if let Some(cell) = employee.manual_shifts.get(&date) {
        return cell_assignment(employee, date, cell, catalog, true);
    }

    if let Some(cell) = employee.fixed_shifts.get(date.weekday()) {
        return cell_assignment(employee, date, cell, catalog, false);
    }

    EffectiveAssignment::DayOff
}

/// Interprets a raw assignment cell (shift id, `day-off`, or empty).
fn cell_assignment(
    employee: &Employee,
    date: NaiveDate,
    cell: &str,
    catalog: &ShiftCatalog,
    is_manual: bool,
) -> EffectiveAssignment {
    if cell.is_empty() || cell == DAY_OFF {
        return EffectiveAssignment::DayOff;
    }

    if catalog.get(cell).is_none() {
        warn!(
            employee_id = %employee.id,
            shift_id = %cell,
            %date,
            "assignment references a shift missing from the catalog"
        );
    }

    EffectiveAssignment::Shift {
        shift_id: cell.to_string(),
        is_manual,
        is_fixed: !is_manual,
        is_locked: employee.is_locked(date),
    }
}
