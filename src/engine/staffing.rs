//! Staffing sufficiency and overtime availability.
//!
//! Counts how many employees are actually scheduled on a shift/date and
//! derives layered overtime availability from two additive sources: a
//! shortfall against the ideal headcount (gated by the shift's overtime
//! toggle) and date-specific manual entries (always additive).

use chrono::{Datelike, NaiveDate};

use crate::models::{Employee, ShiftCatalog, ShiftTemplate};

use super::resolver::resolve;

/// Number of employees effectively scheduled on `shift` for `date`.
///
/// Employees on leave are excluded by resolution: their effective
/// assignment is the leave record, not a shift.
pub fn scheduled_count(
    shift: &ShiftTemplate,
    date: NaiveDate,
    employees: &[Employee],
    catalog: &ShiftCatalog,
) -> u32 {
    employees
        .iter()
        .filter(|employee| resolve(employee, date, catalog).shift_id() == Some(shift.id.as_str()))
        .count() as u32
}

/// Layered overtime availability for `shift` on `date`.
///
/// Two additive sources:
///
/// - **Shortfall**: when the shift's overtime toggle is on, the gap between
///   the ideal headcount for the date's weekday and the scheduled count,
///   clamped at zero.
/// - **Date-specific**: an active [`OvertimeEntry`](crate::models::OvertimeEntry)
///   for `date` adds its quantity unconditionally, independent of any
///   shortfall.
///
/// # Example
///
/// ```
/// use chrono::NaiveTime;
/// use roster_engine::engine::overtime_available;
/// use roster_engine::models::{ShiftCatalog, ShiftTemplate};
///
/// let mut shift = ShiftTemplate::new(
///     "day",
///     NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///     0,
/// );
/// shift.is_overtime_active = true;
/// shift.ideal_counts.insert("wednesday", 4);
/// let catalog = ShiftCatalog::new(vec![shift.clone()]);
///
/// // 2024-06-05 is a Wednesday; nobody is scheduled
/// let date = chrono::NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
/// assert_eq!(overtime_available(&shift, date, &[], &catalog), 4);
/// ```
pub fn overtime_available(
    shift: &ShiftTemplate,
    date: NaiveDate,
    employees: &[Employee],
    catalog: &ShiftCatalog,
) -> u32 {
    let mut available = 0;

    if shift.is_overtime_active {
        let ideal = shift.ideal_count(date.weekday());
        let scheduled = scheduled_count(shift, date, employees, catalog);
        available += ideal.saturating_sub(scheduled);
    }

    if let Some(entry) = shift.overtime_entry(date) {
        if entry.is_active {
            available += entry.quantity;
        }
    }

    available
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LeaveRecord, OvertimeEntry};
    use chrono::NaiveTime;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::from_str(s).unwrap()
    }

    fn day_shift() -> ShiftTemplate {
        let time = |h| NaiveTime::from_hms_opt(h, 0, 0).unwrap();
        ShiftTemplate::new("day", time(9), time(17), 0)
    }

    fn worker(id: &str, on: &str, shift: &str) -> Employee {
        let mut employee = Employee::new(id, id);
        employee.manual_shifts.insert(date(on), shift.to_string());
        employee
    }

    /// SC-001: counts only employees resolved onto this shift
    #[test]
    fn test_scheduled_count_filters_by_shift() {
        let shift = day_shift();
        let catalog = ShiftCatalog::new(vec![shift.clone()]);
        let wednesday = "2024-06-05";
        let employees = vec![
            worker("emp_001", wednesday, "day"),
            worker("emp_002", wednesday, "day"),
            worker("emp_003", wednesday, "night"),
            Employee::new("emp_004", "off"),
        ];

        assert_eq!(scheduled_count(&shift, date(wednesday), &employees, &catalog), 2);
    }

    /// SC-002: employees on leave are not scheduled
    #[test]
    fn test_scheduled_count_excludes_leave() {
        let shift = day_shift();
        let catalog = ShiftCatalog::new(vec![shift.clone()]);
        let mut employee = worker("emp_001", "2024-06-05", "day");
        employee.leave.push(LeaveRecord {
            id: "leave_001".to_string(),
            start_date: date("2024-06-05"),
            end_date: date("2024-06-05"),
            leave_type: "sick".to_string(),
            hours_per_day: Decimal::from_str("7.6").unwrap(),
            is_archived: false,
        });

        assert_eq!(scheduled_count(&shift, date("2024-06-05"), &[employee], &catalog), 0);
    }

    /// OA-001: shortfall source needs the toggle on
    #[test]
    fn test_shortfall_requires_toggle() {
        let mut shift = day_shift();
        shift.ideal_counts.insert("wednesday", 4);
        let catalog = ShiftCatalog::new(vec![shift.clone()]);
        let employees = vec![
            worker("emp_001", "2024-06-05", "day"),
            worker("emp_002", "2024-06-05", "day"),
        ];

        // Toggle off: no shortfall contribution
        assert_eq!(overtime_available(&shift, date("2024-06-05"), &employees, &catalog), 0);

        shift.is_overtime_active = true;
        assert_eq!(overtime_available(&shift, date("2024-06-05"), &employees, &catalog), 2);
    }

    /// OA-002: overstaffing clamps the shortfall at zero
    #[test]
    fn test_overstaffed_shortfall_is_zero() {
        let mut shift = day_shift();
        shift.is_overtime_active = true;
        shift.ideal_counts.insert("wednesday", 1);
        let catalog = ShiftCatalog::new(vec![shift.clone()]);
        let employees = vec![
            worker("emp_001", "2024-06-05", "day"),
            worker("emp_002", "2024-06-05", "day"),
        ];

        assert_eq!(overtime_available(&shift, date("2024-06-05"), &employees, &catalog), 0);
    }

    /// OA-003: active date entries add on top of the shortfall
    #[test]
    fn test_date_entry_is_additive() {
        let mut shift = day_shift();
        shift.is_overtime_active = true;
        shift.ideal_counts.insert("wednesday", 4);
        shift.overtime_entries.push(OvertimeEntry {
            date: date("2024-06-05"),
            quantity: 3,
            is_active: true,
        });
        let catalog = ShiftCatalog::new(vec![shift.clone()]);
        let employees = vec![
            worker("emp_001", "2024-06-05", "day"),
            worker("emp_002", "2024-06-05", "day"),
        ];

        // shortfall 2 + entry 3
        assert_eq!(overtime_available(&shift, date("2024-06-05"), &employees, &catalog), 5);
    }

    /// OA-004: date entries apply even with the toggle off
    #[test]
    fn test_date_entry_independent_of_toggle() {
        let mut shift = day_shift();
        shift.overtime_entries.push(OvertimeEntry {
            date: date("2024-06-05"),
            quantity: 3,
            is_active: true,
        });
        let catalog = ShiftCatalog::new(vec![shift.clone()]);

        assert_eq!(overtime_available(&shift, date("2024-06-05"), &[], &catalog), 3);
    }

    /// OA-005: inactive date entries contribute nothing
    #[test]
    fn test_inactive_date_entry_ignored() {
        let mut shift = day_shift();
        shift.overtime_entries.push(OvertimeEntry {
            date: date("2024-06-05"),
            quantity: 3,
            is_active: false,
        });
        let catalog = ShiftCatalog::new(vec![shift.clone()]);

        assert_eq!(overtime_available(&shift, date("2024-06-05"), &[], &catalog), 0);
    }

    /// OA-006: entries for other dates are ignored
    #[test]
    fn test_entry_on_other_date_ignored() {
        let mut shift = day_shift();
        shift.overtime_entries.push(OvertimeEntry {
            date: date("2024-06-06"),
            quantity: 3,
            is_active: true,
        });
        let catalog = ShiftCatalog::new(vec![shift.clone()]);

        assert_eq!(overtime_available(&shift, date("2024-06-05"), &[], &catalog), 0);
    }
}
