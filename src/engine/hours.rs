//! Temporal aggregation: biweekly hour totals and free-weekend counts.
//!
//! Both functions walk every calendar date of an inclusive range and fold
//! the resolved assignments into aggregates. An inverted range (end before
//! start) is a configuration error and yields an empty result rather than
//! an error.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use rust_decimal::Decimal;
use tracing::warn;

use crate::models::{EffectiveAssignment, Employee, ShiftCatalog};

use super::resolver::resolve;

/// Days per biweekly bucket, counted from the range start.
pub const BIWEEKLY_PERIOD_DAYS: u32 = 14;

/// Iterates every calendar date in `[start, end]`, in order.
///
/// Empty when `end < start`.
pub fn date_range(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |d| *d <= end)
}

/// Worked (or leave-credited) hours for one resolved day.
///
/// Leave contributes its `hours_per_day`; a working shift contributes its
/// catalog duration, or zero with a warning when the id is unknown.
fn day_hours(
    employee: &Employee,
    assignment: &EffectiveAssignment,
    date: NaiveDate,
    catalog: &ShiftCatalog,
) -> Decimal {
    match assignment {
        EffectiveAssignment::OnLeave { hours_per_day, .. } => *hours_per_day,
        EffectiveAssignment::Shift { shift_id, .. } => {
            catalog.duration_hours(shift_id).unwrap_or_else(|| {
                warn!(
                    employee_id = %employee.id,
                    shift_id = %shift_id,
                    %date,
                    "unknown shift contributes zero hours"
                );
                Decimal::ZERO
            })
        }
        EffectiveAssignment::DayOff => Decimal::ZERO,
    }
}

/// Totals an employee's hours into 14-day buckets across `[start, end]`.
///
/// Buckets are counted from `start` (not from any calendar anchor); the
/// last bucket is shorter when the range does not divide evenly. Each
/// bucket is rounded to 2 decimal places. An inverted range yields an
/// empty vector.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use roster_engine::engine::biweekly_hours;
/// use roster_engine::models::{Employee, ShiftCatalog};
///
/// let employee = Employee::new("emp_001", "Alex");
/// let start = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
/// // 30 days: two full buckets and a 2-day tail
/// let buckets = biweekly_hours(&employee, start, end, &ShiftCatalog::default());
/// assert_eq!(buckets.len(), 3);
/// ```
pub fn biweekly_hours(
    employee: &Employee,
    start: NaiveDate,
    end: NaiveDate,
    catalog: &ShiftCatalog,
) -> Vec<Decimal> {
    let mut buckets = Vec::new();
    let mut bucket = Decimal::ZERO;
    let mut days_in_bucket = 0u32;

    for date in date_range(start, end) {
        let assignment = resolve(employee, date, catalog);
        bucket += day_hours(employee, &assignment, date, catalog);
        days_in_bucket += 1;

        if days_in_bucket == BIWEEKLY_PERIOD_DAYS {
            buckets.push(bucket.round_dp(2));
            bucket = Decimal::ZERO;
            days_in_bucket = 0;
        }
    }

    if days_in_bucket > 0 {
        buckets.push(bucket.round_dp(2));
    }

    buckets
}

/// Counts the employee's fully free weekends inside `[start, end]`.
///
/// A weekend counts only when both its Saturday and Sunday fall inside the
/// range and neither day has a working shift or leave cover. A weekend
/// whose Sunday lies past `end` is never counted.
pub fn free_weekends(
    employee: &Employee,
    start: NaiveDate,
    end: NaiveDate,
    catalog: &ShiftCatalog,
) -> u32 {
    let mut count = 0;

    for saturday in date_range(start, end).filter(|d| d.weekday() == Weekday::Sat) {
        let Some(sunday) = saturday.checked_add_days(Days::new(1)) else {
            break;
        };
        if sunday > end {
            continue;
        }

        let sat = resolve(employee, saturday, catalog);
        let sun = resolve(employee, sunday, catalog);
        if sat == EffectiveAssignment::DayOff && sun == EffectiveAssignment::DayOff {
            count += 1;
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LeaveRecord, ShiftTemplate};
    use chrono::NaiveTime;
    use std::str::FromStr;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::from_str(s).unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn catalog() -> ShiftCatalog {
        let time = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
        ShiftCatalog::new(vec![
            // 7.5h after lunch deduction
            ShiftTemplate::new("day", time(9, 0), time(17, 0), 30),
            ShiftTemplate::new("night", time(22, 0), time(6, 0), 0),
        ])
    }

    fn weekday_day_worker() -> Employee {
        let mut employee = Employee::new("emp_001", "Alex");
        for day in ["monday", "tuesday", "wednesday", "thursday", "friday"] {
            employee.fixed_shifts.insert(day, "day".to_string());
        }
        employee
    }

    /// TA-001: a 30-day range yields 3 buckets, the last covering 2 days
    #[test]
    fn test_thirty_day_range_yields_three_buckets() {
        let employee = weekday_day_worker();
        // 2024-06-01 (Sat) .. 2024-06-30 (Sun)
        let buckets = biweekly_hours(&employee, date("2024-06-01"), date("2024-06-30"), &catalog());

        assert_eq!(buckets.len(), 3);
        // Bucket 1: Jun 1-14 has 10 weekdays, bucket 2: Jun 15-28 also 10
        assert_eq!(buckets[0], dec("75.00"));
        assert_eq!(buckets[1], dec("75.00"));
        // Tail: Jun 29 (Sat), Jun 30 (Sun)
        assert_eq!(buckets[2], dec("0.00"));
    }

    /// TA-002: a 14-day range yields a single bucket
    #[test]
    fn test_exact_bucket_boundary() {
        let employee = weekday_day_worker();
        let buckets = biweekly_hours(&employee, date("2024-06-03"), date("2024-06-16"), &catalog());
        assert_eq!(buckets.len(), 1);
    }

    /// TA-003: leave days contribute hours_per_day
    #[test]
    fn test_leave_contributes_hours_per_day() {
        let mut employee = Employee::new("emp_002", "Sam");
        employee.leave.push(LeaveRecord {
            id: "leave_001".to_string(),
            start_date: date("2024-06-03"),
            end_date: date("2024-06-04"),
            leave_type: "annual".to_string(),
            hours_per_day: dec("7.6"),
            is_archived: false,
        });

        let buckets = biweekly_hours(&employee, date("2024-06-03"), date("2024-06-04"), &catalog());
        assert_eq!(buckets, vec![dec("15.20")]);
    }

    /// TA-004: unknown shift ids contribute zero instead of aborting
    #[test]
    fn test_unknown_shift_contributes_zero() {
        let mut employee = Employee::new("emp_003", "Kim");
        employee
            .manual_shifts
            .insert(date("2024-06-03"), "retired".to_string());
        employee
            .manual_shifts
            .insert(date("2024-06-04"), "day".to_string());

        let buckets = biweekly_hours(&employee, date("2024-06-03"), date("2024-06-04"), &catalog());
        assert_eq!(buckets, vec![dec("7.50")]);
    }

    /// TA-005: inverted range returns an empty result
    #[test]
    fn test_inverted_range_is_empty() {
        let employee = weekday_day_worker();
        let buckets = biweekly_hours(&employee, date("2024-06-30"), date("2024-06-01"), &catalog());
        assert!(buckets.is_empty());
    }

    /// TA-006: buckets are rounded to 2 decimal places
    #[test]
    fn test_buckets_rounded_to_two_decimals() {
        let time = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
        // 7h40m = 7.666... hours
        let catalog = ShiftCatalog::new(vec![ShiftTemplate::new("odd", time(9, 0), time(16, 40), 0)]);
        let mut employee = Employee::new("emp_004", "Ren");
        employee
            .manual_shifts
            .insert(date("2024-06-03"), "odd".to_string());

        let buckets = biweekly_hours(&employee, date("2024-06-03"), date("2024-06-03"), &catalog);
        assert_eq!(buckets, vec![dec("7.67")]);
    }

    /// FW-001: a weekend with both days off counts
    #[test]
    fn test_free_weekend_counted() {
        let employee = weekday_day_worker();
        // 2024-06-08/09 is a full weekend inside the range
        let count = free_weekends(&employee, date("2024-06-03"), date("2024-06-09"), &catalog());
        assert_eq!(count, 1);
    }

    /// FW-002: Sunday past end excludes the weekend, even with Saturday free
    #[test]
    fn test_partial_weekend_not_counted() {
        let employee = weekday_day_worker();
        // Range ends on Saturday 2024-06-08; its Sunday is outside
        let count = free_weekends(&employee, date("2024-06-03"), date("2024-06-08"), &catalog());
        assert_eq!(count, 0);
    }

    /// FW-003: a working shift on either day disqualifies the weekend
    #[test]
    fn test_weekend_with_shift_not_free() {
        let mut employee = weekday_day_worker();
        employee
            .manual_shifts
            .insert(date("2024-06-08"), "day".to_string());

        let count = free_weekends(&employee, date("2024-06-03"), date("2024-06-09"), &catalog());
        assert_eq!(count, 0);
    }

    /// FW-004: leave cover on a weekend day disqualifies it
    #[test]
    fn test_weekend_on_leave_not_free() {
        let mut employee = weekday_day_worker();
        employee.leave.push(LeaveRecord {
            id: "leave_001".to_string(),
            start_date: date("2024-06-09"),
            end_date: date("2024-06-09"),
            leave_type: "annual".to_string(),
            hours_per_day: dec("7.6"),
            is_archived: false,
        });

        let count = free_weekends(&employee, date("2024-06-03"), date("2024-06-09"), &catalog());
        assert_eq!(count, 0);
    }

    /// FW-005: multiple weekends accumulate
    #[test]
    fn test_multiple_free_weekends() {
        let employee = weekday_day_worker();
        // June 2024 contains 5 full weekends; range covers 4 of them fully
        let count = free_weekends(&employee, date("2024-06-01"), date("2024-06-23"), &catalog());
        assert_eq!(count, 4);
    }

    #[test]
    fn test_date_range_is_inclusive_and_ordered() {
        let dates: Vec<NaiveDate> = date_range(date("2024-06-01"), date("2024-06-03")).collect();
        assert_eq!(
            dates,
            vec![date("2024-06-01"), date("2024-06-02"), date("2024-06-03")]
        );

        assert_eq!(date_range(date("2024-06-03"), date("2024-06-01")).count(), 0);
    }
}
