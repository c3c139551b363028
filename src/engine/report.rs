//! Compliance report assembly.
//!
//! Pulls every per-employee and per-shift calculation into one pure
//! snapshot of the rules window. Assembly never aborts: an employee or
//! shift that yields nothing simply contributes zeros and empty rows, so
//! one bad record cannot take down the whole report.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Rules;
use crate::store::Roster;

use super::hours::{biweekly_hours, date_range, free_weekends};
use super::preference::match_percentage;
use super::staffing::{overtime_available, scheduled_count};

/// How an hours total sits against the biweekly minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoursStatus {
    /// Below the minimum.
    Under,
    /// Exactly at the minimum.
    Exact,
    /// Above the minimum.
    Over,
}

impl HoursStatus {
    fn classify(hours: Decimal, minimum: Decimal) -> Self {
        match hours.cmp(&minimum) {
            std::cmp::Ordering::Less => Self::Under,
            std::cmp::Ordering::Equal => Self::Exact,
            std::cmp::Ordering::Greater => Self::Over,
        }
    }
}

/// One employee's compliance summary over the rules window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeComplianceRow {
    /// The employee's id.
    pub employee_id: String,
    /// The employee's display name.
    pub name: String,
    /// Preference-match score, 0.00 to 100.00.
    pub match_percentage: Decimal,
    /// Worked hours per 14-day bucket, in window order.
    pub biweekly_hours: Vec<Decimal>,
    /// Each bucket's standing against the biweekly minimum.
    pub biweekly_status: Vec<HoursStatus>,
    /// Weekends fully off inside the window.
    pub free_weekends: u32,
    /// Weekends the rules require off across the window.
    pub required_weekends_off: u32,
    /// Whether `free_weekends >= required_weekends_off`.
    pub meets_weekend_minimum: bool,
}

/// One shift's staffing state on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffingDay {
    /// The date.
    pub date: NaiveDate,
    /// Employees effectively scheduled.
    pub scheduled: u32,
    /// The ideal headcount for the date's weekday.
    pub ideal: u32,
    /// Layered overtime availability.
    pub overtime_available: u32,
}

/// One shift's staffing summary over the rules window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftStaffingRow {
    /// The shift's id.
    pub shift_id: String,
    /// The shift's display name, falling back to the id.
    pub name: String,
    /// Per-day staffing, in window order.
    pub days: Vec<StaffingDay>,
    /// Sum of overtime availability across the window.
    pub total_overtime: u32,
}

/// The full compliance snapshot for one rules window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceReport {
    /// Per-employee rows, in roster order.
    pub employees: Vec<EmployeeComplianceRow>,
    /// Per-shift rows, in catalog order.
    pub shifts: Vec<ShiftStaffingRow>,
}

/// Distinct calendar months touched by `[start, end]`.
fn months_in_window(start: NaiveDate, end: NaiveDate) -> u32 {
    if start > end {
        return 0;
    }
    let span = (i64::from(end.year()) * 12 + i64::from(end.month0()))
        - (i64::from(start.year()) * 12 + i64::from(start.month0()));
    (span + 1) as u32
}

/// Builds the compliance report for the rules window.
///
/// Pure assembly over the roster snapshot. Rows come out in roster and
/// catalog order; an inverted window produces empty buckets and zero
/// counts rather than an error.
pub fn build_report(roster: &Roster, rules: &Rules) -> ComplianceReport {
    let start = rules.start_date;
    let end = rules.end_date;
    let required_weekends_off = rules.min_weekends_off_per_month * months_in_window(start, end);

    let employees = roster
        .employees
        .iter()
        .map(|employee| {
            let buckets = biweekly_hours(employee, start, end, &roster.shifts);
            let status = buckets
                .iter()
                .map(|hours| HoursStatus::classify(*hours, rules.min_hours_per_two_weeks))
                .collect();
            let weekends = free_weekends(employee, start, end, &roster.shifts);
            EmployeeComplianceRow {
                employee_id: employee.id.clone(),
                name: employee.name.clone(),
                match_percentage: match_percentage(employee, &roster.shifts, start, end),
                biweekly_hours: buckets,
                biweekly_status: status,
                free_weekends: weekends,
                required_weekends_off,
                meets_weekend_minimum: weekends >= required_weekends_off,
            }
        })
        .collect();

    let shifts = roster
        .shifts
        .shifts
        .iter()
        .map(|shift| {
            let days: Vec<StaffingDay> = date_range(start, end)
                .map(|date| StaffingDay {
                    date,
                    scheduled: scheduled_count(shift, date, &roster.employees, &roster.shifts),
                    ideal: shift.ideal_count(date.weekday()),
                    overtime_available: overtime_available(
                        shift,
                        date,
                        &roster.employees,
                        &roster.shifts,
                    ),
                })
                .collect();
            let total_overtime = days.iter().map(|day| day.overtime_available).sum();
            ShiftStaffingRow {
                shift_id: shift.id.clone(),
                name: shift.name.clone().unwrap_or_else(|| shift.id.clone()),
                days,
                total_overtime,
            }
        })
        .collect();

    ComplianceReport { employees, shifts }
}
