//! Scheduling rules model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The rule set governing a schedule window.
///
/// The window (`start_date..=end_date`) bounds every aggregate the engine
/// reports; the thresholds feed the compliance classifications.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use roster_engine::models::Rules;
///
/// let rules = Rules {
///     start_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
///     ..Rules::default()
/// };
/// assert!(rules.contains_date(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rules {
    /// First day of the schedule window (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the schedule window (inclusive).
    pub end_date: NaiveDate,
    /// Longest permitted run of consecutive working days.
    pub max_consecutive_shifts: u32,
    /// Days off required once the maximum run is reached.
    pub min_days_off_after_max: u32,
    /// Free weekends required per calendar month.
    pub min_weekends_off_per_month: u32,
    /// Minimum rest hours between the end of one shift and the start of
    /// the next.
    pub min_rest_hours_between_shifts: u32,
    /// Minimum worked hours per week.
    pub min_hours_per_week: Decimal,
    /// Minimum worked hours per biweekly period.
    pub min_hours_per_two_weeks: Decimal,
}

impl Rules {
    /// Whether `date` falls inside the schedule window (inclusive).
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            start_date: NaiveDate::from_ymd_opt(1970, 1, 1).expect("valid epoch date"),
            end_date: NaiveDate::from_ymd_opt(1970, 1, 1).expect("valid epoch date"),
            max_consecutive_shifts: 0,
            min_days_off_after_max: 0,
            min_weekends_off_per_month: 0,
            min_rest_hours_between_shifts: 0,
            min_hours_per_week: Decimal::ZERO,
            min_hours_per_two_weeks: Decimal::ZERO,
        }
    }
}
