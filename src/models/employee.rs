//! Employee model and related types.
//!
//! This module defines the [`Employee`] struct together with its leave
//! records and blocked-shift restrictions. All of the per-date and
//! per-weekday override maps described by the roster data model live here;
//! the resolution precedence between them is implemented in
//! [`crate::engine::resolve`].

use std::collections::BTreeMap;

use chrono::{NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::weekday::{WeekdayMap, normalize_day_key, weekday_key};

/// A leave record covering an inclusive date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRecord {
    /// Unique identifier for the record.
    pub id: String,
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// The kind of leave (e.g. "annual", "sick").
    pub leave_type: String,
    /// Hours credited per leave day toward hour totals.
    pub hours_per_day: Decimal,
    /// Archived records are kept for history but never apply.
    #[serde(default)]
    pub is_archived: bool,
}

impl LeaveRecord {
    /// Whether this record puts the employee on leave on `date`.
    ///
    /// Archived records never apply; the date comparison is inclusive on
    /// both ends.
    pub fn applies_on(&self, date: NaiveDate) -> bool {
        !self.is_archived && self.start_date <= date && date <= self.end_date
    }
}

/// A per-shift restriction disallowing assignment on certain weekdays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockedShift {
    /// Lowercase weekday names, or `"all"` for every day.
    #[serde(default)]
    pub blocked_days: Vec<String>,
    /// Inactive rules are retained but not enforced.
    #[serde(default)]
    pub is_active: bool,
}

impl BlockedShift {
    /// Whether this rule blocks the shift on the given weekday.
    pub fn blocks(&self, day: Weekday) -> bool {
        if !self.is_active {
            return false;
        }
        self.blocked_days.iter().any(|raw| {
            let key = normalize_day_key(raw);
            key == "all" || key == weekday_key(day)
        })
    }
}

/// An employee and their complete assignment data.
///
/// Only the swap-commit operation ever mutates an employee through the
/// engine; everything else is a pure read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Preference ranks parallel to the shift catalog: `None` for no
    /// opinion, `Some(1)` for the first preference.
    #[serde(default)]
    pub shift_preferences: Vec<Option<u32>>,
    /// Permanent weekly pattern: weekday name to shift id or
    /// [`DAY_OFF`](crate::models::DAY_OFF).
    #[serde(default)]
    pub fixed_shifts: WeekdayMap<String>,
    /// One-off overrides keyed by exact date. The *presence* of a key wins
    /// over the fixed pattern, even when the value is empty or `day-off`.
    #[serde(default)]
    pub manual_shifts: BTreeMap<NaiveDate, String>,
    /// Leave records, in authoring order.
    #[serde(default)]
    pub leave: Vec<LeaveRecord>,
    /// Request locks: dates whose assignment should not be overwritten by
    /// the editing surface. The resolver only reports lock state.
    #[serde(default)]
    pub locked_shifts: BTreeMap<NaiveDate, String>,
    /// Blocked-shift rules keyed by shift id.
    #[serde(default)]
    pub blocked_shifts: BTreeMap<String, BlockedShift>,
    /// Free-form comments per date; swap commits append here.
    #[serde(default)]
    pub shift_comments: BTreeMap<NaiveDate, Vec<String>>,
}

impl Employee {
    /// Creates an employee with the given identity and no assignment data.
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            shift_preferences: Vec::new(),
            fixed_shifts: WeekdayMap::new(),
            manual_shifts: BTreeMap::new(),
            leave: Vec::new(),
            locked_shifts: BTreeMap::new(),
            blocked_shifts: BTreeMap::new(),
            shift_comments: BTreeMap::new(),
        }
    }

    /// The first active, non-archived leave record covering `date`.
    pub fn leave_on(&self, date: NaiveDate) -> Option<&LeaveRecord> {
        self.leave.iter().find(|l| l.applies_on(date))
    }

    /// Whether the assignment on `date` carries a request lock.
    pub fn is_locked(&self, date: NaiveDate) -> bool {
        self.locked_shifts.contains_key(&date)
    }

    /// The catalog position of the employee's top preference (rank 1).
    pub fn preferred_shift_index(&self) -> Option<usize> {
        self.shift_preferences
            .iter()
            .position(|rank| *rank == Some(1))
    }

    /// Whether `shift_id` is blocked for this employee on `day`.
    pub fn is_shift_blocked(&self, shift_id: &str, day: Weekday) -> bool {
        self.blocked_shifts
            .get(shift_id)
            .is_some_and(|rule| rule.blocks(day))
    }
}
