//! Shift template and catalog models.
//!
//! This module defines the [`ShiftTemplate`] and [`ShiftCatalog`] types
//! describing the shifts an employee can be assigned to, including the
//! overtime configuration layered on top of each template.

use chrono::{NaiveDate, NaiveTime, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::weekday::WeekdayMap;

/// The sentinel assignment value marking an explicit day off.
///
/// Fixed and manual assignment cells store either a shift id or this value;
/// an explicit `day-off` cell must not fall through to a lower-precedence
/// pattern.
pub const DAY_OFF: &str = "day-off";

const MINUTES_PER_DAY: i64 = 24 * 60;

/// A date-specific, manually entered overtime need for one shift.
///
/// Entries are independent of the shortfall-based overtime toggles: an
/// active entry's quantity is always added on top of any shortfall.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeEntry {
    /// The date the entry applies to.
    pub date: NaiveDate,
    /// How many extra staff are wanted on that date.
    pub quantity: u32,
    /// Whether the entry currently counts toward availability.
    pub is_active: bool,
}

/// A shift template: the time range and metadata of an assignable shift.
///
/// # Duration
///
/// `duration = (end − start, wrapped +24h if end ≤ start) − lunch`,
/// clamped so it is never negative. A shift whose end equals its start is a
/// full 24-hour shift, not an empty one.
///
/// # Example
///
/// ```
/// use chrono::NaiveTime;
/// use roster_engine::models::ShiftTemplate;
///
/// let night = ShiftTemplate::new(
///     "night",
///     NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
///     30,
/// );
/// assert_eq!(night.duration_minutes(), 8 * 60 - 30);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftTemplate {
    /// Stable unique identifier for the shift.
    pub id: String,
    /// Time of day the shift starts.
    pub start: NaiveTime,
    /// Time of day the shift ends (may be past midnight, i.e. ≤ start).
    pub end: NaiveTime,
    /// Unpaid lunch minutes deducted from the worked duration.
    pub lunch_deduction_minutes: i64,
    /// Optional display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Optional display color.
    #[serde(default)]
    pub color: Option<String>,
    /// Shift-level overtime toggle (shortfall-based availability).
    #[serde(default)]
    pub is_overtime_active: bool,
    /// Date-specific overtime overrides, in insertion order.
    #[serde(default)]
    pub overtime_entries: Vec<OvertimeEntry>,
    /// Ideal staffing headcount per weekday.
    #[serde(default)]
    pub ideal_counts: WeekdayMap<u32>,
}

impl ShiftTemplate {
    /// Creates a template with no name, color, or overtime configuration.
    pub fn new(id: &str, start: NaiveTime, end: NaiveTime, lunch_deduction_minutes: i64) -> Self {
        Self {
            id: id.to_string(),
            start,
            end,
            lunch_deduction_minutes,
            name: None,
            color: None,
            is_overtime_active: false,
            overtime_entries: Vec::new(),
            ideal_counts: WeekdayMap::new(),
        }
    }

    /// Worked minutes for one occurrence of this shift.
    ///
    /// Wraps past midnight when `end <= start` and subtracts the lunch
    /// deduction; never returns a negative value.
    pub fn duration_minutes(&self) -> i64 {
        let mut span = (self.end - self.start).num_minutes();
        if span <= 0 {
            span += MINUTES_PER_DAY;
        }
        (span - self.lunch_deduction_minutes).max(0)
    }

    /// Worked hours for one occurrence of this shift, as a [`Decimal`].
    pub fn duration_hours(&self) -> Decimal {
        Decimal::new(self.duration_minutes(), 0) / Decimal::new(60, 0)
    }

    /// The ideal headcount for this shift on a weekday (0 if unset).
    pub fn ideal_count(&self, day: Weekday) -> u32 {
        self.ideal_counts.get(day).copied().unwrap_or(0)
    }

    /// The date-specific overtime entry for `date`, if one exists.
    pub fn overtime_entry(&self, date: NaiveDate) -> Option<&OvertimeEntry> {
        self.overtime_entries.iter().find(|e| e.date == date)
    }
}

/// The ordered collection of shift templates.
///
/// Order matters: employee preference ranks are stored positionally,
/// parallel to this catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShiftCatalog {
    /// Global overtime toggle; when set, every shift's
    /// [`ShiftTemplate::is_overtime_active`] has been forced on as a batch.
    #[serde(default)]
    pub global_overtime: bool,
    /// The templates, in catalog order.
    #[serde(default)]
    pub shifts: Vec<ShiftTemplate>,
}

impl ShiftCatalog {
    /// Creates a catalog from an ordered template list.
    pub fn new(shifts: Vec<ShiftTemplate>) -> Self {
        Self {
            global_overtime: false,
            shifts,
        }
    }

    /// Looks up a template by id.
    pub fn get(&self, id: &str) -> Option<&ShiftTemplate> {
        self.shifts.iter().find(|s| s.id == id)
    }

    /// Looks up a template by id, mutably.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut ShiftTemplate> {
        self.shifts.iter_mut().find(|s| s.id == id)
    }

    /// The template at a catalog position (preference ranks are positional).
    pub fn at(&self, index: usize) -> Option<&ShiftTemplate> {
        self.shifts.get(index)
    }

    /// Worked hours for the shift with `id`, if it exists in the catalog.
    pub fn duration_hours(&self, id: &str) -> Option<Decimal> {
        self.get(id).map(ShiftTemplate::duration_hours)
    }

    /// Number of templates in the catalog.
    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }
}
