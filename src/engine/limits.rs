//! Working-time limit checks: consecutive runs and rest gaps.

use chrono::{Days, NaiveDate, NaiveDateTime, TimeDelta};
use rust_decimal::Decimal;

use crate::models::{EffectiveAssignment, Employee, Rules, ShiftCatalog, ShiftTemplate};

use super::resolver::resolve;

/// Length of the unbroken run of working shifts ending on `date`.
///
/// Walks backwards one day at a time while resolution yields a working
/// shift. Leave days and days off break the run. Returns 0 when `date`
/// itself is not a working day.
pub fn consecutive_shift_run(employee: &Employee, date: NaiveDate, catalog: &ShiftCatalog) -> u32 {
    let mut run = 0;
    let mut cursor = date;
    loop {
        if !resolve(employee, cursor, catalog).is_working() {
            return run;
        }
        run += 1;
        match cursor.checked_sub_days(Days::new(1)) {
            Some(previous) => cursor = previous,
            None => return run,
        }
    }
}

/// Whether the run of working shifts ending on `date` exceeds the
/// configured maximum.
///
/// A maximum of 0 disables the check.
pub fn exceeds_max_consecutive_shifts(
    employee: &Employee,
    date: NaiveDate,
    rules: &Rules,
    catalog: &ShiftCatalog,
) -> bool {
    if rules.max_consecutive_shifts == 0 {
        return false;
    }
    consecutive_shift_run(employee, date, catalog) > rules.max_consecutive_shifts
}

/// End of a shift that starts on `date`, rolling past midnight when the
/// raw span is non-positive.
fn shift_end(shift: &ShiftTemplate, date: NaiveDate) -> NaiveDateTime {
    let mut span = (shift.end - shift.start).num_minutes();
    if span <= 0 {
        span += 24 * 60;
    }
    date.and_time(shift.start) + TimeDelta::minutes(span)
}

/// Whether starting the shift resolved on `date` would violate the
/// minimum rest gap since the employee's previous working shift.
///
/// The gap is measured from the previous shift's clock end (midnight
/// wrap applied, lunch not deducted) to the current shift's clock start.
/// Days where the resolved shift id is missing from the catalog are
/// skipped, as is the check itself when `date` resolves to leave or a day
/// off. A minimum of 0 disables the check.
pub fn violates_min_rest(
    employee: &Employee,
    date: NaiveDate,
    rules: &Rules,
    catalog: &ShiftCatalog,
) -> bool {
    if rules.min_rest_hours_between_shifts == 0 {
        return false;
    }

    let Some(current) = working_shift(employee, date, catalog) else {
        return false;
    };
    let current_start = date.and_time(current.start);

    // A gap longer than the minimum cannot be violated, so only the days
    // that could still matter are inspected.
    let look_back = u64::from(rules.min_rest_hours_between_shifts / 24 + 1);
    let mut cursor = date;
    for _ in 0..look_back {
        let Some(previous_day) = cursor.checked_sub_days(Days::new(1)) else {
            return false;
        };
        cursor = previous_day;

        let Some(previous) = working_shift(employee, cursor, catalog) else {
            continue;
        };
        let rest = current_start - shift_end(previous, cursor);
        let rest_hours = Decimal::from(rest.num_minutes()) / Decimal::from(60);
        return rest_hours < Decimal::from(rules.min_rest_hours_between_shifts);
    }
    false
}

fn working_shift<'a>(
    employee: &Employee,
    date: NaiveDate,
    catalog: &'a ShiftCatalog,
) -> Option<&'a ShiftTemplate> {
    match resolve(employee, date, catalog) {
        EffectiveAssignment::Shift { shift_id, .. } => catalog.get(&shift_id),
        _ => None,
    }
}
