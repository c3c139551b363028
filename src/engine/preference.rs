//! Preference-match scoring.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{EffectiveAssignment, Employee, ShiftCatalog};

use super::hours::date_range;
use super::resolver::resolve;

/// Scores how well an employee's schedule matches their top preference.
///
/// The preferred shift is the catalog entry at the position whose rank is
/// `1`. For every date in `[start, end]`:
///
/// - a leave day counts as scheduled *and* matched (leave always satisfies
///   preference),
/// - a working shift counts as scheduled, and as matched only when its id
///   equals the preferred id,
/// - a day off counts as neither.
///
/// Returns `matches / scheduled × 100`, rounded to 2 decimal places, or
/// `0.00` when nothing was scheduled (including an inverted range or an
/// employee with no rank-1 preference and no leave).
pub fn match_percentage(
    employee: &Employee,
    catalog: &ShiftCatalog,
    start: NaiveDate,
    end: NaiveDate,
) -> Decimal {
    let preferred_id = employee
        .preferred_shift_index()
        .and_then(|index| catalog.at(index))
        .map(|shift| shift.id.as_str());

    let mut scheduled = 0u32;
    let mut matches = 0u32;

    for date in date_range(start, end) {
        match resolve(employee, date, catalog) {
            EffectiveAssignment::OnLeave { .. } => {
                scheduled += 1;
                matches += 1;
            }
            EffectiveAssignment::Shift { shift_id, .. } => {
                scheduled += 1;
                if preferred_id == Some(shift_id.as_str()) {
                    matches += 1;
                }
            }
            EffectiveAssignment::DayOff => {}
        }
    }

    if scheduled == 0 {
        return Decimal::ZERO.round_dp(2);
    }

    (Decimal::from(matches) / Decimal::from(scheduled) * Decimal::ONE_HUNDRED).round_dp(2)
}
