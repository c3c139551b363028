//! Layered overtime activation: global, per-shift, and per-date.
//!
//! The three layers form a small state machine with two cross-disable
//! transitions: enabling the global toggle first clears every individual
//! activation, and enabling a per-shift toggle while global is active first
//! drops the global state. Date-specific entries are orthogonal to both and
//! survive every toggle transition. Each mutation is applied as a single
//! batch over the catalog so no observer sees a half-applied mixture.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{OvertimeEntry, ShiftCatalog};

/// Sets the global overtime toggle.
///
/// Enabling clears every shift's individual activation first, then forces
/// all shifts active as one batch. Disabling clears the global flag and
/// every shift flag. Date-specific entries are untouched either way.
pub fn set_global_overtime(catalog: &mut ShiftCatalog, enabled: bool) {
    catalog.global_overtime = enabled;
    // Individual activations are superseded, not merged: every flag ends
    // up equal to the global state, in one batch over the catalog.
    for shift in &mut catalog.shifts {
        shift.is_overtime_active = enabled;
    }
    debug!(enabled, "global overtime toggled");
}

/// Sets one shift's overtime toggle.
///
/// When the global toggle is active, per-shift control takes over: the
/// global flag and every shift flag are cleared first, then the requested
/// shift is set. Errors when the shift id is not in the catalog.
pub fn set_shift_overtime(
    catalog: &mut ShiftCatalog,
    shift_id: &str,
    enabled: bool,
) -> EngineResult<()> {
    if catalog.get(shift_id).is_none() {
        return Err(EngineError::ShiftNotFound {
            id: shift_id.to_string(),
        });
    }

    if catalog.global_overtime {
        catalog.global_overtime = false;
        for shift in &mut catalog.shifts {
            shift.is_overtime_active = false;
        }
    }

    if let Some(shift) = catalog.get_mut(shift_id) {
        shift.is_overtime_active = enabled;
    }
    debug!(shift_id, enabled, "shift overtime toggled");
    Ok(())
}

/// Inserts or replaces the date-specific overtime entry for a shift/date.
pub fn upsert_overtime_entry(
    catalog: &mut ShiftCatalog,
    shift_id: &str,
    date: NaiveDate,
    quantity: u32,
    is_active: bool,
) -> EngineResult<()> {
    let shift = catalog
        .get_mut(shift_id)
        .ok_or_else(|| EngineError::ShiftNotFound {
            id: shift_id.to_string(),
        })?;

    let entry = OvertimeEntry {
        date,
        quantity,
        is_active,
    };
    match shift.overtime_entries.iter_mut().find(|e| e.date == date) {
        Some(existing) => *existing = entry,
        None => shift.overtime_entries.push(entry),
    }
    Ok(())
}

/// Moves a date-specific entry from one date to another.
///
/// The old entry is deleted and the new one inserted as one logical
/// operation, so the catalog never holds a transient duplicate. An entry
/// already present on the destination date is replaced. Errors when the
/// shift or the source entry does not exist.
pub fn move_overtime_entry(
    catalog: &mut ShiftCatalog,
    shift_id: &str,
    from: NaiveDate,
    to: NaiveDate,
) -> EngineResult<()> {
    let shift = catalog
        .get_mut(shift_id)
        .ok_or_else(|| EngineError::ShiftNotFound {
            id: shift_id.to_string(),
        })?;

    let source = shift
        .overtime_entries
        .iter()
        .position(|e| e.date == from)
        .ok_or_else(|| EngineError::OvertimeEntryNotFound {
            shift_id: shift_id.to_string(),
            date: from,
        })?;

    let mut entry = shift.overtime_entries.remove(source);
    entry.date = to;
    shift.overtime_entries.retain(|e| e.date != to);
    shift.overtime_entries.push(entry);
    Ok(())
}

/// Removes the date-specific entry for a shift/date, if present.
pub fn remove_overtime_entry(
    catalog: &mut ShiftCatalog,
    shift_id: &str,
    date: NaiveDate,
) -> EngineResult<()> {
    let shift = catalog
        .get_mut(shift_id)
        .ok_or_else(|| EngineError::ShiftNotFound {
            id: shift_id.to_string(),
        })?;

    shift.overtime_entries.retain(|e| e.date != date);
    Ok(())
}
