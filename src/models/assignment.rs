//! The derived effective-assignment type.
//!
//! An [`EffectiveAssignment`] is never stored: it is the single resolved
//! outcome for one (employee, date) pair after the precedence rules in
//! [`crate::engine::resolve`] have been applied.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The single effective outcome for an employee on a date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EffectiveAssignment {
    /// The employee is on leave; leave outranks every assignment.
    OnLeave {
        /// The kind of leave (e.g. "annual", "sick").
        leave_type: String,
        /// Hours credited toward hour totals for this day.
        hours_per_day: Decimal,
    },
    /// The employee works a shift.
    Shift {
        /// The assigned shift id.
        shift_id: String,
        /// The assignment came from a manual (per-date) override.
        is_manual: bool,
        /// The assignment came from the fixed weekly pattern.
        is_fixed: bool,
        /// The date carries a request lock.
        is_locked: bool,
    },
    /// No leave, no override, no fixed entry: a day off.
    DayOff,
}

impl EffectiveAssignment {
    /// Whether this is a leave day.
    pub fn is_leave(&self) -> bool {
        matches!(self, EffectiveAssignment::OnLeave { .. })
    }

    /// Whether this is a working shift (not leave, not a day off).
    pub fn is_working(&self) -> bool {
        matches!(self, EffectiveAssignment::Shift { .. })
    }

    /// The assigned shift id, when working.
    pub fn shift_id(&self) -> Option<&str> {
        match self {
            EffectiveAssignment::Shift { shift_id, .. } => Some(shift_id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_predicates() {
        let leave = EffectiveAssignment::OnLeave {
            leave_type: "annual".to_string(),
            hours_per_day: Decimal::from_str("7.6").unwrap(),
        };
        assert!(leave.is_leave());
        assert!(!leave.is_working());
        assert_eq!(leave.shift_id(), None);

        let shift = EffectiveAssignment::Shift {
            shift_id: "day".to_string(),
            is_manual: false,
            is_fixed: true,
            is_locked: false,
        };
        assert!(shift.is_working());
        assert_eq!(shift.shift_id(), Some("day"));

        assert!(!EffectiveAssignment::DayOff.is_working());
        assert!(!EffectiveAssignment::DayOff.is_leave());
    }

    #[test]
    fn test_serialization_tags_the_variant() {
        let shift = EffectiveAssignment::Shift {
            shift_id: "day".to_string(),
            is_manual: true,
            is_fixed: false,
            is_locked: false,
        };
        let json = serde_json::to_string(&shift).unwrap();
        assert!(json.contains("\"kind\":\"shift\""));
        assert!(json.contains("\"is_manual\":true"));

        let off = serde_json::to_string(&EffectiveAssignment::DayOff).unwrap();
        assert_eq!(off, r#"{"kind":"day_off"}"#);

        let back: EffectiveAssignment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, shift);
    }
}
