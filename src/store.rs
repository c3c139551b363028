//! The list-store and rules-store seams.
//!
//! The engine never persists anything itself: derived mutations (swap
//! commits, overtime edits) are expressed as partial-field updates to the
//! current roster record and pushed through [`RosterStore`]. The traits
//! keep the engine pure and testable; [`MemoryStore`] backs the tests and
//! any embedding that holds the roster in memory.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::EngineResult;
use crate::models::{Employee, Rules, ShiftCatalog};

/// The current list record: all employees plus the shift catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    /// All employees, in authoring order.
    #[serde(default)]
    pub employees: Vec<Employee>,
    /// The ordered shift catalog.
    #[serde(default)]
    pub shifts: ShiftCatalog,
}

impl Roster {
    /// Looks up an employee by id.
    pub fn employee(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }
}

/// A partial-field update to the roster record.
///
/// Only the populated fields are written; both fields of one update are
/// applied together, atomically.
#[derive(Debug, Clone, Default)]
pub struct RosterUpdate {
    /// Replacement employee list, if updating employees.
    pub employees: Option<Vec<Employee>>,
    /// Replacement shift catalog, if updating shifts.
    pub shifts: Option<ShiftCatalog>,
}

impl RosterUpdate {
    /// An update replacing the employee list.
    pub fn employees(employees: Vec<Employee>) -> Self {
        Self {
            employees: Some(employees),
            ..Self::default()
        }
    }

    /// An update replacing the shift catalog.
    pub fn shifts(shifts: ShiftCatalog) -> Self {
        Self {
            shifts: Some(shifts),
            ..Self::default()
        }
    }
}

/// Read/write access to the current roster record.
pub trait RosterStore {
    /// The current roster snapshot.
    fn current(&self) -> &Roster;

    /// Applies a partial update atomically.
    fn update(&mut self, update: RosterUpdate) -> EngineResult<()>;
}

/// Read access to the current rule set.
pub trait RulesStore {
    /// The rules currently in force.
    fn current_rules(&self) -> &Rules;
}

/// An in-memory roster store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    roster: Roster,
}

impl MemoryStore {
    /// Creates a store holding the given roster.
    pub fn new(roster: Roster) -> Self {
        Self { roster }
    }
}

impl RosterStore for MemoryStore {
    fn current(&self) -> &Roster {
        &self.roster
    }

    fn update(&mut self, update: RosterUpdate) -> EngineResult<()> {
        debug!(
            employees = update.employees.is_some(),
            shifts = update.shifts.is_some(),
            "applying roster update"
        );
        if let Some(employees) = update.employees {
            self.roster.employees = employees;
        }
        if let Some(shifts) = update.shifts {
            self.roster.shifts = shifts;
        }
        Ok(())
    }
}

/// An in-memory rules store.
#[derive(Debug, Clone, Default)]
pub struct MemoryRulesStore {
    rules: Rules,
}

impl MemoryRulesStore {
    /// Creates a store holding the given rules.
    pub fn new(rules: Rules) -> Self {
        Self { rules }
    }
}

impl RulesStore for MemoryRulesStore {
    fn current_rules(&self) -> &Rules {
        &self.rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster_with_one_of_each() -> Roster {
        use crate::models::ShiftTemplate;
        use chrono::NaiveTime;

        let time = |h| NaiveTime::from_hms_opt(h, 0, 0).unwrap();
        Roster {
            employees: vec![Employee::new("emp_001", "Alex")],
            shifts: ShiftCatalog::new(vec![ShiftTemplate::new("day", time(9), time(17), 0)]),
        }
    }

    #[test]
    fn test_partial_update_touches_only_named_fields() {
        let mut store = MemoryStore::new(roster_with_one_of_each());

        store
            .update(RosterUpdate::employees(vec![
                Employee::new("emp_001", "Alex"),
                Employee::new("emp_002", "Sam"),
            ]))
            .unwrap();

        assert_eq!(store.current().employees.len(), 2);
        // Shifts untouched by an employees-only update
        assert_eq!(store.current().shifts.len(), 1);
    }

    #[test]
    fn test_update_both_fields_at_once() {
        let mut store = MemoryStore::new(roster_with_one_of_each());
        let update = RosterUpdate {
            employees: Some(vec![]),
            shifts: Some(ShiftCatalog::default()),
        };

        store.update(update).unwrap();
        assert!(store.current().employees.is_empty());
        assert!(store.current().shifts.is_empty());
    }

    #[test]
    fn test_employee_lookup() {
        let roster = roster_with_one_of_each();
        assert!(roster.employee("emp_001").is_some());
        assert!(roster.employee("emp_404").is_none());
    }

    #[test]
    fn test_roster_serialization_round_trip() {
        let roster = roster_with_one_of_each();
        let json = serde_json::to_string(&roster).unwrap();
        let back: Roster = serde_json::from_str(&json).unwrap();
        assert_eq!(back, roster);
    }

    #[test]
    fn test_rules_store_returns_current_rules() {
        let rules = Rules {
            max_consecutive_shifts: 5,
            ..Rules::default()
        };
        let store = MemoryRulesStore::new(rules.clone());
        assert_eq!(store.current_rules(), &rules);
    }
}
