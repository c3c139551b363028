//! Shift-swap validation, staging, and atomic commit.
//!
//! A [`SwapSession`] holds an ordered buffer of validated-but-uncommitted
//! bilateral exchanges plus an overlay map: the derived "effective view"
//! obtained by folding the buffer over base resolution. Proposals validate
//! against that view, so later swaps see the cumulative effect of earlier
//! ones; undo pops the newest entry and replays the remainder; commit folds
//! the whole buffer into the backing store exactly once, all-or-nothing.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use tracing::debug;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{DAY_OFF, EffectiveAssignment, Employee, ShiftCatalog};
use crate::store::{RosterStore, RosterUpdate};

use super::resolver::resolve;

/// The machine-checkable category of a swap rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapViolationKind {
    /// One side of the exchange is a leave day; leave is never swappable.
    LeaveConflict,
    /// The incoming shift is blocked for the receiving employee on the
    /// destination weekday.
    BlockedShift,
    /// The two cells hold identical content; the swap would be a no-op.
    IdenticalCells,
}

/// A rejected swap: category plus a human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapViolation {
    /// The rejection category.
    pub kind: SwapViolationKind,
    /// Human-readable description of the conflict.
    pub message: String,
}

impl SwapViolation {
    fn new(kind: SwapViolationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// A validated, staged, not-yet-committed exchange.
///
/// `shift1`/`shift2` are the outgoing cell contents of each side at the
/// time of staging (`None` = day off).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSwap {
    /// Stable id of this staged swap.
    pub id: Uuid,
    /// The first employee's id.
    pub employee1_id: String,
    /// The second employee's id.
    pub employee2_id: String,
    /// The date being exchanged on the first employee's schedule.
    pub date1: NaiveDate,
    /// The date being exchanged on the second employee's schedule.
    pub date2: NaiveDate,
    /// Outgoing cell of employee 1 on `date1` (`None` = day off).
    pub shift1: Option<String>,
    /// Outgoing cell of employee 2 on `date2` (`None` = day off).
    pub shift2: Option<String>,
}

/// The staging buffer for pending swaps.
#[derive(Debug, Clone, Default)]
pub struct SwapSession {
    pending: Vec<PendingSwap>,
    /// (employee id, date) to staged cell content; the effective view.
    overlay: BTreeMap<(String, NaiveDate), Option<String>>,
}

impl SwapSession {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// The staged swaps, oldest first.
    pub fn pending(&self) -> &[PendingSwap] {
        &self.pending
    }

    /// Whether nothing is staged.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// The cell content an employee effectively holds on a date, with
    /// staged swaps applied (`None` = day off).
    ///
    /// Leave is reported separately by [`SwapSession::preview`]; staged
    /// cells never exist on leave days because proposals reject them.
    fn cell(&self, employee: &Employee, date: NaiveDate, catalog: &ShiftCatalog) -> Option<String> {
        if let Some(staged) = self.overlay.get(&(employee.id.clone(), date)) {
            return staged.clone();
        }
        match resolve(employee, date, catalog) {
            EffectiveAssignment::Shift { shift_id, .. } => Some(shift_id),
            _ => None,
        }
    }

    /// The effective assignment for preview purposes, staged swaps applied.
    ///
    /// Staged cells surface as manual assignments, matching what a commit
    /// would produce.
    pub fn preview(
        &self,
        employee: &Employee,
        date: NaiveDate,
        catalog: &ShiftCatalog,
    ) -> EffectiveAssignment {
        match self.overlay.get(&(employee.id.clone(), date)) {
            Some(Some(shift_id)) => EffectiveAssignment::Shift {
                shift_id: shift_id.clone(),
                is_manual: true,
                is_fixed: false,
                is_locked: employee.is_locked(date),
            },
            Some(None) => EffectiveAssignment::DayOff,
            None => resolve(employee, date, catalog),
        }
    }

    /// Validates and stages a bilateral exchange.
    ///
    /// Checks, in order, aborting at the first failing stage:
    ///
    /// 1. neither side's day may be covered by leave;
    /// 2. the incoming shift must not be blocked for the receiving
    ///    employee on the destination weekday (specific weekday or the
    ///    `"all"` wildcard);
    /// 3. the two cells must not hold identical content (no-op swap).
    ///
    /// On success the swap is appended to the pending buffer, the overlay
    /// reflects both moved cells, and the staged swap's id is returned.
    /// Nothing is written to any store until [`SwapSession::commit`].
    pub fn propose(
        &mut self,
        employee1: &Employee,
        date1: NaiveDate,
        employee2: &Employee,
        date2: NaiveDate,
        catalog: &ShiftCatalog,
    ) -> Result<Uuid, Vec<SwapViolation>> {
        // Stage 1: leave days are never swappable.
        let mut violations = Vec::new();
        for (employee, date) in [(employee1, date1), (employee2, date2)] {
            if let Some(leave) = employee.leave_on(date) {
                violations.push(SwapViolation::new(
                    SwapViolationKind::LeaveConflict,
                    format!(
                        "{} is on {} leave on {}",
                        employee.name, leave.leave_type, date
                    ),
                ));
            }
        }
        if !violations.is_empty() {
            return Err(violations);
        }

        let cell1 = self.cell(employee1, date1, catalog);
        let cell2 = self.cell(employee2, date2, catalog);

        // Stage 2: the receiving side must accept the incoming shift.
        for (receiver, date, incoming) in [(employee1, date1, &cell2), (employee2, date2, &cell1)] {
            if let Some(shift_id) = incoming {
                if receiver.is_shift_blocked(shift_id, date.weekday()) {
                    violations.push(SwapViolation::new(
                        SwapViolationKind::BlockedShift,
                        format!(
                            "shift '{}' is blocked for {} on {}",
                            shift_id, receiver.name, date
                        ),
                    ));
                }
            }
        }
        if !violations.is_empty() {
            return Err(violations);
        }

        // Stage 3: identical cells make the exchange a no-op.
        if cell1 == cell2 {
            return Err(vec![SwapViolation::new(
                SwapViolationKind::IdenticalCells,
                "both cells hold the same assignment; nothing to swap",
            )]);
        }

        let id = Uuid::new_v4();
        self.overlay
            .insert((employee1.id.clone(), date1), cell2.clone());
        self.overlay
            .insert((employee2.id.clone(), date2), cell1.clone());
        self.pending.push(PendingSwap {
            id,
            employee1_id: employee1.id.clone(),
            employee2_id: employee2.id.clone(),
            date1,
            date2,
            shift1: cell1,
            shift2: cell2,
        });
        Ok(id)
    }

    /// Removes the most recently staged swap and its overlay effects.
    ///
    /// Returns the removed swap, or `None` when the buffer is empty.
    pub fn undo(&mut self) -> Option<PendingSwap> {
        let removed = self.pending.pop()?;
        self.rebuild_overlay();
        Some(removed)
    }

    /// Clears every staged swap.
    pub fn reset(&mut self) {
        self.pending.clear();
        self.overlay.clear();
    }

    /// Recomputes the overlay by replaying the remaining buffer in order.
    fn rebuild_overlay(&mut self) {
        self.overlay.clear();
        for swap in &self.pending {
            self.overlay
                .insert((swap.employee1_id.clone(), swap.date1), swap.shift2.clone());
            self.overlay
                .insert((swap.employee2_id.clone(), swap.date2), swap.shift1.clone());
        }
    }

    /// Commits every staged swap to the store, all-or-nothing.
    ///
    /// Works on a single snapshot of the roster: each swap becomes a
    /// manual-shift mutation on both employees (`day-off` when the
    /// incoming side is empty) plus an auto-generated comment naming the
    /// counterpart. Any employee id missing from the snapshot aborts the
    /// whole commit with [`EngineError::EmployeeNotFound`], leaving the
    /// store untouched. The buffer is cleared on success.
    pub fn commit<S: RosterStore>(&mut self, store: &mut S) -> EngineResult<()> {
        if self.pending.is_empty() {
            return Ok(());
        }

        // Single consistent snapshot; a failure below leaves the store as-is.
        let mut employees = store.current().employees.clone();

        for swap in &self.pending {
            let index1 = position_of(&employees, &swap.employee1_id)?;
            let index2 = position_of(&employees, &swap.employee2_id)?;

            let name1 = employees[index1].name.clone();
            let name2 = employees[index2].name.clone();

            apply_side(
                &mut employees[index1],
                swap.date1,
                swap.shift2.as_deref(),
                &name2,
                swap.date2,
            );
            apply_side(
                &mut employees[index2],
                swap.date2,
                swap.shift1.as_deref(),
                &name1,
                swap.date1,
            );
        }

        let count = self.pending.len();
        store.update(RosterUpdate::employees(employees))?;
        debug!(swaps = count, "swap batch committed");
        self.reset();
        Ok(())
    }
}

fn position_of(employees: &[Employee], id: &str) -> EngineResult<usize> {
    employees
        .iter()
        .position(|e| e.id == id)
        .ok_or_else(|| EngineError::EmployeeNotFound { id: id.to_string() })
}

/// Writes one direction of an exchange onto an employee.
fn apply_side(
    employee: &mut Employee,
    date: NaiveDate,
    incoming: Option<&str>,
    counterpart_name: &str,
    counterpart_date: NaiveDate,
) {
    let cell = incoming.unwrap_or(DAY_OFF).to_string();
    employee.manual_shifts.insert(date, cell);
    employee
        .shift_comments
        .entry(date)
        .or_default()
        .push(format!(
            "Swapped with {} ({})",
            counterpart_name, counterpart_date
        ));
}
