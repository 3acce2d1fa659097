//! Date-range selection state machine.
//!
//! A selection is a `(start, end)` pair of ISO dates driven by taps on
//! calendar cells. Which endpoints are set gives three states, and every
//! accepted tap maps to exactly one transition:
//!
//! 1. `Empty` or `Complete` — the tap starts a new selection (a new tap
//!    always discards a previous complete range).
//! 2. `PartialStart`, tap before the anchor — the tap re-anchors the
//!    selection backward without requiring a clear first.
//! 3. `PartialStart`, tap at or after the anchor — the tap completes the
//!    range.
//!
//! Dates compare as `YYYY-MM-DD` strings, which orders identically to
//! chronological comparison for this format.

use serde::{Deserialize, Serialize};

use crate::availability::is_selectable;
use crate::grid::CalendarDay;

/// A (possibly incomplete) selected date range.
///
/// When both endpoints are set, `start <= end` — the transition rules
/// never produce an inverted pair. `end` is never set while `start` is
/// missing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<String>,
    pub end: Option<String>,
}

/// Which endpoints of a [`DateRange`] are set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    /// No endpoint selected.
    Empty,
    /// Only the start date selected.
    PartialStart,
    /// Both endpoints selected.
    Complete,
}

impl DateRange {
    /// Range with only the start endpoint set.
    pub fn starting_at(date: &str) -> Self {
        DateRange {
            start: Some(date.to_string()),
            end: None,
        }
    }

    pub fn state(&self) -> SelectionState {
        match (&self.start, &self.end) {
            (None, _) => SelectionState::Empty,
            (Some(_), None) => SelectionState::PartialStart,
            (Some(_), Some(_)) => SelectionState::Complete,
        }
    }

    /// Whether `date` is the selected start or end day.
    ///
    /// Endpoints are styled distinctly from in-range interior days.
    pub fn is_endpoint(&self, date: &str) -> bool {
        self.start.as_deref() == Some(date) || self.end.as_deref() == Some(date)
    }
}

/// Apply one accepted tap to the current selection.
///
/// The caller filters taps first — this transition assumes `tapped` is a
/// selectable day. [`press_day`] is the guarded entry point for raw grid
/// cells. Every accepted tap yields a valid new range; there are no
/// failure modes.
pub fn on_date_pressed(tapped: &str, current: &DateRange) -> DateRange {
    match (&current.start, &current.end) {
        (None, _) | (Some(_), Some(_)) => DateRange::starting_at(tapped),
        (Some(start), None) => {
            if tapped < start.as_str() {
                DateRange::starting_at(tapped)
            } else {
                DateRange {
                    start: Some(start.clone()),
                    end: Some(tapped.to_string()),
                }
            }
        }
    }
}

/// Guarded tap handler for a grid cell.
///
/// Filler cells (empty date) and non-selectable days are no-ops: the
/// current selection comes back unchanged.
pub fn press_day(day: &CalendarDay, current: &DateRange) -> DateRange {
    if day.date.is_empty() || !is_selectable(day) {
        return current.clone();
    }
    on_date_pressed(&day.date, current)
}

/// Whether `date` lies strictly inside a complete range.
///
/// Both endpoints are excluded — start and end days style as endpoints,
/// not interior days. Always `false` while either endpoint is missing.
pub fn is_in_range(date: &str, range: &DateRange) -> bool {
    match (&range.start, &range.end) {
        (Some(start), Some(end)) => start.as_str() < date && date < end.as_str(),
        _ => false,
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
