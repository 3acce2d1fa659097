//! Availability classification for month-grid cells.
//!
//! Booked and blocked dates arrive from the booking API as plain ISO
//! date strings. Classification is pure: set membership for
//! booked/blocked, plus a past-day check against a caller-supplied
//! "today" — the library never reads the system clock. The flags are
//! evaluated independently; a past day that is also booked carries both.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::error::CalendarError;
use crate::grid::CalendarDay;

/// Owned booked/blocked membership sets.
///
/// Entries are kept verbatim. A malformed date string never equals a
/// real cell date, so it silently classifies as neither booked nor
/// blocked — no error is raised.
#[derive(Debug, Clone, Default)]
pub struct AvailabilitySets {
    booked: HashSet<String>,
    blocked: HashSet<String>,
}

impl AvailabilitySets {
    pub fn new<S: AsRef<str>>(booked_dates: &[S], blocked_dates: &[S]) -> Self {
        AvailabilitySets {
            booked: booked_dates
                .iter()
                .map(|d| d.as_ref().to_string())
                .collect(),
            blocked: blocked_dates
                .iter()
                .map(|d| d.as_ref().to_string())
                .collect(),
        }
    }

    pub fn is_booked(&self, date: &str) -> bool {
        self.booked.contains(date)
    }

    pub fn is_blocked(&self, date: &str) -> bool {
        self.blocked.contains(date)
    }
}

/// Classify one grid cell against the availability sets.
///
/// Returns an annotated copy; the input cell is untouched. Filler cells
/// pass through with all flags `false` regardless of the sets:
///
/// - `is_past` — the cell date is strictly before `today` (date-only
///   comparison; a cell date that fails to parse is not past).
/// - `is_booked` / `is_blocked` — string membership in the sets.
pub fn classify(day: &CalendarDay, sets: &AvailabilitySets, today: NaiveDate) -> CalendarDay {
    if !day.is_current_month {
        return day.clone();
    }

    let mut out = day.clone();
    out.is_past = parse_iso_date(&day.date).ok().is_some_and(|d| d < today);
    out.is_booked = sets.is_booked(&day.date);
    out.is_blocked = sets.is_blocked(&day.date);
    out
}

/// Classify a whole grid.
///
/// Full recomputation on every call — month navigation and date-set
/// updates rebuild the annotated grid rather than patching cells.
pub fn classify_grid(
    days: &[CalendarDay],
    sets: &AvailabilitySets,
    today: NaiveDate,
) -> Vec<CalendarDay> {
    days.iter().map(|day| classify(day, sets, today)).collect()
}

/// Whether a cell can accept a tap: in the displayed month and neither
/// past, booked, nor blocked.
///
/// Derived at decision time, never stored on the cell.
pub fn is_selectable(day: &CalendarDay) -> bool {
    day.is_current_month && !day.is_past && !day.is_booked && !day.is_blocked
}

/// Parse an ISO date string (`YYYY-MM-DD`) into a `NaiveDate`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDate`] if the string does not parse.
pub fn parse_iso_date(s: &str) -> Result<NaiveDate, CalendarError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| CalendarError::InvalidDate(format!("'{s}': {e}")))
}

// ── Tests ───────────────────────────────────────────────────────────────────
