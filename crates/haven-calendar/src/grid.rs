//! Month-grid construction for booking calendars.
//!
//! Builds the fixed 6×7 grid of day cells a booking calendar renders:
//! leading filler cells holding the tail of the previous month, one cell
//! per day of the displayed month, and trailing filler cells padding the
//! total to exactly [`GRID_CELLS`]. Columns are Sunday-first. Cells come
//! out unannotated — [`crate::availability`] sets the past/booked/blocked
//! flags, and the screen layer paints the result.
//!
//! The grid is recomputed in full on every month change or date-set
//! update; nothing here is patched incrementally.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

/// Cells in a month grid: six full weeks, always.
///
/// This is a fixed-size contract, not a minimal-rows one — a month that
/// fits in five rows still pads to six so the calendar never changes
/// height while the user navigates.
pub const GRID_CELLS: usize = 42;

/// Columns per grid row.
pub const WEEK_LEN: usize = 7;

/// A single cell of the month grid.
///
/// Filler cells (days of the adjacent months, shown for grid
/// completeness only) carry an empty `date` and never carry any of the
/// availability flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    /// ISO date (`YYYY-MM-DD`); empty for filler cells.
    pub date: String,
    /// Display day number; for filler cells, the adjacent month's day.
    pub day_number: u32,
    /// Whether this cell belongs to the displayed month.
    pub is_current_month: bool,
    /// Whether this day is before the reference "today".
    pub is_past: bool,
    /// Whether this day appears in the booked-date set.
    pub is_booked: bool,
    /// Whether this day appears in the blocked-date set.
    pub is_blocked: bool,
}

impl CalendarDay {
    fn filler(day_number: u32) -> Self {
        CalendarDay {
            date: String::new(),
            day_number,
            is_current_month: false,
            is_past: false,
            is_booked: false,
            is_blocked: false,
        }
    }

    fn in_month(date: NaiveDate) -> Self {
        CalendarDay {
            date: date.format("%Y-%m-%d").to_string(),
            day_number: date.day(),
            is_current_month: true,
            is_past: false,
            is_booked: false,
            is_blocked: false,
        }
    }
}

/// Build the 42-cell grid for a month.
///
/// # Arguments
///
/// * `year` — Calendar year (e.g., 2026)
/// * `month` — Month number, 1-12
///
/// # Returns
///
/// Exactly [`GRID_CELLS`] cells: the trailing days of the previous month
/// filling the columns before the month's first weekday, every day of
/// the month in order, then days of the next month (numbered from 1)
/// padding to 42. Availability flags on in-month cells are all `false`
/// until the grid runs through [`crate::availability::classify_grid`].
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is outside 1-12 or
/// the year is outside chrono's representable range. Any valid
/// (year, month) pair succeeds, February included (leap years come from
/// chrono's date arithmetic).
///
/// # Examples
///
/// ```
/// use haven_calendar::grid::{build_grid, GRID_CELLS};
///
/// let days = build_grid(2026, 2).unwrap();
/// assert_eq!(days.len(), GRID_CELLS);
/// // February 2026 starts on a Sunday, so the grid opens with Feb 1.
/// assert_eq!(days[0].date, "2026-02-01");
/// ```
pub fn build_grid(year: i32, month: u32) -> Result<Vec<CalendarDay>, CalendarError> {
    let first = first_of_month(year, month)?;
    let first_weekday = first.weekday().num_days_from_sunday() as usize;
    let month_len = days_in_month(year, month)?;

    let mut days = Vec::with_capacity(GRID_CELLS);

    // Tail of the previous month
    if let Some(prev_last) = first.pred_opt().map(|d| d.day()) {
        for i in (0..first_weekday).rev() {
            days.push(CalendarDay::filler(prev_last - i as u32));
        }
    }

    // The month itself
    for day in 1..=month_len {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| CalendarError::InvalidMonth(format!("'{year}-{month:02}'")))?;
        days.push(CalendarDay::in_month(date));
    }

    // Head of the next month, padding to the fixed 42-cell contract
    let mut next_day = 1;
    while days.len() < GRID_CELLS {
        days.push(CalendarDay::filler(next_day));
        next_day += 1;
    }

    Ok(days)
}

/// Number of days in a month, leap-year aware.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] for a month outside 1-12.
pub fn days_in_month(year: i32, month: u32) -> Result<u32, CalendarError> {
    let first = first_of_month(year, month)?;
    // Last day of the month = the day before the 1st of the next month.
    let (next_y, next_m) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_y, next_m, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .ok_or_else(|| CalendarError::InvalidMonth(format!("'{}'", first)))
}

fn first_of_month(year: i32, month: u32) -> Result<NaiveDate, CalendarError> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| CalendarError::InvalidMonth(format!("'{year}-{month}'")))
}

// ── Tests ───────────────────────────────────────────────────────────────────
