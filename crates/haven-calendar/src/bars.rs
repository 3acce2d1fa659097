//! Booking-bar layout for the admin month calendar.
//!
//! Bookings for the displayed month arrive as day-of-month intervals;
//! each week row of the grid renders the intervals touching it as a
//! horizontal bar, clipped to the row's real days and positioned in
//! percent of the row width. Rows are laid out independently — a
//! multi-week booking produces one bar per row it crosses, labeled only
//! on the row holding its true start.
//!
//! Overlapping intervals in the same row are emitted as-is and will
//! visually overlap; the admin calendar does not stack them.

use serde::{Deserialize, Serialize};

use crate::grid::{CalendarDay, WEEK_LEN};

/// Booking lifecycle states shown on the admin calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BookingStatus {
    Pending,
    Approved,
    CheckedIn,
    CheckedOut,
    Declined,
}

impl BookingStatus {
    /// Legend color for this status.
    pub fn color_hex(self) -> &'static str {
        match self {
            BookingStatus::Pending => "#FBBF24",
            BookingStatus::Approved => "#22C55E",
            BookingStatus::CheckedIn => "#3B82F6",
            BookingStatus::CheckedOut => "#8B5CF6",
            BookingStatus::Declined => "#EF4444",
        }
    }
}

/// One booking projected onto the displayed month.
///
/// `start_day..=end_day` are day-of-month numbers with
/// `start_day <= end_day`; the bookings data source pre-filters to the
/// displayed month. The layout engine never mutates intervals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingInterval {
    pub title: String,
    pub start_day: u32,
    pub end_day: u32,
    pub status: BookingStatus,
}

/// A bar positioned within one week row, in percent of the row width.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionedBar {
    /// Interval title, present only on the row holding the interval's
    /// true start so multi-week bookings label once.
    pub label: Option<String>,
    pub left_percent: f64,
    pub width_percent: f64,
    pub status: BookingStatus,
}

/// Split a month grid into its week rows of day numbers.
///
/// Current-month cells become `Some(day_number)`, filler cells `None`.
/// Rows at the month boundaries therefore hold fewer than seven real
/// days, and a trailing all-filler row holds none.
pub fn week_rows(days: &[CalendarDay]) -> Vec<Vec<Option<u32>>> {
    days.chunks(WEEK_LEN)
        .map(|week| {
            week.iter()
                .map(|d| d.is_current_month.then_some(d.day_number))
                .collect()
        })
        .collect()
}

/// Lay out the bars for one week row.
///
/// Week bounds are the first and last real day numbers in the row,
/// computed once and reused across intervals. Per interval: skip if it
/// misses the row entirely, otherwise clip to the bounds and position by
/// column — `left = col(start) / 7`, `width = columns covered / 7`, both
/// in percent. Output order follows input order.
pub fn layout_bars(week_row: &[Option<u32>], intervals: &[BookingInterval]) -> Vec<PositionedBar> {
    let Some((week_start, week_end)) = row_bounds(week_row) else {
        return Vec::new();
    };

    let mut bars = Vec::new();
    for interval in intervals {
        if interval.end_day < week_start || interval.start_day > week_end {
            continue;
        }

        let clipped_start = interval.start_day.max(week_start);
        let clipped_end = interval.end_day.min(week_end);

        let (Some(start_col), Some(end_col)) = (
            column_of(week_row, clipped_start),
            column_of(week_row, clipped_end),
        ) else {
            continue;
        };

        let label = (clipped_start == interval.start_day).then(|| interval.title.clone());

        bars.push(PositionedBar {
            label,
            left_percent: start_col as f64 / WEEK_LEN as f64 * 100.0,
            width_percent: (end_col - start_col + 1) as f64 / WEEK_LEN as f64 * 100.0,
            status: interval.status,
        });
    }
    bars
}

/// Lay out bars for every week row of a month grid, one entry per row.
pub fn layout_month(
    days: &[CalendarDay],
    intervals: &[BookingInterval],
) -> Vec<Vec<PositionedBar>> {
    week_rows(days)
        .iter()
        .map(|row| layout_bars(row, intervals))
        .collect()
}

/// First and last real day numbers in a row; `None` for an all-filler row.
fn row_bounds(week_row: &[Option<u32>]) -> Option<(u32, u32)> {
    let first = week_row.iter().flatten().next().copied()?;
    let last = week_row.iter().flatten().last().copied()?;
    Some((first, last))
}

fn column_of(week_row: &[Option<u32>], day: u32) -> Option<usize> {
    week_row.iter().position(|slot| *slot == Some(day))
}

// ── Tests ───────────────────────────────────────────────────────────────────
