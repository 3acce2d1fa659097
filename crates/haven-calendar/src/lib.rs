//! # haven-calendar
//!
//! Deterministic booking-calendar computation for haven rental screens.
//!
//! The guest-facing date-range picker and the owner-facing admin booking
//! calendar share this core: month-grid construction, availability
//! classification, tap-driven range selection, and booking-bar layout.
//! Everything is a pure function over caller-supplied data — booked and
//! blocked dates arrive already fetched, "today" is an explicit argument
//! (no system clock access), and the output is classification and
//! geometry for the presentation layer to paint.
//!
//! ## Modules
//!
//! - [`grid`] — (year, month) → fixed 42-cell month grid
//! - [`availability`] — Annotate grid cells as past/booked/blocked
//! - [`selection`] — Tap-driven (start, end) range state machine
//! - [`bars`] — Project booking intervals onto week rows as positioned bars
//! - [`discount`] — Best-discount selection for a nightly price
//! - [`error`] — Error types

pub mod availability;
pub mod bars;
pub mod discount;
pub mod error;
pub mod grid;
pub mod selection;

pub use availability::{classify, classify_grid, is_selectable, parse_iso_date, AvailabilitySets};
pub use bars::{
    layout_bars, layout_month, week_rows, BookingInterval, BookingStatus, PositionedBar,
};
pub use discount::{best_discount, BestDiscount, Discount, DiscountKind};
pub use error::CalendarError;
pub use grid::{build_grid, days_in_month, CalendarDay, GRID_CELLS, WEEK_LEN};
pub use selection::{is_in_range, on_date_pressed, press_day, DateRange, SelectionState};
