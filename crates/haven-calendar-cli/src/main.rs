//! havencal — inspect booking-calendar computations from the shell.
//!
//! Thin JSON front-end over the `haven-calendar` library: build and
//! classify month grids, replay tap sequences through the selection
//! state machine, project booking intervals onto week rows, and pick the
//! best discount for a price. The library never reads the clock, so the
//! reference date is resolved here, at the edge, and passed down.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use haven_calendar::{
    best_discount, build_grid, classify_grid, layout_month, parse_iso_date, press_day,
    AvailabilitySets, BookingInterval, DateRange, Discount,
};

#[derive(Parser)]
#[command(
    name = "havencal",
    version,
    about = "Booking-calendar computations: grids, availability, selection, bars"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build and classify the 42-cell grid for a month
    Grid {
        #[arg(long)]
        year: i32,
        /// Month number, 1-12
        #[arg(long)]
        month: u32,
        /// Reference date for past-day classification (YYYY-MM-DD);
        /// defaults to the local date
        #[arg(long)]
        today: Option<String>,
        /// Booked dates, comma-separated (YYYY-MM-DD)
        #[arg(long, value_delimiter = ',')]
        booked: Vec<String>,
        /// Blocked dates, comma-separated (YYYY-MM-DD)
        #[arg(long, value_delimiter = ',')]
        blocked: Vec<String>,
        #[arg(long)]
        pretty: bool,
    },
    /// Replay a tap sequence through the range-selection state machine
    Select {
        #[arg(long)]
        year: i32,
        /// Month number, 1-12
        #[arg(long)]
        month: u32,
        /// Reference date for past-day classification (YYYY-MM-DD);
        /// defaults to the local date
        #[arg(long)]
        today: Option<String>,
        #[arg(long, value_delimiter = ',')]
        booked: Vec<String>,
        #[arg(long, value_delimiter = ',')]
        blocked: Vec<String>,
        /// A date to press, in order (repeatable)
        #[arg(long = "press", required = true)]
        presses: Vec<String>,
    },
    /// Project booking intervals onto the week rows of a month
    Bars {
        #[arg(long)]
        year: i32,
        /// Month number, 1-12
        #[arg(long)]
        month: u32,
        /// Booking intervals as a JSON array
        #[arg(long)]
        intervals: String,
        #[arg(long)]
        pretty: bool,
    },
    /// Pick the best discount for a nightly price
    BestDiscount {
        #[arg(long)]
        price: f64,
        /// Discount offers as a JSON array (discounts API payload shape)
        #[arg(long)]
        discounts: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Grid {
            year,
            month,
            today,
            booked,
            blocked,
            pretty,
        } => {
            let today = resolve_today(today.as_deref())?;
            let sets = AvailabilitySets::new(&booked, &blocked);
            let days = classify_grid(&build_grid(year, month)?, &sets, today);
            print_json(&days, pretty)
        }
        Command::Select {
            year,
            month,
            today,
            booked,
            blocked,
            presses,
        } => {
            let today = resolve_today(today.as_deref())?;
            let sets = AvailabilitySets::new(&booked, &blocked);
            let days = classify_grid(&build_grid(year, month)?, &sets, today);

            let mut range = DateRange::default();
            for press in &presses {
                // A date outside the displayed month is nobody's cell — no-op,
                // same as a tap the screen layer would never deliver.
                if let Some(day) = days.iter().find(|d| &d.date == press) {
                    range = press_day(day, &range);
                }
            }
            print_json(&range, false)
        }
        Command::Bars {
            year,
            month,
            intervals,
            pretty,
        } => {
            let intervals: Vec<BookingInterval> =
                serde_json::from_str(&intervals).context("parsing --intervals JSON")?;
            let days = build_grid(year, month)?;
            print_json(&layout_month(&days, &intervals), pretty)
        }
        Command::BestDiscount { price, discounts } => {
            let offers: Vec<Discount> =
                serde_json::from_str(&discounts).context("parsing --discounts JSON")?;
            print_json(&best_discount(price, &offers), false)
        }
    }
}

fn resolve_today(today: Option<&str>) -> Result<NaiveDate> {
    match today {
        Some(s) => parse_iso_date(s).context("parsing --today"),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

fn print_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{out}");
    Ok(())
}
