//! USD and EUR exchange rates from the PrivatBank public archive.
//!
//! One request is issued per requested day, all of them concurrently. A day
//! whose request fails is logged and left out of the report instead of
//! failing the run.

pub mod api;
pub mod error;
pub mod models;

use std::cmp::Ordering;

use clap::Parser;
use jiff::civil::Date;

use crate::models::RateRecord;

/// Currencies that survive filtering into the final report.
pub const CURRENCIES: &[&str] = &["USD", "EUR"];

/// Get USD and EUR exchange rates from the PrivatBank archive for each of the
/// last few days.
///
/// Prints one block per day that could be retrieved, with the National Bank
/// and commercial rates per currency. Days whose request fails are skipped.
#[derive(Parser)]
pub struct Cli {
    /// How many days to fetch, counting back from (and including) today
    #[arg(value_name = "DAYS", value_parser = clap::value_parser!(u8).range(1..=10))]
    pub days: u8,
}

/// Rates for one day of the report.
pub struct DayReport {
    pub date: Date,
    /// The date in the archive's `DD.MM.YYYY` spelling, used for display.
    pub key: String,
    pub rates: Vec<RateRecord>,
}

/// Keep only rate records whose currency code is in `keep`. A day left with
/// no records afterwards is dropped from the report entirely.
pub fn filter_currencies(days: Vec<DayReport>, keep: &[&str]) -> Vec<DayReport> {
    days.into_iter()
        .filter_map(|mut day| {
            day.rates
                .retain(|rate| rate.currency.as_deref().is_some_and(|code| keep.contains(&code)));
            (!day.rates.is_empty()).then_some(day)
        })
        .collect()
}

impl PartialEq<Self> for DayReport {
    fn eq(&self, other: &Self) -> bool {
        self.date.eq(&other.date)
    }
}

impl Eq for DayReport {}

impl PartialOrd for DayReport {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DayReport {
    fn cmp(&self, other: &Self) -> Ordering {
        self.date.cmp(&other.date)
    }
}
