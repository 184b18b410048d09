//! Requests against the PrivatBank archive endpoint.

use jiff::civil::Date;
use jiff::{ToSpan, Zoned};
use log::{info, warn};
use reqwest::Client;
use tokio::task::JoinSet;

use crate::DayReport;
use crate::error::{Error, FetchError};
use crate::models::DayRates;

const P24_BASE_URL: &str = "https://api.privatbank.ua/p24api";

/// Outcome of fetching a single day, failures included.
pub struct DayFetch {
    pub date: Date,
    pub key: String,
    pub outcome: Result<DayRates, FetchError>,
}

impl DayFetch {
    /// Discard the failure side, keeping only days that returned rates.
    pub fn into_report(self) -> Option<DayReport> {
        let rates = self.outcome.ok()?;
        Some(DayReport {
            date: self.date,
            key: self.key,
            rates: rates.exchange_rate,
        })
    }
}

/// Fetch rates for the last `days` calendar days, today included.
///
/// All requests go out at once and every one is awaited; a day that fails to
/// fetch carries its error in [`DayFetch::outcome`] without disturbing the
/// other days. Results arrive in completion order.
pub async fn fetch_last_days(client: &Client, days: u8) -> Result<Vec<DayFetch>, Error> {
    let today = Zoned::now().date();

    let mut tasks = JoinSet::new();
    for date in back_dates(today, days) {
        let client = client.clone();
        tasks.spawn(async move { fetch_day(&client, date).await });
    }

    let mut fetched = Vec::with_capacity(usize::from(days));
    while let Some(joined) = tasks.join_next().await {
        fetched.push(joined?);
    }
    Ok(fetched)
}

/// Fetch the archive rates for one date.
///
/// Transport errors, non-success statuses, and bodies that fail to decode
/// all end up in the returned outcome; nothing is raised past this point.
pub async fn fetch_day(client: &Client, date: Date) -> DayFetch {
    let key = date_key(date);
    let url = format!("{P24_BASE_URL}/exchange_rates?json&date={key}");
    info!("requesting {url}");

    let outcome = request_day(client, &url).await;
    if let Err(err) = &outcome {
        warn!("{err}");
    }
    DayFetch { date, key, outcome }
}

async fn request_day(client: &Client, url: &str) -> Result<DayRates, FetchError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| FetchError::Transport {
            url: url.to_owned(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_owned(),
            status,
        });
    }

    response.json().await.map_err(|source| FetchError::Decode {
        url: url.to_owned(),
        source,
    })
}

/// The `days` calendar dates ending at `today`, newest first.
pub fn back_dates(today: Date, days: u8) -> Vec<Date> {
    (0..i32::from(days)).map(|back| today - back.days()).collect()
}

/// Format a date the way the archive endpoint spells it (`DD.MM.YYYY`).
pub fn date_key(date: Date) -> String {
    date.strftime("%d.%m.%Y").to_string()
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use reqwest::StatusCode;

    use super::*;
    use crate::models::RateRecord;

    #[test]
    fn back_dates_count_back_from_today() {
        let today = date(2025, 3, 1);

        assert_eq!(
            back_dates(today, 3),
            [date(2025, 3, 1), date(2025, 2, 28), date(2025, 2, 27)]
        );
    }

    #[test]
    fn back_dates_cross_a_year_boundary() {
        assert_eq!(
            back_dates(date(2025, 1, 1), 2),
            [date(2025, 1, 1), date(2024, 12, 31)]
        );
    }

    #[test]
    fn one_date_per_requested_day() {
        let dates = back_dates(date(2025, 7, 15), 10);

        assert_eq!(dates.len(), 10);
        let mut unique = dates.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), 10);
    }

    #[test]
    fn date_keys_use_the_archive_spelling() {
        assert_eq!(date_key(date(2025, 3, 7)), "07.03.2025");
        assert_eq!(date_key(date(2024, 12, 31)), "31.12.2024");
    }

    #[test]
    fn failed_fetch_yields_no_report() {
        let fetch = DayFetch {
            date: date(2025, 3, 7),
            key: "07.03.2025".into(),
            outcome: Err(FetchError::Status {
                url: format!("{P24_BASE_URL}/exchange_rates?json&date=07.03.2025"),
                status: StatusCode::BAD_GATEWAY,
            }),
        };

        assert!(fetch.into_report().is_none());
    }

    #[test]
    fn successful_fetch_keeps_every_rate() {
        let fetch = DayFetch {
            date: date(2025, 3, 7),
            key: "07.03.2025".into(),
            outcome: Ok(DayRates {
                exchange_rate: vec![RateRecord::default(), RateRecord::default()],
                ..DayRates::default()
            }),
        };

        let report = fetch.into_report().unwrap();
        assert_eq!(report.key, "07.03.2025");
        assert_eq!(report.rates.len(), 2);
    }
}
