//! Wire format of the PrivatBank `exchange_rates` archive endpoint.

use std::fmt;

use rust_decimal::Decimal;
use serde::Deserialize;

/// One day of archive rates, as returned by the endpoint.
///
/// Only `exchangeRate` is inspected downstream. A field the endpoint leaves
/// out deserializes to its default instead of failing the whole day.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DayRates {
    pub date: String,
    pub bank: String,
    pub base_currency: u32,
    pub base_currency_lit: String,
    pub exchange_rate: Vec<RateRecord>,
}

/// Rates for a single currency within one day.
///
/// The National Bank pair is usually present; the commercial pair is not
/// published for every currency.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RateRecord {
    pub base_currency: String,
    /// ISO code of the quoted currency. The archive occasionally emits
    /// records without one; those never survive filtering.
    pub currency: Option<String>,
    pub sale_rate_nb: Option<Decimal>,
    pub purchase_rate_nb: Option<Decimal>,
    pub sale_rate: Option<Decimal>,
    pub purchase_rate: Option<Decimal>,
}

impl fmt::Display for RateRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rate = |value: &Option<Decimal>| match value {
            Some(v) => v.to_string(),
            None => "-".to_string(),
        };
        write!(
            f,
            "sale {} purchase {} (NB {}/{})",
            rate(&self.sale_rate),
            rate(&self.purchase_rate),
            rate(&self.sale_rate_nb),
            rate(&self.purchase_rate_nb),
        )
    }
}
