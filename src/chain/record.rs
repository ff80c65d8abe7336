//! Normalized daily chain records.
//!
//! One record per listed contract per session, in the shape the exchange
//! converters emit: `dd/mm/yyyy` dates and single-letter right codes, so
//! existing snapshot JSON loads unchanged.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::analytics::{OptionQuote, OptionRight};

use super::error::ChainError;

/// Serde helper for the `dd/mm/yyyy` date format used by the exchange feeds.
pub(crate) mod date_format {
    use chrono::NaiveDate;
    use serde::{self, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%d/%m/%Y";

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}

/// Serde helper for single-letter right codes (`"C"` / `"P"`).
mod right_code {
    use serde::{self, Deserialize, Deserializer, Serializer};

    use crate::analytics::OptionRight;

    pub fn serialize<S>(right: &OptionRight, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(match right {
            OptionRight::Call => "C",
            OptionRight::Put => "P",
        })
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<OptionRight, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        match raw.as_str() {
            "C" | "c" => Ok(OptionRight::Call),
            "P" | "p" => Ok(OptionRight::Put),
            other => Err(serde::de::Error::custom(format!(
                "unknown option right code: {other:?}"
            ))),
        }
    }
}

/// One option contract as observed in a daily session snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainRecord {
    /// Trading session date.
    #[serde(with = "date_format")]
    pub session_date: NaiveDate,
    /// Contract expiration date.
    #[serde(with = "date_format")]
    pub expiration_date: NaiveDate,
    /// Strike price.
    pub strike: f64,
    /// Call or Put, encoded as `"C"` / `"P"` on the wire.
    #[serde(with = "right_code")]
    pub right: OptionRight,
    /// Last traded price of the session; zero when the contract did not
    /// trade.
    pub last_price: f64,
    /// Session open price, when the feed reports one.
    #[serde(default)]
    pub open_price: Option<f64>,
    /// Session high, when the feed reports one.
    #[serde(default)]
    pub high_price: Option<f64>,
    /// Session low, when the feed reports one.
    #[serde(default)]
    pub low_price: Option<f64>,
    /// Contracts traded during the session.
    pub volume: u64,
    /// Open interest at session close.
    pub open_interest: u64,
}

impl ChainRecord {
    /// Time to expiration in years under the given day-count convention:
    /// `(expiration_date - session_date).days / day_count`.
    #[must_use]
    pub fn year_fraction(&self, day_count: f64) -> f64 {
        let days = (self.expiration_date - self.session_date).num_days();
        days as f64 / day_count
    }

    /// Builds an engine quote from this record.
    ///
    /// # Errors
    /// [`ChainError::InvalidRecord`] when the record has no usable last
    /// price (the contract did not trade).
    pub fn to_quote(
        &self,
        underlying_price: f64,
        risk_free_rate: f64,
        day_count: f64,
    ) -> Result<OptionQuote, ChainError> {
        if !(self.last_price > 0.0) {
            return Err(ChainError::InvalidRecord {
                message: format!(
                    "contract {:?} {} exp {} has no usable last price ({})",
                    self.right, self.strike, self.expiration_date, self.last_price
                ),
            });
        }

        Ok(OptionQuote::new(
            self.right,
            underlying_price,
            self.strike,
            self.year_fraction(day_count),
            risk_free_rate,
            self.last_price,
        ))
    }
}
