//! Synthetic systemic-risk series showing exposure falling as central
//! clearing takes hold.
//!
//! The series is illustrative only: scores are a straight line from a high
//! value to a low value, one observation per month-end.

use crate::core::error::{require_at_least, NovationError, Result};
use chrono::{Datelike, Months, NaiveDate};
use log::debug;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One point of the hypothetical risk trend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskObservation {
    pub period_index: u32,
    pub date: NaiveDate,
    pub risk_score: Decimal,
}

impl RiskObservation {
    /// Score as a float, for charting layers that plot `f64`.
    pub fn risk_score_f64(&self) -> f64 {
        self.risk_score.to_f64().unwrap_or(0.0)
    }
}

impl fmt::Display for RiskObservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>3}  {}  {:>6.2}",
            self.period_index,
            self.date,
            self.risk_score_f64()
        )
    }
}

/// Parameters of the synthetic decay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskExposureConfig {
    /// Any date in the first month; observations fall on month-ends.
    pub start: NaiveDate,
    /// Score of the first observation.
    pub high: Decimal,
    /// Score of the last observation.
    pub low: Decimal,
}

impl Default for RiskExposureConfig {
    fn default() -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or(NaiveDate::MIN),
            high: dec!(100),
            low: dec!(20),
        }
    }
}

/// Risk exposure over `periods` months, decaying linearly from 100 to 20.
///
/// # Examples
///
/// ```
/// use ccp_novation::series::risk_exposure::generate_hypothetical_risk_exposure;
/// use rust_decimal_macros::dec;
///
/// let series = generate_hypothetical_risk_exposure(24).unwrap();
/// assert_eq!(series.len(), 24);
/// assert_eq!(series[0].risk_score, dec!(100));
/// assert_eq!(series[23].risk_score, dec!(20));
/// ```
pub fn generate_hypothetical_risk_exposure(periods: i64) -> Result<Vec<RiskObservation>> {
    generate_risk_exposure_with(periods, &RiskExposureConfig::default())
}

/// Risk exposure over `periods` months using an explicit configuration.
pub fn generate_risk_exposure_with(
    periods: i64,
    config: &RiskExposureConfig,
) -> Result<Vec<RiskObservation>> {
    require_at_least("periods", periods, 1)?;
    if config.high < config.low {
        return Err(NovationError::invalid_argument(
            "high",
            config.high,
            format!("must not be below low ({})", config.low),
        ));
    }
    let count = u32::try_from(periods).map_err(|_| {
        NovationError::invalid_argument("periods", periods, "exceeds the supported range")
    })?;

    let span = config.high.checked_sub(config.low).ok_or_else(|| {
        NovationError::invalid_argument(
            "high",
            config.high,
            format!("span down to low ({}) exceeds the decimal range", config.low),
        )
    })?;
    let steps = Decimal::from(count - 1);
    let first_month = config.start.with_day(1).unwrap_or(config.start);
    month_end(first_month, count - 1)?;

    let mut series = Vec::with_capacity(count as usize);
    for i in 0..count {
        let risk_score = if i == 0 {
            config.high
        } else {
            interpolate(config.high, span, i, steps)?
        };
        series.push(RiskObservation {
            period_index: i,
            date: month_end(first_month, i)?,
            risk_score,
        });
    }

    debug!(
        "generated {} risk observations from {} to {}",
        series.len(),
        config.high,
        config.low
    );
    Ok(series)
}

/// `high - span * i / steps`, rejecting bounds whose products leave the decimal range.
fn interpolate(high: Decimal, span: Decimal, i: u32, steps: Decimal) -> Result<Decimal> {
    span.checked_mul(Decimal::from(i))
        .and_then(|scaled| scaled.checked_div(steps))
        .and_then(|drop| high.checked_sub(drop))
        .ok_or_else(|| {
            NovationError::invalid_argument("high", high, "interpolation exceeds the decimal range")
        })
}

/// Last day of the month `offset` months after `first_of_month`.
fn month_end(first_of_month: NaiveDate, offset: u32) -> Result<NaiveDate> {
    first_of_month
        .checked_add_months(Months::new(offset + 1))
        .and_then(|next| next.pred_opt())
        .ok_or_else(|| {
            NovationError::invalid_argument("periods", offset + 1, "runs past the calendar range")
        })
}
