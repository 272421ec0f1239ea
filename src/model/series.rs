use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// One step of a synthetic intraday session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub price: f64,
    pub volume: u64,
    /// Constant across every point of one series.
    pub previous_close: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IndexPoint {
    pub step: u32,
    pub value: f64,
}

/// Daily close used by the company detail chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyPrice {
    pub day: u32,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// Round to two decimals, ties to even, the precision every displayed price uses.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// `change / price * 100`, 0 when the price is zero.
pub fn change_percent(change: f64, price: f64) -> f64 {
    if price.abs() <= f64::EPSILON {
        0.0
    } else {
        change / price * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_cents_ties_to_even() {
        assert_eq!(round_cents(0.125), 0.12);
        assert_eq!(round_cents(0.375), 0.38);
        assert_eq!(round_cents(-0.125), -0.12);
        assert_eq!(round_cents(187.4321), 187.43);
    }
}
