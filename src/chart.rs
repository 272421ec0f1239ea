use chrono::{Duration, NaiveDate};
use rand::Rng;
use serde::Serialize;

use crate::intraday::session_open;
use crate::model::series::round_cents;
use crate::random::{uniform, uniform_int};

pub const CHART_POINTS: usize = 7;
pub const POSITIVE_COLOR: &str = "#10b981";
pub const NEGATIVE_COLOR: &str = "#ef4444";
const DAY_RANGE: f64 = 0.02;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDataPoint {
    /// Wall-clock label, e.g. `01:30 PM`.
    pub time: String,
    pub price: f64,
    pub volume: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartStats {
    pub days_range_low: f64,
    pub days_range_high: f64,
    pub volume: u64,
    pub avg_volume: u64,
    pub market_cap: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockChartData {
    pub ticker: String,
    pub current_price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub is_positive: bool,
    pub line_color: &'static str,
    pub chart_data: Vec<ChartDataPoint>,
    pub stats: ChartStats,
}

/// Hourly sparkline that drifts from the previous close to the quoted price.
#[derive(Debug, Clone)]
pub struct StockChart {
    ticker: String,
    current_price: f64,
    change: f64,
    change_percent: f64,
}

impl StockChart {
    pub fn new(
        ticker: impl Into<String>,
        current_price: f64,
        change: f64,
        change_percent: f64,
    ) -> Self {
        Self {
            ticker: ticker.into(),
            current_price,
            change,
            change_percent,
        }
    }

    pub fn is_positive(&self) -> bool {
        self.change >= 0.0
    }

    pub fn line_color(&self) -> &'static str {
        if self.is_positive() {
            POSITIVE_COLOR
        } else {
            NEGATIVE_COLOR
        }
    }

    /// Seven hourly points from the session open; the last equals the quote.
    pub fn chart_data<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        session_date: NaiveDate,
    ) -> Vec<ChartDataPoint> {
        let base = self.current_price - self.change;
        let rel_change = if base.abs() <= f64::EPSILON {
            0.0
        } else {
            self.change / base
        };
        let open = session_open(session_date);
        let last = CHART_POINTS - 1;

        (0..CHART_POINTS)
            .map(|i| {
                let volatility = 0.01 + uniform(rng, 0.0, 0.02);
                let trend = rel_change * (i as f64 / last as f64);
                let walk = (uniform(rng, 0.0, 1.0) - 0.5) * volatility * base;
                let price = if i == last {
                    self.current_price
                } else {
                    round_cents(base + trend * base + walk)
                };
                ChartDataPoint {
                    time: (open + Duration::hours(i as i64))
                        .format("%I:%M %p")
                        .to_string(),
                    price,
                    volume: uniform_int(rng, 500_000, 2_500_000),
                }
            })
            .collect()
    }

    pub fn summary<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        session_date: NaiveDate,
    ) -> StockChartData {
        let chart_data = self.chart_data(rng, session_date);
        StockChartData {
            ticker: self.ticker.clone(),
            current_price: self.current_price,
            change: self.change,
            change_percent: self.change_percent,
            is_positive: self.is_positive(),
            line_color: self.line_color(),
            chart_data,
            stats: ChartStats {
                days_range_low: round_cents(self.current_price * (1.0 - DAY_RANGE)),
                days_range_high: round_cents(self.current_price * (1.0 + DAY_RANGE)),
                volume: uniform_int(rng, 1_000_000, 6_000_000),
                avg_volume: uniform_int(rng, 2_000_000, 5_000_000),
                // Quoted in billions at a fixed 10B share count.
                market_cap: (self.current_price * 10.0 * 10.0).round() / 10.0,
            },
        }
    }
}
