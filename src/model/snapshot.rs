use serde::Serialize;

use crate::model::series::change_percent;

/// Quoted state of one company as fed to the prediction layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockSnapshot {
    pub ticker: String,
    pub current_price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub beta: f64,
    pub rsi: f64,
    pub volatility: f64,
    pub volume: u64,
    pub market_cap: f64,
    pub pe_ratio: f64,
    pub fifty_two_week_high: Option<f64>,
    pub fifty_two_week_low: Option<f64>,
    pub correlation: f64,
    pub average_volume: Option<u64>,
}

impl StockSnapshot {
    /// Minimal snapshot carrying only the quote fields.
    pub fn from_quote(ticker: impl Into<String>, current_price: f64, change: f64) -> Self {
        Self {
            ticker: ticker.into(),
            current_price,
            change,
            change_percent: change_percent(change, current_price),
            beta: 1.0,
            rsi: 50.0,
            volatility: 0.0,
            volume: 0,
            market_cap: 0.0,
            pe_ratio: 0.0,
            fifty_two_week_high: None,
            fifty_two_week_low: None,
            correlation: 0.0,
            average_volume: None,
        }
    }
}

/// Headline numbers for a company detail panel.
///
/// `volume` is in millions of shares, `market_cap` in billions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompanySnapshot {
    pub price: f64,
    pub change: f64,
    pub volume: f64,
    pub market_cap: f64,
    pub pe: f64,
    pub beta: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexSnapshot {
    pub label: String,
    pub value: f64,
    pub change: f64,
    pub change_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MacroQuote {
    pub asset: String,
    pub value: f64,
    pub change_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectorExposure {
    pub sector: String,
    pub weight: f64,
    pub pnl: f64,
}
