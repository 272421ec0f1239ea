use rand::Rng;
use serde::Serialize;

use crate::feed::market::{company_price_series, company_snapshot, DEFAULT_COMPANY_DAYS};
use crate::model::article::Article;
use crate::model::prediction::{Prediction, PredictionDirection};
use crate::model::series::{change_percent, DailyPrice};
use crate::model::snapshot::StockSnapshot;
use crate::random::{uniform, uniform_int};

pub const CONFIDENCE_RANGE: (u64, u64) = (65, 90);
/// Observed change is extrapolated this many times over the timeframe.
pub const TARGET_EXTRAPOLATION: f64 = 2.0;
pub const TIMEFRAME: &str = "3 months";
pub const RELATED_ARTICLES: usize = 3;

pub const FACTORS: [&str; 5] = [
    "Technical analysis indicators",
    "Market sentiment analysis",
    "Earnings and financial metrics",
    "Industry sector performance",
    "Economic and market conditions",
];

/// Strictly positive change is bullish; zero change falls to bearish.
// TODO: revisit whether a flat session should read as bullish; kept bearish
// so existing dashboards do not flip.
pub fn direction_for(change_percent: f64) -> PredictionDirection {
    if change_percent > 0.0 {
        PredictionDirection::Bullish
    } else {
        PredictionDirection::Bearish
    }
}

pub fn target_price(current_price: f64, change_percent: f64) -> f64 {
    current_price * (1.0 + (change_percent / 100.0) * TARGET_EXTRAPOLATION)
}

/// Directional call for a quoted snapshot.
///
/// Only the direction depends on the input; confidence is drawn from a fixed
/// range regardless of the size of the move.
pub fn predict<R: Rng + ?Sized>(rng: &mut R, snapshot: &StockSnapshot) -> Prediction {
    let direction = direction_for(snapshot.change_percent);
    let prediction = Prediction {
        direction,
        confidence: uniform_int(rng, CONFIDENCE_RANGE.0, CONFIDENCE_RANGE.1) as u32,
        target_price: target_price(snapshot.current_price, snapshot.change_percent),
        timeframe: TIMEFRAME.to_string(),
        factors: FACTORS.iter().map(|f| f.to_string()).collect(),
    };
    tracing::debug!(
        ticker = %snapshot.ticker,
        direction = direction.as_str(),
        confidence = prediction.confidence,
        "Generated prediction"
    );
    prediction
}

/// Extended stock data for the prediction modal, built on a company snapshot.
pub fn stock_data<R: Rng + ?Sized>(rng: &mut R, ticker: &str) -> StockSnapshot {
    let snap = company_snapshot(rng);
    StockSnapshot {
        ticker: ticker.to_string(),
        current_price: snap.price,
        change: snap.change,
        change_percent: change_percent(snap.change, snap.price),
        beta: snap.beta,
        rsi: uniform(rng, 20.0, 80.0),
        volatility: uniform(rng, 0.1, 0.3),
        volume: (snap.volume * 1_000_000.0) as u64,
        market_cap: snap.market_cap,
        pe_ratio: uniform(rng, 10.0, 40.0),
        fifty_two_week_high: Some(snap.price * 1.1),
        fifty_two_week_low: Some(snap.price * 0.9),
        correlation: uniform(rng, 0.3, 0.9),
        average_volume: Some(uniform_int(rng, 2_000_000, 5_000_000)),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockOutlook {
    pub ticker: String,
    pub stock_data: StockSnapshot,
    pub prediction: Prediction,
    pub related_articles: Vec<Article>,
    pub price_series: Vec<DailyPrice>,
}

/// Everything the stock detail modal shows for one ticker.
///
/// Related articles are the leading entries of `articles`, in order.
pub fn stock_outlook<R: Rng + ?Sized>(
    rng: &mut R,
    ticker: &str,
    articles: &[Article],
) -> StockOutlook {
    let stock_data = stock_data(rng, ticker);
    let prediction = predict(rng, &stock_data);
    StockOutlook {
        ticker: ticker.to_string(),
        related_articles: articles.iter().take(RELATED_ARTICLES).cloned().collect(),
        price_series: company_price_series(rng, DEFAULT_COMPANY_DAYS),
        stock_data,
        prediction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_price_doubles_observed_change() {
        assert!((target_price(100.0, 5.0) - 110.0).abs() < 1e-9);
        assert!((target_price(200.0, -2.5) - 190.0).abs() < 1e-9);
        assert!((target_price(50.0, 0.0) - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn direction_sign_rule() {
        assert_eq!(direction_for(0.01), PredictionDirection::Bullish);
        assert_eq!(direction_for(0.0), PredictionDirection::Bearish);
        assert_eq!(direction_for(-0.0), PredictionDirection::Bearish);
        assert_eq!(direction_for(-3.0), PredictionDirection::Bearish);
    }
}
