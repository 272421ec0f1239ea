use rand::Rng;

use crate::feed::COMPANIES;
use crate::model::signal::{Direction, Horizon, RiskLevel, SentimentBand, SignalCard, Watchlist};
use crate::random::{pick, uniform_int};

pub const CONFIDENCE_RANGE: (u64, u64) = (55, 90);
pub const SIGNAL_COUNT_RANGE: (u64, u64) = (3, 10);

/// One card per tracked company.
pub fn generate_signal_cards<R: Rng + ?Sized>(rng: &mut R) -> Vec<SignalCard> {
    COMPANIES
        .iter()
        .map(|&(ticker, company)| {
            let direction = *pick(rng, &Direction::ALL);
            SignalCard {
                ticker: ticker.to_string(),
                company: company.to_string(),
                direction,
                confidence: uniform_int(rng, CONFIDENCE_RANGE.0, CONFIDENCE_RANGE.1) as u32,
                signal_count: uniform_int(rng, SIGNAL_COUNT_RANGE.0, SIGNAL_COUNT_RANGE.1)
                    as u32,
                summary: format!(
                    "{company} flow indicates {} bias over next 3d.",
                    direction.as_str().to_ascii_lowercase()
                ),
                horizon: *pick(rng, &Horizon::ALL),
                risk: *pick(rng, &RiskLevel::ALL),
            }
        })
        .collect()
}

/// Positive/negative/neutral share bands shown beside the cards.
///
/// Bands are drawn independently and need not sum to 100.
pub fn sentiment_bands<R: Rng + ?Sized>(rng: &mut R) -> Vec<SentimentBand> {
    [("Positive", 30, 40), ("Negative", 20, 40), ("Neutral", 20, 30)]
        .into_iter()
        .map(|(label, lo, hi)| SentimentBand {
            label: label.to_string(),
            percent: uniform_int(rng, lo, hi) as u32,
        })
        .collect()
}

pub fn watchlists<R: Rng + ?Sized>(rng: &mut R) -> Vec<Watchlist> {
    [
        ("US Megacap", ["AAPL", "MSFT", "AMZN"]),
        ("AI Momentum", ["NVDA", "GOOGL", "META"]),
        ("Macro Risk", ["JPM", "TSLA", "DIS"]),
    ]
    .into_iter()
    .map(|(name, tickers)| Watchlist {
        name: name.to_string(),
        tickers: tickers.iter().map(|t| t.to_string()).collect(),
        signals: uniform_int(rng, 5, 10) as u32,
    })
    .collect()
}
