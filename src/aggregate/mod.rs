pub mod sentiment;

use std::collections::HashMap;

use serde::Serialize;

use crate::model::article::{Article, Stance};
use crate::model::signal::SignalCard;
use crate::model::snapshot::IndexSnapshot;

pub use sentiment::{
    MarketOverview, MarketPredictions, PredictionData, SentimentAnalysis, SentimentAnalyzer,
    SentimentData, SentimentReport,
};

pub const TOP_TICKERS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StanceCounts {
    pub buy: usize,
    pub hold: usize,
    pub sell: usize,
}

impl StanceCounts {
    pub fn get(&self, stance: Stance) -> usize {
        match stance {
            Stance::Buy => self.buy,
            Stance::Hold => self.hold,
            Stance::Sell => self.sell,
        }
    }

    fn bump(&mut self, stance: Stance) {
        match stance {
            Stance::Buy => self.buy += 1,
            Stance::Hold => self.hold += 1,
            Stance::Sell => self.sell += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.buy + self.hold + self.sell
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SentimentTally {
    pub counts: StanceCounts,
    /// Most-mentioned tickers, ties in first-occurrence order.
    pub top: Vec<(String, usize)>,
}

/// Count stances and rank tickers by mention; the input is left untouched.
pub fn tally_sentiment(articles: &[Article]) -> SentimentTally {
    let mut counts = StanceCounts::default();
    let mut mentions: Vec<(String, usize)> = Vec::new();
    let mut slot: HashMap<&str, usize> = HashMap::new();

    for a in articles {
        counts.bump(a.stance);
        match slot.get(a.ticker.as_str()) {
            Some(&i) => mentions[i].1 += 1,
            None => {
                slot.insert(a.ticker.as_str(), mentions.len());
                mentions.push((a.ticker.clone(), 1));
            }
        }
    }

    // Stable sort keeps first-occurrence order among equal counts.
    mentions.sort_by(|a, b| b.1.cmp(&a.1));
    mentions.truncate(TOP_TICKERS);

    SentimentTally {
        counts,
        top: mentions,
    }
}

/// `count / total * 100` rounded half-to-even; 0 when `total` is 0.
pub fn percentage(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (count as f64 / total as f64 * 100.0).round_ties_even() as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct IndexBreadth {
    pub bullish: usize,
    pub bearish: usize,
    pub mean_change_pct: f64,
}

/// Advancers (`change >= 0`) vs decliners, plus the mean change percentage.
pub fn index_breadth(indices: &[IndexSnapshot]) -> IndexBreadth {
    let mut breadth = IndexBreadth::default();
    let mut sum = 0.0;
    for idx in indices {
        if idx.change >= 0.0 {
            breadth.bullish += 1;
        } else {
            breadth.bearish += 1;
        }
        sum += idx.change_pct;
    }
    if !indices.is_empty() {
        breadth.mean_change_pct = sum / indices.len() as f64;
    }
    breadth
}

/// BUY/HOLD/SELL card counts for the investment heatmap.
pub fn signal_heatmap(cards: &[SignalCard]) -> StanceCounts {
    let mut counts = StanceCounts::default();
    for card in cards {
        counts.bump(card.direction.stance());
    }
    counts
}

/// Share of buy stances in a tally.
pub fn bullish_ratio(counts: &StanceCounts) -> u32 {
    percentage(counts.buy, counts.total())
}
