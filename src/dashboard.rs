use std::io::Write;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;

use crate::aggregate::{
    bullish_ratio, index_breadth, signal_heatmap, tally_sentiment, IndexBreadth, SentimentTally,
    StanceCounts,
};
use crate::config::GeneratorConfig;
use crate::error::AppError;
use crate::feed;
use crate::index_series::generate_index_series;
use crate::model::alert::{AlertFeedItem, RiskAlert};
use crate::model::article::Article;
use crate::model::series::{IndexPoint, PortfolioPoint};
use crate::model::signal::{SentimentBand, SignalCard, Watchlist};
use crate::model::snapshot::{IndexSnapshot, MacroQuote, SectorExposure};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexPanel {
    pub snapshot: IndexSnapshot,
    pub series: Vec<IndexPoint>,
}

/// One refresh worth of every dashboard panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardFeed {
    pub generated_at: DateTime<Utc>,
    pub articles: Vec<Article>,
    pub sentiment: SentimentTally,
    pub bullish_ratio: u32,
    pub trending_topics: Vec<String>,
    pub signal_cards: Vec<SignalCard>,
    pub sentiment_bands: Vec<SentimentBand>,
    pub heatmap: StanceCounts,
    pub watchlists: Vec<Watchlist>,
    pub indices: Vec<IndexPanel>,
    pub breadth: IndexBreadth,
    pub risk_alerts: Vec<RiskAlert>,
    pub macro_quotes: Vec<MacroQuote>,
    pub portfolio: Vec<PortfolioPoint>,
    pub sector_exposure: Vec<SectorExposure>,
    pub alert_feed: Vec<AlertFeedItem>,
}

impl DashboardFeed {
    pub fn generate<R: Rng + ?Sized>(
        rng: &mut R,
        cfg: &GeneratorConfig,
        now: DateTime<Utc>,
    ) -> Result<Self, AppError> {
        cfg.validate()?;

        let articles = feed::generate_articles(rng, cfg.article_count, now);
        let sentiment = tally_sentiment(&articles);
        let signal_cards = feed::generate_signal_cards(rng);
        let snapshots = feed::generate_index_snapshots(rng);
        let breadth = index_breadth(&snapshots);

        let mut indices = Vec::with_capacity(snapshots.len());
        for snapshot in snapshots {
            let series = generate_index_series(rng, snapshot.value, cfg.index_points)?;
            indices.push(IndexPanel { snapshot, series });
        }

        let dashboard = Self {
            generated_at: now,
            bullish_ratio: bullish_ratio(&sentiment.counts),
            trending_topics: feed::trending_topics(&articles),
            heatmap: signal_heatmap(&signal_cards),
            sentiment_bands: feed::sentiment_bands(rng),
            watchlists: feed::watchlists(rng),
            risk_alerts: feed::risk_alerts(rng),
            macro_quotes: feed::macro_snapshot(rng),
            portfolio: feed::portfolio_series(rng, now.date_naive(), cfg.portfolio_days),
            sector_exposure: feed::sector_exposure(rng),
            alert_feed: feed::alert_feed(rng, cfg.alert_count),
            articles,
            sentiment,
            signal_cards,
            indices,
            breadth,
        };
        tracing::info!(
            articles = dashboard.articles.len(),
            cards = dashboard.signal_cards.len(),
            indices = dashboard.indices.len(),
            bullish_ratio = dashboard.bullish_ratio,
            "Dashboard feed generated"
        );
        Ok(dashboard)
    }
}

/// Write `value` as pretty JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize>(mut out: W, value: &T) -> Result<(), AppError> {
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}
