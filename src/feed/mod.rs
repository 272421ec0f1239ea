pub mod articles;
pub mod market;
pub mod portfolio;
pub mod signals;

pub use articles::{generate_articles, trending_topics, DEFAULT_ARTICLE_COUNT};
pub use market::{
    company_price_series, company_snapshot, generate_index_snapshots, macro_snapshot,
};
pub use portfolio::{alert_feed, portfolio_series, risk_alerts, sector_exposure};
pub use signals::{generate_signal_cards, sentiment_bands, watchlists};

/// Companies tracked by every feed, as `(ticker, name)`.
pub const COMPANIES: [(&str, &str); 10] = [
    ("AAPL", "Apple"),
    ("MSFT", "Microsoft"),
    ("AMZN", "Amazon"),
    ("NVDA", "NVIDIA"),
    ("TSLA", "Tesla"),
    ("JPM", "JPMorgan"),
    ("NFLX", "Netflix"),
    ("DIS", "Disney"),
    ("GOOGL", "Alphabet"),
    ("META", "Meta"),
];

pub const CATEGORIES: [&str; 6] = [
    "Markets",
    "Stocks",
    "Crypto",
    "Banking",
    "Commodities",
    "Technology",
];

pub const IMPACTS: [&str; 6] = [
    "Earnings",
    "Macro",
    "Product",
    "Regulation",
    "M&A",
    "Supply Chain",
];

/// Company name for a tracked ticker.
pub fn company_name(ticker: &str) -> Option<&'static str> {
    COMPANIES
        .iter()
        .find(|(t, _)| t.eq_ignore_ascii_case(ticker))
        .map(|(_, name)| *name)
}
