pub mod aggregate;
pub mod chart;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod feed;
pub mod index_series;
pub mod intraday;
pub mod model;
pub mod prediction;
pub mod random;

pub use aggregate::{index_breadth, percentage, tally_sentiment};
pub use error::AppError;
pub use feed::{generate_articles, generate_signal_cards};
pub use index_series::generate_index_series;
pub use intraday::{generate_price_series, generate_price_series_on};
pub use prediction::predict;
pub use random::SharedRng;
