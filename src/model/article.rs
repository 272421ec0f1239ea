use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stance {
    Buy,
    Hold,
    Sell,
}

impl Stance {
    pub const ALL: [Stance; 3] = [Stance::Buy, Stance::Hold, Stance::Sell];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Hold => "hold",
            Self::Sell => "sell",
        }
    }
}

/// Synthetic headline attached to one tracked company.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Article {
    pub ticker: String,
    pub title: String,
    pub source: String,
    pub timestamp: DateTime<Utc>,
    pub stance: Stance,
    pub category: String,
    pub summary: String,
    pub impact: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceOutlook {
    Increase,
    Decrease,
    #[default]
    Neutral,
}

/// Article carrying an upstream sentiment score and price call.
///
/// Either field may be missing upstream; both fall back to neutral.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredArticle {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub sentiment: Sentiment,
    #[serde(default)]
    pub stock_prediction: PriceOutlook,
}

impl ScoredArticle {
    pub fn new(
        title: impl Into<String>,
        sentiment: Option<Sentiment>,
        stock_prediction: Option<PriceOutlook>,
    ) -> Self {
        Self {
            title: title.into(),
            sentiment: sentiment.unwrap_or_default(),
            stock_prediction: stock_prediction.unwrap_or_default(),
        }
    }
}
