use serde::Serialize;

use crate::model::article::Stance;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Buy,
    Hold,
    Sell,
}

impl Direction {
    pub const ALL: [Direction; 3] = [Direction::Buy, Direction::Hold, Direction::Sell];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Buy => "BUY",
            Self::Hold => "HOLD",
            Self::Sell => "SELL",
        }
    }

    pub fn stance(self) -> Stance {
        match self {
            Self::Buy => Stance::Buy,
            Self::Hold => Stance::Hold,
            Self::Sell => Stance::Sell,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Horizon {
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "3d")]
    ThreeDays,
    #[serde(rename = "1w")]
    OneWeek,
}

impl Horizon {
    pub const ALL: [Horizon; 3] = [Horizon::OneDay, Horizon::ThreeDays, Horizon::OneWeek];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High];
}

/// Per-company flow card; regenerated wholesale on every refresh.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignalCard {
    pub ticker: String,
    pub company: String,
    pub direction: Direction,
    /// 55..=90
    pub confidence: u32,
    /// 3..=10
    pub signal_count: u32,
    pub summary: String,
    pub horizon: Horizon,
    pub risk: RiskLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentBand {
    pub label: String,
    pub percent: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Watchlist {
    pub name: String,
    pub tickers: Vec<String>,
    pub signals: u32,
}
