use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PredictionDirection {
    Bullish,
    Bearish,
}

impl PredictionDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bullish => "bullish",
            Self::Bearish => "bearish",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub direction: PredictionDirection,
    /// 65..=90
    pub confidence: u32,
    pub target_price: f64,
    pub timeframe: String,
    pub factors: Vec<String>,
}
