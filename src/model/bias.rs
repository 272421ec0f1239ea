use serde::Serialize;

/// Directional hint that skews the trend sign of a generated series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Bias {
    Bullish,
    Bearish,
    #[default]
    Neutral,
}

impl Bias {
    /// Classify a free-form tag. Unrecognized or missing tags are neutral.
    pub fn classify(tag: Option<&str>) -> Self {
        let Some(tag) = tag else {
            return Self::Neutral;
        };
        match tag.trim().to_ascii_lowercase().as_str() {
            "buy" | "bullish" | "increase" => Self::Bullish,
            "sell" | "bearish" | "decrease" => Self::Bearish,
            _ => Self::Neutral,
        }
    }

    /// Trend sign: +1 bullish, -1 bearish, 0 neutral.
    pub fn sign(self) -> f64 {
        match self {
            Self::Bullish => 1.0,
            Self::Bearish => -1.0,
            Self::Neutral => 0.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bullish => "bullish",
            Self::Bearish => "bearish",
            Self::Neutral => "neutral",
        }
    }
}
