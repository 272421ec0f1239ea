use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::aggregate::percentage;
use crate::model::article::{PriceOutlook, ScoredArticle, Sentiment};

/// Number of upstream news sources the overview advertises.
pub const TRACKED_SOURCES: u32 = 32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentimentData {
    pub count: usize,
    pub percentage: u32,
    pub color: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredictionData {
    pub count: usize,
    pub label: &'static str,
    pub emoji: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentimentAnalysis {
    pub positive: SentimentData,
    pub negative: SentimentData,
    pub neutral: SentimentData,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarketPredictions {
    pub bullish: PredictionData,
    pub bearish: PredictionData,
    pub neutral: PredictionData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarketOverview {
    pub total_articles: usize,
    pub sources: u32,
    pub last_updated: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentimentReport {
    pub sentiment_analysis: SentimentAnalysis,
    pub market_predictions: MarketPredictions,
    pub market_overview: MarketOverview,
}

/// Summarizes scored articles into the news-center sentiment panels.
#[derive(Debug, Clone, Copy)]
pub struct SentimentAnalyzer<'a> {
    articles: &'a [ScoredArticle],
}

impl<'a> SentimentAnalyzer<'a> {
    pub fn new(articles: &'a [ScoredArticle]) -> Self {
        Self { articles }
    }

    pub fn total(&self) -> usize {
        self.articles.len()
    }

    pub fn sentiment_count(&self, sentiment: Sentiment) -> usize {
        self.articles
            .iter()
            .filter(|a| a.sentiment == sentiment)
            .count()
    }

    pub fn prediction_count(&self, outlook: PriceOutlook) -> usize {
        self.articles
            .iter()
            .filter(|a| a.stock_prediction == outlook)
            .count()
    }

    fn sentiment_data(&self, sentiment: Sentiment) -> SentimentData {
        let count = self.sentiment_count(sentiment);
        let (color, label) = match sentiment {
            Sentiment::Positive => ("green", "Positive"),
            Sentiment::Negative => ("red", "Negative"),
            Sentiment::Neutral => ("yellow", "Neutral"),
        };
        SentimentData {
            count,
            percentage: percentage(count, self.total()),
            color,
            label,
        }
    }

    pub fn sentiment_analysis(&self) -> SentimentAnalysis {
        SentimentAnalysis {
            positive: self.sentiment_data(Sentiment::Positive),
            negative: self.sentiment_data(Sentiment::Negative),
            neutral: self.sentiment_data(Sentiment::Neutral),
            total: self.total(),
        }
    }

    pub fn market_predictions(&self) -> MarketPredictions {
        MarketPredictions {
            bullish: PredictionData {
                count: self.prediction_count(PriceOutlook::Increase),
                label: "Bullish",
                emoji: "↗️",
                color: "green",
            },
            bearish: PredictionData {
                count: self.prediction_count(PriceOutlook::Decrease),
                label: "Bearish",
                emoji: "↘️",
                color: "red",
            },
            neutral: PredictionData {
                count: self.prediction_count(PriceOutlook::Neutral),
                label: "Neutral",
                emoji: "➡️",
                color: "gray",
            },
        }
    }

    pub fn market_overview(&self, now: DateTime<Utc>) -> MarketOverview {
        MarketOverview {
            total_articles: self.total(),
            sources: TRACKED_SOURCES,
            last_updated: now.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }

    pub fn report(&self, now: DateTime<Utc>) -> SentimentReport {
        SentimentReport {
            sentiment_analysis: self.sentiment_analysis(),
            market_predictions: self.market_predictions(),
            market_overview: self.market_overview(now),
        }
    }
}
