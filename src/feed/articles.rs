use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::feed::{CATEGORIES, COMPANIES, IMPACTS};
use crate::model::article::{Article, Stance};
use crate::random::{pick, uniform_int};

pub const DEFAULT_ARTICLE_COUNT: usize = 100;

const ACTIONS: [&str; 8] = [
    "reports record earnings",
    "faces regulatory scrutiny",
    "launches AI division",
    "announces $5B buyback",
    "warns on guidance",
    "inks strategic partnership",
    "secures mega government contract",
    "faces activist investor pressure",
];

const SOURCES: [&str; 4] = ["MarketWatch", "Reuters", "WSJ", "Bloomberg"];

const AGE_SECS_RANGE: (u64, u64) = (5, 1_800);

/// Fabricate `count` headlines published within the last half hour of `now`.
pub fn generate_articles<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    now: DateTime<Utc>,
) -> Vec<Article> {
    let articles: Vec<Article> = (0..count).map(|_| article(rng, now)).collect();
    tracing::debug!(count = articles.len(), "Generated articles");
    articles
}

fn article<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> Article {
    let (ticker, company) = *pick(rng, &COMPANIES);
    let action = pick(rng, &ACTIONS);
    let stance = *pick(rng, &Stance::ALL);
    let age = uniform_int(rng, AGE_SECS_RANGE.0, AGE_SECS_RANGE.1);
    Article {
        ticker: ticker.to_string(),
        title: format!("{company} {action}"),
        source: pick(rng, &SOURCES).to_string(),
        timestamp: now - Duration::seconds(age as i64),
        stance,
        category: pick(rng, &CATEGORIES).to_string(),
        summary: format!(
            "Analysts react to {company}'s update with {} bias.",
            stance.as_str()
        ),
        impact: pick(rng, &IMPACTS).to_string(),
    }
}

/// Distinct impact tags in first-occurrence order.
pub fn trending_topics(articles: &[Article]) -> Vec<String> {
    let mut topics: Vec<String> = Vec::new();
    for a in articles {
        if !topics.iter().any(|t| t == &a.impact) {
            topics.push(a.impact.clone());
        }
    }
    topics
}
