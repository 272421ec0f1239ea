use chrono::{Duration, NaiveDate};
use rand::Rng;

use crate::model::alert::{AlertFeedItem, AlertStatus, RiskAlert};
use crate::model::series::{round_cents, PortfolioPoint};
use crate::model::signal::RiskLevel;
use crate::model::snapshot::SectorExposure;
use crate::random::{pick, uniform, uniform_int};

pub const DEFAULT_PORTFOLIO_DAYS: u32 = 45;
pub const DEFAULT_ALERT_COUNT: usize = 10;

const PORTFOLIO_START: f64 = 100.0;
const PORTFOLIO_DRIFT: (f64, f64) = (-1.5, 2.2);

const RISK_DESCRIPTIONS: [&str; 5] = [
    "Elevated volatility in AI basket following regulatory rumors.",
    "OPEC meeting signaling tighter supply; watch energy shorts.",
    "ECB minutes suggest hawkish tone; euro-sensitive assets at risk.",
    "Large dispersion between credit spreads and equities.",
    "Options market pricing unusual upside in semiconductors.",
];

const ALERT_TEMPLATES: [(&str, &str); 5] = [
    (
        "Margin call risk",
        "Multiple long positions leveraged >5x in volatile sectors.",
    ),
    (
        "Liquidity stress",
        "Cross-asset spreads widening beyond 2 standard deviations.",
    ),
    (
        "Macro surprise",
        "Upcoming CPI release exceeding consensus by 0.5%.",
    ),
    (
        "Credit dispersion",
        "HY vs IG spread blowout signaled by CDS curves.",
    ),
    ("FX dislocation", "Dollar funding shortage in APAC markets."),
];

const ASSIGNEES: [&str; 3] = ["Ops", "Risk", "PM Team"];

const SECTORS: [&str; 5] = [
    "Technology",
    "Energy",
    "Healthcare",
    "Financials",
    "Consumer",
];

/// Equity curve with upward drift, one point per day ending the day before
/// `today`.
pub fn portfolio_series<R: Rng + ?Sized>(
    rng: &mut R,
    today: NaiveDate,
    days: u32,
) -> Vec<PortfolioPoint> {
    let mut value = PORTFOLIO_START;
    (0..days)
        .map(|i| {
            value += uniform(rng, PORTFOLIO_DRIFT.0, PORTFOLIO_DRIFT.1);
            PortfolioPoint {
                date: today - Duration::days(i64::from(days - i)),
                value: round_cents(value),
            }
        })
        .collect()
}

pub fn sector_exposure<R: Rng + ?Sized>(rng: &mut R) -> Vec<SectorExposure> {
    SECTORS
        .iter()
        .map(|sector| SectorExposure {
            sector: sector.to_string(),
            weight: round_cents(uniform(rng, 5.0, 35.0)),
            pnl: round_cents(uniform(rng, -3.0, 4.0)),
        })
        .collect()
}

/// One alert per canned description; the title is its first word.
pub fn risk_alerts<R: Rng + ?Sized>(rng: &mut R) -> Vec<RiskAlert> {
    RISK_DESCRIPTIONS
        .iter()
        .map(|desc| {
            let first = desc.split_whitespace().next().unwrap_or_default();
            RiskAlert {
                title: format!("{first} Alert"),
                description: desc.to_string(),
                severity: *pick(rng, &RiskLevel::ALL),
                minutes_ago: uniform_int(rng, 2, 45) as u32,
            }
        })
        .collect()
}

pub fn alert_feed<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<AlertFeedItem> {
    (0..count)
        .map(|_| {
            let (title, body) = *pick(rng, &ALERT_TEMPLATES);
            AlertFeedItem {
                title: title.to_string(),
                body: body.to_string(),
                status: *pick(rng, &AlertStatus::ALL),
                assignee: pick(rng, &ASSIGNEES).to_string(),
            }
        })
        .collect()
}
