use rand::Rng;

use crate::model::series::{change_percent, round_cents, DailyPrice};
use crate::model::snapshot::{CompanySnapshot, IndexSnapshot, MacroQuote};
use crate::random::uniform;

pub const INDEX_LABELS: [&str; 6] = [
    "S&P 500",
    "NASDAQ",
    "Dow Jones",
    "FTSE 100",
    "DAX",
    "Nikkei 225",
];

const INDEX_VALUE_RANGE: (f64, f64) = (3_000.0, 15_000.0);
const INDEX_CHANGE_RANGE: (f64, f64) = (-150.0, 200.0);

pub const DEFAULT_COMPANY_DAYS: u32 = 20;

pub fn generate_index_snapshots<R: Rng + ?Sized>(rng: &mut R) -> Vec<IndexSnapshot> {
    INDEX_LABELS
        .iter()
        .map(|label| {
            let value = round_cents(uniform(rng, INDEX_VALUE_RANGE.0, INDEX_VALUE_RANGE.1));
            let change = round_cents(uniform(rng, INDEX_CHANGE_RANGE.0, INDEX_CHANGE_RANGE.1));
            IndexSnapshot {
                label: label.to_string(),
                value,
                change,
                change_pct: change_percent(change, value),
            }
        })
        .collect()
}

pub fn macro_snapshot<R: Rng + ?Sized>(rng: &mut R) -> Vec<MacroQuote> {
    [
        ("US 10Y", 3.5, 4.5),
        ("Breakevens", 2.0, 2.7),
        ("DXY", 95.0, 105.0),
        ("WTI", 70.0, 90.0),
        ("Gold", 1_800.0, 2_100.0),
    ]
    .into_iter()
    .map(|(asset, lo, hi)| MacroQuote {
        asset: asset.to_string(),
        value: round_cents(uniform(rng, lo, hi)),
        change_pct: round_cents(uniform(rng, -1.0, 1.0)),
    })
    .collect()
}

pub fn company_snapshot<R: Rng + ?Sized>(rng: &mut R) -> CompanySnapshot {
    CompanySnapshot {
        price: round_cents(uniform(rng, 40.0, 400.0)),
        change: round_cents(uniform(rng, -5.0, 5.0)),
        volume: round_cents(uniform(rng, 5.0, 80.0)),
        market_cap: round_cents(uniform(rng, 50.0, 800.0)),
        pe: (uniform(rng, 10.0, 45.0) * 10.0).round() / 10.0,
        beta: round_cents(uniform(rng, 0.7, 1.6)),
    }
}

/// Daily closes for the company detail chart; an unfloored walk.
pub fn company_price_series<R: Rng + ?Sized>(rng: &mut R, days: u32) -> Vec<DailyPrice> {
    let mut base = uniform(rng, 50.0, 300.0);
    (0..days)
        .map(|day| {
            base += uniform(rng, -3.0, 3.0);
            DailyPrice {
                day,
                price: round_cents(base),
            }
        })
        .collect()
}
