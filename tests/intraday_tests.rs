use chrono::{Duration, NaiveDate, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;

use finnews_synth::intraday::{
    generate_price_series, generate_price_series_on, session_points, PRICE_FLOOR,
    SESSION_MINUTES,
};
use finnews_synth::AppError;

fn session_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

#[test]
fn length_follows_interval() {
    let mut rng = StdRng::seed_from_u64(1);
    for interval in [1u32, 5, 7, 15, 30, 60, 390] {
        let series =
            generate_price_series_on(&mut rng, session_date(), "AAPL", None, interval).unwrap();
        assert_eq!(
            series.len(),
            (SESSION_MINUTES / interval) as usize,
            "interval {interval}"
        );
    }
}

#[test]
fn default_interval_yields_78_points() {
    let mut rng = StdRng::seed_from_u64(2);
    let series = generate_price_series(&mut rng, "MSFT", None, 5).unwrap();
    assert_eq!(series.len(), 78);
}

#[test]
fn interval_longer_than_session_is_empty() {
    let mut rng = StdRng::seed_from_u64(3);
    let series = generate_price_series_on(&mut rng, session_date(), "MSFT", None, 391).unwrap();
    assert!(series.is_empty());
}

#[test]
fn zero_interval_is_rejected() {
    let mut rng = StdRng::seed_from_u64(4);
    let err = generate_price_series_on(&mut rng, session_date(), "MSFT", None, 0).unwrap_err();
    assert!(matches!(
        err,
        AppError::InvalidParameter {
            name: "interval_minutes",
            ..
        }
    ));
    assert!(session_points(0).is_err());
}

#[test]
fn prices_floored_and_volumes_non_negative() {
    for seed in 0..40 {
        let mut rng = StdRng::seed_from_u64(seed);
        for bias in [Some("buy"), Some("sell"), Some("whatever"), None] {
            let series =
                generate_price_series_on(&mut rng, session_date(), "TSLA", bias, 5).unwrap();
            assert!(series.iter().all(|p| p.price >= PRICE_FLOOR));
            assert!(series.iter().all(|p| p.price.is_finite()));
        }
    }
}

#[test]
fn previous_close_constant_within_series() {
    let mut rng = StdRng::seed_from_u64(5);
    let series = generate_price_series_on(&mut rng, session_date(), "NVDA", None, 5).unwrap();
    let first = series[0].previous_close;
    assert!(series
        .iter()
        .all(|p| p.previous_close.to_bits() == first.to_bits()));
}

#[test]
fn timestamps_start_at_open_and_advance_by_interval() {
    let mut rng = StdRng::seed_from_u64(6);
    let series = generate_price_series_on(&mut rng, session_date(), "AMZN", None, 15).unwrap();
    let open = Utc.with_ymd_and_hms(2024, 3, 15, 13, 30, 0).unwrap();
    assert_eq!(series[0].timestamp, open);
    for pair in series.windows(2) {
        assert_eq!(pair[1].timestamp - pair[0].timestamp, Duration::minutes(15));
    }
    assert_eq!(
        series.last().unwrap().timestamp,
        open + Duration::minutes(15 * 25)
    );
}

#[test]
fn opening_and_closing_volume_is_boosted() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let series = generate_price_series_on(&mut rng, session_date(), "JPM", None, 5).unwrap();
        assert!(series.first().unwrap().volume >= 112_000);
        assert!(series.last().unwrap().volume >= 112_000);
        let mid = &series[series.len() / 2];
        assert!(mid.volume <= 400_000);
    }
}

#[test]
fn bias_sets_session_direction() {
    for seed in 0..25 {
        let mut rng = StdRng::seed_from_u64(seed);
        let up = generate_price_series_on(&mut rng, session_date(), "META", Some("bullish"), 5)
            .unwrap();
        let last = up.last().unwrap();
        assert!(last.price > last.previous_close, "seed {seed} bullish");

        let down = generate_price_series_on(&mut rng, session_date(), "META", Some("decrease"), 5)
            .unwrap();
        let last = down.last().unwrap();
        assert!(last.price < last.previous_close, "seed {seed} bearish");
    }
}

#[test]
fn same_seed_same_series() {
    let mut a = StdRng::seed_from_u64(77);
    let mut b = StdRng::seed_from_u64(77);
    let xs = generate_price_series_on(&mut a, session_date(), "DIS", Some("buy"), 10).unwrap();
    let ys = generate_price_series_on(&mut b, session_date(), "DIS", Some("buy"), 10).unwrap();
    assert_eq!(xs, ys);
}
