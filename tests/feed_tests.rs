use chrono::{Duration, NaiveDate, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;

use finnews_synth::feed::{
    alert_feed, company_name, company_price_series, company_snapshot, generate_articles,
    generate_index_snapshots, generate_signal_cards, macro_snapshot, portfolio_series,
    risk_alerts, sector_exposure, sentiment_bands, trending_topics, watchlists, COMPANIES,
    IMPACTS,
};
use finnews_synth::model::series::change_percent;

#[test]
fn articles_are_recent_and_reference_tracked_companies() {
    let mut rng = StdRng::seed_from_u64(1);
    let now = Utc.with_ymd_and_hms(2024, 4, 1, 18, 0, 0).unwrap();
    let articles = generate_articles(&mut rng, 100, now);
    assert_eq!(articles.len(), 100);
    for a in &articles {
        let company = company_name(&a.ticker).unwrap();
        assert!(a.title.starts_with(company));
        assert!(a.timestamp <= now - Duration::seconds(5));
        assert!(a.timestamp >= now - Duration::seconds(1_800));
        assert!(a.summary.contains(a.stance.as_str()));
        assert!(IMPACTS.contains(&a.impact.as_str()));
    }
}

#[test]
fn zero_articles_is_empty() {
    let mut rng = StdRng::seed_from_u64(2);
    assert!(generate_articles(&mut rng, 0, Utc::now()).is_empty());
}

#[test]
fn trending_topics_are_distinct_in_first_seen_order() {
    let mut rng = StdRng::seed_from_u64(3);
    let articles = generate_articles(&mut rng, 50, Utc::now());
    let topics = trending_topics(&articles);
    assert!(!topics.is_empty() && topics.len() <= IMPACTS.len());
    assert_eq!(topics[0], articles[0].impact);
    for (i, t) in topics.iter().enumerate() {
        assert!(!topics[i + 1..].contains(t));
    }
}

#[test]
fn one_signal_card_per_company_within_bounds() {
    let mut rng = StdRng::seed_from_u64(4);
    let cards = generate_signal_cards(&mut rng);
    assert_eq!(cards.len(), COMPANIES.len());
    for (card, (ticker, company)) in cards.iter().zip(COMPANIES.iter()) {
        assert_eq!(card.ticker, *ticker);
        assert_eq!(card.company, *company);
        assert!((55..=90).contains(&card.confidence));
        assert!((3..=10).contains(&card.signal_count));
        assert!(card
            .summary
            .contains(&card.direction.as_str().to_ascii_lowercase()));
    }
}

#[test]
fn bands_and_watchlists_within_ranges() {
    let mut rng = StdRng::seed_from_u64(5);
    let bands = sentiment_bands(&mut rng);
    assert_eq!(bands.len(), 3);
    assert!((30..=40).contains(&bands[0].percent));
    assert!((20..=40).contains(&bands[1].percent));
    assert!((20..=30).contains(&bands[2].percent));

    let lists = watchlists(&mut rng);
    assert_eq!(lists.len(), 3);
    assert!(lists.iter().all(|w| w.tickers.len() == 3));
    assert!(lists.iter().all(|w| (5..=10).contains(&w.signals)));
}

#[test]
fn index_snapshots_use_shared_change_formula() {
    let mut rng = StdRng::seed_from_u64(6);
    let snaps = generate_index_snapshots(&mut rng);
    assert_eq!(snaps.len(), 6);
    for s in &snaps {
        assert!((3_000.0..=15_000.0).contains(&s.value));
        assert!((-150.0..=200.0).contains(&s.change));
        assert!((s.change_pct - change_percent(s.change, s.value)).abs() < f64::EPSILON);
    }
}

#[test]
fn market_panels_have_expected_shapes() {
    let mut rng = StdRng::seed_from_u64(7);
    let quotes = macro_snapshot(&mut rng);
    assert_eq!(quotes.len(), 5);
    assert!(quotes.iter().all(|q| (-1.0..=1.0).contains(&q.change_pct)));

    let snap = company_snapshot(&mut rng);
    assert!((40.0..=400.0).contains(&snap.price));
    assert!((0.7..=1.6).contains(&snap.beta));

    let daily = company_price_series(&mut rng, 20);
    assert_eq!(daily.len(), 20);
    assert!(daily.iter().enumerate().all(|(i, d)| d.day == i as u32));
}

#[test]
fn portfolio_series_ends_yesterday() {
    let mut rng = StdRng::seed_from_u64(8);
    let today = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
    let series = portfolio_series(&mut rng, today, 45);
    assert_eq!(series.len(), 45);
    assert_eq!(series[0].date, today - Duration::days(45));
    assert_eq!(series.last().unwrap().date, today - Duration::days(1));
    assert!(series.windows(2).all(|w| w[0].date < w[1].date));
}

#[test]
fn alert_panels() {
    let mut rng = StdRng::seed_from_u64(9);
    let alerts = risk_alerts(&mut rng);
    assert_eq!(alerts.len(), 5);
    assert_eq!(alerts[0].title, "Elevated Alert");
    assert!(alerts.iter().all(|a| (2..=45).contains(&a.minutes_ago)));

    assert_eq!(alert_feed(&mut rng, 10).len(), 10);
    assert!(alert_feed(&mut rng, 0).is_empty());

    let exposures = sector_exposure(&mut rng);
    assert_eq!(exposures.len(), 5);
    assert!(exposures.iter().all(|e| (5.0..=35.0).contains(&e.weight)));
}
