use chrono::{TimeZone, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;

use finnews_synth::cli::{run_cli, split_config_arg};
use finnews_synth::config::{Config, GeneratorConfig};
use finnews_synth::dashboard::{write_json, DashboardFeed};
use finnews_synth::random::SharedRng;
use finnews_synth::AppError;

fn seeded_config() -> Config {
    Config::from_toml("[generator]\nseed = 21\narticle_count = 40\n").unwrap()
}

fn run(args: &[&str]) -> anyhow::Result<String> {
    let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
    let config = seeded_config();
    let rng = SharedRng::new(config.generator.seed);
    let mut out = Vec::new();
    run_cli(&args, &config, &rng, &mut out)?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn dashboard_is_reproducible_for_a_seed() {
    let cfg = GeneratorConfig::default();
    let now = Utc.with_ymd_and_hms(2024, 7, 1, 14, 0, 0).unwrap();
    let a = DashboardFeed::generate(&mut StdRng::seed_from_u64(3), &cfg, now).unwrap();
    let b = DashboardFeed::generate(&mut StdRng::seed_from_u64(3), &cfg, now).unwrap();
    assert_eq!(a, b);
}

#[test]
fn dashboard_panels_are_consistent() {
    let cfg = GeneratorConfig::default();
    let now = Utc.with_ymd_and_hms(2024, 7, 1, 14, 0, 0).unwrap();
    let feed = DashboardFeed::generate(&mut StdRng::seed_from_u64(4), &cfg, now).unwrap();

    assert_eq!(feed.articles.len(), cfg.article_count);
    assert_eq!(feed.sentiment.counts.total(), cfg.article_count);
    assert!(feed.sentiment.top.len() <= 5);
    assert_eq!(feed.heatmap.total(), feed.signal_cards.len());
    assert_eq!(feed.breadth.bullish + feed.breadth.bearish, feed.indices.len());
    assert_eq!(feed.alert_feed.len(), cfg.alert_count);
    assert_eq!(feed.portfolio.len(), cfg.portfolio_days as usize);
    for panel in &feed.indices {
        assert_eq!(panel.series.len(), cfg.index_points);
        assert_eq!(
            panel.series.last().unwrap().value.to_bits(),
            panel.snapshot.value.to_bits()
        );
    }
}

#[test]
fn dashboard_rejects_invalid_config() {
    let cfg = GeneratorConfig {
        index_points: 0,
        ..GeneratorConfig::default()
    };
    let err =
        DashboardFeed::generate(&mut StdRng::seed_from_u64(5), &cfg, Utc::now()).unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
}

#[test]
fn write_json_appends_newline() {
    let mut out = Vec::new();
    write_json(&mut out, &vec![1, 2, 3]).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.ends_with('\n'));
    let parsed: Vec<i32> = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, vec![1, 2, 3]);
}

#[test]
fn cli_series_prints_points() {
    let text = run(&["series", "AAPL", "buy", "30"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    let points = value.as_array().unwrap();
    assert_eq!(points.len(), 13);
    assert!(points[0]["price"].as_f64().unwrap() >= 1.0);
}

#[test]
fn cli_index_reproduces_anchor() {
    let text = run(&["index", "4500.5", "6"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    let points = value.as_array().unwrap();
    assert_eq!(points.len(), 6);
    assert_eq!(points[5]["value"].as_f64().unwrap(), 4500.5);
}

#[test]
fn cli_outlook_and_chart() {
    let outlook: serde_json::Value =
        serde_json::from_str(&run(&["outlook", "NVDA"]).unwrap()).unwrap();
    assert_eq!(outlook["ticker"], "NVDA");
    assert!(outlook["prediction"]["direction"].is_string());

    let chart: serde_json::Value =
        serde_json::from_str(&run(&["chart", "NVDA"]).unwrap()).unwrap();
    assert_eq!(chart["chart_data"].as_array().unwrap().len(), 7);
}

#[test]
fn cli_defaults_to_dashboard() {
    let value: serde_json::Value = serde_json::from_str(&run(&[]).unwrap()).unwrap();
    assert_eq!(value["articles"].as_array().unwrap().len(), 40);
}

#[test]
fn cli_rejects_bad_input() {
    assert!(run(&["bogus"]).is_err());
    assert!(run(&["series"]).is_err());
    assert!(run(&["series", "AAPL", "buy", "0"]).is_err());
    assert!(run(&["index", "abc"]).is_err());
    assert!(run(&["sentiment", "/nonexistent/articles.json"]).is_err());
}

#[test]
fn cli_help_lists_commands() {
    let text = run(&["help"]).unwrap();
    assert!(text.starts_with("Usage: finnews-synth"));
    assert!(text.contains("series <TICKER>"));
}

#[test]
fn split_config_arg_extracts_path() {
    let args: Vec<String> = ["--config", "cfg.toml", "dashboard"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let (path, rest) = split_config_arg(&args).unwrap();
    assert_eq!(path.unwrap().to_str(), Some("cfg.toml"));
    assert_eq!(rest, &args[2..]);

    let missing = vec!["--config".to_string()];
    assert!(split_config_arg(&missing).is_err());
}
