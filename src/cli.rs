use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use chrono::Utc;

use crate::aggregate::SentimentAnalyzer;
use crate::chart::StockChart;
use crate::config::Config;
use crate::dashboard::{write_json, DashboardFeed};
use crate::feed;
use crate::index_series::generate_index_series;
use crate::intraday::generate_price_series;
use crate::model::article::ScoredArticle;
use crate::prediction::{stock_data, stock_outlook};
use crate::random::SharedRng;

/// Leading `--config PATH` split off the remaining arguments.
pub fn split_config_arg(args: &[String]) -> Result<(Option<PathBuf>, &[String])> {
    match args.first().map(String::as_str) {
        Some("--config") | Some("-c") => {
            let path = args
                .get(1)
                .ok_or_else(|| anyhow!("`--config` requires a path argument"))?;
            Ok((Some(PathBuf::from(path)), &args[2..]))
        }
        _ => Ok((None, args)),
    }
}

/// Dispatch one command, writing its JSON output to `out`.
pub fn run_cli<W: Write>(
    args: &[String],
    config: &Config,
    rng: &SharedRng,
    mut out: W,
) -> Result<()> {
    let Some(command) = args.first() else {
        return run_dashboard(config, rng, out);
    };
    match command.as_str() {
        "dashboard" => run_dashboard(config, rng, out),
        "series" => {
            let ticker = args
                .get(1)
                .ok_or_else(|| anyhow!("`series` requires a ticker argument"))?;
            let bias = args.get(2).map(String::as_str);
            let interval = match args.get(3) {
                Some(raw) => parse_arg::<u32>("interval", raw)?,
                None => config.generator.interval_minutes,
            };
            let series = rng.with(|r| generate_price_series(r, ticker, bias, interval))??;
            write_json(&mut out, &series)?;
            Ok(())
        }
        "index" => {
            let latest = parse_arg::<f64>(
                "latest",
                args.get(1)
                    .ok_or_else(|| anyhow!("`index` requires a latest value argument"))?,
            )?;
            let points = match args.get(2) {
                Some(raw) => parse_arg::<usize>("points", raw)?,
                None => config.generator.index_points,
            };
            let series = rng.with(|r| generate_index_series(r, latest, points))??;
            write_json(&mut out, &series)?;
            Ok(())
        }
        "outlook" => {
            let ticker = args
                .get(1)
                .ok_or_else(|| anyhow!("`outlook` requires a ticker argument"))?;
            let outlook = rng.with(|r| {
                let articles: Vec<_> =
                    feed::generate_articles(r, config.generator.article_count, Utc::now())
                        .into_iter()
                        .filter(|a| a.ticker.eq_ignore_ascii_case(ticker))
                        .collect();
                stock_outlook(r, ticker, &articles)
            })?;
            write_json(&mut out, &outlook)?;
            Ok(())
        }
        "chart" => {
            let ticker = args
                .get(1)
                .ok_or_else(|| anyhow!("`chart` requires a ticker argument"))?;
            let summary = rng.with(|r| {
                let data = stock_data(r, ticker);
                StockChart::new(
                    ticker.as_str(),
                    data.current_price,
                    data.change,
                    data.change_percent,
                )
                .summary(r, Utc::now().date_naive())
            })?;
            write_json(&mut out, &summary)?;
            Ok(())
        }
        "sentiment" => {
            let path = args
                .get(1)
                .ok_or_else(|| anyhow!("`sentiment` requires a JSON file argument"))?;
            let articles = load_scored_articles(Path::new(path))?;
            let report = SentimentAnalyzer::new(&articles).report(Utc::now());
            write_json(&mut out, &report)?;
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage(&mut out)?;
            Ok(())
        }
        other => bail!("unknown command '{}'; run `help` for usage", other),
    }
}

fn run_dashboard<W: Write>(config: &Config, rng: &SharedRng, mut out: W) -> Result<()> {
    let dashboard =
        rng.with(|r| DashboardFeed::generate(r, &config.generator, Utc::now()))??;
    write_json(&mut out, &dashboard)?;
    Ok(())
}

fn parse_arg<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| anyhow!("invalid {} '{}'", name, raw))
}

/// Read a JSON array of scored articles.
pub fn load_scored_articles(path: &Path) -> Result<Vec<ScoredArticle>> {
    let payload = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&payload)
        .with_context(|| format!("failed to parse scored articles in {}", path.display()))
}

fn print_usage<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "Usage: finnews-synth [--config PATH] <command>")?;
    writeln!(out)?;
    writeln!(out, "Commands:")?;
    writeln!(out, "  dashboard                          full dashboard feed (default)")?;
    writeln!(out, "  series <TICKER> [BIAS] [INTERVAL]  intraday price series")?;
    writeln!(out, "  index <LATEST> [POINTS]            back-filled index series")?;
    writeln!(out, "  outlook <TICKER>                   stock data with prediction")?;
    writeln!(out, "  chart <TICKER>                     hourly chart summary")?;
    writeln!(out, "  sentiment <FILE>                   analyze scored articles (JSON array)")?;
    writeln!(out, "  help                               show this message")?;
    Ok(())
}
