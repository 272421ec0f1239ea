use std::f64::consts::PI;

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use rand::Rng;

use crate::error::AppError;
use crate::model::bias::Bias;
use crate::model::series::PricePoint;
use crate::random::{uniform, uniform_int};

/// Minutes in one regular trading session.
pub const SESSION_MINUTES: u32 = 390;
pub const DEFAULT_INTERVAL_MINUTES: u32 = 5;
pub const PRICE_FLOOR: f64 = 1.0;

const SESSION_OPEN_HOUR_UTC: u32 = 13;
const SESSION_OPEN_MINUTE_UTC: u32 = 30;

const PREVIOUS_CLOSE_RANGE: (f64, f64) = (40.0, 400.0);
const OPEN_JITTER: f64 = 0.01;
const TREND_RANGE: (f64, f64) = (0.04, 0.12);
const NEUTRAL_TREND: f64 = 0.03;
const BURST_FACTOR_RANGE: (f64, f64) = (2.0, 5.0);
const BURST_DECAY: f64 = 6.0;
const TREND_TAPER: f64 = 0.4;
const OSCILLATION_RANGE: (f64, f64) = (0.02, 0.08);
const SHOCK_RANGE: (f64, f64) = (0.3, 0.9);
const SHOCK_HALF_WIDTH: u32 = 3;
const NOISE: f64 = 0.05;
const VOLUME_RANGE: (u64, u64) = (80_000, 400_000);
const VOLUME_EDGE: f64 = 0.15;
const VOLUME_EDGE_MULTIPLIER: f64 = 1.4;

/// Number of points a session yields at the given interval.
pub fn session_points(interval_minutes: u32) -> Result<usize, AppError> {
    if interval_minutes == 0 {
        return Err(AppError::invalid("interval_minutes", "must be > 0"));
    }
    Ok((SESSION_MINUTES / interval_minutes) as usize)
}

/// 13:30 UTC on `date`.
pub fn session_open(date: NaiveDate) -> DateTime<Utc> {
    let open = NaiveTime::from_hms_opt(SESSION_OPEN_HOUR_UTC, SESSION_OPEN_MINUTE_UTC, 0)
        .unwrap_or(NaiveTime::MIN);
    date.and_time(open).and_utc()
}

/// Generate today's session for `ticker`.
pub fn generate_price_series<R: Rng + ?Sized>(
    rng: &mut R,
    ticker: &str,
    bias: Option<&str>,
    interval_minutes: u32,
) -> Result<Vec<PricePoint>, AppError> {
    generate_price_series_on(rng, Utc::now().date_naive(), ticker, bias, interval_minutes)
}

/// Generate the session opening on `session_date`.
///
/// The walk increment sums a decaying opening burst, a tapering trend, a slow
/// oscillation, one localized shock and uniform noise. Length and timestamps
/// depend only on the interval.
pub fn generate_price_series_on<R: Rng + ?Sized>(
    rng: &mut R,
    session_date: NaiveDate,
    ticker: &str,
    bias: Option<&str>,
    interval_minutes: u32,
) -> Result<Vec<PricePoint>, AppError> {
    let points = session_points(interval_minutes)?;
    let bias = Bias::classify(bias);

    let previous_close = uniform(rng, PREVIOUS_CLOSE_RANGE.0, PREVIOUS_CLOSE_RANGE.1);
    let mut price = previous_close * (1.0 + uniform(rng, -OPEN_JITTER, OPEN_JITTER));
    let shape = SessionShape::draw(rng, bias, points);
    let scale = previous_close / 100.0;

    let open = session_open(session_date);
    let step = Duration::minutes(i64::from(interval_minutes));
    let mut out = Vec::with_capacity(points);
    for i in 0..points {
        let progress = progress(i, points);
        let increment = shape.increment(rng, i, progress) * scale;
        price = step_price(price, increment);
        out.push(PricePoint {
            timestamp: open + step * i as i32,
            price,
            volume: session_volume(rng, progress),
            previous_close,
        });
    }

    tracing::debug!(
        ticker,
        bias = bias.as_str(),
        interval_minutes,
        points = out.len(),
        "Generated intraday series"
    );
    Ok(out)
}

/// Apply one walk increment, clamped at the price floor.
fn step_price(price: f64, increment: f64) -> f64 {
    (price + increment).max(PRICE_FLOOR)
}

fn progress(i: usize, points: usize) -> f64 {
    if points <= 1 {
        0.0
    } else {
        i as f64 / (points - 1) as f64
    }
}

fn session_volume<R: Rng + ?Sized>(rng: &mut R, progress: f64) -> u64 {
    let base = uniform_int(rng, VOLUME_RANGE.0, VOLUME_RANGE.1);
    if progress < VOLUME_EDGE || progress > 1.0 - VOLUME_EDGE {
        (base as f64 * VOLUME_EDGE_MULTIPLIER).round() as u64
    } else {
        base
    }
}

/// Per-series modifiers drawn once before the walk.
#[derive(Debug, Clone, Copy)]
struct SessionShape {
    base_trend: f64,
    morning_burst: f64,
    shock: f64,
    shock_center: f64,
}

impl SessionShape {
    fn draw<R: Rng + ?Sized>(rng: &mut R, bias: Bias, points: usize) -> Self {
        let base_trend = match bias {
            Bias::Neutral => uniform(rng, -NEUTRAL_TREND, NEUTRAL_TREND),
            directed => directed.sign() * uniform(rng, TREND_RANGE.0, TREND_RANGE.1),
        };
        let sign = if base_trend < 0.0 { -1.0 } else { 1.0 };
        let morning_burst =
            sign * base_trend.abs() * uniform(rng, BURST_FACTOR_RANGE.0, BURST_FACTOR_RANGE.1);
        let third = points as f64 / 3.0;
        let shock_center = uniform(rng, third, 2.0 * third);
        let shock = sign * uniform(rng, SHOCK_RANGE.0, SHOCK_RANGE.1);
        Self {
            base_trend,
            morning_burst,
            shock,
            shock_center,
        }
    }

    fn shock_term(&self, i: usize) -> f64 {
        let distance = (i as f64 - self.shock_center).abs();
        let width = f64::from(SHOCK_HALF_WIDTH);
        if distance > width {
            0.0
        } else {
            self.shock * (1.0 - distance / (width + 1.0))
        }
    }

    fn increment<R: Rng + ?Sized>(&self, rng: &mut R, i: usize, progress: f64) -> f64 {
        let burst = self.morning_burst * (-BURST_DECAY * progress).exp();
        let trend = self.base_trend * (1.0 - TREND_TAPER * progress);
        let oscillation = uniform(rng, OSCILLATION_RANGE.0, OSCILLATION_RANGE.1)
            * (3.0 * PI * progress).sin();
        let noise = uniform(rng, -NOISE, NOISE);
        burst + trend + oscillation + self.shock_term(i) + noise
    }
}
