use rand::Rng;

use crate::error::AppError;
use crate::model::series::IndexPoint;
use crate::random::uniform;

pub const DEFAULT_INDEX_POINTS: usize = 18;
pub const INDEX_FLOOR: f64 = 500.0;
const STEP_RANGE: f64 = 60.0;

/// Back-fill `points` values ending at `latest`.
///
/// The walk runs backward from the anchor; the final point is then
/// overwritten with `latest` so the chart joins the quoted value exactly.
pub fn generate_index_series<R: Rng + ?Sized>(
    rng: &mut R,
    latest: f64,
    points: usize,
) -> Result<Vec<IndexPoint>, AppError> {
    if points == 0 {
        return Err(AppError::invalid("points", "must be > 0"));
    }
    let last_step = u32::try_from(points - 1)
        .map_err(|_| AppError::invalid("points", format!("{points} exceeds u32 range")))?;

    let mut current = latest;
    let mut out = Vec::with_capacity(points);
    for step in (0..=last_step).rev() {
        out.push(IndexPoint {
            step,
            value: current,
        });
        current = (current + uniform(rng, -STEP_RANGE, STEP_RANGE)).max(INDEX_FLOOR);
    }
    out.reverse();

    if let Some(last) = out.last_mut() {
        last.value = latest;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn steps_ascend_from_zero() {
        let mut rng = StdRng::seed_from_u64(1);
        let series = generate_index_series(&mut rng, 4_200.0, 6).unwrap();
        let steps: Vec<u32> = series.iter().map(|p| p.step).collect();
        assert_eq!(steps, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn back_filled_values_respect_floor() {
        let mut rng = StdRng::seed_from_u64(2);
        let series = generate_index_series(&mut rng, 510.0, 200).unwrap();
        assert!(series.iter().all(|p| p.value >= INDEX_FLOOR));
    }
}
