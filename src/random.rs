use std::sync::{Arc, Mutex};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::AppError;

/// Uniform draw from the closed interval `[low, high]`.
///
/// Bounds given in reverse order are swapped; equal bounds return `low`
/// without consuming randomness.
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> f64 {
    let (lo, hi) = if low <= high { (low, high) } else { (high, low) };
    if lo == hi {
        return lo;
    }
    rng.random_range(lo..=hi)
}

/// Uniform integer draw from the closed interval `[low, high]`.
pub fn uniform_int<R: Rng + ?Sized>(rng: &mut R, low: u64, high: u64) -> u64 {
    let (lo, hi) = if low <= high { (low, high) } else { (high, low) };
    rng.random_range(lo..=hi)
}

/// Pick one element of a non-empty slice.
pub fn pick<'a, R: Rng + ?Sized, T>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.random_range(0..items.len())]
}

/// Process-wide random source, seeded once and shared by every generator.
///
/// Draws are serialized through a mutex so concurrent callers observe
/// non-interleaved sequences.
#[derive(Debug, Clone)]
pub struct SharedRng {
    inner: Arc<Mutex<StdRng>>,
}

impl SharedRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: Arc::new(Mutex::new(StdRng::seed_from_u64(seed))),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            inner: Arc::new(Mutex::new(StdRng::from_os_rng())),
        }
    }

    /// Build from an optional seed; `None` draws the seed from the OS.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }

    /// Run `f` with exclusive access to the underlying generator.
    pub fn with<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> Result<T, AppError> {
        let mut guard = self.inner.lock().map_err(|_| AppError::RngPoisoned)?;
        Ok(f(&mut *guard))
    }
}
