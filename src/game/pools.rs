use log::{debug, info};
use rand::Rng;

use crate::engine::constants::NUMBER_COUNT;
use crate::game::errors::GameError;
use crate::game::numbers::{SourceNumbers, TARGET_MAX, TARGET_MIN, Target};

pub const LARGE_POOL: [u64; 4] = [25, 50, 75, 100];
pub const SMALL_POOL: [u64; 20] = [1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7, 8, 8, 9, 9, 10, 10];
pub const MAX_LARGE: usize = LARGE_POOL.len();

/// How many copies of `value` the two pools hold together.
pub fn pool_multiplicity(value: u64) -> usize {
    LARGE_POOL
        .iter()
        .chain(SMALL_POOL.iter())
        .filter(|&&tile| tile == value)
        .count()
}

/// # Errors
///
/// Returns an error if `large` is outside `0..=4`.
pub fn validate_large_count(large: i64) -> Result<usize, GameError> {
    usize::try_from(large)
        .ok()
        .filter(|&n| n <= MAX_LARGE)
        .ok_or(GameError::InvalidLargeCount(large))
}

/// Draw `large` tiles from the large pool and the rest from the small pool,
/// without replacement.
///
/// # Errors
///
/// Returns an error if `large` exceeds the large pool.
pub fn draw_numbers<R: Rng + ?Sized>(
    large: usize,
    rng: &mut R,
) -> Result<SourceNumbers, GameError> {
    if large > MAX_LARGE {
        return Err(GameError::InvalidLargeCount(large as i64));
    }

    let mut drawn = Vec::with_capacity(NUMBER_COUNT);
    draw_from(&LARGE_POOL, large, rng, &mut drawn);
    draw_from(&SMALL_POOL, NUMBER_COUNT - large, rng, &mut drawn);

    info!("Drew {} large tiles: {:?}", large, drawn);
    SourceNumbers::from_slice(&drawn)
}

fn draw_from<R: Rng + ?Sized>(pool: &[u64], count: usize, rng: &mut R, drawn: &mut Vec<u64>) {
    let mut remaining = pool.to_vec();
    for _ in 0..count {
        if remaining.is_empty() {
            break;
        }
        let index = rng.random_range(0..remaining.len());
        drawn.push(remaining.remove(index));
    }
}

/// Uniform target in `101..=999`.
pub fn draw_target<R: Rng + ?Sized>(rng: &mut R) -> Target {
    let value = rng.random_range(TARGET_MIN..=TARGET_MAX);
    debug!("Drew target {}", value);
    Target::from_drawn(value)
}
