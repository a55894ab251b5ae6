//! Randomized pacing between actions and accounts.

use std::time::Duration;

use rand::Rng;
use tokio::time::sleep;

use crate::account::Account;

/// Sample a delay in `[min, max]` seconds, inclusive on both ends.
/// `min == max` is the degenerate fixed-delay case.
pub fn sample_delay<R: Rng>(min: u64, max: u64, rng: &mut R) -> u64 {
    rng.gen_range(min..=max)
}

/// Shuffle the processing order in place.
pub fn shuffle_accounts<R: Rng>(accounts: &mut [Account], rng: &mut R) {
    use rand::seq::SliceRandom;
    accounts.shuffle(rng);
}

pub async fn pause_between_actions(min: u64, max: u64) {
    let secs = sample_delay(min, max, &mut rand::thread_rng());
    tracing::info!(secs, "Sleeping between actions");
    sleep(Duration::from_secs(secs)).await;
}

pub async fn pause_between_accounts(min: u64, max: u64) {
    let secs = sample_delay(min, max, &mut rand::thread_rng());
    tracing::info!(secs, "Sleeping between accounts");
    sleep(Duration::from_secs(secs)).await;
}
