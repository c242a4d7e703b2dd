//! ID generation for tasks.

use chrono::Utc;
use rand::Rng;
use std::sync::atomic::{AtomicI64, Ordering};

static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Generate a unique task ID: millisecond timestamp + small random offset,
/// forced strictly increasing so rapid creation within one session can
/// never collide.
pub fn generate_id() -> i64 {
    let candidate = Utc::now().timestamp_millis() + rand::rng().random_range(0..1_000);

    let mut prev = LAST_ID.load(Ordering::Relaxed);
    loop {
        let next = candidate.max(prev + 1);
        match LAST_ID.compare_exchange_weak(prev, next, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => return next,
            Err(observed) => prev = observed,
        }
    }
}
