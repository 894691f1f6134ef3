use std::time::{Duration, Instant};

use log::debug;

/// Run `work`, returning its result and the wall-clock time it took.
pub fn timed<A>(work: impl FnOnce() -> A) -> (A, Duration) {
    let start = Instant::now();
    let result = work();
    let elapsed = start.elapsed();
    debug!("took {:?}", elapsed);
    (result, elapsed)
}
