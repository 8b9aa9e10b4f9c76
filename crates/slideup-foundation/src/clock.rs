//! Monotonic event timestamps for hosts that do not stamp their own events.

use std::sync::OnceLock;
use web_time::Instant;

static ORIGIN: OnceLock<Instant> = OnceLock::new();

/// Milliseconds since the first call in this process.
pub fn uptime_millis() -> u64 {
    let origin = ORIGIN.get_or_init(Instant::now);
    origin.elapsed().as_millis() as u64
}
