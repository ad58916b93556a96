use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

static COUNTER: AtomicU64 = AtomicU64::new(0);

/// Generates a prefixed id unique within this process.
///
/// Wall-clock milliseconds alone can collide under rapid successive calls,
/// so a process-wide monotonic counter is appended.
pub fn generate(prefix: &str) -> String {
    let seq = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{}_{}_{}", prefix, Utc::now().timestamp_millis(), seq)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rapid_generation_never_collides() {
        let mut ids: Vec<_> = (0..1000).map(|_| generate("apt")).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn id_carries_the_prefix() {
        assert!(generate("doctor").starts_with("doctor_"));
    }
}
