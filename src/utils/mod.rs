//! Utility functions and helpers.

use chrono::{DateTime, Utc};

/// Log how long a named phase took.
pub fn log_duration(phase: &str, started: DateTime<Utc>, ended: DateTime<Utc>) {
    let elapsed = ended - started;
    log::info!(
        "{} finished in {}.{:03}s",
        phase,
        elapsed.num_seconds(),
        elapsed.num_milliseconds().rem_euclid(1000)
    );
}

#[cfg(test)]
mod tests {
    use chrono::TimeDelta;

    use super::*;

    #[test]
    fn test_log_duration_accepts_ordered_times() {
        let start = Utc::now();
        let end = start + TimeDelta::milliseconds(1500);
        // Only checks that formatting does not panic.
        log_duration("test phase", start, end);
    }
}
