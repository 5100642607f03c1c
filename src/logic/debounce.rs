//! Debounced propagation of the search query.
//!
//! The raw value updates on every keystroke; the settled value is yielded by
//! `poll_at` once the raw value has been stable for the configured delay.
//! Only the most recent pending propagation survives: re-input before the
//! delay elapses restarts the window, nothing is queued.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    raw: String,
    pending_since: Option<Instant>,
    settled: String,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            raw: String::new(),
            pending_since: None,
            settled: String::new(),
        }
    }

    /// Immediate value, for rendering the input box.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Last value that settled and was yielded.
    pub fn settled(&self) -> &str {
        &self.settled
    }

    /// Record a new raw value at `now`, restarting the delay window.
    /// Same-value input is a no-op.
    pub fn input_at(&mut self, value: String, now: Instant) {
        if value == self.raw {
            return;
        }
        self.raw = value;
        self.pending_since = Some(now);
    }

    /// Yield the raw value once the delay has elapsed without further input.
    /// Yields at most once per settled value; a raw value that returned to
    /// the already-settled string yields nothing (no duplicate fetch).
    pub fn poll_at(&mut self, now: Instant) -> Option<String> {
        let since = self.pending_since?;
        if now.duration_since(since) < self.delay {
            return None;
        }
        self.pending_since = None;
        if self.raw == self.settled {
            return None;
        }
        self.settled = self.raw.clone();
        Some(self.settled.clone())
    }

    pub fn input(&mut self, value: String) {
        self.input_at(value, Instant::now());
    }

    pub fn poll(&mut self) -> Option<String> {
        self.poll_at(Instant::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(500);

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_settles_after_delay() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);

        debouncer.input_at("dune".to_string(), t0);
        assert_eq!(debouncer.poll_at(t0 + ms(499)), None);
        assert_eq!(debouncer.poll_at(t0 + ms(500)), Some("dune".to_string()));
        // Yields once, then goes quiet
        assert_eq!(debouncer.poll_at(t0 + ms(501)), None);
    }

    #[test]
    fn test_reinput_restarts_window() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);

        debouncer.input_at("d".to_string(), t0);
        debouncer.input_at("du".to_string(), t0 + ms(300));
        // 500ms after the first input but only 200ms after the last
        assert_eq!(debouncer.poll_at(t0 + ms(500)), None);
        assert_eq!(debouncer.poll_at(t0 + ms(800)), Some("du".to_string()));
    }

    #[test]
    fn test_intermediate_values_never_settle() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);

        for (i, value) in ["d", "du", "dun", "dune"].iter().enumerate() {
            debouncer.input_at(value.to_string(), t0 + ms(i as u64 * 100));
        }
        let settled = debouncer.poll_at(t0 + ms(300 + 500));
        assert_eq!(settled, Some("dune".to_string()));
    }

    #[test]
    fn test_same_value_input_is_noop() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);

        debouncer.input_at("dune".to_string(), t0);
        assert_eq!(debouncer.poll_at(t0 + ms(500)), Some("dune".to_string()));

        // Re-entering the identical raw value schedules nothing
        debouncer.input_at("dune".to_string(), t0 + ms(600));
        assert_eq!(debouncer.poll_at(t0 + ms(1200)), None);
    }

    #[test]
    fn test_returning_to_settled_value_cancels() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);

        debouncer.input_at("dune".to_string(), t0);
        assert_eq!(debouncer.poll_at(t0 + ms(500)), Some("dune".to_string()));

        // Type an extra char, then delete it before the window elapses
        debouncer.input_at("dunes".to_string(), t0 + ms(600));
        debouncer.input_at("dune".to_string(), t0 + ms(700));
        assert_eq!(debouncer.poll_at(t0 + ms(1300)), None);
        assert_eq!(debouncer.settled(), "dune");
    }

    #[test]
    fn test_clearing_settles_to_empty() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);

        debouncer.input_at("dune".to_string(), t0);
        assert_eq!(debouncer.poll_at(t0 + ms(500)), Some("dune".to_string()));

        debouncer.input_at(String::new(), t0 + ms(600));
        assert_eq!(debouncer.poll_at(t0 + ms(1100)), Some(String::new()));
    }
}
