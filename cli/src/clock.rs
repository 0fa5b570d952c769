use std::time::{Duration, Instant};

/// Hands out whole elapsed seconds, carrying the remainder over to the next call.
#[derive(Debug)]
pub(crate) struct Stopwatch {
    last: Instant,
}

impl Stopwatch {
    pub(crate) fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Stopwatch whose last full second fell at `last`.
    #[cfg(test)]
    pub(crate) fn started_at(last: Instant) -> Self {
        Self { last }
    }

    pub(crate) fn reset(&mut self) {
        self.last = Instant::now();
    }

    pub(crate) fn take_whole_secs(&mut self) -> u64 {
        let secs = self.last.elapsed().as_secs();
        self.last += Duration::from_secs(secs);
        secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_the_remainder() {
        let mut stopwatch = Stopwatch::started_at(Instant::now() - Duration::from_millis(3500));

        assert_eq!(stopwatch.take_whole_secs(), 3);
        assert_eq!(stopwatch.take_whole_secs(), 0);
        assert!(stopwatch.last.elapsed() >= Duration::from_millis(500));
    }

    #[test]
    fn reset_drops_elapsed_time() {
        let mut stopwatch = Stopwatch::started_at(Instant::now() - Duration::from_secs(10));

        stopwatch.reset();

        assert_eq!(stopwatch.take_whole_secs(), 0);
    }
}
