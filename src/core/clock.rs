use std::time::{Duration, Instant};

/// Monotonic time source for the driver loop.
pub trait Clock {
    fn now(&self) -> Instant;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Recurring deadline checked by polling.
///
/// A poll that comes late fires once and the missed ticks are dropped.
/// The deadline keeps its phase relative to the start. A zero period never
/// fires.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next: Option<Instant>, // None: 周期ゼロ
}

impl Ticker {
    pub fn new(period: Duration, start: Instant) -> Self {
        let next = (!period.is_zero()).then(|| start + period);
        Self { period, next }
    }

    /// `true` if the deadline has passed since the last poll that fired.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(next) = self.next.as_mut() else {
            return false;
        };
        if now < *next {
            return false;
        }
        // 取りこぼした分は捨てて位相だけ合わせる
        let steps = (now - *next).as_nanos() / self.period.as_nanos() + 1;
        let advance = steps * self.period.as_nanos();
        *next += Duration::from_nanos(u64::try_from(advance).unwrap_or(u64::MAX));
        true
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.next
    }
}

/// Frames presented since the last sample.
#[derive(Debug, Default, Clone, Copy)]
pub struct FrameCounter {
    count: u64,
}

impl FrameCounter {
    pub fn tick(&mut self) {
        self.count += 1;
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Returns the count and resets it to zero.
    pub fn sample(&mut self) -> u64 {
        std::mem::take(&mut self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticker_waits_for_period() {
        let start = Instant::now();
        let mut ticker = Ticker::new(Duration::from_secs(1), start);
        assert!(!ticker.poll(start));
        assert!(!ticker.poll(start + Duration::from_millis(999)));
        assert!(ticker.poll(start + Duration::from_secs(1)));
        assert!(!ticker.poll(start + Duration::from_millis(1500)));
        assert!(ticker.poll(start + Duration::from_secs(2)));
    }

    #[test]
    fn test_ticker_drops_missed_ticks_and_keeps_phase() {
        let start = Instant::now();
        let mut ticker = Ticker::new(Duration::from_secs(1), start);
        assert!(ticker.poll(start + Duration::from_millis(3500)));
        assert_eq!(ticker.next_deadline(), Some(start + Duration::from_secs(4)));
        assert!(!ticker.poll(start + Duration::from_millis(3900)));
        assert!(ticker.poll(start + Duration::from_secs(4)));
    }

    #[test]
    fn test_zero_period_never_fires() {
        let start = Instant::now();
        let mut ticker = Ticker::new(Duration::ZERO, start);
        assert_eq!(ticker.next_deadline(), None);
        assert!(!ticker.poll(start));
        assert!(!ticker.poll(start + Duration::from_secs(3600)));
    }

    #[test]
    fn test_ticker_catches_up_after_long_gap() {
        let start = Instant::now();
        let mut ticker = Ticker::new(Duration::from_nanos(1), start);
        assert!(ticker.poll(start + Duration::from_secs(10)));
        assert_eq!(
            ticker.next_deadline(),
            Some(start + Duration::from_secs(10) + Duration::from_nanos(1))
        );
    }

    #[test]
    fn test_frame_counter_resets_on_sample() {
        let mut counter = FrameCounter::default();
        for _ in 0..42 {
            counter.tick();
        }
        assert_eq!(counter.count(), 42);
        assert_eq!(counter.sample(), 42);
        assert_eq!(counter.count(), 0);
        counter.tick();
        assert_eq!(counter.sample(), 1);
    }

    #[test]
    fn test_system_clock_is_monotonic() {
        let clock = SystemClock;
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
