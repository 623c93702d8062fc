use super::lifecycle::Lease;

pub const PROGRESS_START: u8 = 5;
pub const PROGRESS_STEP: u8 = 5;
pub const PROGRESS_MAX: u8 = 100;
pub const PROGRESS_INTERVAL_MS: u32 = 1_200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    Advanced(u8),
    Finished,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgressCounter {
    value: u8,
}

impl ProgressCounter {
    pub fn new() -> Self {
        Self {
            value: PROGRESS_START,
        }
    }

    pub fn value(self) -> u8 {
        self.value
    }

    pub fn is_finished(self) -> bool {
        self.value >= PROGRESS_MAX
    }

    /// Advances by one step, clamped at the maximum. Ticks after the
    /// maximum is reached change nothing.
    pub fn tick(&mut self) -> Tick {
        if self.is_finished() {
            return Tick::Finished;
        }

        self.value = self.value.saturating_add(PROGRESS_STEP).min(PROGRESS_MAX);

        if self.is_finished() {
            Tick::Finished
        } else {
            Tick::Advanced(self.value)
        }
    }
}

impl Default for ProgressCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// One firing of the progress timer. Once the counter finishes, the timer's
/// lease is taken out of `timer` and handed back; the caller releases it.
/// A browser interval cannot be dropped from inside its own callback, so the
/// caller decides when that happens.
pub fn on_tick<T>(
    counter: &mut ProgressCounter,
    timer: &mut Option<Lease<T>>,
) -> (Tick, Option<Lease<T>>) {
    let tick = counter.tick();
    let retired = match tick {
        Tick::Finished => timer.take(),
        Tick::Advanced(_) => None,
    };
    (tick, retired)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::lifecycle::{ResourceKind, ResourceLedger};

    #[test]
    fn reaches_exactly_one_hundred() {
        let mut counter = ProgressCounter::new();
        let mut seen = vec![counter.value()];

        while counter.tick() != Tick::Finished {
            seen.push(counter.value());
        }

        assert_eq!(counter.value(), 100);
        assert_eq!(seen.len(), 19);
        assert!(seen.windows(2).all(|pair| pair[1] == pair[0] + 5));
        assert!(seen.iter().all(|value| *value < 100));
    }

    #[test]
    fn ticks_after_finish_are_ignored() {
        let mut counter = ProgressCounter::new();
        for _ in 0..19 {
            counter.tick();
        }
        assert!(counter.is_finished());

        for _ in 0..10 {
            assert_eq!(counter.tick(), Tick::Finished);
        }
        assert_eq!(counter.value(), PROGRESS_MAX);
    }

    #[test]
    fn finishing_hands_back_the_timer_lease_once() {
        let ledger = ResourceLedger::new();
        let mut counter = ProgressCounter::new();
        let mut timer = Some(ledger.acquire(ResourceKind::Timer, ()));

        for _ in 0..18 {
            let (tick, retired) = on_tick(&mut counter, &mut timer);
            assert!(matches!(tick, Tick::Advanced(_)));
            assert!(retired.is_none());
        }

        let (tick, retired) = on_tick(&mut counter, &mut timer);
        assert_eq!(tick, Tick::Finished);
        assert!(timer.is_none());
        assert_eq!(ledger.live(ResourceKind::Timer), 1, "caller has not released yet");

        drop(retired);
        assert_eq!(ledger.live(ResourceKind::Timer), 0);

        let (tick, retired) = on_tick(&mut counter, &mut timer);
        assert_eq!(tick, Tick::Finished);
        assert!(retired.is_none());
        assert_eq!(counter.value(), PROGRESS_MAX);
    }
}
