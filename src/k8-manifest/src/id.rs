use std::sync::atomic::AtomicI64;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use chrono::Utc;

/// source of resource ids, a change tracking token rather than an identity
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> i64;
}

impl<T> IdGenerator for Arc<T>
where
    T: IdGenerator + ?Sized,
{
    fn next_id(&self) -> i64 {
        self.as_ref().next_id()
    }
}

/// Wall clock time in nanoseconds since the epoch.
///
/// Ids handed out by one generator are strictly increasing: when the clock
/// does not advance between calls (coarse clock, clock stepped back) the
/// previous id plus one is used instead.
#[derive(Debug, Default)]
pub struct WallClockIds {
    last: AtomicI64,
}

impl WallClockIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for WallClockIds {
    fn next_id(&self) -> i64 {
        let now = Utc::now().timestamp_nanos_opt().unwrap_or(i64::MAX);
        let mut last = self.last.load(Ordering::Acquire);
        loop {
            let next = now.max(last.saturating_add(1));
            match self
                .last
                .compare_exchange_weak(last, next, Ordering::AcqRel, Ordering::Acquire)
            {
                Ok(_) => return next,
                Err(actual) => last = actual,
            }
        }
    }
}

/// deterministic ids, mostly for tests
#[derive(Debug)]
pub struct SequenceIds {
    next: AtomicI64,
}

impl SequenceIds {
    pub fn starting_at(first: i64) -> Self {
        Self {
            next: AtomicI64::new(first),
        }
    }
}

impl IdGenerator for SequenceIds {
    fn next_id(&self) -> i64 {
        self.next.fetch_add(1, Ordering::AcqRel)
    }
}
