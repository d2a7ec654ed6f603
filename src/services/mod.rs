use std::sync::atomic::{AtomicBool, Ordering};

pub mod enrichment;
pub mod providers;
pub mod recommendation;
pub mod results;
pub mod submission;

/// Re-entrancy guard for write-path operations
///
/// A second acquire while the first is alive fails, making duplicate submits a
/// functional no-op rather than a duplicate network call. Released on drop, so
/// early returns and errors clear the flag too.
pub(crate) struct FlightGuard<'a>(&'a AtomicBool);

impl<'a> FlightGuard<'a> {
    pub(crate) fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
            .then_some(Self(flag))
    }
}

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
