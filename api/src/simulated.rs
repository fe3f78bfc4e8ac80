//! Local stand-in for the remote backend: random latency, then a store lookup.

use std::cell::Cell;
use std::rc::Rc;

use futures::future::LocalBoxFuture;
use rand::Rng;
use tracing::debug;

use crate::error::FetchError;
use crate::record::{RecordKey, StudentRecord};
use crate::source::RecordSource;
use crate::store::RecordStore;
use crate::timing;

#[derive(Debug, Default)]
struct Counters {
    started: Cell<u32>,
    completed: Cell<u32>,
    aborted: Cell<u32>,
}

/// Request counts observed by a [`SimulatedSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequestStats {
    pub started: u32,
    pub completed: u32,
    pub aborted: u32,
}

#[derive(Clone)]
pub struct SimulatedSource {
    store: RecordStore,
    min_delay_ms: u64,
    max_delay_ms: u64,
    counters: Rc<Counters>,
}

impl SimulatedSource {
    pub fn new(store: RecordStore, min_delay_ms: u64, max_delay_ms: u64) -> Self {
        Self {
            store,
            min_delay_ms: min_delay_ms.min(max_delay_ms),
            max_delay_ms: max_delay_ms.max(min_delay_ms),
            counters: Rc::default(),
        }
    }

    pub fn stats(&self) -> RequestStats {
        RequestStats {
            started: self.counters.started.get(),
            completed: self.counters.completed.get(),
            aborted: self.counters.aborted.get(),
        }
    }

    async fn lookup(&self, key: &RecordKey) -> Result<Rc<StudentRecord>, FetchError> {
        let guard = InFlight::start(&self.counters);
        let delay = rand::thread_rng().gen_range(self.min_delay_ms..=self.max_delay_ms);
        debug!(%key, delay_ms = delay, "simulated fetch");
        timing::sleep_ms(delay).await;
        guard.finish();
        self.store.get(key)
    }
}

/// Counts a request as aborted unless `finish` runs before drop.
struct InFlight<'a> {
    counters: &'a Counters,
    done: bool,
}

impl<'a> InFlight<'a> {
    fn start(counters: &'a Counters) -> Self {
        counters.started.set(counters.started.get() + 1);
        Self {
            counters,
            done: false,
        }
    }

    fn finish(mut self) {
        self.done = true;
        self.counters
            .completed
            .set(self.counters.completed.get() + 1);
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.done {
            self.counters.aborted.set(self.counters.aborted.get() + 1);
        }
    }
}

impl RecordSource for SimulatedSource {
    fn kind(&self) -> &'static str {
        "simulated"
    }

    fn fetch<'a>(
        &'a self,
        key: &'a RecordKey,
    ) -> LocalBoxFuture<'a, Result<Rc<StudentRecord>, FetchError>> {
        Box::pin(self.lookup(key))
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn resolves_after_delay() {
        let source = SimulatedSource::new(RecordStore::seeded(), 1_000, 3_000);
        let key = RecordKey::new("4821", "A2");
        let record = source.fetch(&key).await.expect("seed record");
        assert_eq!(record.name, "রাফি আক্তার");
        assert_eq!(
            source.stats(),
            RequestStats {
                started: 1,
                completed: 1,
                aborted: 0
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn unknown_key_is_not_found() {
        let source = SimulatedSource::new(RecordStore::seeded(), 10, 10);
        let err = source
            .fetch(&RecordKey::new("0000", "A9"))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::NotFound { .. }));
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_future_counts_as_abort() {
        let source = SimulatedSource::new(RecordStore::seeded(), 5_000, 5_000);
        let key = RecordKey::new("1937", "A1");
        {
            let mut pending = source.fetch(&key);
            let polled = futures::poll!(&mut pending);
            assert!(polled.is_pending());
        }
        assert_eq!(source.stats().aborted, 1);
        assert_eq!(source.stats().completed, 0);
    }
}
