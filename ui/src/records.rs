//! Root-level record loader.
//!
//! One coroutine owns the load state. Each fetch runs as its own task and
//! reports back with the [`Ticket`] it was issued; results whose ticket is no
//! longer current are dropped.

use std::cell::RefCell;
use std::rc::Rc;

use api::{FetchError, RecordKey, RecordSource, StudentRecord};
use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedSender;
use futures_util::StreamExt;
use tracing::{debug, info};

use crate::core::platform;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Idle,
    Loading(RecordKey),
    Ready(Rc<StudentRecord>),
    Failed { key: RecordKey, error: FetchError },
}

impl LoadState {
    pub fn key(&self) -> Option<RecordKey> {
        match self {
            Self::Idle => None,
            Self::Loading(key) | Self::Failed { key, .. } => Some(key.clone()),
            Self::Ready(record) => Some(record.key()),
        }
    }
}

/// Whether a load request for `key` has to start a fetch. A key that is
/// loading, loaded or failed is left alone; only [`RecordLoader::retry`]
/// fetches a failed key again.
pub fn needs_fetch(state: &LoadState, key: &RecordKey) -> bool {
    match state {
        LoadState::Idle => true,
        LoadState::Loading(k) | LoadState::Failed { key: k, .. } => k != key,
        LoadState::Ready(record) => !key.matches(record),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub key: RecordKey,
    pub seq: u64,
}

/// Issues tickets and remembers which one is current.
#[derive(Debug, Default)]
pub struct FetchTracker {
    seq: u64,
    current: Option<Ticket>,
}

impl FetchTracker {
    pub fn begin(&mut self, key: RecordKey) -> Ticket {
        self.seq += 1;
        let ticket = Ticket { key, seq: self.seq };
        self.current = Some(ticket.clone());
        ticket
    }

    pub fn is_current(&self, ticket: &Ticket) -> bool {
        self.current.as_ref() == Some(ticket)
    }

    /// Consume `ticket` if it is current. Stale tickets return `false`.
    pub fn complete(&mut self, ticket: &Ticket) -> bool {
        if self.is_current(ticket) {
            self.current = None;
            true
        } else {
            false
        }
    }
}

enum LoaderEvent {
    Load(RecordKey),
    Retry,
    Completed {
        ticket: Ticket,
        result: Result<Rc<StudentRecord>, FetchError>,
    },
}

#[derive(Clone, Copy)]
pub struct RecordLoader {
    state: Signal<LoadState>,
    events: Coroutine<LoaderEvent>,
}

impl RecordLoader {
    pub fn state(&self) -> LoadState {
        (self.state)()
    }

    /// Ask for `key`. A no-op when `key` is already loading, loaded or failed.
    pub fn request(&self, key: RecordKey) {
        self.events.send(LoaderEvent::Load(key));
    }

    /// Re-run the last fetch.
    pub fn retry(&self) {
        self.events.send(LoaderEvent::Retry);
    }
}

/// Install the loader at the app root.
pub fn use_record_loader_provider(source: Rc<dyn RecordSource>, timeout_ms: u64) -> RecordLoader {
    let state = use_signal(|| LoadState::Idle);
    let sender_slot: Rc<RefCell<Option<UnboundedSender<LoaderEvent>>>> =
        use_hook(|| Rc::new(RefCell::new(None)));
    let sender_slot_for_loop = sender_slot.clone();

    let events = use_coroutine(move |mut rx: UnboundedReceiver<LoaderEvent>| {
        let sender_slot = sender_slot_for_loop.clone();
        let source = source.clone();
        let mut state = state;
        async move {
            let mut tracker = FetchTracker::default();
            while let Some(event) = rx.next().await {
                match event {
                    LoaderEvent::Load(key) => {
                        if !needs_fetch(&state.peek(), &key) {
                            continue;
                        }
                        let ticket = tracker.begin(key.clone());
                        state.set(LoadState::Loading(key));
                        queue_fetch(sender_slot.clone(), source.clone(), ticket, timeout_ms);
                    }
                    LoaderEvent::Retry => {
                        let Some(key) = state.peek().key() else {
                            continue;
                        };
                        info!(%key, "retrying record fetch");
                        let ticket = tracker.begin(key.clone());
                        state.set(LoadState::Loading(key));
                        queue_fetch(sender_slot.clone(), source.clone(), ticket, timeout_ms);
                    }
                    LoaderEvent::Completed { ticket, result } => {
                        if !tracker.complete(&ticket) {
                            debug!(key = %ticket.key, seq = ticket.seq, "discarding stale fetch result");
                            continue;
                        }
                        match result {
                            Ok(record) => state.set(LoadState::Ready(record)),
                            Err(error) => state.set(LoadState::Failed {
                                key: ticket.key,
                                error,
                            }),
                        }
                    }
                }
            }
        }
    });

    sender_slot.borrow_mut().replace(events.tx());

    use_context_provider(|| RecordLoader { state, events })
}

fn queue_fetch(
    sender_slot: Rc<RefCell<Option<UnboundedSender<LoaderEvent>>>>,
    source: Rc<dyn RecordSource>,
    ticket: Ticket,
    timeout_ms: u64,
) {
    if let Some(sender) = sender_slot.borrow().as_ref().cloned() {
        platform::spawn_future(async move {
            let result = api::fetch_record(source.as_ref(), &ticket.key, timeout_ms).await;
            let _ = sender.unbounded_send(LoaderEvent::Completed { ticket, result });
        });
    }
}

pub fn use_record_loader() -> RecordLoader {
    use_context::<RecordLoader>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_latest_ticket_completes() {
        let mut tracker = FetchTracker::default();
        let first = tracker.begin(RecordKey::new("1937", "A1"));
        let second = tracker.begin(RecordKey::new("4821", "A2"));
        assert!(!tracker.is_current(&first));
        assert!(!tracker.complete(&first));
        assert!(tracker.complete(&second));
        assert!(!tracker.complete(&second));
    }

    #[test]
    fn retry_of_same_key_supersedes_earlier_ticket() {
        let mut tracker = FetchTracker::default();
        let key = RecordKey::new("1937", "A1");
        let first = tracker.begin(key.clone());
        let retry = tracker.begin(key);
        assert_ne!(first, retry);
        assert!(!tracker.complete(&first));
        assert!(tracker.complete(&retry));
    }

    #[test]
    fn mode_change_does_not_refetch_a_settled_key() {
        use crate::session::{ReportMode, SessionChange, SessionState};

        let key = RecordKey::new("1", "A1");
        let mut session = SessionState::default();
        session.apply(SessionChange::View(key.clone()));
        let failed = LoadState::Failed {
            key: key.clone(),
            error: FetchError::NotFound {
                student_id: "1".into(),
                program_id: "A1".into(),
            },
        };
        let loading = LoadState::Loading(key.clone());
        let seeded = Rc::new(api::seed::seed_records().remove(0));
        let ready = LoadState::Ready(seeded.clone());

        for mode in [ReportMode::Yearly, ReportMode::Quarterly] {
            session.apply(SessionChange::InferMode(mode));
            let requested = session.key.clone().expect("key stays set");
            assert!(!needs_fetch(&failed, &requested));
            assert!(!needs_fetch(&loading, &requested));
            assert!(!needs_fetch(&ready, &seeded.key()));
        }
    }

    #[test]
    fn new_key_or_idle_loader_fetches() {
        let key = RecordKey::new("1", "A1");
        assert!(needs_fetch(&LoadState::Idle, &key));
        assert!(needs_fetch(&LoadState::Loading(RecordKey::new("1", "A2")), &key));
        let failed_other = LoadState::Failed {
            key: RecordKey::new("2", "A1"),
            error: FetchError::Timeout { after_ms: 10 },
        };
        assert!(needs_fetch(&failed_other, &key));
    }

    #[test]
    fn load_state_exposes_its_key() {
        let key = RecordKey::new("5704", "A1");
        assert_eq!(LoadState::Idle.key(), None);
        assert_eq!(LoadState::Loading(key.clone()).key(), Some(key.clone()));
        let failed = LoadState::Failed {
            key: key.clone(),
            error: FetchError::Timeout { after_ms: 10 },
        };
        assert_eq!(failed.key(), Some(key));
    }
}
