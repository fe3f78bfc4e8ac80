//! Per-visit session: the report mode and the student being viewed.
//!
//! Views read the session through [`Session`] (a context handle around a
//! signal). Every write goes through [`Session::apply`].

use std::fmt;

use api::RecordKey;
use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::storage;

const MODE_STORAGE_KEY: &str = "recap.report-mode";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ReportMode {
    #[default]
    Quarterly,
    Yearly,
}

impl ReportMode {
    /// Strict parse of a URL segment, ignoring case.
    pub fn parse_segment(segment: &str) -> Option<Self> {
        match segment.trim().to_ascii_lowercase().as_str() {
            "quarterly" => Some(Self::Quarterly),
            "yearly" => Some(Self::Yearly),
            _ => None,
        }
    }

    /// Lenient parse: anything unrecognized is quarterly.
    pub fn from_segment(segment: &str) -> Self {
        Self::parse_segment(segment).unwrap_or_default()
    }

    pub fn segment(self) -> &'static str {
        match self {
            Self::Quarterly => "quarterly",
            Self::Yearly => "yearly",
        }
    }
}

impl fmt::Display for ReportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.segment())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub mode: Option<ReportMode>,
    pub key: Option<RecordKey>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionChange {
    /// Explicit choice on the mode selection screen.
    SelectMode(ReportMode),
    /// Mode decoded from a slide URL.
    InferMode(ReportMode),
    /// Student and program decoded from the URL.
    View(RecordKey),
}

impl SessionState {
    /// Apply `change`, returning whether anything actually changed.
    pub fn apply(&mut self, change: SessionChange) -> bool {
        match change {
            SessionChange::SelectMode(mode) | SessionChange::InferMode(mode) => {
                if self.mode == Some(mode) {
                    return false;
                }
                self.mode = Some(mode);
                true
            }
            SessionChange::View(key) => {
                if self.key.as_ref() == Some(&key) {
                    return false;
                }
                self.key = Some(key);
                true
            }
        }
    }

    pub fn mode_or_default(&self) -> ReportMode {
        self.mode.unwrap_or_default()
    }
}

/// Context handle for the session signal.
#[derive(Clone, Copy, PartialEq)]
pub struct Session {
    state: Signal<SessionState>,
}

impl Session {
    /// Create the session at the app root, restoring a stored mode if any.
    pub fn provide() -> Self {
        use_context_provider(|| {
            let restored = storage::load_json::<ReportMode>(MODE_STORAGE_KEY);
            Session {
                state: Signal::new(SessionState {
                    mode: restored,
                    key: None,
                }),
            }
        })
    }

    pub fn read(&self) -> SessionState {
        (self.state)()
    }

    pub fn mode(&self) -> ReportMode {
        self.state.read().mode_or_default()
    }

    pub fn key(&self) -> Option<RecordKey> {
        self.state.read().key.clone()
    }

    /// The single mutator. Writes only when the change is real, so readers
    /// are not woken for no-ops.
    pub fn apply(&mut self, change: SessionChange) {
        let mut next = self.state.peek().clone();
        let description = format!("{change:?}");
        let persisted_mode = match &change {
            SessionChange::SelectMode(mode) | SessionChange::InferMode(mode) => Some(*mode),
            SessionChange::View(_) => None,
        };
        if !next.apply(change) {
            return;
        }
        debug!(change = %description, "session updated");
        if let Some(mode) = persisted_mode {
            storage::save_json(MODE_STORAGE_KEY, &mode);
        }
        self.state.set(next);
    }
}

pub fn use_session() -> Session {
    use_context::<Session>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_segments_are_case_insensitive() {
        assert_eq!(ReportMode::from_segment("YEARLY"), ReportMode::Yearly);
        assert_eq!(ReportMode::from_segment("Quarterly"), ReportMode::Quarterly);
        assert_eq!(ReportMode::from_segment("monthly"), ReportMode::Quarterly);
        assert_eq!(ReportMode::parse_segment("monthly"), None);
        assert_eq!(ReportMode::Yearly.to_string(), "yearly");
    }

    #[test]
    fn apply_reports_only_real_changes() {
        let mut state = SessionState::default();
        assert_eq!(state.mode_or_default(), ReportMode::Quarterly);
        assert!(state.apply(SessionChange::SelectMode(ReportMode::Yearly)));
        assert!(!state.apply(SessionChange::InferMode(ReportMode::Yearly)));
        let key = RecordKey::new("1937", "A1");
        assert!(state.apply(SessionChange::View(key.clone())));
        assert!(!state.apply(SessionChange::View(key)));
        assert!(state.apply(SessionChange::View(RecordKey::new("1937", "A2"))));
        assert_eq!(state.mode, Some(ReportMode::Yearly));
    }
}
