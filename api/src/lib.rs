//! Student record model, engagement scoring, and record fetching for Recap.

pub mod config;
pub mod error;
pub mod fetch;
pub mod record;
pub mod score;
pub mod seed;
pub mod simulated;
pub mod source;
pub mod store;
pub mod synth;
pub mod timing;

use std::rc::Rc;

pub use config::{ApiConfig, SourceMode};
pub use error::FetchError;
pub use fetch::fetch_record;
pub use record::{RecordKey, StudentRecord};
pub use score::{compute_final_score, compute_score_delta, EngagementLevel, ScoreDelta};
pub use simulated::SimulatedSource;
pub use source::{RecordSource, RemoteSource};
pub use store::RecordStore;

/// Build the source selected by `config`, backed by `store` when simulated.
pub fn source_for(config: &ApiConfig, store: RecordStore) -> Rc<dyn RecordSource> {
    match config.mode {
        SourceMode::Remote => Rc::new(RemoteSource::new(config.clone())),
        SourceMode::Simulated => Rc::new(SimulatedSource::new(
            store,
            config.simulated_min_ms,
            config.simulated_max_ms,
        )),
    }
}
