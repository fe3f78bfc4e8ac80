//! Root providers shared by the web and desktop launchers.

use std::rc::Rc;

use api::{ApiConfig, RecordSource, RecordStore};
use dioxus::prelude::*;
use tracing::info;

use crate::components::fallback_modal::FallbackModal;
use crate::core::{platform, viewport};
use crate::i18n;
use crate::records::use_record_loader_provider;
use crate::session::Session;
use crate::share::ShareUi;

/// Installs store, session, record loader and share state, then renders
/// `children` with the share fallback modal on top.
#[component]
pub fn RecapProvider(children: Element) -> Element {
    i18n::init();

    let config = use_hook(ApiConfig::from_build_env);
    let store = use_context_provider(RecordStore::seeded);
    let source: Rc<dyn RecordSource> = use_hook(|| {
        let source = api::source_for(&config, store.clone());
        info!(
            platform = platform::Platform::current().as_str(),
            source = source.kind(),
            records = store.len(),
            "recap starting"
        );
        source
    });
    let loader = use_record_loader_provider(source, config.timeout_ms);
    let session = Session::provide();
    ShareUi::provide();

    // Memoized so a mode-only change does not wake the loader effect.
    let key = use_memo(move || session.key());
    use_effect(move || {
        if let Some(key) = key() {
            loader.request(key);
        }
    });

    use_effect(viewport::publish_real_vh);

    rsx! {
        {children}
        FallbackModal {}
    }
}
