use api::FetchError;
use dioxus::prelude::*;

use crate::t;

fn message(error: &FetchError) -> String {
    match error {
        FetchError::Validation { field } => t!("error-validation", field = (*field)),
        FetchError::NotFound { student_id, program_id } => t!(
            "error-not-found",
            student = student_id.clone(),
            program = program_id.clone()
        ),
        FetchError::Timeout { .. } => t!("error-timeout"),
        FetchError::Network(_) => t!("error-network"),
        FetchError::Protocol(_) => t!("error-protocol"),
    }
}

/// Fetch failure with a retry button for transient errors.
#[component]
pub fn ErrorDisplay(error: FetchError, on_retry: EventHandler<()>) -> Element {
    let text = message(&error);
    let retryable = error.is_retryable();

    rsx! {
        div { class: "status-screen status-screen--error", role: "alert",
            h2 { class: "status-screen__title", {t!("error-title")} }
            p { class: "status-screen__text", "{text}" }
            if retryable {
                button {
                    class: "button button--primary",
                    onclick: move |_| on_retry.call(()),
                    {t!("error-retry")}
                }
            }
        }
    }
}
