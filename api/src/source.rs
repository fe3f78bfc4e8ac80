//! Record sources: the remote HTTP backend and the trait both sources share.

use std::rc::Rc;

use futures::future::LocalBoxFuture;
use serde::Deserialize;
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::FetchError;
use crate::record::{RecordKey, StudentRecord};

/// Anything that can resolve a [`RecordKey`] into a record.
///
/// Dropping the returned future abandons the request.
pub trait RecordSource {
    /// Short label for logs.
    fn kind(&self) -> &'static str;

    fn fetch<'a>(
        &'a self,
        key: &'a RecordKey,
    ) -> LocalBoxFuture<'a, Result<Rc<StudentRecord>, FetchError>>;
}

/// `GET {base_url}/{studentId}/{programId}` returning `{success, data, message?}`.
#[derive(Clone)]
pub struct RemoteSource {
    client: reqwest::Client,
    config: ApiConfig,
}

impl RemoteSource {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// `{base}/{student}/{program}`, with each id pushed as one
    /// percent-encoded path segment.
    pub fn url_for(&self, key: &RecordKey) -> Result<reqwest::Url, FetchError> {
        let mut url = reqwest::Url::parse(&self.config.base_url)
            .map_err(|err| FetchError::Protocol(format!("invalid base url: {err}")))?;
        url.path_segments_mut()
            .map_err(|_| FetchError::Protocol("base url cannot take a path".into()))?
            .pop_if_empty()
            .push(&key.student_id)
            .push(&key.program_id);
        Ok(url)
    }

    async fn request(&self, key: &RecordKey) -> Result<Rc<StudentRecord>, FetchError> {
        let url = self.url_for(key)?;
        debug!(%url, "requesting record");
        let response = self
            .client
            .get(url)
            .header("Authorization", &self.config.authorization)
            .header("X-API-Key", &self.config.api_key)
            .header("X-Client-Version", &self.config.client_version)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|err| FetchError::Network(err.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|err| FetchError::Network(err.to_string()))?;
        decode_envelope(status, &body, key).map(Rc::new)
    }
}

impl RecordSource for RemoteSource {
    fn kind(&self) -> &'static str {
        "remote"
    }

    fn fetch<'a>(
        &'a self,
        key: &'a RecordKey,
    ) -> LocalBoxFuture<'a, Result<Rc<StudentRecord>, FetchError>> {
        Box::pin(self.request(key))
    }
}

#[derive(Debug, Deserialize)]
struct Envelope {
    success: bool,
    #[serde(default)]
    data: Option<StudentRecord>,
    #[serde(default)]
    message: Option<String>,
}

/// Map an HTTP status and body onto a record or a [`FetchError`].
pub fn decode_envelope(
    status: u16,
    body: &str,
    key: &RecordKey,
) -> Result<StudentRecord, FetchError> {
    if status == 404 {
        return Err(FetchError::NotFound {
            student_id: key.student_id.clone(),
            program_id: key.program_id.clone(),
        });
    }
    if !(200..300).contains(&status) {
        return Err(FetchError::Protocol(format!("HTTP {status}")));
    }

    let envelope: Envelope = serde_json::from_str(body)
        .map_err(|err| FetchError::Protocol(format!("malformed body: {err}")))?;
    if !envelope.success {
        return Err(FetchError::Protocol(
            envelope
                .message
                .unwrap_or_else(|| "request was not successful".to_string()),
        ));
    }
    envelope
        .data
        .ok_or_else(|| FetchError::Protocol("response carried no data".to_string()))
}
