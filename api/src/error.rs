use thiserror::Error;

/// Failures surfaced by record fetches.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// A required identifier was blank.
    #[error("missing {field}")]
    Validation { field: &'static str },

    /// No record matches the `(studentId, programId)` pair.
    #[error("no record for student {student_id} in program {program_id}")]
    NotFound {
        student_id: String,
        program_id: String,
    },

    /// No response arrived within the configured bound. The request was dropped.
    #[error("request timed out after {after_ms} ms")]
    Timeout { after_ms: u64 },

    /// Transport failure before a response was read.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered, but not with a usable record.
    #[error("unexpected response: {0}")]
    Protocol(String),
}

impl FetchError {
    /// Whether a retry button makes sense for this failure.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Timeout { .. } | Self::Network(_) | Self::Protocol(_)
        )
    }
}
