use std::time::Duration;

/// Errors raised by the local job model.
#[derive(Debug, thiserror::Error)]
pub enum JobError {
    /// Locally checkable input was rejected; the caller must correct it.
    #[error("Job validation failed: {0}")]
    Validation(#[from] garde::Report),

    /// A job map did not have the expected shape (missing key, wrong type, bad timestamp).
    #[error("Malformed job payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Errors crossing the boundary with the service client.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Service request failed: {0}")]
    Request(String),

    #[error("Job {job_id} did not complete within {waited:?}")]
    Timeout { job_id: String, waited: Duration },

    #[error("Job {job_id} has expired; its products are no longer available")]
    Expired { job_id: String },

    #[error(transparent)]
    Job(#[from] JobError),
}

impl ServiceError {
    /// True when the error came from bad local input rather than the service.
    pub fn is_validation(&self) -> bool {
        matches!(self, ServiceError::Job(JobError::Validation(_)))
    }
}
