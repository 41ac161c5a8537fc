use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum::EnumString;

use crate::error::JobError;
use crate::models::request::JobOptions;
use crate::models::timestamp;

/// Status code reported by the service for a job.
///
/// Codes this crate does not know are kept verbatim in `Other`. Equality and
/// terminality go by the code string, so `Other("FAILED")` behaves as `Failed`.
#[derive(Debug, Clone, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(from = "String", into = "String")]
pub enum JobStatus {
    Pending,
    Running,
    Succeeded,
    Failed,
    #[strum(default)]
    Other(String),
}

impl JobStatus {
    pub fn as_str(&self) -> &str {
        match self {
            JobStatus::Pending => "PENDING",
            JobStatus::Running => "RUNNING",
            JobStatus::Succeeded => "SUCCEEDED",
            JobStatus::Failed => "FAILED",
            JobStatus::Other(code) => code,
        }
    }

    /// Terminal codes: the job's state will not change again.
    pub fn is_terminal(&self) -> bool {
        matches!(self.as_str(), "SUCCEEDED" | "FAILED")
    }

    /// Same status with a hand-built `Other` folded into its known variant.
    pub fn normalized(self) -> Self {
        String::from(self).into()
    }
}

impl PartialEq for JobStatus {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for JobStatus {}

impl Hash for JobStatus {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for JobStatus {
    fn from(code: String) -> Self {
        code.parse().unwrap_or(JobStatus::Other(code))
    }
}

impl From<JobStatus> for String {
    fn from(status: JobStatus) -> Self {
        match status {
            JobStatus::Other(code) => code,
            known => known.as_str().to_string(),
        }
    }
}

/// A product file produced by a finished job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultFile {
    pub filename: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Descriptor keys not modelled here (e.g. `s3` location).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Snapshot of a job as reported by the service at fetch time.
///
/// Never refreshes itself; fetch a new record to observe later state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    pub job_type: String,
    pub job_id: String,
    #[serde(with = "timestamp")]
    pub request_time: DateTime<Utc>,
    pub status_code: JobStatus,
    pub user_id: String,
    pub job_parameters: JobOptions,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    // Present only once the job reaches a terminal status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<ResultFile>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browse_images: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_images: Option<Vec<String>>,

    #[serde(default, with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub expiration_time: Option<DateTime<Utc>>,
}

impl JobRecord {
    /// Type a job status map received from the service.
    pub fn from_value(value: Value) -> Result<Self, JobError> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn from_json(raw: &str) -> Result<Self, JobError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Immediate check: true iff the status code is FAILED or SUCCEEDED.
    pub fn is_complete(&self) -> bool {
        self.status_code.is_terminal()
    }

    pub fn succeeded(&self) -> bool {
        self.status_code == JobStatus::Succeeded
    }

    pub fn failed(&self) -> bool {
        self.status_code == JobStatus::Failed
    }

    pub fn is_running(&self) -> bool {
        matches!(self.status_code.as_str(), "PENDING" | "RUNNING")
    }

    /// A record without an expiration time never expires.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        match self.expiration_time {
            Some(expiration) => now >= expiration,
            None => false,
        }
    }

    /// Result files in service order; empty until the job has products.
    pub fn files(&self) -> &[ResultFile] {
        self.files.as_deref().unwrap_or_default()
    }

    pub fn file_urls(&self) -> Vec<&str> {
        self.files().iter().map(|file| file.url.as_str()).collect()
    }
}
