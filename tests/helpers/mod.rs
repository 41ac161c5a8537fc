//! Scripted stand-ins for the service client

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use hyp3_jobs::services::client::JobService;
use hyp3_jobs::services::download::FileDownloader;
use hyp3_jobs::{ResultFile, ServiceError};
use serde_json::{json, Value};

use crate::fixtures;

/// Replies to `fetch_job` with a scripted sequence of maps; the last one repeats.
pub struct ScriptedService {
    replies: Mutex<VecDeque<Value>>,
    fetches: AtomicUsize,
    submitted: Mutex<Vec<Value>>,
}

impl ScriptedService {
    pub fn new(replies: Vec<Value>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            fetches: AtomicUsize::new(0),
            submitted: Mutex::new(Vec::new()),
        }
    }

    /// Service whose job moves through the given status codes.
    pub fn with_statuses(codes: &[&str]) -> Self {
        Self::new(
            codes
                .iter()
                .map(|code| fixtures::status_payload(fixtures::JOB_ID, code))
                .collect(),
        )
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn submitted(&self) -> Vec<Value> {
        self.submitted.lock().unwrap().clone()
    }
}

#[async_trait]
impl JobService for ScriptedService {
    async fn submit(&self, payload: Value) -> Result<Value, ServiceError> {
        self.submitted.lock().unwrap().push(payload.clone());
        Ok(json!({
            "job_type": payload["job_type"],
            "job_id": fixtures::JOB_ID,
            "request_time": "2023-01-01T00:00:00Z",
            "status_code": "PENDING",
            "user_id": "u1",
            "name": payload["name"],
            "job_parameters": payload["job_parameters"]
        }))
    }

    async fn fetch_job(&self, _job_id: &str) -> Result<Value, ServiceError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        let mut replies = self.replies.lock().unwrap();
        let reply = if replies.len() > 1 {
            replies.pop_front()
        } else {
            replies.front().cloned()
        };
        reply.ok_or_else(|| ServiceError::Request("no scripted reply".to_string()))
    }
}

/// Service that rejects every call as unauthenticated.
pub struct UnauthenticatedService;

#[async_trait]
impl JobService for UnauthenticatedService {
    async fn submit(&self, _payload: Value) -> Result<Value, ServiceError> {
        Err(ServiceError::Authentication("invalid credentials".to_string()))
    }

    async fn fetch_job(&self, _job_id: &str) -> Result<Value, ServiceError> {
        Err(ServiceError::Authentication("invalid credentials".to_string()))
    }
}

/// Records requested files and reports them written under `dest_dir`.
#[derive(Default)]
pub struct RecordingDownloader {
    requested: Mutex<Vec<String>>,
}

impl RecordingDownloader {
    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl FileDownloader for RecordingDownloader {
    async fn download(&self, file: &ResultFile, dest_dir: &Path) -> Result<PathBuf, ServiceError> {
        self.requested.lock().unwrap().push(file.url.clone());
        Ok(dest_dir.join(&file.filename))
    }
}
