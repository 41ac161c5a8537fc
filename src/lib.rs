//! HyP3 job models
//!
//! This library provides the client-side representation of jobs submitted to
//! the HyP3 SAR batch-processing service: building and validating job
//! requests, typing the job records the service reports back, and the seam
//! through which a transport-owning service client is driven.

pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use error::{JobError, ServiceError};
pub use models::record::{JobRecord, JobStatus, ResultFile};
pub use models::request::{JobOptions, JobRequest, JobType, SubmissionPayload};
