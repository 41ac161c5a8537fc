use async_trait::async_trait;
use serde_json::Value;

use crate::error::ServiceError;
use crate::models::record::JobRecord;
use crate::models::request::JobRequest;

/// The service client that owns transport and authentication.
///
/// Plain maps cross this seam in both directions; typing them is done here,
/// not by the implementor.
#[async_trait]
pub trait JobService: Send + Sync {
    /// Submit one job payload and return the service's status map for it.
    async fn submit(&self, payload: Value) -> Result<Value, ServiceError>;

    /// Fetch the current status map for a job.
    async fn fetch_job(&self, job_id: &str) -> Result<Value, ServiceError>;
}

/// Submit a validated request and type the service's reply.
pub async fn submit_job<S>(service: &S, request: &JobRequest) -> Result<JobRecord, ServiceError>
where
    S: JobService + ?Sized,
{
    tracing::info!(
        job_type = request.job_type(),
        name = request.job_name().unwrap_or_default(),
        "Submitting job"
    );

    let response = service.submit(request.to_value()).await?;
    let record = JobRecord::from_value(response)?;

    tracing::info!(
        job_id = %record.job_id,
        status = %record.status_code,
        "Job accepted"
    );

    Ok(record)
}

pub async fn fetch_job<S>(service: &S, job_id: &str) -> Result<JobRecord, ServiceError>
where
    S: JobService + ?Sized,
{
    let response = service.fetch_job(job_id).await?;
    Ok(JobRecord::from_value(response)?)
}

/// Fetch a fresh snapshot of a job previously seen.
pub async fn refresh_job<S>(service: &S, record: &JobRecord) -> Result<JobRecord, ServiceError>
where
    S: JobService + ?Sized,
{
    fetch_job(service, &record.job_id).await
}
