use tokio::time::{sleep, timeout, Instant};

use crate::config::WaitConfig;
use crate::error::ServiceError;
use crate::models::record::JobRecord;
use crate::services::client::{fetch_job, JobService};

/// Poll the service until the job reaches a terminal status.
///
/// Fetches once immediately, then every `check_every` until the job is
/// complete or `timeout` elapses. Nothing is spawned: dropping the returned
/// future stops polling.
pub async fn wait_for_completion<S>(
    service: &S,
    job_id: &str,
    config: &WaitConfig,
) -> Result<JobRecord, ServiceError>
where
    S: JobService + ?Sized,
{
    let started = Instant::now();
    let limit = config.timeout();
    let check_every = config.check_every();

    let polling = async {
        let mut attempt: u64 = 0;
        loop {
            attempt += 1;
            metrics::counter!("job_polls_total").increment(1);

            let record = fetch_job(service, job_id).await?;
            tracing::debug!(
                job_id,
                attempt,
                status = %record.status_code,
                "Polled job status"
            );

            if record.is_complete() {
                return Ok::<_, ServiceError>(record);
            }
            sleep(check_every).await;
        }
    };

    match timeout(limit, polling).await {
        Ok(Ok(record)) => {
            tracing::info!(
                job_id,
                status = %record.status_code,
                elapsed_secs = started.elapsed().as_secs(),
                "Job reached terminal status"
            );
            Ok(record)
        }
        Ok(Err(e)) => Err(e),
        Err(_) => Err(ServiceError::Timeout {
            job_id: job_id.to_string(),
            waited: limit,
        }),
    }
}

/// Like [`wait_for_completion`], but returns a finished record without a fetch.
pub async fn wait_for_record<S>(
    service: &S,
    record: &JobRecord,
    config: &WaitConfig,
) -> Result<JobRecord, ServiceError>
where
    S: JobService + ?Sized,
{
    if record.is_complete() {
        return Ok(record.clone());
    }
    wait_for_completion(service, &record.job_id, config).await
}
