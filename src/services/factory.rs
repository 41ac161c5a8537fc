//! One constructor per built-in processing mode.
//!
//! Options are an open map: keys the mode does not document are still sent
//! (the service may know them) but each one logs a warning.

use garde::Validate;
use serde_json::json;
use tracing::warn;

use crate::error::JobError;
use crate::models::request::{JobOptions, JobRequest, JobType};

/// Parameter key the scene identifiers are packed under.
pub const GRANULES_KEY: &str = "granules";

#[derive(Debug, Validate)]
struct Granules {
    #[garde(length(min = 1), inner(length(min = 1)))]
    granules: Vec<String>,
}

/// autoRIFT feature tracking between two scenes.
pub fn autorift(
    job_name: &str,
    granule1: &str,
    granule2: &str,
    options: JobOptions,
) -> Result<JobRequest, JobError> {
    build(JobType::Autorift, job_name, &[granule1, granule2], options)
}

/// Radiometric terrain correction of one scene.
pub fn rtc(job_name: &str, granule: &str, options: JobOptions) -> Result<JobRequest, JobError> {
    build(JobType::Rtc, job_name, &[granule], options)
}

/// InSAR processing of a reference/secondary scene pair.
pub fn insar(
    job_name: &str,
    granule1: &str,
    granule2: &str,
    options: JobOptions,
) -> Result<JobRequest, JobError> {
    build(JobType::Insar, job_name, &[granule1, granule2], options)
}

fn build(
    job_type: JobType,
    job_name: &str,
    granules: &[&str],
    options: JobOptions,
) -> Result<JobRequest, JobError> {
    let granules = Granules {
        granules: granules.iter().map(|g| g.to_string()).collect(),
    };
    granules.validate()?;

    let mut job_parameters = JobOptions::new();
    for (key, value) in options {
        if key == GRANULES_KEY {
            warn!(job_type = %job_type, "Ignoring `granules` option; scenes are passed positionally");
            continue;
        }
        if !job_type.is_known_option(&key) {
            warn!(
                job_type = %job_type,
                option = %key,
                "Unsupported option, passing it to the service unchecked"
            );
            metrics::counter!("job_unknown_options_total", "job_type" => job_type.to_string())
                .increment(1);
        }
        job_parameters.insert(key, value);
    }
    job_parameters.insert(GRANULES_KEY.to_string(), json!(granules.granules));

    let request = JobRequest::new(job_type.to_string(), Some(job_name.to_string()), Some(job_parameters))?;
    metrics::counter!("job_requests_built_total", "job_type" => job_type.to_string()).increment(1);
    Ok(request)
}
