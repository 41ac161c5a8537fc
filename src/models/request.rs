use garde::Validate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Map, Value};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::error::JobError;

/// Longest job name the service accepts, in characters.
pub const MAX_JOB_NAME_LEN: usize = 20;

/// Open parameter bag sent as `job_parameters`; the service owns its schema.
pub type JobOptions = Map<String, Value>;

/// Processing modes with a dedicated request factory.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr, EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum JobType {
    /// Feature tracking between two optical or SAR scenes.
    Autorift,
    /// Radiometric terrain correction of a single scene.
    Rtc,
    /// Interferometric SAR over a pair of scenes.
    Insar,
}

impl JobType {
    /// Option keys the service documents for this mode, besides `granules`.
    pub fn known_options(&self) -> &'static [&'static str] {
        match self {
            JobType::Autorift => &[],
            JobType::Rtc => &[
                "dem_matching",
                "dem_name",
                "include_dem",
                "include_inc_map",
                "include_rgb",
                "include_scattering_area",
                "radiometry",
                "resolution",
                "scale",
                "speckle_filter",
            ],
            JobType::Insar => &[
                "apply_water_mask",
                "include_displacement_maps",
                "include_dem",
                "include_inc_map",
                "include_look_vectors",
                "include_los_displacement",
                "include_wrapped_phase",
                "looks",
            ],
        }
    }

    pub fn is_known_option(&self, key: &str) -> bool {
        self.known_options().contains(&key)
    }
}

/// A job that has not been submitted yet.
///
/// Fields are private: a value of this type has always passed validation.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct JobRequest {
    #[garde(skip)]
    job_type: String,

    #[garde(length(chars, max = 20))]
    job_name: Option<String>,

    #[garde(skip)]
    job_parameters: JobOptions,
}

impl JobRequest {
    /// Build a request, rejecting names longer than [`MAX_JOB_NAME_LEN`] characters.
    ///
    /// A missing name is valid; missing parameters become an empty map.
    pub fn new(
        job_type: impl Into<String>,
        job_name: Option<String>,
        job_parameters: Option<JobOptions>,
    ) -> Result<Self, JobError> {
        let request = Self {
            job_type: job_type.into(),
            job_name,
            job_parameters: job_parameters.unwrap_or_default(),
        };
        request.validate()?;
        Ok(request)
    }

    pub fn job_type(&self) -> &str {
        &self.job_type
    }

    /// The built-in mode this request targets, if it is one.
    pub fn kind(&self) -> Option<JobType> {
        self.job_type.parse().ok()
    }

    pub fn job_name(&self) -> Option<&str> {
        self.job_name.as_deref()
    }

    pub fn job_parameters(&self) -> &JobOptions {
        &self.job_parameters
    }

    /// Typed submission payload; owns a copy of the parameters.
    pub fn to_payload(&self) -> SubmissionPayload {
        SubmissionPayload {
            job_parameters: self.job_parameters.clone(),
            job_type: self.job_type.clone(),
            name: self.job_name.clone(),
        }
    }

    /// Submission map: `{job_parameters, job_type, name}`.
    pub fn to_value(&self) -> Value {
        json!({
            "job_parameters": self.job_parameters.clone(),
            "job_type": self.job_type,
            "name": self.job_name,
        })
    }

    pub fn from_payload(payload: SubmissionPayload) -> Result<Self, JobError> {
        Self::new(payload.job_type, payload.name, Some(payload.job_parameters))
    }

    /// Rebuild a request from a submission map.
    ///
    /// A missing key is [`JobError::Malformed`]; an over-long name is
    /// [`JobError::Validation`].
    pub fn from_value(value: Value) -> Result<Self, JobError> {
        let payload: SubmissionPayload = serde_json::from_value(value)?;
        Self::from_payload(payload)
    }
}

impl From<&JobRequest> for SubmissionPayload {
    fn from(request: &JobRequest) -> Self {
        request.to_payload()
    }
}

/// Wire form of a job submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub job_parameters: JobOptions,
    pub job_type: String,
    /// Required key; `null` means the job is unnamed.
    #[serde(deserialize_with = "required_nullable")]
    pub name: Option<String>,
}

// Using `deserialize_with` stops serde from defaulting a missing key to `None`.
fn required_nullable<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)
}
