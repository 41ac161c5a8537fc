//! Job status maps shaped like the service's responses

use serde_json::{json, Value};

pub const JOB_ID: &str = "27836b79-e5b2-4d8f-932f-659724ea02c3";

/// A job status map with no result products.
pub fn status_payload(job_id: &str, status_code: &str) -> Value {
    json!({
        "job_type": "INSAR",
        "job_id": job_id,
        "request_time": "2023-01-01T00:00:00Z",
        "status_code": status_code,
        "user_id": "u1",
        "name": "ifg",
        "job_parameters": {
            "granules": ["S1_REF", "S1_SEC"],
            "looks": "20x4"
        }
    })
}

/// A finished job with two products expiring at `expiration_time`.
pub fn succeeded_payload(job_id: &str, expiration_time: &str) -> Value {
    let mut payload = status_payload(job_id, "SUCCEEDED");
    payload["expiration_time"] = json!(expiration_time);
    payload["files"] = json!([
        {
            "filename": "S1AB_ifg.zip",
            "url": "https://products.example.com/S1AB_ifg.zip",
            "size": 104857600
        },
        {
            "filename": "S1AB_ifg.log",
            "url": "https://products.example.com/S1AB_ifg.log",
            "size": 2048
        }
    ]);
    payload["browse_images"] = json!(["https://products.example.com/S1AB_ifg.png"]);
    payload["thumbnail_images"] = json!(["https://products.example.com/S1AB_ifg_thumb.png"]);
    payload
}
