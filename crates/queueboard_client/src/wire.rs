//! Serde boundary for the backend's queue endpoints.
//!
//! Wire field names (`current`, `in queue`, `total_maps`, `num_maps`) are
//! preserved exactly here and nowhere else.

use serde::Deserialize;

use crate::{ApiError, EnqueueReceipt, FailureKind, JobRecord, QueueSnapshot};

#[derive(Debug, Deserialize)]
struct SnapshotWire {
    current: Option<Vec<JobWire>>,
    #[serde(rename = "in queue")]
    in_queue: Option<Vec<JobWire>>,
}

#[derive(Debug, Deserialize)]
struct JobWire {
    username: String,
    user_id: UserIdWire,
    catch_converts: bool,
    #[serde(default)]
    total_maps: Option<u64>,
    #[serde(default)]
    num_maps: Option<u64>,
}

// The backend has served both integer and string ids.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum UserIdWire {
    Number(i64),
    Text(String),
}

impl JobWire {
    fn into_record(self) -> JobRecord {
        JobRecord {
            username: self.username,
            user_id: match self.user_id {
                UserIdWire::Number(id) => id.to_string(),
                UserIdWire::Text(id) => id,
            },
            catch_converts: self.catch_converts,
            total_units: self.total_maps,
            remaining_units: self.num_maps,
        }
    }
}

/// Decode a `GET /fetch/queue` body. A `null` list means the backend is idle
/// and decodes as empty.
pub fn decode_snapshot(body: &str) -> Result<QueueSnapshot, ApiError> {
    let wire: SnapshotWire = serde_json::from_str(body)
        .map_err(|err| ApiError::new(FailureKind::MalformedBody, err.to_string()))?;
    Ok(QueueSnapshot {
        active: wire
            .current
            .unwrap_or_default()
            .into_iter()
            .map(JobWire::into_record)
            .collect(),
        pending: wire
            .in_queue
            .unwrap_or_default()
            .into_iter()
            .map(JobWire::into_record)
            .collect(),
    })
}

#[derive(Debug, Deserialize)]
struct ReceiptWire {
    message: String,
}

/// Decode a `POST /fetch/enqueue_self` body.
pub fn decode_receipt(body: &str) -> Result<EnqueueReceipt, ApiError> {
    let wire: ReceiptWire = serde_json::from_str(body)
        .map_err(|err| ApiError::new(FailureKind::MalformedBody, err.to_string()))?;
    Ok(EnqueueReceipt {
        message: wire.message,
    })
}
