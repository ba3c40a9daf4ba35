use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEGRADED_NOTE: &str = "Database not connected";

/// One entry of `/api/data`. Exactly one of `timestamp` or `note` is set.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SampleRecord {
    pub id: u32,
    pub name: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "super::iso_millis::option"
    )]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl SampleRecord {
    pub fn stamped(id: u32, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            name: format!("Sample Data {id}"),
            timestamp: Some(timestamp),
            note: None,
        }
    }

    pub fn disconnected(id: u32) -> Self {
        Self {
            id,
            name: format!("Sample Data {id}"),
            timestamp: None,
            note: Some(DEGRADED_NOTE.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DataResponse {
    pub records: Vec<SampleRecord>,
    pub degraded: bool,
}
