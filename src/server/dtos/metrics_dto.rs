use serde::{Deserialize, Serialize};

const BYTES_PER_MB: f64 = 1_048_576.0;

/// Resource snapshot for `/api/metrics`, memory figures are whole megabytes
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ResourceSample {
    pub uptime: f64,
    pub memory: MemoryUsage,
    pub environment: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MemoryUsage {
    pub rss: u64,
    pub heap_used: u64,
    pub heap_total: u64,
}

impl MemoryUsage {
    pub fn from_bytes(rss: u64, heap_used: u64, heap_total: u64) -> Self {
        Self {
            rss: to_megabytes(rss),
            heap_used: to_megabytes(heap_used),
            heap_total: to_megabytes(heap_total),
        }
    }
}

pub fn to_megabytes(bytes: u64) -> u64 {
    (bytes as f64 / BYTES_PER_MB).round() as u64
}
