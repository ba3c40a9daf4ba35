//! Heap figures for `/api/metrics`, read from jemalloc's own statistics.
//!
//! `allocated` is what the program holds right now, `active` is the pages jemalloc
//! keeps backing those allocations, so `active >= allocated`.

use tikv_jemalloc_ctl::{epoch, stats};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeapStats {
    pub allocated: u64,
    pub active: u64,
}

/// Refreshes jemalloc's cached counters and reads them. Outside the server binary
/// jemalloc isn't the global allocator, both figures are then close to 0.
pub fn heap_stats() -> Result<HeapStats, tikv_jemalloc_ctl::Error> {
    // the stats are a snapshot, bump the epoch so they reflect this moment
    epoch::advance()?;

    let allocated = stats::allocated::read()? as u64;
    let active = stats::active::read()? as u64;

    Ok(HeapStats {
        allocated,
        active: active.max(allocated),
    })
}
