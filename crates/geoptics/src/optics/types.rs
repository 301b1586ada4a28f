//! Identifier types for scene entities.
//!
//! Ids are process-unique and assigned at construction. A clone keeps the id of
//! its original, so adding a clone next to the original counts as a duplicate.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

fn next_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SourceId(pub u64);

impl RegionId {
    pub(crate) fn fresh() -> Self {
        Self(next_id())
    }
}

impl SourceId {
    pub(crate) fn fresh() -> Self {
        Self(next_id())
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "region#{}", self.0)
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "source#{}", self.0)
    }
}

/// Address of a ray: its owning source and its position in that source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RayKey {
    pub source: SourceId,
    pub index: usize,
}
