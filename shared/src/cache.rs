//! Tag-version cache core.
//!
//! The portal's only caching mechanism: each [`ResourceTag`] owns a
//! monotonic version counter. A query records a stamp of the tags it
//! provides when it fetches; a successful mutation bumps every tag it
//! invalidates; a stamp that no longer matches means the cached result is
//! stale and must be refetched before being shown again. No TTL, no manual
//! eviction, no partial invalidation.

use crate::protocol::ResourceTag;

/// Per-tag monotonic versions. Process-wide in the portal, but owned
/// explicitly: only mutation completion calls [`TagVersions::invalidate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagVersions {
    versions: [u64; ResourceTag::COUNT],
}

impl TagVersions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current version of one tag.
    pub fn version(&self, tag: ResourceTag) -> u64 {
        self.versions[tag.index()]
    }

    /// Bump every given tag. Returns whether anything changed, so signal
    /// wrappers can skip redundant notifications on tag-less mutations.
    pub fn invalidate(&mut self, tags: &[ResourceTag]) -> bool {
        for tag in tags {
            self.versions[tag.index()] += 1;
        }
        !tags.is_empty()
    }

    /// Snapshot of a tag set, taken when a query result is cached.
    /// Versions only grow, so the sum changes iff any member tag moved.
    pub fn stamp(&self, tags: &[ResourceTag]) -> u64 {
        tags.iter().map(|tag| self.version(*tag)).sum()
    }

    /// Whether a previously taken stamp is out of date.
    pub fn is_stale(&self, tags: &[ResourceTag], stamp: u64) -> bool {
        self.stamp(tags) != stamp
    }
}

#[cfg(test)]
mod tests;
