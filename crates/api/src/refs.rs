//! Live-record accounting for leak hunting, enabled by the `tag-refs` feature.

#[cfg(feature = "tag-refs")]
use std::sync::atomic::{AtomicUsize, Ordering};

#[cfg(feature = "tag-refs")]
static LIVE_TAGS: AtomicUsize = AtomicUsize::new(0);

#[cfg(feature = "tag-refs")]
pub(crate) fn track_new() {
    LIVE_TAGS.fetch_add(1, Ordering::Relaxed);
}

#[cfg(not(feature = "tag-refs"))]
#[inline(always)]
pub(crate) fn track_new() {}

#[cfg(feature = "tag-refs")]
pub(crate) fn track_drop() {
    LIVE_TAGS.fetch_sub(1, Ordering::Relaxed);
}

/// Number of tag records currently alive in this process.
#[cfg(feature = "tag-refs")]
pub fn live_tags() -> usize {
    LIVE_TAGS.load(Ordering::Relaxed)
}
