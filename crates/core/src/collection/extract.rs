use std::borrow::Borrow;
use tagdex_api::{KindMask, Tag};

/// Borrow the records whose kind is in `kinds`, preserving order. The result is a view:
/// no handle is cloned.
pub fn extract_tags<T: Borrow<Tag>>(tags: &[T], kinds: KindMask) -> Vec<&Tag> {
    tags.iter()
        .map(Borrow::<Tag>::borrow)
        .filter(|tag| kinds.contains_kind(tag.kind()))
        .collect()
}
