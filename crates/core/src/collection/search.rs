use crate::compare::TagComparator;
use std::borrow::Borrow;
use std::cmp::Ordering;
use tagdex_api::Tag;

/// Find the run of records whose name matches `name`.
///
/// A sorted collection (ordered by name first) is binary searched; otherwise it is
/// scanned from the end. In both cases the hit is widened over every contiguous
/// neighbour with the same name, and the run is returned as a subslice. With `partial`
/// the name only needs to be a prefix. Returns `None` when nothing matches.
pub fn find_tags<'t, T: Borrow<Tag>>(
    tags: &'t [T],
    name: &str,
    partial: bool,
    sorted: bool,
) -> Option<&'t [T]> {
    if tags.is_empty() {
        return None;
    }
    let cmp = TagComparator::by_name().partial(partial);
    let matches = |tag: &T| cmp.compare_name_to(name, tag.borrow()) == Ordering::Equal;

    let hit = if sorted {
        tags.binary_search_by(|probe| cmp.compare_name_to(name, probe.borrow()).reverse())
            .ok()?
    } else {
        tags.iter().rposition(|t| matches(t))?
    };

    let mut first = hit;
    while first > 0 && matches(&tags[first - 1]) {
        first -= 1;
    }
    let mut end = hit + 1;
    while end < tags.len() && matches(&tags[end]) {
        end += 1;
    }
    Some(&tags[first..end])
}
