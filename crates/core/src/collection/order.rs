use crate::compare::TagComparator;
use std::borrow::Borrow;
use std::cmp::Ordering;
use tagdex_api::{SortKey, Tag};

/// Sort by `keys` (plain name order when `None`), optionally removing duplicates.
pub fn sort_tags<T: Borrow<Tag>>(tags: &mut Vec<T>, keys: Option<&[SortKey]>, dedup: bool) {
    if tags.is_empty() {
        return;
    }
    let cmp = TagComparator::with_keys(keys);
    stable_sort_by(tags, &mut |a: &T, b: &T| cmp.compare(a.borrow(), b.borrow()));
    if dedup {
        dedup_tags(tags, keys);
    }
}

/// Sort with a caller-supplied ordering; `dedup` reuses it as the equality test.
pub fn sort_tags_by<T, F>(tags: &mut Vec<T>, mut compare: F, dedup: bool)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if tags.is_empty() {
        return;
    }
    stable_sort_by(tags, &mut compare);
    if dedup {
        dedup_tags_by(tags, compare);
    }
}

/// Stable bottom-up merge sort over element indices.
///
/// Unlike `slice::sort_by` it accepts comparators that are not a total order (the
/// arglist key orders differing arglists by line), producing some permutation
/// instead of panicking.
pub(crate) fn stable_sort_by<T, F>(tags: &mut Vec<T>, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = tags.len();
    if len < 2 {
        return;
    }

    let mut order: Vec<usize> = (0..len).collect();
    let mut scratch = vec![0; len];
    let mut width = 1;
    while width < len {
        for start in (0..len).step_by(2 * width) {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            let (mut left, mut right) = (start, mid);
            for slot in &mut scratch[start..end] {
                let take_left = right >= end
                    || (left < mid
                        && compare(&tags[order[right]], &tags[order[left]]) != Ordering::Less);
                if take_left {
                    *slot = order[left];
                    left += 1;
                } else {
                    *slot = order[right];
                    right += 1;
                }
            }
        }
        std::mem::swap(&mut order, &mut scratch);
        width *= 2;
    }

    let mut slots: Vec<Option<T>> = tags.drain(..).map(Some).collect();
    tags.extend(order.iter().filter_map(|&i| slots[i].take()));
}

/// Remove adjacent duplicates from a sorted collection. Of two equal neighbours the
/// earlier one is dropped, so the most recently added duplicate survives.
pub fn dedup_tags<T: Borrow<Tag>>(tags: &mut Vec<T>, keys: Option<&[SortKey]>) {
    let cmp = TagComparator::with_keys(keys);
    dedup_tags_by(tags, |a, b| cmp.compare(a.borrow(), b.borrow()));
}

pub fn dedup_tags_by<T, F>(tags: &mut Vec<T>, mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = tags.len();
    if len < 2 {
        return;
    }
    let keep: Vec<bool> = (0..len)
        .map(|i| i + 1 == len || compare(&tags[i], &tags[i + 1]) != Ordering::Equal)
        .collect();
    let before = tags.len();
    let mut keep = keep.into_iter();
    tags.retain(|_| keep.next().unwrap_or(true));
    tracing::debug!("Dropped {} duplicate tags", before - tags.len());
}
