use super::order::{dedup_tags, sort_tags, stable_sort_by};
use crate::compare::TagComparator;
use std::borrow::Borrow;
use std::cmp::Ordering;
use tagdex_api::{SortKey, Tag};

/// Merge records appended after `orig_len` into the sorted prefix `tags[..orig_len]`.
///
/// The appended records are sorted among themselves and then merged from the back, so
/// the collection is rewritten in place with one scratch copy of the new handles. When
/// an original and a new record compare equal the original is placed first from the
/// back, i.e. after the new one. `orig_len == 0` falls back to a full sort; an
/// `orig_len` covering the whole collection leaves it untouched.
pub fn merge_tags<T>(tags: &mut Vec<T>, orig_len: usize, keys: Option<&[SortKey]>, dedup: bool)
where
    T: Borrow<Tag> + Clone,
{
    if tags.is_empty() || orig_len >= tags.len() {
        return;
    }
    if orig_len == 0 {
        sort_tags(tags, keys, dedup);
        return;
    }

    let cmp = TagComparator::with_keys(keys);
    let compare = |a: &T, b: &T| cmp.compare(a.borrow(), b.borrow());

    let mut fresh = tags[orig_len..].to_vec();
    stable_sort_by(&mut fresh, &mut |a: &T, b: &T| compare(a, b));

    // tags[..remaining] holds unmerged originals, tags[remaining..slot] is free.
    let mut remaining = orig_len;
    let mut slot = tags.len();
    while let Some(newest) = fresh.last() {
        if remaining == 0 {
            let count = fresh.len();
            for (dst, tag) in tags[..count].iter_mut().zip(fresh.drain(..)) {
                *dst = tag;
            }
            break;
        }
        slot -= 1;
        if compare(&tags[remaining - 1], newest) != Ordering::Less {
            tags.swap(slot, remaining - 1);
            remaining -= 1;
        } else if let Some(tag) = fresh.pop() {
            tags[slot] = tag;
        }
    }

    if dedup {
        dedup_tags(tags, keys);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tagdex_api::{EntryAttributes, TagKind, TagRef};

    fn tag(name: &str, line: u64) -> TagRef {
        Tag::entry(
            name,
            TagKind::Variable,
            EntryAttributes {
                line,
                ..Default::default()
            },
        )
        .unwrap()
        .into_ref()
    }

    fn names(tags: &[TagRef]) -> Vec<&str> {
        tags.iter().map(|t| t.name()).collect()
    }

    #[test]
    fn test_merge_single_into_pair() {
        let mut tags = vec![tag("a", 1), tag("c", 2), tag("b", 3)];
        merge_tags(&mut tags, 2, None, false);
        assert_eq!(names(&tags), ["a", "b", "c"]);
    }

    #[test]
    fn test_new_records_before_all_originals() {
        let mut tags = vec![tag("m", 1), tag("n", 2), tag("b", 3), tag("a", 4)];
        merge_tags(&mut tags, 2, None, false);
        assert_eq!(names(&tags), ["a", "b", "m", "n"]);
    }

    #[test]
    fn test_interleaved() {
        let mut tags = vec![
            tag("b", 0),
            tag("d", 0),
            tag("f", 0),
            tag("g", 0),
            tag("e", 0),
            tag("a", 0),
            tag("c", 0),
        ];
        merge_tags(&mut tags, 3, None, false);
        assert_eq!(names(&tags), ["a", "b", "c", "d", "e", "f", "g"]);
    }

    #[test]
    fn test_equal_original_follows_new() {
        let original = tag("x", 1);
        let added = tag("X", 2);
        let mut tags = vec![Arc::clone(&original), Arc::clone(&added)];
        merge_tags(&mut tags, 1, None, false);
        assert!(Arc::ptr_eq(&tags[0], &added));
        assert!(Arc::ptr_eq(&tags[1], &original));

        let mut tags = vec![Arc::clone(&original), Arc::clone(&added)];
        merge_tags(&mut tags, 1, None, true);
        assert_eq!(tags.len(), 1);
        assert!(Arc::ptr_eq(&tags[0], &original));
    }

    #[test]
    fn test_boundaries() {
        let mut tags = vec![tag("c", 0), tag("a", 0), tag("b", 0)];
        merge_tags(&mut tags, 3, None, true);
        assert_eq!(names(&tags), ["c", "a", "b"]);

        merge_tags(&mut tags, 0, None, false);
        assert_eq!(names(&tags), ["a", "b", "c"]);

        let mut empty: Vec<TagRef> = Vec::new();
        merge_tags(&mut empty, 0, None, true);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_merge_with_keys_and_dedup() {
        let keys = [SortKey::Name, SortKey::Line];
        let mut tags = vec![tag("f", 1), tag("f", 5), tag("f", 5), tag("f", 3)];
        merge_tags(&mut tags, 2, Some(&keys[..]), true);
        let lines: Vec<_> = tags.iter().map(|t| t.line()).collect();
        assert_eq!(lines, [1, 3, 5]);
    }

    #[test]
    fn test_no_handles_leak() {
        let tags_in: Vec<TagRef> = ["q", "e", "w", "r", "t"].iter().map(|n| tag(n, 0)).collect();
        let mut tags = tags_in.clone();
        merge_tags(&mut tags, 2, None, false);
        assert!(tags_in.iter().all(|t| Arc::strong_count(t) == 2));
    }
}
