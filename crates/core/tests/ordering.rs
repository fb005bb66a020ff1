//! Ordering properties of sort, merge, dedup and search.

use proptest::prelude::*;
use std::cmp::Ordering;
use std::sync::Arc;
use tagdex_api::{EntryAttributes, SortKey, Tag, TagKind, TagRef};
use tagdex_core::{TagComparator, dedup_tags, find_tags, merge_tags, sort_tags};

fn tag(name: &str) -> TagRef {
    Tag::entry(name, TagKind::Variable, EntryAttributes::default())
        .unwrap()
        .into_ref()
}

fn arb_tag() -> impl Strategy<Value = TagRef> {
    (
        "[a-cA-C]{1,3}( ?\\[[0-9]\\])?",
        proptest::sample::select(vec![
            TagKind::Class,
            TagKind::Function,
            TagKind::Prototype,
            TagKind::Variable,
        ]),
        0u64..6,
        proptest::option::of("[a-b]{0,2}"),
        proptest::option::of("[a-b]{0,2}"),
        proptest::option::of("\\([a-c]?\\)"),
    )
        .prop_map(|(name, kind, line, scope, var_type, arglist)| {
            Tag::entry(
                name,
                kind,
                EntryAttributes {
                    line,
                    scope,
                    var_type,
                    arglist,
                    ..Default::default()
                },
            )
            .unwrap()
            .into_ref()
        })
}

fn arb_tags() -> impl Strategy<Value = Vec<TagRef>> {
    prop::collection::vec(arb_tag(), 0..40)
}

const ORDER_KEYS: [SortKey; 6] = [
    SortKey::Name,
    SortKey::Kind,
    SortKey::File,
    SortKey::Scope,
    SortKey::VarType,
    SortKey::Line,
];

fn key_lists(pool: Vec<SortKey>) -> impl Strategy<Value = Option<Vec<SortKey>>> {
    proptest::option::of(prop::collection::vec(proptest::sample::select(pool), 0..4))
}

/// Keys forming a total order. `Arglist` is left out: differing arglists are
/// ordered by line, which is not transitive.
fn arb_keys() -> impl Strategy<Value = Option<Vec<SortKey>>> {
    key_lists(ORDER_KEYS.to_vec())
}

fn arb_any_keys() -> impl Strategy<Value = Option<Vec<SortKey>>> {
    let mut pool = ORDER_KEYS.to_vec();
    pool.push(SortKey::Arglist);
    pool.push(SortKey::Arglist);
    key_lists(pool)
}

fn addrs(tags: &[TagRef]) -> Vec<usize> {
    let mut addrs: Vec<_> = tags.iter().map(|t| Arc::as_ptr(t) as usize).collect();
    addrs.sort_unstable();
    addrs
}

#[test]
fn test_merge_scenario() {
    let mut tags = vec![tag("a"), tag("c"), tag("b")];
    merge_tags(&mut tags, 2, None, false);
    let names: Vec<_> = tags.iter().map(|t| t.name()).collect();
    assert_eq!(names, ["a", "b", "c"]);
}

#[test]
fn test_case_and_suffix_equality() {
    let cmp = TagComparator::by_name();
    assert_eq!(cmp.compare(&tag("Item"), &tag("item")), Ordering::Equal);
    assert_eq!(cmp.compare(&tag("Item[10]"), &tag("Item")), Ordering::Equal);
}

proptest! {
    #[test]
    fn prop_sort_is_ordered(mut tags in arb_tags(), keys in arb_keys()) {
        let keys = keys.as_deref();
        sort_tags(&mut tags, keys, false);
        let cmp = TagComparator::with_keys(keys);
        for pair in tags.windows(2) {
            prop_assert_ne!(cmp.compare(&pair[0], &pair[1]), Ordering::Greater);
        }
    }

    #[test]
    fn prop_merge_matches_sort(
        mut prefix in arb_tags(),
        suffix in arb_tags(),
        keys in arb_keys(),
    ) {
        let keys = keys.as_deref();
        sort_tags(&mut prefix, keys, false);
        let orig_len = prefix.len();
        let mut merged = prefix;
        merged.extend(suffix);
        let mut sorted = merged.clone();

        merge_tags(&mut merged, orig_len, keys, false);
        sort_tags(&mut sorted, keys, false);

        prop_assert_eq!(addrs(&merged), addrs(&sorted));
        let cmp = TagComparator::with_keys(keys);
        for (a, b) in merged.iter().zip(&sorted) {
            prop_assert_eq!(cmp.compare(a, b), Ordering::Equal);
        }
    }

    #[test]
    fn prop_dedup_is_idempotent(mut tags in arb_tags(), keys in arb_keys()) {
        let keys = keys.as_deref();
        sort_tags(&mut tags, keys, true);
        let once = tags.clone();
        dedup_tags(&mut tags, keys);
        prop_assert_eq!(addrs(&tags), addrs(&once));

        let cmp = TagComparator::with_keys(keys);
        for pair in tags.windows(2) {
            prop_assert_ne!(cmp.compare(&pair[0], &pair[1]), Ordering::Equal);
        }
    }

    #[test]
    fn prop_any_keys_keep_every_record(
        mut prefix in arb_tags(),
        suffix in arb_tags(),
        keys in arb_any_keys(),
    ) {
        let keys = keys.as_deref();
        sort_tags(&mut prefix, keys, false);
        let orig_len = prefix.len();
        let mut merged = prefix;
        merged.extend(suffix);
        let mut sorted = merged.clone();

        merge_tags(&mut merged, orig_len, keys, false);
        sort_tags(&mut sorted, keys, false);
        prop_assert_eq!(addrs(&merged), addrs(&sorted));

        let before = sorted.len();
        sort_tags(&mut sorted, keys, true);
        prop_assert!(sorted.len() <= before);
        prop_assert_eq!(sorted.is_empty(), before == 0);
    }

    #[test]
    fn prop_search_finds_whole_run(mut tags in arb_tags(), name in "[a-cA-C]{1,3}") {
        assert_search_run(&mut tags, &name, false)?;
    }

    #[test]
    fn prop_prefix_search_finds_whole_run(mut tags in arb_tags(), prefix in "[a-cA-C]{1,2}") {
        assert_search_run(&mut tags, &prefix, true)?;
    }
}

fn assert_search_run(
    tags: &mut Vec<TagRef>,
    probe: &str,
    partial: bool,
) -> Result<(), TestCaseError> {
    sort_tags(tags, None, false);
    let cmp = TagComparator::by_name().partial(partial);
    let expected: Vec<usize> = (0..tags.len())
        .filter(|&i| cmp.compare_name_to(probe, &tags[i]) == Ordering::Equal)
        .collect();

    match find_tags(&tags[..], probe, partial, true) {
        None => prop_assert!(expected.is_empty()),
        Some(found) => {
            prop_assert_eq!(found.len(), expected.len());
            let first = found.as_ptr() as usize - tags.as_ptr() as usize;
            prop_assert_eq!(first / std::mem::size_of::<TagRef>(), expected[0]);
        }
    }
    Ok(())
}
