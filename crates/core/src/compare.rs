//! Record ordering.
//!
//! Names are compared case-insensitively with any `[...]` array-size suffix ignored, so
//! `Item`, `item` and `Item[10]` are all equal. A comparator is a small value passed
//! explicitly to every sort, merge, dedup and search call.

use std::cmp::Ordering;
use tagdex_api::{SortKey, Tag};

/// Comparison context: an optional ordered key list and the prefix-match flag.
#[derive(Debug, Clone, Copy, Default)]
pub struct TagComparator<'a> {
    keys: Option<&'a [SortKey]>,
    partial: bool,
}

impl<'a> TagComparator<'a> {
    /// Plain name order.
    pub fn by_name() -> Self {
        Self::default()
    }

    /// Ordering by `keys` in sequence. `None` means plain name order.
    pub fn with_keys(keys: Option<&'a [SortKey]>) -> Self {
        Self {
            keys,
            partial: false,
        }
    }

    /// In partial mode a name matches when the left operand is a prefix of the right one.
    pub fn partial(mut self, partial: bool) -> Self {
        self.partial = partial;
        self
    }

    pub fn keys(&self) -> Option<&'a [SortKey]> {
        self.keys
    }

    pub fn compare(&self, a: &Tag, b: &Tag) -> Ordering {
        let Some(keys) = self.keys else {
            return self.compare_names(a.name(), b.name());
        };

        for key in keys {
            let ord = match key {
                SortKey::Name => self.compare_names(a.name(), b.name()),
                SortKey::Kind => a.kind().code().cmp(&b.kind().code()),
                SortKey::File => file_addr(a).cmp(&file_addr(b)),
                SortKey::Scope => or_empty(a.scope()).cmp(or_empty(b.scope())),
                SortKey::Arglist => {
                    let ord = or_empty(a.arglist()).cmp(or_empty(b.arglist()));
                    if ord != Ordering::Equal {
                        // Overloads keep declaration order.
                        return a.line().cmp(&b.line()).then(ord);
                    }
                    ord
                }
                SortKey::VarType => or_empty(a.var_type()).cmp(or_empty(b.var_type())),
                SortKey::Line => a.line().cmp(&b.line()),
            };
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    }

    /// Compare a search key against a record name, in the same normalised form.
    pub fn compare_name_to(&self, key: &str, tag: &Tag) -> Ordering {
        self.compare_names(key, tag.name())
    }

    /// Comparison tolerating absent records. An absent record is an anomaly: it is logged
    /// and ordered before every present record.
    pub fn compare_nullable(&self, a: Option<&Tag>, b: Option<&Tag>) -> Ordering {
        match (a, b) {
            (Some(a), Some(b)) => self.compare(a, b),
            (a, b) => {
                tracing::warn!("Found NULL tag");
                a.is_some().cmp(&b.is_some())
            }
        }
    }

    fn compare_names(&self, a: &str, b: &str) -> Ordering {
        let a = sort_name(a);
        let b = sort_name(b).iter().map(u8::to_ascii_lowercase);
        let len = a.len();
        let a = a.iter().map(u8::to_ascii_lowercase);
        if self.partial {
            a.cmp(b.take(len))
        } else {
            a.cmp(b)
        }
    }
}

/// The part of a name that takes part in ordering: everything before the first `[`,
/// without trailing whitespace. The first character is always kept.
pub fn sort_name(name: &str) -> &[u8] {
    let bytes = name.as_bytes();
    let Some(bracket) = bytes.iter().position(|&b| b == b'[') else {
        return bytes;
    };
    let mut end = bracket;
    while end > 1 && bytes[end - 1].is_ascii_whitespace() {
        end -= 1;
    }
    &bytes[..end]
}

fn or_empty(value: Option<&str>) -> &str {
    value.unwrap_or("")
}

fn file_addr(tag: &Tag) -> usize {
    tag.owning_file().map(|f| f.addr()).unwrap_or(0)
}
