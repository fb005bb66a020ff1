//! Operations over tag collections.
//!
//! A collection is any `Vec`/slice of values that borrow as a [`Tag`](tagdex_api::Tag):
//! owning `TagRef` handles or plain `&Tag` views. None of these operations copy records;
//! moving an element moves the handle. An empty collection is always a no-op.
//!
//! The operations are single-threaded and take their comparison context as an argument.
//! Callers sharing a collection between threads must serialise mutations themselves.

mod extract;
mod merge;
mod order;
mod search;

pub use extract::extract_tags;
pub use merge::merge_tags;
pub use order::{dedup_tags, dedup_tags_by, sort_tags, sort_tags_by};
pub use search::find_tags;
