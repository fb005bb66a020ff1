pub mod collection;
pub mod compare;
pub mod config;
pub mod entry;
pub mod error;
pub mod format;
pub mod logging;
pub mod view;

pub use collection::{
    dedup_tags, dedup_tags_by, extract_tags, find_tags, merge_tags, sort_tags, sort_tags_by,
};
pub use compare::TagComparator;
pub use config::TagFileConfig;
pub use entry::{EntryScope, TagEntry, new_tag, tags_from_entries};
pub use error::{Result, TagsError};
pub use format::{TagFileFormat, TagFileReader, load_tags, read_tag, write_tag, write_tags};
pub use view::{TagView, print_tags, render_tag, scope_depth};
