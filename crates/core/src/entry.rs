//! Records built from a live code-analysis producer.

use crate::error::{Result, TagsError};
use std::sync::Arc;
use tagdex_api::{
    Access, EntryAttributes, FileAttributes, Implementation, OwningFile, SourceFile, Tag,
    TagKind, TagRef,
};

/// Immediately enclosing scope reported with an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryScope {
    /// Kind of the enclosing symbol (`"class"`, `"namespace"`, ...). Producers report
    /// it alongside the name; records keep only the name.
    pub kind: String,
    pub name: String,
}

/// One symbol as reported by a producer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagEntry {
    pub name: String,
    pub kind_name: String,
    pub line: u64,
    pub file_scope: bool,
    pub arglist: Option<String>,
    pub scope: Option<EntryScope>,
    pub inheritance: Option<String>,
    pub var_type: Option<String>,
    pub access: Option<String>,
    pub implementation: Option<String>,
}

impl TagEntry {
    pub fn new(name: impl Into<String>, kind_name: impl Into<String>, line: u64) -> Self {
        Self {
            name: name.into(),
            kind_name: kind_name.into(),
            line,
            ..Default::default()
        }
    }
}

/// Scopes are only kept when they start like an identifier.
fn is_scope_start(scope: &str) -> bool {
    scope
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
}

/// Build a record from a producer entry, or the file record of `file` when no entry is
/// given.
pub fn new_tag(file: Option<&Arc<SourceFile>>, entry: Option<&TagEntry>) -> Result<Tag> {
    let Some(entry) = entry else {
        let file = file.ok_or(TagsError::NoSource)?;
        return Ok(Tag::file(
            file.file_name.clone(),
            FileAttributes {
                lang: file.lang,
                timestamp: 0,
                inactive: false,
            },
        )?);
    };

    if entry.name.is_empty() {
        return Err(TagsError::MissingName);
    }

    let mut kind = TagKind::from_name(&entry.kind_name).unwrap_or_else(|| {
        tracing::debug!("Unknown tag kind {} for {}", entry.kind_name, entry.name);
        TagKind::Other
    });
    if kind == TagKind::Macro && entry.arglist.as_deref().is_some_and(|a| !a.is_empty()) {
        kind = TagKind::MacroWithArgs;
    }

    let attributes = EntryAttributes {
        line: entry.line,
        local: entry.file_scope,
        arglist: entry.arglist.clone(),
        scope: entry
            .scope
            .as_ref()
            .map(|s| s.name.as_str())
            .filter(|name| is_scope_start(name))
            .map(str::to_string),
        inheritance: entry.inheritance.clone(),
        var_type: entry.var_type.clone(),
        access: entry
            .access
            .as_deref()
            .map(Access::from_name)
            .unwrap_or_default(),
        implementation: entry
            .implementation
            .as_deref()
            .map(Implementation::from_name)
            .unwrap_or_default(),
        pointer_order: 0,
        file: OwningFile::from_option(file),
    };
    Ok(Tag::entry(entry.name.clone(), kind, attributes)?)
}

/// Build the record list of one source file from its producer entries. Entries that
/// cannot become records are logged and skipped.
pub fn tags_from_entries<'a, I>(file: &Arc<SourceFile>, entries: I) -> Vec<TagRef>
where
    I: IntoIterator<Item = &'a TagEntry>,
{
    let mut tags = Vec::new();
    for entry in entries {
        match new_tag(Some(file), Some(entry)) {
            Ok(tag) => tags.push(tag.into_ref()),
            Err(e) => tracing::warn!("Skipping entry in {}: {}", file.file_name, e),
        }
    }
    tags
}
