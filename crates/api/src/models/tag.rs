use super::attr::{Access, Implementation};
use super::kind::TagKind;
use super::source::{LanguageId, OwningFile};
use crate::error::{ApiError, ApiResult};
use std::sync::Arc;

/// Shared handle to a tag record. Collections and indices only ever hold these.
pub type TagRef = Arc<Tag>;

/// Attributes of a file-level record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileAttributes {
    pub lang: LanguageId,
    pub timestamp: i64,
    pub inactive: bool,
}

/// Attributes of a symbol-level record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntryAttributes {
    /// 1-based line, 0 when unknown.
    pub line: u64,
    /// File-scope (static) symbol.
    pub local: bool,
    pub arglist: Option<String>,
    pub scope: Option<String>,
    /// Comma-joined base type names.
    pub inheritance: Option<String>,
    pub var_type: Option<String>,
    pub access: Access,
    pub implementation: Implementation,
    /// Legacy pointer depth, superseded by `var_type`.
    pub pointer_order: i32,
    pub file: OwningFile,
}

#[derive(Debug, PartialEq, Eq)]
pub enum TagAttributes {
    File(FileAttributes),
    Entry(EntryAttributes),
}

/// One symbol-tag record.
///
/// The file/entry variant is fixed at construction: a record of kind [`TagKind::File`]
/// always carries [`FileAttributes`], every other kind carries [`EntryAttributes`].
/// Records are immutable once built and are not `Clone`; share them through [`TagRef`].
#[derive(Debug, PartialEq, Eq)]
pub struct Tag {
    name: String,
    kind: TagKind,
    attributes: TagAttributes,
}

impl Tag {
    pub fn file(name: impl Into<String>, attributes: FileAttributes) -> ApiResult<Self> {
        Self::build(name.into(), TagKind::File, TagAttributes::File(attributes))
    }

    pub fn entry(
        name: impl Into<String>,
        kind: TagKind,
        attributes: EntryAttributes,
    ) -> ApiResult<Self> {
        if kind == TagKind::File {
            return Err(ApiError::InvalidArgument(
                "file kind requires file attributes".to_string(),
            ));
        }
        Self::build(name.into(), kind, TagAttributes::Entry(attributes))
    }

    fn build(name: String, kind: TagKind, attributes: TagAttributes) -> ApiResult<Self> {
        if name.is_empty() {
            return Err(ApiError::MissingName);
        }
        crate::refs::track_new();
        Ok(Self {
            name,
            kind,
            attributes,
        })
    }

    pub fn into_ref(self) -> TagRef {
        Arc::new(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> TagKind {
        self.kind
    }

    pub fn attributes(&self) -> &TagAttributes {
        &self.attributes
    }

    pub fn is_file(&self) -> bool {
        matches!(self.attributes, TagAttributes::File(_))
    }

    pub fn entry_attributes(&self) -> Option<&EntryAttributes> {
        match &self.attributes {
            TagAttributes::Entry(entry) => Some(entry),
            TagAttributes::File(_) => None,
        }
    }

    pub fn file_attributes(&self) -> Option<&FileAttributes> {
        match &self.attributes {
            TagAttributes::File(file) => Some(file),
            TagAttributes::Entry(_) => None,
        }
    }

    /// Line of an entry record; 0 for file records and unknown lines.
    pub fn line(&self) -> u64 {
        self.entry_attributes().map(|e| e.line).unwrap_or(0)
    }

    pub fn scope(&self) -> Option<&str> {
        self.entry_attributes().and_then(|e| e.scope.as_deref())
    }

    pub fn arglist(&self) -> Option<&str> {
        self.entry_attributes().and_then(|e| e.arglist.as_deref())
    }

    pub fn var_type(&self) -> Option<&str> {
        self.entry_attributes().and_then(|e| e.var_type.as_deref())
    }

    pub fn inheritance(&self) -> Option<&str> {
        self.entry_attributes().and_then(|e| e.inheritance.as_deref())
    }

    pub fn owning_file(&self) -> Option<&OwningFile> {
        self.entry_attributes().map(|e| &e.file)
    }
}

#[cfg(feature = "tag-refs")]
impl Drop for Tag {
    fn drop(&mut self) {
        crate::refs::track_drop();
    }
}
