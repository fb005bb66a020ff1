use crate::error::Result;
use crate::format::TagFileFormat;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tagdex_api::{AttrMask, LanguageId, SortKey};

/// How a tag file is read, ordered and written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagFileConfig {
    pub format: TagFileFormat,
    /// Language assigned to file-kind records read from the file.
    pub language: LanguageId,
    /// Ordered sort keys; `None` sorts by name only.
    pub sort_keys: Option<Vec<SortKey>>,
    pub dedup: bool,
    /// Attributes emitted when the collection is written in native format.
    pub write_attrs: AttrMask,
}

impl Default for TagFileConfig {
    fn default() -> Self {
        Self {
            format: TagFileFormat::Native,
            language: LanguageId::NONE,
            sort_keys: None,
            dedup: false,
            write_attrs: AttrMask::all(),
        }
    }
}

impl TagFileConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn sort_keys(&self) -> Option<&[SortKey]> {
        self.sort_keys.as_deref()
    }
}
