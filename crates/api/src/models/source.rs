use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, Weak};

/// Integer handle into the host's language registry.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(transparent)]
pub struct LanguageId(pub i32);

impl LanguageId {
    pub const NONE: LanguageId = LanguageId(-1);
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A source file owned by the host workspace. Tags only point back at it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub file_name: String,
    pub lang: LanguageId,
}

impl SourceFile {
    pub fn new(file_name: impl Into<String>, lang: LanguageId) -> Self {
        Self {
            file_name: file_name.into(),
            lang,
        }
    }
}

/// Weak back-reference from an entry record to the file it was found in.
///
/// Two handles are equal when they point at the same file allocation; the file's
/// contents are never compared.
#[derive(Clone, Default)]
pub struct OwningFile(Option<Weak<SourceFile>>);

impl OwningFile {
    pub fn none() -> Self {
        Self(None)
    }

    pub fn new(file: &Arc<SourceFile>) -> Self {
        Self(Some(Arc::downgrade(file)))
    }

    pub fn from_option(file: Option<&Arc<SourceFile>>) -> Self {
        file.map(Self::new).unwrap_or_default()
    }

    pub fn is_none(&self) -> bool {
        self.0.is_none()
    }

    /// The file, if it is still alive.
    pub fn upgrade(&self) -> Option<Arc<SourceFile>> {
        self.0.as_ref().and_then(Weak::upgrade)
    }

    /// Address used for identity ordering. Absent files sort first.
    pub fn addr(&self) -> usize {
        self.0
            .as_ref()
            .map(|weak| weak.as_ptr() as usize)
            .unwrap_or(0)
    }
}

impl PartialEq for OwningFile {
    fn eq(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (Some(a), Some(b)) => Weak::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl Eq for OwningFile {}

impl fmt::Debug for OwningFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.upgrade() {
            Some(file) => write!(f, "OwningFile({})", file.file_name),
            None if self.0.is_some() => write!(f, "OwningFile(<dropped>)"),
            None => write!(f, "OwningFile(-)"),
        }
    }
}
