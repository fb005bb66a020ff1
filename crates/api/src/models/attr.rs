use serde::{Deserialize, Serialize};

/// Member access of an entry record. Each variant has a single-byte code used by the
/// native tag file.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Access {
    Public,
    Protected,
    Private,
    Friend,
    Default,
    #[default]
    Unknown,
}

impl Access {
    pub fn code(self) -> u8 {
        match self {
            Access::Public => b'p',
            Access::Protected => b'r',
            Access::Private => b'v',
            Access::Friend => b'f',
            Access::Default => b'd',
            Access::Unknown => b'x',
        }
    }

    pub fn from_code(code: u8) -> Self {
        match code {
            b'p' => Access::Public,
            b'r' => Access::Protected,
            b'v' => Access::Private,
            b'f' => Access::Friend,
            b'd' => Access::Default,
            _ => Access::Unknown,
        }
    }

    /// Parse an access keyword as reported by producers and ctags files.
    pub fn from_name(name: &str) -> Self {
        match name {
            "public" => Access::Public,
            "protected" => Access::Protected,
            "private" => Access::Private,
            "friend" => Access::Friend,
            "default" => Access::Default,
            _ => Access::Unknown,
        }
    }

    /// Keyword shown when rendering a record. Only the three visibility levels are shown.
    pub fn keyword(self) -> Option<&'static str> {
        match self {
            Access::Public => Some("public"),
            Access::Protected => Some("protected"),
            Access::Private => Some("private"),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Implementation {
    Virtual,
    #[default]
    Unknown,
}

impl Implementation {
    pub fn code(self) -> u8 {
        match self {
            Implementation::Virtual => b'v',
            Implementation::Unknown => b'x',
        }
    }

    pub fn from_code(code: u8) -> Self {
        match code {
            b'v' => Implementation::Virtual,
            _ => Implementation::Unknown,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "virtual" | "pure virtual" => Implementation::Virtual,
            _ => Implementation::Unknown,
        }
    }

    pub fn keyword(self) -> Option<&'static str> {
        match self {
            Implementation::Virtual => Some("virtual"),
            Implementation::Unknown => None,
        }
    }
}

bitflags::bitflags! {
    /// Selects which attributes the native writer emits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct AttrMask: u32 {
        const NAME = 1;
        const TYPE = 1 << 1;
        const FILE = 1 << 2;
        const LINE = 1 << 3;
        /// Obsolete byte-position attribute, never written.
        const POS = 1 << 4;
        const SCOPE = 1 << 5;
        const INHERITANCE = 1 << 6;
        const ARGLIST = 1 << 7;
        const LOCAL = 1 << 8;
        const TIME = 1 << 9;
        const VARTYPE = 1 << 10;
        const ACCESS = 1 << 11;
        const IMPL = 1 << 12;
        const LANG = 1 << 13;
        const INACTIVE = 1 << 14;
        const POINTER = 1 << 15;
    }
}

impl Default for AttrMask {
    fn default() -> Self {
        AttrMask::all()
    }
}

impl Serialize for AttrMask {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.bits())
    }
}

impl<'de> Deserialize<'de> for AttrMask {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bits = u32::deserialize(deserializer)?;
        Ok(AttrMask::from_bits_truncate(bits))
    }
}

/// One attribute of an ordered sort-key list.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Name,
    Kind,
    /// Owning file identity.
    File,
    Scope,
    /// Argument list. When two arglists differ the order is decided by line number.
    Arglist,
    VarType,
    Line,
}
