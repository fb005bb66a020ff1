use serde::{Deserialize, Serialize};
use std::fmt;

/// Symbol kinds understood by the tag engine.
///
/// Every kind carries a stable power-of-two code. The code is what the native tag file
/// stores in its `type` field, it is the bit used by [`KindMask`], and it defines the
/// numeric order used when records are sorted by kind.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
#[repr(u32)]
pub enum TagKind {
    Undefined = 0,
    Class = 1,
    Enum = 1 << 1,
    Enumerator = 1 << 2,
    Field = 1 << 3,
    Function = 1 << 4,
    Interface = 1 << 5,
    Member = 1 << 6,
    Method = 1 << 7,
    Namespace = 1 << 8,
    Package = 1 << 9,
    Prototype = 1 << 10,
    Struct = 1 << 11,
    Typedef = 1 << 12,
    Union = 1 << 13,
    Variable = 1 << 14,
    Externvar = 1 << 15,
    Macro = 1 << 16,
    MacroWithArgs = 1 << 17,
    File = 1 << 18,
    Other = 1 << 19,
}

/// Names accepted from producers and from long-form ctags `kind:` values.
const KIND_NAMES: &[(&str, TagKind)] = &[
    ("class", TagKind::Class),
    ("enum", TagKind::Enum),
    ("enumerator", TagKind::Enumerator),
    ("externvar", TagKind::Externvar),
    ("field", TagKind::Field),
    ("file", TagKind::File),
    ("function", TagKind::Function),
    ("interface", TagKind::Interface),
    ("macro", TagKind::Macro),
    ("macro_with_args", TagKind::MacroWithArgs),
    ("member", TagKind::Member),
    ("method", TagKind::Method),
    ("namespace", TagKind::Namespace),
    ("package", TagKind::Package),
    ("prototype", TagKind::Prototype),
    ("struct", TagKind::Struct),
    ("typedef", TagKind::Typedef),
    ("union", TagKind::Union),
    ("variable", TagKind::Variable),
    ("other", TagKind::Other),
];

impl TagKind {
    pub const ALL: [TagKind; 21] = [
        TagKind::Undefined,
        TagKind::Class,
        TagKind::Enum,
        TagKind::Enumerator,
        TagKind::Field,
        TagKind::Function,
        TagKind::Interface,
        TagKind::Member,
        TagKind::Method,
        TagKind::Namespace,
        TagKind::Package,
        TagKind::Prototype,
        TagKind::Struct,
        TagKind::Typedef,
        TagKind::Union,
        TagKind::Variable,
        TagKind::Externvar,
        TagKind::Macro,
        TagKind::MacroWithArgs,
        TagKind::File,
        TagKind::Other,
    ];

    /// Stable numeric code of this kind.
    pub const fn code(self) -> u32 {
        self as u32
    }

    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.code() == code)
    }

    /// Resolve a producer kind name (`"function"`, `"struct"`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        KIND_NAMES
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, kind)| *kind)
    }

    /// Canonical name, the inverse of [`TagKind::from_name`].
    pub fn as_str(self) -> &'static str {
        match self {
            TagKind::Undefined => "undefined",
            TagKind::Class => "class",
            TagKind::Enum => "enum",
            TagKind::Enumerator => "enumerator",
            TagKind::Field => "field",
            TagKind::Function => "function",
            TagKind::Interface => "interface",
            TagKind::Member => "member",
            TagKind::Method => "method",
            TagKind::Namespace => "namespace",
            TagKind::Package => "package",
            TagKind::Prototype => "prototype",
            TagKind::Struct => "struct",
            TagKind::Typedef => "typedef",
            TagKind::Union => "union",
            TagKind::Variable => "variable",
            TagKind::Externvar => "externvar",
            TagKind::Macro => "macro",
            TagKind::MacroWithArgs => "macro_with_args",
            TagKind::File => "file",
            TagKind::Other => "other",
        }
    }

    /// Single-letter kind codes used by ctags files. Unknown letters map to `Other`.
    pub fn from_ctags_letter(letter: char) -> Self {
        match letter {
            'c' | 'I' => TagKind::Class,
            'd' | 'M' => TagKind::Macro,
            'e' => TagKind::Enumerator,
            'F' => TagKind::File,
            'f' => TagKind::Function,
            'g' => TagKind::Enum,
            'i' => TagKind::Interface,
            'l' | 'v' => TagKind::Variable,
            'm' => TagKind::Member,
            'n' => TagKind::Namespace,
            'P' => TagKind::Package,
            'p' => TagKind::Prototype,
            's' => TagKind::Struct,
            't' => TagKind::Typedef,
            'u' => TagKind::Union,
            'x' => TagKind::Externvar,
            _ => TagKind::Other,
        }
    }

    /// Name shown to users. `Other` and `Undefined` have none.
    pub fn display_name(self) -> Option<&'static str> {
        let name = match self {
            TagKind::Class => "class",
            TagKind::Enum => "enum",
            TagKind::Enumerator => "enumval",
            TagKind::Field => "field",
            TagKind::Function => "function",
            TagKind::Interface => "interface",
            TagKind::Member => "member",
            TagKind::Method => "method",
            TagKind::Namespace => "namespace",
            TagKind::Package => "package",
            TagKind::Prototype => "prototype",
            TagKind::Struct => "struct",
            TagKind::Typedef => "typedef",
            TagKind::Union => "union",
            TagKind::Variable => "variable",
            TagKind::Externvar => "extern",
            TagKind::Macro => "define",
            TagKind::MacroWithArgs => "macro",
            TagKind::File => "file",
            TagKind::Other | TagKind::Undefined => return None,
        };
        Some(name)
    }

    pub fn from_display_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.display_name() == Some(name))
    }

    pub fn mask(self) -> KindMask {
        KindMask::from_bits_truncate(self.code())
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

bitflags::bitflags! {
    /// A set of tag kinds, used to filter collections.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct KindMask: u32 {
        const CLASS = TagKind::Class.code();
        const ENUM = TagKind::Enum.code();
        const ENUMERATOR = TagKind::Enumerator.code();
        const FIELD = TagKind::Field.code();
        const FUNCTION = TagKind::Function.code();
        const INTERFACE = TagKind::Interface.code();
        const MEMBER = TagKind::Member.code();
        const METHOD = TagKind::Method.code();
        const NAMESPACE = TagKind::Namespace.code();
        const PACKAGE = TagKind::Package.code();
        const PROTOTYPE = TagKind::Prototype.code();
        const STRUCT = TagKind::Struct.code();
        const TYPEDEF = TagKind::Typedef.code();
        const UNION = TagKind::Union.code();
        const VARIABLE = TagKind::Variable.code();
        const EXTERNVAR = TagKind::Externvar.code();
        const MACRO = TagKind::Macro.code();
        const MACRO_WITH_ARGS = TagKind::MacroWithArgs.code();
        const FILE = TagKind::File.code();
        const OTHER = TagKind::Other.code();
    }
}

impl KindMask {
    pub fn contains_kind(self, kind: TagKind) -> bool {
        self.intersects(kind.mask())
    }
}

impl FromIterator<TagKind> for KindMask {
    fn from_iter<I: IntoIterator<Item = TagKind>>(iter: I) -> Self {
        iter.into_iter()
            .fold(KindMask::empty(), |mask, kind| mask | kind.mask())
    }
}
