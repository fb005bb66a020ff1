//! Human-readable views of records.

use crate::error::Result;
use std::borrow::Borrow;
use std::fmt;
use std::io::Write;
use tagdex_api::{Tag, TagAttributes};

/// Single-line rendering of a record:
/// `[access ][impl ][kind ][type ][scope::]name[arglist][ : from base][[file:line]]`.
///
/// File records render as their bare name.
pub struct TagView<'a>(pub &'a Tag);

impl fmt::Display for TagView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = self.0;
        let entry = match tag.attributes() {
            TagAttributes::File(_) => return f.write_str(tag.name()),
            TagAttributes::Entry(entry) => entry,
        };

        let keywords = [
            entry.access.keyword(),
            entry.implementation.keyword(),
            tag.kind().display_name(),
            entry.var_type.as_deref(),
        ];
        for word in keywords.into_iter().flatten() {
            write!(f, "{word} ")?;
        }
        if let Some(scope) = &entry.scope {
            write!(f, "{scope}::")?;
        }
        f.write_str(tag.name())?;
        if let Some(arglist) = &entry.arglist {
            f.write_str(arglist)?;
        }
        if let Some(inheritance) = &entry.inheritance {
            write!(f, " : from {inheritance}")?;
        }
        if entry.line > 0 {
            if let Some(file) = entry.file.upgrade() {
                write!(f, "[{}:{}]", file.file_name, entry.line)?;
            }
        }
        Ok(())
    }
}

pub fn render_tag(tag: &Tag) -> String {
    TagView(tag).to_string()
}

/// Write every record of `tags` on its own line.
pub fn print_tags<T: Borrow<Tag>, W: Write>(tags: &[T], writer: &mut W) -> Result<()> {
    for tag in tags {
        writeln!(writer, "{}", TagView(tag.borrow()))?;
    }
    Ok(())
}

/// Number of `::` separators in the record's scope; 0 without a scope.
pub fn scope_depth(tag: &Tag) -> usize {
    tag.scope().map_or(0, |scope| scope.matches("::").count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tagdex_api::{
        Access, EntryAttributes, FileAttributes, Implementation, LanguageId, OwningFile,
        SourceFile, TagKind,
    };

    #[test]
    fn test_render_full_entry() {
        let source = Arc::new(SourceFile::new("shapes.cpp", LanguageId(1)));
        let tag = Tag::entry(
            "draw",
            TagKind::Method,
            EntryAttributes {
                line: 42,
                arglist: Some("(Canvas &c)".to_string()),
                scope: Some("gfx::Circle".to_string()),
                inheritance: Some("Shape".to_string()),
                var_type: Some("void".to_string()),
                access: Access::Public,
                implementation: Implementation::Virtual,
                file: OwningFile::new(&source),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(
            render_tag(&tag),
            "public virtual method void gfx::Circle::draw(Canvas &c) : from Shape[shapes.cpp:42]"
        );
        assert_eq!(scope_depth(&tag), 1);
    }

    #[test]
    fn test_render_minimal_entry() {
        let tag = Tag::entry("count", TagKind::Variable, EntryAttributes::default()).unwrap();
        assert_eq!(render_tag(&tag), "variable count");
        assert_eq!(scope_depth(&tag), 0);

        let other = Tag::entry(
            "x",
            TagKind::Other,
            EntryAttributes {
                access: Access::Friend,
                line: 3,
                ..Default::default()
            },
        )
        .unwrap();
        // No known file, no locator; friend access has no keyword.
        assert_eq!(render_tag(&other), "x");
    }

    #[test]
    fn test_locator_needs_live_file() {
        let source = Arc::new(SourceFile::new("gone.c", LanguageId(0)));
        let tag = Tag::entry(
            "f",
            TagKind::Function,
            EntryAttributes {
                line: 7,
                file: OwningFile::new(&source),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(render_tag(&tag), "function f[gone.c:7]");
        drop(source);
        assert_eq!(render_tag(&tag), "function f");
    }

    #[test]
    fn test_file_record_and_print() {
        let file = Tag::file("src/lib.c", FileAttributes::default())
            .unwrap()
            .into_ref();
        let entry = Tag::entry("MAX", TagKind::Macro, EntryAttributes::default())
            .unwrap()
            .into_ref();
        let mut out = Vec::new();
        print_tags(&[file, entry], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "src/lib.c\ndefine MAX\n");
    }

    #[test]
    fn test_scope_depth_counts_separators() {
        let scoped = |scope: &str| {
            Tag::entry(
                "x",
                TagKind::Member,
                EntryAttributes {
                    scope: Some(scope.to_string()),
                    ..Default::default()
                },
            )
            .unwrap()
        };
        assert_eq!(scope_depth(&scoped("A")), 0);
        assert_eq!(scope_depth(&scoped("a::b::c")), 2);
    }
}
