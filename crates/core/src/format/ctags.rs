//! Exuberant/universal ctags files.
//!
//! `name<TAB>file<TAB>locator[;"<TAB>key[:value]...]`. The locator is either a search
//! pattern delimited by `/` or `?` or a decimal line number. `!_TAG_` header lines are
//! skipped.

use super::{ParseContext, parse_line_number, read_line, text};
use crate::error::{Result, TagsError};
use std::io::BufRead;
use tagdex_api::{
    Access, EntryAttributes, FileAttributes, Implementation, OwningFile, Tag, TagKind,
};

const META_PREFIX: &[u8] = b"!_TAG_";
const EXTENSION_MARKER: &[u8] = b";\"";

fn malformed(reason: &'static str) -> TagsError {
    TagsError::Malformed {
        format: "ctags",
        reason,
    }
}

pub fn read_tag<R: BufRead>(reader: &mut R, ctx: ParseContext<'_>) -> Result<Tag> {
    let mut buf = Vec::new();
    loop {
        read_line(reader, &mut buf)?;
        if !buf.starts_with(META_PREFIX) {
            break;
        }
    }
    parse_line(&buf, ctx)
}

pub fn parse_line(line: &[u8], ctx: ParseContext<'_>) -> Result<Tag> {
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    if line.is_empty() {
        return Err(TagsError::EmptyLine);
    }

    let (name, rest) = split_tab(line).ok_or_else(|| malformed("missing file field"))?;
    if name.is_empty() {
        return Err(TagsError::MissingName);
    }
    let (_file, locator) = split_tab(rest).ok_or_else(|| malformed("missing locator"))?;

    let mut kind = TagKind::Function;
    let mut entry = EntryAttributes::default();

    let after_locator = match locator.first() {
        Some(&delim) if delim == b'/' || delim == b'?' => skip_pattern(locator, delim),
        _ => {
            entry.line = parse_line_number(locator);
            locator
        }
    };

    if let Some(pos) = find(after_locator, EXTENSION_MARKER) {
        let extensions = &after_locator[pos + EXTENSION_MARKER.len()..];
        for field in extensions.split(|&b| b == b'\t').filter(|f| !f.is_empty()) {
            let (key, value) = match field.iter().position(|&b| b == b':') {
                Some(colon) => (&field[..colon], Some(&field[colon + 1..])),
                None => (field, None),
            };
            apply_extension(key, value, &mut kind, &mut entry);
        }
    }

    let name = text(name);
    let tag = if kind == TagKind::File {
        Tag::file(
            name,
            FileAttributes {
                lang: ctx.lang,
                ..Default::default()
            },
        )?
    } else {
        entry.file = OwningFile::from_option(ctx.file);
        Tag::entry(name, kind, entry)?
    };
    Ok(tag)
}

fn apply_extension(
    key: &[u8],
    value: Option<&[u8]>,
    kind: &mut TagKind,
    entry: &mut EntryAttributes,
) {
    // A bare value is a kind, written without its `kind:` key.
    if value.is_none() || key == b"kind" {
        *kind = parse_kind(value.unwrap_or(key));
        return;
    }
    let value = value.unwrap_or_default();
    match key {
        b"inherits" => entry.inheritance = Some(text(value)),
        b"implementation" => entry.implementation = Implementation::from_name(&text(value)),
        b"line" => entry.line = parse_line_number(value),
        b"access" => entry.access = Access::from_name(&text(value)),
        b"class" | b"enum" | b"function" | b"struct" | b"union" => {
            entry.scope = Some(text(value))
        }
        b"file" => entry.local = true,
        b"signature" => entry.arglist = Some(text(value)),
        _ => {}
    }
}

fn parse_kind(raw: &[u8]) -> TagKind {
    match raw {
        [letter] => TagKind::from_ctags_letter(char::from(*letter)),
        _ => {
            let name = text(raw);
            TagKind::from_name(&name).unwrap_or_else(|| {
                tracing::debug!("Unknown tag kind {}", name);
                TagKind::Other
            })
        }
    }
}

fn split_tab(bytes: &[u8]) -> Option<(&[u8], &[u8])> {
    let tab = bytes.iter().position(|&b| b == b'\t')?;
    Some((&bytes[..tab], &bytes[tab + 1..]))
}

/// Skip a delimited search pattern, honouring backslash escapes. Returns the input from
/// the closing delimiter onward (empty if the pattern is unterminated).
fn skip_pattern(locator: &[u8], delim: u8) -> &[u8] {
    let mut i = 1;
    while i < locator.len() && locator[i] != delim {
        if locator[i] == b'\\' && i + 1 < locator.len() {
            i += 1;
        }
        i += 1;
    }
    &locator[i..]
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}
