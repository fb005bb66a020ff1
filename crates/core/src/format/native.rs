//! Native tag file format.
//!
//! A record is the name followed by `<control byte><value>` fields, one record per line.
//! Control bytes live in the range 200..=255, so any such byte terminates the current
//! field. Numeric values are written in decimal, access and implementation as their
//! single-byte codes.

use super::{
    ParseContext, is_printable, parse_int, parse_line_number, parse_long, read_line, text,
};
use crate::error::{Result, TagsError};
use std::borrow::Borrow;
use std::io::{BufRead, Write};
use tagdex_api::{
    Access, AttrMask, EntryAttributes, FileAttributes, Implementation, OwningFile, Tag,
    TagAttributes, TagKind,
};

pub mod field {
    pub const NAME: u8 = 200;
    pub const LINE: u8 = 201;
    pub const LOCAL: u8 = 202;
    /// Obsolete, skipped when read.
    pub const POS: u8 = 203;
    pub const TYPE: u8 = 204;
    pub const ARGLIST: u8 = 205;
    pub const SCOPE: u8 = 206;
    pub const VARTYPE: u8 = 207;
    pub const INHERITS: u8 = 208;
    pub const TIME: u8 = 209;
    pub const ACCESS: u8 = 210;
    pub const IMPL: u8 = 211;
    pub const LANG: u8 = 212;
    pub const INACTIVE: u8 = 213;
    pub const POINTER: u8 = 214;
}

fn is_control(byte: u8) -> bool {
    byte >= field::NAME
}

pub fn read_tag<R: BufRead>(reader: &mut R, ctx: ParseContext<'_>) -> Result<Tag> {
    let mut buf = Vec::new();
    read_line(reader, &mut buf)?;
    parse_line(&buf, ctx)
}

/// Parse one native record (without its newline).
pub fn parse_line(line: &[u8], ctx: ParseContext<'_>) -> Result<Tag> {
    if line.is_empty() {
        return Err(TagsError::EmptyLine);
    }

    let name_end = line.iter().position(|&b| is_control(b)).unwrap_or(line.len());
    let name = &line[..name_end];
    match name.first() {
        None => return Err(TagsError::MissingName),
        Some(&first) if !is_printable(first) => return Err(TagsError::UnprintableName(first)),
        Some(_) => {}
    }
    let name = text(name);

    let mut kind = TagKind::Undefined;
    let mut entry = EntryAttributes::default();
    let mut file = FileAttributes::default();

    let mut rest = &line[name_end..];
    while let Some((&code, tail)) = rest.split_first() {
        let value_end = tail.iter().position(|&b| is_control(b)).unwrap_or(tail.len());
        let value = &tail[..value_end];
        rest = &tail[value_end..];

        match code {
            field::LINE => entry.line = parse_line_number(value),
            field::LOCAL => entry.local = parse_long(value) != 0,
            field::TYPE => {
                let raw = parse_long(value);
                kind = u32::try_from(raw)
                    .ok()
                    .and_then(TagKind::from_code)
                    .unwrap_or_else(|| {
                        tracing::debug!("Unknown type code {} for tag {}", raw, name);
                        TagKind::Other
                    });
            }
            field::ARGLIST => entry.arglist = Some(text(value)),
            field::SCOPE => entry.scope = Some(text(value)),
            field::POINTER => entry.pointer_order = parse_int(value),
            field::VARTYPE => entry.var_type = Some(text(value)),
            field::INHERITS => entry.inheritance = Some(text(value)),
            field::TIME | field::LANG | field::INACTIVE => {
                if kind != TagKind::File {
                    let field = file_field_name(code);
                    tracing::warn!("Got {} attribute for non-file tag {}", field, name);
                    return Err(TagsError::FileOnlyField { field, name });
                }
                match code {
                    field::TIME => file.timestamp = parse_long(value),
                    field::LANG => file.lang.0 = parse_int(value),
                    _ => file.inactive = parse_long(value) != 0,
                }
            }
            field::ACCESS => entry.access = Access::from_code(value.first().copied().unwrap_or(0)),
            field::IMPL => {
                entry.implementation =
                    Implementation::from_code(value.first().copied().unwrap_or(0))
            }
            other => tracing::debug!("Unknown attribute {} on tag {}", other, name),
        }
    }

    let tag = if kind == TagKind::File {
        // The caller's language wins over whatever the file recorded.
        file.lang = ctx.lang;
        Tag::file(name, file)?
    } else {
        entry.file = OwningFile::from_option(ctx.file);
        Tag::entry(name, kind, entry)?
    };
    Ok(tag)
}

fn file_field_name(code: u8) -> &'static str {
    match code {
        field::TIME => "time",
        field::LANG => "lang",
        _ => "inactive",
    }
}

fn write_field<W: Write>(writer: &mut W, code: u8, value: impl std::fmt::Display) -> Result<()> {
    writer.write_all(&[code])?;
    write!(writer, "{value}")?;
    Ok(())
}

/// Write `tag` as one native record, emitting only the attributes selected by `attrs`.
pub fn write_tag<W: Write>(tag: &Tag, writer: &mut W, attrs: AttrMask) -> Result<()> {
    writer.write_all(tag.name().as_bytes())?;
    if attrs.contains(AttrMask::TYPE) {
        write_field(writer, field::TYPE, tag.kind().code())?;
    }
    match tag.attributes() {
        TagAttributes::File(file) => {
            if attrs.contains(AttrMask::TIME) {
                write_field(writer, field::TIME, file.timestamp)?;
            }
            if attrs.contains(AttrMask::LANG) {
                write_field(writer, field::LANG, file.lang.0)?;
            }
            if attrs.contains(AttrMask::INACTIVE) && file.inactive {
                write_field(writer, field::INACTIVE, 1)?;
            }
        }
        TagAttributes::Entry(entry) => {
            if attrs.contains(AttrMask::ARGLIST) {
                if let Some(arglist) = &entry.arglist {
                    write_field(writer, field::ARGLIST, arglist)?;
                }
            }
            if attrs.contains(AttrMask::LINE) {
                write_field(writer, field::LINE, entry.line)?;
            }
            if attrs.contains(AttrMask::LOCAL) {
                write_field(writer, field::LOCAL, u8::from(entry.local))?;
            }
            if attrs.contains(AttrMask::SCOPE) {
                if let Some(scope) = &entry.scope {
                    write_field(writer, field::SCOPE, scope)?;
                }
            }
            if attrs.contains(AttrMask::INHERITANCE) {
                if let Some(inheritance) = &entry.inheritance {
                    write_field(writer, field::INHERITS, inheritance)?;
                }
            }
            if attrs.contains(AttrMask::POINTER) {
                write_field(writer, field::POINTER, entry.pointer_order)?;
            }
            if attrs.contains(AttrMask::VARTYPE) {
                if let Some(var_type) = &entry.var_type {
                    write_field(writer, field::VARTYPE, var_type)?;
                }
            }
            if attrs.contains(AttrMask::ACCESS) && entry.access != Access::Unknown {
                writer.write_all(&[field::ACCESS, entry.access.code()])?;
            }
            if attrs.contains(AttrMask::IMPL) && entry.implementation != Implementation::Unknown {
                writer.write_all(&[field::IMPL, entry.implementation.code()])?;
            }
        }
    }
    writer.write_all(b"\n")?;
    Ok(())
}

/// Write a whole collection, one native record per line.
pub fn write_tags<T: Borrow<Tag>, W: Write>(
    tags: &[T],
    writer: &mut W,
    attrs: AttrMask,
) -> Result<()> {
    for tag in tags {
        write_tag(tag.borrow(), writer, attrs)?;
    }
    Ok(())
}
