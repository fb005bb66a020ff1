//! Pipe-delimited global tags: `name|return type|arglist|description`.
//!
//! Every record is a prototype. Trailing fields are optional and the description is
//! never stored.

use super::{ParseContext, is_printable, read_line, text};
use crate::error::{Result, TagsError};
use std::io::BufRead;
use tagdex_api::{EntryAttributes, OwningFile, Tag, TagKind};

pub fn read_tag<R: BufRead>(reader: &mut R, ctx: ParseContext<'_>) -> Result<Tag> {
    let mut buf = Vec::new();
    read_line(reader, &mut buf)?;
    parse_line(&buf, ctx)
}

pub fn parse_line(line: &[u8], ctx: ParseContext<'_>) -> Result<Tag> {
    let first = *line.first().ok_or(TagsError::EmptyLine)?;
    if !is_printable(first) {
        return Err(TagsError::UnprintableName(first));
    }

    let mut fields = line.split(|&b| b == b'|');
    let name = fields.next().filter(|f| !f.is_empty()).ok_or(TagsError::MissingName)?;
    let mut optional = || fields.next().filter(|f| !f.is_empty()).map(text);
    let var_type = optional();
    let arglist = optional();

    let entry = EntryAttributes {
        var_type,
        arglist,
        file: OwningFile::from_option(ctx.file),
        ..Default::default()
    };
    Ok(Tag::entry(text(name), TagKind::Prototype, entry)?)
}
