//! Tag file formats: the native control-byte format, the pipe-delimited format and
//! ctags files. Every parser consumes exactly one record from a [`BufRead`].

pub mod ctags;
pub mod native;
pub mod pipe;

use crate::error::{Result, TagsError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::BufRead;
use std::str::FromStr;
use std::sync::Arc;
use tagdex_api::{LanguageId, SourceFile, Tag, TagRef};

pub use native::{write_tag, write_tags};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagFileFormat {
    #[default]
    Native,
    Pipe,
    Ctags,
}

impl TagFileFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            TagFileFormat::Native => "native",
            TagFileFormat::Pipe => "pipe",
            TagFileFormat::Ctags => "ctags",
        }
    }
}

impl fmt::Display for TagFileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TagFileFormat {
    type Err = TagsError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "native" => Ok(TagFileFormat::Native),
            "pipe" => Ok(TagFileFormat::Pipe),
            "ctags" => Ok(TagFileFormat::Ctags),
            other => Err(TagsError::UnknownFormat(other.to_string())),
        }
    }
}

/// What the caller couples with every parsed record.
#[derive(Debug, Clone, Copy)]
pub struct ParseContext<'a> {
    /// Owner recorded on entry records.
    pub file: Option<&'a Arc<SourceFile>>,
    /// Language stamped on file-kind records.
    pub lang: LanguageId,
}

impl<'a> ParseContext<'a> {
    pub fn new(file: Option<&'a Arc<SourceFile>>, lang: LanguageId) -> Self {
        Self { file, lang }
    }

    pub fn detached(lang: LanguageId) -> Self {
        Self { file: None, lang }
    }
}

/// Read one record in the given format.
pub fn read_tag<R: BufRead>(
    reader: &mut R,
    format: TagFileFormat,
    ctx: ParseContext<'_>,
) -> Result<Tag> {
    match format {
        TagFileFormat::Native => native::read_tag(reader, ctx),
        TagFileFormat::Pipe => pipe::read_tag(reader, ctx),
        TagFileFormat::Ctags => ctags::read_tag(reader, ctx),
    }
}

/// Iterator over the records of a tag stream.
///
/// Ends at end of stream. A failing line is yielded once as an error and ends the
/// iteration, since the remainder of a damaged file cannot be trusted.
pub struct TagFileReader<R> {
    reader: R,
    format: TagFileFormat,
    file: Option<Arc<SourceFile>>,
    lang: LanguageId,
    done: bool,
}

impl<R: BufRead> TagFileReader<R> {
    pub fn new(reader: R, format: TagFileFormat, lang: LanguageId) -> Self {
        Self {
            reader,
            format,
            file: None,
            lang,
            done: false,
        }
    }

    pub fn with_file(mut self, file: Arc<SourceFile>) -> Self {
        self.file = Some(file);
        self
    }
}

impl<R: BufRead> Iterator for TagFileReader<R> {
    type Item = Result<Tag>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let ctx = ParseContext::new(self.file.as_ref(), self.lang);
        match read_tag(&mut self.reader, self.format, ctx) {
            Ok(tag) => Some(Ok(tag)),
            Err(TagsError::Eof) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Load every record of a tag stream.
///
/// Loading stops at the first unparsable line, keeping what was read before it. Only
/// I/O failures are returned as errors.
pub fn load_tags<R: BufRead>(
    reader: R,
    format: TagFileFormat,
    lang: LanguageId,
) -> Result<Vec<TagRef>> {
    let mut tags = Vec::new();
    for item in TagFileReader::new(reader, format, lang) {
        match item {
            Ok(tag) => tags.push(tag.into_ref()),
            Err(TagsError::Io(e)) => return Err(TagsError::Io(e)),
            Err(e) => {
                tracing::warn!(
                    "Stopped reading {} tags after {} records: {}",
                    format,
                    tags.len(),
                    e
                );
                break;
            }
        }
    }
    tracing::debug!("Loaded {} {} tags", tags.len(), format);
    Ok(tags)
}

/// Read one line into `buf` without its `\n` or `\r\n` terminator.
pub(crate) fn read_line<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> Result<()> {
    buf.clear();
    if reader.read_until(b'\n', buf)? == 0 {
        return Err(TagsError::Eof);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    Ok(())
}

/// Leading integer of `bytes`, `atol`-style: optional whitespace and sign, then digits.
/// Anything unparsable yields 0.
pub(crate) fn parse_long(bytes: &[u8]) -> i64 {
    let mut rest = bytes;
    while let [first, tail @ ..] = rest {
        if first.is_ascii_whitespace() {
            rest = tail;
        } else {
            break;
        }
    }
    let negative = match rest.first() {
        Some(b'-') => {
            rest = &rest[1..];
            true
        }
        Some(b'+') => {
            rest = &rest[1..];
            false
        }
        _ => false,
    };
    let value = rest
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .fold(0i64, |acc, b| {
            acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
        });
    if negative { -value } else { value }
}

/// [`parse_long`] narrowed to `i32`; out-of-range values yield 0.
pub(crate) fn parse_int(bytes: &[u8]) -> i32 {
    i32::try_from(parse_long(bytes)).unwrap_or(0)
}

pub(crate) fn parse_line_number(bytes: &[u8]) -> u64 {
    u64::try_from(parse_long(bytes)).unwrap_or(0)
}

pub(crate) fn is_printable(byte: u8) -> bool {
    (0x20..0x7f).contains(&byte)
}

pub(crate) fn text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_long_like_atol() {
        assert_eq!(parse_long(b"42"), 42);
        assert_eq!(parse_long(b"  -7xyz"), -7);
        assert_eq!(parse_long(b"+3"), 3);
        assert_eq!(parse_long(b""), 0);
        assert_eq!(parse_long(b"abc"), 0);
        assert_eq!(parse_line_number(b"-5"), 0);
        assert_eq!(parse_int(b"-12"), -12);
        assert_eq!(parse_int(b"4294967296"), 0);
    }

    #[test]
    fn test_read_line_strips_line_terminators() {
        let mut reader = Cursor::new(b"one\r\ntwo".to_vec());
        let mut buf = Vec::new();
        read_line(&mut reader, &mut buf).unwrap();
        assert_eq!(buf, b"one");
        read_line(&mut reader, &mut buf).unwrap();
        assert_eq!(buf, b"two");
        assert!(matches!(read_line(&mut reader, &mut buf), Err(TagsError::Eof)));
    }

    #[test]
    fn test_format_names() {
        for format in [
            TagFileFormat::Native,
            TagFileFormat::Pipe,
            TagFileFormat::Ctags,
        ] {
            assert_eq!(format.as_str().parse::<TagFileFormat>().unwrap(), format);
        }
        assert!(matches!(
            "etags".parse::<TagFileFormat>(),
            Err(TagsError::UnknownFormat(_))
        ));
    }

    #[test]
    fn test_reader_stops_at_first_bad_line() {
        let input = "alpha|int\nbeta|void\n\ngamma|char\n";
        let items: Vec<_> =
            TagFileReader::new(Cursor::new(input), TagFileFormat::Pipe, LanguageId(0)).collect();
        assert_eq!(items.len(), 3);
        assert!(items[0].is_ok());
        assert!(items[1].is_ok());
        assert!(matches!(items[2], Err(TagsError::EmptyLine)));
    }

    #[test]
    fn test_crlf_files_parse_alike() {
        let pipe = load_tags(
            Cursor::new("bar|int|(int x)|desc\r\nbaz|char|(void)\r\n"),
            TagFileFormat::Pipe,
            LanguageId(0),
        )
        .unwrap();
        assert_eq!(pipe[0].arglist(), Some("(int x)"));
        assert_eq!(pipe[1].arglist(), Some("(void)"));

        let mut native = b"f".to_vec();
        native.extend_from_slice(&[native::field::TYPE]);
        native.extend_from_slice(b"16");
        native.extend_from_slice(&[native::field::ARGLIST]);
        native.extend_from_slice(b"(a)\r\n");
        let tags = load_tags(Cursor::new(native), TagFileFormat::Native, LanguageId(0)).unwrap();
        assert_eq!(tags[0].kind(), tagdex_api::TagKind::Function);
        assert_eq!(tags[0].arglist(), Some("(a)"));
    }

    #[test]
    fn test_load_tags_keeps_records_before_failure() {
        let input = "alpha|int\nbeta|void\n\ngamma|char\n";
        let tags = load_tags(Cursor::new(input), TagFileFormat::Pipe, LanguageId(0)).unwrap();
        let names: Vec<_> = tags.iter().map(|t| t.name()).collect();
        assert_eq!(names, ["alpha", "beta"]);
    }
}
