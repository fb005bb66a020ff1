use thiserror::Error;

#[derive(Error, Debug)]
pub enum TagsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("End of tag stream")]
    Eof,
    #[error("Empty tag line")]
    EmptyLine,
    #[error("Neither a producer entry nor a source file was given")]
    NoSource,
    #[error("Tag line has no name")]
    MissingName,
    #[error("Tag name starts with an unprintable byte 0x{0:02x}")]
    UnprintableName(u8),
    #[error("Got {field} attribute for non-file tag {name}")]
    FileOnlyField { field: &'static str, name: String },
    #[error("Malformed {format} line: {reason}")]
    Malformed {
        format: &'static str,
        reason: &'static str,
    },
    #[error("Unknown tag file format: {0}")]
    UnknownFormat(String),
    #[error("Invalid tag record: {0}")]
    Record(#[from] tagdex_api::ApiError),
}

pub type Result<T> = std::result::Result<T, TagsError>;
