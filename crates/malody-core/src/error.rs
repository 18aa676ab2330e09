use std::fmt;

use thiserror::Error;

use crate::mode::Mode;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Denominator must be a positive integer (got {denominator})")]
    InvalidDenominator { denominator: i64 },

    #[error("Missing required field(s): {}", .0.join(", "))]
    MissingField(Vec<String>),

    #[error("Field type mismatch: {}", format_type_faults(.0))]
    FieldTypeMismatch(Vec<FieldTypeFault>),

    #[error("Unsupported mode ID: {0}")]
    UnsupportedMode(String),

    #[error("Mode {0} is not implemented yet")]
    ModeNotImplemented(Mode),

    #[error("Mode mismatch: expected {expected}, got {actual}")]
    ModeMismatch { expected: Mode, actual: Mode },

    #[error("Invalid {kind} entry: {message}")]
    InvalidEntry { kind: &'static str, message: String },

    #[error("Invalid mode extension: {0}")]
    InvalidExtension(String),

    #[error("Invalid creation timestamp: {0}")]
    InvalidTimestamp(i64),

    #[error("Invalid chart document: {0}")]
    InvalidDocument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid_entry(kind: &'static str, message: impl Into<String>) -> Self {
        Error::InvalidEntry {
            kind,
            message: message.into(),
        }
    }
}

/// Semantic type a metadata field is declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldType {
    Integer,
    Text,
    /// Nested object such as the song block
    Group,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Integer => write!(f, "integer"),
            FieldType::Text => write!(f, "string"),
            FieldType::Group => write!(f, "object"),
        }
    }
}

/// A metadata field present with a value of the wrong semantic type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldTypeFault {
    pub key: String,
    pub expected: FieldType,
    /// JSON type name of the value actually received
    pub actual: &'static str,
}

/// Render faults grouped by expected type, in first-seen order:
/// `on preview (given string), expected integer; on creator (given integer), expected string`
fn format_type_faults(faults: &[FieldTypeFault]) -> String {
    let mut groups: Vec<(FieldType, Vec<&FieldTypeFault>)> = Vec::new();
    for fault in faults {
        match groups.iter_mut().find(|(ty, _)| *ty == fault.expected) {
            Some((_, members)) => members.push(fault),
            None => groups.push((fault.expected, vec![fault])),
        }
    }

    groups
        .iter()
        .map(|(expected, members)| {
            let keys = members
                .iter()
                .map(|f| format!("{} (given {})", f.key, f.actual))
                .collect::<Vec<_>>()
                .join(", ");
            format!("on {}, expected {}", keys, expected)
        })
        .collect::<Vec<_>>()
        .join("; ")
}
