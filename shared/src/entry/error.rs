use thiserror::Error;

use super::EntryKind;

/// Errors that can occur while decoding a single entry line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    /// The line does not split into the number of fields its kind expects
    #[error("{kind} line has {found} fields, expected {expected}: {line:?}")]
    WrongFieldCount {
        kind: EntryKind,
        expected: &'static str,
        found: usize,
        line: String,
    },

    /// A numeric or vector field does not parse
    #[error("{kind} line has an invalid {field} field: {line:?}")]
    InvalidField {
        kind: EntryKind,
        field: &'static str,
        line: String,
    },

    /// A piece line with no prefab name
    #[error("Piece line has an empty prefab name: {line:?}")]
    EmptyName {
        line: String,
    },

    /// A text field that would not read back the same once written as a line
    #[error("{kind} {field} {value:?} {reason}")]
    UnstorableText {
        kind: EntryKind,
        field: &'static str,
        value: String,
        reason: &'static str,
    },
}
