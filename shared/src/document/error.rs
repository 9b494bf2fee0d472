use thiserror::Error;

use crate::entry::EntryError;

/// Errors that can occur while turning lines into a `BlueprintLocation`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// A data line does not match its section's field layout
    #[error("Malformed entry: {0}")]
    MalformedEntry(#[from] EntryError),

    /// A `#Location` line is not of the form `key: value`
    #[error("Location option line has no ':' separator: {line:?}")]
    MissingOptionValue {
        line: String,
    },

    /// A `#Location` option value does not parse as the option's type
    #[error("Location option {key:?} has invalid value {value:?}, expected {expected}")]
    InvalidOptionValue {
        key: String,
        value: String,
        expected: &'static str,
    },

    /// A quoted `#Description:` value is not a valid JSON string literal
    #[error("Description is not a valid quoted string: {value:?}")]
    InvalidDescription {
        value: String,
    },

    /// The file extension or format tag is not a known blueprint format
    #[error("Format {extension:?} not recognized. Expected .bplocation or .blueprint")]
    UnrecognizedFormat {
        extension: String,
    },
}
