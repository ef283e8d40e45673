use thiserror::Error;

#[derive(Debug, Error)]
/// Errors produced by the lint marker payload parser.
pub enum AceLintError {
    #[error("JSON parse error: {0}")]
    /// The payload is not valid JSON.
    Json(#[from] serde_json::Error),

    #[error("expected a marker array at the top level")]
    /// The top-level payload is not a JSON array.
    ExpectedArray,

    #[error("marker {index} is not an object")]
    /// An element of the marker array is not a JSON object.
    ExpectedObject {
        /// Zero-based index of the offending element.
        index: usize,
    },

    #[error("missing required field: {0}")]
    /// A required key was absent from a marker record.
    MissingField(&'static str),

    #[error("field '{field}' is not {expected}")]
    /// A key was present but held the wrong JSON type.
    InvalidField {
        /// The offending key.
        field: &'static str,
        /// Description of the expected JSON type.
        expected: &'static str,
    },
}
