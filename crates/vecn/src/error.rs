//! Error types.

/// Returned when accessing a vector component by an index that is not in `0..N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("index {index} is out of range for a vector with {len} components")]
pub struct OutOfRange {
    /// The offending index.
    pub index: usize,
    /// The number of components of the vector.
    pub len: usize,
}

/// Errors that can occur while parsing a vector from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// There was no input at all.
    #[error("no input to parse a vector from")]
    NoInput,

    /// The input did not split into the expected number of components.
    #[error("expected {expected} components, found {found}")]
    ComponentCount { expected: usize, found: usize },

    /// A component could not be parsed as a number.
    #[error("component {index} (`{text}`) is invalid: {reason}")]
    InvalidComponent {
        index: usize,
        text: String,
        reason: String,
    },
}

impl ParseError {
    /// Returns whether this is a *format error*: the input was present but malformed.
    ///
    /// [`ParseError::NoInput`] is the only error that is not a format error.
    pub fn is_format_error(&self) -> bool {
        !matches!(self, Self::NoInput)
    }
}
