/// Structural problems found while walking a vector tile buffer.
///
/// Offsets are absolute byte positions in the buffer passed to
/// [`decode`](crate::decode).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The buffer ended inside a varint, or the varint was longer than ten
    /// bytes / wider than 64 bits.
    #[error("truncated varint at offset {offset}")]
    TruncatedVarint { offset: usize },

    /// A length-delimited or fixed-width value extends past the end of its
    /// enclosing message.
    #[error("truncated message at offset {offset}: need {needed} bytes, {remaining} remaining")]
    TruncatedMessage {
        offset: usize,
        needed: u64,
        remaining: usize,
    },

    /// A tag carried a wire type code other than varint, fixed64,
    /// length-delimited or fixed32.
    #[error("unknown pbf field type exception (wire type {code} at offset {offset})")]
    UnknownWireType { offset: usize, code: u8 },

    /// A known field was encoded with the wrong wire type.
    #[error("{message}.{field} must be {expected}, found {found} at offset {offset}")]
    SchemaViolation {
        message: &'static str,
        field: &'static str,
        expected: &'static str,
        found: &'static str,
        offset: usize,
    },

    #[error("missing required field {message}.{field}")]
    MissingRequiredField {
        message: &'static str,
        field: &'static str,
    },
}

impl DecodeError {
    /// True for the kinds caused by the buffer ending early.
    pub fn is_truncation(&self) -> bool {
        matches!(
            self,
            DecodeError::TruncatedVarint { .. } | DecodeError::TruncatedMessage { .. }
        )
    }
}

/// Errors reported by [`decode`](crate::decode) and [`info`](crate::info).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The argument was absent or not a byte buffer. No parsing was attempted.
    #[error("first argument must be a valid buffer")]
    InvalidArgument,

    #[error("there was an error decoding the vector tile buffer: {0}")]
    DecodeFailure(#[source] DecodeError),
}

impl Error {
    /// The structural cause of a [`Error::DecodeFailure`].
    pub fn cause(&self) -> Option<&DecodeError> {
        match self {
            Error::InvalidArgument => None,
            Error::DecodeFailure(err) => Some(err),
        }
    }
}

impl From<DecodeError> for Error {
    fn from(val: DecodeError) -> Self {
        Error::DecodeFailure(val)
    }
}
