// SPDX-License-Identifier: Apache-2.0

/// Errors that can occur while decoding CBOR
#[derive(Debug, Clone, PartialEq)]
pub enum DecodeError {
    /// A read would run past the end of the buffer, or the enclosing
    /// container has no items left.
    End,
    /// The item's major type (or literal value) is not what the caller asked for.
    InvalidType,
    /// The decoded value or length does not fit the requested width.
    Overflow,
    /// Skipping descended deeper than the configured nesting limit.
    Recursion,
    /// A map key or tag the caller looked for is absent.
    NotFound,
    /// A text string was not valid UTF-8.
    InvalidUtf8(core::str::Utf8Error),
}

impl From<core::str::Utf8Error> for DecodeError {
    fn from(err: core::str::Utf8Error) -> Self {
        DecodeError::InvalidUtf8(err)
    }
}

impl core::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DecodeError::End => write!(f, "End of data"),
            DecodeError::InvalidType => write!(f, "Invalid type"),
            DecodeError::Overflow => write!(f, "Value overflows the requested width"),
            DecodeError::Recursion => write!(f, "Nesting limit exceeded"),
            DecodeError::NotFound => write!(f, "Not found"),
            DecodeError::InvalidUtf8(e) => write!(f, "Invalid UTF-8: {e}"),
        }
    }
}
