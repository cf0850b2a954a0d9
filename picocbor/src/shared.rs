// SPDX-License-Identifier: Apache-2.0

//! Shared wire-level definitions for the CBOR decoder

/// Mask selecting the major type bits of an initial byte
pub(crate) const TYPE_MASK: u8 = 0xE0;
/// Mask selecting the additional information bits of an initial byte
pub(crate) const VALUE_MASK: u8 = 0x1F;
pub(crate) const TYPE_OFFSET: u8 = 5;

/// Additional information value marking an indefinite-length item
pub(crate) const SIZE_INDEFINITE: u8 = 31;

pub(crate) const SIMPLE_FALSE: u8 = 20;
pub(crate) const SIMPLE_TRUE: u8 = 21;
pub(crate) const SIMPLE_NULL: u8 = 22;
pub(crate) const SIMPLE_UNDEFINED: u8 = 23;

/// The break stop code terminating indefinite-length containers
pub(crate) const BREAK: u8 = MajorType::Float.mask() | SIZE_INDEFINITE;

/// Tag number of a decimal fraction, RFC 8949 section 3.4.4
pub const TAG_DECIMAL_FRACTION: u32 = 4;

/// The eight CBOR major types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MajorType {
    /// Major type 0: an unsigned integer.
    Unsigned = 0,
    /// Major type 1: a negative integer.
    Negative = 1,
    /// Major type 2: a byte string.
    Bytes = 2,
    /// Major type 3: a UTF-8 text string.
    Text = 3,
    /// Major type 4: an array of data items.
    Array = 4,
    /// Major type 5: a map of pairs of data items.
    Map = 5,
    /// Major type 6: a tagged data item.
    Tag = 6,
    /// Major type 7: floating point numbers and simple values.
    Float = 7,
}

impl MajorType {
    /// Classifies an initial byte by its top three bits.
    pub const fn from_initial_byte(byte: u8) -> Self {
        match (byte & TYPE_MASK) >> TYPE_OFFSET {
            0 => MajorType::Unsigned,
            1 => MajorType::Negative,
            2 => MajorType::Bytes,
            3 => MajorType::Text,
            4 => MajorType::Array,
            5 => MajorType::Map,
            6 => MajorType::Tag,
            _ => MajorType::Float,
        }
    }

    /// The initial byte with this major type and zero additional information.
    pub const fn mask(self) -> u8 {
        (self as u8) << TYPE_OFFSET
    }
}

/// Width of the argument following an initial byte.
///
/// Used as an upper bound: a header whose argument needs more bytes than the
/// caller permits is rejected with `Overflow`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Width {
    /// One following byte (additional information 24).
    Byte = 24,
    /// Two following bytes (additional information 25).
    Short = 25,
    /// Four following bytes (additional information 26).
    Word = 26,
    /// Eight following bytes (additional information 27).
    Long = 27,
}

impl Width {
    /// Width able to hold any `usize` on the current target.
    #[cfg(target_pointer_width = "64")]
    pub const SIZE: Width = Width::Long;
    #[cfg(not(target_pointer_width = "64"))]
    pub const SIZE: Width = Width::Word;

    /// Number of bytes following the initial byte.
    pub const fn bytes(self) -> usize {
        1 << (self as u8 - Width::Byte as u8)
    }

    /// The additional information value selecting this width.
    pub const fn additional_info(self) -> u8 {
        self as u8
    }
}
