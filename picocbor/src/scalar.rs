// SPDX-License-Identifier: Apache-2.0

// Typed readers for non-container items

use log::debug;

use crate::config::DecoderConfig;
use crate::decode_error::DecodeError;
use crate::decoder::Decoder;
use crate::shared::{
    MajorType, Width, SIMPLE_FALSE, SIMPLE_NULL, SIMPLE_TRUE, SIMPLE_UNDEFINED,
    TAG_DECIMAL_FRACTION,
};

const FALSE: u8 = MajorType::Float.mask() | SIMPLE_FALSE;
const TRUE: u8 = MajorType::Float.mask() | SIMPLE_TRUE;
const NULL: u8 = MajorType::Float.mask() | SIMPLE_NULL;
const UNDEFINED: u8 = MajorType::Float.mask() | SIMPLE_UNDEFINED;

/// Creates a reader for an unsigned integer type, bounding the header to `$width`.
macro_rules! define_uint_getter {
    ($fn_name:ident, $int_ty:ty, $width:expr) => {
        /// Reads an unsigned integer into a(n) `
        #[doc = stringify!($int_ty)]
        /// ` and advances past it.
        ///
        /// Fails with `InvalidType` on anything but major type 0 and with
        /// `Overflow` when the encoded argument is wider than the target.
        pub fn $fn_name(&mut self) -> Result<$int_ty, DecodeError> {
            let (value, len) = self.header(MajorType::Unsigned, $width)?;
            let value = <$int_ty>::try_from(value).map_err(|_| DecodeError::Overflow)?;
            self.advance(len);
            Ok(value)
        }
    };
}

/// Creates a reader for a signed integer type, bounding the header to `$width`.
macro_rules! define_int_getter {
    ($fn_name:ident, $int_ty:ty, $width:expr) => {
        /// Reads an unsigned or negative integer into a(n) `
        #[doc = stringify!($int_ty)]
        /// ` and advances past it.
        ///
        /// A negative item with argument `n` is the value `-n - 1`. Magnitudes
        /// above the type's positive bound fail with `Overflow`.
        pub fn $fn_name(&mut self) -> Result<$int_ty, DecodeError> {
            let (value, len) = match self.get_type()? {
                MajorType::Unsigned => {
                    let (magnitude, len) = self.header(MajorType::Unsigned, $width)?;
                    let value = <$int_ty>::try_from(magnitude).map_err(|_| DecodeError::Overflow)?;
                    (value, len)
                }
                MajorType::Negative => {
                    let (magnitude, len) = self.header(MajorType::Negative, $width)?;
                    let magnitude =
                        <$int_ty>::try_from(magnitude).map_err(|_| DecodeError::Overflow)?;
                    (-magnitude - 1, len)
                }
                _ => return Err(DecodeError::InvalidType),
            };
            self.advance(len);
            Ok(value)
        }
    };
}

impl<'a, C: DecoderConfig> Decoder<'a, C> {
    define_uint_getter!(get_u8, u8, Width::Byte);
    define_uint_getter!(get_u16, u16, Width::Short);
    define_uint_getter!(get_u32, u32, Width::Word);
    #[cfg(feature = "int64")]
    define_uint_getter!(get_u64, u64, Width::Long);

    define_int_getter!(get_i8, i8, Width::Byte);
    define_int_getter!(get_i16, i16, Width::Short);
    define_int_getter!(get_i32, i32, Width::Word);
    #[cfg(feature = "int64")]
    define_int_getter!(get_i64, i64, Width::Long);

    /// Reads `false` or `true`.
    pub fn get_bool(&mut self) -> Result<bool, DecodeError> {
        let value = match self.initial_byte()? {
            FALSE => false,
            TRUE => true,
            _ => return Err(DecodeError::InvalidType),
        };
        self.advance(1);
        Ok(value)
    }

    /// Reads a `null`.
    pub fn get_null(&mut self) -> Result<(), DecodeError> {
        self.get_literal(NULL)
    }

    /// Reads an `undefined`.
    pub fn get_undefined(&mut self) -> Result<(), DecodeError> {
        self.get_literal(UNDEFINED)
    }

    fn get_literal(&mut self, expected: u8) -> Result<(), DecodeError> {
        if self.initial_byte()? != expected {
            return Err(DecodeError::InvalidType);
        }
        self.advance(1);
        Ok(())
    }

    /// Reads a simple value, including `false`, `true`, `null` and
    /// `undefined` as 20 to 23.
    ///
    /// Floats share the major type but carry a wider argument, so they fail
    /// with `Overflow`.
    pub fn get_simple(&mut self) -> Result<u8, DecodeError> {
        let (value, len) = self.header(MajorType::Float, Width::Byte)?;
        let value = u8::try_from(value).map_err(|_| DecodeError::Overflow)?;
        self.advance(len);
        Ok(value)
    }

    fn get_string(&mut self, major: MajorType) -> Result<&'a [u8], DecodeError> {
        let (len, header_len) = self.header(major, Width::SIZE)?;
        let len = usize::try_from(len).map_err(|_| DecodeError::Overflow)?;
        let payload = self.bytes_at(header_len, len)?;
        self.advance(header_len + len);
        Ok(payload)
    }

    /// Reads a definite-length byte string, borrowing it from the input.
    pub fn get_bstr(&mut self) -> Result<&'a [u8], DecodeError> {
        self.get_string(MajorType::Bytes)
    }

    /// Reads a definite-length text string as raw bytes, borrowing it from
    /// the input. The content is not checked for UTF-8.
    pub fn get_tstr(&mut self) -> Result<&'a [u8], DecodeError> {
        self.get_string(MajorType::Text)
    }

    /// Reads a definite-length text string and validates it as UTF-8.
    pub fn get_str(&mut self) -> Result<&'a str, DecodeError> {
        let mut probe = *self;
        let text = core::str::from_utf8(probe.get_tstr()?)?;
        *self = probe;
        Ok(text)
    }

    /// Reads a tag number and advances past the tag header only.
    ///
    /// The tag and the item it annotates count as one container item, the
    /// count is taken when the tagged item is read.
    pub fn get_tag(&mut self) -> Result<u32, DecodeError> {
        let (tag, len) = self.header(MajorType::Tag, Width::Word)?;
        let tag = u32::try_from(tag).map_err(|_| DecodeError::Overflow)?;
        self.advance_header(len);
        Ok(tag)
    }

    /// Reads a decimal fraction (tag 4) as `(exponent, mantissa)`.
    ///
    /// Any other tag gives `NotFound` and leaves the cursor on the tag. The
    /// tagged array must hold exactly two integers; extra elements give
    /// `InvalidType` after the whole array has been consumed.
    pub fn get_decimal_frac(&mut self) -> Result<(i32, i32), DecodeError> {
        let (tag, len) = self.header(MajorType::Tag, Width::Word)?;
        if tag != u64::from(TAG_DECIMAL_FRACTION) {
            debug!("expected decimal fraction tag, found {tag}");
            return Err(DecodeError::NotFound);
        }
        self.advance_header(len);
        let mut array = self.enter_array()?;
        let mut fraction = Self::read_fraction(&mut array);
        if fraction.is_ok() && !array.at_end() {
            debug!("decimal fraction has more than two elements");
            fraction = Err(DecodeError::InvalidType);
            // Drain the extra elements so the parent resumes after the array
            while !array.at_end() {
                if array.skip().is_err() {
                    break;
                }
            }
        }
        self.leave_container(array);
        fraction
    }

    fn read_fraction(array: &mut Self) -> Result<(i32, i32), DecodeError> {
        let exponent = array.get_i32()?;
        let mantissa = array.get_i32()?;
        Ok((exponent, mantissa))
    }
}
