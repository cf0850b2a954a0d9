// SPDX-License-Identifier: Apache-2.0

//! Structural skipping with a hard nesting ceiling.
//!
//! Recursion only happens when entering an array or map, and is refused once
//! the ceiling is reached, so stack use stays bounded by the configuration
//! no matter how deeply the input nests. Tag chains are walked iteratively.

use log::debug;

use crate::config::DecoderConfig;
use crate::decode_error::DecodeError;
use crate::decoder::Decoder;
use crate::shared::{MajorType, Width};

impl<'a, C: DecoderConfig> Decoder<'a, C> {
    /// Discards the next item, whatever its shape, nesting at most
    /// `C::RECURSION_MAX` containers deep.
    pub fn skip(&mut self) -> Result<(), DecodeError> {
        self.skip_limited(C::RECURSION_MAX)
    }

    /// Discards the next item, nesting at most `limit` containers deep.
    ///
    /// Only arrays and maps count against the limit: `limit` nested
    /// containers are skipped whatever their leaves, and a scalar needs no
    /// budget at all, so `skip_limited(0)` still skips an integer. A
    /// container that would be entered past the limit fails with
    /// [`DecodeError::Recursion`] without reading any further.
    pub fn skip_limited(&mut self, limit: u8) -> Result<(), DecodeError> {
        self.skip_at_depth(0, limit)
    }

    fn skip_at_depth(&mut self, depth: u8, limit: u8) -> Result<(), DecodeError> {
        let mut major = self.get_type()?;
        while major == MajorType::Tag {
            let (_, len) = self.header(MajorType::Tag, Width::Long)?;
            self.advance_header(len);
            major = self.get_type()?;
        }
        match major {
            MajorType::Bytes => self.get_bstr().map(|_| ()),
            MajorType::Text => self.get_tstr().map(|_| ()),
            MajorType::Array | MajorType::Map => {
                if depth >= limit {
                    debug!("skip refused at depth {depth}, limit {limit}");
                    return Err(DecodeError::Recursion);
                }
                let mut container = if major == MajorType::Map {
                    self.enter_map()?
                } else {
                    self.enter_array()?
                };
                let mut result = Ok(());
                while !container.at_end() {
                    result = container.skip_at_depth(depth + 1, limit);
                    if result.is_err() {
                        break;
                    }
                }
                self.leave_container(container);
                result
            }
            _ => self.skip_simple(),
        }
    }

    /// Discards one item that has no payload beyond its header: an integer,
    /// a tag header, a simple value or a float.
    pub fn skip_simple(&mut self) -> Result<(), DecodeError> {
        let (_, len) = self.header(self.get_type()?, Width::Long)?;
        self.advance(len);
        Ok(())
    }

    /// Skips the next item and returns its complete encoding, borrowed from
    /// the input, for later decoding with a fresh [`Decoder`].
    pub fn get_subcbor(&mut self) -> Result<&'a [u8], DecodeError> {
        let start = self.position();
        self.skip()?;
        Ok(self.consumed_since(start))
    }
}
