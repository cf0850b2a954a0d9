// SPDX-License-Identifier: Apache-2.0

//! The decoding cursor.
//!
//! A [`Decoder`] is a small `Copy` value over a caller-owned byte slice. It
//! owns the header engine that every extractor goes through and the
//! container enter/leave protocol.

use core::marker::PhantomData;

use log::trace;

use crate::config::{DecoderConfig, DefaultConfig};
use crate::decode_error::DecodeError;
use crate::shared::{MajorType, Width, BREAK, SIZE_INDEFINITE, VALUE_MASK};

const FLAG_CONTAINER: u8 = 0x01;
const FLAG_INDEFINITE: u8 = 0x02;

/// A cursor over CBOR encoded data.
///
/// Entering an array or map yields a child `Decoder` over the same bytes.
/// The child must be handed back through [`leave_container`] before the
/// parent reads any further siblings.
///
/// Generic over [`DecoderConfig`] for the skip nesting ceiling.
///
/// [`leave_container`]: Decoder::leave_container
pub struct Decoder<'a, C: DecoderConfig = DefaultConfig> {
    /// The whole input; its length is the exclusive end bound
    data: &'a [u8],
    /// Offset of the next initial byte
    pos: usize,
    /// Items left in a definite container, twice the pair count for maps
    remaining: u32,
    flags: u8,
    _config: PhantomData<C>,
}

impl<C: DecoderConfig> Clone for Decoder<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: DecoderConfig> Copy for Decoder<'_, C> {}

impl<C: DecoderConfig> core::fmt::Debug for Decoder<'_, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Decoder")
            .field("pos", &self.pos)
            .field("end", &self.data.len())
            .field("remaining", &self.remaining)
            .field("container", &self.is_container())
            .field("indefinite", &self.is_indefinite())
            .finish()
    }
}

impl<'a> Decoder<'a, DefaultConfig> {
    /// Creates a decoder over `buf` using the default configuration.
    ///
    /// # Example
    /// ```
    /// use picocbor::Decoder;
    /// let mut decoder = Decoder::new(&[0x18, 0x2a]);
    /// assert_eq!(decoder.get_u8(), Ok(42));
    /// ```
    pub fn new(buf: &'a [u8]) -> Self {
        Self::with_config(buf)
    }
}

impl<'a, C: DecoderConfig> Decoder<'a, C> {
    /// Creates a decoder over `buf` with a custom [`DecoderConfig`].
    ///
    /// # Example
    /// ```
    /// use picocbor::{Decoder, RecursionLimit};
    /// let mut decoder = Decoder::<RecursionLimit<2>>::with_config(&[0x81, 0x81, 0x80]);
    /// assert!(decoder.skip().is_err());
    /// ```
    pub fn with_config(buf: &'a [u8]) -> Self {
        Decoder {
            data: buf,
            pos: 0,
            remaining: 0,
            flags: 0,
            _config: PhantomData,
        }
    }

    /// Offset of the cursor from the start of the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of bytes between the cursor and the end of the buffer.
    pub fn remaining_bytes(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Items left to read in a definite container.
    ///
    /// For maps keys and values count separately. Always zero for
    /// indefinite containers and for a top-level decoder.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Pairs left to read in a definite map.
    pub fn pairs_remaining(&self) -> u32 {
        self.remaining / 2
    }

    /// Whether this decoder was produced by entering an array or map.
    pub fn is_container(&self) -> bool {
        self.flags & FLAG_CONTAINER != 0
    }

    /// Whether this decoder iterates an indefinite-length container.
    pub fn is_indefinite(&self) -> bool {
        self.flags & FLAG_INDEFINITE != 0
    }

    fn is_definite_container(&self) -> bool {
        self.flags == FLAG_CONTAINER
    }

    /// Returns true once there is nothing left to read at this level.
    ///
    /// That is the end of the buffer, the break marker of an indefinite
    /// container, or a definite container with no items left. Never moves
    /// the cursor.
    pub fn at_end(&self) -> bool {
        let Some(&byte) = self.data.get(self.pos) else {
            return true;
        };
        if self.is_indefinite() {
            byte == BREAK
        } else if self.is_container() {
            self.remaining == 0
        } else {
            false
        }
    }

    /// Major type of the next item, or [`DecodeError::End`] when at end.
    pub fn get_type(&self) -> Result<MajorType, DecodeError> {
        self.initial_byte().map(MajorType::from_initial_byte)
    }

    /// The next initial byte, or `End` when nothing is left at this level.
    pub(crate) fn initial_byte(&self) -> Result<u8, DecodeError> {
        if self.at_end() {
            return Err(DecodeError::End);
        }
        self.data.get(self.pos).copied().ok_or(DecodeError::End)
    }

    /// Decodes the header at the cursor without consuming it.
    ///
    /// Returns the argument (the literal value, or the big-endian value in
    /// the following bytes) and the total header length. Arguments wider than
    /// `max` fail with `Overflow`.
    pub(crate) fn header(&self, major: MajorType, max: Width) -> Result<(u64, usize), DecodeError> {
        let initial = self.initial_byte()?;
        if MajorType::from_initial_byte(initial) != major {
            return Err(DecodeError::InvalidType);
        }
        let info = initial & VALUE_MASK;
        if info < Width::Byte.additional_info() {
            return Ok((u64::from(info), 1));
        }
        if info > max.additional_info() {
            return Err(DecodeError::Overflow);
        }
        let width = 1usize << (info - Width::Byte.additional_info());
        let argument = self
            .data
            .get(self.pos + 1..)
            .and_then(|rest| rest.get(..width))
            .ok_or(DecodeError::End)?;
        let mut be_bytes = [0u8; 8];
        be_bytes[8 - width..].copy_from_slice(argument);
        Ok((u64::from_be_bytes(be_bytes), 1 + width))
    }

    /// Consumes `len` bytes making up one whole item.
    pub(crate) fn advance(&mut self, len: usize) {
        self.pos += len;
        if self.is_definite_container() {
            self.remaining = self.remaining.saturating_sub(1);
        }
    }

    /// Consumes a prefix of an item, such as a tag header, without counting
    /// it against the container.
    pub(crate) fn advance_header(&mut self, len: usize) {
        self.pos += len;
    }

    /// `len` bytes starting `offset` bytes past the cursor.
    pub(crate) fn bytes_at(&self, offset: usize, len: usize) -> Result<&'a [u8], DecodeError> {
        self.data
            .get(self.pos + offset..)
            .and_then(|rest| rest.get(..len))
            .ok_or(DecodeError::End)
    }

    /// Everything consumed between `start` and the cursor.
    pub(crate) fn consumed_since(&self, start: usize) -> &'a [u8] {
        self.data.get(start..self.pos).unwrap_or_default()
    }

    fn enter_container(&self, major: MajorType) -> Result<Self, DecodeError> {
        let initial = self.initial_byte()?;
        let mut container = Decoder {
            data: self.data,
            pos: self.pos,
            remaining: 0,
            flags: FLAG_CONTAINER,
            _config: PhantomData,
        };
        if initial == major.mask() | SIZE_INDEFINITE {
            container.flags |= FLAG_INDEFINITE;
            container.pos += 1;
        } else {
            let (count, len) = self.header(major, Width::Word)?;
            container.remaining = u32::try_from(count).map_err(|_| DecodeError::Overflow)?;
            container.pos += len;
        }
        trace!(
            "enter {:?} at {}: indefinite={} remaining={}",
            major,
            self.pos,
            container.is_indefinite(),
            container.remaining
        );
        Ok(container)
    }

    /// Enters the array at the cursor, returning a decoder over its items.
    ///
    /// The parent does not move until the child is passed to
    /// [`leave_container`](Self::leave_container).
    pub fn enter_array(&self) -> Result<Self, DecodeError> {
        self.enter_container(MajorType::Array)
    }

    /// Enters the map at the cursor, returning a decoder over its keys and
    /// values. A definite map of `n` pairs holds `2n` remaining items.
    pub fn enter_map(&self) -> Result<Self, DecodeError> {
        let mut map = self.enter_container(MajorType::Map)?;
        if map.remaining > u32::MAX / 2 {
            return Err(DecodeError::Overflow);
        }
        map.remaining *= 2;
        Ok(map)
    }

    /// Merges a container entered from this decoder back into it.
    ///
    /// Moves past everything the child consumed, including the break marker
    /// of an indefinite container, and counts the container as one item.
    pub fn leave_container(&mut self, container: Decoder<'a, C>) {
        debug_assert!(core::ptr::eq(self.data, container.data));
        self.pos = container.pos;
        if container.is_indefinite() && container.data.get(container.pos) == Some(&BREAK) {
            self.pos += 1;
        }
        if self.is_definite_container() {
            self.remaining = self.remaining.saturating_sub(1);
        }
        trace!("leave container, parent at {}", self.pos);
    }
}
