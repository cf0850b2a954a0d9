// SPDX-License-Identifier: Apache-2.0

// Key lookup inside an entered map

use log::debug;

use crate::config::DecoderConfig;
use crate::decode_error::DecodeError;
use crate::decoder::Decoder;

impl<'a, C: DecoderConfig> Decoder<'a, C> {
    /// Scans forward from the current key for a text-string key equal to
    /// `key`, leaving the cursor on its value.
    ///
    /// Keys are compared byte for byte. Values of non-matching keys are
    /// skipped. Returns [`DecodeError::NotFound`] once the map is exhausted;
    /// any other error, including a key that is not a text string, stops the
    /// scan immediately.
    ///
    /// # Example
    /// ```
    /// use picocbor::Decoder;
    /// // {"key": 1}
    /// let data = [0xa1, 0x63, b'k', b'e', b'y', 0x01];
    /// let mut map = Decoder::new(&data).enter_map()?;
    /// map.get_key_tstr("key")?;
    /// assert_eq!(map.get_u8()?, 1);
    /// # Ok::<(), picocbor::DecodeError>(())
    /// ```
    pub fn get_key_tstr(&mut self, key: &str) -> Result<(), DecodeError> {
        while !self.at_end() {
            if self.get_tstr()? == key.as_bytes() {
                return Ok(());
            }
            self.skip()?;
        }
        debug!("key {key:?} not found");
        Err(DecodeError::NotFound)
    }

    /// Like [`get_key_tstr`](Self::get_key_tstr), but works on a copy and
    /// returns a cursor on the value, leaving `self` untouched.
    pub fn find_key_tstr(&self, key: &str) -> Result<Self, DecodeError> {
        let mut cursor = *self;
        cursor.get_key_tstr(key)?;
        Ok(cursor)
    }
}
