// SPDX-License-Identifier: Apache-2.0

//! A zero-copy CBOR (RFC 8949) decoder for resource-constrained systems.
//!
//! Decoding never allocates and never copies: strings are returned as slices
//! of the input, containers are walked with child [`Decoder`] cursors that
//! are explicitly merged back into their parent, and skipping untrusted data
//! is bounded by a configurable nesting ceiling.
//!
//! ```
//! use picocbor::Decoder;
//!
//! // [_ 1, 2]
//! let data = [0x9f, 0x01, 0x02, 0xff];
//! let mut decoder = Decoder::new(&data);
//! let mut array = decoder.enter_array()?;
//! assert_eq!(array.get_u32()?, 1);
//! assert_eq!(array.get_u32()?, 2);
//! assert!(array.at_end());
//! decoder.leave_container(array);
//! assert!(decoder.at_end());
//! # Ok::<(), picocbor::DecodeError>(())
//! ```

#![cfg_attr(not(test), no_std)]

mod config;
pub use config::{DecoderConfig, DefaultConfig, RecursionLimit};

mod decode_error;
pub use decode_error::DecodeError;

mod decoder;
pub use decoder::Decoder;

mod shared;
pub use shared::{MajorType, Width, TAG_DECIMAL_FRACTION};

mod map;
mod scalar;
mod skip;
