// SPDX-License-Identifier: Apache-2.0

//! Decoder configuration.
//!
//! The only tunable is the nesting ceiling used by [`Decoder::skip`], which
//! bounds the stack used while discarding attacker-controlled input.
//!
//! [`Decoder::skip`]: crate::Decoder::skip

/// Configuration trait for decoders - defines the skip nesting ceiling
pub trait DecoderConfig {
    /// Maximum number of nested containers `skip` will descend into.
    const RECURSION_MAX: u8;
}

/// Default configuration: up to 10 nested containers
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultConfig;

impl DecoderConfig for DefaultConfig {
    const RECURSION_MAX: u8 = 10;
}

/// User-facing configuration with a custom nesting ceiling
/// Usage: `Decoder::<RecursionLimit<32>>::with_config(buf)`
#[derive(Debug, Clone, Copy, Default)]
pub struct RecursionLimit<const N: u8>;

impl<const N: u8> DecoderConfig for RecursionLimit<N> {
    const RECURSION_MAX: u8 = N;
}
