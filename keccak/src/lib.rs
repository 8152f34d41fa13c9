//! The Keccak-f[1600] permutation and the keccak256 hash built on it.
//!
//! Only the keccak256 parameterization is implemented: a rate of 136 bytes,
//! a capacity of 64 bytes and a 32-byte digest.

#![no_std]

extern crate alloc;

mod constants;
mod hash;
mod padding;
mod permutation;
mod sponge;
mod streaming;

pub use hash::*;
pub use padding::*;
pub use permutation::*;
pub use sponge::*;
pub use streaming::*;

/// Number of rounds of Keccak-f[1600].
pub const NUM_ROUNDS: usize = 24;

/// Rate of the keccak256 sponge, in bytes.
pub const RATE_BYTES: usize = 136;

/// Rate of the keccak256 sponge, in 64-bit lanes.
pub const RATE_LANES: usize = RATE_BYTES / 8;

/// Length of the digest, in bytes.
pub const DIGEST_BYTES: usize = 32;
