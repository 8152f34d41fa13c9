//! The sponge state and its block-level absorb/squeeze operations.

use ks_symmetric::Permutation;
use thiserror::Error;

use crate::{DIGEST_BYTES, KeccakF, RATE_BYTES, RATE_LANES};

/// The error returned when [`SpongeState::absorb_block`] is handed a block
/// that is not exactly one rate in length. Always caller misuse; the block
/// is neither truncated nor padded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("block is {0} bytes, expected {expected}", expected = RATE_BYTES)]
pub struct InvalidBlockSize(pub usize);

/// The 1600-bit state of one keccak256 hash session.
///
/// Lane `(x, y)` lives at index `x + 5 * y`. The first 17 lanes are the
/// rate; the remaining 8 are the capacity and are never written by
/// absorption.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpongeState {
    lanes: [u64; 25],
}

impl SpongeState {
    /// A fresh all-zero state.
    pub const fn new() -> Self {
        Self { lanes: [0; 25] }
    }

    /// XORs one rate-sized block into the rate lanes, interpreting bytes
    /// `[8i, 8i + 8)` as the little-endian value of lane `i`.
    ///
    /// Absorption alone does not advance the sponge; call
    /// [`SpongeState::permute`] after every absorbed block.
    pub fn absorb_block(&mut self, block: &[u8]) -> Result<(), InvalidBlockSize> {
        if block.len() != RATE_BYTES {
            return Err(InvalidBlockSize(block.len()));
        }
        for (lane, chunk) in self.lanes[..RATE_LANES]
            .iter_mut()
            .zip(block.chunks_exact(8))
        {
            *lane ^= u64::from_le_bytes(chunk.try_into().expect("chunks are 8 bytes"));
        }
        Ok(())
    }

    /// Runs Keccak-f[1600] over the state.
    pub fn permute(&mut self) {
        KeccakF.permute_mut(&mut self.lanes);
    }

    /// Reads the 32-byte digest out of the first four lanes, each lane
    /// emitted as its little-endian bytes.
    ///
    /// This is a pure read; session-level wrappers reset the state
    /// immediately after squeezing.
    pub fn squeeze(&self) -> [u8; DIGEST_BYTES] {
        let mut digest = [0u8; DIGEST_BYTES];
        for (chunk, lane) in digest.chunks_exact_mut(8).zip(self.lanes) {
            chunk.copy_from_slice(&lane.to_le_bytes());
        }
        digest
    }

    /// Returns the state to its all-zero start-of-session value.
    pub fn reset(&mut self) {
        self.lanes = [0; 25];
    }

    /// The raw lanes.
    pub const fn lanes(&self) -> &[u64; 25] {
        &self.lanes
    }
}
