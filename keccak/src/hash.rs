//! The single-shot keccak256 hash engine.

use alloc::vec::Vec;

use ks_symmetric::CryptographicHasher;
use tracing::instrument;

use crate::{DIGEST_BYTES, RATE_BYTES, SpongeState, pad};

/// The keccak256 hash function: pad10*1 over a 136-byte rate, 24 rounds of
/// Keccak-f[1600] per block, 32-byte digest.
#[derive(Copy, Clone, Debug, Default)]
pub struct Keccak256;

impl Keccak256 {
    /// Hashes a complete message in one call.
    #[instrument(name = "keccak256", level = "debug", skip_all, fields(len = message.len()))]
    pub fn hash(&self, message: &[u8]) -> [u8; DIGEST_BYTES] {
        let padded = pad(message);
        let mut state = SpongeState::new();
        for block in padded.chunks_exact(RATE_BYTES) {
            state
                .absorb_block(block)
                .expect("padded message splits into rate-sized blocks");
            state.permute();
        }
        state.squeeze()
    }
}

impl CryptographicHasher<u8, [u8; DIGEST_BYTES]> for Keccak256 {
    fn hash_iter<I>(&self, input: I) -> [u8; DIGEST_BYTES]
    where
        I: IntoIterator<Item = u8>,
    {
        let input = input.into_iter().collect::<Vec<_>>();
        self.hash(&input)
    }

    fn hash_iter_slices<'a, I>(&self, input: I) -> [u8; DIGEST_BYTES]
    where
        I: IntoIterator<Item = &'a [u8]>,
    {
        let input = input.into_iter().flatten().copied().collect::<Vec<_>>();
        self.hash(&input)
    }
}
