//! A sponge persisted across multiple absorb calls.

use crate::{DIGEST_BYTES, RATE_BYTES, SpongeState, pad};

/// A sponge whose state persists across `absorb` calls.
///
/// Every call to [`StatefulSponge::absorb`] applies terminal pad10*1 padding
/// to its chunk before absorbing it, so the digest is only guaranteed to
/// match [`Keccak256::hash`](crate::Keccak256::hash) for the call sequence
/// {one `absorb`, one [`StatefulSponge::finalize_and_squeeze`]}. Splitting a
/// message across several `absorb` calls pads every piece independently and
/// in general does not produce the digest of the concatenation. Callers that
/// need genuine incremental hashing must buffer not-yet-absorbed bytes
/// themselves and absorb the whole message once.
#[derive(Clone, Debug, Default)]
pub struct StatefulSponge {
    state: SpongeState,
}

impl StatefulSponge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pads `chunk` as a complete message and absorbs the resulting blocks
    /// into the persisted state.
    pub fn absorb(&mut self, chunk: &[u8]) {
        let padded = pad(chunk);
        for block in padded.chunks_exact(RATE_BYTES) {
            self.state
                .absorb_block(block)
                .expect("padded chunk splits into rate-sized blocks");
            self.state.permute();
        }
    }

    /// Squeezes the digest, then resets the state so the instance starts a
    /// fresh session.
    pub fn finalize_and_squeeze(&mut self) -> [u8; DIGEST_BYTES] {
        let digest = self.state.squeeze();
        self.state.reset();
        digest
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::Keccak256;

    #[test]
    fn single_absorb_matches_one_shot_hash() {
        for len in [0usize, 1, 135, 136, 137, 500] {
            let message = vec![0x5au8; len];
            let mut sponge = StatefulSponge::new();
            sponge.absorb(&message);
            assert_eq!(
                sponge.finalize_and_squeeze(),
                Keccak256.hash(&message),
                "length {len}"
            );
        }
    }

    #[test]
    fn finalize_resets_for_a_fresh_session() {
        let mut sponge = StatefulSponge::new();
        sponge.absorb(b"first session");
        let first = sponge.finalize_and_squeeze();
        sponge.absorb(b"first session");
        assert_eq!(sponge.finalize_and_squeeze(), first);
    }

    // Each absorb call re-applies terminal padding, so two absorbs are NOT
    // the hash of the concatenation; they are the per-call-padded
    // composition, pinned here against the block-level primitives.
    #[test]
    fn two_absorbs_do_not_concatenate() {
        let a = b"first chunk of the message";
        let b = b"second chunk of the message";

        let mut sponge = StatefulSponge::new();
        sponge.absorb(a);
        sponge.absorb(b);
        let digest = sponge.finalize_and_squeeze();

        let mut concatenated = a.to_vec();
        concatenated.extend_from_slice(b);
        assert_ne!(digest, Keccak256.hash(&concatenated));

        let mut state = SpongeState::new();
        for chunk in [a.as_slice(), b.as_slice()] {
            for block in pad(chunk).chunks_exact(RATE_BYTES) {
                state.absorb_block(block).unwrap();
                state.permute();
            }
        }
        assert_eq!(digest, state.squeeze());
    }
}
