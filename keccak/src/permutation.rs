//! The Keccak-f[1600] permutation.

use ks_symmetric::{CryptographicPermutation, Permutation};

use crate::constants::{PI_DESTS, RC, RHO_OFFSETS};

/// The Keccak-f[1600] permutation over 25 64-bit lanes.
///
/// Lane `(x, y)` lives at index `x + 5 * y`.
#[derive(Copy, Clone, Debug, Default)]
pub struct KeccakF;

impl Permutation<[u64; 25]> for KeccakF {
    fn permute_mut(&self, state: &mut [u64; 25]) {
        for &rc in &RC {
            round(state, rc);
        }
    }
}

impl CryptographicPermutation<[u64; 25]> for KeccakF {}

/// One round: theta, rho, pi, chi, iota.
fn round(state: &mut [u64; 25], rc: u64) {
    // Theta. C[x] is the parity of column x; D[x] is folded into every lane
    // of that column.
    let c: [u64; 5] = core::array::from_fn(|x| {
        state[x] ^ state[x + 5] ^ state[x + 10] ^ state[x + 15] ^ state[x + 20]
    });
    let d: [u64; 5] = core::array::from_fn(|x| c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1));
    for (i, lane) in state.iter_mut().enumerate() {
        *lane ^= d[i % 5];
    }

    // Rho and pi in one pass, buffered so every destination reads the
    // pre-pi value of its source lane.
    let mut b = [0u64; 25];
    for (i, &lane) in state.iter().enumerate() {
        b[PI_DESTS[i]] = lane.rotate_left(RHO_OFFSETS[i]);
    }

    // Chi, row by row against the pre-chi values held in `b`.
    for y in 0..5 {
        for x in 0..5 {
            state[x + 5 * y] =
                b[x + 5 * y] ^ (!b[(x + 1) % 5 + 5 * y] & b[(x + 2) % 5 + 5 * y]);
        }
    }

    // Iota.
    state[0] ^= rc;
}
