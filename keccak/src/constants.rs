//! Constant tables for the Keccak-f[1600] round function.

use crate::NUM_ROUNDS;

/// The round constant xored into lane (0, 0) by the iota step.
pub(crate) const RC: [u64; NUM_ROUNDS] = [
    0x0000000000000001,
    0x0000000000008082,
    0x800000000000808a,
    0x8000000080008000,
    0x000000000000808b,
    0x0000000080000001,
    0x8000000080008081,
    0x8000000000008009,
    0x000000000000008a,
    0x0000000000000088,
    0x0000000080008009,
    0x000000008000000a,
    0x000000008000808b,
    0x800000000000008b,
    0x8000000000008089,
    0x8000000000008003,
    0x8000000000008002,
    0x8000000000000080,
    0x000000000000800a,
    0x800000008000000a,
    0x8000000080008081,
    0x8000000000008080,
    0x0000000080000001,
    0x8000000080008008,
];

/// Left-rotation amount applied to each lane by the rho step, indexed by
/// `x + 5 * y`.
#[rustfmt::skip]
pub(crate) const RHO_OFFSETS: [u32; 25] = [
     0,  1, 62, 28, 27,
    36, 44,  6, 55, 20,
     3, 10, 43, 25, 39,
    41, 45, 15, 21,  8,
    18,  2, 61, 56, 14,
];

/// Destination index of each lane under the pi step, indexed by `x + 5 * y`.
/// Lane (x, y) moves to (y, 2x + 3y).
#[rustfmt::skip]
pub(crate) const PI_DESTS: [usize; 25] = [
     0, 10, 20,  5, 15,
    16,  1, 11, 21,  6,
     7, 17,  2, 12, 22,
    23,  8, 18,  3, 13,
    14, 24,  9, 19,  4,
];
