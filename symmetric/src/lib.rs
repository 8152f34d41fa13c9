//! Trait seams for permutation-based symmetric cryptography.

#![no_std]

mod hasher;
mod permutation;

pub use hasher::*;
pub use permutation::*;
