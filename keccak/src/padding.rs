//! The pad10*1 padding rule for a rate of 136 bytes.

use alloc::vec;
use alloc::vec::Vec;

use crate::RATE_BYTES;

/// Applies pad10*1, returning `message` extended to a positive multiple of
/// the rate.
///
/// At least one padding byte is always appended, so a rate-aligned message
/// (including the empty one) gains a full extra block. The buffer is
/// allocated at exactly the padded length and zeroed before the two marker
/// bits are set; when only one byte of padding fits, the markers share it
/// and the byte is `0x81`.
pub fn pad(message: &[u8]) -> Vec<u8> {
    let remainder = RATE_BYTES - message.len() % RATE_BYTES;
    let mut padded = vec![0u8; message.len() + remainder];
    padded[..message.len()].copy_from_slice(message);
    padded[message.len()] |= 0x01;
    let last = padded.len() - 1;
    padded[last] |= 0x80;
    padded
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    #[test]
    fn length_is_positive_multiple_of_rate() {
        for len in [0, 1, 135, 136, 137, 200, 271, 272, 1024] {
            let padded = pad(&vec![0xaa; len]);
            assert!(!padded.is_empty());
            assert_eq!(padded.len() % RATE_BYTES, 0);
            assert!(padded.len() > len);
        }
    }

    #[test]
    fn marker_bits_are_set() {
        for len in [0, 1, 134, 136, 137, 270] {
            let message = vec![0u8; len];
            let padded = pad(&message);
            assert_eq!(padded[len] & 0x01, 0x01);
            assert_eq!(padded[padded.len() - 1] & 0x80, 0x80);
        }
    }

    #[test]
    fn empty_message_pads_to_one_block() {
        let padded = pad(&[]);
        assert_eq!(padded.len(), RATE_BYTES);
        assert_eq!(padded[0], 0x01);
        assert_eq!(padded[RATE_BYTES - 1], 0x80);
        assert!(padded[1..RATE_BYTES - 1].iter().all(|&b| b == 0));
    }

    #[test]
    fn aligned_message_gains_full_block() {
        let message = vec![0x55; RATE_BYTES];
        let padded = pad(&message);
        assert_eq!(padded.len(), 2 * RATE_BYTES);
        assert_eq!(&padded[..RATE_BYTES], message.as_slice());
        assert_eq!(padded[RATE_BYTES], 0x01);
        assert_eq!(padded[2 * RATE_BYTES - 1], 0x80);
        assert!(padded[RATE_BYTES + 1..2 * RATE_BYTES - 1].iter().all(|&b| b == 0));
    }

    // With 135 message bytes the two marker bits land in the same byte, and
    // the ors must commute rather than overwrite.
    #[test]
    fn single_padding_byte_is_0x81() {
        let message = vec![0xff; RATE_BYTES - 1];
        let padded = pad(&message);
        assert_eq!(padded.len(), RATE_BYTES);
        assert_eq!(padded[RATE_BYTES - 1], 0x81);
    }

    #[test]
    fn message_bytes_are_preserved() {
        let message: Vec<u8> = (0..200u16).map(|i| i as u8).collect();
        let padded = pad(&message);
        assert_eq!(&padded[..message.len()], message.as_slice());
    }
}
