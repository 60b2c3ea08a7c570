// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Bit addressing within 8-bit samples and MSB-first bit streams.
//!
//! Bit position 0 is the least significant bit, 7 the most significant.
//! Bit streams hold one bit per `u8` entry (0 or 1).

/// Read bit `position` (0 = LSB) of `byte`.
#[inline]
pub fn get_bit(byte: u8, position: u8) -> u8 {
    debug_assert!(position < 8);
    (byte >> position) & 1
}

/// Return `byte` with bit `position` (0 = LSB) set to the low bit of `value`.
#[inline]
pub fn set_bit(byte: u8, position: u8, value: u8) -> u8 {
    debug_assert!(position < 8);
    (byte & !(1 << position)) | ((value & 1) << position)
}

/// Expand bytes to bits, MSB first.
pub fn bytes_to_bits(bytes: &[u8]) -> Vec<u8> {
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    for &byte in bytes {
        for i in (0..8).rev() {
            bits.push(get_bit(byte, i));
        }
    }
    bits
}

/// Pack bits into bytes, MSB first. Trailing bits that do not fill a
/// whole byte are dropped.
pub fn bits_to_bytes(bits: &[u8]) -> Vec<u8> {
    bits.chunks_exact(8)
        .map(|chunk| chunk.iter().fold(0u8, |acc, &b| (acc << 1) | (b & 1)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_bit_positions() {
        assert_eq!(get_bit(0b0000_0101, 0), 1);
        assert_eq!(get_bit(0b0000_0101, 1), 0);
        assert_eq!(get_bit(0b0000_0101, 2), 1);
        assert_eq!(get_bit(0b1000_0000, 7), 1);
    }

    #[test]
    fn set_bit_only_touches_target() {
        assert_eq!(set_bit(0b1111_1111, 3, 0), 0b1111_0111);
        assert_eq!(set_bit(0b0000_0000, 6, 1), 0b0100_0000);
        assert_eq!(set_bit(0b0000_0001, 0, 1), 0b0000_0001);
        // Only the low bit of `value` counts.
        assert_eq!(set_bit(0, 2, 0b10), 0);
    }

    #[test]
    fn msb_first_expansion() {
        assert_eq!(bytes_to_bits(&[5]), vec![0, 0, 0, 0, 0, 1, 0, 1]);
        assert_eq!(bytes_to_bits(&[0x80, 0x01])[..9], [1, 0, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn partial_byte_dropped() {
        let mut bits = bytes_to_bits(&[0xA5, 0x3C]);
        bits.extend_from_slice(&[1, 1, 1]);
        assert_eq!(bits_to_bytes(&bits), vec![0xA5, 0x3C]);
        assert!(bits_to_bytes(&[1, 0, 1]).is_empty());
    }
}
