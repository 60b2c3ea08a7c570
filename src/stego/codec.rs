// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Bit-plane embedding and extraction over a pixel sequence.
//!
//! A chromosome selects `k` (1–4) bit positions per pixel. The payload is
//! expanded MSB-first into a bit stream and written `k` bits per pixel, lowest
//! selected position first, into successive pixels of the sequence:
//!
//! ```text
//! payload  0x05 → 0 0 0 0 0 1 0 1        mask 0b0011 (k = 2)
//! pixel    p0    p1    p2    p3
//! bits     [0,0] [0,0] [0,1] [0,1]       (bit 0, bit 1) of each pixel
//! ```
//!
//! The payload length is not recorded in the carrier; the decoder must be
//! told how many pixels to read ([`payload_pixel_count`]).

use crate::stego::bits::{bits_to_bytes, bytes_to_bits, get_bit, set_bit};
use crate::stego::chromosome::Chromosome;
use crate::stego::error::StegoError;

/// Carrier pixels required to embed `payload_len` bytes: `ceil(8 / k)` per byte.
///
/// This is the admission check applied by [`embed`]. It is conservative for
/// `k = 3`, where bytes share pixels and fewer are actually written.
/// Saturates at `usize::MAX`, which no sequence can satisfy.
pub fn required_capacity(payload_len: usize, chromosome: &Chromosome) -> Result<usize, StegoError> {
    let k = chromosome.bits_per_pixel()?;
    Ok(8usize.div_ceil(k).saturating_mul(payload_len))
}

/// Pixels that actually carry bits of a `payload_len`-byte payload:
/// `ceil(8 * payload_len / k)`. Pass this to [`decode`] to recover exactly
/// `payload_len` bytes. Saturates at `usize::MAX`, which [`decode`] rejects
/// as an over-read.
pub fn payload_pixel_count(payload_len: usize, chromosome: &Chromosome) -> Result<usize, StegoError> {
    let k = chromosome.bits_per_pixel()?;
    Ok(match payload_len.checked_mul(8) {
        Some(bits) => bits.div_ceil(k),
        None => usize::MAX,
    })
}

/// Embed `payload` into a copy of `sequence`.
///
/// Pixels after the last written bit are copied unchanged. The input is
/// never modified.
///
/// # Errors
/// - [`StegoError::Configuration`] if the chromosome mask is empty or too wide.
/// - [`StegoError::InsufficientCapacity`] if [`required_capacity`] exceeds
///   `sequence.len()`; nothing is written in that case.
pub fn embed(sequence: &[u8], payload: &[u8], chromosome: &Chromosome) -> Result<Vec<u8>, StegoError> {
    let positions = chromosome.bit_positions()?;
    let required = required_capacity(payload.len(), chromosome)?;
    if required > sequence.len() {
        return Err(StegoError::InsufficientCapacity {
            required,
            available: sequence.len(),
        });
    }

    let bits = payload_bits(payload, chromosome);

    let mut carrier = sequence.to_vec();
    for (pixel, group) in carrier.iter_mut().zip(bits.chunks(positions.len())) {
        for (&pos, &bit) in positions.iter().zip(group) {
            *pixel = set_bit(*pixel, pos, bit);
        }
    }
    Ok(carrier)
}

/// Extract payload bytes from the first `expected_pixel_count` pixels.
///
/// Bits beyond the last whole byte are dropped. The count is not validated
/// against the original payload; a wrong count yields wrong bytes.
///
/// # Errors
/// - [`StegoError::Configuration`] if the chromosome mask is empty or too wide.
/// - [`StegoError::ShapeMismatch`] if `expected_pixel_count > sequence.len()`.
pub fn decode(
    sequence: &[u8],
    chromosome: &Chromosome,
    expected_pixel_count: usize,
) -> Result<Vec<u8>, StegoError> {
    let positions = chromosome.bit_positions()?;
    if expected_pixel_count > sequence.len() {
        return Err(StegoError::ShapeMismatch {
            expected: expected_pixel_count,
            actual: sequence.len(),
        });
    }

    let mut bits = Vec::with_capacity(expected_pixel_count * positions.len());
    for &pixel in &sequence[..expected_pixel_count] {
        bits.extend(positions.iter().map(|&pos| get_bit(pixel, pos)));
    }
    bits.truncate(bits.len() - bits.len() % 8);

    if chromosome.reverse_order {
        bits.reverse();
    }
    let mut bytes = bits_to_bytes(&bits);
    if chromosome.invert_polarity {
        bytes.iter_mut().for_each(|b| *b = !*b);
    }
    Ok(bytes)
}

/// Payload bit stream after the polarity and order transforms.
fn payload_bits(payload: &[u8], chromosome: &Chromosome) -> Vec<u8> {
    let mut bits = if chromosome.invert_polarity {
        let inverted: Vec<u8> = payload.iter().map(|b| !b).collect();
        bytes_to_bits(&inverted)
    } else {
        bytes_to_bits(payload)
    };
    if chromosome.reverse_order {
        bits.reverse();
    }
    bits
}
