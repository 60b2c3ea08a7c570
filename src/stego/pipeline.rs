// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Image-level embed/decode pipeline.
//!
//! Encode:
//! 1. Wrap the chromosome offsets into the host shape to get the scan start
//! 2. Linearize the host along the chromosome's traversal pattern
//! 3. Write the payload bits into the selected bit-planes
//! 4. Undo the traversal to restore the 2D layout
//!
//! Decode runs steps 1–3 in reverse on the carrier; the caller supplies the
//! payload length (or secret shape) out of band.

use crate::image::{GrayImage, sample_count};
use crate::stego::chromosome::Chromosome;
use crate::stego::codec;
use crate::stego::error::StegoError;
use crate::stego::scan;

/// Embed `payload` into a new carrier image derived from `host`.
///
/// # Errors
/// - [`StegoError::Configuration`] for an invalid chromosome or empty host.
/// - [`StegoError::InsufficientCapacity`] if the payload does not fit.
pub fn embed_image(host: &GrayImage, payload: &[u8], chromosome: &Chromosome) -> Result<GrayImage, StegoError> {
    let (height, width) = host.shape();
    let (y, x) = chromosome.start(height, width)?;
    let sequence = scan::scan(host, y, x, chromosome.direction)?;
    let carrier = codec::embed(&sequence, payload, chromosome)?;
    scan::reshape(&carrier, host.shape(), y, x, chromosome.direction)
}

/// Recover a `payload_len`-byte payload from `carrier`.
pub fn decode_payload(carrier: &GrayImage, chromosome: &Chromosome, payload_len: usize) -> Result<Vec<u8>, StegoError> {
    let (height, width) = carrier.shape();
    let (y, x) = chromosome.start(height, width)?;
    let sequence = scan::scan(carrier, y, x, chromosome.direction)?;
    let pixels = codec::payload_pixel_count(payload_len, chromosome)?;
    codec::decode(&sequence, chromosome, pixels)
}

/// Recover a hidden image of `secret_shape` (`(height, width)`) from `carrier`.
///
/// # Errors
/// [`StegoError::ShapeMismatch`] if the carrier is too small to have held a
/// secret of that shape, or if the shape's sample count overflows `usize`
/// (reported as `usize::MAX`).
pub fn decode_image(
    carrier: &GrayImage,
    chromosome: &Chromosome,
    secret_shape: (usize, usize),
) -> Result<GrayImage, StegoError> {
    let (height, width) = secret_shape;
    let len = sample_count(width, height).ok_or(StegoError::ShapeMismatch {
        expected: usize::MAX,
        actual: carrier.len(),
    })?;
    let samples = decode_payload(carrier, chromosome, len)?;
    GrayImage::from_vec(width, height, samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stego::scan::Direction;

    fn host() -> GrayImage {
        GrayImage::from_fn(16, 12, |r, c| ((r * 37 + c * 11) % 256) as u8)
    }

    #[test]
    fn image_round_trip() {
        let secret = GrayImage::from_fn(4, 3, |r, c| (r * 60 + c * 7) as u8);
        let c = Chromosome {
            direction: Direction::SnakeRowsUp,
            x_offset: 250,
            y_offset: 30,
            bitplane_mask: 0b0101,
            invert_polarity: true,
            reverse_order: true,
            upper_nibble: false,
        };
        let carrier = embed_image(&host(), secret.samples(), &c).unwrap();
        assert_eq!(carrier.shape(), (12, 16));
        assert_eq!(decode_image(&carrier, &c, (3, 4)).unwrap(), secret);
    }

    #[test]
    fn host_untouched() {
        let h = host();
        let before = h.clone();
        let c = Chromosome::new(Direction::Columns, 0b1111);
        let _ = embed_image(&h, &[0xAA; 8], &c).unwrap();
        assert_eq!(h, before);
    }

    #[test]
    fn too_large_payload() {
        let c = Chromosome::new(Direction::Raster, 0b0001);
        // 16×12 = 192 pixels carry 24 bytes at one plane.
        assert!(embed_image(&host(), &[0; 24], &c).is_ok());
        assert_eq!(
            embed_image(&host(), &[0; 25], &c),
            Err(StegoError::InsufficientCapacity { required: 200, available: 192 })
        );
    }

    #[test]
    fn oversized_secret_shape() {
        let c = Chromosome::new(Direction::Raster, 0b0001);
        let carrier = embed_image(&host(), &[1, 2, 3], &c).unwrap();
        assert!(matches!(
            decode_image(&carrier, &c, (5, 5)),
            Err(StegoError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn overflowing_secret_shape() {
        let c = Chromosome::new(Direction::Raster, 0b0001);
        let carrier = embed_image(&host(), &[1, 2, 3], &c).unwrap();
        assert_eq!(
            decode_image(&carrier, &c, (1usize << 62, 8)),
            Err(StegoError::ShapeMismatch { expected: usize::MAX, actual: 192 })
        );
        assert!(matches!(
            decode_payload(&carrier, &c, usize::MAX / 2),
            Err(StegoError::ShapeMismatch { expected: usize::MAX, actual: 192 })
        ));
    }
}
