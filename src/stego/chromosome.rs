// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Embedding configuration and its genome encoding.
//!
//! The search works on a flat 27-bit [`Genome`]. [`pack`] right-justifies
//! each field into its own byte, giving the 7-byte configuration that
//! [`Chromosome::from_bytes`] parses into a typed record:
//!
//! ```text
//! field          bits  byte
//! direction        4    0
//! x_offset         8    1
//! y_offset         8    2
//! bitplane_mask    4    3
//! invert_polarity  1    4
//! reverse_order    1    5
//! upper_nibble     1    6
//! ```

use crate::stego::bits::{bytes_to_bits, get_bit};
use crate::stego::error::{ConfigError, StegoError};
use crate::stego::scan::Direction;

/// Bit width of each configuration field, in genome order.
pub const FIELD_WIDTHS: [u32; 7] = [4, 8, 8, 4, 1, 1, 1];

const FIELD_NAMES: [&str; 7] = [
    "direction",
    "x_offset",
    "y_offset",
    "bitplane_mask",
    "invert_polarity",
    "reverse_order",
    "upper_nibble",
];

/// Total genome length in bits.
pub const GENOME_BITS: usize = 27;

/// Packed configuration length, one byte per field.
pub const CONFIG_BYTES: usize = FIELD_WIDTHS.len();

/// Flat genome: one bit (0 or 1) per entry.
pub type Genome = [u8; GENOME_BITS];

/// Group a genome into one right-justified byte per field.
///
/// # Errors
/// - [`ConfigError::GenomeLength`] if `genome` is not [`GENOME_BITS`] long.
/// - [`ConfigError::InvalidGenomeBit`] for entries other than 0 or 1.
pub fn pack(genome: &[u8]) -> Result<[u8; CONFIG_BYTES], ConfigError> {
    if genome.len() != GENOME_BITS {
        return Err(ConfigError::GenomeLength {
            expected: GENOME_BITS,
            actual: genome.len(),
        });
    }
    if let Some((index, &value)) = genome.iter().enumerate().find(|&(_, &b)| b > 1) {
        return Err(ConfigError::InvalidGenomeBit { index, value });
    }

    let mut bytes = [0u8; CONFIG_BYTES];
    let mut offset = 0;
    for (byte, &width) in bytes.iter_mut().zip(&FIELD_WIDTHS) {
        let field = &genome[offset..offset + width as usize];
        *byte = field.iter().fold(0u8, |acc, &b| (acc << 1) | b);
        offset += width as usize;
    }
    Ok(bytes)
}

/// Concatenate the low-order field bits of each byte back into a genome.
/// Bits above a field's width are ignored.
pub fn unpack(bytes: &[u8; CONFIG_BYTES]) -> Genome {
    let mut genome = [0u8; GENOME_BITS];
    let mut offset = 0;
    for (&byte, &width) in bytes.iter().zip(&FIELD_WIDTHS) {
        let bits = bytes_to_bits(&[byte]);
        let width = width as usize;
        genome[offset..offset + width].copy_from_slice(&bits[8 - width..]);
        offset += width;
    }
    genome
}

/// Typed embedding configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Chromosome {
    /// Pixel traversal pattern.
    pub direction: Direction,
    /// Start column, wrapped modulo the image width.
    pub x_offset: u8,
    /// Start row, wrapped modulo the image height.
    pub y_offset: u8,
    /// Low four bits select which of the four candidate planes carry payload.
    pub bitplane_mask: u8,
    /// Complement payload bytes before embedding and after decoding.
    pub invert_polarity: bool,
    /// Reverse the payload bit stream before embedding and after decoding.
    pub reverse_order: bool,
    /// Use bit positions 4–7 instead of 0–3.
    pub upper_nibble: bool,
}

impl Chromosome {
    /// A chromosome with the given direction and mask, origin start, all
    /// flags cleared.
    pub fn new(direction: Direction, bitplane_mask: u8) -> Self {
        Self {
            direction,
            x_offset: 0,
            y_offset: 0,
            bitplane_mask,
            invert_polarity: false,
            reverse_order: false,
            upper_nibble: false,
        }
    }

    /// Check the mask selects at least one plane and fits in 4 bits.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bitplane_mask > 0x0F {
            return Err(ConfigError::FieldOutOfRange {
                field: "bitplane_mask",
                value: self.bitplane_mask,
                bits: 4,
            });
        }
        if self.bitplane_mask == 0 {
            return Err(ConfigError::EmptyBitplaneMask);
        }
        Ok(())
    }

    /// Number of payload bits carried per pixel.
    pub fn bits_per_pixel(&self) -> Result<usize, ConfigError> {
        self.validate()?;
        Ok(self.bitplane_mask.count_ones() as usize)
    }

    /// Pixel bit positions that carry payload, lowest first.
    pub fn bit_positions(&self) -> Result<Vec<u8>, ConfigError> {
        self.validate()?;
        let shift = if self.upper_nibble { 4 } else { 0 };
        Ok((0..4u8)
            .filter(|&b| get_bit(self.bitplane_mask, b) == 1)
            .map(|b| b + shift)
            .collect())
    }

    /// Scan start `(y, x)` for an image of `height × width`, offsets wrapped
    /// into range.
    pub fn start(&self, height: usize, width: usize) -> Result<(usize, usize), ConfigError> {
        if height == 0 || width == 0 {
            return Err(ConfigError::EmptyImage);
        }
        Ok((self.y_offset as usize % height, self.x_offset as usize % width))
    }

    /// Parse a packed configuration.
    ///
    /// # Errors
    /// - [`ConfigError::FieldOutOfRange`] if a byte exceeds its field width.
    /// - [`ConfigError::UnknownDirection`] or [`ConfigError::EmptyBitplaneMask`].
    pub fn from_bytes(bytes: &[u8; CONFIG_BYTES]) -> Result<Self, ConfigError> {
        for ((&value, &bits), field) in bytes.iter().zip(&FIELD_WIDTHS).zip(FIELD_NAMES) {
            if bits < 8 && value >> bits != 0 {
                return Err(ConfigError::FieldOutOfRange { field, value, bits });
            }
        }
        let chromosome = Self {
            direction: Direction::from_u8(bytes[0])?,
            x_offset: bytes[1],
            y_offset: bytes[2],
            bitplane_mask: bytes[3],
            invert_polarity: bytes[4] == 1,
            reverse_order: bytes[5] == 1,
            upper_nibble: bytes[6] == 1,
        };
        chromosome.validate()?;
        Ok(chromosome)
    }

    pub fn to_bytes(&self) -> [u8; CONFIG_BYTES] {
        [
            self.direction.as_u8(),
            self.x_offset,
            self.y_offset,
            self.bitplane_mask,
            self.invert_polarity as u8,
            self.reverse_order as u8,
            self.upper_nibble as u8,
        ]
    }

    /// Decode a flat genome.
    pub fn from_genome(genome: &[u8]) -> Result<Self, StegoError> {
        let bytes = pack(genome)?;
        Ok(Self::from_bytes(&bytes)?)
    }

    pub fn to_genome(&self) -> Genome {
        unpack(&self.to_bytes())
    }
}
