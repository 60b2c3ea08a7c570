// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Error types for the steganographic codec.
//!
//! [`StegoError`] covers every failure mode of the engine: malformed
//! configurations ([`ConfigError`]), payloads that do not fit the carrier,
//! and buffers whose length disagrees with the declared image shape.

use core::fmt;

/// A configuration record, genome, or search parameter is malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The 4-bit direction field does not name a traversal pattern.
    UnknownDirection(u8),
    /// The bit-plane mask selects no bit positions.
    EmptyBitplaneMask,
    /// A packed field value does not fit in its declared bit width.
    FieldOutOfRange {
        field: &'static str,
        value: u8,
        bits: u32,
    },
    /// The scan start coordinate lies outside the image.
    StartOutOfBounds {
        y: usize,
        x: usize,
        height: usize,
        width: usize,
    },
    /// The image has zero rows or zero columns.
    EmptyImage,
    /// A genome bit-string has the wrong number of bits.
    GenomeLength { expected: usize, actual: usize },
    /// A genome entry is neither 0 nor 1.
    InvalidGenomeBit { index: usize, value: u8 },
    /// A search driver parameter is out of range.
    InvalidSearchParameter(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownDirection(d) => write!(f, "unknown scan direction: {d}"),
            Self::EmptyBitplaneMask => write!(f, "bit-plane mask selects no bit positions"),
            Self::FieldOutOfRange { field, value, bits } => {
                write!(f, "{field} value {value} does not fit in {bits} bits")
            }
            Self::StartOutOfBounds { y, x, height, width } => {
                write!(f, "start ({y}, {x}) outside {height}x{width} image")
            }
            Self::EmptyImage => write!(f, "image has no pixels"),
            Self::GenomeLength { expected, actual } => {
                write!(f, "genome has {actual} bits, expected {expected}")
            }
            Self::InvalidGenomeBit { index, value } => {
                write!(f, "genome bit {index} is {value}, expected 0 or 1")
            }
            Self::InvalidSearchParameter(msg) => write!(f, "invalid search parameter: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors that can occur while scanning, embedding, or decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StegoError {
    /// The configuration is malformed.
    Configuration(ConfigError),
    /// The payload needs more carrier pixels than are available.
    InsufficientCapacity { required: usize, available: usize },
    /// A buffer length does not match the declared shape.
    ShapeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for StegoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration(e) => write!(f, "invalid configuration: {e}"),
            Self::InsufficientCapacity { required, available } => write!(
                f,
                "payload needs {required} carrier pixels, only {available} available"
            ),
            Self::ShapeMismatch { expected, actual } => {
                write!(f, "expected {expected} samples, got {actual}")
            }
        }
    }
}

impl std::error::Error for StegoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Configuration(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for StegoError {
    fn from(e: ConfigError) -> Self {
        Self::Configuration(e)
    }
}
