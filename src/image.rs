// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Grayscale sample grid.
//!
//! [`GrayImage`] stores 8-bit intensity samples in row-major order. The
//! engine only ever reads a caller's image; every transform returns a new one.

use crate::stego::error::StegoError;

/// Owned `width × height` grid of 8-bit intensity samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayImage {
    width: usize,
    height: usize,
    /// Row-major samples: index = row * width + col.
    samples: Vec<u8>,
}

impl GrayImage {
    /// Create an image with every sample set to zero.
    ///
    /// # Panics
    /// If `width * height` overflows `usize`.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            samples: vec![0u8; checked_len(width, height)],
        }
    }

    /// Wrap row-major samples.
    ///
    /// # Errors
    /// [`StegoError::ShapeMismatch`] if `samples.len() != width * height`,
    /// or if `width * height` overflows `usize` (reported as `usize::MAX`).
    pub fn from_vec(width: usize, height: usize, samples: Vec<u8>) -> Result<Self, StegoError> {
        let expected = sample_count(width, height).ok_or(StegoError::ShapeMismatch {
            expected: usize::MAX,
            actual: samples.len(),
        })?;
        if samples.len() != expected {
            return Err(StegoError::ShapeMismatch {
                expected,
                actual: samples.len(),
            });
        }
        Ok(Self { width, height, samples })
    }

    /// Build an image by evaluating `f(row, col)` for every sample.
    ///
    /// # Panics
    /// If `width * height` overflows `usize`.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> u8) -> Self {
        let mut samples = Vec::with_capacity(checked_len(width, height));
        for row in 0..height {
            for col in 0..width {
                samples.push(f(row, col));
            }
        }
        Self { width, height, samples }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `(height, width)`, the order the scan functions take.
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.samples[self.index(row, col)]
    }

    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        let idx = self.index(row, col);
        self.samples[idx] = value;
    }

    /// Row-major samples.
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<u8> {
        self.samples
    }

    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.height, "row {row} >= {}", self.height);
        debug_assert!(col < self.width, "col {col} >= {}", self.width);
        row * self.width + col
    }
}

/// Number of samples in a `width × height` grid, `None` on overflow.
pub fn sample_count(width: usize, height: usize) -> Option<usize> {
    width.checked_mul(height)
}

fn checked_len(width: usize, height: usize) -> usize {
    match sample_count(width, height) {
        Some(n) => n,
        None => panic!("image dimensions {width}x{height} overflow usize"),
    }
}
