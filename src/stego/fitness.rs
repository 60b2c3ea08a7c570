// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! PSNR-style fidelity scoring of candidate chromosomes.
//!
//! The score is `10 * log10(255 / MSE)` between host and carrier, with
//! [`MAX_PSNR`] for identical images. A chromosome that cannot embed the
//! secret scores [`FAILED_SCORE`] instead of returning an error, so a search
//! can score any genome it produces.

use log::trace;

use crate::image::GrayImage;
use crate::stego::chromosome::Chromosome;
use crate::stego::error::StegoError;
use crate::stego::pipeline::embed_image;

/// Score for identical images.
pub const MAX_PSNR: f64 = 100.0;

/// Score for a chromosome that fails to embed.
pub const FAILED_SCORE: f64 = 0.0;

/// Mean squared error between two equal-length sample buffers.
///
/// # Errors
/// [`StegoError::ShapeMismatch`] if the lengths differ.
pub fn mse(a: &[u8], b: &[u8]) -> Result<f64, StegoError> {
    if a.len() != b.len() {
        return Err(StegoError::ShapeMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    if a.is_empty() {
        return Ok(0.0);
    }
    let sum: f64 = a
        .iter()
        .zip(b)
        .map(|(&x, &y)| {
            let d = x as f64 - y as f64;
            d * d
        })
        .sum();
    Ok(sum / a.len() as f64)
}

/// Fidelity of `modified` relative to `original`.
pub fn psnr(original: &GrayImage, modified: &GrayImage) -> Result<f64, StegoError> {
    if original.shape() != modified.shape() {
        return Err(StegoError::ShapeMismatch {
            expected: original.len(),
            actual: modified.len(),
        });
    }
    let err = mse(original.samples(), modified.samples())?;
    if err == 0.0 {
        return Ok(MAX_PSNR);
    }
    Ok(10.0 * (255.0 / err).log10())
}

/// Embed `secret`'s samples into `host` under `chromosome` and score the
/// carrier against the host.
pub fn evaluate(host: &GrayImage, secret: &GrayImage, chromosome: &Chromosome) -> f64 {
    match embed_image(host, secret.samples(), chromosome).and_then(|carrier| psnr(host, &carrier)) {
        Ok(score) => score,
        Err(e) => {
            trace!("chromosome {chromosome:?} scored {FAILED_SCORE}: {e}");
            FAILED_SCORE
        }
    }
}

/// [`evaluate`] for a raw genome; undecodable genomes score [`FAILED_SCORE`].
pub fn evaluate_genome(host: &GrayImage, secret: &GrayImage, genome: &[u8]) -> f64 {
    match Chromosome::from_genome(genome) {
        Ok(chromosome) => evaluate(host, secret, &chromosome),
        Err(e) => {
            trace!("genome scored {FAILED_SCORE}: {e}");
            FAILED_SCORE
        }
    }
}
