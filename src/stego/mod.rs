// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Bit-plane steganography over geometrically scanned pixel sequences.
//!
//! The engine is made of four pure parts:
//!
//! - [`scan`]: linearize a 2D grid along one of twelve traversal patterns
//!   starting at any pixel, and invert that exactly.
//! - [`codec`]: write payload bits into, and read them from, selected
//!   bit-planes of a pixel sequence.
//! - [`chromosome`]: the embedding configuration and its 27-bit genome form.
//! - [`fitness`]: PSNR scoring of a configuration for a host/secret pair.
//!
//! [`embed_image`] and [`decode_image`] compose the first three. Nothing here
//! holds state between calls or mutates its inputs, so any number of
//! evaluations may run concurrently.

pub mod bits;
pub mod chromosome;
pub mod codec;
pub mod error;
pub mod fitness;
mod pipeline;
pub mod scan;

pub use chromosome::{CONFIG_BYTES, Chromosome, FIELD_WIDTHS, GENOME_BITS, Genome, pack, unpack};
pub use codec::{decode, embed, payload_pixel_count, required_capacity};
pub use error::{ConfigError, StegoError};
pub use fitness::{FAILED_SCORE, MAX_PSNR, evaluate, evaluate_genome, mse, psnr};
pub use pipeline::{decode_image, decode_payload, embed_image};
pub use scan::{Direction, reshape, reshape_slice, scan, scan_order, scan_slice};
