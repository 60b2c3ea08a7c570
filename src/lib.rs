// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! # genstego-core
//!
//! Pure-Rust engine for hiding a secret image inside a grayscale host image
//! by rewriting selected bit-planes of its pixels. The pixels are visited in
//! one of twelve geometric traversal orders from a configurable start pixel;
//! which planes carry data, and whether the payload is complemented or
//! reversed, is set by a compact 27-bit configuration ("chromosome").
//!
//! The `search` module tunes the chromosome with a genetic algorithm that
//! maximizes the carrier's PSNR against the host. Image file I/O and color
//! conversion are left to the caller.
//!
//! # Quick start
//!
//! ```rust
//! use genstego_core::{Chromosome, Direction, GrayImage, decode_image, embed_image};
//!
//! let host = GrayImage::from_fn(32, 32, |r, c| (r * 8 + c) as u8);
//! let secret = GrayImage::from_fn(4, 4, |r, c| (r * 16 + c) as u8);
//! let chromosome = Chromosome::new(Direction::SnakeRows, 0b0011);
//!
//! let carrier = embed_image(&host, secret.samples(), &chromosome).unwrap();
//! let recovered = decode_image(&carrier, &chromosome, secret.shape()).unwrap();
//! assert_eq!(recovered, secret);
//! ```

pub mod image;
pub mod search;
pub mod stego;

pub use image::GrayImage;
pub use search::{SearchConfig, SearchOutcome, optimize};
pub use stego::{Chromosome, ConfigError, Direction, Genome, StegoError};
pub use stego::{decode, decode_image, decode_payload, embed, embed_image, evaluate, evaluate_genome, psnr};
pub use stego::{pack, reshape, scan, unpack};
