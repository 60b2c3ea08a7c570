// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Exhaustive traversal tests: every direction, every start, every small shape.

use genstego_core::stego::scan::{reshape_slice, scan_order, scan_slice};
use genstego_core::{Direction, GrayImage, reshape, scan};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

const MAX_SIDE: usize = 6;

fn for_all_configs(mut f: impl FnMut((usize, usize), usize, usize, Direction)) {
    for h in 1..=MAX_SIDE {
        for w in 1..=MAX_SIDE {
            for y in 0..h {
                for x in 0..w {
                    for d in Direction::ALL {
                        f((h, w), y, x, d);
                    }
                }
            }
        }
    }
}

#[test]
fn scan_is_a_permutation() {
    for_all_configs(|shape, y, x, d| {
        let order = scan_order(shape, y, x, d).unwrap();
        let mut sorted = order.clone();
        sorted.sort_unstable();
        let expected: Vec<usize> = (0..shape.0 * shape.1).collect();
        assert_eq!(sorted, expected, "{d:?} {shape:?} ({y},{x})");
        assert_eq!(order[0], y * shape.1 + x, "{d:?} {shape:?} ({y},{x}) does not start at start");
    });
}

#[test]
fn reshape_inverts_scan() {
    for_all_configs(|shape, y, x, d| {
        let grid: Vec<usize> = (0..shape.0 * shape.1).map(|i| i * 7 + 3).collect();
        let seq = scan_slice(&grid, shape, y, x, d).unwrap();
        let back = reshape_slice(&seq, shape, y, x, d).unwrap();
        assert_eq!(back, grid, "{d:?} {shape:?} ({y},{x})");
    });
}

#[test]
fn scan_inverts_reshape() {
    for_all_configs(|shape, y, x, d| {
        let seq: Vec<usize> = (0..shape.0 * shape.1).rev().collect();
        let grid = reshape_slice(&seq, shape, y, x, d).unwrap();
        assert_eq!(scan_slice(&grid, shape, y, x, d).unwrap(), seq, "{d:?} {shape:?} ({y},{x})");
    });
}

fn adjacent(a: usize, b: usize, w: usize) -> bool {
    let (ra, ca) = (a / w, a % w);
    let (rb, cb) = (b / w, b % w);
    ra.abs_diff(rb) + ca.abs_diff(cb) == 1
}

#[test]
fn snake_patterns_never_jump_mid_path() {
    for_all_configs(|shape, y, x, d| {
        if !d.is_snake() {
            return;
        }
        let order = scan_order(shape, y, x, d).unwrap();
        // Only the cyclic wrap from the path's end back to its beginning may
        // be non-adjacent.
        let jumps = order
            .windows(2)
            .filter(|pair| !adjacent(pair[0], pair[1], shape.1))
            .count();
        assert!(jumps <= 1, "{d:?} {shape:?} ({y},{x}) has {jumps} jumps: {order:?}");
    });
}

#[test]
fn raster_patterns_jump_at_row_ends() {
    // 3×4 raster from the origin: one jump per row boundary.
    let order = scan_order((3, 4), 0, 0, Direction::Raster).unwrap();
    let jumps = order.windows(2).filter(|p| !adjacent(p[0], p[1], 4)).count();
    assert_eq!(jumps, 2);
}

#[test]
fn random_images_round_trip() {
    let mut rng = ChaCha20Rng::seed_from_u64(0x5EED);
    for _ in 0..40 {
        let w = rng.gen_range(1..40u32) as usize;
        let h = rng.gen_range(1..40u32) as usize;
        let img = GrayImage::from_fn(w, h, |_, _| rng.r#gen());
        let y = rng.gen_range(0..h as u32) as usize;
        let x = rng.gen_range(0..w as u32) as usize;
        let d = Direction::ALL[rng.gen_range(0..12u32) as usize];
        let seq = scan(&img, y, x, d).unwrap();
        assert_eq!(seq.len(), img.len());
        assert_eq!(reshape(&seq, img.shape(), y, x, d).unwrap(), img);
    }
}

#[test]
fn scan_leaves_input_untouched() {
    let img = GrayImage::from_fn(5, 4, |r, c| (r * 5 + c) as u8);
    let copy = img.clone();
    for d in Direction::ALL {
        let _ = scan(&img, 3, 4, d).unwrap();
    }
    assert_eq!(img, copy);
}
