// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Genetic operators on bit-string genomes.
//!
//! Random ranges are drawn as `u32` rather than `usize` so the same seed
//! yields the same run on 32-bit (WASM) and 64-bit targets.

use rand::Rng;

use crate::search::Individual;
use crate::stego::chromosome::{GENOME_BITS, Genome};

/// Uniformly random genome.
pub fn random_genome<R: Rng + ?Sized>(rng: &mut R) -> Genome {
    let mut genome = [0u8; GENOME_BITS];
    for bit in genome.iter_mut() {
        *bit = rng.gen_range(0..=1u32) as u8;
    }
    genome
}

/// Swap the segment between two random cut points of `a` and `b`.
///
/// Cut points are drawn as `c1 ∈ [1, n]`, `c2 ∈ [1, n - 1]`; `c2` is bumped
/// past `c1` or the two are swapped so that `c1 < c2`.
pub fn two_point_crossover<R: Rng + ?Sized>(a: &mut [u8], b: &mut [u8], rng: &mut R) {
    let size = a.len().min(b.len()) as u32;
    if size < 2 {
        return;
    }
    let mut c1 = rng.gen_range(1..=size);
    let mut c2 = rng.gen_range(1..size);
    if c2 >= c1 {
        c2 += 1;
    } else {
        core::mem::swap(&mut c1, &mut c2);
    }
    let (c1, c2) = (c1 as usize, c2 as usize);
    a[c1..c2].swap_with_slice(&mut b[c1..c2]);
}

/// Flip each bit independently with probability `p`.
pub fn flip_bit_mutation<R: Rng + ?Sized>(genome: &mut [u8], p: f64, rng: &mut R) {
    for bit in genome.iter_mut() {
        if rng.gen_bool(p) {
            *bit ^= 1;
        }
    }
}

/// Pick `k` individuals, each the best of `tournament_size` random draws
/// (with replacement). Ties go to the earlier draw.
pub fn tournament_select<R: Rng + ?Sized>(
    population: &[Individual],
    k: usize,
    tournament_size: usize,
    rng: &mut R,
) -> Vec<Individual> {
    if population.is_empty() {
        return Vec::new();
    }
    let n = population.len() as u32;
    (0..k)
        .map(|_| {
            let mut best = &population[rng.gen_range(0..n) as usize];
            for _ in 1..tournament_size {
                let challenger = &population[rng.gen_range(0..n) as usize];
                if challenger.score() > best.score() {
                    best = challenger;
                }
            }
            best.clone()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn random_genome_is_binary() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        for _ in 0..50 {
            assert!(random_genome(&mut rng).iter().all(|&b| b <= 1));
        }
    }

    #[test]
    fn crossover_swaps_one_segment() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        for _ in 0..200 {
            let mut a = [0u8; GENOME_BITS];
            let mut b = [1u8; GENOME_BITS];
            two_point_crossover(&mut a, &mut b, &mut rng);
            // Complementary and exactly one contiguous run of swapped bits.
            assert!(a.iter().zip(&b).all(|(x, y)| x ^ y == 1));
            let ones: Vec<usize> = (0..GENOME_BITS).filter(|&i| a[i] == 1).collect();
            assert!(!ones.is_empty());
            assert_eq!(ones.last().unwrap() - ones[0] + 1, ones.len());
            assert!(ones[0] >= 1, "cut point 0 is never drawn");
        }
    }

    #[test]
    fn mutation_extremes() {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let mut g = [0u8; GENOME_BITS];
        flip_bit_mutation(&mut g, 0.0, &mut rng);
        assert_eq!(g, [0u8; GENOME_BITS]);
        flip_bit_mutation(&mut g, 1.0, &mut rng);
        assert_eq!(g, [1u8; GENOME_BITS]);
    }

    #[test]
    fn tournament_prefers_fitter() {
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        let population: Vec<Individual> = (0..4)
            .map(|i| Individual::evaluated([i as u8 & 1; GENOME_BITS], i as f64))
            .collect();
        // With tournaments as large as the draw count, the worst can only win
        // if it is drawn every time.
        let picked = tournament_select(&population, 200, 8, &mut rng);
        assert_eq!(picked.len(), 200);
        let mean: f64 = picked.iter().map(|i| i.score()).sum::<f64>() / 200.0;
        assert!(mean > 2.5, "mean selected score {mean}");
    }

    #[test]
    fn tournament_on_empty_population() {
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        assert!(tournament_select(&[], 5, 2, &mut rng).is_empty());
    }
}
