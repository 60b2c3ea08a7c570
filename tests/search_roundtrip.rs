// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! End-to-end: search for a chromosome, embed with it, recover the secret.

use genstego_core::stego::fitness::MAX_PSNR;
use genstego_core::{
    GrayImage, SearchConfig, decode_image, embed_image, evaluate, evaluate_genome, optimize, psnr,
};

fn host() -> GrayImage {
    GrayImage::from_fn(32, 24, |r, c| ((r * 9 + c * 5) ^ (r * c)) as u8)
}

fn secret() -> GrayImage {
    GrayImage::from_fn(6, 5, |r, c| (r * 40 + c * 3) as u8)
}

fn small_config(seed: u64) -> SearchConfig {
    SearchConfig {
        population: 24,
        generations: 8,
        seed,
        ..Default::default()
    }
}

#[test]
fn best_chromosome_hides_and_recovers_secret() {
    let (host, secret) = (host(), secret());
    let outcome = optimize(&host, &secret, &small_config(3)).unwrap();
    let best = outcome.best().unwrap();
    assert!(best.score > 0.0, "no candidate embedded the secret");

    let chromosome = best.chromosome().unwrap();
    let carrier = embed_image(&host, secret.samples(), &chromosome).unwrap();
    assert_eq!(psnr(&host, &carrier).unwrap(), best.score);
    assert_eq!(evaluate(&host, &secret, &chromosome), best.score);
    assert_eq!(decode_image(&carrier, &chromosome, secret.shape()).unwrap(), secret);
}

#[test]
fn hall_of_fame_sorted_and_distinct() {
    let outcome = optimize(&host(), &secret(), &small_config(9)).unwrap();
    let entries = outcome.hall_of_fame.entries();
    assert_eq!(entries.len(), 3);
    for pair in entries.windows(2) {
        assert!(pair[0].score >= pair[1].score);
        assert_ne!(pair[0].genome, pair[1].genome);
    }
    let best_seen = outcome.history.iter().map(|s| s.max).fold(f64::NEG_INFINITY, f64::max);
    assert_eq!(entries[0].score, best_seen);
}

#[test]
fn same_seed_same_run() {
    let a = optimize(&host(), &secret(), &small_config(17)).unwrap();
    let b = optimize(&host(), &secret(), &small_config(17)).unwrap();
    assert_eq!(a.history, b.history);
    assert_eq!(a.hall_of_fame.entries(), b.hall_of_fame.entries());
    assert_eq!(a.population, b.population);
}

#[test]
fn scores_are_bounded() {
    let outcome = optimize(&host(), &secret(), &small_config(1)).unwrap();
    for individual in &outcome.population {
        let score = evaluate_genome(&host(), &secret(), &individual.genome);
        assert_eq!(Some(score), individual.fitness());
        assert!(score <= MAX_PSNR);
    }
    assert_eq!(outcome.evaluations(), outcome.history.iter().map(|s| s.evaluations).sum::<usize>());
}
