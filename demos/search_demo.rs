// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Search for the best chromosome on a synthetic host/secret pair, then
//! embed and recover the secret.
//!
//! Usage: `RUST_LOG=debug cargo run --example search_demo -- [generations] [seed]`

use genstego_core::{GrayImage, SearchConfig, decode_image, embed_image, optimize, psnr};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let generations = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(20);
    let seed = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(0);

    let host = GrayImage::from_fn(128, 96, |r, c| ((r * 2 + c) % 256) as u8);
    let secret = GrayImage::from_fn(16, 12, |r, c| if (r / 4 + c / 4) % 2 == 0 { 255 } else { 0 });

    let config = SearchConfig {
        generations,
        seed,
        ..Default::default()
    };
    let outcome = optimize(&host, &secret, &config).unwrap_or_else(|e| {
        eprintln!("Search failed: {e}");
        std::process::exit(1);
    });

    for (rank, entry) in outcome.hall_of_fame.entries().iter().enumerate() {
        match entry.chromosome() {
            Ok(c) => eprintln!("#{} score={:.4} {c:?}", rank + 1, entry.score),
            Err(e) => eprintln!("#{} score={:.4} undecodable: {e}", rank + 1, entry.score),
        }
    }

    let Some(chromosome) = outcome.best().and_then(|b| b.chromosome().ok()) else {
        eprintln!("No usable chromosome found");
        std::process::exit(1);
    };
    let carrier = match embed_image(&host, secret.samples(), &chromosome) {
        Ok(img) => img,
        Err(e) => {
            eprintln!("Embed failed: {e}");
            std::process::exit(1);
        }
    };
    match (psnr(&host, &carrier), decode_image(&carrier, &chromosome, secret.shape())) {
        (Ok(score), Ok(recovered)) => eprintln!(
            "Carrier PSNR {score:.4}, secret recovered: {}, evaluations: {}",
            recovered == secret,
            outcome.evaluations()
        ),
        (Err(e), _) | (_, Err(e)) => eprintln!("Decode failed: {e}"),
    }
}
