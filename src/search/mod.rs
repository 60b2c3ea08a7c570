// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Evolutionary search over embedding chromosomes.
//!
//! A plain generational genetic algorithm: tournament selection, two-point
//! crossover, bit-flip mutation, and a hall of fame of the best distinct
//! genomes. The fitness function is an arbitrary pure `Fn(&Genome) -> f64`;
//! [`optimize`] binds it to [`evaluate_genome`] to maximize carrier PSNR.
//!
//! Runs are deterministic for a given [`SearchConfig::seed`]. When the
//! `parallel` feature is enabled, each generation's pending fitness
//! evaluations run concurrently via rayon; all random draws stay on the
//! driving thread, so results match the serial build.

pub mod operators;
pub mod stats;

use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::image::GrayImage;
use crate::stego::chromosome::Genome;
use crate::stego::error::{ConfigError, StegoError};
use crate::stego::fitness::evaluate_genome;

pub use operators::{flip_bit_mutation, random_genome, tournament_select, two_point_crossover};
pub use stats::{GenerationStats, HallOfFame, Ranked};

/// Genetic algorithm parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Individuals per generation.
    pub population: usize,
    /// Generations after the initial one.
    pub generations: usize,
    /// Probability that a consecutive pair of offspring is crossed over.
    pub crossover_rate: f64,
    /// Probability that an offspring is mutated.
    pub mutation_rate: f64,
    /// Per-bit flip probability within a mutated offspring.
    pub bit_flip_rate: f64,
    pub tournament_size: usize,
    /// Number of best distinct genomes to keep.
    pub hall_of_fame: usize,
    pub seed: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            population: 100,
            generations: 80,
            crossover_rate: 0.7,
            mutation_rate: 0.25,
            bit_flip_rate: 0.2,
            tournament_size: 2,
            hall_of_fame: 3,
            seed: 0,
        }
    }
}

impl SearchConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population == 0 {
            return Err(ConfigError::InvalidSearchParameter("population must be at least 1"));
        }
        if self.tournament_size == 0 {
            return Err(ConfigError::InvalidSearchParameter("tournament size must be at least 1"));
        }
        if self.hall_of_fame == 0 {
            return Err(ConfigError::InvalidSearchParameter("hall of fame must hold at least 1 genome"));
        }
        for (rate, msg) in [
            (self.crossover_rate, "crossover rate must be in [0, 1]"),
            (self.mutation_rate, "mutation rate must be in [0, 1]"),
            (self.bit_flip_rate, "bit flip rate must be in [0, 1]"),
        ] {
            if !(0.0..=1.0).contains(&rate) {
                return Err(ConfigError::InvalidSearchParameter(msg));
            }
        }
        Ok(())
    }
}

/// A genome with its fitness, `None` until evaluated.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    pub genome: Genome,
    fitness: Option<f64>,
}

impl Individual {
    pub fn new(genome: Genome) -> Self {
        Self { genome, fitness: None }
    }

    pub fn evaluated(genome: Genome, fitness: f64) -> Self {
        Self { genome, fitness: Some(fitness) }
    }

    pub fn fitness(&self) -> Option<f64> {
        self.fitness
    }

    /// Fitness, or negative infinity if not yet evaluated.
    pub fn score(&self) -> f64 {
        self.fitness.unwrap_or(f64::NEG_INFINITY)
    }

    fn invalidate(&mut self) {
        self.fitness = None;
    }
}

/// Result of a search run.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub hall_of_fame: HallOfFame,
    /// Statistics for generation 0 (the random population) onward.
    pub history: Vec<GenerationStats>,
    /// Final population.
    pub population: Vec<Individual>,
}

impl SearchOutcome {
    pub fn best(&self) -> Option<&Ranked> {
        self.hall_of_fame.best()
    }

    /// Total fitness evaluations across the run.
    pub fn evaluations(&self) -> usize {
        self.history.iter().map(|s| s.evaluations).sum()
    }
}

/// Run the genetic algorithm, maximizing `fitness`.
///
/// # Errors
/// [`ConfigError::InvalidSearchParameter`] if `config` is out of range.
pub fn run<F>(config: &SearchConfig, fitness: F) -> Result<SearchOutcome, StegoError>
where
    F: Fn(&Genome) -> f64 + Sync,
{
    config.validate()?;
    info!(
        "search: population={} generations={} cx={} mut={} seed={}",
        config.population, config.generations, config.crossover_rate, config.mutation_rate, config.seed
    );

    let mut rng = ChaCha20Rng::seed_from_u64(config.seed);
    let mut population: Vec<Individual> = (0..config.population)
        .map(|_| Individual::new(random_genome(&mut rng)))
        .collect();
    let mut hall_of_fame = HallOfFame::new(config.hall_of_fame);
    let mut history = Vec::with_capacity(config.generations + 1);

    let evaluations = evaluate_pending(&mut population, &fitness);
    hall_of_fame.update(&population);
    history.push(record(0, evaluations, &population));

    for generation in 1..=config.generations {
        let mut offspring =
            tournament_select(&population, population.len(), config.tournament_size, &mut rng);
        vary(&mut offspring, config, &mut rng);

        let evaluations = evaluate_pending(&mut offspring, &fitness);
        hall_of_fame.update(&offspring);
        population = offspring;
        history.push(record(generation, evaluations, &population));
    }

    if let Some(best) = hall_of_fame.best() {
        info!("search done: best score {:.4}", best.score);
    }

    Ok(SearchOutcome {
        hall_of_fame,
        history,
        population,
    })
}

/// Search for the chromosome that hides `secret` in `host` with the highest
/// PSNR.
pub fn optimize(host: &GrayImage, secret: &GrayImage, config: &SearchConfig) -> Result<SearchOutcome, StegoError> {
    run(config, |genome| evaluate_genome(host, secret, genome))
}

/// Crossover on consecutive pairs, then mutation; changed offspring lose
/// their fitness.
fn vary(offspring: &mut [Individual], config: &SearchConfig, rng: &mut ChaCha20Rng) {
    use rand::Rng;

    for i in (1..offspring.len()).step_by(2) {
        if rng.gen_bool(config.crossover_rate) {
            let (left, right) = offspring.split_at_mut(i);
            let (a, b) = (&mut left[i - 1], &mut right[0]);
            two_point_crossover(&mut a.genome, &mut b.genome, rng);
            a.invalidate();
            b.invalidate();
        }
    }
    for individual in offspring.iter_mut() {
        if rng.gen_bool(config.mutation_rate) {
            flip_bit_mutation(&mut individual.genome, config.bit_flip_rate, rng);
            individual.invalidate();
        }
    }
}

/// Score every individual without a fitness. Returns the number scored.
fn evaluate_pending<F>(population: &mut [Individual], fitness: &F) -> usize
where
    F: Fn(&Genome) -> f64 + Sync,
{
    let pending: Vec<&mut Individual> = population
        .iter_mut()
        .filter(|individual| individual.fitness.is_none())
        .collect();
    let count = pending.len();

    #[cfg(feature = "parallel")]
    pending
        .into_par_iter()
        .for_each(|individual| individual.fitness = Some(fitness(&individual.genome)));

    #[cfg(not(feature = "parallel"))]
    pending
        .into_iter()
        .for_each(|individual| individual.fitness = Some(fitness(&individual.genome)));

    count
}

fn record(generation: usize, evaluations: usize, population: &[Individual]) -> GenerationStats {
    let stats = GenerationStats::from_population(generation, evaluations, population);
    debug!(
        "gen {:>3}: evals={:>3} avg={:.4} std={:.4} min={:.4} max={:.4}",
        stats.generation, stats.evaluations, stats.avg, stats.std, stats.min, stats.max
    );
    stats
}
