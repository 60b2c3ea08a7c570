// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Per-generation statistics and the hall of fame.

use crate::search::Individual;
use crate::stego::chromosome::{Chromosome, Genome};
use crate::stego::error::StegoError;

/// Score summary of one generation.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationStats {
    pub generation: usize,
    /// Fitness evaluations performed in this generation.
    pub evaluations: usize,
    pub avg: f64,
    /// Population standard deviation.
    pub std: f64,
    pub min: f64,
    pub max: f64,
}

impl GenerationStats {
    pub fn from_population(generation: usize, evaluations: usize, population: &[Individual]) -> Self {
        let n = population.len().max(1) as f64;
        let scores = population.iter().map(Individual::score);
        let avg = scores.clone().sum::<f64>() / n;
        let var = scores.clone().map(|s| (s - avg) * (s - avg)).sum::<f64>() / n;
        Self {
            generation,
            evaluations,
            avg,
            std: var.sqrt(),
            min: scores.clone().fold(f64::INFINITY, f64::min),
            max: scores.fold(f64::NEG_INFINITY, f64::max),
        }
    }
}

/// A genome and its score.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranked {
    pub genome: Genome,
    pub score: f64,
}

impl Ranked {
    pub fn chromosome(&self) -> Result<Chromosome, StegoError> {
        Chromosome::from_genome(&self.genome)
    }
}

/// The best distinct genomes seen so far, best first.
#[derive(Debug, Clone)]
pub struct HallOfFame {
    capacity: usize,
    entries: Vec<Ranked>,
}

impl HallOfFame {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Offer every evaluated individual of `population`.
    pub fn update(&mut self, population: &[Individual]) {
        for individual in population {
            if let Some(score) = individual.fitness() {
                self.insert(individual.genome, score);
            }
        }
    }

    /// Insert `genome` unless it is already present or does not beat the
    /// current worst entry of a full hall. Equal scores rank after existing
    /// entries.
    pub fn insert(&mut self, genome: Genome, score: f64) {
        if self.capacity == 0 || self.entries.iter().any(|e| e.genome == genome) {
            return;
        }
        if self.entries.len() == self.capacity {
            match self.entries.last() {
                Some(worst) if score <= worst.score => return,
                _ => {}
            }
        }
        let pos = self
            .entries
            .iter()
            .position(|e| score > e.score)
            .unwrap_or(self.entries.len());
        self.entries.insert(pos, Ranked { genome, score });
        self.entries.truncate(self.capacity);
    }

    pub fn best(&self) -> Option<&Ranked> {
        self.entries.first()
    }

    pub fn entries(&self) -> &[Ranked] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
