//! # Crossover
//!
//! Crossover turns the mating pool into offspring, in place.
//!
//! The single-point, binomial and exponential schemes give every individual a
//! random partner and copy some of the partner's genes into it. SBX works on
//! pairs instead and writes two children per pair, which is why it needs an
//! even population.
//!
//! All schemes copy parent genes, except SBX on the continuous part, which
//! clips its results to the bounds. Bounds and the integer part of the
//! decision vector are therefore preserved.
pub mod point;
pub mod sbx;

use std::fmt;
use std::str::FromStr;

use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

pub use sbx::SbxCrossover;

/// The crossover strategy of the genetic algorithm.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Crossover {
    /// Copies a run of consecutive partner genes, continued with probability `cr`.
    Exponential,
    /// Copies each partner gene with probability `cr`, at least one.
    Binomial,
    /// Copies every partner gene after a random cut point.
    Single,
    /// Simulated binary crossover, two children per pair.
    Sbx,
}

/// Parameters shared by the crossover schemes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossoverParams {
    pub cr: f64,
    pub eta_c: f64,
    pub int_dim: usize,
}

impl Crossover {
    /// Recombines the mating pool `x` in place.
    ///
    /// # Arguments
    ///
    /// * `x` - The decision vectors produced by selection, all of the same length.
    /// * `lb`, `ub` - The problem bounds.
    /// * `params` - Crossover probability, SBX distribution index and integer part size.
    /// * `rng` - The random source.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::InvalidPopulation` if there are fewer than two
    /// individuals, or an odd number of them under SBX.
    pub fn perform(
        &self,
        x: &mut [Vec<f64>],
        lb: &[f64],
        ub: &[f64],
        params: &CrossoverParams,
        rng: &mut RandomNumberGenerator,
    ) -> Result<()> {
        if x.len() < 2 {
            return Err(GeneticError::InvalidPopulation(format!(
                "Crossover needs at least 2 individuals, {} detected",
                x.len()
            )));
        }

        match self {
            Crossover::Sbx => {
                if x.len() % 2 != 0 {
                    return Err(GeneticError::InvalidPopulation(format!(
                        "Population size must be even if sbx crossover is selected. Detected pop size is: {}",
                        x.len()
                    )));
                }
                let sbx = SbxCrossover::new(params.cr, params.eta_c, params.int_dim);
                rng.shuffle(x);
                for pair in x.chunks_exact_mut(2) {
                    let (c1, c2) = sbx.mate(&pair[0], &pair[1], lb, ub, rng);
                    pair[0] = c1;
                    pair[1] = c2;
                }
                Ok(())
            }
            Crossover::Exponential | Crossover::Binomial | Crossover::Single => {
                point::recombine(*self, x, params.cr, rng)
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Crossover::Exponential => "exponential",
            Crossover::Binomial => "binomial",
            Crossover::Single => "single",
            Crossover::Sbx => "sbx",
        }
    }
}

impl fmt::Display for Crossover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Crossover {
    type Err = GeneticError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "exponential" => Ok(Crossover::Exponential),
            "binomial" => Ok(Crossover::Binomial),
            "single" => Ok(Crossover::Single),
            "sbx" => Ok(Crossover::Sbx),
            other => Err(GeneticError::Configuration(format!(
                r#"The crossover type must either be "exponential" or "binomial" or "sbx" or "single": unknown type requested: {}"#,
                other
            ))),
        }
    }
}
