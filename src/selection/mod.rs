//! # Selection
//!
//! Selection builds the mating pool of a generation: it maps every offspring
//! slot to the index of the parent that fills it. Repeats are allowed.
//!
//! Two strategies are available: tournament and truncated. There is no
//! roulette-wheel selection.
pub mod tournament;
pub mod truncated;

use std::fmt;
use std::str::FromStr;

use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

pub use tournament::TournamentSelection;
pub use truncated::TruncatedSelection;

/// The selection strategy of the genetic algorithm.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selection {
    /// Each slot is won by the fittest of `param_s` random individuals.
    Tournament,
    /// The best `param_s` individuals are reused over and over.
    Truncated,
}

impl Selection {
    /// Selects one parent index per individual.
    ///
    /// # Arguments
    ///
    /// * `fitness` - The fitness vectors of the current population.
    /// * `param_s` - The tournament size or truncation size.
    /// * `rng` - The random source, advanced by tournament selection only.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if `param_s` is zero or larger
    /// than the population.
    pub fn select(
        &self,
        fitness: &[Vec<f64>],
        param_s: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<usize>> {
        match self {
            Selection::Tournament => TournamentSelection::new(param_s)?.select(fitness, rng),
            Selection::Truncated => TruncatedSelection::new(param_s)?.select(fitness),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Selection::Tournament => "tournament",
            Selection::Truncated => "truncated",
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Selection {
    type Err = GeneticError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "tournament" => Ok(Selection::Tournament),
            "truncated" => Ok(Selection::Truncated),
            other => Err(GeneticError::Configuration(format!(
                r#"The selection type must either be "truncated" or "tournament": unknown type requested: {}"#,
                other
            ))),
        }
    }
}

/// Checks that `size` individuals can be drawn from a population of `len`.
pub(crate) fn check_selection_size(size: usize, len: usize) -> Result<()> {
    if size == 0 || size > len {
        return Err(GeneticError::Configuration(format!(
            "The parameter for selection must be in [1, {}], while a value of: {} was detected",
            len, size
        )));
    }
    Ok(())
}
