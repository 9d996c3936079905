use crate::error::{GeneticError, Result};
use crate::population::rank_by_fitness;
use crate::selection::check_selection_size;

/// A selection strategy that only ever mates the best individuals.
///
/// The population is ranked by fitness (lower is better) and the best
/// `truncation_size` individuals are cycled through to fill every slot.
///
/// # Examples
///
/// ```
/// use sga::selection::TruncatedSelection;
///
/// let fitness = vec![vec![0.5], vec![0.8], vec![0.3], vec![0.9], vec![0.1]];
///
/// let selection = TruncatedSelection::new(2).unwrap();
/// let selected = selection.select(&fitness).unwrap();
///
/// assert_eq!(selected, vec![4, 2, 4, 2, 4]);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct TruncatedSelection {
    truncation_size: usize,
}

impl TruncatedSelection {
    /// Creates a new TruncatedSelection keeping the best `truncation_size`
    /// individuals.
    ///
    /// # Errors
    ///
    /// Returns an error if `truncation_size` is 0.
    pub fn new(truncation_size: usize) -> Result<Self> {
        if truncation_size < 1 {
            return Err(GeneticError::Configuration(
                "Truncation size must be at least 1".to_string(),
            ));
        }

        Ok(Self { truncation_size })
    }

    pub fn truncation_size(&self) -> usize {
        self.truncation_size
    }

    /// Returns `ranked[i % truncation_size]` for every slot `i`.
    pub fn select(&self, fitness: &[Vec<f64>]) -> Result<Vec<usize>> {
        check_selection_size(self.truncation_size, fitness.len())?;

        let ranked = rank_by_fitness(fitness);
        Ok((0..fitness.len())
            .map(|i| ranked[i % self.truncation_size])
            .collect())
    }
}
