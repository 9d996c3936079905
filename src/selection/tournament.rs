use crate::error::{GeneticError, Result};
use crate::population::compare_fitness;
use crate::rng::RandomNumberGenerator;
use crate::selection::check_selection_size;

/// A selection strategy that fills every slot of the mating pool through a
/// tournament.
///
/// Each tournament draws `tournament_size` distinct individuals at random and
/// keeps the one with the lowest fitness. Smaller tournaments favour
/// exploration; a tournament of size 1 is plain uniform resampling with
/// replacement.
///
/// # Examples
///
/// ```
/// use sga::rng::RandomNumberGenerator;
/// use sga::selection::TournamentSelection;
///
/// let fitness = vec![vec![0.5], vec![0.8], vec![0.3], vec![0.9], vec![0.1]];
/// let mut rng = RandomNumberGenerator::from_seed(42);
///
/// let selection = TournamentSelection::new(5).unwrap();
/// let selected = selection.select(&fitness, &mut rng).unwrap();
///
/// // Everybody takes part, so the best individual wins every tournament
/// assert_eq!(selected, vec![4; 5]);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct TournamentSelection {
    tournament_size: usize,
}

impl TournamentSelection {
    /// Creates a new TournamentSelection strategy with the specified tournament size.
    ///
    /// # Errors
    ///
    /// Returns an error if `tournament_size` is 0.
    pub fn new(tournament_size: usize) -> Result<Self> {
        if tournament_size < 1 {
            return Err(GeneticError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }

        Ok(Self { tournament_size })
    }

    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }

    /// Runs one tournament per individual and returns the winners' indices.
    ///
    /// # Errors
    ///
    /// Returns an error if the tournament is larger than the population.
    pub fn select(
        &self,
        fitness: &[Vec<f64>],
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<usize>> {
        check_selection_size(self.tournament_size, fitness.len())?;

        let mut pool: Vec<usize> = (0..fitness.len()).collect();
        Ok((0..fitness.len())
            .map(|_| self.run_tournament(fitness, &mut pool, rng))
            .collect())
    }

    /// Draws the participants with a partial Fisher-Yates shuffle of `pool`
    /// and returns the index of the winner.
    ///
    /// The first `tournament_size` entries of `pool` are the participants; the
    /// pool is not restored, the next tournament shuffles it again.
    fn run_tournament(
        &self,
        fitness: &[Vec<f64>],
        pool: &mut [usize],
        rng: &mut RandomNumberGenerator,
    ) -> usize {
        let last = pool.len() - 1;
        for i in 0..self.tournament_size {
            let j = rng.index_inclusive(i, last);
            pool.swap(i, j);
        }

        let mut winner = pool[0];
        for &idx in &pool[1..self.tournament_size] {
            if compare_fitness(fitness[idx][0], fitness[winner][0]).is_lt() {
                winner = idx;
            }
        }
        winner
    }
}
