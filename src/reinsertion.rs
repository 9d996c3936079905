//! # Reinsertion
//!
//! Reinsertion merges parents and offspring into the next generation with
//! simple elitism: the best `elitism` parents survive unchanged, the
//! remaining slots go to offspring.
//!
//! Slot `i >= elitism` receives the offspring of rank `i`, not of rank
//! `i - elitism`: the `elitism` best offspring make way for the surviving
//! parents.

use crate::population::rank_by_fitness;

/// Simple elitist reinsertion.
///
/// # Examples
///
/// ```
/// use sga::reinsertion::ElitistReinsertion;
///
/// let old_x = vec![vec![0.0], vec![1.0], vec![2.0]];
/// let old_f = vec![vec![5.0], vec![1.0], vec![3.0]];
/// let new_x = vec![vec![10.0], vec![11.0], vec![12.0]];
/// let new_f = vec![vec![4.0], vec![0.5], vec![2.0]];
///
/// let (x, f) = ElitistReinsertion::new(1).reinsert(&old_x, &old_f, &new_x, &new_f);
///
/// // Best parent first, then offspring of rank 1 and 2
/// assert_eq!(x, vec![vec![1.0], vec![12.0], vec![10.0]]);
/// assert_eq!(f, vec![vec![1.0], vec![2.0], vec![4.0]]);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElitistReinsertion {
    elitism: usize,
}

impl ElitistReinsertion {
    pub fn new(elitism: usize) -> Self {
        Self { elitism }
    }

    pub fn elitism(&self) -> usize {
        self.elitism
    }

    /// Builds the next generation from the parents (`old_x`, `old_f`) and the
    /// evaluated offspring (`new_x`, `new_f`).
    ///
    /// Both groups must have the same size `N`, and `elitism <= N`.
    pub fn reinsert(
        &self,
        old_x: &[Vec<f64>],
        old_f: &[Vec<f64>],
        new_x: &[Vec<f64>],
        new_f: &[Vec<f64>],
    ) -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
        let best_parents = rank_by_fitness(old_f);
        let best_offspring = rank_by_fitness(new_f);

        best_parents[..self.elitism]
            .iter()
            .map(|&i| (old_x[i].clone(), old_f[i].clone()))
            .chain(
                best_offspring[self.elitism..]
                    .iter()
                    .map(|&i| (new_x[i].clone(), new_f[i].clone())),
            )
            .unzip()
    }
}
