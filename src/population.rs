//! # Population Trait
//!
//! The `Population` trait describes the container the genetic algorithm
//! evolves: a problem plus `N` individuals, each a decision vector and a
//! fitness vector. The algorithm reads all vectors at the start of a
//! generation and writes the next generation back one individual at a time.
//!
//! `VectorPopulation` is a plain `Vec`-backed implementation.
//!
//! ## Example
//!
//! ```rust
//! use sga::population::{Population, VectorPopulation};
//! use sga::problem::FnProblem;
//!
//! let problem = FnProblem::new(vec![0.0, 0.0], vec![1.0, 1.0], |x, _| {
//!     vec![x[0] + x[1]]
//! });
//!
//! let mut pop = VectorPopulation::new(problem);
//! pop.push(vec![0.5, 0.5]).unwrap();
//! pop.push(vec![0.1, 0.2]).unwrap();
//!
//! assert_eq!(pop.size(), 2);
//! assert_eq!(pop.best_index(), Some(1));
//! ```

use std::cmp::Ordering;

use crate::error::{GeneticError, Result};
use crate::problem::Problem;
use crate::rng::RandomNumberGenerator;

/// Trait for the containers the genetic algorithm evolves.
pub trait Population {
    type Prob: Problem;

    fn problem(&self) -> &Self::Prob;

    fn problem_mut(&mut self) -> &mut Self::Prob;

    /// Number of individuals.
    fn size(&self) -> usize;

    /// Decision vectors, one per individual.
    fn decision_vectors(&self) -> &[Vec<f64>];

    /// Fitness vectors, one per individual, in the same order.
    fn fitness_vectors(&self) -> &[Vec<f64>];

    /// Replaces the decision and fitness vectors of individual `i`.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::InvalidPopulation` if `i` is out of range or the
    /// vectors do not match the problem dimensions.
    fn set_xf(&mut self, i: usize, x: Vec<f64>, f: Vec<f64>) -> Result<()>;

    /// Index of the individual with the lowest first fitness component.
    fn best_index(&self) -> Option<usize> {
        rank_by_fitness(self.fitness_vectors()).first().copied()
    }

    /// Fitness vector of the best individual.
    fn champion_f(&self) -> Option<&[f64]> {
        self.best_index()
            .map(|i| self.fitness_vectors()[i].as_slice())
    }
}

/// Orders two fitness values, lower first. NaN sorts after every number.
pub fn compare_fitness(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Indices of `fitness` sorted ascending by the first component.
///
/// The sort is stable, so equal fitness keeps encounter order.
pub fn rank_by_fitness(fitness: &[Vec<f64>]) -> Vec<usize> {
    let mut idx: Vec<usize> = (0..fitness.len()).collect();
    idx.sort_by(|&a, &b| compare_fitness(fitness[a][0], fitness[b][0]));
    idx
}

/// A `Vec`-backed population.
#[derive(Debug, Clone)]
pub struct VectorPopulation<P: Problem> {
    problem: P,
    x: Vec<Vec<f64>>,
    f: Vec<Vec<f64>>,
}

impl<P: Problem> VectorPopulation<P> {
    /// Creates an empty population over `problem`.
    pub fn new(problem: P) -> Self {
        Self {
            problem,
            x: Vec::new(),
            f: Vec::new(),
        }
    }

    /// Creates a population of `size` individuals drawn uniformly within the
    /// problem bounds. The trailing `int_dim` genes are drawn among the
    /// integers of their bounds.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::InvalidPopulation` if `int_dim` exceeds the
    /// problem dimension or an integer gene has no integer in its bounds.
    pub fn with_random(
        problem: P,
        size: usize,
        int_dim: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Self> {
        let (lb, ub) = problem.bounds();
        let dim = lb.len();
        if int_dim > dim {
            return Err(GeneticError::InvalidPopulation(format!(
                "The integer part ({}) cannot be larger than the problem dimension ({})",
                int_dim, dim
            )));
        }

        let mut pop = Self::new(problem);
        for _ in 0..size {
            let mut x = Vec::with_capacity(dim);
            for j in 0..dim - int_dim {
                x.push(lb[j] + rng.uniform01() * (ub[j] - lb[j]));
            }
            for j in dim - int_dim..dim {
                let (low, high) = (lb[j].ceil(), ub[j].floor());
                if low > high {
                    return Err(GeneticError::InvalidPopulation(format!(
                        "No integer lies within the bounds [{}, {}] of gene {}",
                        lb[j], ub[j], j
                    )));
                }
                let span = (high - low) as usize;
                x.push(low + rng.index_inclusive(0, span) as f64);
            }
            pop.push(x)?;
        }
        Ok(pop)
    }

    /// Evaluates `x` and appends it.
    pub fn push(&mut self, x: Vec<f64>) -> Result<()> {
        self.check_x(&x)?;
        let f = self.problem.fitness(&x);
        self.x.push(x);
        self.f.push(f);
        Ok(())
    }

    /// Appends `x` with an already known fitness vector.
    pub fn push_xf(&mut self, x: Vec<f64>, f: Vec<f64>) -> Result<()> {
        self.check_x(&x)?;
        self.check_f(&f)?;
        self.x.push(x);
        self.f.push(f);
        Ok(())
    }

    /// Consumes the population and returns its problem.
    pub fn into_problem(self) -> P {
        self.problem
    }

    fn check_x(&self, x: &[f64]) -> Result<()> {
        let dim = self.problem.dimension();
        if x.len() != dim {
            return Err(GeneticError::InvalidPopulation(format!(
                "Decision vector of length {} does not match the problem dimension {}",
                x.len(),
                dim
            )));
        }
        Ok(())
    }

    fn check_f(&self, f: &[f64]) -> Result<()> {
        let nobj = self.problem.num_objectives() + self.problem.num_constraints();
        if f.len() != nobj {
            return Err(GeneticError::InvalidPopulation(format!(
                "Fitness vector of length {} does not match the problem fitness dimension {}",
                f.len(),
                nobj
            )));
        }
        Ok(())
    }
}

impl<P: Problem> Population for VectorPopulation<P> {
    type Prob = P;

    fn problem(&self) -> &P {
        &self.problem
    }

    fn problem_mut(&mut self) -> &mut P {
        &mut self.problem
    }

    fn size(&self) -> usize {
        self.x.len()
    }

    fn decision_vectors(&self) -> &[Vec<f64>] {
        &self.x
    }

    fn fitness_vectors(&self) -> &[Vec<f64>] {
        &self.f
    }

    fn set_xf(&mut self, i: usize, x: Vec<f64>, f: Vec<f64>) -> Result<()> {
        if i >= self.x.len() {
            return Err(GeneticError::InvalidPopulation(format!(
                "Index {} is out of range for a population of size {}",
                i,
                self.x.len()
            )));
        }
        self.check_x(&x)?;
        self.check_f(&f)?;
        self.x[i] = x;
        self.f[i] = f;
        Ok(())
    }
}
