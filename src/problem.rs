//! # Problem Trait
//!
//! The `Problem` trait describes the optimization problem the genetic algorithm
//! works on: its box bounds, its shape (objectives and constraints), how to
//! compute a fitness vector and how many times it has been asked to.
//!
//! The algorithm only accepts problems with exactly one objective and no
//! constraints. Lower fitness is better.
//!
//! ## Example
//!
//! ```rust
//! use sga::problem::Problem;
//!
//! struct Sphere {
//!     fevals: u64,
//! }
//!
//! impl Problem for Sphere {
//!     fn bounds(&self) -> (Vec<f64>, Vec<f64>) {
//!         (vec![-5.0; 3], vec![5.0; 3])
//!     }
//!
//!     fn fitness(&mut self, x: &[f64]) -> Vec<f64> {
//!         self.fevals += 1;
//!         vec![x.iter().map(|v| v * v).sum()]
//!     }
//!
//!     fn fevals(&self) -> u64 {
//!         self.fevals
//!     }
//! }
//!
//! let mut sphere = Sphere { fevals: 0 };
//! assert_eq!(sphere.fitness(&[1.0, 2.0, 0.0]), vec![5.0]);
//! assert_eq!(sphere.dimension(), 3);
//! assert_eq!(sphere.fevals(), 1);
//! ```

use std::fmt;

/// Trait for box-bounded optimization problems.
pub trait Problem {
    /// Lower and upper bounds, one entry per decision variable.
    fn bounds(&self) -> (Vec<f64>, Vec<f64>);

    /// Computes the fitness vector of `x`. Implementations count each call
    /// towards [`Problem::fevals`].
    fn fitness(&mut self, x: &[f64]) -> Vec<f64>;

    /// Number of fitness evaluations performed so far.
    fn fevals(&self) -> u64;

    /// Number of decision variables.
    fn dimension(&self) -> usize {
        self.bounds().0.len()
    }

    fn num_objectives(&self) -> usize {
        1
    }

    fn num_constraints(&self) -> usize {
        0
    }

    /// Whether the fitness depends on a seed that can be changed.
    fn is_stochastic(&self) -> bool {
        false
    }

    /// Reseeds a stochastic problem. Deterministic problems ignore it.
    fn set_seed(&mut self, _seed: u64) {}

    fn name(&self) -> String {
        "Unnamed problem".to_string()
    }
}

type FitnessFn = dyn FnMut(&[f64], Option<u64>) -> Vec<f64>;

/// A `Problem` backed by a closure.
///
/// The closure receives the decision vector and, for stochastic problems, the
/// current seed.
///
/// ```rust
/// use sga::problem::{FnProblem, Problem};
///
/// let mut problem = FnProblem::new(vec![0.0, 0.0], vec![1.0, 1.0], |x, _| {
///     vec![x[0] * x[0] + x[1] * x[1]]
/// })
/// .with_name("sphere");
///
/// assert_eq!(problem.fitness(&[0.5, 0.5]), vec![0.5]);
/// assert_eq!(problem.fevals(), 1);
/// assert_eq!(problem.name(), "sphere");
/// ```
pub struct FnProblem {
    lb: Vec<f64>,
    ub: Vec<f64>,
    fitness_fn: Box<FitnessFn>,
    nobj: usize,
    nc: usize,
    seed: Option<u64>,
    fevals: u64,
    name: String,
}

impl FnProblem {
    /// Creates a deterministic single-objective, unconstrained problem.
    pub fn new<F>(lb: Vec<f64>, ub: Vec<f64>, fitness_fn: F) -> Self
    where
        F: FnMut(&[f64], Option<u64>) -> Vec<f64> + 'static,
    {
        Self {
            lb,
            ub,
            fitness_fn: Box::new(fitness_fn),
            nobj: 1,
            nc: 0,
            seed: None,
            fevals: 0,
            name: "Function problem".to_string(),
        }
    }

    /// Makes the problem stochastic, starting from `seed`.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_objectives(mut self, nobj: usize) -> Self {
        self.nobj = nobj;
        self
    }

    pub fn with_constraints(mut self, nc: usize) -> Self {
        self.nc = nc;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// The current seed, if the problem is stochastic.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Problem for FnProblem {
    fn bounds(&self) -> (Vec<f64>, Vec<f64>) {
        (self.lb.clone(), self.ub.clone())
    }

    fn fitness(&mut self, x: &[f64]) -> Vec<f64> {
        self.fevals += 1;
        (self.fitness_fn)(x, self.seed)
    }

    fn fevals(&self) -> u64 {
        self.fevals
    }

    fn dimension(&self) -> usize {
        self.lb.len()
    }

    fn num_objectives(&self) -> usize {
        self.nobj
    }

    fn num_constraints(&self) -> usize {
        self.nc
    }

    fn is_stochastic(&self) -> bool {
        self.seed.is_some()
    }

    fn set_seed(&mut self, seed: u64) {
        if self.seed.is_some() {
            self.seed = Some(seed);
        }
    }

    fn name(&self) -> String {
        self.name.clone()
    }
}

impl fmt::Debug for FnProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnProblem")
            .field("name", &self.name)
            .field("lb", &self.lb)
            .field("ub", &self.ub)
            .field("nobj", &self.nobj)
            .field("nc", &self.nc)
            .field("seed", &self.seed)
            .field("fevals", &self.fevals)
            .finish()
    }
}
