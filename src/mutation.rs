//! # Mutation
//!
//! Mutation perturbs the offspring genes in place. Every gene of every
//! individual mutates independently, decided by one Bernoulli(`m`) draw.
//!
//! - `Uniform` replaces the gene with a uniform draw within its bounds.
//! - `Gaussian` adds zero-mean normal noise of standard deviation
//!   `param_m * (ub - lb)` and clips.
//! - `Polynomial` applies Deb's polynomial mutation with distribution index
//!   `param_m` and clips.
//!
//! Genes of the trailing integer part go through the same operator, then are
//! rounded to the nearest integer within their bounds.
//!
//! ## Example
//!
//! ```rust
//! use sga::mutation::{Mutation, MutationParams};
//! use sga::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(42);
//! let mut x = vec![vec![0.5, 3.0], vec![0.1, 7.0]];
//! let params = MutationParams { m: 1.0, param_m: 0.1, int_dim: 1 };
//!
//! Mutation::Gaussian.perform(&mut x, &[0.0, 0.0], &[1.0, 10.0], &params, &mut rng);
//!
//! for xi in &x {
//!     assert!((0.0..=1.0).contains(&xi[0]));
//!     assert_eq!(xi[1], xi[1].round());
//! }
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// The mutation strategy of the genetic algorithm.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mutation {
    Gaussian,
    Uniform,
    Polynomial,
}

/// Parameters of the mutation operators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MutationParams {
    /// Per-gene mutation probability.
    pub m: f64,
    /// Relative width (gaussian, uniform) or distribution index (polynomial).
    pub param_m: f64,
    /// Number of trailing integer genes.
    pub int_dim: usize,
}

impl Mutation {
    /// Mutates every individual of `x` in place.
    pub fn perform(
        &self,
        x: &mut [Vec<f64>],
        lb: &[f64],
        ub: &[f64],
        params: &MutationParams,
        rng: &mut RandomNumberGenerator,
    ) {
        for xi in x.iter_mut() {
            let dim_c = xi.len() - params.int_dim;
            for (j, gene) in xi.iter_mut().enumerate() {
                if !rng.bernoulli(params.m) {
                    continue;
                }
                *gene = if j < dim_c {
                    self.mutate_gene(*gene, lb[j], ub[j], params.param_m, rng)
                } else {
                    self.mutate_integer_gene(*gene, lb[j], ub[j], params.param_m, rng)
                };
            }
        }
    }

    fn mutate_gene(
        &self,
        x: f64,
        lb: f64,
        ub: f64,
        param_m: f64,
        rng: &mut RandomNumberGenerator,
    ) -> f64 {
        match self {
            Mutation::Uniform => lb + rng.uniform01() * (ub - lb),
            Mutation::Gaussian => clip(x + rng.normal(param_m * (ub - lb)), lb, ub),
            Mutation::Polynomial => polynomial(x, lb, ub, param_m, rng.uniform01()),
        }
    }

    fn mutate_integer_gene(
        &self,
        x: f64,
        lb: f64,
        ub: f64,
        param_m: f64,
        rng: &mut RandomNumberGenerator,
    ) -> f64 {
        let (low, high) = (lb.ceil(), ub.floor());
        if low >= high {
            return low;
        }
        match self {
            Mutation::Uniform => {
                let span = (high - low) as usize;
                low + rng.index_inclusive(0, span) as f64
            }
            Mutation::Gaussian | Mutation::Polynomial => {
                clip(self.mutate_gene(x, lb, ub, param_m, rng).round(), low, high)
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Mutation::Gaussian => "gaussian",
            Mutation::Uniform => "uniform",
            Mutation::Polynomial => "polynomial",
        }
    }
}

/// Deb's polynomial mutation of `x` within `[lb, ub]`, for a uniform draw
/// `rand01` in `[0, 1)` and distribution index `eta_m`.
pub fn polynomial(x: f64, lb: f64, ub: f64, eta_m: f64, rand01: f64) -> f64 {
    if ub == lb {
        return lb;
    }
    let delta1 = (x - lb) / (ub - lb);
    let delta2 = (ub - x) / (ub - lb);
    let exponent = eta_m + 1.0;

    let deltaq = if rand01 < 0.5 {
        let xy = 1.0 - delta1;
        let val = 2.0 * rand01 + (1.0 - 2.0 * rand01) * xy.powf(exponent);
        val.powf(1.0 / exponent) - 1.0
    } else {
        let xy = 1.0 - delta2;
        let val = 2.0 * (1.0 - rand01) + 2.0 * (rand01 - 0.5) * xy.powf(exponent);
        1.0 - val.powf(1.0 / exponent)
    };

    clip(x + deltaq * (ub - lb), lb, ub)
}

fn clip(value: f64, low: f64, high: f64) -> f64 {
    if value < low {
        low
    } else if value > high {
        high
    } else {
        value
    }
}

impl fmt::Display for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mutation {
    type Err = GeneticError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "gaussian" => Ok(Mutation::Gaussian),
            "uniform" => Ok(Mutation::Uniform),
            "polynomial" => Ok(Mutation::Polynomial),
            other => Err(GeneticError::Configuration(format!(
                r#"The mutation type must either be "gaussian" or "uniform" or "polynomial": unknown type requested: {}"#,
                other
            ))),
        }
    }
}
