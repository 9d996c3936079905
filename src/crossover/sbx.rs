//! Simulated Binary Crossover (SBX).
//!
//! SBX produces two children from two parents using a spread factor drawn
//! from a polynomial distribution whose shape is set by the distribution
//! index `eta_c`. Higher values keep children closer to their parents.
//!
//! Only the continuous part of the decision vector goes through SBX. The
//! trailing integer part gets a two-point crossover instead, so it stays
//! integer valued.
//!
//! Reference: Deb, K., & Agrawal, R. B. (1995). Simulated Binary Crossover
//! for Continuous Search Space.

use crate::rng::RandomNumberGenerator;

/// Parents closer than this are treated as identical on that gene.
const MIN_PARENT_DISTANCE: f64 = 1e-14;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SbxCrossover {
    /// Probability that a pair is crossed over at all.
    pub cr: f64,
    /// Distribution index.
    pub eta_c: f64,
    /// Number of trailing integer genes.
    pub int_dim: usize,
}

impl SbxCrossover {
    pub fn new(cr: f64, eta_c: f64, int_dim: usize) -> Self {
        Self { cr, eta_c, int_dim }
    }

    /// Produces two children from `parent1` and `parent2`.
    ///
    /// Children start as copies of their parents. With probability `cr` the
    /// continuous genes are recombined, each with probability 0.5; with
    /// probability `cr` the integer genes go through a two-point crossover.
    pub fn mate(
        &self,
        parent1: &[f64],
        parent2: &[f64],
        lb: &[f64],
        ub: &[f64],
        rng: &mut RandomNumberGenerator,
    ) -> (Vec<f64>, Vec<f64>) {
        let dim = parent1.len();
        let dim_c = dim - self.int_dim;
        let mut child1 = parent1.to_vec();
        let mut child2 = parent2.to_vec();

        if rng.uniform01() <= self.cr {
            for i in 0..dim_c {
                if rng.uniform01() <= 0.5
                    && (parent1[i] - parent2[i]).abs() > MIN_PARENT_DISTANCE
                    && lb[i] != ub[i]
                {
                    let (c1, c2) = self.spread(parent1[i], parent2[i], lb[i], ub[i], rng);
                    if rng.uniform01() <= 0.5 {
                        child1[i] = c1;
                        child2[i] = c2;
                    } else {
                        child1[i] = c2;
                        child2[i] = c1;
                    }
                }
            }
        }

        if self.int_dim > 0 && rng.uniform01() <= self.cr {
            let mut site1 = rng.index_inclusive(0, self.int_dim - 1);
            let mut site2 = rng.index_inclusive(0, self.int_dim - 1);
            if site1 > site2 {
                std::mem::swap(&mut site1, &mut site2);
            }
            for j in dim_c + site1..dim_c + site2 {
                child1[j] = parent2[j];
                child2[j] = parent1[j];
            }
        }

        (child1, child2)
    }

    /// Computes the two children values of one gene, clipped to `[yl, yu]`.
    ///
    /// `c1` is spread towards the lower bound, `c2` towards the upper bound.
    fn spread(
        &self,
        x1: f64,
        x2: f64,
        yl: f64,
        yu: f64,
        rng: &mut RandomNumberGenerator,
    ) -> (f64, f64) {
        let (y1, y2) = if x1 < x2 { (x1, x2) } else { (x2, x1) };
        let rand01 = rng.uniform01();

        let beta = 1.0 + 2.0 * (y1 - yl) / (y2 - y1);
        let betaq = self.betaq(beta, rand01);
        let c1 = 0.5 * ((y1 + y2) - betaq * (y2 - y1));

        let beta = 1.0 + 2.0 * (yu - y2) / (y2 - y1);
        let betaq = self.betaq(beta, rand01);
        let c2 = 0.5 * ((y1 + y2) + betaq * (y2 - y1));

        (clip(c1, yl, yu), clip(c2, yl, yu))
    }

    fn betaq(&self, beta: f64, rand01: f64) -> f64 {
        let exponent = self.eta_c + 1.0;
        let alpha = 2.0 - beta.powf(-exponent);
        if rand01 <= 1.0 / alpha {
            (rand01 * alpha).powf(1.0 / exponent)
        } else {
            (1.0 / (2.0 - rand01 * alpha)).powf(1.0 / exponent)
        }
    }
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
