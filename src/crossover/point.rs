//! Partner-based crossover: single-point, binomial and exponential.
//!
//! Every individual of the pool becomes a child. Its partner is drawn
//! uniformly among the other individuals of the pool as it was before
//! crossover started, so children never mate with other children.

use crate::crossover::Crossover;
use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// Recombines every individual of `x` with a random partner.
///
/// `x` must hold at least two vectors of equal, non-zero length.
pub fn recombine(
    kind: Crossover,
    x: &mut [Vec<f64>],
    cr: f64,
    rng: &mut RandomNumberGenerator,
) -> Result<()> {
    let parents = x.to_vec();
    let last = parents.len() - 1;
    // all_idx[0] is always the current individual, the partner is drawn from the rest
    let mut all_idx: Vec<usize> = (0..parents.len()).collect();

    for (i, child) in x.iter_mut().enumerate() {
        all_idx.swap(0, i);
        let partner = &parents[all_idx[rng.index_inclusive(1, last)]];

        match kind {
            Crossover::Exponential => exponential(child, partner, cr, rng),
            Crossover::Binomial => binomial(child, partner, cr, rng),
            Crossover::Single => single_point(child, partner, rng),
            Crossover::Sbx => {
                return Err(GeneticError::InternalLogic(
                    "sbx crossover cannot be applied to a single partner".to_string(),
                ))
            }
        }
    }
    Ok(())
}

/// Copies the partner's genes from a random cut point in `[0, D]` to the end.
pub fn single_point(child: &mut [f64], partner: &[f64], rng: &mut RandomNumberGenerator) {
    let n = rng.index_inclusive(0, child.len());
    child[n..].copy_from_slice(&partner[n..]);
}

/// Walks all `D` genes from a random start, wrapping around, and copies each
/// partner gene with probability `cr`. The last gene visited is always copied.
pub fn binomial(child: &mut [f64], partner: &[f64], cr: f64, rng: &mut RandomNumberGenerator) {
    let dim = child.len();
    let mut n = rng.index_inclusive(0, dim - 1);
    for l in 0..dim {
        if rng.bernoulli(cr) || l + 1 == dim {
            child[n] = partner[n];
        }
        n = (n + 1) % dim;
    }
}

/// Copies consecutive partner genes from a random start, wrapping around,
/// for as long as Bernoulli(`cr`) trials succeed. At least one and at most
/// `D` genes are copied.
pub fn exponential(
    child: &mut [f64],
    partner: &[f64],
    cr: f64,
    rng: &mut RandomNumberGenerator,
) {
    let dim = child.len();
    let mut n = rng.index_inclusive(0, dim - 1);
    let mut copied = 0;
    loop {
        child[n] = partner[n];
        n = (n + 1) % dim;
        copied += 1;
        if !(rng.bernoulli(cr) && copied < dim) {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_from_partner(child: &[f64]) -> usize {
        child.iter().filter(|&&g| g == 1.0).count()
    }

    #[test]
    fn test_single_point_copies_a_suffix() {
        let mut rng = RandomNumberGenerator::from_seed(3);
        for _ in 0..50 {
            let mut child = vec![0.0; 6];
            single_point(&mut child, &[1.0; 6], &mut rng);
            let n = child.iter().position(|&g| g == 1.0).unwrap_or(6);
            assert!(child[n..].iter().all(|&g| g == 1.0));
            assert!(child[..n].iter().all(|&g| g == 0.0));
        }
    }

    #[test]
    fn test_binomial_copies_at_least_one_gene() {
        let mut rng = RandomNumberGenerator::from_seed(4);
        for _ in 0..50 {
            let mut child = vec![0.0; 5];
            binomial(&mut child, &[1.0; 5], 0.0, &mut rng);
            assert_eq!(count_from_partner(&child), 1);
        }
    }

    #[test]
    fn test_binomial_with_certain_crossover_copies_everything() {
        let mut rng = RandomNumberGenerator::from_seed(4);
        let mut child = vec![0.0; 5];
        binomial(&mut child, &[1.0; 5], 1.0, &mut rng);
        assert_eq!(child, vec![1.0; 5]);
    }

    #[test]
    fn test_exponential_copies_a_wrapping_run() {
        let mut rng = RandomNumberGenerator::from_seed(5);
        for _ in 0..50 {
            let mut child = vec![0.0; 7];
            exponential(&mut child, &[1.0; 7], 0.6, &mut rng);
            let copied = count_from_partner(&child);
            assert!((1..=7).contains(&copied));

            // Copied genes form one contiguous run on the ring
            let starts = (0..7)
                .filter(|&j| child[j] == 1.0 && child[(j + 6) % 7] == 0.0)
                .count();
            assert!(starts <= 1);
        }
    }

    #[test]
    fn test_exponential_bounds() {
        let mut rng = RandomNumberGenerator::from_seed(6);

        let mut child = vec![0.0; 4];
        exponential(&mut child, &[1.0; 4], 0.0, &mut rng);
        assert_eq!(count_from_partner(&child), 1);

        let mut child = vec![0.0; 4];
        exponential(&mut child, &[1.0; 4], 1.0, &mut rng);
        assert_eq!(child, vec![1.0; 4]);
    }

    #[test]
    fn test_partner_is_never_self() {
        // With two individuals the partner is always the other one
        let mut rng = RandomNumberGenerator::from_seed(8);
        let mut x = vec![vec![0.0; 3], vec![1.0; 3]];
        recombine(Crossover::Binomial, &mut x, 1.0, &mut rng).unwrap();
        assert_eq!(x, vec![vec![1.0; 3], vec![0.0; 3]]);
    }

    #[test]
    fn test_partners_come_from_the_original_pool() {
        let mut rng = RandomNumberGenerator::from_seed(9);
        let mut x = vec![vec![0.0; 2], vec![1.0; 2], vec![2.0; 2]];
        recombine(Crossover::Exponential, &mut x, 1.0, &mut rng).unwrap();
        // cr = 1 copies the whole partner, so every child is some other original
        for (i, child) in x.iter().enumerate() {
            assert_ne!(child[0], i as f64);
            assert_eq!(child[0], child[1]);
        }
    }

    #[test]
    fn test_sbx_is_not_a_point_crossover() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        let mut x = vec![vec![0.0], vec![1.0]];
        assert!(matches!(
            recombine(Crossover::Sbx, &mut x, 0.5, &mut rng),
            Err(GeneticError::InternalLogic(_))
        ));
    }
}
