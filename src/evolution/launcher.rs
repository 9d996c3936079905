use std::fmt;

use tracing::{debug, info, warn};

use super::options::SgaOptions;
use crate::{
    crossover::{Crossover, CrossoverParams},
    error::{GeneticError, OptionExt, Result},
    mutation::{Mutation, MutationParams},
    population::{compare_fitness, Population},
    problem::Problem,
    reinsertion::ElitistReinsertion,
    rng::RandomNumberGenerator,
    selection::Selection,
};

/// A simple generational genetic algorithm.
///
/// Every generation runs selection, crossover and mutation over the current
/// population, evaluates the offspring and reinserts them with elitism. The
/// algorithm owns one random engine, seeded at construction, which drives
/// every stochastic decision: two runs with the same seed, configuration and
/// problem give identical populations.
///
/// # Examples
///
/// ```
/// use sga::population::{Population, VectorPopulation};
/// use sga::problem::FnProblem;
/// use sga::rng::RandomNumberGenerator;
/// use sga::Sga;
///
/// let problem = FnProblem::new(vec![-5.0; 3], vec![5.0; 3], |x, _| {
///     vec![x.iter().map(|v| v * v).sum()]
/// });
/// let mut rng = RandomNumberGenerator::from_seed(1);
/// let pop = VectorPopulation::with_random(problem, 20, 0, &mut rng).unwrap();
/// let initial_best = pop.champion_f().unwrap()[0];
///
/// let mut algo = Sga::new(
///     50, 0.9, 10.0, 0.1, 0.1, 2, 3, "gaussian", "tournament", "exponential", 0, 42,
/// )
/// .unwrap();
/// let pop = algo.evolve(pop).unwrap();
///
/// assert!(pop.champion_f().unwrap()[0] <= initial_best);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Sga {
    options: SgaOptions,
    rng: RandomNumberGenerator,
    seed: u64,
    verbosity: usize,
}

impl Sga {
    /// Constructs a genetic algorithm from raw parameters.
    ///
    /// # Arguments
    ///
    /// * `generations` - Number of generations.
    /// * `cr` - Crossover probability, in `[0, 1]`.
    /// * `eta_c` - SBX distribution index, in `[1, 100)`.
    /// * `m` - Mutation probability, in `[0, 1]`.
    /// * `param_m` - Polynomial distribution index in `[1, 100]`, otherwise
    ///   the relative mutation width in `[0, 1]`.
    /// * `elitism` - Number of parents carried over to the next generation.
    /// * `param_s` - Tournament size or truncation size, at least 1.
    /// * `mutation` - One of "gaussian", "uniform" or "polynomial".
    /// * `selection` - One of "tournament" or "truncated".
    /// * `crossover` - One of "exponential", "binomial", "single" or "sbx".
    /// * `int_dim` - Number of trailing genes treated as integers.
    /// * `seed` - Seed of the random engine.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` on any out-of-range parameter or
    /// unknown operator name.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        generations: usize,
        cr: f64,
        eta_c: f64,
        m: f64,
        param_m: f64,
        elitism: usize,
        param_s: usize,
        mutation: &str,
        selection: &str,
        crossover: &str,
        int_dim: usize,
        seed: u64,
    ) -> Result<Self> {
        let options = SgaOptions::new(
            generations,
            cr,
            eta_c,
            m,
            param_m,
            elitism,
            param_s,
            mutation,
            selection,
            crossover,
            int_dim,
        )?;
        Ok(Self::from_options(options, seed))
    }

    /// Constructs a genetic algorithm from an already validated configuration.
    pub fn from_options(options: SgaOptions, seed: u64) -> Self {
        Self {
            options,
            rng: RandomNumberGenerator::from_seed(seed),
            seed,
            verbosity: 0,
        }
    }

    /// Evolves `pop` for the configured number of generations and returns it.
    ///
    /// # Errors
    ///
    /// Nothing is modified if an error is returned by the checks run before
    /// the first generation:
    /// - `GeneticError::IncompatibleProblem` if the problem is constrained,
    ///   has more than one objective, or has a lower bound above its upper
    ///   bound (or a NaN bound);
    /// - `GeneticError::InvalidPopulation` if the population has fewer than 2
    ///   individuals, fewer than `elitism` or `param_s`, an odd size under SBX,
    ///   or does not fit the problem and integer part.
    ///
    /// `pop` is taken by value and is dropped when an error is returned. Keep
    /// a clone if the population must survive a rejected call.
    pub fn evolve<P: Population>(&mut self, mut pop: P) -> Result<P> {
        if let Err(e) = self.check_population(&pop) {
            warn!(error = %e, "population rejected");
            return Err(e);
        }

        let generations = self.options.get_generations();
        if generations == 0 {
            return Ok(pop);
        }

        let (lb, ub) = pop.problem().bounds();
        let fevals0 = pop.problem().fevals();
        let size = pop.size();
        let selection = self.options.get_selection();
        let crossover = self.options.get_crossover();
        let mutation = self.options.get_mutation();
        let reinsertion = ElitistReinsertion::new(self.options.get_elitism());
        let crossover_params = CrossoverParams {
            cr: self.options.get_cr(),
            eta_c: self.options.get_eta_c(),
            int_dim: self.options.get_int_dim(),
        };
        let mutation_params = MutationParams {
            m: self.options.get_m(),
            param_m: self.options.get_param_m(),
            int_dim: self.options.get_int_dim(),
        };
        let mut best = pop.champion_f().map_or(f64::INFINITY, |f| f[0]);

        debug!(
            problem = %pop.problem().name(),
            size,
            generations,
            "starting evolution"
        );

        for generation in 1..=generations {
            if pop.problem().is_stochastic() {
                let seed = self.rng.next_seed();
                pop.problem_mut().set_seed(seed);
                // Re-evaluate the whole population w.r.t. the new seed
                for i in 0..size {
                    let x = pop.decision_vectors()[i].clone();
                    let f = pop.problem_mut().fitness(&x);
                    pop.set_xf(i, x, f)?;
                }
            }

            let old_x = pop.decision_vectors().to_vec();
            let old_f = pop.fitness_vectors().to_vec();

            let selected = selection.select(&old_f, self.options.get_param_s(), &mut self.rng)?;
            let mut new_x: Vec<Vec<f64>> = selected.iter().map(|&i| old_x[i].clone()).collect();

            crossover.perform(&mut new_x, &lb, &ub, &crossover_params, &mut self.rng)?;
            mutation.perform(&mut new_x, &lb, &ub, &mutation_params, &mut self.rng);

            let new_f: Vec<Vec<f64>> = new_x
                .iter()
                .map(|x| pop.problem_mut().fitness(x))
                .collect();

            let (next_x, next_f) = reinsertion.reinsert(&old_x, &old_f, &new_x, &new_f);
            for (i, (x, f)) in next_x.into_iter().zip(next_f).enumerate() {
                pop.set_xf(i, x, f)?;
            }

            if self.verbosity > 0 {
                let current_best = pop
                    .champion_f()
                    .ok_or_else_genetic(|| {
                        GeneticError::InternalLogic("Empty population after reinsertion".to_string())
                    })?[0];
                if compare_fitness(current_best, best).is_lt() {
                    best = current_best;
                }
                if (generation - 1) % self.verbosity == 0 {
                    info!(
                        gen = generation,
                        fevals = pop.problem().fevals() - fevals0,
                        best,
                        current_best,
                        "generation completed"
                    );
                }
            }
        }

        debug!(
            fevals = pop.problem().fevals() - fevals0,
            "evolution finished"
        );
        Ok(pop)
    }

    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    fn check_population<P: Population>(&self, pop: &P) -> Result<()> {
        let prob = pop.problem();
        let size = pop.size();
        let elitism = self.options.get_elitism();
        let param_s = self.options.get_param_s();
        let int_dim = self.options.get_int_dim();

        if prob.num_constraints() != 0 {
            return Err(GeneticError::IncompatibleProblem(format!(
                "Constraints detected in {} instance. {} cannot deal with them",
                prob.name(),
                self.name()
            )));
        }
        if prob.num_objectives() != 1 {
            return Err(GeneticError::IncompatibleProblem(format!(
                "Multiple objectives detected in {} instance. {} cannot deal with them",
                prob.name(),
                self.name()
            )));
        }
        if size < 2 {
            return Err(GeneticError::InvalidPopulation(format!(
                "{} needs at least 2 individuals in the population, {} detected",
                self.name(),
                size
            )));
        }
        if elitism > size {
            return Err(GeneticError::InvalidPopulation(format!(
                "The elitism must be smaller than the population size, while a value of: {} was detected in a population of size: {}",
                elitism, size
            )));
        }
        if param_s > size {
            return Err(GeneticError::InvalidPopulation(format!(
                "The parameter for selection must be smaller than the population size, while a value of: {} was detected in a population of size: {}",
                param_s, size
            )));
        }
        if self.options.get_crossover() == Crossover::Sbx && size % 2 != 0 {
            return Err(GeneticError::InvalidPopulation(format!(
                "Population size must be even if sbx crossover is selected. Detected pop size is: {}",
                size
            )));
        }

        let (lb, ub) = prob.bounds();
        let dim = lb.len();
        if dim == 0 || ub.len() != dim {
            return Err(GeneticError::IncompatibleProblem(format!(
                "{} has malformed bounds: {} lower and {} upper values",
                prob.name(),
                lb.len(),
                ub.len()
            )));
        }
        if let Some(j) = (0..dim).find(|&j| !(lb[j] <= ub[j])) {
            return Err(GeneticError::IncompatibleProblem(format!(
                "{} has invalid bounds for gene {}: the lower bound {} must not exceed the upper bound {}",
                prob.name(),
                j,
                lb[j],
                ub[j]
            )));
        }
        if int_dim > dim {
            return Err(GeneticError::InvalidPopulation(format!(
                "The integer part ({}) cannot be larger than the problem dimension ({})",
                int_dim, dim
            )));
        }
        if let Some(x) = pop.decision_vectors().iter().find(|x| x.len() != dim) {
            return Err(GeneticError::InvalidPopulation(format!(
                "Decision vector of length {} detected for a problem of dimension {}",
                x.len(),
                dim
            )));
        }
        if let Some(f) = pop.fitness_vectors().iter().find(|f| f.len() != 1) {
            return Err(GeneticError::InvalidPopulation(format!(
                "Fitness vector of length {} detected, 1 expected",
                f.len()
            )));
        }
        for j in dim - int_dim..dim {
            if lb[j].fract() != 0.0 || ub[j].fract() != 0.0 {
                return Err(GeneticError::InvalidPopulation(format!(
                    "The bounds of integer gene {} must be integers, [{}, {}] detected",
                    j, lb[j], ub[j]
                )));
            }
        }
        Ok(())
    }

    /// Reseeds the random engine.
    pub fn set_seed(&mut self, seed: u64) {
        self.rng.reseed(seed);
        self.seed = seed;
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Sets the verbosity: 0 is silent, `k > 0` logs one line every `k`
    /// generations through `tracing`.
    pub fn set_verbosity(&mut self, level: usize) {
        self.verbosity = level;
    }

    pub fn verbosity(&self) -> usize {
        self.verbosity
    }

    pub fn options(&self) -> &SgaOptions {
        &self.options
    }

    pub fn name(&self) -> &'static str {
        "Genetic Algorithm"
    }

    /// A human-readable dump of the configuration.
    pub fn extra_info(&self) -> String {
        let o = &self.options;
        let mut info = format!(
            "\tNumber of generations: {}\n\tElitism: {}\n\tCrossover:\n\t\tType: {}\n\t\tProbability: {}",
            o.get_generations(),
            o.get_elitism(),
            o.get_crossover(),
            o.get_cr()
        );
        if o.get_crossover() == Crossover::Sbx {
            info.push_str(&format!("\n\t\tDistribution index: {}", o.get_eta_c()));
        }
        info.push_str(&format!(
            "\n\tMutation:\n\t\tType: {}\n\t\tProbability: {}",
            o.get_mutation(),
            o.get_m()
        ));
        match o.get_mutation() {
            Mutation::Polynomial => {
                info.push_str(&format!("\n\t\tDistribution index: {}", o.get_param_m()))
            }
            Mutation::Gaussian | Mutation::Uniform => {
                info.push_str(&format!("\n\t\tWidth: {}", o.get_param_m()))
            }
        }
        info.push_str(&format!("\n\tSelection:\n\t\tType: {}", o.get_selection()));
        match o.get_selection() {
            Selection::Truncated => {
                info.push_str(&format!("\n\t\tTruncation size: {}", o.get_param_s()))
            }
            Selection::Tournament => {
                info.push_str(&format!("\n\t\tTournament size: {}", o.get_param_s()))
            }
        }
        info.push_str(&format!(
            "\n\tSize of the integer part: {}\n\tSeed: {}\n\tVerbosity: {}",
            o.get_int_dim(),
            self.seed,
            self.verbosity
        ));
        info
    }
}

impl fmt::Display for Sga {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:\n{}", self.name(), self.extra_info())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::population::VectorPopulation;
    use crate::problem::FnProblem;

    fn sphere(dim: usize) -> FnProblem {
        FnProblem::new(vec![-1.0; dim], vec![1.0; dim], |x, _| {
            vec![x.iter().map(|v| v * v).sum()]
        })
        .with_name("sphere")
    }

    fn population(problem: FnProblem, size: usize) -> VectorPopulation<FnProblem> {
        let mut rng = RandomNumberGenerator::from_seed(0);
        VectorPopulation::with_random(problem, size, 0, &mut rng).unwrap()
    }

    fn default_sga(generations: usize) -> Sga {
        let options = SgaOptions::builder()
            .generations(generations)
            .elitism(1)
            .param_s(2)
            .build()
            .unwrap();
        Sga::from_options(options, 7)
    }

    #[test]
    fn test_name_and_info() {
        let sga = default_sga(3);
        assert_eq!(sga.name(), "Genetic Algorithm");
        let info = sga.extra_info();
        assert!(info.contains("Number of generations: 3"));
        assert!(info.contains("Type: exponential"));
        assert!(info.contains("Width: 0.5"));
        assert!(info.contains("Tournament size: 2"));
        assert!(info.contains("Seed: 7"));
        assert!(!info.contains("Distribution index"));
        assert!(sga.to_string().starts_with("Genetic Algorithm:"));
    }

    #[test]
    fn test_info_for_sbx_and_polynomial() {
        let sga = Sga::new(1, 0.9, 15.0, 0.1, 20.0, 1, 2, "polynomial", "truncated", "sbx", 0, 1)
            .unwrap();
        let info = sga.extra_info();
        assert!(info.contains("Distribution index: 15"));
        assert!(info.contains("Distribution index: 20"));
        assert!(info.contains("Truncation size: 2"));
    }

    #[test]
    fn test_seed_and_verbosity() {
        let mut sga = default_sga(1);
        assert_eq!(sga.seed(), 7);
        assert_eq!(sga.verbosity(), 0);
        sga.set_seed(12);
        sga.set_verbosity(5);
        assert_eq!(sga.seed(), 12);
        assert_eq!(sga.verbosity(), 5);
        assert_eq!(sga.rng, RandomNumberGenerator::from_seed(12));
    }

    #[test]
    fn test_evolve_counts_fevals() {
        let mut sga = default_sga(3);
        let pop = population(sphere(2), 6);
        let fevals0 = pop.problem().fevals();
        let pop = sga.evolve(pop).unwrap();
        assert_eq!(pop.problem().fevals() - fevals0, 3 * 6);
    }

    #[test]
    fn test_preamble_errors() {
        let mut sga = default_sga(1);

        let pop = population(sphere(2).with_constraints(1), 4);
        assert!(matches!(sga.evolve(pop), Err(GeneticError::IncompatibleProblem(_))));

        let problem = FnProblem::new(vec![0.0], vec![1.0], |x, _| vec![x[0], -x[0]])
            .with_objectives(2);
        let pop = population(problem, 4);
        assert!(matches!(sga.evolve(pop), Err(GeneticError::IncompatibleProblem(_))));

        let pop = population(sphere(2), 1);
        assert!(matches!(sga.evolve(pop), Err(GeneticError::InvalidPopulation(_))));
    }

    #[test]
    fn test_elitism_and_param_s_larger_than_population() {
        let options = SgaOptions::builder().elitism(5).param_s(2).build().unwrap();
        let mut sga = Sga::from_options(options, 1);
        match sga.evolve(population(sphere(2), 4)) {
            Err(GeneticError::InvalidPopulation(msg)) => assert!(msg.contains("elitism")),
            _ => panic!("Expected InvalidPopulation error"),
        }

        let options = SgaOptions::builder().elitism(1).param_s(5).build().unwrap();
        let mut sga = Sga::from_options(options, 1);
        match sga.evolve(population(sphere(2), 4)) {
            Err(GeneticError::InvalidPopulation(msg)) => assert!(msg.contains("selection")),
            _ => panic!("Expected InvalidPopulation error"),
        }
    }

    #[test]
    fn test_integer_part_checks() {
        let options = SgaOptions::builder()
            .elitism(1)
            .param_s(2)
            .int_dim(3)
            .build()
            .unwrap();
        let mut sga = Sga::from_options(options, 1);
        assert!(sga.evolve(population(sphere(2), 4)).is_err());

        let problem = FnProblem::new(vec![0.0, 0.5], vec![1.0, 3.0], |x, _| vec![x[0] + x[1]]);
        let mut pop = VectorPopulation::new(problem);
        for i in 0..4 {
            pop.push(vec![0.1 * i as f64, 1.0]).unwrap();
        }
        let options = SgaOptions::builder()
            .elitism(1)
            .param_s(2)
            .int_dim(1)
            .build()
            .unwrap();
        let mut sga = Sga::from_options(options, 1);
        match sga.evolve(pop) {
            Err(GeneticError::InvalidPopulation(msg)) => assert!(msg.contains("integer gene 1")),
            _ => panic!("Expected InvalidPopulation error"),
        }
    }

    #[test]
    fn test_inverted_or_nan_bounds_are_rejected() {
        let mut sga = default_sga(3);

        let problem = FnProblem::new(vec![0.0, 1.0], vec![1.0, 0.0], |x, _| vec![x[0] + x[1]])
            .with_name("inverted");
        let mut pop = VectorPopulation::new(problem);
        for _ in 0..4 {
            pop.push(vec![0.5, 0.5]).unwrap();
        }
        let before = sga.clone();
        match sga.evolve(pop) {
            Err(GeneticError::IncompatibleProblem(msg)) => {
                assert!(msg.contains("inverted"));
                assert!(msg.contains("gene 1"));
            }
            _ => panic!("Expected IncompatibleProblem error"),
        }
        assert_eq!(sga, before);

        let problem = FnProblem::new(vec![0.0, f64::NAN], vec![1.0, 1.0], |x, _| vec![x[0]]);
        let mut pop = VectorPopulation::new(problem);
        for _ in 0..4 {
            pop.push(vec![0.5, 0.5]).unwrap();
        }
        assert!(matches!(sga.evolve(pop), Err(GeneticError::IncompatibleProblem(_))));

        // Equal bounds are a valid fixed gene
        let problem = FnProblem::new(vec![0.0, 2.0], vec![1.0, 2.0], |x, _| vec![x[0]]);
        let mut pop = VectorPopulation::new(problem);
        for _ in 0..4 {
            pop.push(vec![0.5, 2.0]).unwrap();
        }
        let pop = sga.evolve(pop).unwrap();
        assert!(pop.decision_vectors().iter().all(|x| x[1] == 2.0));
    }

    #[test]
    fn test_preamble_failure_leaves_the_engine_untouched() {
        let mut sga = default_sga(1);
        let before = sga.clone();
        let _ = sga.evolve(population(sphere(2), 1));
        assert_eq!(sga, before);
    }
}
