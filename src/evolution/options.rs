//! # SgaOptions
//!
//! The `SgaOptions` struct holds the configuration of the genetic algorithm:
//! the number of generations, the three operator choices and their numeric
//! parameters. It is validated once, when it is built, and is immutable
//! afterwards.
//!
//! ## Example
//!
//! ```rust
//! use sga::evolution::options::SgaOptions;
//! use sga::{Crossover, Mutation, Selection};
//!
//! // Create a validated configuration with a fluent builder
//! let options = SgaOptions::builder()
//!     .generations(200)
//!     .crossover(Crossover::Sbx)
//!     .eta_c(15.0)
//!     .mutation(Mutation::Polynomial)
//!     .param_m(20.0)
//!     .selection(Selection::Truncated)
//!     .param_s(4)
//!     .elitism(2)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(options.get_generations(), 200);
//!
//! // Out-of-range parameters are rejected
//! assert!(SgaOptions::builder().cr(1.5).build().is_err());
//! ```
//!
//! ## Parameters
//!
//! - `generations`: number of generations run by one call to evolve.
//! - `cr`: crossover probability, in `[0, 1]`. Unused by single-point crossover.
//! - `eta_c`: distribution index of SBX crossover, in `[1, 100)`.
//! - `m`: per-gene mutation probability, in `[0, 1]`.
//! - `param_m`: distribution index of polynomial mutation (in `[1, 100]`),
//!   otherwise the width of the mutation relative to the bounds (in `[0, 1]`).
//! - `elitism`: number of best parents carried over to the next generation.
//! - `param_s`: tournament size, or truncation size.
//! - `int_dim`: number of trailing genes treated as integers.

use crate::crossover::Crossover;
use crate::error::{GeneticError, Result};
use crate::mutation::Mutation;
use crate::selection::Selection;

/// A validated configuration.
///
/// With the `serde` feature, deserialization runs the same validation as
/// construction.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawSgaOptions")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct SgaOptions {
    generations: usize,
    cr: f64,
    eta_c: f64,
    m: f64,
    param_m: f64,
    elitism: usize,
    param_s: usize,
    mutation: Mutation,
    selection: Selection,
    crossover: Crossover,
    int_dim: usize,
}

/// Unchecked mirror of `SgaOptions`, deserialized before validation.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawSgaOptions {
    generations: usize,
    cr: f64,
    eta_c: f64,
    m: f64,
    param_m: f64,
    elitism: usize,
    param_s: usize,
    mutation: Mutation,
    selection: Selection,
    crossover: Crossover,
    int_dim: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSgaOptions> for SgaOptions {
    type Error = GeneticError;

    fn try_from(raw: RawSgaOptions) -> Result<Self> {
        let options = Self {
            generations: raw.generations,
            cr: raw.cr,
            eta_c: raw.eta_c,
            m: raw.m,
            param_m: raw.param_m,
            elitism: raw.elitism,
            param_s: raw.param_s,
            mutation: raw.mutation,
            selection: raw.selection,
            crossover: raw.crossover,
            int_dim: raw.int_dim,
        };
        options.validate()?;
        Ok(options)
    }
}

impl SgaOptions {
    /// Creates a validated configuration, parsing the operator names.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if a numeric parameter is out of
    /// range or an operator name is unknown.
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
    ) -> Result<Self> {
        let options = Self {
            generations,
            cr,
            eta_c,
            m,
            param_m,
            elitism,
            param_s,
            mutation: mutation.parse()?,
            selection: selection.parse()?,
            crossover: crossover.parse()?,
            int_dim,
        };
        options.validate()?;
        Ok(options)
    }

    /// Returns a builder for creating an `SgaOptions` instance.
    pub fn builder() -> SgaOptionsBuilder {
        SgaOptionsBuilder::default()
    }

    /// Checks every parameter range.
    pub fn validate(&self) -> Result<()> {
        // Written as negated range checks so that NaN is rejected too.
        if !(0.0..=1.0).contains(&self.cr) {
            return Err(GeneticError::Configuration(format!(
                "The crossover probability must be in the [0,1] range, while a value of {} was detected",
                self.cr
            )));
        }
        if !(1.0..100.0).contains(&self.eta_c) {
            return Err(GeneticError::Configuration(format!(
                "The distribution index for SBX crossover must be in [1, 100[, while a value of {} was detected",
                self.eta_c
            )));
        }
        if !(0.0..=1.0).contains(&self.m) {
            return Err(GeneticError::Configuration(format!(
                "The mutation probability must be in the [0,1] range, while a value of {} was detected",
                self.m
            )));
        }
        if self.param_s == 0 {
            return Err(GeneticError::Configuration(
                "The selection parameter must be at least 1, while a value of 0 was detected"
                    .to_string(),
            ));
        }
        match self.mutation {
            Mutation::Polynomial if !(1.0..=100.0).contains(&self.param_m) => {
                return Err(GeneticError::Configuration(format!(
                    "Polynomial mutation was selected, the mutation parameter must be in [1, 100], while a value of {} was detected",
                    self.param_m
                )));
            }
            Mutation::Gaussian | Mutation::Uniform if !(0.0..=1.0).contains(&self.param_m) => {
                return Err(GeneticError::Configuration(format!(
                    "The mutation parameter must be in [0,1], while a value of {} was detected",
                    self.param_m
                )));
            }
            _ => {}
        }
        Ok(())
    }

    pub fn get_generations(&self) -> usize {
        self.generations
    }

    pub fn get_cr(&self) -> f64 {
        self.cr
    }

    pub fn get_eta_c(&self) -> f64 {
        self.eta_c
    }

    pub fn get_m(&self) -> f64 {
        self.m
    }

    pub fn get_param_m(&self) -> f64 {
        self.param_m
    }

    pub fn get_elitism(&self) -> usize {
        self.elitism
    }

    pub fn get_param_s(&self) -> usize {
        self.param_s
    }

    pub fn get_mutation(&self) -> Mutation {
        self.mutation
    }

    pub fn get_selection(&self) -> Selection {
        self.selection
    }

    pub fn get_crossover(&self) -> Crossover {
        self.crossover
    }

    pub fn get_int_dim(&self) -> usize {
        self.int_dim
    }
}

impl Default for SgaOptions {
    fn default() -> Self {
        Self {
            generations: 1,
            cr: 0.95,
            eta_c: 10.0,
            m: 0.02,
            param_m: 0.5,
            elitism: 5,
            param_s: 5,
            mutation: Mutation::Gaussian,
            selection: Selection::Tournament,
            crossover: Crossover::Exponential,
            int_dim: 0,
        }
    }
}

/// Builder for `SgaOptions`.
///
/// Unset fields take the values of `SgaOptions::default()`.
#[derive(Debug, Clone, Default)]
pub struct SgaOptionsBuilder {
    generations: Option<usize>,
    cr: Option<f64>,
    eta_c: Option<f64>,
    m: Option<f64>,
    param_m: Option<f64>,
    elitism: Option<usize>,
    param_s: Option<usize>,
    mutation: Option<Mutation>,
    selection: Option<Selection>,
    crossover: Option<Crossover>,
    int_dim: Option<usize>,
}

impl SgaOptionsBuilder {
    /// Sets the number of generations.
    pub fn generations(mut self, value: usize) -> Self {
        self.generations = Some(value);
        self
    }

    /// Sets the crossover probability.
    pub fn cr(mut self, value: f64) -> Self {
        self.cr = Some(value);
        self
    }

    /// Sets the SBX distribution index.
    pub fn eta_c(mut self, value: f64) -> Self {
        self.eta_c = Some(value);
        self
    }

    /// Sets the mutation probability.
    pub fn m(mut self, value: f64) -> Self {
        self.m = Some(value);
        self
    }

    /// Sets the mutation width or distribution index.
    pub fn param_m(mut self, value: f64) -> Self {
        self.param_m = Some(value);
        self
    }

    pub fn elitism(mut self, value: usize) -> Self {
        self.elitism = Some(value);
        self
    }

    /// Sets the tournament or truncation size.
    pub fn param_s(mut self, value: usize) -> Self {
        self.param_s = Some(value);
        self
    }

    pub fn mutation(mut self, value: Mutation) -> Self {
        self.mutation = Some(value);
        self
    }

    pub fn selection(mut self, value: Selection) -> Self {
        self.selection = Some(value);
        self
    }

    pub fn crossover(mut self, value: Crossover) -> Self {
        self.crossover = Some(value);
        self
    }

    /// Sets the number of trailing integer genes.
    pub fn int_dim(mut self, value: usize) -> Self {
        self.int_dim = Some(value);
        self
    }

    /// Builds and validates the `SgaOptions` instance.
    pub fn build(self) -> Result<SgaOptions> {
        let defaults = SgaOptions::default();
        let options = SgaOptions {
            generations: self.generations.unwrap_or(defaults.generations),
            cr: self.cr.unwrap_or(defaults.cr),
            eta_c: self.eta_c.unwrap_or(defaults.eta_c),
            m: self.m.unwrap_or(defaults.m),
            param_m: self.param_m.unwrap_or(defaults.param_m),
            elitism: self.elitism.unwrap_or(defaults.elitism),
            param_s: self.param_s.unwrap_or(defaults.param_s),
            mutation: self.mutation.unwrap_or(defaults.mutation),
            selection: self.selection.unwrap_or(defaults.selection),
            crossover: self.crossover.unwrap_or(defaults.crossover),
            int_dim: self.int_dim.unwrap_or(defaults.int_dim),
        };
        options.validate()?;
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expect_configuration_error(result: Result<SgaOptions>, needle: &str) {
        match result {
            Err(GeneticError::Configuration(msg)) => {
                assert!(msg.contains(needle), "'{}' does not mention '{}'", msg, needle)
            }
            other => panic!("Expected Configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_defaults_are_valid() {
        let options = SgaOptions::builder().build().unwrap();
        assert_eq!(options, SgaOptions::default());
        assert_eq!(options.get_mutation(), Mutation::Gaussian);
        assert_eq!(options.get_selection(), Selection::Tournament);
        assert_eq!(options.get_crossover(), Crossover::Exponential);
    }

    #[test]
    fn test_new_parses_names() {
        let options = SgaOptions::new(
            10, 0.9, 10.0, 0.1, 20.0, 1, 2, "polynomial", "truncated", "sbx", 3,
        )
        .unwrap();
        assert_eq!(options.get_mutation(), Mutation::Polynomial);
        assert_eq!(options.get_selection(), Selection::Truncated);
        assert_eq!(options.get_crossover(), Crossover::Sbx);
        assert_eq!(options.get_int_dim(), 3);
    }

    #[test]
    fn test_unknown_names() {
        expect_configuration_error(
            SgaOptions::new(1, 0.9, 10.0, 0.1, 0.5, 1, 2, "cauchy", "truncated", "sbx", 0),
            "cauchy",
        );
        expect_configuration_error(
            SgaOptions::new(1, 0.9, 10.0, 0.1, 0.5, 1, 2, "uniform", "roulette", "sbx", 0),
            "roulette",
        );
        expect_configuration_error(
            SgaOptions::new(1, 0.9, 10.0, 0.1, 0.5, 1, 2, "uniform", "tournament", "two", 0),
            "two",
        );
    }

    #[test]
    fn test_numeric_ranges() {
        expect_configuration_error(SgaOptions::builder().cr(-0.1).build(), "crossover probability");
        expect_configuration_error(SgaOptions::builder().cr(1.01).build(), "crossover probability");
        expect_configuration_error(SgaOptions::builder().eta_c(0.5).build(), "SBX");
        expect_configuration_error(SgaOptions::builder().eta_c(100.0).build(), "SBX");
        expect_configuration_error(SgaOptions::builder().m(1.5).build(), "mutation probability");
        expect_configuration_error(SgaOptions::builder().param_s(0).build(), "selection parameter");
        expect_configuration_error(SgaOptions::builder().param_m(2.0).build(), "[0,1]");
        expect_configuration_error(
            SgaOptions::builder()
                .mutation(Mutation::Polynomial)
                .param_m(0.5)
                .build(),
            "Polynomial",
        );
    }

    #[test]
    fn test_nan_is_rejected() {
        assert!(SgaOptions::builder().cr(f64::NAN).build().is_err());
        assert!(SgaOptions::builder().m(f64::NAN).build().is_err());
        assert!(SgaOptions::builder().eta_c(f64::NAN).build().is_err());
        assert!(SgaOptions::builder().param_m(f64::NAN).build().is_err());
    }

    #[test]
    fn test_range_edges_are_accepted() {
        assert!(SgaOptions::builder().cr(0.0).build().is_ok());
        assert!(SgaOptions::builder().cr(1.0).build().is_ok());
        assert!(SgaOptions::builder().eta_c(1.0).build().is_ok());
        assert!(SgaOptions::builder().m(1.0).param_m(0.0).build().is_ok());
        assert!(SgaOptions::builder()
            .mutation(Mutation::Polynomial)
            .param_m(100.0)
            .build()
            .is_ok());
    }
}
