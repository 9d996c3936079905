//! # Error Types
//!
//! This module defines the error type shared by every part of the genetic
//! algorithm. Each variant corresponds to one class of failure:
//!
//! - construction-time configuration errors (out-of-range parameters,
//!   unknown operator names),
//! - evolve-time preamble errors (a problem or population the algorithm
//!   cannot work with),
//! - internal invariant violations, which should be unreachable.
//!
//! None of these are retried or recovered internally. The caller fixes the
//! configuration (or the population) and tries again.
//!
//! ## Examples
//!
//! ```rust
//! use sga::error::GeneticError;
//! use sga::Sga;
//!
//! let result = Sga::new(
//!     10, 1.5, 10.0, 0.02, 0.5, 1, 2, "gaussian", "tournament", "exponential", 0, 42,
//! );
//!
//! match result {
//!     Err(GeneticError::Configuration(msg)) => assert!(msg.contains("1.5")),
//!     _ => panic!("Expected a configuration error"),
//! }
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use sga::error::{GeneticError, OptionExt};
//!
//! fn first_fitness(fitness: &[Vec<f64>]) -> sga::error::Result<f64> {
//!     fitness
//!         .first()
//!         .and_then(|f| f.first().copied())
//!         .ok_or_else_genetic(|| GeneticError::InvalidPopulation("empty".to_string()))
//! }
//! ```

use thiserror::Error;

/// Represents errors that can occur while configuring or running the
/// genetic algorithm.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneticError {
    /// An invalid parameter or operator name was supplied at construction.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The problem has constraints or more than one objective.
    #[error("Incompatible problem: {0}")]
    IncompatibleProblem(String),

    /// The population cannot be evolved with the current configuration.
    #[error("Invalid population: {0}")]
    InvalidPopulation(String),

    /// An operator reached a state that validated configuration rules out.
    #[error("Internal logic error: {0}")]
    InternalLogic(String),
}

/// A specialized Result type for genetic algorithm operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the error type
/// fixed to `GeneticError`.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using a closure
    /// to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}
