pub mod crossover;
pub mod error;
pub mod evolution;
pub mod mutation;
pub mod population;
pub mod problem;
pub mod reinsertion;
pub mod rng;
pub mod selection;

// Re-export commonly used types for convenience
pub use crossover::Crossover;
pub use error::{GeneticError, OptionExt, Result};
pub use evolution::{Sga, SgaOptions};
pub use mutation::Mutation;
pub use population::{Population, VectorPopulation};
pub use problem::{FnProblem, Problem};
pub use selection::Selection;
