pub mod launcher;
pub mod options;

pub use launcher::Sga;
pub use options::{SgaOptions, SgaOptionsBuilder};
