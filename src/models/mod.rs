mod solver;
mod stoich;

pub use solver::*;
pub use stoich::*;
