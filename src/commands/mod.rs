//! Command implementations

pub mod benchmark;
pub mod neighbors;
pub mod solve;
pub mod stats;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use neighbors::{NeighborsResult, list_neighbors};
pub use solve::{SolveConfig, SolveResult, check_pair, solve_ladder};
pub use stats::{StatsResult, analyze_dictionary};
