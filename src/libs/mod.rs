pub mod genome;
pub mod io;
pub mod rearrange;

// Flat re-exports of the types most callers need
pub use genome::{Block, Chromosome, Genome, GenomeError};
pub use rearrange::{two_break_distance, two_break_distance_and_sort, Scenario, TwoBreak};
