//! Subcommand modules for the `rearr` binary.

pub mod distance;
pub mod edges;
pub mod sort;
pub mod two_break;
