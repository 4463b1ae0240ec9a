//! 2-break rearrangements on breakpoint graphs.
//!
//! * `codec`      - chromosomes to node cycles and colored edges, and back
//! * `union_find` - disjoint sets, one fresh instance per graph query
//! * `breakpoint` - red/blue breakpoint graph, cycle counts, cycle selection
//! * `two_break`  - one 2-break on an edge set or on a genome
//! * `scenario`   - repeated 2-breaks from a source genome to a target genome

pub mod breakpoint;
pub mod codec;
pub mod scenario;
pub mod two_break;
pub mod union_find;

pub use breakpoint::{
    count_breakpoint_cycles, count_cycles, locate_non_trivial_cycle, BreakpointGraph,
};
pub use codec::{
    block_partner, chromosome_to_nodes, colored_edges, contains_edge, nodes_to_chromosome, Edge,
    Node,
};
pub use scenario::{
    two_break_distance, two_break_distance_and_sort, validate_pair, Rearrangement, Scenario, State,
};
pub use two_break::{apply_to_genome, genome_from_edges, rewrite_edges, TwoBreak, TwoBreakKind};
pub use union_find::UnionFind;
