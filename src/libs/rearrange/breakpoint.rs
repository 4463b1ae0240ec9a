//! Breakpoint graph of two genomes and its alternating cycles.

use super::codec::{block_partner, colored_edges, contains_edge, Edge, Node};
use super::two_break::TwoBreak;
use super::union_find::UnionFind;
use crate::libs::genome::Genome;
use indexmap::IndexSet;
use std::collections::HashMap;

/// Red edges from the source genome, blue edges from the target genome.
///
/// Every node carries exactly one red and one blue edge, so the union splits
/// into alternating red/blue cycles. A cycle of one red and one blue edge
/// between the same two nodes is trivial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakpointGraph {
    pub red: IndexSet<Edge>,
    pub blue: IndexSet<Edge>,
}

impl BreakpointGraph {
    pub fn new(source: &Genome, target: &Genome) -> Self {
        Self {
            red: colored_edges(source),
            blue: colored_edges(target),
        }
    }

    pub fn block_count(&self) -> usize {
        self.red.len()
    }

    /// Red edges first, then the blue ones not already present as the same
    /// ordered pair.
    pub fn edges(&self) -> IndexSet<Edge> {
        self.red.union(&self.blue).copied().collect()
    }

    pub fn cycle_count(&self) -> usize {
        count_breakpoint_cycles(&self.edges())
    }

    /// Blocks minus cycles.
    pub fn distance(&self) -> usize {
        self.block_count() - self.cycle_count()
    }

    pub fn locate_non_trivial_cycle(&self) -> Option<TwoBreak> {
        locate_non_trivial_cycle(&self.edges(), &self.red, &self.blue, self.block_count())
    }
}

/// Alternating cycles of a breakpoint graph: connected components over the
/// edge endpoints.
pub fn count_breakpoint_cycles(edges: &IndexSet<Edge>) -> usize {
    let mut uf = UnionFind::new(edges.iter().flat_map(|&(a, b)| [a, b]));
    for &(a, b) in edges {
        uf.union(a, b);
    }
    uf.count_sets()
}

/// Cycles of a genome graph, where the two ends of every block are linked as
/// well as the colored edges. Given the colored edges of one genome this is
/// its chromosome count.
///
/// ```
/// use rearr::libs::genome::Genome;
/// use rearr::libs::rearrange::{colored_edges, count_cycles};
///
/// let genome = Genome::new(vec![vec![1, -3, -2], vec![4, 5], vec![6, 7, 8]]);
/// assert_eq!(count_cycles(&colored_edges(&genome)), 3);
/// ```
pub fn count_cycles(edges: &IndexSet<Edge>) -> usize {
    genome_graph_components(edges).count_sets()
}

/// Union-find over edge endpoints and their block partners, with both kinds
/// of links merged.
pub(crate) fn genome_graph_components(edges: &IndexSet<Edge>) -> UnionFind<Node> {
    let mut uf = UnionFind::new(
        edges
            .iter()
            .flat_map(|&(a, b)| [a, block_partner(a), b, block_partner(b)]),
    );
    for &(a, b) in edges {
        uf.union(a, b);
        uf.union(a, block_partner(a));
        uf.union(b, block_partner(b));
    }
    uf
}

/// Finds the 2-break that splits a trivial cycle off a non-trivial one.
///
/// Returns `None` when the components over `edges` number `block_count`,
/// i.e. every cycle is trivial. Otherwise the first blue edge `(a, b)` lying
/// on a non-trivial cycle is picked, and the red edges at `a` and `b` are the
/// pair to break: `(a, red(a))` and `(b, red(b))`. Rejoining them as `(a, b)`
/// and `(red(a), red(b))` turns `(a, b)` into a trivial cycle and leaves the
/// rest of the old cycle as one cycle, so the cycle count grows by one.
///
/// # Panics
///
/// Panics if a non-trivial cycle exists but no blue edge on it has red edges
/// at both ends. That cannot happen for two genomes over the same blocks.
pub fn locate_non_trivial_cycle(
    edges: &IndexSet<Edge>,
    red_edges: &IndexSet<Edge>,
    blue_edges: &IndexSet<Edge>,
    block_count: usize,
) -> Option<TwoBreak> {
    let mut uf = UnionFind::new(edges.iter().flat_map(|&(a, b)| [a, b]));
    for &(a, b) in edges {
        uf.union(a, b);
    }
    let cycles = uf.count_sets();
    if cycles == block_count {
        return None;
    }

    let cycle_size: HashMap<Node, usize> = uf
        .groups()
        .into_iter()
        .map(|(root, members)| (root, members.len()))
        .collect();

    let mut red_partner: HashMap<Node, Node> = HashMap::with_capacity(2 * red_edges.len());
    for &(a, b) in red_edges {
        red_partner.insert(a, b);
        red_partner.insert(b, a);
    }

    for &(a, b) in edges {
        if !contains_edge(blue_edges, a, b) {
            continue;
        }
        let root = uf.find(a);
        if cycle_size.get(&root).copied().unwrap_or(0) <= 2 {
            continue;
        }
        if let (Some(&a_red), Some(&b_red)) = (red_partner.get(&a), red_partner.get(&b)) {
            let two_break = TwoBreak::new(a, a_red, b, b_red);
            log::trace!(
                "non-trivial cycle of {} nodes at blue edge ({}, {}): {}",
                cycle_size[&root],
                a,
                b,
                two_break
            );
            return Some(two_break);
        }
    }

    panic!(
        "breakpoint graph has {} cycles for {} blocks, but no blue edge on a non-trivial cycle",
        cycles, block_count
    );
}
