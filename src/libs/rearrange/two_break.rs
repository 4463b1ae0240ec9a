//! 2-breaks on colored edge sets and on genomes.

use super::breakpoint::genome_graph_components;
use super::codec::{block_partner, colored_edges, nodes_to_chromosome, Edge, Node};
use crate::libs::genome::{canonical_chromosome, sort_chromosomes, Chromosome, Genome};
use indexmap::{IndexMap, IndexSet};
use std::fmt;

/// Replaces the edges `(i0, i1)` and `(j0, j1)` by `(i0, j0)` and `(i1, j1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TwoBreak {
    pub i0: Node,
    pub i1: Node,
    pub j0: Node,
    pub j1: Node,
}

impl TwoBreak {
    pub fn new(i0: Node, i1: Node, j0: Node, j1: Node) -> Self {
        Self { i0, i1, j0, j1 }
    }

    pub fn removed(&self) -> [Edge; 2] {
        [(self.i0, self.i1), (self.j0, self.j1)]
    }

    pub fn added(&self) -> [Edge; 2] {
        [(self.i0, self.j0), (self.i1, self.j1)]
    }
}

/// `(i0, i1), (j0, j1) -> (i0, j0), (i1, j1)`
impl fmt::Display for TwoBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}), ({}, {}) -> ({}, {}), ({}, {})",
            self.i0, self.i1, self.j0, self.j1, self.i0, self.j0, self.i1, self.j1
        )
    }
}

/// What a single 2-break does to circular chromosomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TwoBreakKind {
    /// Both edges on one chromosome, which stays one chromosome
    Reversal,
    /// Both edges on one chromosome, which splits in two
    Fission,
    /// The edges on two chromosomes, which join into one
    Fusion,
}

impl TwoBreakKind {
    pub fn between(before: &Genome, after: &Genome) -> Self {
        match after.chromosome_count().cmp(&before.chromosome_count()) {
            std::cmp::Ordering::Greater => TwoBreakKind::Fission,
            std::cmp::Ordering::Less => TwoBreakKind::Fusion,
            std::cmp::Ordering::Equal => TwoBreakKind::Reversal,
        }
    }
}

impl fmt::Display for TwoBreakKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TwoBreakKind::Reversal => "reversal",
            TwoBreakKind::Fission => "fission",
            TwoBreakKind::Fusion => "fusion",
        };
        write!(f, "{}", s)
    }
}

/// 2-break on an edge set, in place. Edges are matched in either orientation;
/// missing edges are skipped.
///
/// ```
/// use indexmap::IndexSet;
/// use rearr::libs::rearrange::{rewrite_edges, TwoBreak};
///
/// let mut edges: IndexSet<(usize, usize)> =
///     [(2, 4), (3, 8), (7, 5), (6, 1)].into_iter().collect();
/// rewrite_edges(&mut edges, &TwoBreak::new(1, 6, 3, 8));
/// assert_eq!(
///     edges.into_iter().collect::<Vec<_>>(),
///     vec![(2, 4), (7, 5), (1, 3), (6, 8)]
/// );
/// ```
pub fn rewrite_edges(edges: &mut IndexSet<Edge>, two_break: &TwoBreak) {
    for (a, b) in two_break.removed() {
        if !edges.shift_remove(&(a, b)) {
            edges.shift_remove(&(b, a));
        }
    }
    for edge in two_break.added() {
        edges.insert(edge);
    }
}

/// 2-break on a genome.
///
/// ```
/// use rearr::libs::genome::Genome;
/// use rearr::libs::rearrange::{apply_to_genome, TwoBreak};
///
/// let genome = Genome::new(vec![vec![1, -2, -4, 3]]);
/// let result = apply_to_genome(&genome, &TwoBreak::new(1, 6, 3, 8));
/// assert_eq!(result, Genome::new(vec![vec![1, -2], vec![3, -4]]));
/// ```
pub fn apply_to_genome(genome: &Genome, two_break: &TwoBreak) -> Genome {
    let mut edges = colored_edges(genome);
    rewrite_edges(&mut edges, two_break);
    genome_from_edges(&edges)
}

/// Rebuilds the chromosomes of a genome from its colored edges.
///
/// Nodes are grouped into chromosomes through the colored edges and the
/// links between the two ends of each block. Every chromosome is then read by
/// walking its cycle, alternating block links and colored edges.
///
/// Chromosomes come out in canonical form, ordered by their first block.
pub fn genome_from_edges(edges: &IndexSet<Edge>) -> Genome {
    let mut uf = genome_graph_components(edges);

    let mut adjacency_of: IndexMap<Node, IndexMap<Node, Node>> = IndexMap::new();
    for &(a, b) in edges {
        let adjacency = adjacency_of.entry(uf.find(a)).or_default();
        adjacency.insert(a, b);
        adjacency.insert(b, a);
    }

    let mut chromosomes: Vec<Chromosome> = adjacency_of
        .values()
        .map(|adjacency| canonical_chromosome(&walk_chromosome(adjacency)))
        .collect();
    sort_chromosomes(&mut chromosomes);

    Genome::new(chromosomes)
}

// Reads one chromosome cycle from the colored-edge adjacency of its nodes
fn walk_chromosome(adjacency: &IndexMap<Node, Node>) -> Chromosome {
    let Some((&start, _)) = adjacency.first() else {
        return Vec::new();
    };

    let mut nodes: Vec<Node> = Vec::with_capacity(adjacency.len());
    let mut current = start;
    while nodes.len() < adjacency.len() {
        let partner = block_partner(current);
        nodes.push(current);
        nodes.push(partner);
        match adjacency.get(&partner) {
            Some(&next) => current = next,
            None => break,
        }
    }

    nodes_to_chromosome(&nodes)
}
