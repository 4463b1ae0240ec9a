//! Genome graph encoding.
//!
//! Block `i` owns two nodes, its tail `2i-1` and its head `2i`. A chromosome
//! read left to right becomes a node cycle: `+i` contributes `2i-1, 2i` and
//! `-i` contributes `2i, 2i-1`. Colored edges join the last node of a block to
//! the first node of the next one, wrapping around the circular chromosome.

use crate::libs::genome::{Block, Chromosome, Genome};
use indexmap::IndexSet;

/// A block end.
pub type Node = usize;

/// An adjacency between two block ends. Treated as unordered.
pub type Edge = (Node, Node);

/// ```
/// use rearr::libs::rearrange::chromosome_to_nodes;
///
/// assert_eq!(chromosome_to_nodes(&[1, -2, -3, 4]), vec![1, 2, 4, 3, 6, 5, 7, 8]);
/// ```
pub fn chromosome_to_nodes(chromosome: &[Block]) -> Vec<Node> {
    let mut nodes = Vec::with_capacity(2 * chromosome.len());
    for &block in chromosome {
        let id = block.unsigned_abs() as Node;
        if block > 0 {
            nodes.push(2 * id - 1);
            nodes.push(2 * id);
        } else {
            nodes.push(2 * id);
            nodes.push(2 * id - 1);
        }
    }
    nodes
}

/// ```
/// use rearr::libs::rearrange::nodes_to_chromosome;
///
/// assert_eq!(nodes_to_chromosome(&[1, 2, 4, 3, 6, 5, 7, 8]), vec![1, -2, -3, 4]);
/// ```
pub fn nodes_to_chromosome(nodes: &[Node]) -> Chromosome {
    nodes
        .chunks_exact(2)
        .map(|pair| {
            if pair[0] < pair[1] {
                (pair[1] / 2) as Block
            } else {
                -((pair[0] / 2) as Block)
            }
        })
        .collect()
}

/// The other end of the same block.
pub fn block_partner(node: Node) -> Node {
    if node % 2 == 1 {
        node + 1
    } else {
        node - 1
    }
}

/// One edge per block, in chromosome order: `(head of block k, tail of block
/// k+1)`, the last block joining back to the first.
///
/// ```
/// use rearr::libs::genome::Genome;
/// use rearr::libs::rearrange::colored_edges;
///
/// let genome = Genome::new(vec![vec![1, -2, -3], vec![4, 5, -6]]);
/// let edges: Vec<_> = colored_edges(&genome).into_iter().collect();
/// assert_eq!(edges, vec![(2, 4), (3, 6), (5, 1), (8, 9), (10, 12), (11, 7)]);
/// ```
pub fn colored_edges(genome: &Genome) -> IndexSet<Edge> {
    let mut edges = IndexSet::with_capacity(genome.block_count());
    for chromosome in &genome.chromosomes {
        let nodes = chromosome_to_nodes(chromosome);
        let n = nodes.len();
        for j in 0..chromosome.len() {
            edges.insert((nodes[2 * j + 1], nodes[(2 * j + 2) % n]));
        }
    }
    edges
}

/// Membership of an unordered edge.
pub fn contains_edge(edges: &IndexSet<Edge>, a: Node, b: Node) -> bool {
    edges.contains(&(a, b)) || edges.contains(&(b, a))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let chromosomes: Vec<Chromosome> = vec![
            vec![1],
            vec![-1],
            vec![1, 2, 3, 4],
            vec![-3, 1, -2, 5, -4],
            vec![7, -12, 9],
        ];
        for chrom in chromosomes {
            assert_eq!(nodes_to_chromosome(&chromosome_to_nodes(&chrom)), chrom);
        }
    }

    #[test]
    fn test_block_partner() {
        assert_eq!(block_partner(1), 2);
        assert_eq!(block_partner(2), 1);
        assert_eq!(block_partner(7), 8);
        assert_eq!(block_partner(8), 7);
    }

    #[test]
    fn test_colored_edges_single_block() {
        // a one-block chromosome joins its head to its own tail
        let edges = colored_edges(&Genome::new(vec![vec![-1]]));
        assert_eq!(edges.into_iter().collect::<Vec<_>>(), vec![(1, 2)]);
    }

    #[test]
    fn test_colored_edges_count() {
        let genome = Genome::new(vec![vec![1, 2, 3, 4], vec![5, 6, 7, 8]]);
        let edges = colored_edges(&genome);
        assert_eq!(edges.len(), genome.block_count());
        assert!(contains_edge(&edges, 8, 1));
        assert!(contains_edge(&edges, 1, 8));
        assert!(!contains_edge(&edges, 8, 9));
    }
}
