//! Step-by-step sorting of a source genome into a target genome.

use super::breakpoint::{locate_non_trivial_cycle, BreakpointGraph};
use super::two_break::{apply_to_genome, rewrite_edges, TwoBreak, TwoBreakKind};
use crate::libs::genome::{check_same_blocks, Genome, GenomeError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Running,
    Done,
}

/// Sorts a source genome into a target genome one 2-break at a time.
///
/// Owns the breakpoint graph: red edges follow the current genome, blue
/// edges stay those of the target. Each accepted 2-break raises the cycle
/// count by one, so the run ends after `blocks - cycles` steps.
#[derive(Debug, Clone)]
pub struct Rearrangement {
    graph: BreakpointGraph,
    blocks: usize,
    genome: Genome,
    steps: Vec<Genome>,
    breaks: Vec<TwoBreak>,
    state: State,
}

impl Rearrangement {
    pub fn new(source: &Genome, target: &Genome) -> Self {
        let graph = BreakpointGraph::new(source, target);
        let blocks = source.block_count();

        Self {
            graph,
            blocks,
            genome: source.clone(),
            steps: vec![source.clone()],
            breaks: vec![],
            state: State::Running,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn genome(&self) -> &Genome {
        &self.genome
    }

    pub fn graph(&self) -> &BreakpointGraph {
        &self.graph
    }

    /// Applies the next 2-break, or moves to [`State::Done`] when every
    /// breakpoint-graph cycle is trivial.
    pub fn step(&mut self) -> State {
        if self.state == State::Done {
            return State::Done;
        }

        let edges = self.graph.edges();
        let located = locate_non_trivial_cycle(
            &edges,
            &self.graph.red,
            &self.graph.blue,
            self.blocks,
        );

        match located {
            None => {
                log::debug!("all cycles trivial after {} 2-breaks", self.breaks.len());
                self.state = State::Done;
            }
            Some(two_break) => {
                rewrite_edges(&mut self.graph.red, &two_break);
                self.genome = apply_to_genome(&self.genome, &two_break);
                log::debug!(
                    "2-break #{}: {} => {}",
                    self.breaks.len() + 1,
                    two_break,
                    self.genome
                );
                self.steps.push(self.genome.clone());
                self.breaks.push(two_break);
            }
        }

        self.state
    }

    pub fn run(mut self) -> Scenario {
        while self.step() == State::Running {}

        Scenario {
            steps: self.steps,
            breaks: self.breaks,
        }
    }
}

/// Every genome from source to target, and the 2-break between each pair of
/// neighbours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub steps: Vec<Genome>,
    pub breaks: Vec<TwoBreak>,
}

impl Scenario {
    pub fn distance(&self) -> usize {
        self.steps.len() - 1
    }

    pub fn kinds(&self) -> Vec<TwoBreakKind> {
        self.steps
            .windows(2)
            .map(|pair| TwoBreakKind::between(&pair[0], &pair[1]))
            .collect()
    }
}

/// Shortest 2-break scenario from `source` to `target`.
///
/// Both genomes must consist of the same blocks, each used once; see
/// [`validate_pair`].
///
/// ```
/// use rearr::libs::genome::Genome;
/// use rearr::libs::rearrange::two_break_distance_and_sort;
///
/// let p = Genome::new(vec![vec![1, 2, 3, 4, 5, 6]]);
/// let q = Genome::new(vec![vec![1, -3, -6, -5], vec![2, -4]]);
/// let (distance, steps) = two_break_distance_and_sort(&p, &q);
/// assert_eq!(distance, 3);
/// assert_eq!(steps.len(), 4);
/// assert!(steps[3].is_equivalent(&q));
/// ```
pub fn two_break_distance_and_sort(source: &Genome, target: &Genome) -> (usize, Vec<Genome>) {
    let scenario = Rearrangement::new(source, target).run();
    (scenario.distance(), scenario.steps)
}

/// Blocks minus breakpoint-graph cycles, without building the scenario.
///
/// ```
/// use rearr::libs::genome::Genome;
/// use rearr::libs::rearrange::two_break_distance;
///
/// let p = Genome::new(vec![vec![1, 2, 3, 4, 5, 6]]);
/// let q = Genome::new(vec![vec![1, -3, -6, -5], vec![2, -4]]);
/// assert_eq!(two_break_distance(&p, &q), 3);
/// ```
pub fn two_break_distance(source: &Genome, target: &Genome) -> usize {
    BreakpointGraph::new(source, target).distance()
}

/// Checks the input rules of [`two_break_distance_and_sort`].
pub fn validate_pair(source: &Genome, target: &Genome) -> Result<(), GenomeError> {
    check_same_blocks(source, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::rearrange::codec::{colored_edges, Edge};
    use indexmap::IndexSet;
    use std::collections::BTreeSet;

    fn unordered(edges: &IndexSet<Edge>) -> BTreeSet<Edge> {
        edges.iter().map(|&(a, b)| (a.min(b), a.max(b))).collect()
    }

    #[test]
    fn test_two_chromosomes_into_three() {
        let p = Genome::new(vec![vec![1, 2, 3, 4], vec![5, 6, 7, 8]]);
        let q = Genome::new(vec![vec![1, -3, -2], vec![4, 5], vec![6, 7, 8]]);

        let (distance, steps) = two_break_distance_and_sort(&p, &q);
        assert_eq!(distance, 4);
        assert_eq!(steps.len(), 5);
        assert_eq!(steps[0], p);
        assert_eq!(steps[4].canonical(), q);
        assert_eq!(distance, two_break_distance(&p, &q));
    }

    #[test]
    fn test_same_genome() {
        let p = Genome::new(vec![vec![1, -2], vec![3]]);
        let (distance, steps) = two_break_distance_and_sort(&p, &p);
        assert_eq!(distance, 0);
        assert_eq!(steps, vec![p]);
    }

    #[test]
    fn test_single_reversal() {
        let p = Genome::new(vec![vec![1, 2]]);
        let q = Genome::new(vec![vec![1, -2]]);
        let scenario = Rearrangement::new(&p, &q).run();
        assert_eq!(scenario.distance(), 1);
        assert_eq!(scenario.breaks.len(), 1);
        assert_eq!(scenario.steps[1], q);
        assert_eq!(scenario.kinds(), vec![TwoBreakKind::Reversal]);
    }

    #[test]
    fn test_fissions() {
        let p = Genome::new(vec![vec![1, 2, 3, 4, 5, 6]]);
        let q = Genome::new(vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
        let scenario = Rearrangement::new(&p, &q).run();
        assert_eq!(scenario.distance(), 2);
        assert_eq!(
            scenario.kinds(),
            vec![TwoBreakKind::Fission, TwoBreakKind::Fission]
        );
        assert!(scenario.steps[2].is_equivalent(&q));
    }

    #[test]
    fn test_step_by_step() {
        let p = Genome::new(vec![vec![1, 2, 3, 4, 5, 6]]);
        let q = Genome::new(vec![vec![1, -3, -6, -5], vec![2, -4]]);
        let mut rearrangement = Rearrangement::new(&p, &q);

        let mut cycles = rearrangement.graph().cycle_count();
        while rearrangement.step() == State::Running {
            let next = rearrangement.graph().cycle_count();
            assert_eq!(next, cycles + 1);
            cycles = next;

            // the red edges always describe the current genome
            assert_eq!(
                unordered(&rearrangement.graph().red),
                unordered(&colored_edges(rearrangement.genome()))
            );
        }
        assert_eq!(rearrangement.state(), State::Done);
        assert_eq!(rearrangement.step(), State::Done);
        assert_eq!(cycles, p.block_count());
        assert!(rearrangement.genome().is_equivalent(&q));
    }

    #[test]
    fn test_validate_pair() {
        let p = Genome::new(vec![vec![1, 2, 3]]);
        assert!(validate_pair(&p, &Genome::new(vec![vec![3], vec![-1, 2]])).is_ok());
        assert!(validate_pair(&p, &Genome::new(vec![vec![1, 2]])).is_err());
        assert!(validate_pair(&p, &Genome::new(vec![vec![1, 2, 2]])).is_err());
    }
}
