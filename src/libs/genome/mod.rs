//! Signed, multi-chromosomal genomes.
//!
//! A genome is a set of circular chromosomes, each an ordered sequence of
//! signed synteny blocks. Block ids are positive integers; the sign gives the
//! strand the block is read on.

pub mod error;
pub mod parser;

pub use error::GenomeError;
pub use parser::{parse_genome, parse_genomes};

use itertools::Itertools;
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::str::FromStr;

/// A signed synteny block.
pub type Block = i64;

/// A circular chromosome.
pub type Chromosome = Vec<Block>;

/// Largest block id whose head node `2i` still fits in a `usize`.
pub const MAX_BLOCK: u64 = ((usize::MAX - 1) / 2) as u64;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Genome {
    pub chromosomes: Vec<Chromosome>,
}

impl Genome {
    pub fn new(chromosomes: Vec<Chromosome>) -> Self {
        Self { chromosomes }
    }

    pub fn block_count(&self) -> usize {
        self.chromosomes.iter().map(|c| c.len()).sum()
    }

    pub fn chromosome_count(&self) -> usize {
        self.chromosomes.len()
    }

    /// Sorted, unsigned block ids.
    pub fn block_ids(&self) -> BTreeSet<u64> {
        self.chromosomes
            .iter()
            .flatten()
            .map(|b| b.unsigned_abs())
            .collect()
    }

    /// Checks the structural rules of a genome: every chromosome holds at
    /// least one block, no block is `0` or above [`MAX_BLOCK`], and every
    /// block id is used once.
    ///
    /// ```
    /// use rearr::libs::genome::{Genome, GenomeError};
    ///
    /// let genome = Genome::new(vec![vec![1, -2], vec![3]]);
    /// assert!(genome.validate().is_ok());
    ///
    /// let genome = Genome::new(vec![vec![1, -2], vec![2]]);
    /// assert_eq!(genome.validate(), Err(GenomeError::DuplicateBlock(2)));
    /// ```
    pub fn validate(&self) -> Result<(), GenomeError> {
        let mut seen = HashSet::with_capacity(self.block_count());
        for (idx, chrom) in self.chromosomes.iter().enumerate() {
            if chrom.is_empty() {
                return Err(GenomeError::EmptyChromosome(idx));
            }
            for &block in chrom {
                if block == 0 {
                    return Err(GenomeError::ZeroBlock);
                }
                if block.unsigned_abs() > MAX_BLOCK {
                    return Err(GenomeError::BlockTooLarge(block.unsigned_abs()));
                }
                if !seen.insert(block.unsigned_abs()) {
                    return Err(GenomeError::DuplicateBlock(block.unsigned_abs()));
                }
            }
        }
        Ok(())
    }

    /// Every chromosome in canonical orientation and rotation, chromosomes
    /// ordered by the absolute value of their first block.
    pub fn canonical(&self) -> Genome {
        let mut chromosomes: Vec<Chromosome> = self
            .chromosomes
            .iter()
            .map(|c| canonical_chromosome(c))
            .collect();
        sort_chromosomes(&mut chromosomes);
        Genome { chromosomes }
    }

    /// Same chromosomes, disregarding chromosome order, rotation and reading
    /// direction.
    pub fn is_equivalent(&self, other: &Genome) -> bool {
        self.canonical() == other.canonical()
    }

    /// `[+1 -3 -2][+4 +5]`
    pub fn to_bracketed(&self) -> String {
        self.chromosomes
            .iter()
            .map(|c| format!("[{}]", c.iter().map(|&b| format_block(b)).join(" ")))
            .join("")
    }
}

impl From<Vec<Vec<Block>>> for Genome {
    fn from(chromosomes: Vec<Vec<Block>>) -> Self {
        Genome::new(chromosomes)
    }
}

/// `(+1 -3 -2)(+4 +5)`
impl fmt::Display for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chrom in &self.chromosomes {
            write!(f, "({})", chrom.iter().map(|&b| format_block(b)).join(" "))?;
        }
        Ok(())
    }
}

impl FromStr for Genome {
    type Err = GenomeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_genome(s)
    }
}

/// ```
/// assert_eq!(rearr::libs::genome::format_block(3), "+3");
/// assert_eq!(rearr::libs::genome::format_block(-3), "-3");
/// ```
pub fn format_block(block: Block) -> String {
    if block > 0 {
        format!("+{}", block)
    } else {
        format!("{}", block)
    }
}

/// Rotates a circular chromosome so that its smallest block comes first, read
/// on the strand where that block is positive.
///
/// ```
/// use rearr::libs::genome::canonical_chromosome;
///
/// assert_eq!(canonical_chromosome(&[3, 1, 2]), vec![1, 2, 3]);
/// // read in the opposite direction
/// assert_eq!(canonical_chromosome(&[2, 3, -1]), vec![1, -3, -2]);
/// ```
pub fn canonical_chromosome(chrom: &[Block]) -> Chromosome {
    let Some((pos, &smallest)) = chrom.iter().enumerate().min_by_key(|(_, b)| b.unsigned_abs())
    else {
        return Vec::new();
    };

    let (mut oriented, start): (Chromosome, usize) = if smallest > 0 {
        (chrom.to_vec(), pos)
    } else {
        (chrom.iter().rev().map(|b| -b).collect(), chrom.len() - 1 - pos)
    };
    oriented.rotate_left(start);
    oriented
}

/// Orders chromosomes by the absolute value of their first block.
pub fn sort_chromosomes(chromosomes: &mut [Chromosome]) {
    chromosomes.sort_by_key(|c| c.first().map(|b| b.unsigned_abs()));
}

/// Checks that both genomes are valid and share one block set.
pub fn check_same_blocks(source: &Genome, target: &Genome) -> Result<(), GenomeError> {
    source.validate()?;
    target.validate()?;

    let ids_source = source.block_ids();
    let ids_target = target.block_ids();
    if ids_source != ids_target {
        return Err(GenomeError::BlockSetMismatch {
            only_in_source: ids_source.difference(&ids_target).copied().collect(),
            only_in_target: ids_target.difference(&ids_source).copied().collect(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_bracketed() {
        let genome = Genome::new(vec![vec![1, -3, -2], vec![4, 5]]);
        assert_eq!(genome.to_string(), "(+1 -3 -2)(+4 +5)");
        assert_eq!(genome.to_bracketed(), "[+1 -3 -2][+4 +5]");
        assert_eq!(genome.block_count(), 5);
        assert_eq!(genome.chromosome_count(), 2);
    }

    #[test]
    fn test_validate() {
        assert_eq!(
            Genome::new(vec![vec![1], vec![]]).validate(),
            Err(GenomeError::EmptyChromosome(1))
        );
        assert_eq!(
            Genome::new(vec![vec![1, 0]]).validate(),
            Err(GenomeError::ZeroBlock)
        );
        assert_eq!(
            Genome::new(vec![vec![1, 2], vec![-1]]).validate(),
            Err(GenomeError::DuplicateBlock(1))
        );
    }

    #[test]
    fn test_validate_block_range() {
        assert_eq!(
            Genome::new(vec![vec![i64::MIN]]).validate(),
            Err(GenomeError::BlockTooLarge(1 << 63))
        );
        assert_eq!(
            Genome::new(vec![vec![1, -(MAX_BLOCK as Block) - 1]]).validate(),
            Err(GenomeError::BlockTooLarge(MAX_BLOCK + 1))
        );

        let largest = Genome::new(vec![vec![MAX_BLOCK as Block, -1]]);
        assert!(largest.validate().is_ok());
        let nodes = crate::libs::rearrange::chromosome_to_nodes(&largest.chromosomes[0]);
        assert_eq!(nodes[1], usize::MAX - 1);
    }

    #[test]
    fn test_canonical_chromosome() {
        assert_eq!(canonical_chromosome(&[]), Vec::<Block>::new());
        assert_eq!(canonical_chromosome(&[-1]), vec![1]);
        assert_eq!(canonical_chromosome(&[5, 4, -1, 2, 3]), vec![1, -4, -5, -3, -2]);
        assert_eq!(canonical_chromosome(&[2, 3, 1]), vec![1, 2, 3]);
    }

    #[test]
    fn test_equivalent() {
        let q = Genome::new(vec![vec![1, -3, -2], vec![4, 5], vec![6, 7, 8]]);
        // output of a rearrangement run: other rotations, other reading directions
        let last = Genome::new(vec![vec![2, 3, -1], vec![4, 5], vec![8, 6, 7]]);
        assert!(q.is_equivalent(&last));
        assert_eq!(last.canonical(), q);

        let other = Genome::new(vec![vec![1, 3, -2], vec![4, 5], vec![6, 7, 8]]);
        assert!(!q.is_equivalent(&other));
    }

    #[test]
    fn test_check_same_blocks() {
        let p = Genome::new(vec![vec![1, 2, 3]]);
        let q = Genome::new(vec![vec![1], vec![-2, 4]]);
        match check_same_blocks(&p, &q) {
            Err(GenomeError::BlockSetMismatch {
                only_in_source,
                only_in_target,
            }) => {
                assert_eq!(only_in_source, vec![3]);
                assert_eq!(only_in_target, vec![4]);
            }
            other => panic!("unexpected result {:?}", other),
        }

        let q = Genome::new(vec![vec![3], vec![-2, 1]]);
        assert!(check_same_blocks(&p, &q).is_ok());
    }
}
