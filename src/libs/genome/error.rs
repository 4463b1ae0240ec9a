use super::MAX_BLOCK;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenomeError {
    /// Error while reading the text form of a genome
    ParseError {
        /// A human-readable message explaining the error
        message: String,
        /// The line number (1-based)
        line: usize,
        /// The column number (1-based)
        column: usize,
        /// The snippet of input where the error occurred
        snippet: String,
    },
    /// A chromosome without blocks, by 0-based chromosome index
    EmptyChromosome(usize),
    /// Block ids start at 1
    ZeroBlock,
    /// The same block id occurs twice in one genome
    DuplicateBlock(u64),
    /// A block id whose nodes `2i-1, 2i` do not fit in a node id
    BlockTooLarge(u64),
    /// Source and target genomes are not built from the same blocks
    BlockSetMismatch {
        only_in_source: Vec<u64>,
        only_in_target: Vec<u64>,
    },
}

impl fmt::Display for GenomeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenomeError::ParseError {
                message,
                line,
                column,
                snippet,
            } => {
                write!(
                    f,
                    "Parse error at line {}, column {}: {}\nSnippet: \"{}\"",
                    line, column, message, snippet
                )
            }
            GenomeError::EmptyChromosome(idx) => {
                write!(f, "Chromosome {} has no blocks", idx + 1)
            }
            GenomeError::ZeroBlock => write!(f, "Block ids must be non-zero"),
            GenomeError::DuplicateBlock(id) => {
                write!(f, "Block {} occurs more than once in a genome", id)
            }
            GenomeError::BlockTooLarge(id) => {
                write!(f, "Block {} is too large, the largest id is {}", id, MAX_BLOCK)
            }
            GenomeError::BlockSetMismatch {
                only_in_source,
                only_in_target,
            } => {
                write!(
                    f,
                    "Genomes differ in block sets: only in source {:?}, only in target {:?}",
                    only_in_source, only_in_target
                )
            }
        }
    }
}

impl std::error::Error for GenomeError {}
