use super::{Block, Chromosome, Genome, GenomeError};
use nom::{
    branch::alt,
    character::complete::{char, digit1, multispace0, multispace1, one_of},
    combinator::{all_consuming, map, map_res, opt, recognize, value},
    error::ParseError,
    multi::{many1, separated_list0, separated_list1},
    sequence::delimited,
    IResult, Offset, Parser,
};

// Wraps a parser and ignores surrounding whitespace
fn ws<'a, F, O, E>(inner: F) -> impl Parser<&'a str, Output = O, Error = E>
where
    F: Parser<&'a str, Output = O, Error = E>,
    E: ParseError<&'a str>,
{
    delimited(multispace0, inner, multispace0)
}

// A signed block: `+3`, `-3` or `3`
fn parse_block(input: &str) -> IResult<&str, Block> {
    map_res(recognize((opt(one_of("+-")), digit1)), |s: &str| {
        s.parse::<Block>()
    })
    .parse(input)
}

// Blocks are separated by a comma, by whitespace, or by both
fn parse_block_sep(input: &str) -> IResult<&str, ()> {
    alt((value((), ws(char(','))), value((), multispace1))).parse(input)
}

fn parse_blocks(input: &str) -> IResult<&str, Chromosome> {
    separated_list0(parse_block_sep, parse_block).parse(input)
}

// `(+1 -2 +3)` or `[+1, -2, +3]`
fn parse_chromosome(input: &str) -> IResult<&str, Chromosome> {
    alt((
        delimited(ws(char('(')), parse_blocks, ws(char(')'))),
        delimited(ws(char('[')), parse_blocks, ws(char(']'))),
    ))
    .parse(input)
}

// A line with no delimiters is a single chromosome
fn parse_bare_chromosome(input: &str) -> IResult<&str, Vec<Chromosome>> {
    map(
        ws(separated_list1(parse_block_sep, parse_block)),
        |chrom| vec![chrom],
    )
    .parse(input)
}

/// Parses one genome.
///
/// Chromosomes are enclosed in `(...)` or `[...]`; blocks inside them are
/// separated by whitespace and/or commas, and a leading `+` is optional.
/// Without any brackets the whole input is taken as one chromosome.
///
/// ```
/// use rearr::libs::genome::parse_genome;
///
/// let genome = parse_genome("(+1 -3 -2)(+4 +5)").unwrap();
/// assert_eq!(genome.chromosomes, vec![vec![1, -3, -2], vec![4, 5]]);
///
/// let genome = parse_genome("[1, -3, -2] [4, 5]").unwrap();
/// assert_eq!(genome.chromosomes, vec![vec![1, -3, -2], vec![4, 5]]);
///
/// let genome = parse_genome("1 2 -3").unwrap();
/// assert_eq!(genome.chromosomes, vec![vec![1, 2, -3]]);
/// ```
pub fn parse_genome(input: &str) -> Result<Genome, GenomeError> {
    let mut parser = all_consuming(alt((
        many1(ws(parse_chromosome)),
        parse_bare_chromosome,
    )));

    match parser.parse(input) {
        Ok((_, chromosomes)) => Ok(Genome::new(chromosomes)),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            Err(make_genome_error(input, e.input))
        }
        Err(nom::Err::Incomplete(_)) => Err(GenomeError::ParseError {
            message: "Incomplete input".to_string(),
            line: 1,
            column: 0,
            snippet: "".to_string(),
        }),
    }
}

/// Parses one genome per line. Empty lines and lines starting with `#` are
/// skipped.
pub fn parse_genomes(text: &str) -> Result<Vec<Genome>, GenomeError> {
    let mut genomes = vec![];
    for (idx, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let genome = parse_genome(line).map_err(|e| match e {
            GenomeError::ParseError {
                message,
                column,
                snippet,
                ..
            } => GenomeError::ParseError {
                message,
                line: idx + 1,
                column,
                snippet,
            },
            other => other,
        })?;
        genomes.push(genome);
    }
    Ok(genomes)
}

fn make_genome_error(input: &str, remaining: &str) -> GenomeError {
    let offset = input.offset(remaining);

    GenomeError::ParseError {
        message: "expected signed blocks, optionally grouped by (...) or [...]".to_string(),
        line: 1,
        column: offset + 1,
        snippet: remaining.chars().take(50).collect(),
    }
}
