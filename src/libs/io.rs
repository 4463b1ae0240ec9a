use crate::libs::genome::{parse_genomes, Genome};
use std::io::{BufRead, BufReader, BufWriter, Read, Write};

/// ```
/// use std::io::BufRead;
/// let reader = rearr::reader("tests/genome/sample.txt").unwrap();
/// let lines: Vec<_> = reader.lines().collect();
/// assert!(lines.len() >= 2);
/// ```
pub fn reader(input: &str) -> std::io::Result<Box<dyn BufRead>> {
    let reader: Box<dyn BufRead> = if input == "stdin" {
        Box::new(BufReader::new(std::io::stdin()))
    } else {
        let path = std::path::Path::new(input);
        let file = std::fs::File::open(path).map_err(|why| {
            std::io::Error::new(
                why.kind(),
                format!("could not open {}: {}", path.display(), why),
            )
        })?;

        if path.extension() == Some(std::ffi::OsStr::new("gz")) {
            Box::new(BufReader::new(flate2::read::MultiGzDecoder::new(file)))
        } else {
            Box::new(BufReader::new(file))
        }
    };

    Ok(reader)
}

pub fn writer(output: &str) -> std::io::Result<Box<dyn Write>> {
    let writer: Box<dyn Write> = if output == "stdout" {
        Box::new(BufWriter::new(std::io::stdout()))
    } else {
        Box::new(BufWriter::new(std::fs::File::create(output)?))
    };

    Ok(writer)
}

/// Reads every genome of a file, one per line.
///
/// ```
/// let genomes = rearr::read_genomes("tests/genome/sample.txt").unwrap();
/// assert_eq!(genomes.len(), 2);
/// assert_eq!(genomes[0].block_count(), genomes[1].block_count());
/// ```
pub fn read_genomes(input: &str) -> anyhow::Result<Vec<Genome>> {
    let mut text = String::new();
    reader(input)?.read_to_string(&mut text)?;
    let genomes = parse_genomes(&text)?;
    log::debug!("read {} genomes from {}", genomes.len(), input);

    Ok(genomes)
}

/// Reads the source and the target genome: the first two genomes of a file.
pub fn read_genome_pair(input: &str) -> anyhow::Result<(Genome, Genome)> {
    let mut genomes = read_genomes(input)?.into_iter();
    match (genomes.next(), genomes.next()) {
        (Some(source), Some(target)) => Ok((source, target)),
        _ => anyhow::bail!("{} should contain two genomes, source and target", input),
    }
}
