use clap::*;
use itertools::Itertools;
use rearr::libs::rearrange::{apply_to_genome, colored_edges, contains_edge, TwoBreak};
use std::io::Write;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("two-break")
        .about("Apply one 2-break to a genome")
        .after_help(
            r###"
Replaces the colored edges (i0, i1) and (j0, j1) of the first genome in the
input by (i0, j0) and (i1, j1), then prints the resulting genome. The four
nodes must be distinct, and both edges must be present in the genome.

Examples:
  echo "(+1 -2 -4 +3)" | rearr two-break stdin 1 6 3 8
  # (+1 -2)(+3 -4)

"###,
        )
        .arg(
            Arg::new("infile")
                .required(true)
                .num_args(1)
                .index(1)
                .help("Input filename with a genome. [stdin] for standard input"),
        )
        .arg(
            Arg::new("nodes")
                .required(true)
                .num_args(4)
                .index(2)
                .value_parser(value_parser!(usize))
                .help("The four nodes i0 i1 j0 j1"),
        )
        .arg(
            Arg::new("outfile")
                .long("outfile")
                .short('o')
                .num_args(1)
                .default_value("stdout")
                .help("Output filename. [stdout] for screen"),
        )
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    //----------------------------
    // Args
    //----------------------------
    let infile = args.get_one::<String>("infile").unwrap();
    let nodes: Vec<usize> = args.get_many::<usize>("nodes").unwrap().copied().collect();
    let mut writer = rearr::writer(args.get_one::<String>("outfile").unwrap())?;

    //----------------------------
    // Ops
    //----------------------------
    let genome = match rearr::read_genomes(infile)?.into_iter().next() {
        Some(genome) => genome,
        None => anyhow::bail!("{} contains no genome", infile),
    };
    genome.validate()?;

    if !nodes.iter().all_unique() {
        anyhow::bail!(
            "The nodes {:?} of a 2-break should be four distinct block ends",
            nodes
        );
    }
    let two_break = TwoBreak::new(nodes[0], nodes[1], nodes[2], nodes[3]);
    let edges = colored_edges(&genome);
    for (a, b) in two_break.removed() {
        if !contains_edge(&edges, a, b) {
            anyhow::bail!("({}, {}) is not a colored edge of {}", a, b, genome);
        }
    }

    let result = apply_to_genome(&genome, &two_break);
    log::debug!("{} => {}", two_break, result);

    //----------------------------
    // Output
    //----------------------------
    writer.write_fmt(format_args!("{}\n", result))?;

    Ok(())
}
