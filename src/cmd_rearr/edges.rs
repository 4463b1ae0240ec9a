use clap::*;
use itertools::Itertools;
use rearr::libs::rearrange::colored_edges;
use std::io::Write;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("edges")
        .about("Colored edges of genomes")
        .after_help(
            r###"
Block i has a tail node 2i-1 and a head node 2i. A colored edge joins the
last node of a block to the first node of the next block on the same circular
chromosome. Each genome of the input gives one output line.

Examples:
  echo "(+1 -2 -3)(+4 +5 -6)" | rearr edges stdin
  # (2, 4), (3, 6), (5, 1), (8, 9), (10, 12), (11, 7)

"###,
        )
        .arg(
            Arg::new("infile")
                .required(true)
                .num_args(1)
                .index(1)
                .help("Input filename with genomes. [stdin] for standard input"),
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
    let infile = args.get_one::<String>("infile").unwrap();
    let mut writer = rearr::writer(args.get_one::<String>("outfile").unwrap())?;

    for genome in rearr::read_genomes(infile)? {
        genome.validate()?;
        let line = colored_edges(&genome)
            .iter()
            .map(|(a, b)| format!("({}, {})", a, b))
            .join(", ");
        writer.write_fmt(format_args!("{}\n", line))?;
    }

    Ok(())
}
