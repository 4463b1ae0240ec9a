use clap::*;
use rearr::libs::rearrange::{validate_pair, BreakpointGraph};
use std::io::Write;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("distance")
        .about("2-break distance between two genomes")
        .after_help(
            r###"
The distance is the number of blocks minus the number of alternating cycles
in the breakpoint graph of the two genomes. No scenario is built.

Examples:
  # Rosalind style
  rearr distance tests/genome/sample.txt

  # Blocks and cycles as well, tab separated
  rearr distance tests/genome/sample.txt --detail

"###,
        )
        .arg(
            Arg::new("infile")
                .required(true)
                .num_args(1)
                .index(1)
                .help("Input filename with two genomes. [stdin] for standard input"),
        )
        .arg(
            Arg::new("detail")
                .long("detail")
                .action(ArgAction::SetTrue)
                .help("Print blocks, cycles and distance"),
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
    let is_detail = args.get_flag("detail");
    let mut writer = rearr::writer(args.get_one::<String>("outfile").unwrap())?;

    //----------------------------
    // Ops
    //----------------------------
    let (source, target) = rearr::read_genome_pair(infile)?;
    validate_pair(&source, &target)?;

    let graph = BreakpointGraph::new(&source, &target);

    //----------------------------
    // Output
    //----------------------------
    if is_detail {
        writer.write_fmt(format_args!(
            "{}\t{}\t{}\n",
            graph.block_count(),
            graph.cycle_count(),
            graph.distance()
        ))?;
    } else {
        writer.write_fmt(format_args!("{}\n", graph.distance()))?;
    }

    Ok(())
}
