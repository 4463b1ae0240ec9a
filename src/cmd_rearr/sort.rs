use clap::*;
use rearr::libs::rearrange::{validate_pair, Rearrangement};
use std::io::Write;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("sort")
        .about("Shortest 2-break scenario from one genome to another")
        .after_help(
            r###"
Sorts the first genome of the input into the second one by 2-breaks. Every
2-break turns a non-trivial cycle of the breakpoint graph into a trivial cycle
plus the remainder, so the number of steps is the 2-break distance.

Output:
  Step 1: [+1 +2 +3 +4 +5 +6]
  Step 2: [+1 -3 -2 +4 +5 +6]
  ...
  2-Break Distance: 3

Intermediate genomes are written in canonical form: each chromosome starts
with its smallest block, read on the strand where that block is positive, and
chromosomes are ordered by their first block.

Examples:
  rearr sort tests/genome/sample.txt

  # Append the kind of each 2-break: reversal, fission or fusion
  rearr sort tests/genome/sample.txt --events

"###,
        )
        .arg(
            Arg::new("infile")
                .required_unless_present("doc")
                .num_args(1)
                .index(1)
                .help("Input filename with two genomes. [stdin] for standard input"),
        )
        .arg(
            Arg::new("events")
                .long("events")
                .action(ArgAction::SetTrue)
                .help("Append the kind of each 2-break"),
        )
        .arg(
            Arg::new("doc")
                .long("doc")
                .action(ArgAction::SetTrue)
                .help("Print the full documentation (markdown)"),
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
    if args.get_flag("doc") {
        println!("{}", include_str!("../../docs/sort.md"));
        return Ok(());
    }
    let infile = args.get_one::<String>("infile").unwrap();
    let is_events = args.get_flag("events");
    let mut writer = rearr::writer(args.get_one::<String>("outfile").unwrap())?;

    //----------------------------
    // Ops
    //----------------------------
    let (source, target) = rearr::read_genome_pair(infile)?;
    validate_pair(&source, &target)?;

    let scenario = Rearrangement::new(&source, &target).run();
    log::info!(
        "{} blocks sorted with {} 2-breaks",
        source.block_count(),
        scenario.distance()
    );

    //----------------------------
    // Output
    //----------------------------
    let kinds = scenario.kinds();
    for (i, genome) in scenario.steps.iter().enumerate() {
        writer.write_fmt(format_args!("Step {}: {}", i + 1, genome.to_bracketed()))?;
        if is_events && i > 0 {
            writer.write_fmt(format_args!("\t{}", kinds[i - 1]))?;
        }
        writer.write_all(b"\n")?;
    }
    writer.write_fmt(format_args!("2-Break Distance: {}\n", scenario.distance()))?;

    Ok(())
}
