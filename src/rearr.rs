extern crate clap;
use clap::*;

mod cmd_rearr;

fn main() -> anyhow::Result<()> {
    let app = Command::new("rearr")
        .version(crate_version!())
        .author(crate_authors!())
        .about("`rearr` - Genome rearrangements by 2-breaks")
        .propagate_version(true)
        .arg_required_else_help(true)
        .color(ColorChoice::Auto)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log every 2-break to stderr; RUST_LOG takes precedence"),
        )
        .subcommand(cmd_rearr::distance::make_subcommand())
        .subcommand(cmd_rearr::sort::make_subcommand())
        .subcommand(cmd_rearr::edges::make_subcommand())
        .subcommand(cmd_rearr::two_break::make_subcommand())
        .after_help(
            r###"Subcommands:

* distance  - 2-break distance between two genomes
* sort      - Shortest 2-break scenario, step by step
* edges     - Colored edges of genomes
* two-break - Apply one 2-break to a genome

Genome files hold one genome per line, e.g. `(+1 -3 -2)(+4 +5)`.
The first genome is the source, the second the target.

"###,
        );

    let matches = app.get_matches();

    let default_level = if matches.get_flag("verbose") {
        "debug"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();

    // Check which subcomamnd the user ran...
    match matches.subcommand() {
        Some(("distance", sub_matches)) => cmd_rearr::distance::execute(sub_matches),
        Some(("sort", sub_matches)) => cmd_rearr::sort::execute(sub_matches),
        Some(("edges", sub_matches)) => cmd_rearr::edges::execute(sub_matches),
        Some(("two-break", sub_matches)) => cmd_rearr::two_break::execute(sub_matches),
        _ => unreachable!(),
    }?;

    Ok(())
}
