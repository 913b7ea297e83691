use clap::{Arg, ArgAction, Command};

fn subcommand_stats() -> Command {
    Command::new("stats")
        .version("0.1")
        .about("Summary statistics over qc-passing poly(A) estimates of the control datasets.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .action(ArgAction::Count)
                .help("Debug mode"),
        )
        .arg(
            Arg::new("polyas_dir")
                .value_name("DIR")
                .required(true)
                .help("Directory of poly(A) estimate TSVs (10x.polya.tsv, ..., 100x.polya.tsv)."),
        )
}

fn subcommand_segmentation() -> Command {
    Command::new("segmentation")
        .version("0.1")
        .about("Plot a random qc-passing read's raw signal with its segmentation.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .action(ArgAction::Count)
                .help("Debug mode"),
        )
        .arg(
            Arg::new("polya_tsv")
                .value_name("TSV")
                .required(true)
                .help("Poly(A) estimate TSV with segmentation boundaries."),
        )
        .arg(
            Arg::new("readdb")
                .value_name("INDEX")
                .required(true)
                .help("Two-column index mapping read name to raw-signal file."),
        )
        .arg(
            Arg::new("out")
                .long("out")
                .short('o')
                .value_name("PATH")
                .help("Output image path. [./segmentation.<READ_ID>.png]"),
        )
}

pub fn polya_parser() -> Command {
    Command::new("polya")
        .version("0.1.0")
        .about("Post-processing utilities for poly(A) tail-length estimates.")
        .arg_required_else_help(true)
        .subcommand_required(true)
        .subcommand(subcommand_stats())
        .subcommand(subcommand_segmentation())
}
