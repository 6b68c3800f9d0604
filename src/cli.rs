//! Command-line argument definitions

use clap::{Arg, ArgAction, Command as ClapCommand};

/// Build the clap command for the `rectkit` binary
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("rectkit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Test points against axis-aligned n-dimensional regions")
        .arg(
            Arg::new("corner-a")
                .long("corner-a")
                .help("First corner of the region (x,y,...)")
                .value_name("POINT")
                .allow_hyphen_values(true)
                .required(false),
        )
        .arg(
            Arg::new("corner-b")
                .long("corner-b")
                .help("Opposite corner of the region (x,y,...)")
                .value_name("POINT")
                .allow_hyphen_values(true)
                .required(false),
        )
        .arg(
            Arg::new("region")
                .short('r')
                .long("region")
                .help("Named region from --config, or a built-in preset")
                .value_name("NAME")
                .conflicts_with_all(["corner-a", "corner-b"])
                .required(false),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML file with [regions.NAME] tables")
                .value_name("FILE")
                .requires("region")
                .required(false),
        )
        .arg(
            Arg::new("point")
                .short('p')
                .long("point")
                .help("Point to test (x,y,...); may be repeated")
                .value_name("POINT")
                .allow_hyphen_values(true)
                .action(ArgAction::Append)
                .required(false),
        )
        .arg(
            Arg::new("points-file")
                .long("points-file")
                .help("File with one point per line to classify")
                .value_name("FILE")
                .conflicts_with("point")
                .required(false),
        )
        .arg(
            Arg::new("inside-only")
                .long("inside-only")
                .help("Only print points inside the region")
                .requires("points-file")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Hide the progress bar")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-presets")
                .long("list-presets")
                .help("List built-in region presets")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Write log records to this file")
                .value_name("FILE")
                .required(false),
        )
}
