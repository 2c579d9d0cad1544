//! Command-line interface for vitae
//! This binary converts CV outline trees (JSON or YAML exports of the authoring tool) into LaTeX.
//!
//! Usage:
//!   vitae convert `<path>` [--output `<file>`] [--locale `<auto|en|el>`]
//!                 [--config `<file>`] [--stamp]
//!   vitae schema [--output `<file>`]     - Export the standalone style file
//!   vitae roles `<path>`                 - Print the role each section resolves to

mod commands;

use clap::{Arg, ArgAction, Command};
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("vitae")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Transcode CV outline trees into LaTeX")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("convert")
                .about("Convert a JSON or YAML outline into a LaTeX document")
                .arg(
                    Arg::new("path")
                        .help("Path to the outline (.json, .yaml or .yml)")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Write the document here instead of stdout"),
                )
                .arg(
                    Arg::new("locale")
                        .long("locale")
                        .short('l')
                        .help("Force the locale instead of detecting it")
                        .value_parser(["auto", "en", "el"]),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("Configuration file layered over the defaults"),
                )
                .arg(
                    Arg::new("stamp")
                        .long("stamp")
                        .help("Add a generation date comment to the preamble")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("schema")
                .about("Export the standalone style file")
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Write the style here instead of stdout"),
                ),
        )
        .subcommand(
            Command::new("roles")
                .about("Print the role each section resolves to")
                .arg(
                    Arg::new("path")
                        .help("Path to the outline (.json, .yaml or .yml)")
                        .required(true)
                        .index(1),
                ),
        )
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let matches = cli().get_matches();

    let result = match matches.subcommand() {
        Some(("convert", convert_matches)) => commands::convert(commands::ConvertArgs {
            path: convert_matches
                .get_one::<String>("path")
                .expect("path is required")
                .clone(),
            output: convert_matches.get_one::<String>("output").cloned(),
            locale: convert_matches.get_one::<String>("locale").cloned(),
            config: convert_matches.get_one::<String>("config").cloned(),
            stamp: convert_matches.get_flag("stamp"),
        }),
        Some(("schema", schema_matches)) => {
            commands::schema(schema_matches.get_one::<String>("output").map(String::as_str))
        }
        Some(("roles", roles_matches)) => commands::roles(
            roles_matches
                .get_one::<String>("path")
                .expect("path is required"),
        ),
        _ => unreachable!(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
