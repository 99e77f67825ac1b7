// Command-line interface for md2mm
//
// Converts one Markdown file into a Freeplane mind map. The conversion itself lives in the md2mm
// crate; this binary only resolves paths, loads configuration, and reports errors.
//
// Usage:
//  md2mm <input>                      - Write result.mm next to <input>
//  md2mm <input> -o <file>            - Write the mind map to <file>
//  md2mm <input> --config <file>      - Layer a TOML config over the defaults
//
// Success is silent. Any failure prints a message on stderr and exits with status 1.

use clap::error::ErrorKind;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use md2mm::{convert, output_path_for, ConvertOptions};
use md2mm_config::{Loader, Md2mmConfig};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn build_cli() -> Command {
    Command::new("md2mm")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert a Markdown file into a Freeplane mind map")
        .long_about(
            "md2mm converts a Markdown document into a Freeplane (.mm) mind map.\n\n\
            Headings become branches, paragraphs and list items become leaves.\n\
            Plain text and single links become simple nodes, everything else is\n\
            kept as formatted (HTML) node content.\n\n\
            Examples:\n  \
            md2mm notes.md                  # Writes result.mm next to notes.md\n  \
            md2mm notes.md -o notes.mm      # Writes notes.mm\n  \
            md2mm notes.md --config my.toml # Use custom settings"
        )
        .arg(
            Arg::new("input")
                .help("Markdown file to convert")
                .required(true)
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_name("PATH")
                .help("Output file path (defaults to result.mm beside the input)")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to an md2mm.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log conversion details to stderr")
                .action(ArgAction::SetTrue),
        )
}

fn main() {
    let matches = build_cli()
        .try_get_matches()
        .unwrap_or_else(|e| match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                let _ = e.print();
                std::process::exit(1);
            }
        });

    init_logging(matches.get_flag("verbose"));

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    handle_convert_command(&matches, &config);
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Handle the conversion of a single input file
fn handle_convert_command(matches: &ArgMatches, config: &Md2mmConfig) {
    let input = matches
        .get_one::<String>("input")
        .expect("input is required");
    let output = resolve_output_path(
        input,
        matches.get_one::<String>("output").map(|s| s.as_str()),
        config,
    );

    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Please specify a markdown file: cannot read '{input}': {e}");
        std::process::exit(1);
    });

    let options = ConvertOptions::from(config);
    let map = convert(&source, &options).unwrap_or_else(|e| {
        eprintln!("Conversion error: {e}");
        std::process::exit(1);
    });

    fs::write(&output, map).unwrap_or_else(|e| {
        eprintln!("Error writing file '{}': {e}", output.display());
        std::process::exit(1);
    });

    info!(input = %input, output = %output.display(), "mind map written");
}

fn resolve_output_path(input: &str, explicit: Option<&str>, config: &Md2mmConfig) -> PathBuf {
    match explicit {
        Some(path) => PathBuf::from(path),
        None => output_path_for(input, &config.output.file_name),
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> Md2mmConfig {
    let loader = Loader::new().with_optional_file("md2mm.toml");
    let loader = if let Some(path) = explicit_path {
        debug!(path, "loading configuration file");
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}
