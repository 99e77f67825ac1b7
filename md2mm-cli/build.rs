use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of build_cli() in src/main.rs
// Build scripts can't access src/ modules, so the definition is duplicated here
fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("md2mm")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert a Markdown file into a Freeplane mind map")
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
        );

    generate_to(Bash, &mut cmd, "md2mm", &outdir)?;
    generate_to(Zsh, &mut cmd, "md2mm", &outdir)?;
    generate_to(Fish, &mut cmd, "md2mm", &outdir)?;

    Ok(())
}
