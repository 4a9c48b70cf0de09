use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
    process,
};

use clap::Parser;
use tomlette::convert;

/// tomlette converts constant-definition scripts read from standard input
/// into TOML documents.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path of the TOML file to write. The document is printed to stdout
    /// when no path is given.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    let mut source = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut source) {
        eprintln!("Failed to read from standard input: {e}");
        process::exit(1);
    }

    let toml = match convert(&source) {
        Ok(toml) => toml,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        },
    };

    if let Some(path) = args.output {
        if let Err(e) = fs::write(&path, toml) {
            eprintln!("Failed to write the output file '{}': {e}", path.display());
            process::exit(1);
        }
    } else {
        println!("{toml}");
    }
}
