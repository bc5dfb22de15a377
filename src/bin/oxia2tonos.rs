//! Line filter converting between the oxia and tonos accent
//! conventions. The corpus text uses oxia codepoints; most downstream
//! Greek tooling expects tonos.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use nestle_mql::text;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input file (stdin when omitted)
    input_file: Option<PathBuf>,

    /// Output file path (stdout when omitted)
    #[arg(short)]
    output_file: Option<PathBuf>,

    /// Convert tonos accents back to oxia instead
    #[arg(long)]
    reverse: bool,
}

fn main() -> std::io::Result<()> {
    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let input: Box<dyn BufRead> = match &cli.input_file {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("cannot open {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut output: Box<dyn Write> = match &cli.output_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout())),
    };

    for line in input.lines() {
        let line = line.context("cannot read input line")?;
        let converted = if cli.reverse {
            text::tonos_to_oxia(&line)
        } else {
            text::oxia_to_tonos(&line)
        };
        writeln!(output, "{converted}")?;
    }
    output.flush()?;

    Ok(())
}
