use std::fs::File;
use std::io::{BufReader, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use nestle_mql::cli::Cli;
use nestle_mql::corpus::frequency::assign_frequency;
use nestle_mql::corpus::inflection::InflectionTables;
use nestle_mql::morphology::codes;
use nestle_mql::{mql, read_corpus};

fn main() -> std::io::Result<()> {
    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    codes::verify_tables()?;

    let input = File::open(&cli.text_path)
        .with_context(|| format!("cannot open {}", cli.text_path.display()))?;
    let mut corpus = read_corpus(BufReader::new(input), cli.lenient)?;
    info!("read {} words", corpus.words.len());

    assign_frequency(&mut corpus.words);

    let tables = InflectionTables::load(cli.verbs.as_deref(), cli.nouns.as_deref())?;
    tables.apply(&mut corpus.words, cli.lenient)?;

    match &cli.output_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create {}", path.display()))?;
            let mut output = BufWriter::new(file);
            mql::write_script(&mut output, &corpus)?;
            output.flush()?;
            println!("MQL output written to {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut output = BufWriter::new(stdout.lock());
            mql::write_script(&mut output, &corpus)?;
            output.flush()?;
        }
    }

    Ok(())
}
