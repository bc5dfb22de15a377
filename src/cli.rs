use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Tab-separated Bible text file
    pub text_path: PathBuf,

    /// Output MQL file path (stdout when omitted)
    #[arg(short)]
    pub output_file: Option<PathBuf>,

    /// Verb inflection spreadsheet (CSV)
    #[arg(long)]
    pub verbs: Option<PathBuf>,

    /// Noun inflection spreadsheet (CSV)
    #[arg(long)]
    pub nouns: Option<PathBuf>,

    /// Log undecodable words and missing lexemes instead of failing
    #[arg(long)]
    pub lenient: bool,
}
