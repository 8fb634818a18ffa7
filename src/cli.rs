//! Command-line interface for the tutorial.

use clap::Parser;
use simple_omok::Language;

/// Simple Omok - learn five in a row in the terminal
#[derive(Parser, Debug)]
#[command(name = "simple_omok")]
#[command(about = "Interactive Omok (five in a row) tutorial", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Initial display language
    #[arg(short, long, value_enum, default_value_t = Language::En)]
    pub language: Language,
}
