//! CLI argument definitions.

use clap::Parser;

/// Marquee - resolve a movie title and write a text record of its details
#[derive(Parser, Debug)]
#[command(name = "marquee")]
#[command(about = "Resolve a movie title and write a text record of its details", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Movie title; multiple words are joined with spaces
    #[arg(value_name = "TITLE")]
    pub title: Vec<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// The title given on the command line, if any.
    pub fn title(&self) -> Option<String> {
        let joined = self.title.join(" ");
        let trimmed = joined.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }
}
