use colored::Colorize;
use linetools_core::PALETTE;

use crate::prelude::{println, *};

#[derive(Debug, clap::Args)]
pub struct ListOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn format_palette_text() -> String {
    let width = PALETTE.iter().map(|c| c.id.len()).max().unwrap_or(0);

    PALETTE
        .iter()
        .map(|command| {
            let id = format!("{:<width$}", command.id);
            format!("{}  {}\n", id.bold(), command.title)
        })
        .collect()
}

pub fn format_palette_json() -> Result<String> {
    serde_json::to_string_pretty(PALETTE).context("Failed to serialize command palette")
}

pub fn run(options: ListOptions) -> Result<()> {
    if options.json {
        println!("{}", format_palette_json()?);
    } else {
        print!("{}", format_palette_text());
    }

    Ok(())
}
