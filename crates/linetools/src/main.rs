use crate::prelude::*;
use clap::Parser;

mod commands;
mod error;
mod host;
mod list;
mod prelude;
mod prompt;
mod selection;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Editor palette commands for ordering, deduplicating and reshaping lines of text"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "LINETOOLS_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Sort lines, strip quotes and drop blank lines
    #[clap(name = "order")]
    Order(commands::OrderOptions),

    /// Remove duplicate lines, keeping the first occurrence
    #[clap(name = "dedupe")]
    Dedupe(commands::DedupeOptions),

    /// Join lines into a comma separated list
    #[clap(name = "join")]
    Join(commands::JoinOptions),

    /// Split a comma separated list into lines
    #[clap(name = "split")]
    Split(commands::SplitOptions),

    /// Turn lines into SQL LIKE clauses
    #[clap(name = "sql-like")]
    SqlLike(commands::SqlLikeOptions),

    /// List the available palette commands
    #[clap(name = "list")]
    List(list::ListOptions),
}

fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();
    log::debug!("{:?}", app.command);

    match app.command {
        SubCommands::Order(options) => host::run(options.transformation(), options.input, app.global),
        SubCommands::Dedupe(options) => host::run(options.transformation(), options.input, app.global),
        SubCommands::Join(options) => host::run(options.transformation(), options.input, app.global),
        SubCommands::Split(options) => host::run(options.transformation(), options.input, app.global),
        SubCommands::SqlLike(options) => options
            .transformation()
            .and_then(|transformation| host::run(transformation, options.input, app.global)),
        SubCommands::List(options) => list::run(options),
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
