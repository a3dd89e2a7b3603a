//! Palette command arguments and their mapping onto core transformations

use linetools_core::{
    CommaSeparatedToLines, Conjunction, Dialect, Direction, OrderAndClean, RemoveDuplicates,
    SqlLike, ToCommaSeparated, ToQuotedCommaSeparated, Transformation,
};

use crate::host::InputOptions;
use crate::prelude::*;
use crate::prompt::value_or_prompt;

#[derive(Debug, clap::Args)]
pub struct OrderOptions {
    /// Sort direction: ASC or DESC
    #[arg(short, long, default_value = "ASC")]
    pub direction: Direction,

    #[clap(flatten)]
    pub input: InputOptions,
}

impl OrderOptions {
    pub fn transformation(&self) -> Transformation {
        Transformation::OrderAndClean(OrderAndClean::new(self.direction))
    }
}

#[derive(Debug, clap::Args)]
pub struct DedupeOptions {
    #[clap(flatten)]
    pub input: InputOptions,
}

impl DedupeOptions {
    pub fn transformation(&self) -> Transformation {
        Transformation::RemoveDuplicates(RemoveDuplicates)
    }
}

#[derive(Debug, clap::Args)]
pub struct JoinOptions {
    /// Wrap each item in single quotes
    #[arg(short, long)]
    pub quoted: bool,

    #[clap(flatten)]
    pub input: InputOptions,
}

impl JoinOptions {
    pub fn transformation(&self) -> Transformation {
        if self.quoted {
            Transformation::ToQuotedCommaSeparated(ToQuotedCommaSeparated)
        } else {
            Transformation::ToCommaSeparated(ToCommaSeparated)
        }
    }
}

#[derive(Debug, clap::Args)]
pub struct SplitOptions {
    #[clap(flatten)]
    pub input: InputOptions,
}

impl SplitOptions {
    pub fn transformation(&self) -> Transformation {
        Transformation::CommaSeparatedToLines(CommaSeparatedToLines)
    }
}

#[derive(Debug, clap::Args)]
pub struct SqlLikeOptions {
    /// Column to match against
    #[arg(short, long, env = "LINETOOLS_SQL_COLUMN")]
    pub column: Option<String>,

    /// SQL dialect: mysql, sqlserver or other
    #[arg(short = 'D', long, env = "LINETOOLS_SQL_DIALECT")]
    pub dialect: Option<Dialect>,

    /// Conjunction between clauses: AND or OR
    #[arg(short = 'j', long, env = "LINETOOLS_SQL_CONJUNCTION")]
    pub conjunction: Option<Conjunction>,

    #[clap(flatten)]
    pub input: InputOptions,
}

impl SqlLikeOptions {
    /// Build the generator, prompting for any parameter that was not given
    pub fn transformation(&self) -> Result<Transformation> {
        let column = value_or_prompt(self.column.clone(), "Column name")?;

        let dialect = match self.dialect {
            Some(dialect) => dialect,
            None => value_or_prompt(None, "Dialect (mysql, sqlserver, other)")?.parse()?,
        };

        let conjunction = match self.conjunction {
            Some(conjunction) => conjunction,
            None => value_or_prompt(None, "Conjunction (AND, OR)")?.parse()?,
        };

        let sql = SqlLike::new(column, dialect, conjunction)?;
        log::debug!(
            "SQL LIKE on {} ({}, {})",
            sql.column(),
            sql.dialect(),
            sql.conjunction()
        );

        Ok(Transformation::SqlLike(sql))
    }
}
