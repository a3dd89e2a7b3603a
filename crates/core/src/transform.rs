//! The common transformation capability and the strategy enum selecting a variant

use serde::Serialize;

use crate::dedupe::RemoveDuplicates;
use crate::delimited::{CommaSeparatedToLines, ToCommaSeparated, ToQuotedCommaSeparated};
use crate::order::OrderAndClean;
use crate::sql::SqlLike;

/// A pure text-to-text transformation
///
/// Implementations must be deterministic and free of I/O: the output depends only
/// on `input` and on configuration fixed at construction.
pub trait Transform {
    fn transform(&self, input: &str) -> String;
}

/// One of the six palette transformations, each carrying its own configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transformation {
    OrderAndClean(OrderAndClean),
    RemoveDuplicates(RemoveDuplicates),
    ToCommaSeparated(ToCommaSeparated),
    ToQuotedCommaSeparated(ToQuotedCommaSeparated),
    CommaSeparatedToLines(CommaSeparatedToLines),
    SqlLike(SqlLike),
}

impl Transformation {
    /// Stable command identifier, as registered in the host palette
    pub fn id(&self) -> &'static str {
        match self {
            Transformation::OrderAndClean(_) => "order-and-clean",
            Transformation::RemoveDuplicates(_) => "remove-duplicates",
            Transformation::ToCommaSeparated(_) => "to-comma-separated",
            Transformation::ToQuotedCommaSeparated(_) => "to-quoted-comma-separated",
            Transformation::CommaSeparatedToLines(_) => "comma-separated-to-lines",
            Transformation::SqlLike(_) => "sql-like",
        }
    }
}

impl Transform for Transformation {
    fn transform(&self, input: &str) -> String {
        match self {
            Transformation::OrderAndClean(t) => t.transform(input),
            Transformation::RemoveDuplicates(t) => t.transform(input),
            Transformation::ToCommaSeparated(t) => t.transform(input),
            Transformation::ToQuotedCommaSeparated(t) => t.transform(input),
            Transformation::CommaSeparatedToLines(t) => t.transform(input),
            Transformation::SqlLike(t) => t.transform(input),
        }
    }
}

/// A palette entry: the command identifier and the title shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaletteCommand {
    pub id: &'static str,
    pub title: &'static str,
}

/// Every command the host registers, in palette order
pub const PALETTE: &[PaletteCommand] = &[
    PaletteCommand {
        id: "order-and-clean",
        title: "Order and Clean Lines",
    },
    PaletteCommand {
        id: "remove-duplicates",
        title: "Remove Duplicate Lines",
    },
    PaletteCommand {
        id: "to-comma-separated",
        title: "Lines to Comma Separated",
    },
    PaletteCommand {
        id: "to-quoted-comma-separated",
        title: "Lines to Quoted Comma Separated",
    },
    PaletteCommand {
        id: "comma-separated-to-lines",
        title: "Comma Separated to Lines",
    },
    PaletteCommand {
        id: "sql-like",
        title: "Lines to SQL LIKE Clauses",
    },
];
