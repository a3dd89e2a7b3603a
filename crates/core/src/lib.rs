//! Core library for linetools
//!
//! This crate implements the **Functional Core** of linetools: the text
//! transformations behind each editor palette command. The `linetools` binary is
//! the Imperative Shell that reads a document, picks the range to replace, and
//! writes the result back.
//!
//! # Functional Core Principles
//!
//! - **Pure functions**: the output depends only on the input text and on
//!   configuration fixed when the transformation is built
//! - **No side effects**: no I/O, no shared state
//! - **Never fails on text**: malformed input degrades to an empty string or is
//!   passed through; only configuration can be rejected ([`ConfigError`])
//!
//! # Module Organization
//!
//! - [`text`]: the shared sanitizer and line splitting helpers
//! - [`order`]: Order-and-Clean, sorting sanitized lines
//! - [`dedupe`]: Remove-Duplicates, order-preserving
//! - [`delimited`]: joining lines with commas and splitting comma-separated text
//! - [`sql`]: SQL `LIKE` clause generation per dialect
//! - [`transform`]: the [`Transform`] trait and the [`Transformation`] strategy enum
//!
//! # Example Usage
//!
//! ```rust
//! use linetools_core::{Conjunction, Dialect, SqlLike, Transform};
//!
//! let sql = SqlLike::new("fruit", Dialect::MySql, Conjunction::Or).unwrap();
//!
//! assert_eq!(
//!     sql.transform("banana\napple"),
//!     "`fruit` LIKE '%banana%' OR\n`fruit` LIKE '%apple%'"
//! );
//! ```

pub mod dedupe;
pub mod delimited;
pub mod error;
pub mod order;
pub mod sql;
pub mod text;
pub mod transform;

pub use dedupe::RemoveDuplicates;
pub use delimited::{CommaSeparatedToLines, ToCommaSeparated, ToQuotedCommaSeparated};
pub use error::ConfigError;
pub use order::{Direction, OrderAndClean};
pub use sql::{Conjunction, Dialect, SqlLike};
pub use transform::{PaletteCommand, Transform, Transformation, PALETTE};
