//! Reading the document, running a transformation and writing the result

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use linetools_core::Transformation;
use serde::Serialize;

use crate::prelude::{eprintln, println, *};
use crate::selection::{apply, Edit, LineRange, Selection};

#[derive(Debug, Clone, clap::Args)]
pub struct InputOptions {
    /// File to read the document from (defaults to stdin)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Only transform these lines (1-based, inclusive), e.g. 3:7
    #[arg(short, long, value_name = "START:END")]
    pub lines: Option<LineRange>,

    /// Write the result back to --file instead of stdout
    #[arg(short, long, requires = "file")]
    pub in_place: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl InputOptions {
    pub fn selection(&self) -> Selection {
        self.lines.map_or(Selection::Whole, Selection::Lines)
    }
}

#[derive(Debug, Serialize)]
pub struct TransformOutput<'a> {
    pub command: &'a str,
    pub selection: String,
    pub replacement: &'a str,
    pub document: &'a str,
}

/// Read the document from `file`, or from stdin when no file is given
pub fn read_document(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut document = String::new();
            std::io::stdin()
                .read_to_string(&mut document)
                .context("Failed to read document from stdin")?;
            Ok(document)
        }
    }
}

/// Apply `transformation` to `document` as selected by `options`
pub fn transform_document(
    transformation: &Transformation,
    document: &str,
    options: &InputOptions,
) -> Result<Edit> {
    let selection = options.selection();

    log::debug!(
        "Running {} on {} ({} bytes)",
        transformation.id(),
        selection,
        document.len()
    );

    let edit = apply(document, selection, transformation)?;

    log::debug!(
        "{} produced {} bytes",
        transformation.id(),
        edit.replacement.len()
    );

    Ok(edit)
}

pub fn format_json(transformation: &Transformation, edit: &Edit, selection: Selection) -> Result<String> {
    let output = TransformOutput {
        command: transformation.id(),
        selection: selection.to_string(),
        replacement: &edit.replacement,
        document: &edit.document,
    };

    serde_json::to_string_pretty(&output).context("Failed to serialize output")
}

/// Host entry point shared by every palette command
pub fn run(transformation: Transformation, options: InputOptions, global: crate::Global) -> Result<()> {
    let document = read_document(options.file.as_deref())?;
    let edit = transform_document(&transformation, &document, &options)?;

    if global.verbose {
        eprintln!(
            "{}: {} -> {} bytes",
            transformation.id(),
            document.len(),
            edit.document.len()
        );
    }

    if options.in_place {
        let path = options
            .file
            .as_deref()
            .ok_or_else(|| eyre!("--in-place requires --file"))?;
        fs::write(path, &edit.document)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        log::info!("Updated {}", path.display());
    }

    if options.json {
        println!("{}", format_json(&transformation, &edit, options.selection())?);
    } else if !options.in_place {
        print!("{}", edit.document);
    }

    Ok(())
}
