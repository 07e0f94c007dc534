//! Writers that turn a dataset into a file
//!
//! The HTML page is the primary artifact. JSON and Graphviz DOT are offered
//! for feeding other tools.

mod dot;
mod html;
mod json;

use std::{fs, path::Path};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub use dot::render_dot;
pub use html::{HTML_TEMPLATE, render_html};
pub use json::render_json;

use crate::{Error, Result, dataset::Dataset};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Self-contained interactive page
    #[default]
    Html,
    /// Node and edge arrays
    Json,
    /// Graphviz digraph
    Dot,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Html => "html",
            ExportFormat::Json => "json",
            ExportFormat::Dot => "dot",
        }
    }

    /// Render the dataset in this format
    pub fn render(self, dataset: &Dataset) -> Result<String> {
        match self {
            ExportFormat::Html => render_html(dataset),
            ExportFormat::Json => render_json(dataset),
            ExportFormat::Dot => Ok(render_dot(dataset)),
        }
    }
}

/// Render the dataset and write it to `path` in one go.
///
/// Nothing is written when rendering fails.
pub fn write_dataset(dataset: &Dataset, format: ExportFormat, path: &Path) -> Result<()> {
    let contents = format.render(dataset)?;
    fs::write(path, contents).map_err(|source| Error::Io {
        operation: format!("write {} output to {}", format.extension(), path.display()),
        source,
    })?;
    log::info!("wrote {}", path.display());
    Ok(())
}
