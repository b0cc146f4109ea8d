//! Diagram command implementation.

use crate::diagram::{edit_url, to_mermaid};
use crate::model::ModelGraph;
use crate::relation::{self, RelationFilter};
use ahash::AHashSet;
use anyhow::{bail, Result};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Run the diagram command
pub fn run(
    file: PathBuf,
    scope: Option<String>,
    model: Vec<String>,
    no_model: Vec<String>,
    between: Option<String>,
    link: bool,
    output: Option<PathBuf>,
) -> Result<()> {
    // Argument errors surface before any model inspection
    let allow = flatten_names(&model);
    let deny = flatten_names(&no_model);
    let between = between.as_deref().map(parse_between).transpose()?;

    if !file.exists() {
        bail!("input file does not exist: {}", file.display());
    }

    let graph = ModelGraph::from_file(&file)?;
    let records = relation::extract(&graph, scope.as_deref())?;
    let records = relation::dedupe(&records);

    let filter = RelationFilter {
        allow,
        deny,
        between,
    };
    let records = relation::sorted(filter.apply(&records));
    let document = to_mermaid(&records);

    if link {
        println!("{}", edit_url(&document)?);
    } else if let Some(ref out_path) = output {
        let mut out = File::create(out_path)?;
        out.write_all(document.as_bytes())?;
        eprintln!("Diagram written to: {}", out_path.display());
    } else {
        println!("{document}");
    }

    eprintln!(
        "\nERD: {} models, {} relationships",
        graph.model_count(scope.as_deref()),
        records.len()
    );

    Ok(())
}

/// Flatten repeatable comma-joined name arguments into a set
fn flatten_names(values: &[String]) -> Option<AHashSet<String>> {
    if values.is_empty() {
        return None;
    }

    Some(
        values
            .iter()
            .flat_map(|v| v.split(','))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
    )
}

/// Parse `--between A,B` into an unordered endpoint pair
fn parse_between(raw: &str) -> Result<(String, String)> {
    let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
    match parts.as_slice() {
        [a, b] if !a.is_empty() && !b.is_empty() => Ok((a.to_string(), b.to_string())),
        _ => bail!("--between expects exactly two comma-separated model names, got '{raw}'"),
    }
}
