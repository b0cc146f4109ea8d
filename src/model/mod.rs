//! Model definitions module.
//!
//! This module provides:
//! - Data models for the definitions file (model descriptors and their relations)
//! - Loading from JSON or YAML, chosen by file extension
//! - The closed vocabulary of relation kind tags
//! - Scope-based model selection

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Relation kind tag as declared in a definitions file.
///
/// This is the closed set of tags the engine understands; anything else in
/// a definitions file aborts extraction rather than producing a
/// relationship with an undefined cardinality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationKind {
    BelongsToOne,
    HasOne,
    HasMany,
    ManyToMany,
    HasOneThrough,
}

impl FromStr for RelationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BelongsToOne" => Ok(RelationKind::BelongsToOne),
            "HasOne" => Ok(RelationKind::HasOne),
            "HasMany" => Ok(RelationKind::HasMany),
            "ManyToMany" => Ok(RelationKind::ManyToMany),
            "HasOneThrough" => Ok(RelationKind::HasOneThrough),
            _ => Err(format!(
                "unsupported relation kind: {}. Valid kinds: BelongsToOne, HasOne, HasMany, ManyToMany, HasOneThrough",
                s
            )),
        }
    }
}

/// A single relation declared on a model
#[derive(Debug, Clone, Deserialize)]
pub struct RelationDef {
    /// Relation kind tag (see [`RelationKind`])
    pub kind: String,
    /// Name of the related model
    pub model: String,
}

/// A model descriptor: optional scope plus its declared relations
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelDef {
    /// Optional scope (plugin) grouping this model belongs to
    #[serde(default)]
    pub scope: Option<String>,
    /// Declared relations, keyed by relation identifier
    #[serde(default)]
    pub relations: BTreeMap<String, RelationDef>,
}

/// The full model graph: every model in the definitions file.
///
/// Ordered maps keep iteration deterministic, so repeated runs over the
/// same file always walk models and relations in the same order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct ModelGraph {
    /// Models keyed by model name
    pub models: BTreeMap<String, ModelDef>,
}

impl ModelGraph {
    /// Load a model graph from a JSON or YAML definitions file.
    ///
    /// `.yaml`/`.yml` extensions select the YAML parser; everything else
    /// is treated as JSON.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        let graph: ModelGraph = match ext.as_deref() {
            Some("yaml") | Some("yml") => serde_yaml_ng::from_str(&contents)
                .with_context(|| format!("failed to parse {}", path.display()))?,
            _ => serde_json::from_str(&contents)
                .with_context(|| format!("failed to parse {}", path.display()))?,
        };

        graph.validate()?;
        Ok(graph)
    }

    /// Check that every relation points at a model defined in this graph
    pub fn validate(&self) -> Result<()> {
        for (model_name, model) in &self.models {
            for (rel_name, rel) in &model.relations {
                if !self.models.contains_key(&rel.model) {
                    bail!(
                        "relation '{}' on model '{}' references unknown model '{}'",
                        rel_name,
                        model_name,
                        rel.model
                    );
                }
            }
        }
        Ok(())
    }

    /// Iterate models, restricted to a scope when a selector is given.
    ///
    /// Without a selector every model participates. Relations may still
    /// point at models outside the selected scope.
    pub fn scoped<'a>(
        &'a self,
        scope: Option<&'a str>,
    ) -> impl Iterator<Item = (&'a String, &'a ModelDef)> + 'a {
        self.models.iter().filter(move |(_, model)| match scope {
            Some(s) => model.scope.as_deref() == Some(s),
            None => true,
        })
    }

    /// Number of models visible under the given scope selector
    pub fn model_count(&self, scope: Option<&str>) -> usize {
        self.scoped(scope).count()
    }

    /// Check if the graph has no models at all
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
