//! Relationship normalization engine.
//!
//! This module provides:
//! - Extraction of directed relationship records from a model graph
//! - Inverse-pair deduplication so each logical relationship appears once
//! - Allow/deny/between filtering
//! - Deterministic ordering of the surviving records

mod dedupe;
mod filter;

pub use dedupe::dedupe;
pub use filter::RelationFilter;

use crate::model::{ModelGraph, RelationKind};
use anyhow::{anyhow, Result};

/// Relationship cardinality between two models
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    OneToOne,
    OneToMany,
    ManyToOne,
    ManyToMany,
}

impl Cardinality {
    /// Mermaid erDiagram connector notation
    pub fn as_mermaid(self) -> &'static str {
        match self {
            Cardinality::ManyToMany => "}o--o{",
            Cardinality::OneToOne => "|o--o|",
            Cardinality::ManyToOne => "}o--o|",
            Cardinality::OneToMany => "|o--o{",
        }
    }
}

impl From<RelationKind> for Cardinality {
    fn from(kind: RelationKind) -> Self {
        match kind {
            RelationKind::BelongsToOne => Cardinality::ManyToOne,
            RelationKind::HasOne => Cardinality::OneToOne,
            RelationKind::HasMany => Cardinality::OneToMany,
            RelationKind::ManyToMany => Cardinality::ManyToMany,
            RelationKind::HasOneThrough => Cardinality::ManyToOne,
        }
    }
}

/// A directed relationship record between two models.
///
/// Records are immutable once extracted; every downstream stage produces a
/// new sequence rather than mutating records in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// Name of the owning model
    pub from: String,
    /// Name of the related model
    pub to: String,
    /// Cardinality of the relationship
    pub cardinality: Cardinality,
    /// The relation's declared identifier, used only for labeling
    pub name: String,
}

/// Extract one relationship record per declared relation, in model graph
/// iteration order.
///
/// Fails fast on a relation kind tag outside the supported vocabulary,
/// naming the offending model and relation.
pub fn extract(graph: &ModelGraph, scope: Option<&str>) -> Result<Vec<Relationship>> {
    let mut records = Vec::new();

    for (model_name, model) in graph.scoped(scope) {
        for (rel_name, def) in &model.relations {
            let kind: RelationKind = def.kind.parse().map_err(|e: String| {
                anyhow!("{} (relation '{}' on model '{}')", e, rel_name, model_name)
            })?;

            records.push(Relationship {
                from: model_name.clone(),
                to: def.model.clone(),
                cardinality: kind.into(),
                name: rel_name.clone(),
            });
        }
    }

    Ok(records)
}

/// Sort records by `(from, to)`, case-sensitive.
///
/// The sort is stable, so two distinct relations between the same pair of
/// models keep their relative input order.
pub fn sorted(mut records: Vec<Relationship>) -> Vec<Relationship> {
    records.sort_by(|a, b| a.from.cmp(&b.from).then_with(|| a.to.cmp(&b.to)));
    records
}
