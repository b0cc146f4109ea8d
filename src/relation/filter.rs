//! Allow/deny/between filtering of relationship records.

use super::Relationship;
use ahash::AHashSet;

/// Optional filters applied to the deduplicated record sequence.
///
/// Each filter is a no-op when absent; active filters are conjunctive.
/// Filtering never mutates records, it only selects a subsequence.
#[derive(Debug, Default)]
pub struct RelationFilter {
    /// Keep records where `from` or `to` is a member
    pub allow: Option<AHashSet<String>>,
    /// Drop records where `from` or `to` is a member
    pub deny: Option<AHashSet<String>>,
    /// Keep records whose endpoints are both in this pair (order-insensitive)
    pub between: Option<(String, String)>,
}

impl RelationFilter {
    /// Does this record pass every active filter?
    pub fn matches(&self, record: &Relationship) -> bool {
        if let Some((a, b)) = &self.between {
            let endpoint = |name: &str| name == a || name == b;
            if !endpoint(&record.from) || !endpoint(&record.to) {
                return false;
            }
        }

        if let Some(allow) = &self.allow {
            if !allow.contains(&record.from) && !allow.contains(&record.to) {
                return false;
            }
        }

        if let Some(deny) = &self.deny {
            if deny.contains(&record.from) || deny.contains(&record.to) {
                return false;
            }
        }

        true
    }

    /// Select the subsequence of records passing every active filter
    pub fn apply(&self, records: &[Relationship]) -> Vec<Relationship> {
        records
            .iter()
            .filter(|r| self.matches(r))
            .cloned()
            .collect()
    }
}
