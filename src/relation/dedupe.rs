//! Inverse-pair deduplication.
//!
//! Two records describe the same logical relationship from opposite ends
//! when their endpoints are swapped and their cardinalities line up: both
//! one-to-one, both many-to-many, or many-to-one against one-to-many. Only
//! one representative of each such pair should reach the diagram.

use super::{Cardinality, Relationship};

/// Drop the mirror side of every inverse pair.
///
/// Each record is checked against the full original sequence, not just the
/// records kept so far, because either side of a pair may appear first in
/// source order. A record never suppresses itself, so a lone
/// self-relationship (`from == to`) always survives.
///
/// The orientation rule keeps the one-to-many side of a mixed pair. For
/// symmetric cardinalities (one-to-one, many-to-many) the two sides
/// suppress each other, and with three or more mutually-matching records
/// (duplicate declarations in a malformed graph) every record that has a
/// partner is dropped. That literal behavior is intentional; see the
/// duplicate-declarations note in DESIGN.md.
pub fn dedupe(records: &[Relationship]) -> Vec<Relationship> {
    records
        .iter()
        .enumerate()
        .filter(|&(i, record)| {
            !records
                .iter()
                .enumerate()
                .any(|(j, other)| j != i && suppresses(other, record))
        })
        .map(|(_, record)| record.clone())
        .collect()
}

/// Does `other` suppress `record` as its inverse?
fn suppresses(other: &Relationship, record: &Relationship) -> bool {
    if record.from != other.to || record.to != other.from {
        return false;
    }

    match record.cardinality {
        Cardinality::OneToOne => other.cardinality == Cardinality::OneToOne,
        Cardinality::ManyToMany => other.cardinality == Cardinality::ManyToMany,
        Cardinality::ManyToOne => other.cardinality == Cardinality::OneToMany,
        Cardinality::OneToMany => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel(from: &str, to: &str, cardinality: Cardinality, name: &str) -> Relationship {
        Relationship {
            from: from.to_string(),
            to: to.to_string(),
            cardinality,
            name: name.to_string(),
        }
    }

    #[test]
    fn test_mixed_pair_keeps_one_to_many_side() {
        let records = vec![
            rel("Book", "Author", Cardinality::ManyToOne, "author"),
            rel("Author", "Book", Cardinality::OneToMany, "books"),
        ];

        let unique = dedupe(&records);
        assert_eq!(unique.len(), 1);
        assert_eq!(unique[0].name, "books");
        assert_eq!(unique[0].cardinality, Cardinality::OneToMany);
    }

    #[test]
    fn test_mixed_pair_order_insensitive() {
        let records = vec![
            rel("Author", "Book", Cardinality::OneToMany, "books"),
            rel("Book", "Author", Cardinality::ManyToOne, "author"),
        ];

        let unique = dedupe(&records);
        assert_eq!(unique.len(), 1);
        assert_eq!(unique[0].name, "books");
    }

    #[test]
    fn test_unpaired_records_survive() {
        let records = vec![
            rel("Book", "Author", Cardinality::ManyToOne, "author"),
            rel("Book", "Tag", Cardinality::ManyToMany, "tags"),
        ];

        let unique = dedupe(&records);
        assert_eq!(unique.len(), 2);
    }

    #[test]
    fn test_symmetric_pairs_suppress_each_other() {
        // Both sides declare the same symmetric cardinality; the literal
        // pair rule removes both.
        let records = vec![
            rel("Book", "Tag", Cardinality::ManyToMany, "tags"),
            rel("Tag", "Book", Cardinality::ManyToMany, "books"),
        ];
        assert!(dedupe(&records).is_empty());

        let records = vec![
            rel("User", "Profile", Cardinality::OneToOne, "profile"),
            rel("Profile", "User", Cardinality::OneToOne, "user"),
        ];
        assert!(dedupe(&records).is_empty());
    }

    #[test]
    fn test_symmetric_types_need_matching_cardinality() {
        // Swapped endpoints but differing cardinalities: not an inverse pair
        let records = vec![
            rel("User", "Profile", Cardinality::OneToOne, "profile"),
            rel("Profile", "User", Cardinality::ManyToMany, "users"),
        ];
        assert_eq!(dedupe(&records).len(), 2);
    }

    #[test]
    fn test_self_relation_is_not_its_own_mirror() {
        let records = vec![rel(
            "Category",
            "Category",
            Cardinality::OneToOne,
            "twin",
        )];

        let unique = dedupe(&records);
        assert_eq!(unique.len(), 1);
    }

    #[test]
    fn test_duplicate_self_relations_suppress_each_other() {
        // Two independent self-relation records do mirror each other
        let records = vec![
            rel("Category", "Category", Cardinality::OneToOne, "twin"),
            rel("Category", "Category", Cardinality::OneToOne, "other"),
        ];
        assert!(dedupe(&records).is_empty());
    }

    #[test]
    fn test_three_mutual_records_all_dropped() {
        // Malformed graph: duplicate declarations all partner each other
        let records = vec![
            rel("A", "B", Cardinality::ManyToMany, "x"),
            rel("B", "A", Cardinality::ManyToMany, "y"),
            rel("A", "B", Cardinality::ManyToMany, "z"),
        ];
        assert!(dedupe(&records).is_empty());
    }

    #[test]
    fn test_one_to_many_without_partner_survives() {
        let records = vec![rel("Author", "Book", Cardinality::OneToMany, "books")];
        assert_eq!(dedupe(&records).len(), 1);
    }
}
