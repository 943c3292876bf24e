//! Partition codes and the partition table.
//!
//! The two digits before an SCTID's check digit are its partition: they
//! encode which component kind the identifier denotes and whether it belongs
//! to the International namespace (first digit 0) or an extension namespace
//! (first digit 1). Supporting a new component kind means adding a partition
//! table entry; the finder and allocator stay unchanged.

use std::collections::HashMap;

use snomed_types::ComponentKind;

use crate::store::IdField;
use crate::types::{IdentifierError, IdentifierResult};

/// A two-digit SCTID partition code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PartitionId([u8; 2]);

impl PartitionId {
    /// International concept partition ("00").
    pub const CONCEPT_INTERNATIONAL: PartitionId = PartitionId(*b"00");
    /// International description partition ("01").
    pub const DESCRIPTION_INTERNATIONAL: PartitionId = PartitionId(*b"01");
    /// International relationship partition ("02").
    pub const RELATIONSHIP_INTERNATIONAL: PartitionId = PartitionId(*b"02");
    /// Extension concept partition ("10").
    pub const CONCEPT_EXTENSION: PartitionId = PartitionId(*b"10");
    /// Extension description partition ("11").
    pub const DESCRIPTION_EXTENSION: PartitionId = PartitionId(*b"11");
    /// Extension relationship partition ("12").
    pub const RELATIONSHIP_EXTENSION: PartitionId = PartitionId(*b"12");
    /// Expression partition ("16"); expression identifiers are carried as
    /// the referenced component of a reference set member.
    pub const EXPRESSION: PartitionId = PartitionId(*b"16");

    /// Parses a partition code from exactly two ASCII digits.
    ///
    /// ```
    /// use snomed_identifier::PartitionId;
    ///
    /// assert_eq!(PartitionId::new("00"), Some(PartitionId::CONCEPT_INTERNATIONAL));
    /// assert_eq!(PartitionId::new("0"), None);
    /// assert_eq!(PartitionId::new("0x"), None);
    /// ```
    pub fn new(code: &str) -> Option<PartitionId> {
        match code.as_bytes() {
            [a, b] if a.is_ascii_digit() && b.is_ascii_digit() => Some(PartitionId([*a, *b])),
            _ => None,
        }
    }

    /// The two digit characters of this code.
    pub fn digits(self) -> [char; 2] {
        [self.0[0] as char, self.0[1] as char]
    }
}

impl std::fmt::Display for PartitionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b] = self.digits();
        write!(f, "{a}{b}")
    }
}

/// What a partition code resolves to: the component kind it governs and the
/// record field its identifiers live in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    /// The kind of component this partition mints identifiers for.
    pub kind: ComponentKind,
    /// The record field holding identifiers of this partition.
    pub id_field: IdField,
}

/// Maps partition codes to the component kind and identifier field they
/// govern.
///
/// [`PartitionTable::new`] carries the codes this generator handles out of
/// the box; deployments minting further kinds extend it with
/// [`with_entry`](PartitionTable::with_entry).
#[derive(Debug, Clone)]
pub struct PartitionTable {
    entries: HashMap<PartitionId, Partition>,
}

impl Default for PartitionTable {
    fn default() -> Self {
        let mut entries = HashMap::new();
        for code in [
            PartitionId::CONCEPT_INTERNATIONAL,
            PartitionId::CONCEPT_EXTENSION,
        ] {
            entries.insert(
                code,
                Partition {
                    kind: ComponentKind::Concept,
                    id_field: IdField::ComponentId,
                },
            );
        }
        for code in [
            PartitionId::DESCRIPTION_INTERNATIONAL,
            PartitionId::DESCRIPTION_EXTENSION,
        ] {
            entries.insert(
                code,
                Partition {
                    kind: ComponentKind::Description,
                    id_field: IdField::ComponentId,
                },
            );
        }
        for code in [
            PartitionId::RELATIONSHIP_INTERNATIONAL,
            PartitionId::RELATIONSHIP_EXTENSION,
        ] {
            entries.insert(
                code,
                Partition {
                    kind: ComponentKind::Relationship,
                    id_field: IdField::ComponentId,
                },
            );
        }
        entries.insert(
            PartitionId::EXPRESSION,
            Partition {
                kind: ComponentKind::RefsetMember,
                id_field: IdField::ReferencedComponentId,
            },
        );
        Self { entries }
    }
}

impl PartitionTable {
    /// Creates a table with the built-in partition codes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a table extended with one further mapping.
    pub fn with_entry(
        mut self,
        code: PartitionId,
        kind: ComponentKind,
        id_field: IdField,
    ) -> Self {
        self.entries.insert(code, Partition { kind, id_field });
        self
    }

    /// Resolves a partition code to its component kind and identifier field.
    ///
    /// # Errors
    ///
    /// [`IdentifierError::UnknownPartition`] when the code has no entry.
    pub fn resolve(&self, code: PartitionId) -> IdentifierResult<Partition> {
        self.entries
            .get(&code)
            .copied()
            .ok_or_else(|| IdentifierError::UnknownPartition {
                partition: code.to_string(),
            })
    }
}
