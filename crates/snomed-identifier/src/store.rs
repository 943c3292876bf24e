//! Content store query capability.
//!
//! The finder needs one operation from the backing store: given a component
//! kind, an identifier field, and an identifier-shape pattern, return the
//! field value of the single best-ranked matching record. Ranking must be
//! by identifier string length descending, then by the string itself
//! descending. Numerals stored as text cannot be ranked by plain string
//! order ("9" > "10"); comparing lengths first makes string order safe.
//!
//! [`InMemoryComponentStore`] is a document-store stand-in with the same
//! query contract, used in tests and small deployments.

use std::collections::HashMap;

use regex::Regex;
use snomed_types::{ComponentKind, Concept, Description, RefsetMember, Relationship, SctId};

use crate::types::StoreError;

/// The record field an identifier query targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdField {
    /// The component's own identifier.
    ComponentId,
    /// The referenced component identifier of a reference set member.
    ReferencedComponentId,
}

/// Read-only query capability the highest-sequence finder consumes.
///
/// The store is shared with the rest of the terminology server and is not
/// assumed to be immediately consistent with this process's own recent
/// reservations; the allocator's cache covers that window.
pub trait ComponentStore {
    /// Returns the value of `field` from the single matching record ranked
    /// first by identifier string length descending, then by the identifier
    /// string descending.
    ///
    /// The pattern must be matched against the whole field value, and the
    /// query must be restricted to records of `kind`.
    ///
    /// # Errors
    ///
    /// [`StoreError`] when the backing store cannot answer; no retry is
    /// attempted by callers in this crate.
    fn find_highest_id(
        &self,
        kind: ComponentKind,
        field: IdField,
        pattern: &Regex,
    ) -> Result<Option<String>, StoreError>;
}

impl<S: ComponentStore + ?Sized> ComponentStore for &S {
    fn find_highest_id(
        &self,
        kind: ComponentKind,
        field: IdField,
        pattern: &Regex,
    ) -> Result<Option<String>, StoreError> {
        (**self).find_highest_id(kind, field, pattern)
    }
}

/// In-memory component store.
///
/// Holds component records indexed by identifier and answers the
/// highest-identifier query by scanning. Suitable for tests and small
/// content sets; a production deployment backs [`ComponentStore`] with the
/// terminology server's document store.
#[derive(Default)]
pub struct InMemoryComponentStore {
    concepts: HashMap<SctId, Concept>,
    descriptions: HashMap<SctId, Description>,
    relationships: HashMap<SctId, Relationship>,
    /// Members indexed by their UUID member id.
    refset_members: HashMap<String, RefsetMember>,
}

impl std::fmt::Debug for InMemoryComponentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryComponentStore")
            .field("concepts", &self.concepts.len())
            .field("descriptions", &self.descriptions.len())
            .field("relationships", &self.relationships.len())
            .field("refset_members", &self.refset_members.len())
            .finish()
    }
}

impl InMemoryComponentStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a concept.
    pub fn put_concept(&mut self, concept: Concept) {
        self.concepts.insert(concept.id, concept);
    }

    /// Adds or replaces a description.
    pub fn put_description(&mut self, description: Description) {
        self.descriptions.insert(description.id, description);
    }

    /// Adds or replaces a relationship.
    pub fn put_relationship(&mut self, relationship: Relationship) {
        self.relationships.insert(relationship.id, relationship);
    }

    /// Adds or replaces a reference set member.
    pub fn put_refset_member(&mut self, member: RefsetMember) {
        self.refset_members.insert(member.member_id.clone(), member);
    }

    /// Number of concepts held.
    pub fn concept_count(&self) -> usize {
        self.concepts.len()
    }

    /// Number of descriptions held.
    pub fn description_count(&self) -> usize {
        self.descriptions.len()
    }

    /// Number of relationships held.
    pub fn relationship_count(&self) -> usize {
        self.relationships.len()
    }

    /// Number of reference set members held.
    pub fn refset_member_count(&self) -> usize {
        self.refset_members.len()
    }

    fn candidate_ids(&self, kind: ComponentKind, field: IdField) -> Vec<String> {
        match (kind, field) {
            (ComponentKind::Concept, IdField::ComponentId) => {
                self.concepts.keys().map(|id| id.to_string()).collect()
            }
            (ComponentKind::Description, IdField::ComponentId) => {
                self.descriptions.keys().map(|id| id.to_string()).collect()
            }
            (ComponentKind::Relationship, IdField::ComponentId) => {
                self.relationships.keys().map(|id| id.to_string()).collect()
            }
            (ComponentKind::RefsetMember, IdField::ReferencedComponentId) => self
                .refset_members
                .values()
                .map(|member| member.referenced_component_id.to_string())
                .collect(),
            // Member UUIDs are not SCTIDs, and the other kinds have no
            // referenced component field.
            (ComponentKind::RefsetMember, IdField::ComponentId)
            | (_, IdField::ReferencedComponentId) => Vec::new(),
        }
    }
}

impl ComponentStore for InMemoryComponentStore {
    fn find_highest_id(
        &self,
        kind: ComponentKind,
        field: IdField,
        pattern: &Regex,
    ) -> Result<Option<String>, StoreError> {
        let highest = self
            .candidate_ids(kind, field)
            .into_iter()
            .filter(|id| pattern.is_match(id))
            .max_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
        Ok(highest)
    }
}
