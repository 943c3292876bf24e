//! Component kind classification.
//!
//! Every SCTID denotes exactly one kind of vocabulary component. The kind is
//! encoded in the identifier's partition digits, and store queries are always
//! scoped to a single kind.

/// The category of vocabulary component an identifier denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ComponentKind {
    /// A concept, the core unit of meaning.
    Concept,
    /// A human-readable description of a concept.
    Description,
    /// A defining relationship between two concepts.
    Relationship,
    /// A reference set member, including expression identifiers carried as
    /// members of an expression reference set.
    RefsetMember,
}

impl ComponentKind {
    /// Returns a stable lowercase name, suitable for log output.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Concept => "concept",
            ComponentKind::Description => "description",
            ComponentKind::Relationship => "relationship",
            ComponentKind::RefsetMember => "refset-member",
        }
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        assert_eq!(ComponentKind::Concept.to_string(), "concept");
        assert_eq!(ComponentKind::RefsetMember.to_string(), "refset-member");
    }
}
