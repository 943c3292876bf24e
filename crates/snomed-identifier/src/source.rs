//! Identifier source contract and the local sequential implementation.

use snomed_types::SctId;
use tracing::debug;

use crate::allocator::SequenceAllocator;
use crate::finder;
use crate::partition::{PartitionId, PartitionTable};
use crate::store::ComponentStore;
use crate::types::IdentifierResult;

/// Contract consumed by component-creation code paths.
pub trait IdentifierSource {
    /// Reserves `quantity` new identifiers for the (namespace, partition)
    /// key, returned in ascending sequence order. Each identifier is
    /// distinct and carries a valid Verhoeff check digit.
    ///
    /// # Errors
    ///
    /// [`IdentifierError::UnknownPartition`] for codes outside the
    /// partition table, raised before any store query or cache mutation;
    /// [`IdentifierError::Store`] when the highest-sequence query fails.
    /// No partial batches: either all `quantity` identifiers are produced
    /// or none.
    ///
    /// [`IdentifierError::UnknownPartition`]: crate::IdentifierError::UnknownPartition
    /// [`IdentifierError::Store`]: crate::IdentifierError::Store
    fn reserve_ids(
        &self,
        namespace_id: u32,
        partition: PartitionId,
        quantity: usize,
    ) -> IdentifierResult<Vec<SctId>>;

    /// Records identifiers assigned from an external pool. Never fails.
    fn register_ids(&self, namespace_id: u32, ids_assigned: &[SctId]);
}

/// Generates SNOMED CT component identifiers locally using sequential
/// sequence numbers, with the content store as the source of truth for the
/// highest existing identifier.
///
/// Assumes SCTIDs in the same (namespace, partition) sequences are not
/// minted by any other service or process. Running a second allocator
/// against the same key space is unsupported and will likely produce
/// colliding identifiers; nothing here detects or prevents it.
///
/// # Examples
///
/// ```
/// use snomed_identifier::{
///     IdentifierSource, InMemoryComponentStore, LocalSequentialIdentifierSource, PartitionId,
/// };
///
/// let source = LocalSequentialIdentifierSource::new(InMemoryComponentStore::new());
/// let ids = source.reserve_ids(0, PartitionId::CONCEPT_INTERNATIONAL, 3).unwrap();
/// assert_eq!(ids.len(), 3);
/// ```
pub struct LocalSequentialIdentifierSource<S> {
    store: S,
    partitions: PartitionTable,
    allocator: SequenceAllocator,
}

impl<S: ComponentStore> LocalSequentialIdentifierSource<S> {
    /// Creates a source over `store` with the built-in partition table.
    pub fn new(store: S) -> Self {
        Self::with_partitions(store, PartitionTable::new())
    }

    /// Creates a source with a custom partition table.
    pub fn with_partitions(store: S, partitions: PartitionTable) -> Self {
        Self {
            store,
            partitions,
            allocator: SequenceAllocator::new(),
        }
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: ComponentStore> IdentifierSource for LocalSequentialIdentifierSource<S> {
    fn reserve_ids(
        &self,
        namespace_id: u32,
        partition: PartitionId,
        quantity: usize,
    ) -> IdentifierResult<Vec<SctId>> {
        // The store read runs outside the allocator's critical section; the
        // allocator re-derives the authoritative sequence as max(store,
        // cache), so a concurrent caller racing past this read is harmless.
        let store_sequence =
            finder::find_highest_sequence(&self.store, &self.partitions, namespace_id, partition)?;
        self.allocator
            .reserve(namespace_id, partition, store_sequence, quantity)
    }

    fn register_ids(&self, namespace_id: u32, ids_assigned: &[SctId]) {
        // Nothing to record: the next reservation re-discovers the high-water
        // mark from the store, which is where externally assigned ids end up.
        debug!(
            namespace_id,
            count = ids_assigned.len(),
            "externally assigned identifiers registered"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryComponentStore;
    use crate::types::IdentifierError;
    use crate::verhoeff;
    use snomed_types::{well_known, Concept};

    fn source_with_concepts(
        ids: &[SctId],
    ) -> LocalSequentialIdentifierSource<InMemoryComponentStore> {
        let mut store = InMemoryComponentStore::new();
        for &id in ids {
            store.put_concept(Concept {
                id,
                effective_time: Some(20240101),
                active: true,
                module_id: well_known::CORE_MODULE,
                definition_status_id: well_known::PRIMITIVE,
            });
        }
        LocalSequentialIdentifierSource::new(store)
    }

    #[test]
    fn test_reserved_ids_validate_and_are_distinct() {
        let source = source_with_concepts(&[]);
        let ids = source
            .reserve_ids(0, PartitionId::CONCEPT_INTERNATIONAL, 10)
            .unwrap();
        assert_eq!(ids.len(), 10);
        for window in ids.windows(2) {
            assert!(window[0] < window[1]);
        }
        for id in &ids {
            assert!(verhoeff::validate(&id.to_string()));
        }
    }

    #[test]
    fn test_continues_after_stores_highest() {
        // Highest stored concept identifier has sequence 41.
        let source = source_with_concepts(&[41002, 12006]);
        let ids = source
            .reserve_ids(0, PartitionId::CONCEPT_INTERNATIONAL, 1)
            .unwrap();
        assert_eq!(ids, vec![42009]);
    }

    #[test]
    fn test_unknown_partition_rejected() {
        let source = source_with_concepts(&[]);
        let err = source
            .reserve_ids(0, PartitionId::new("99").unwrap(), 1)
            .unwrap_err();
        assert!(matches!(err, IdentifierError::UnknownPartition { .. }));
    }

    #[test]
    fn test_register_ids_is_a_no_op() {
        let source = source_with_concepts(&[]);
        source.register_ids(0, &[41002, 42009]);

        // The registered ids are not in the store, so allocation is not
        // influenced by them.
        let ids = source
            .reserve_ids(0, PartitionId::CONCEPT_INTERNATIONAL, 1)
            .unwrap();
        assert_eq!(ids, vec![1003]);
    }

    #[test]
    fn test_custom_partition_table_entry() {
        use crate::store::IdField;
        use snomed_types::ComponentKind;

        let table = PartitionTable::new().with_entry(
            PartitionId::new("17").unwrap(),
            ComponentKind::RefsetMember,
            IdField::ReferencedComponentId,
        );
        let source =
            LocalSequentialIdentifierSource::with_partitions(InMemoryComponentStore::new(), table);
        let ids = source
            .reserve_ids(0, PartitionId::new("17").unwrap(), 1)
            .unwrap();
        assert_eq!(ids.len(), 1);
        assert!(verhoeff::validate(&ids[0].to_string()));
    }
}
