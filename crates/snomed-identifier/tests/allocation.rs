//! End-to-end identifier allocation scenarios.

use regex::Regex;
use snomed_identifier::snomed_types::{well_known, ComponentKind, Concept, RefsetMember, SctId};
use snomed_identifier::{
    verhoeff, ComponentStore, IdField, IdentifierError, IdentifierSource, InMemoryComponentStore,
    LocalSequentialIdentifierSource, PartitionId, StoreError,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .try_init();
}

fn concept(id: SctId) -> Concept {
    Concept {
        id,
        effective_time: Some(20240101),
        active: true,
        module_id: well_known::CORE_MODULE,
        definition_status_id: well_known::PRIMITIVE,
    }
}

#[test]
fn empty_store_allocates_from_sequence_one() {
    init_tracing();
    let source = LocalSequentialIdentifierSource::new(InMemoryComponentStore::new());

    let first = source
        .reserve_ids(0, PartitionId::CONCEPT_INTERNATIONAL, 3)
        .unwrap();
    assert_eq!(first, vec![1003, 2005, 3000]);
    for id in &first {
        let text = id.to_string();
        // Partition digits sit just before the check digit.
        assert_eq!(&text[text.len() - 3..text.len() - 1], "00");
        assert!(verhoeff::validate(&text));
    }

    // Store still empty; the cache carries the sequence forward.
    let second = source
        .reserve_ids(0, PartitionId::CONCEPT_INTERNATIONAL, 2)
        .unwrap();
    assert_eq!(second, vec![4006, 5007]);
}

#[test]
fn repeated_calls_never_repeat_identifiers() {
    init_tracing();
    let source = LocalSequentialIdentifierSource::new(InMemoryComponentStore::new());

    let mut all = Vec::new();
    for quantity in [1, 4, 2, 7] {
        let batch = source
            .reserve_ids(0, PartitionId::DESCRIPTION_INTERNATIONAL, quantity)
            .unwrap();
        assert_eq!(batch.len(), quantity);
        all.extend(batch);
    }
    let mut deduped = all.clone();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(deduped.len(), all.len());
    // Batches are returned in allocation order, so the whole history is
    // strictly increasing in sequence.
    assert!(all.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn allocation_continues_from_stored_maximum() {
    init_tracing();
    let mut store = InMemoryComponentStore::new();
    store.put_concept(concept(41002)); // sequence 41
    store.put_concept(concept(12006)); // sequence 12, longer string loses
    let source = LocalSequentialIdentifierSource::new(store);

    let ids = source
        .reserve_ids(0, PartitionId::CONCEPT_INTERNATIONAL, 2)
        .unwrap();
    assert_eq!(ids, vec![42009, 43004]);
}

#[test]
fn long_model_identifiers_do_not_inflate_the_sequence() {
    init_tracing();
    let mut store = InMemoryComponentStore::new();
    // Ends in "00" plus a valid check digit, but the leading run exceeds the
    // 11-digit International sequence bound.
    store.put_concept(concept(900000000000550004));
    let source = LocalSequentialIdentifierSource::new(store);

    let ids = source
        .reserve_ids(0, PartitionId::CONCEPT_INTERNATIONAL, 1)
        .unwrap();
    assert_eq!(ids, vec![1003]);
}

#[test]
fn extension_namespace_identifiers_embed_namespace_digits() {
    init_tracing();
    let mut store = InMemoryComponentStore::new();
    store.put_concept(concept(71000003108)); // namespace 1000003, sequence 7
    let source = LocalSequentialIdentifierSource::new(store);

    let ids = source
        .reserve_ids(1000003, PartitionId::CONCEPT_EXTENSION, 1)
        .unwrap();
    assert_eq!(ids, vec![81000003105]);
    let text = ids[0].to_string();
    assert!(text.ends_with("105"));
    assert!(text.contains("100000310"));
    assert!(verhoeff::validate(&text));
}

#[test]
fn expression_identifiers_come_from_refset_members() {
    init_tracing();
    let mut store = InMemoryComponentStore::new();
    store.put_refset_member(RefsetMember {
        member_id: "c9a0b9d1-4a47-4b7e-948c-0f3a17d0d2aa".to_string(),
        effective_time: None,
        active: true,
        module_id: well_known::CORE_MODULE,
        refset_id: 723264001,
        referenced_component_id: 5167, // expression partition, sequence 5
    });
    let source = LocalSequentialIdentifierSource::new(store);

    let ids = source.reserve_ids(0, PartitionId::EXPRESSION, 1).unwrap();
    assert_eq!(ids, vec![6168]);
}

#[test]
fn unknown_partition_fails_without_touching_the_cache() {
    init_tracing();
    let source = LocalSequentialIdentifierSource::new(InMemoryComponentStore::new());

    let err = source
        .reserve_ids(0, PartitionId::new("99").unwrap(), 5)
        .unwrap_err();
    assert!(matches!(err, IdentifierError::UnknownPartition { .. }));

    // A valid partition is unaffected and still starts at sequence 1.
    let ids = source
        .reserve_ids(0, PartitionId::RELATIONSHIP_INTERNATIONAL, 1)
        .unwrap();
    assert_eq!(ids, vec![1026]);
}

#[test]
fn store_failure_surfaces_with_no_partial_batch() {
    init_tracing();

    struct FailingStore;
    impl ComponentStore for FailingStore {
        fn find_highest_id(
            &self,
            _kind: ComponentKind,
            _field: IdField,
            _pattern: &Regex,
        ) -> Result<Option<String>, StoreError> {
            Err(StoreError::Timeout { millis: 5000 })
        }
    }

    let source = LocalSequentialIdentifierSource::new(FailingStore);
    let err = source
        .reserve_ids(0, PartitionId::CONCEPT_INTERNATIONAL, 3)
        .unwrap_err();
    assert!(matches!(err, IdentifierError::Store(StoreError::Timeout { .. })));
}

#[test]
fn concurrent_callers_share_one_monotonic_sequence_per_key() {
    use std::collections::HashSet;
    use std::sync::Arc;

    init_tracing();
    let source = Arc::new(LocalSequentialIdentifierSource::new(
        InMemoryComponentStore::new(),
    ));

    let mut handles = Vec::new();
    for _ in 0..6 {
        let source = Arc::clone(&source);
        handles.push(std::thread::spawn(move || {
            let mut ids = Vec::new();
            for _ in 0..20 {
                ids.extend(
                    source
                        .reserve_ids(0, PartitionId::CONCEPT_INTERNATIONAL, 5)
                        .unwrap(),
                );
            }
            ids
        }));
    }

    let mut seen = HashSet::new();
    for handle in handles {
        for id in handle.join().unwrap() {
            assert!(verhoeff::validate(&id.to_string()));
            assert!(seen.insert(id), "identifier {id} issued twice");
        }
    }
    assert_eq!(seen.len(), 6 * 20 * 5);
}
