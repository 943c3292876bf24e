//! Reservation cache and batch allocation.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use snomed_types::SctId;
use tracing::debug;

use crate::partition::PartitionId;
use crate::types::{IdentifierError, IdentifierResult};
use crate::verhoeff;

/// Mints batches of sequential identifiers, remembering the highest sequence
/// issued per (namespace, partition) key.
///
/// The store read that seeds an allocation may not yet reflect identifiers
/// reserved moments earlier but not yet persisted. The cache closes that
/// window: inside the critical section the authoritative sequence is
/// `max(store, cache)`, so a stale store read can never roll a key
/// backwards. Entries are created lazily and live for the allocator's
/// lifetime; the key space is bounded by partition count times observed
/// namespaces, so there is no eviction. Cache state is lost on restart,
/// after which correctness depends entirely on the store read being fresh.
///
/// One mutex serializes all keys. Unrelated keys therefore block each
/// other; per-key locks would lift that while keeping the same per-key
/// monotonicity guarantee.
#[derive(Debug, Default)]
pub(crate) struct SequenceAllocator {
    highest_issued: Mutex<HashMap<(u32, PartitionId), u64>>,
}

impl SequenceAllocator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Mints `quantity` identifiers for the key, starting after both
    /// `store_sequence` and the cached high-water mark.
    ///
    /// The whole mint runs under the cache lock, so two concurrent calls can
    /// never compute overlapping sequence ranges for the same key. Either
    /// all `quantity` identifiers are produced or none: the cache is only
    /// written after the batch is complete.
    pub(crate) fn reserve(
        &self,
        namespace_id: u32,
        partition: PartitionId,
        store_sequence: u64,
        quantity: usize,
    ) -> IdentifierResult<Vec<SctId>> {
        let mut cache = self
            .highest_issued
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let key = (namespace_id, partition);
        let cached = cache.get(&key).copied().unwrap_or(0);
        let mut sequence = store_sequence.max(cached);

        let mut identifiers = Vec::with_capacity(quantity);
        for _ in 0..quantity {
            sequence += 1;
            identifiers.push(compose_sctid(sequence, namespace_id, partition)?);
        }

        cache.insert(key, sequence);
        drop(cache);

        debug!(
            namespace_id,
            partition = %partition,
            quantity,
            highest_sequence = sequence,
            "reserved identifiers"
        );
        Ok(identifiers)
    }
}

/// Composes a full SCTID from its parts: sequence digits, namespace digits
/// (empty for the International namespace), partition code, check digit.
fn compose_sctid(
    sequence: u64,
    namespace_id: u32,
    partition: PartitionId,
) -> IdentifierResult<SctId> {
    let mut numeral = sequence.to_string();
    if namespace_id != 0 {
        numeral.push_str(&namespace_id.to_string());
    }
    let [a, b] = partition.digits();
    numeral.push(a);
    numeral.push(b);

    let malformed = |value: &str| IdentifierError::MalformedIdentifier {
        value: value.to_string(),
    };
    // check_digit only fails on non-digit input, which the construction
    // above rules out; parse only fails past 64 bits.
    let check = verhoeff::check_digit(&numeral).ok_or_else(|| malformed(&numeral))?;
    numeral.push((b'0' + check) as char);
    numeral.parse::<SctId>().map_err(|_| malformed(&numeral))
}
