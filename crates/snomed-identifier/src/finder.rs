//! Highest-sequence discovery.
//!
//! Finds the numerically greatest existing identifier for a (namespace,
//! partition) key by querying the content store with an identifier-shape
//! pattern, then parses the sequence portion back out of it.

use regex::Regex;
use tracing::debug;

use crate::partition::{PartitionId, PartitionTable};
use crate::store::ComponentStore;
use crate::types::{IdentifierError, IdentifierResult};

/// Finds the highest identifier sequence in the given namespace and
/// partition across the whole store. Returns 0 when no identifier exists.
///
/// Read-only; safe to run concurrently with other callers. The result may
/// lag reservations this process has made but not yet persisted, which the
/// allocator's cache compensates for.
pub(crate) fn find_highest_sequence<S: ComponentStore>(
    store: &S,
    partitions: &PartitionTable,
    namespace_id: u32,
    partition: PartitionId,
) -> IdentifierResult<u64> {
    let resolved = partitions.resolve(partition)?;
    let pattern = id_pattern(namespace_id, partition)?;

    let Some(highest) = store.find_highest_id(resolved.kind, resolved.id_field, &pattern)? else {
        debug!(
            namespace_id,
            partition = %partition,
            kind = %resolved.kind,
            "no existing identifier found"
        );
        return Ok(0);
    };

    let sequence = parse_sequence(&highest, namespace_id)?;
    debug!(
        namespace_id,
        partition = %partition,
        kind = %resolved.kind,
        highest_id = %highest,
        sequence,
        "found highest existing identifier"
    );
    Ok(sequence)
}

/// Builds the whole-value pattern for identifiers of one (namespace,
/// partition) key.
///
/// For International content the leading sequence run is capped at 11
/// digits, otherwise the pattern would also match extension identifiers and
/// long model identifiers like 900000000000550004 whose digits happen to
/// contain the partition code at the right offset.
fn id_pattern(namespace_id: u32, partition: PartitionId) -> Result<Regex, regex::Error> {
    let pattern = if namespace_id == 0 {
        format!("^[0-9]{{0,11}}{partition}[0-9]$")
    } else {
        format!("^[0-9]*{namespace_id}{partition}[0-9]$")
    };
    Regex::new(&pattern)
}

/// Extracts the sequence portion of a matched identifier.
///
/// The trailing three characters are the partition code and check digit; for
/// extension identifiers the namespace digits sit immediately before those,
/// which the query pattern guarantees.
///
/// # Errors
///
/// [`IdentifierError::MalformedIdentifier`] when the identifier does not
/// carry a parseable sequence at the expected offset. A malformed stored
/// identifier is an internal-invariant violation and is surfaced rather
/// than skipped.
fn parse_sequence(id: &str, namespace_id: u32) -> IdentifierResult<u64> {
    let malformed = || IdentifierError::MalformedIdentifier {
        value: id.to_string(),
    };

    let end = id.len().checked_sub(3).ok_or_else(malformed)?;
    let mut sequence = id.get(..end).ok_or_else(malformed)?;
    if namespace_id != 0 {
        sequence = sequence
            .strip_suffix(&namespace_id.to_string())
            .ok_or_else(malformed)?;
    }
    if sequence.is_empty() {
        return Err(malformed());
    }
    sequence.parse::<u64>().map_err(|_| malformed())
}
