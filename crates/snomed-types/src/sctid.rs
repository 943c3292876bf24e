//! SNOMED CT Identifier (SCTID) type.

/// A SNOMED CT identifier (SCTID).
///
/// SCTIDs are positive 64-bit integers, at most 18 digits long. Read as a
/// decimal string, an SCTID decomposes into
/// `<sequence><namespace?><partition><checkDigit>`:
///
/// - `sequence`: variable-length counter within one (namespace, partition)
///   key, no fixed width.
/// - `namespace`: the owning organisation's namespace digits; omitted for
///   International content (namespace 0).
/// - `partition`: two digits encoding the component kind and whether the
///   identifier is International or extension scoped.
/// - `checkDigit`: one Verhoeff check digit computed over all preceding
///   digits.
///
/// # Examples
///
/// ```
/// use snomed_types::SctId;
///
/// // "7321100" + check digit 9: sequence 73211, partition 00.
/// let concept_id: SctId = 73211009; // Diabetes mellitus
/// ```
pub type SctId = u64;
