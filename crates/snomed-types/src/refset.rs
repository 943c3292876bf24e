//! SNOMED CT Reference Set member type.
//!
//! Reference sets (refsets) group components together for a purpose: simple
//! membership, language acceptability, association targets, and so on. One
//! case matters to identifier allocation: postcoordinated expression
//! identifiers are carried as members of an expression reference set, with
//! the minted SCTID stored in `referenced_component_id`.

use crate::SctId;

/// A reference set member as held by the content store.
///
/// Unlike other components, a member's own identifier is a UUID string. The
/// `referenced_component_id` is the SCTID of the component (or expression)
/// the member refers to.
///
/// # Examples
///
/// ```
/// use snomed_types::{well_known, RefsetMember};
///
/// let member = RefsetMember {
///     member_id: "8ed03c9f-ef67-4f9e-a2d5-31a045fbe041".to_string(),
///     effective_time: None,
///     active: true,
///     module_id: well_known::CORE_MODULE,
///     refset_id: 723264001,
///     referenced_component_id: 12345678,
/// };
///
/// assert!(member.active);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RefsetMember {
    /// Unique identifier for this member (UUID string).
    pub member_id: String,
    /// Effective date in YYYYMMDD format; `None` for unversioned content.
    pub effective_time: Option<u32>,
    /// Whether this membership is currently active.
    pub active: bool,
    /// Module this member belongs to.
    pub module_id: SctId,
    /// The reference set this member belongs to.
    pub refset_id: SctId,
    /// The component the member refers to (an SCTID).
    pub referenced_component_id: SctId,
}
