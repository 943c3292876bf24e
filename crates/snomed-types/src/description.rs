//! SNOMED CT Description type.

use crate::{well_known, SctId};

/// A SNOMED CT description as held by the content store.
///
/// # Examples
///
/// ```
/// use snomed_types::{well_known, Description};
///
/// let description = Description {
///     id: 754786011,
///     effective_time: Some(20020131),
///     active: true,
///     module_id: well_known::CORE_MODULE,
///     concept_id: 73211009,
///     language_code: "en".to_string(),
///     type_id: well_known::FSN,
///     term: "Diabetes mellitus (disorder)".to_string(),
///     case_significance_id: well_known::CASE_INSENSITIVE,
/// };
///
/// assert!(description.is_fsn());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Description {
    /// Unique identifier for this description (SCTID).
    pub id: SctId,
    /// Effective date in YYYYMMDD format; `None` for unversioned content.
    pub effective_time: Option<u32>,
    /// Whether this description is active.
    pub active: bool,
    /// The module containing this description.
    pub module_id: SctId,
    /// The concept this description belongs to.
    pub concept_id: SctId,
    /// ISO language code (e.g., "en").
    pub language_code: String,
    /// Type of description (FSN, Synonym, etc.).
    pub type_id: SctId,
    /// The description text/term.
    pub term: String,
    /// Case significance rules for this term.
    pub case_significance_id: SctId,
}

impl Description {
    /// Returns true if this is a Fully Specified Name.
    pub fn is_fsn(&self) -> bool {
        self.type_id == well_known::FSN
    }

    /// Returns true if this is a Synonym.
    pub fn is_synonym(&self) -> bool {
        self.type_id == well_known::SYNONYM
    }
}
