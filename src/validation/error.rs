//! Defines the error types for the validation module.
use crate::store::{FamilyId, IndividualId, Tag};
use thiserror::Error;

/// A data-integrity fault in the inputs handed to a check.
///
/// These are defects in the upstream loader or indexer, not rule violations.
/// A check that hits one stops and propagates it; the pass is aborted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    #[error("Integrity error: individual {0} is referenced but not present")]
    UnknownIndividual(IndividualId),

    #[error("Integrity error: family {0} is referenced but not present")]
    UnknownFamily(FamilyId),

    #[error("Integrity error: no {tag} positions recorded for {entity}")]
    MissingProvenance { entity: String, tag: Tag },
}

pub type CheckResult<T> = Result<T, CheckError>;
