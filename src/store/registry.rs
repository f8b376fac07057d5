use super::types::*;
use crate::validation::CheckError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The two keyed collections the checks traverse.
///
/// Ordered maps keep iteration (and therefore warning order) reproducible
/// across runs over the same data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenealogyStore {
    #[serde(default)]
    pub individuals: BTreeMap<IndividualId, Individual>,
    #[serde(default)]
    pub families: BTreeMap<FamilyId, Family>,
}

impl GenealogyStore {
    pub fn new() -> Self { Self::default() }

    pub fn individual_count(&self) -> usize { self.individuals.len() }
    pub fn family_count(&self) -> usize { self.families.len() }

    /// Loader-side insertion; replaces any record with the same id.
    pub fn insert_individual(&mut self, individual: Individual) {
        self.individuals.insert(individual.id.clone(), individual);
    }

    pub fn insert_family(&mut self, family: Family) {
        self.families.insert(family.id.clone(), family);
    }

    #[inline]
    pub fn individual(&self, id: &IndividualId) -> Result<&Individual, CheckError> {
        self.individuals
            .get(id)
            .ok_or_else(|| CheckError::UnknownIndividual(id.clone()))
    }

    #[inline]
    pub fn family(&self, id: &FamilyId) -> Result<&Family, CheckError> {
        self.families
            .get(id)
            .ok_or_else(|| CheckError::UnknownFamily(id.clone()))
    }
}

/// Provenance index: entity id -> tag -> source lines.
///
/// Individuals and families share one id namespace here, as they do in the
/// source file. Only used to annotate anomalies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagPositions(BTreeMap<String, BTreeMap<Tag, LineSet>>);

impl TagPositions {
    pub fn new() -> Self { Self::default() }

    /// Records that `tag` of `entity` appeared on `line`.
    pub fn record(&mut self, entity: impl Into<String>, tag: Tag, line: u32) {
        self.0
            .entry(entity.into())
            .or_default()
            .entry(tag)
            .or_default()
            .insert(line);
    }

    pub fn lines(&self, entity: &str, tag: Tag) -> Result<&LineSet, CheckError> {
        self.0
            .get(entity)
            .and_then(|tags| tags.get(&tag))
            .ok_or_else(|| CheckError::MissingProvenance {
                entity: entity.to_string(),
                tag,
            })
    }

    /// Union of several `(entity, tag)` lookups. Fails on the first missing entry.
    pub fn union_of(&self, refs: &[(&str, Tag)]) -> Result<LineSet, CheckError> {
        refs.iter().try_fold(LineSet::new(), |mut acc, &(entity, tag)| {
            acc.extend_from(self.lines(entity, tag)?);
            Ok(acc)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_records_are_integrity_faults() {
        let store = GenealogyStore::new();
        let err = store.individual(&IndividualId::new("@I9@")).unwrap_err();
        assert_eq!(err, CheckError::UnknownIndividual(IndividualId::new("@I9@")));
        assert!(matches!(store.family(&FamilyId::new("@F9@")), Err(CheckError::UnknownFamily(_))));
    }

    #[test]
    fn test_tag_positions_lookup_and_union() {
        let mut tags = TagPositions::new();
        tags.record("@F1@", Tag::Marr, 40);
        tags.record("@F1@", Tag::Div, 44);
        tags.record("@F1@", Tag::Div, 41);

        assert_eq!(tags.lines("@F1@", Tag::Div).unwrap().to_string(), "{41, 44}");
        let lines = tags.union_of(&[("@F1@", Tag::Marr), ("@F1@", Tag::Div)]).unwrap();
        assert_eq!(lines.to_string(), "{40, 41, 44}");
    }

    #[test]
    fn test_tag_positions_missing_tag_is_reported() {
        let mut tags = TagPositions::new();
        tags.record("@I1@", Tag::Fams, 10);

        let err = tags.union_of(&[("@I1@", Tag::Fams), ("@I1@", Tag::Deat)]).unwrap_err();
        assert_eq!(
            err,
            CheckError::MissingProvenance { entity: "@I1@".into(), tag: Tag::Deat }
        );
        assert!(err.to_string().contains("DEAT"));
    }
}
