//! Point predicates over a single individual or family.
use crate::store::{FamilyId, GenealogyStore, IndividualId};
use crate::validation::CheckResult;
use chrono::NaiveDateTime;

pub fn is_alive(store: &GenealogyStore, id: &IndividualId) -> CheckResult<bool> {
    Ok(store.individual(id)?.alive)
}

/// Whether the spouses of `family_id` are presently married as of `as_of`.
///
/// Not married once a divorce dated strictly before `as_of` is recorded, when
/// either spouse is unknown, or when either spouse is no longer alive. Dates
/// are taken at midnight, so a divorce dated today has already happened.
pub fn is_married(
    store: &GenealogyStore,
    family_id: &FamilyId,
    as_of: NaiveDateTime,
) -> CheckResult<bool> {
    let family = store.family(family_id)?;

    let divorced_at = family.divorced.and_then(|d| d.and_hms_opt(0, 0, 0));
    if divorced_at.is_some_and(|divorced| divorced < as_of) {
        return Ok(false);
    }

    let Some((hid, wid)) = family.couple() else {
        return Ok(false);
    };

    Ok(is_alive(store, hid)? && is_alive(store, wid)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{date, TreeBuilder};
    use crate::validation::CheckError;

    fn noon(s: &str) -> NaiveDateTime {
        date(s).and_hms_opt(12, 0, 0).unwrap()
    }

    fn couple() -> TreeBuilder {
        let mut tree = TreeBuilder::new();
        tree.person("@I1@", "John /Doe/").person("@I2@", "Jane /Roe/");
        tree.family("@F1@", Some("@I1@"), Some("@I2@"));
        tree
    }

    #[test]
    fn test_living_undivorced_couple_is_married() {
        let tree = couple();
        assert!(is_married(tree.store(), &FamilyId::new("@F1@"), noon("2024-05-01")).unwrap());
    }

    #[test]
    fn test_past_divorce_ends_marriage() {
        let mut tree = couple();
        tree.divorced("@F1@", "2010-03-04");
        assert!(!is_married(tree.store(), &FamilyId::new("@F1@"), noon("2024-05-01")).unwrap());
        // Same-day divorce has already happened by noon.
        assert!(!is_married(tree.store(), &FamilyId::new("@F1@"), noon("2010-03-04")).unwrap());
    }

    #[test]
    fn test_future_divorce_keeps_marriage() {
        let mut tree = couple();
        tree.divorced("@F1@", "2030-01-01");
        assert!(is_married(tree.store(), &FamilyId::new("@F1@"), noon("2024-05-01")).unwrap());
    }

    #[test]
    fn test_dead_spouse_ends_marriage() {
        let mut tree = couple();
        tree.died("@I2@", None);
        assert!(!is_alive(tree.store(), &IndividualId::new("@I2@")).unwrap());
        assert!(!is_married(tree.store(), &FamilyId::new("@F1@"), noon("2024-05-01")).unwrap());
    }

    #[test]
    fn test_family_without_both_spouses_is_never_married() {
        let mut tree = TreeBuilder::new();
        tree.person("@I1@", "John /Doe/");
        tree.family("@F1@", Some("@I1@"), None).family("@F2@", None, None);
        let as_of = noon("2024-05-01");
        assert!(!is_married(tree.store(), &FamilyId::new("@F1@"), as_of).unwrap());
        assert!(!is_married(tree.store(), &FamilyId::new("@F2@"), as_of).unwrap());
    }

    #[test]
    fn test_unknown_spouse_is_an_integrity_fault() {
        let (mut store, _) = couple().build();
        store.individuals.remove(&IndividualId::new("@I2@"));
        let err = is_married(&store, &FamilyId::new("@F1@"), noon("2024-05-01")).unwrap_err();
        assert_eq!(err, CheckError::UnknownIndividual(IndividualId::new("@I2@")));
    }
}
