//! Ancestry resolvers: parents, the parents' families of origin, and the
//! aunts/uncles derived from them.
//!
//! All walks go upward through `Individual::child` links only. A family's
//! `children` set is consulted only when descending from a grandparents'
//! family to its members.
use crate::store::{FamilyId, GenealogyStore, IndividualId};
use crate::validation::CheckResult;
use std::collections::BTreeSet;

/// The recorded husbands and wives of every family in which `id` is a child.
pub fn get_parents(store: &GenealogyStore, id: &IndividualId) -> CheckResult<BTreeSet<IndividualId>> {
    let mut parents = BTreeSet::new();
    if id.is_empty() {
        return Ok(parents);
    }

    for famc in &store.individual(id)?.child {
        parents.extend(store.family(famc)?.spouses().cloned());
    }
    Ok(parents)
}

/// The families of origin of `id`'s parents, i.e. the grandparents' families.
///
/// Walks child -> family of origin -> each recorded spouse -> that spouse's
/// own families of origin. Two people whose results intersect share a
/// grandparents' family.
pub fn get_parents_famc(store: &GenealogyStore, id: &IndividualId) -> CheckResult<BTreeSet<FamilyId>> {
    let mut grand_families = BTreeSet::new();
    if id.is_empty() {
        return Ok(grand_families);
    }

    for famc in &store.individual(id)?.child {
        for parent in store.family(famc)?.spouses() {
            grand_families.extend(store.individual(parent)?.child.iter().cloned());
        }
    }
    Ok(grand_families)
}

/// Every child of the grandparents' families other than `id`'s own parents.
///
/// Half-siblings of a parent count; the parents' spouses-by-marriage do not.
pub fn aunts_and_uncles(store: &GenealogyStore, id: &IndividualId) -> CheckResult<BTreeSet<IndividualId>> {
    let parents = get_parents(store, id)?;
    let mut relatives = BTreeSet::new();

    for fam_id in get_parents_famc(store, id)? {
        relatives.extend(store.family(&fam_id)?.children.iter().cloned());
    }
    relatives.retain(|person| !parents.contains(person));
    Ok(relatives)
}
