//! Incest rules: US17 (no marriages to children), US18 (siblings should not
//! marry), US19 (first cousins should not marry) and US20 (aunts and uncles
//! should not marry nieces or nephews).
use crate::analysis::{aunts_and_uncles, get_parents, get_parents_famc};
use crate::store::{IndividualId, Tag};
use crate::validation::anomaly::{Anomaly, LineRef, UserStory};
use crate::validation::error::CheckResult;
use crate::validation::rules::RuleContext;
use std::collections::BTreeSet;

/// Flags individuals married to someone who is a child of any of their
/// spousal families.
pub fn marriages_to_children(ctx: &RuleContext<'_>) -> CheckResult<Vec<Anomaly>> {
    let mut anomalies = Vec::new();

    for (indi_id, individual) in &ctx.store.individuals {
        if individual.spouse.is_empty() {
            continue;
        }

        let mut spouses: BTreeSet<&IndividualId> = BTreeSet::new();
        let mut children: BTreeSet<&IndividualId> = BTreeSet::new();
        for fam_id in &individual.spouse {
            let family = ctx.store.family(fam_id)?;
            children.extend(family.children.iter());
            spouses.extend(family.partner_of(indi_id));
        }

        let married_children: Vec<&str> = spouses
            .intersection(&children)
            .map(|id| id.as_str())
            .collect();
        if married_children.is_empty() {
            continue;
        }

        let lines = ctx.tags.lines(indi_id.as_str(), Tag::Fams)?;
        anomalies.push(Anomaly::new(
            UserStory::NoMarriagesToChildren,
            LineRef::Set(lines.clone()),
            format!(
                "{} is married to their child(ren) {}!",
                individual.name,
                married_children.join(" ")
            ),
        ));
    }
    Ok(anomalies)
}

/// Flags couples who are children of a common family, once per shared family.
pub fn marriages_to_siblings(ctx: &RuleContext<'_>) -> CheckResult<Vec<Anomaly>> {
    let mut anomalies = Vec::new();

    for family in ctx.store.families.values() {
        let Some((hid, wid)) = family.couple() else { continue };
        let husband = ctx.store.individual(hid)?;
        let wife = ctx.store.individual(wid)?;

        for _shared in husband.child.intersection(&wife.child) {
            let lines = ctx
                .tags
                .union_of(&[(hid.as_str(), Tag::Fams), (wid.as_str(), Tag::Fams)])?;
            anomalies.push(Anomaly::new(
                UserStory::SiblingsShouldNotMarry,
                LineRef::Set(lines),
                format!(
                    "{} and {} are siblings and married to each other!",
                    husband.name, wife.name
                ),
            ));
        }
    }
    Ok(anomalies)
}

/// Flags couples whose parents come from a common family while the couple
/// themselves share no parent.
///
/// The shared-parent guard leaves siblings to [`marriages_to_siblings`].
pub fn first_cousins_married(ctx: &RuleContext<'_>) -> CheckResult<Vec<Anomaly>> {
    let mut anomalies = Vec::new();

    for (fam_id, family) in &ctx.store.families {
        let Some((hid, wid)) = family.couple() else { continue };
        let husband = ctx.store.individual(hid)?;
        let wife = ctx.store.individual(wid)?;

        let h_parents = get_parents(ctx.store, hid)?;
        let w_parents = get_parents(ctx.store, wid)?;
        let h_grand_families = get_parents_famc(ctx.store, hid)?;
        let w_grand_families = get_parents_famc(ctx.store, wid)?;

        let share_grandparents = !h_grand_families.is_disjoint(&w_grand_families);
        let share_parents = !h_parents.is_disjoint(&w_parents);
        if share_grandparents && !share_parents {
            let lines = ctx.tags.union_of(&[
                (fam_id.as_str(), Tag::Husb),
                (fam_id.as_str(), Tag::Wife),
                (hid.as_str(), Tag::Fams),
                (wid.as_str(), Tag::Fams),
            ])?;
            anomalies.push(Anomaly::new(
                UserStory::FirstCousinsShouldNotMarry,
                LineRef::Set(lines),
                format!("{} is married to his first cousin {}!", husband.name, wife.name),
            ));
        }
    }
    Ok(anomalies)
}

/// Flags individuals who share a spousal family with one of their aunts or
/// uncles, once per such relative.
pub fn marriage_aunts_uncles(ctx: &RuleContext<'_>) -> CheckResult<Vec<Anomaly>> {
    let mut anomalies = Vec::new();

    for (indi_id, individual) in &ctx.store.individuals {
        if individual.spouse.is_empty() {
            continue;
        }

        for relative_id in aunts_and_uncles(ctx.store, indi_id)? {
            let relative = ctx.store.individual(&relative_id)?;
            if relative.spouse.is_disjoint(&individual.spouse) {
                continue;
            }

            let lines = ctx.tags.lines(indi_id.as_str(), Tag::Fams)?;
            anomalies.push(Anomaly::new(
                UserStory::AuntsAndUnclesShouldNotMarry,
                LineRef::Set(lines.clone()),
                format!("{} married to their uncle or aunt.", individual.name),
            ));
        }
    }
    Ok(anomalies)
}
