//! US15: there should be fewer than 15 siblings in a family.
use crate::store::Tag;
use crate::validation::anomaly::{Anomaly, LineRef, UserStory};
use crate::validation::error::CheckResult;
use crate::validation::rules::RuleContext;

/// Flags families with at least `ctx.sibling_limit` children.
///
/// Cites the family's `CHIL` lines and every child's `FAMC` lines, rendered
/// as a sorted sequence.
pub fn sibling_counts(ctx: &RuleContext<'_>) -> CheckResult<Vec<Anomaly>> {
    let mut anomalies = Vec::new();

    for (fam_id, family) in &ctx.store.families {
        if family.children.is_empty() || family.children.len() < ctx.sibling_limit {
            continue;
        }

        let mut lines = ctx.tags.lines(fam_id.as_str(), Tag::Chil)?.clone();
        for child_id in &family.children {
            lines.extend_from(ctx.tags.lines(child_id.as_str(), Tag::Famc)?);
        }

        anomalies.push(Anomaly::new(
            UserStory::FewerThan15Siblings,
            LineRef::Sorted(lines),
            format!(
                "Family {} has more than {} siblings!",
                fam_id,
                ctx.sibling_limit.saturating_sub(1)
            ),
        ));
    }
    Ok(anomalies)
}
