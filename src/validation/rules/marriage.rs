//! US11: no one is in more than one ongoing marriage.
use crate::analysis::is_married;
use crate::store::Tag;
use crate::validation::anomaly::{Anomaly, LineRef, UserStory};
use crate::validation::error::CheckResult;
use crate::validation::rules::RuleContext;

/// Flags every individual with more than one presently-married spousal family.
///
/// Marriages that ended in a past divorce, or whose other spouse is dead or
/// unknown, do not count.
pub fn bigamy(ctx: &RuleContext<'_>) -> CheckResult<Vec<Anomaly>> {
    let mut anomalies = Vec::new();

    for (indi_id, individual) in &ctx.store.individuals {
        let mut active = 0usize;
        for fam_id in &individual.spouse {
            if is_married(ctx.store, fam_id, ctx.as_of)? {
                active += 1;
            }
        }

        if active > 1 {
            let lines = ctx.tags.lines(indi_id.as_str(), Tag::Fams)?;
            anomalies.push(Anomaly::new(
                UserStory::NoBigamy,
                LineRef::Set(lines.clone()),
                format!("{} has more than 1 active marriages!", individual.name),
            ));
        }
    }
    Ok(anomalies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{date, TreeBuilder};
    use chrono::NaiveDateTime;

    fn as_of() -> NaiveDateTime {
        date("2024-05-01").and_hms_opt(9, 30, 0).unwrap()
    }

    /// I1 is a spouse in F1 (with I2) and F2 (with I3).
    fn two_marriages() -> TreeBuilder {
        let mut tree = TreeBuilder::new();
        tree.person("@I1@", "Al /Smith/").person("@I2@", "Bo /Jones/").person("@I3@", "Cy /Brown/");
        tree.family("@F1@", Some("@I1@"), Some("@I2@")).married("@F1@", "1990-02-03");
        tree.family("@F2@", Some("@I1@"), Some("@I3@")).married("@F2@", "2001-09-10");
        tree
    }

    fn run(tree: &TreeBuilder) -> Vec<String> {
        let ctx = RuleContext::new(tree.store(), tree.tags()).with_as_of(as_of());
        bigamy(&ctx).unwrap().iter().map(|a| a.to_string()).collect()
    }

    #[test]
    fn test_two_ongoing_marriages_flagged_once() {
        let tree = two_marriages();
        let fams = tree.tags().lines("@I1@", Tag::Fams).unwrap().clone();
        assert_eq!(fams.len(), 2);

        assert_eq!(
            run(&tree),
            vec![format!(
                "ANOMALY: INDIVIDUAL: US11, line {}, Al /Smith/ has more than 1 active marriages!",
                fams
            )]
        );
    }

    #[test]
    fn test_divorce_before_remarriage_is_fine() {
        let mut tree = two_marriages();
        tree.divorced("@F1@", "1999-12-31");
        assert!(run(&tree).is_empty());
    }

    #[test]
    fn test_widowhood_is_fine() {
        let mut tree = two_marriages();
        tree.died("@I2@", Some("1998-04-04"));
        assert!(run(&tree).is_empty());
    }

    #[test]
    fn test_missing_fams_positions_abort() {
        let tree = two_marriages();
        let (store, _) = tree.build();
        let empty = crate::store::TagPositions::new();
        let ctx = RuleContext::new(&store, &empty).with_as_of(as_of());
        assert!(bigamy(&ctx).is_err());
    }
}
