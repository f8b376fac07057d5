//! Event-ordering rules: US04 (marriage before divorce), US05 (marriage
//! before death) and US06 (divorce before death).
use crate::store::{Family, Tag};
use crate::validation::anomaly::{Anomaly, LineRef, UserStory};
use crate::validation::error::CheckResult;
use crate::validation::rules::RuleContext;
use chrono::NaiveDate;

/// Flags families whose marriage is dated after their divorce.
pub fn marriage_before_divorce(ctx: &RuleContext<'_>) -> CheckResult<Vec<Anomaly>> {
    let mut anomalies = Vec::new();

    for (fam_id, family) in &ctx.store.families {
        if let (Some(married), Some(divorced)) = (family.married, family.divorced) {
            if married > divorced {
                let lines = ctx
                    .tags
                    .union_of(&[(fam_id.as_str(), Tag::Marr), (fam_id.as_str(), Tag::Div)])?;
                anomalies.push(Anomaly::new(
                    UserStory::MarriageBeforeDivorce,
                    LineRef::Set(lines),
                    format!("Divorced before marriage in family {}.", fam_id),
                ));
            }
        }
    }
    Ok(anomalies)
}

/// Flags each spousal family married after the individual's recorded death.
pub fn marriage_before_death(ctx: &RuleContext<'_>) -> CheckResult<Vec<Anomaly>> {
    event_after_death(ctx, UserStory::MarriageBeforeDeath, Tag::Marr, |f| f.married, "married")
}

/// Flags each spousal family divorced after the individual's recorded death.
pub fn divorce_before_death(ctx: &RuleContext<'_>) -> CheckResult<Vec<Anomaly>> {
    event_after_death(ctx, UserStory::DivorceBeforeDeath, Tag::Div, |f| f.divorced, "divorced")
}

fn event_after_death(
    ctx: &RuleContext<'_>,
    story: UserStory,
    event_tag: Tag,
    event_date: fn(&Family) -> Option<NaiveDate>,
    verb: &str,
) -> CheckResult<Vec<Anomaly>> {
    let mut anomalies = Vec::new();

    for (indi_id, individual) in &ctx.store.individuals {
        let Some(death) = individual.death else { continue };

        for fam_id in &individual.spouse {
            let family = ctx.store.family(fam_id)?;
            if event_date(family).is_some_and(|date| date > death) {
                let lines = ctx
                    .tags
                    .union_of(&[(indi_id.as_str(), Tag::Deat), (fam_id.as_str(), event_tag)])?;
                anomalies.push(Anomaly::new(
                    story,
                    LineRef::Set(lines),
                    format!("{} was {} after their death.", individual.name, verb),
                ));
            }
        }
    }
    Ok(anomalies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TreeBuilder;
    use rstest::rstest;

    fn couple() -> TreeBuilder {
        let mut tree = TreeBuilder::new();
        tree.person("@I1@", "Xavier /Lee/").person("@I2@", "Yara /Lee/");
        tree.family("@F1@", Some("@I1@"), Some("@I2@"));
        tree
    }

    fn render(anomalies: CheckResult<Vec<Anomaly>>) -> Vec<String> {
        anomalies.unwrap().iter().map(|a| a.to_string()).collect()
    }

    #[test]
    fn test_divorce_dated_before_marriage() {
        let mut tree = couple();
        let marr_line = tree.next_line();
        tree.married("@F1@", "2020-01-01").divorced("@F1@", "2019-01-01");

        let ctx = RuleContext::new(tree.store(), tree.tags());
        assert_eq!(
            render(marriage_before_divorce(&ctx)),
            vec![format!(
                "ANOMALY: FAMILY: US04, line {{{}, {}}}, Divorced before marriage in family @F1@.",
                marr_line,
                marr_line + 1
            )]
        );
    }

    #[rstest]
    #[case(Some("2000-01-01"), Some("2005-01-01"), 0)]
    #[case(Some("2005-01-01"), Some("2005-01-01"), 0)]
    #[case(Some("2005-01-02"), Some("2005-01-01"), 1)]
    #[case(None, Some("2005-01-01"), 0)]
    #[case(Some("2005-01-01"), None, 0)]
    fn test_marriage_divorce_ordering(
        #[case] married: Option<&str>,
        #[case] divorced: Option<&str>,
        #[case] expected: usize,
    ) {
        let mut tree = couple();
        if let Some(d) = married {
            tree.married("@F1@", d);
        }
        if let Some(d) = divorced {
            tree.divorced("@F1@", d);
        }
        let ctx = RuleContext::new(tree.store(), tree.tags());
        assert_eq!(marriage_before_divorce(&ctx).unwrap().len(), expected);
    }

    #[test]
    fn test_married_after_death() {
        let mut tree = couple();
        tree.died("@I1@", Some("2019-01-01")).married("@F1@", "2020-01-01");
        let ctx = RuleContext::new(tree.store(), tree.tags());

        let lines = tree
            .tags()
            .union_of(&[("@I1@", Tag::Deat), ("@F1@", Tag::Marr)])
            .unwrap();
        assert_eq!(
            render(marriage_before_death(&ctx)),
            vec![format!(
                "ANOMALY: INDIVIDUAL: US05, line {}, Xavier /Lee/ was married after their death.",
                lines
            )]
        );
        assert!(divorce_before_death(&ctx).unwrap().is_empty());
    }

    #[test]
    fn test_divorced_after_death_reported_per_spouse() {
        let mut tree = couple();
        tree.married("@F1@", "2000-01-01")
            .divorced("@F1@", "2010-06-01")
            .died("@I1@", Some("2009-01-01"))
            .died("@I2@", Some("2008-01-01"));
        let ctx = RuleContext::new(tree.store(), tree.tags());

        let warnings = render(divorce_before_death(&ctx));
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].starts_with("ANOMALY: INDIVIDUAL: US06, line {"));
        assert!(warnings[0].ends_with("Xavier /Lee/ was divorced after their death."));
        assert!(warnings[1].ends_with("Yara /Lee/ was divorced after their death."));
        assert!(marriage_before_death(&ctx).unwrap().is_empty());
    }

    #[test]
    fn test_death_without_date_is_not_checked() {
        let mut tree = couple();
        tree.died("@I1@", None).married("@F1@", "2020-01-01");
        let ctx = RuleContext::new(tree.store(), tree.tags());
        assert!(marriage_before_death(&ctx).unwrap().is_empty());
    }

    #[test]
    fn test_missing_death_positions_abort() {
        let mut tree = couple();
        tree.died("@I1@", Some("2019-01-01")).married("@F1@", "2020-01-01");
        let (store, _) = tree.build();
        let mut tags = crate::store::TagPositions::new();
        tags.record("@F1@", Tag::Marr, 1);
        let ctx = RuleContext::new(&store, &tags);
        let err = marriage_before_death(&ctx).unwrap_err();
        assert!(err.to_string().contains("DEAT"), "{}", err);
    }
}
