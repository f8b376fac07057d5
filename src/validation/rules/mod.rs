//! The marriage-legality rules. Each is a pure function over a [`RuleContext`].
use super::anomaly::{Anomaly, UserStory};
use super::error::CheckResult;
use crate::store::{GenealogyStore, TagPositions};
use chrono::{Local, NaiveDateTime};

pub mod chronology;
pub mod family_size;
pub mod kinship;
pub mod marriage;

pub use chronology::{divorce_before_death, marriage_before_death, marriage_before_divorce};
pub use family_size::sibling_counts;
pub use kinship::{
    first_cousins_married, marriage_aunts_uncles, marriages_to_children, marriages_to_siblings,
};
pub use marriage::bigamy;

/// Default threshold for US15: a family with this many children is flagged.
pub const DEFAULT_SIBLING_LIMIT: usize = 15;

/// Everything a rule reads. Borrowed for the duration of one pass.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub store: &'a GenealogyStore,
    pub tags: &'a TagPositions,
    /// The "present moment" for rules that ask whether a marriage is ongoing.
    pub as_of: NaiveDateTime,
    pub sibling_limit: usize,
}

impl<'a> RuleContext<'a> {
    /// A context pinned to the local clock at the time of the call.
    pub fn new(store: &'a GenealogyStore, tags: &'a TagPositions) -> Self {
        Self {
            store,
            tags,
            as_of: Local::now().naive_local(),
            sibling_limit: DEFAULT_SIBLING_LIMIT,
        }
    }

    pub fn with_as_of(mut self, as_of: NaiveDateTime) -> Self {
        self.as_of = as_of;
        self
    }

    pub fn with_sibling_limit(mut self, limit: usize) -> Self {
        self.sibling_limit = limit;
        self
    }
}

/// Runs the rule that implements `story`.
pub fn check(story: UserStory, ctx: &RuleContext<'_>) -> CheckResult<Vec<Anomaly>> {
    match story {
        UserStory::MarriageBeforeDivorce => marriage_before_divorce(ctx),
        UserStory::MarriageBeforeDeath => marriage_before_death(ctx),
        UserStory::DivorceBeforeDeath => divorce_before_death(ctx),
        UserStory::NoBigamy => bigamy(ctx),
        UserStory::FewerThan15Siblings => sibling_counts(ctx),
        UserStory::NoMarriagesToChildren => marriages_to_children(ctx),
        UserStory::SiblingsShouldNotMarry => marriages_to_siblings(ctx),
        UserStory::FirstCousinsShouldNotMarry => first_cousins_married(ctx),
        UserStory::AuntsAndUnclesShouldNotMarry => marriage_aunts_uncles(ctx),
    }
}
