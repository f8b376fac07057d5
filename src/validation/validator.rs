//! The central validator that orchestrates the execution of all rules.
use super::anomaly::{Anomaly, UserStory};
use super::error::CheckResult;
use super::rules::{self, RuleContext};
use crate::config::ValidatorConfig;
use crate::store::{GenealogyStore, TagPositions};
use chrono::Local;
use log::{debug, info, warn};
use rayon::prelude::*;

/// The orchestrator for one validation pass.
///
/// Borrows the record graph and its provenance index, and pins the "present
/// moment" at construction so every rule in the pass agrees on it. Rules are
/// independent, so they may run on rayon's pool; the report order is the same
/// either way.
pub struct Validator<'a> {
    ctx: RuleContext<'a>,
    stories: Vec<UserStory>,
    parallel: bool,
}

impl<'a> Validator<'a> {
    /// Creates a validator running every rule, sequentially, as of now.
    pub fn new(store: &'a GenealogyStore, tags: &'a TagPositions) -> Self {
        Self::with_config(store, tags, &ValidatorConfig::default())
    }

    pub fn with_config(
        store: &'a GenealogyStore,
        tags: &'a TagPositions,
        config: &ValidatorConfig,
    ) -> Self {
        let as_of = config.as_of.unwrap_or_else(|| Local::now().naive_local());
        let ctx = RuleContext::new(store, tags)
            .with_as_of(as_of)
            .with_sibling_limit(config.sibling_limit);
        let stories = UserStory::ALL
            .iter()
            .copied()
            .filter(|story| !config.disabled.contains(story))
            .collect();

        Self { ctx, stories, parallel: config.parallel }
    }

    pub fn context(&self) -> &RuleContext<'a> { &self.ctx }

    /// The stories `run_all` will evaluate, in report order.
    pub fn stories(&self) -> &[UserStory] { &self.stories }

    /// Runs a single rule, whether or not it is enabled for `run_all`.
    pub fn run(&self, story: UserStory) -> CheckResult<Vec<Anomaly>> {
        let anomalies = rules::check(story, &self.ctx).map_err(|e| {
            warn!("{} aborted: {}", story, e);
            e
        })?;
        debug!("{} ({}): {} anomalies", story, story.title(), anomalies.len());
        Ok(anomalies)
    }

    /// Executes all enabled rules and concatenates their anomalies in story order.
    ///
    /// # Returns
    /// - `Ok(Report)` with every anomaly found; an empty report means a clean tree.
    /// - `Err(CheckError)` on the first data-integrity fault. No partial report.
    pub fn run_all(&self) -> CheckResult<Report> {
        let per_story: Vec<Vec<Anomaly>> = if self.parallel {
            self.stories
                .par_iter()
                .map(|&story| self.run(story))
                .collect::<CheckResult<_>>()?
        } else {
            self.stories
                .iter()
                .map(|&story| self.run(story))
                .collect::<CheckResult<_>>()?
        };

        let report = Report { anomalies: per_story.into_iter().flatten().collect() };
        info!(
            "Validated {} individuals and {} families against {} rules: {} anomalies",
            self.ctx.store.individual_count(),
            self.ctx.store.family_count(),
            self.stories.len(),
            report.len()
        );
        Ok(report)
    }
}

/// The concatenated result of a validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    anomalies: Vec<Anomaly>,
}

impl Report {
    pub fn anomalies(&self) -> &[Anomaly] { &self.anomalies }

    pub fn len(&self) -> usize { self.anomalies.len() }

    pub fn is_empty(&self) -> bool { self.anomalies.is_empty() }

    /// The warning lines, one per anomaly, in report order.
    pub fn warnings(&self) -> Vec<String> {
        self.anomalies.iter().map(|a| a.to_string()).collect()
    }

    pub fn count_for(&self, story: UserStory) -> usize {
        self.anomalies.iter().filter(|a| a.story == story).count()
    }
}
