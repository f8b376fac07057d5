//! The warning a rule emits when it finds a violation.
use crate::store::LineSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether an anomaly is reported against a person or a family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    Individual,
    Family,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Scope::Individual => "INDIVIDUAL",
            Scope::Family => "FAMILY",
        })
    }
}

/// The consistency rules this crate knows how to check.
///
/// Discriminants are the user-story numbers; ordering follows them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum UserStory {
    #[serde(rename = "US04")]
    MarriageBeforeDivorce = 4,
    #[serde(rename = "US05")]
    MarriageBeforeDeath = 5,
    #[serde(rename = "US06")]
    DivorceBeforeDeath = 6,
    #[serde(rename = "US11")]
    NoBigamy = 11,
    #[serde(rename = "US15")]
    FewerThan15Siblings = 15,
    #[serde(rename = "US17")]
    NoMarriagesToChildren = 17,
    #[serde(rename = "US18")]
    SiblingsShouldNotMarry = 18,
    #[serde(rename = "US19")]
    FirstCousinsShouldNotMarry = 19,
    #[serde(rename = "US20")]
    AuntsAndUnclesShouldNotMarry = 20,
}

impl UserStory {
    pub const ALL: [UserStory; 9] = [
        UserStory::MarriageBeforeDivorce,
        UserStory::MarriageBeforeDeath,
        UserStory::DivorceBeforeDeath,
        UserStory::NoBigamy,
        UserStory::FewerThan15Siblings,
        UserStory::NoMarriagesToChildren,
        UserStory::SiblingsShouldNotMarry,
        UserStory::FirstCousinsShouldNotMarry,
        UserStory::AuntsAndUnclesShouldNotMarry,
    ];

    pub fn number(&self) -> u8 { *self as u8 }

    pub fn scope(&self) -> Scope {
        match self {
            UserStory::MarriageBeforeDeath
            | UserStory::DivorceBeforeDeath
            | UserStory::NoBigamy => Scope::Individual,
            _ => Scope::Family,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            UserStory::MarriageBeforeDivorce => "Marriage before divorce",
            UserStory::MarriageBeforeDeath => "Marriage before death",
            UserStory::DivorceBeforeDeath => "Divorce before death",
            UserStory::NoBigamy => "No bigamy",
            UserStory::FewerThan15Siblings => "Fewer than 15 siblings",
            UserStory::NoMarriagesToChildren => "No marriages to children",
            UserStory::SiblingsShouldNotMarry => "Siblings should not marry",
            UserStory::FirstCousinsShouldNotMarry => "First cousins should not marry",
            UserStory::AuntsAndUnclesShouldNotMarry => "Aunts and uncles should not marry nieces or nephews",
        }
    }
}

impl fmt::Display for UserStory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "US{:02}", self.number())
    }
}

impl FromStr for UserStory {
    type Err = String;

    /// Accepts `US04`, `us4` or a bare `4`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix("US")
            .or_else(|| trimmed.strip_prefix("us"))
            .unwrap_or(trimmed);
        let number: u8 = digits
            .parse()
            .map_err(|_| format!("Not a user story: '{}'", s))?;
        UserStory::ALL
            .iter()
            .copied()
            .find(|story| story.number() == number)
            .ok_or_else(|| format!("Unknown user story: US{:02}", number))
    }
}

/// How the provenance of an anomaly is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineRef {
    /// `{3, 7}`
    Set(LineSet),
    /// `[3, 7]`
    Sorted(LineSet),
}

impl LineRef {
    pub fn lines(&self) -> &LineSet {
        match self {
            LineRef::Set(lines) | LineRef::Sorted(lines) => lines,
        }
    }
}

impl fmt::Display for LineRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineRef::Set(lines) => write!(f, "{}", lines),
            LineRef::Sorted(lines) => write!(f, "{}", lines.sorted()),
        }
    }
}

/// A rule violation, with the source lines that evidence it.
///
/// Its `Display` form is the warning line consumed by reporting:
/// `ANOMALY: FAMILY: US04, line {12, 15}, Divorced before marriage in family @F1@.`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anomaly {
    pub story: UserStory,
    pub lines: LineRef,
    pub message: String,
}

impl Anomaly {
    pub fn new(story: UserStory, lines: LineRef, message: impl Into<String>) -> Self {
        Self { story, lines, message: message.into() }
    }

    pub fn scope(&self) -> Scope { self.story.scope() }
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ANOMALY: {}: {}, line {}, {}",
            self.scope(),
            self.story,
            self.lines,
            self.message
        )
    }
}
