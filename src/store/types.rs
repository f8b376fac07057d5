use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndividualId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FamilyId(pub String);

impl IndividualId {
    pub fn new(id: impl Into<String>) -> Self { Self(id.into()) }
    pub fn as_str(&self) -> &str { &self.0 }
    pub fn is_empty(&self) -> bool { self.0.is_empty() }
}

impl FamilyId {
    pub fn new(id: impl Into<String>) -> Self { Self(id.into()) }
    pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for IndividualId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

impl fmt::Display for FamilyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

/// A person record as handed over by the loader.
///
/// `alive` is computed upstream from the presence of birth/death facts and is
/// trusted as-is; `death` may be absent even for a dead individual.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Individual {
    pub id: IndividualId,
    pub name: String,
    pub alive: bool,
    #[serde(default)]
    pub death: Option<NaiveDate>,
    /// Families in which this individual is a child (family of origin).
    #[serde(default)]
    pub child: BTreeSet<FamilyId>,
    /// Families in which this individual is a spouse.
    #[serde(default)]
    pub spouse: BTreeSet<FamilyId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Family {
    pub id: FamilyId,
    #[serde(default)]
    pub hid: Option<IndividualId>,
    #[serde(default)]
    pub wid: Option<IndividualId>,
    #[serde(default)]
    pub married: Option<NaiveDate>,
    #[serde(default)]
    pub divorced: Option<NaiveDate>,
    #[serde(default)]
    pub children: BTreeSet<IndividualId>,
}

impl Family {
    /// Both spouses, if both are recorded.
    pub fn couple(&self) -> Option<(&IndividualId, &IndividualId)> {
        match (&self.hid, &self.wid) {
            (Some(h), Some(w)) => Some((h, w)),
            _ => None,
        }
    }

    /// The recorded spouses, husband first.
    pub fn spouses(&self) -> impl Iterator<Item = &IndividualId> {
        self.hid.iter().chain(self.wid.iter())
    }

    /// The partner of `id` in this family. Anyone who is not the husband is
    /// treated as the wife's side.
    pub fn partner_of(&self, id: &IndividualId) -> Option<&IndividualId> {
        if self.hid.as_ref() == Some(id) {
            self.wid.as_ref()
        } else {
            self.hid.as_ref()
        }
    }
}

/// The provenance tags a check may cite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Tag {
    Fams,
    Famc,
    Husb,
    Wife,
    Marr,
    Div,
    Deat,
    Chil,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Fams => "FAMS",
            Tag::Famc => "FAMC",
            Tag::Husb => "HUSB",
            Tag::Wife => "WIFE",
            Tag::Marr => "MARR",
            Tag::Div => "DIV",
            Tag::Deat => "DEAT",
            Tag::Chil => "CHIL",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

/// Source line numbers at which a fact was recorded.
///
/// Displays in set form, `{3, 7}`. Use [`LineSet::sorted`] for the sequence
/// form, `[3, 7]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineSet(BTreeSet<u32>);

impl LineSet {
    pub fn new() -> Self { Self::default() }

    pub fn insert(&mut self, line: u32) -> bool { self.0.insert(line) }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ { self.0.iter().copied() }

    /// Returns a new set holding the lines of both operands.
    pub fn union(&self, other: &LineSet) -> LineSet {
        LineSet(self.0.union(&other.0).copied().collect())
    }

    pub fn extend_from(&mut self, other: &LineSet) {
        self.0.extend(other.0.iter().copied());
    }

    pub fn sorted(&self) -> SortedLines<'_> { SortedLines(self) }
}

impl FromIterator<u32> for LineSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self { Self(iter.into_iter().collect()) }
}

fn write_joined(f: &mut fmt::Formatter<'_>, lines: &LineSet) -> fmt::Result {
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", line)?;
    }
    Ok(())
}

impl fmt::Display for LineSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        write_joined(f, self)?;
        f.write_str("}")
    }
}

/// Sequence rendering of a [`LineSet`].
#[derive(Debug, Clone, Copy)]
pub struct SortedLines<'a>(&'a LineSet);

impl fmt::Display for SortedLines<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        write_joined(f, self.0)?;
        f.write_str("]")
    }
}
