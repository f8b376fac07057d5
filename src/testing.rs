//! Fixture builder for record graphs.
//!
//! Builds a [`GenealogyStore`] together with a consistent [`TagPositions`]
//! index, handing out one fresh source line per recorded fact in call order.
//! Individuals must be added before the families that link them.
//!
//! ```
//! use kinship_audit::testing::TreeBuilder;
//!
//! let mut tree = TreeBuilder::new();
//! tree.person("@I1@", "John /Doe/").person("@I2@", "Jane /Roe/");
//! tree.family("@F1@", Some("@I1@"), Some("@I2@")).married("@F1@", "2001-06-30");
//! let (store, tags) = tree.build();
//! assert_eq!(store.family_count(), 1);
//! assert!(tags.lines("@I1@", kinship_audit::store::Tag::Fams).is_ok());
//! ```

use crate::store::{Family, FamilyId, GenealogyStore, Individual, IndividualId, Tag, TagPositions};
use chrono::NaiveDate;

#[derive(Debug, Default)]
pub struct TreeBuilder {
    store: GenealogyStore,
    tags: TagPositions,
    next_line: u32,
}

/// Parses an ISO `YYYY-MM-DD` date; panics on malformed fixtures.
pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .unwrap_or_else(|e| panic!("fixture date '{}': {}", s, e))
}

impl TreeBuilder {
    pub fn new() -> Self { Self::default() }

    /// The line the next recorded fact will land on.
    pub fn next_line(&self) -> u32 { self.next_line + 1 }

    fn line(&mut self) -> u32 {
        self.next_line += 1;
        self.next_line
    }

    fn tag(&mut self, entity: &str, tag: Tag) {
        let line = self.line();
        self.tags.record(entity, tag, line);
    }

    fn individual_mut(&mut self, id: &str) -> &mut Individual {
        self.store
            .individuals
            .get_mut(&IndividualId::new(id))
            .unwrap_or_else(|| panic!("fixture individual {} not declared", id))
    }

    fn family_mut(&mut self, id: &str) -> &mut Family {
        self.store
            .families
            .get_mut(&FamilyId::new(id))
            .unwrap_or_else(|| panic!("fixture family {} not declared", id))
    }

    /// A living individual.
    pub fn person(&mut self, id: &str, name: &str) -> &mut Self {
        self.store.insert_individual(Individual {
            id: IndividualId::new(id),
            name: name.to_string(),
            alive: true,
            ..Default::default()
        });
        self
    }

    /// Marks an existing individual dead, optionally with a recorded death date.
    pub fn died(&mut self, id: &str, on: Option<&str>) -> &mut Self {
        let death = on.map(date);
        let indi = self.individual_mut(id);
        indi.alive = false;
        indi.death = death;
        if death.is_some() {
            self.tag(id, Tag::Deat);
        }
        self
    }

    /// A family; each present spouse gets a `FAMS` link.
    pub fn family(&mut self, id: &str, husband: Option<&str>, wife: Option<&str>) -> &mut Self {
        self.store.insert_family(Family {
            id: FamilyId::new(id),
            hid: husband.map(IndividualId::new),
            wid: wife.map(IndividualId::new),
            ..Default::default()
        });
        for (spouse, tag) in [(husband, Tag::Husb), (wife, Tag::Wife)] {
            if let Some(spouse) = spouse {
                self.tag(id, tag);
                self.individual_mut(spouse).spouse.insert(FamilyId::new(id));
                self.tag(spouse, Tag::Fams);
            }
        }
        self
    }

    /// Links `child` into `family` with a `CHIL` and a `FAMC` line.
    pub fn child(&mut self, family: &str, child: &str) -> &mut Self {
        self.family_mut(family).children.insert(IndividualId::new(child));
        self.tag(family, Tag::Chil);
        self.individual_mut(child).child.insert(FamilyId::new(family));
        self.tag(child, Tag::Famc);
        self
    }

    pub fn married(&mut self, family: &str, on: &str) -> &mut Self {
        self.family_mut(family).married = Some(date(on));
        self.tag(family, Tag::Marr);
        self
    }

    pub fn divorced(&mut self, family: &str, on: &str) -> &mut Self {
        self.family_mut(family).divorced = Some(date(on));
        self.tag(family, Tag::Div);
        self
    }

    pub fn store(&self) -> &GenealogyStore { &self.store }
    pub fn tags(&self) -> &TagPositions { &self.tags }

    pub fn build(self) -> (GenealogyStore, TagPositions) { (self.store, self.tags) }
}
