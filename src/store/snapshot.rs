//! A complete hand-over from the loader: both collections plus provenance.
use super::registry::{GenealogyStore, TagPositions};
use serde::{Deserialize, Serialize};
use std::io::Read;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Malformed snapshot: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(flatten)]
    pub store: GenealogyStore,
    #[serde(default)]
    pub tag_positions: TagPositions,
}

impl Snapshot {
    pub fn from_json_str(s: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_reader(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{FamilyId, IndividualId, Tag};
    use chrono::NaiveDate;

    const SAMPLE: &str = r#"{
        "individuals": {
            "@I1@": { "id": "@I1@", "name": "Ann /Doe/", "alive": false,
                      "death": "2019-01-01", "spouse": ["@F1@"] }
        },
        "families": {
            "@F1@": { "id": "@F1@", "wid": "@I1@", "married": "2020-01-01" }
        },
        "tag_positions": {
            "@I1@": { "DEAT": [7], "FAMS": [9] },
            "@F1@": { "MARR": [21] }
        }
    }"#;

    #[test]
    fn test_snapshot_parses_records_and_provenance() {
        let snap = Snapshot::from_json_str(SAMPLE).expect("sample parses");
        let ann = snap.store.individual(&IndividualId::new("@I1@")).unwrap();
        assert_eq!(ann.death, NaiveDate::from_ymd_opt(2019, 1, 1));
        assert!(ann.child.is_empty());

        let fam = snap.store.family(&FamilyId::new("@F1@")).unwrap();
        assert_eq!(fam.hid, None);
        assert_eq!(snap.tag_positions.lines("@F1@", Tag::Marr).unwrap().to_string(), "{21}");
    }

    #[test]
    fn test_snapshot_rejects_bad_dates() {
        let bad = SAMPLE.replace("2019-01-01", "01 JAN 2019");
        assert!(matches!(Snapshot::from_json_str(&bad), Err(SnapshotError::Parse(_))));
    }
}
