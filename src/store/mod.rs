//! The record graph and its provenance index, as materialized by a loader.
pub mod registry;
pub mod snapshot;
pub mod types;

pub use registry::{GenealogyStore, TagPositions};
pub use snapshot::{Snapshot, SnapshotError};
pub use types::{Family, FamilyId, Individual, IndividualId, LineSet, SortedLines, Tag};
