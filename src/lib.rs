//! Marriage-legality checks over a genealogical record graph.
//!
//! The loader hands over a [`store::GenealogyStore`] (individuals and
//! families linked by child/spouse edges) and a [`store::TagPositions`]
//! provenance index. Each rule in [`validation::rules`] walks the graph
//! read-only and returns the anomalies it finds; [`Validator`] runs them as
//! one pass.

pub mod analysis;
pub mod config;
pub mod store;
pub mod testing;
pub mod validation;

pub use config::{ConfigError, ValidatorConfig};
pub use store::{GenealogyStore, Snapshot, TagPositions};
pub use validation::{Anomaly, CheckError, Report, UserStory, Validator};
