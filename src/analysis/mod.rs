//! Read-only traversals over the record graph shared by every rule.
pub mod ancestry;
pub mod status;

pub use ancestry::{aunts_and_uncles, get_parents, get_parents_famc};
pub use status::{is_alive, is_married};
