//! Rule evaluation over the record graph.
//!
//! Rules never fail on a violation; violations are returned as [`Anomaly`]
//! values. They fail only on [`CheckError`], when the inputs are internally
//! inconsistent.
pub mod anomaly;
pub mod error;
pub mod rules;
pub mod validator;

pub use anomaly::{Anomaly, LineRef, Scope, UserStory};
pub use error::{CheckError, CheckResult};
pub use rules::RuleContext;
pub use validator::{Report, Validator};
