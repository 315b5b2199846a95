//! View model for the issue-report form.
//!
//! Plain types with no framework imports, so the whole module runs under
//! `cargo test` on the host target. The page wires these into signals.

mod draft;
mod workflow;

pub use draft::{IssueCategory, IssueDraft, RequiredField};
pub use workflow::{RESET_DELAY, SUBMIT_LATENCY, SubmitPhase, missing_fields_notice};
