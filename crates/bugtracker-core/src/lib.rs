pub mod bug;
pub mod error;
pub mod store;
pub mod validation;

// Re-exports
pub use bug::{Bug, BugPatch, BugStatus, NewBug};
pub use error::{Error, Result};
pub use store::BugStore;
pub use validation::{validate_bug_patch, validate_bug_payload, Validation};
