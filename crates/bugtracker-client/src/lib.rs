pub mod api;
pub mod boundary;
pub mod error;
pub mod list;
pub mod view;

// Re-exports
pub use api::{BugsApi, HttpBugsApi};
pub use boundary::ErrorBoundary;
pub use error::{Error, Result};
pub use list::{Action, BugList, BugListState};
pub use view::{render, RowAction, View};
