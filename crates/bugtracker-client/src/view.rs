use bugtracker_core::BugStatus;
use std::fmt;

use crate::list::BugListState;

pub const EMPTY_MESSAGE: &str = "No bugs yet";
pub const LOADING_MESSAGE: &str = "Loading...";

/// What the list component shows for a given state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Loading,
    Alert(String),
    Empty { draft_title: String },
    Table { draft_title: String, rows: Vec<Row> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: String,
    pub title: String,
    pub status: BugStatus,
    pub actions: Vec<RowAction>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Start,
    Resolve,
    Delete,
}

impl RowAction {
    pub const ALL: [RowAction; 3] = [RowAction::Start, RowAction::Resolve, RowAction::Delete];

    pub fn label(&self) -> &'static str {
        match self {
            RowAction::Start => "In-Progress",
            RowAction::Resolve => "Resolve",
            RowAction::Delete => "Delete",
        }
    }

    /// The status this action moves a bug to, if it is a transition.
    pub fn target_status(&self) -> Option<BugStatus> {
        match self {
            RowAction::Start => Some(BugStatus::InProgress),
            RowAction::Resolve => Some(BugStatus::Resolved),
            RowAction::Delete => None,
        }
    }
}

impl View {
    /// Accessibility role of the view, `alert` for error messages.
    pub fn role(&self) -> Option<&'static str> {
        match self {
            View::Alert(_) => Some("alert"),
            _ => None,
        }
    }
}

pub fn render(state: &BugListState) -> View {
    if state.loading {
        return View::Loading;
    }
    if let Some(error) = &state.error {
        return View::Alert(error.clone());
    }

    let draft_title = state.draft_title.clone();
    if state.bugs.is_empty() {
        return View::Empty { draft_title };
    }

    let rows = state
        .bugs
        .iter()
        .map(|bug| Row {
            id: bug.id.clone(),
            title: bug.title.clone(),
            status: bug.status,
            actions: RowAction::ALL.to_vec(),
        })
        .collect();

    View::Table { draft_title, rows }
}

fn write_form(f: &mut fmt::Formatter<'_>, draft_title: &str) -> fmt::Result {
    let shown = if draft_title.is_empty() { "Bug title" } else { draft_title };
    writeln!(f, "[{shown}] [Add Bug]")
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Loading => writeln!(f, "{LOADING_MESSAGE}"),
            View::Alert(message) => writeln!(f, "! {message}"),
            View::Empty { draft_title } => {
                write_form(f, draft_title)?;
                writeln!(f, "{EMPTY_MESSAGE}")
            }
            View::Table { draft_title, rows } => {
                write_form(f, draft_title)?;

                let id_width = rows.iter().map(|r| r.id.len()).max().unwrap_or(0).max(2);
                let title_width = rows
                    .iter()
                    .map(|r| r.title.chars().count())
                    .max()
                    .unwrap_or(0)
                    .max("Title".len());
                let status_width = "in-progress".len();

                writeln!(
                    f,
                    "{:<id_width$}  {:<title_width$}  {:<status_width$}  Actions",
                    "ID", "Title", "Status"
                )?;
                for row in rows {
                    let actions: Vec<&str> = row.actions.iter().map(RowAction::label).collect();
                    writeln!(
                        f,
                        "{:<id_width$}  {:<title_width$}  {:<status_width$}  {}",
                        row.id,
                        row.title,
                        row.status.as_str(),
                        actions.join(" | ")
                    )?;
                }
                Ok(())
            }
        }
    }
}
