use anyhow::Result;
use tokio::net::TcpListener;

use crate::cli::Commands;
use bugtracker_api::{ApiState, ServerConfig};
use bugtracker_client::{BugList, BugsApi, ErrorBoundary, HttpBugsApi, RowAction, View};
use bugtracker_core::BugStore;

pub async fn execute(command: Commands, server_url: &str) -> Result<()> {
    if let Commands::Serve { port } = command {
        return serve(port).await;
    }

    let mut list = BugList::new(HttpBugsApi::new(server_url));
    list.load().await;

    match command {
        Commands::List | Commands::Serve { .. } => {}

        Commands::Add { title, description } => {
            list.set_draft(title);
            list.submit_with_description(description.as_deref().unwrap_or_default())
                .await;
        }

        Commands::Start { id } => apply_row_action(&mut list, &id, RowAction::Start).await,

        Commands::Resolve { id } => apply_row_action(&mut list, &id, RowAction::Resolve).await,

        Commands::Status { id, status } => list.set_status(&id, status).await,

        Commands::Delete { id } => apply_row_action(&mut list, &id, RowAction::Delete).await,
    }

    let mut boundary = ErrorBoundary::new();
    match boundary.render(|| list.view()) {
        View::Alert(message) => anyhow::bail!(message),
        view => print!("{view}"),
    }

    Ok(())
}

async fn apply_row_action<A: BugsApi>(list: &mut BugList<A>, id: &str, action: RowAction) {
    tracing::debug!("{} bug {}", action.label(), id);

    match action.target_status() {
        Some(status) => list.set_status(id, status).await,
        None => list.delete(id).await,
    }
}

/// Environment settings, with the port taken from the command line.
fn server_config(port: u16) -> Result<ServerConfig> {
    Ok(ServerConfig::from_env()?.with_port(port))
}

async fn serve(port: u16) -> Result<()> {
    let config = server_config(port)?;

    // Create API state
    let state = ApiState::new(BugStore::new(), config);

    let addr = format!("0.0.0.0:{}", port);
    println!("Bug tracker API running on http://{}", addr);

    let listener = TcpListener::bind(&addr).await?;
    bugtracker_api::serve(listener, state).await
}
