use bugtracker_core::BugStore;
use std::sync::Arc;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct ApiState {
    pub store: BugStore,
    pub config: Arc<ServerConfig>,
}

impl ApiState {
    pub fn new(store: BugStore, config: ServerConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }
}
