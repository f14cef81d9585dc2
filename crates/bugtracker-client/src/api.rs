use crate::{Error, Result};
use async_trait::async_trait;
use bugtracker_core::{Bug, BugStatus, NewBug};
use reqwest::Client;
use serde::{de::IgnoredAny, Serialize};

/// The four bug endpoints, as seen from the front end.
#[async_trait]
pub trait BugsApi: Send + Sync {
    async fn fetch_bugs(&self) -> Result<Vec<Bug>>;

    async fn create_bug(&self, new_bug: &NewBug) -> Result<Bug>;

    async fn update_bug_status(&self, id: &str, status: BugStatus) -> Result<Bug>;

    async fn delete_bug(&self, id: &str) -> Result<()>;
}

/// [`BugsApi`] over HTTP. One request per call, no retries.
pub struct HttpBugsApi {
    client: Client,
    base_url: String,
}

impl HttpBugsApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn bugs_url(&self) -> String {
        format!("{}/api/bugs", self.base_url)
    }

    fn bug_url(&self, id: &str) -> String {
        format!("{}/api/bugs/{}", self.base_url, id)
    }
}

#[derive(Debug, Serialize)]
struct StatusUpdate {
    status: BugStatus,
}

#[async_trait]
impl BugsApi for HttpBugsApi {
    async fn fetch_bugs(&self) -> Result<Vec<Bug>> {
        let response = self.client.get(self.bugs_url()).send().await?;

        if !response.status().is_success() {
            tracing::debug!("GET /api/bugs returned {}", response.status());
            return Err(Error::FetchFailed);
        }

        Ok(response.json().await?)
    }

    async fn create_bug(&self, new_bug: &NewBug) -> Result<Bug> {
        let response = self
            .client
            .post(self.bugs_url())
            .json(new_bug)
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::debug!("POST /api/bugs returned {}", response.status());
            return Err(Error::CreateFailed);
        }

        Ok(response.json().await?)
    }

    async fn update_bug_status(&self, id: &str, status: BugStatus) -> Result<Bug> {
        let response = self
            .client
            .patch(self.bug_url(id))
            .json(&StatusUpdate { status })
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::debug!("PATCH /api/bugs/{} returned {}", id, response.status());
            return Err(Error::UpdateFailed);
        }

        Ok(response.json().await?)
    }

    async fn delete_bug(&self, id: &str) -> Result<()> {
        let response = self.client.delete(self.bug_url(id)).send().await?;

        if !response.status().is_success() {
            tracing::debug!("DELETE /api/bugs/{} returned {}", id, response.status());
            return Err(Error::DeleteFailed);
        }

        // The body only carries `{"success": true}`.
        let _: IgnoredAny = response.json().await?;
        Ok(())
    }
}
