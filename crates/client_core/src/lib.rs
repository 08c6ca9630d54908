use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::{Category, Project},
    protocol::ProjectsResponse,
};
use tracing::{debug, warn};
use url::Url;

pub mod config;
pub mod error;
pub mod showcase;

pub use config::ShowcaseConfig;
pub use error::FetchError;
pub use showcase::{
    FetchRequest, RequestSeq, RequestStatus, ShowcaseEvent, ShowcaseState, ShowcaseView,
    FAILURE_CAPTION, FAILURE_TITLE,
};

/// Anything that can list projects for a category.
#[async_trait]
pub trait ProjectSource: Send + Sync {
    async fn fetch_projects(&self, category: Category) -> Result<Vec<Project>, FetchError>;
}

/// HTTP client for the project listing endpoint and the images it links to.
#[derive(Debug, Clone)]
pub struct ProjectsClient {
    http: Client,
    api_url: Url,
}

impl ProjectsClient {
    pub fn new(api_url: Url) -> Self {
        Self::with_http_client(Client::new(), api_url)
    }

    pub fn with_http_client(http: Client, api_url: Url) -> Self {
        Self { http, api_url }
    }

    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    /// `<api_url>?category=<id>`, keeping any query the configured url already has.
    pub fn listing_url(&self, category: Category) -> Url {
        let mut url = self.api_url.clone();
        url.query_pairs_mut().append_pair("category", category.id());
        url
    }

    pub async fn fetch_projects(&self, category: Category) -> Result<Vec<Project>, FetchError> {
        let response = self
            .http
            .get(self.listing_url(category))
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body: ProjectsResponse = response.json().await.map_err(FetchError::Decode)?;
        Ok(body.into_projects())
    }

    pub async fn fetch_image(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let bytes = response.bytes().await.map_err(FetchError::Transport)?;
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl ProjectSource for ProjectsClient {
    async fn fetch_projects(&self, category: Category) -> Result<Vec<Project>, FetchError> {
        ProjectsClient::fetch_projects(self, category).await
    }
}

/// Runs one fetch and turns its outcome into the event that completes it.
pub async fn run_fetch<S>(source: &S, request: FetchRequest) -> ShowcaseEvent
where
    S: ProjectSource + ?Sized,
{
    let FetchRequest { seq, category } = request;
    debug!(seq = seq.0, %category, "fetching projects");
    match source.fetch_projects(category).await {
        Ok(projects) => {
            debug!(seq = seq.0, %category, count = projects.len(), "projects loaded");
            ShowcaseEvent::FetchSucceeded { seq, projects }
        }
        Err(err) => {
            warn!(seq = seq.0, %category, error = ?err, "project fetch failed");
            ShowcaseEvent::FetchFailed { seq }
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
