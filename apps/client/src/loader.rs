//! Data loader — one GET per content document, independent failure.
//!
//! A failed fetch is a value, not an exception: callers get `Absent` with
//! the reason and must decide what an empty section looks like. Nothing is
//! retried and no client-side timeout is enforced; a failure is terminal
//! for that document on this page load.

use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::warn;

use crate::model::{LanguageEntry, ProfileInfo, ServiceEntry};

/// Why a document could not be loaded.
#[derive(Debug, Error)]
pub enum FetchFailure {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status: {0}")]
    Status(StatusCode),

    #[error("response body is not usable JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Outcome of one document fetch. `Absent` is a handled terminal state;
/// the renderer leaves that section untouched.
#[derive(Debug)]
pub enum FetchOutcome<T> {
    Loaded(T),
    Absent(FetchFailure),
}

impl<T> FetchOutcome<T> {
    pub fn is_loaded(&self) -> bool {
        matches!(self, FetchOutcome::Loaded(_))
    }

    pub fn as_loaded(&self) -> Option<&T> {
        match self {
            FetchOutcome::Loaded(value) => Some(value),
            FetchOutcome::Absent(_) => None,
        }
    }
}

/// Fetches the three documents from the site's own origin under the fixed
/// `/api/` prefix. The three fetches are issued concurrently by callers
/// (`tokio::join!`); the loader itself holds no mutable state.
pub struct DataLoader {
    http: Client,
    base: Url,
}

impl DataLoader {
    pub fn new(base: Url) -> Self {
        Self {
            http: Client::new(),
            base,
        }
    }

    pub async fn profile(&self) -> FetchOutcome<ProfileInfo> {
        self.fetch("info").await
    }

    pub async fn languages(&self) -> FetchOutcome<Vec<LanguageEntry>> {
        self.fetch("languages").await
    }

    pub async fn services(&self) -> FetchOutcome<Vec<ServiceEntry>> {
        self.fetch("services").await
    }

    async fn fetch<T: DeserializeOwned>(&self, resource: &str) -> FetchOutcome<T> {
        match self.fetch_inner(resource).await {
            Ok(value) => FetchOutcome::Loaded(value),
            Err(failure) => {
                warn!("could not load {resource}: {failure}");
                FetchOutcome::Absent(failure)
            }
        }
    }

    async fn fetch_inner<T: DeserializeOwned>(
        &self,
        resource: &str,
    ) -> Result<T, FetchFailure> {
        let mut url = self.base.clone();
        url.set_path(&format!("/api/{resource}"));

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchFailure::Status(status));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
