//! Content Store — the authored JSON documents backing the API.
//!
//! Documents are read fresh from storage on every call (no caching, no
//! in-memory state), so concurrent requests never need to coordinate.
//! The store returns the raw stored bytes: responses must be byte-for-byte
//! what the author wrote, with no reordering or field loss from a
//! parse/re-serialize round trip. Parsing is validation only.

use std::fmt;
use std::path::PathBuf;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// The three documents the API exposes, each mapping 1:1 to a stored file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Info,
    Languages,
    Services,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 3] = [
        DocumentKind::Info,
        DocumentKind::Languages,
        DocumentKind::Services,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DocumentKind::Info => "info",
            DocumentKind::Languages => "languages",
            DocumentKind::Services => "services",
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            DocumentKind::Info => "info.json",
            DocumentKind::Languages => "languages.json",
            DocumentKind::Services => "services.json",
        }
    }

    /// The fixed, user-facing error message for a failed read of this kind.
    pub fn error_message(self) -> String {
        format!("Failed to load {} data", self.as_str())
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not read {kind} document: {source}")]
    Read {
        kind: DocumentKind,
        source: std::io::Error,
    },

    #[error("{kind} document is not valid JSON: {source}")]
    Malformed {
        kind: DocumentKind,
        source: serde_json::Error,
    },
}

impl StoreError {
    pub fn kind(&self) -> DocumentKind {
        match self {
            StoreError::Read { kind, .. } | StoreError::Malformed { kind, .. } => *kind,
        }
    }
}

/// Read access to the Content Store.
///
/// Carried in `AppState` as `Arc<dyn ContentStore>` so tests can substitute
/// a store that fails on demand.
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn load(&self, kind: DocumentKind) -> Result<Bytes, StoreError>;
}

/// Filesystem-backed store rooted at the content directory.
pub struct FsContentStore {
    root: PathBuf,
}

impl FsContentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl ContentStore for FsContentStore {
    async fn load(&self, kind: DocumentKind) -> Result<Bytes, StoreError> {
        let path = self.root.join(kind.file_name());
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|source| StoreError::Read { kind, source })?;

        // Validate only; the response body is the stored bytes, untouched.
        serde_json::from_slice::<serde_json::Value>(&bytes)
            .map_err(|source| StoreError::Malformed { kind, source })?;

        Ok(Bytes::from(bytes))
    }
}
