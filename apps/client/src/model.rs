//! Wire shapes of the three content documents.
//!
//! Deserialization is deliberately lenient: the server does no schema
//! validation, so the client must tolerate whatever parses. Out-of-range
//! percentages are kept verbatim and only clamped at render time.

use serde::Deserialize;

/// GET /api/info
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileInfo {
    pub name: String,
    pub title: String,
    pub bio: String,
    /// Candidate profile pictures; one is chosen at random per render.
    #[serde(default)]
    pub images: Vec<String>,
}

/// One element of GET /api/languages. Document order is render order.
#[derive(Debug, Clone, Deserialize)]
pub struct LanguageEntry {
    pub name: String,
    pub percentage: i64,
}

/// One element of GET /api/services.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceEntry {
    pub name: String,
    pub description: String,
    pub button_label: String,
}
