//! Messaging hand-off for service cards.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Matches JavaScript's `encodeURIComponent`: alphanumerics and
/// `-_.!~*'()` pass through, everything else is percent-encoded.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Where service enquiries land. Fixed configuration, never user input.
#[derive(Debug, Clone)]
pub struct HandoffConfig {
    pub domain: String,
    pub recipient: String,
}

impl Default for HandoffConfig {
    fn default() -> Self {
        Self {
            domain: "wa.me".to_string(),
            recipient: "966547540321".to_string(),
        }
    }
}

/// Builds the deep link a service card opens, with the enquiry message
/// parameterized by the service name.
pub fn handoff_url(config: &HandoffConfig, service_name: &str) -> String {
    let message =
        format!("Hello, I'm interested in `{service_name}` and I want you to make me a project");
    let encoded = utf8_percent_encode(&message, COMPONENT);
    format!(
        "https://{}/{}?text={}",
        config.domain, config.recipient, encoded
    )
}
