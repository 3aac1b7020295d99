//! Hand-off of the subscription URL to whatever manages connection profiles.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Profile import failed: {0}")]
    Failed(String),
}

/// Receives the subscription URL after a successful sign-in.
#[async_trait]
pub trait SubscriptionImporter: Send + Sync {
    async fn import(&self, name: &str, url: &str) -> Result<(), ImportError>;
}

/// Importer that only notes the subscription in the log.
pub struct LogImporter;

#[async_trait]
impl SubscriptionImporter for LogImporter {
    async fn import(&self, name: &str, url: &str) -> Result<(), ImportError> {
        // The URL embeds the subscription token, so only its origin is logged.
        tracing::info!(
            profile = name,
            origin = origin(url),
            "Subscription available for import"
        );
        Ok(())
    }
}

/// Scheme and host of `url`, without path or query.
fn origin(url: &str) -> &str {
    let after_scheme = url.find("://").map_or(0, |i| i + 3);
    match url[after_scheme..].find(['/', '?', '#']) {
        Some(end) => &url[..after_scheme + end],
        None => url,
    }
}
