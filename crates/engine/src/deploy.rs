//! Deployment collaborator.
//!
//! The deploy action only needs something that accepts a [`GeneratedApp`] and
//! reports back. [`SimulatedDeploymentClient`] never leaves the process; a real
//! platform client would implement the same trait.

use appforge_types::{DeployReceipt, GeneratedApp};
use tracing::info;

/// Errors a deployment client can report.
#[derive(Debug, thiserror::Error)]
pub enum DeploymentError {
    #[error("Nothing to deploy: {reason}")]
    NothingToDeploy { reason: String },

    #[error("Deployment to {target} was rejected: {message}")]
    Rejected { target: String, message: String },

    #[error("Deployment to {target} timed out after {timeout_ms}ms")]
    Timeout { target: String, timeout_ms: u64 },
}

/// Trait for deployment platform operations.
#[async_trait::async_trait]
pub trait DeploymentClient: Send + Sync {
    /// Deploy the app and return a receipt.
    async fn deploy(&self, app: &GeneratedApp) -> Result<DeployReceipt, DeploymentError>;

    /// Human-readable platform name (e.g., "Vercel").
    fn target(&self) -> &str;
}

/// Deployment client that only records the request.
#[derive(Debug, Clone)]
pub struct SimulatedDeploymentClient {
    target: String,
}

impl SimulatedDeploymentClient {
    pub fn new(target: impl Into<String>) -> Self {
        Self { target: target.into() }
    }
}

impl Default for SimulatedDeploymentClient {
    fn default() -> Self {
        Self::new("Vercel")
    }
}

#[async_trait::async_trait]
impl DeploymentClient for SimulatedDeploymentClient {
    async fn deploy(&self, app: &GeneratedApp) -> Result<DeployReceipt, DeploymentError> {
        let slug = slugify(&app.title);
        if slug.is_empty() {
            return Err(DeploymentError::NothingToDeploy {
                reason: "app title has no usable characters".into(),
            });
        }
        info!(platform = %self.target, slug = %slug, "simulated deployment");
        Ok(DeployReceipt {
            target: self.target.clone(),
            slug,
            simulated: true,
        })
    }

    fn target(&self) -> &str {
        &self.target
    }
}

/// Lowercase ASCII alphanumerics joined by single dashes.
fn slugify(title: &str) -> String {
    title
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synthesize;

    #[tokio::test]
    async fn simulated_client_returns_receipt_for_target() {
        let client = SimulatedDeploymentClient::default();
        let receipt = client
            .deploy(&synthesize("A todo list app"))
            .await
            .expect("simulated deploy");

        assert_eq!(client.target(), "Vercel");
        assert_eq!(receipt.target, "Vercel");
        assert_eq!(receipt.slug, "a-todo-list-app");
        assert!(receipt.simulated);
    }

    #[tokio::test]
    async fn title_without_ascii_words_is_rejected() {
        let client = SimulatedDeploymentClient::new("Netlify");
        let error = client.deploy(&synthesize("✨ 🚀")).await.unwrap_err();
        assert!(matches!(error, DeploymentError::NothingToDeploy { .. }));
    }

    #[test]
    fn slugify_collapses_punctuation() {
        assert_eq!(slugify("Chat   app, v2!"), "chat-app-v2");
        assert_eq!(slugify("--"), "");
    }
}
