//! Hand-off of canonical registrations to the external workflow trigger.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use std::time::Duration;
use tracing::{error, info};

use crate::config::DispatchTarget;
use crate::defaults::Defaults;
use crate::errors::SubmitError;
use crate::types::DispatchEvent;

#[async_trait]
pub trait Dispatcher: Send + Sync {
    /// Account whose site receives the registration.
    fn owner(&self) -> &str;

    /// Submit once. Non-success is terminal; nothing is retried.
    async fn dispatch(&self, event: &DispatchEvent) -> Result<(), SubmitError>;
}

/// Triggers a `repository_dispatch` event on a GitHub repository.
pub struct GithubDispatcher {
    target: DispatchTarget,
    client: reqwest::Client,
}

impl GithubDispatcher {
    pub fn new(target: DispatchTarget) -> Result<Self, SubmitError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(target.timeout_secs))
            .build()
            .map_err(|e| SubmitError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { target, client })
    }

    pub fn url(&self) -> String {
        format!(
            "{}/repos/{}/{}/dispatches",
            self.target.api_url.trim_end_matches('/'),
            self.target.owner,
            self.target.repo
        )
    }
}

#[async_trait]
impl Dispatcher for GithubDispatcher {
    fn owner(&self) -> &str {
        &self.target.owner
    }

    async fn dispatch(&self, event: &DispatchEvent) -> Result<(), SubmitError> {
        let response = self
            .client
            .post(self.url())
            .bearer_auth(&self.target.token)
            .header(ACCEPT, Defaults::GITHUB_ACCEPT)
            .header(CONTENT_TYPE, "application/json")
            .header(USER_AGENT, Defaults::USER_AGENT)
            .json(event)
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), body = %body, "GitHub API error");
            return Err(SubmitError::Dispatch {
                status: status.as_u16(),
                body,
            });
        }

        info!(
            owner = %self.target.owner,
            repo = %self.target.repo,
            event_type = %event.event_type,
            "dispatch accepted"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(api_url: &str) -> DispatchTarget {
        DispatchTarget {
            api_url: api_url.to_string(),
            owner: "bitkarrot".to_string(),
            repo: "bitkarrot.github.io".to_string(),
            token: "t".to_string(),
            timeout_secs: 5,
        }
    }

    #[test]
    fn url_joins_without_double_slash() {
        let d = GithubDispatcher::new(target("https://api.github.com/")).unwrap();
        assert_eq!(
            d.url(),
            "https://api.github.com/repos/bitkarrot/bitkarrot.github.io/dispatches"
        );
        assert_eq!(d.owner(), "bitkarrot");
    }
}
