use std::env as std_env;
use std::fmt;

use crate::defaults::{env, Defaults};
use crate::errors::SubmitError;

#[derive(Clone)]
pub struct Config {
    pub github_token: Option<String>,
    pub github_owner: Option<String>,
    pub github_repo: Option<String>,
    pub github_api_url: String,
    pub dispatch_timeout_secs: u64,
    pub log_level: String,
    pub log_format: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("github_token", &self.github_token.as_ref().map(|_| "<redacted>"))
            .field("github_owner", &self.github_owner)
            .field("github_repo", &self.github_repo)
            .field("github_api_url", &self.github_api_url)
            .field("dispatch_timeout_secs", &self.dispatch_timeout_secs)
            .field("log_level", &self.log_level)
            .field("log_format", &self.log_format)
            .finish()
    }
}

/// Everything needed to call the dispatch endpoint, all present.
#[derive(Clone)]
pub struct DispatchTarget {
    pub api_url: String,
    pub owner: String,
    pub repo: String,
    pub token: String,
    pub timeout_secs: u64,
}

impl fmt::Debug for DispatchTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DispatchTarget")
            .field("api_url", &self.api_url)
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .field("token", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, SubmitError> {
        Self::from_lookup(|key| std_env::var(key).ok())
    }

    /// Build from any key lookup; empty values count as unset.
    pub fn from_lookup<F>(get: F) -> Result<Self, SubmitError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| get(key).filter(|v| !v.trim().is_empty());

        let dispatch_timeout_secs = match get(env::DISPATCH_TIMEOUT_SECS) {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                SubmitError::Config(format!(
                    "{} must be a whole number of seconds, got {:?}",
                    env::DISPATCH_TIMEOUT_SECS,
                    raw
                ))
            })?,
            None => Defaults::DISPATCH_TIMEOUT_SECS,
        };

        Ok(Self {
            github_token: get(env::GITHUB_TOKEN),
            github_owner: get(env::GITHUB_OWNER),
            github_repo: get(env::GITHUB_REPO),
            github_api_url: get(env::GITHUB_API_URL)
                .unwrap_or_else(|| Defaults::GITHUB_API_URL.to_string()),
            dispatch_timeout_secs,
            log_level: get(env::LOG_LEVEL).unwrap_or_else(|| Defaults::LOG_LEVEL.to_string()),
            log_format: get(env::LOG_FORMAT).unwrap_or_else(|| Defaults::LOG_FORMAT.to_string()),
        })
    }

    pub fn dispatch_target(&self) -> Result<DispatchTarget, SubmitError> {
        fn required(v: &Option<String>, name: &str) -> Result<String, SubmitError> {
            v.clone()
                .ok_or_else(|| SubmitError::Config(format!("{name} is not set")))
        }

        Ok(DispatchTarget {
            api_url: self.github_api_url.clone(),
            owner: required(&self.github_owner, env::GITHUB_OWNER)?,
            repo: required(&self.github_repo, env::GITHUB_REPO)?,
            token: required(&self.github_token, env::GITHUB_TOKEN)?,
            timeout_secs: self.dispatch_timeout_secs,
        })
    }
}
