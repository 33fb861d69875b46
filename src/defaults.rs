//! Central place for default values and environment variable names.

pub struct Defaults;

impl Defaults {
    /* Dispatch */
    pub const EVENT_TYPE: &'static str = "add-nip05";
    pub const GITHUB_API_URL: &'static str = "https://api.github.com";
    pub const GITHUB_ACCEPT: &'static str = "application/vnd.github.v3+json";
    pub const USER_AGENT: &'static str = "nip05-register";
    pub const DISPATCH_TIMEOUT_SECS: u64 = 30;

    /* Logging */
    pub const LOG_LEVEL: &'static str = "info";
    pub const LOG_FORMAT: &'static str = "text";
}

pub mod env {
    pub const GITHUB_TOKEN: &str = "GITHUB_TOKEN";
    pub const GITHUB_OWNER: &str = "GITHUB_OWNER";
    pub const GITHUB_REPO: &str = "GITHUB_REPO";
    pub const GITHUB_API_URL: &str = "GITHUB_API_URL";
    pub const DISPATCH_TIMEOUT_SECS: &str = "NIP05_DISPATCH_TIMEOUT_SECS";
    pub const LOG_LEVEL: &str = "NIP05_LOG_LEVEL";
    pub const LOG_FORMAT: &str = "NIP05_LOG_FORMAT";
}
