use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::defaults::Defaults;
use crate::errors::SubmitError;
use crate::nostr::CanonicalPubkey;
use crate::username::CanonicalUsername;

/// Inbound registration body: `{"username": "...", "pubkey": "..."}`.
/// A field that is missing or not a JSON string deserializes as `None`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistrationRequest {
    #[serde(default, deserialize_with = "text_or_none")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "text_or_none")]
    pub pubkey: Option<String>,
}

fn text_or_none<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

impl RegistrationRequest {
    pub fn new(username: impl Into<String>, pubkey: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            pubkey: Some(pubkey.into()),
        }
    }

    /// Only a JSON object is accepted as a body.
    pub fn from_json(text: &str) -> Result<Self, SubmitError> {
        let v: Value =
            serde_json::from_str(text).map_err(|e| SubmitError::MalformedBody(e.to_string()))?;
        if !v.is_object() {
            return Err(SubmitError::MalformedBody(
                "expected a JSON object".to_string(),
            ));
        }
        serde_json::from_value(v).map_err(|e| SubmitError::MalformedBody(e.to_string()))
    }
}

/// Canonical values ready to be forwarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub username: CanonicalUsername,
    pub pubkey: CanonicalPubkey,
}

/// Body of a GitHub `repository_dispatch` call.
#[derive(Debug, Clone, Serialize)]
pub struct DispatchEvent {
    pub event_type: String,
    pub client_payload: Registration,
}

impl DispatchEvent {
    pub fn add_nip05(registration: Registration) -> Self {
        Self {
            event_type: Defaults::EVENT_TYPE.to_string(),
            client_payload: registration,
        }
    }
}

/// What the caller prints or returns to the end user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SubmitResponse {
    Accepted {
        success: bool,
        message: String,
        username: String,
        pubkey: String,
    },
    Failed {
        success: bool,
        error: String,
    },
}

impl SubmitResponse {
    pub fn accepted(registration: &Registration, owner: &str) -> Self {
        SubmitResponse::Accepted {
            success: true,
            message: format!(
                "Request submitted! A pull request will be created for {}@{}.github.io",
                registration.username, owner
            ),
            username: registration.username.to_string(),
            pubkey: registration.pubkey.to_string(),
        }
    }

    pub fn failed(err: &SubmitError) -> Self {
        SubmitResponse::Failed {
            success: false,
            error: err.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmitResponse::Accepted { .. })
    }
}

/// Output of the `decode` command.
#[derive(Debug, Serialize)]
pub struct DecodedOut {
    pub hrp: String,
    pub payload_hex: String,
    pub payload_len: usize,
}
