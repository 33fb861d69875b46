//! Request orchestration: validate, canonicalize, then hand off.

use tracing::{info, warn};

use crate::dispatch::Dispatcher;
use crate::errors::{FormatError, RegistrationError, SubmitError};
use crate::nostr::pubkey::canonicalize;
use crate::types::{DispatchEvent, Registration, RegistrationRequest, SubmitResponse};
use crate::username::validate_opt;

/// Username first, then pubkey; the first failing rule is reported.
pub fn normalize_request(req: &RegistrationRequest) -> Result<Registration, RegistrationError> {
    let username = validate_opt(req.username.as_deref())?;
    let pubkey = match req.pubkey.as_deref() {
        Some(raw) => canonicalize(raw)?,
        None => return Err(FormatError::MissingPubkey.into()),
    };
    Ok(Registration { username, pubkey })
}

pub async fn submit(
    dispatcher: &dyn Dispatcher,
    req: &RegistrationRequest,
) -> Result<SubmitResponse, SubmitError> {
    let registration = normalize_request(req)?;
    if !registration.pubkey.is_full_length() {
        warn!(pubkey = %registration.pubkey, "forwarding a pubkey that is not 64 hex characters");
    }

    let event = DispatchEvent::add_nip05(registration);
    dispatcher.dispatch(&event).await?;

    info!(username = %event.client_payload.username, "registration submitted");
    Ok(SubmitResponse::accepted(&event.client_payload, dispatcher.owner()))
}

/// Like [`submit`], but always produces a response for the end user.
pub async fn submit_to_response(
    dispatcher: &dyn Dispatcher,
    req: &RegistrationRequest,
) -> SubmitResponse {
    match submit(dispatcher, req).await {
        Ok(resp) => resp,
        Err(e) => {
            warn!(error = %e, "registration rejected");
            SubmitResponse::failed(&e)
        }
    }
}
