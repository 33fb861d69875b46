use anyhow::Result;
use std::process::ExitCode;
use tracing::warn;

use nip05_register::process::normalize_request;
use nip05_register::types::SubmitResponse;

use super::{print_json, read_request};
use crate::cli::RequestArgs;

pub fn run(args: &RequestArgs) -> Result<ExitCode> {
    let outcome = read_request(args).and_then(|req| Ok(normalize_request(&req)?));

    match outcome {
        Ok(registration) => {
            if !registration.pubkey.is_full_length() {
                warn!(pubkey = %registration.pubkey, "pubkey is not 64 hex characters");
            }
            print_json(&registration)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            print_json(&SubmitResponse::failed(&e))?;
            Ok(ExitCode::FAILURE)
        }
    }
}
