pub mod decode;
pub mod normalize;
pub mod npub;
pub mod submit;

use std::fs;
use std::io::Read;

use nip05_register::errors::SubmitError;
use nip05_register::types::RegistrationRequest;

use crate::cli::RequestArgs;

/// Build the request from `--body` (file or "-" for stdin) or from the individual flags.
pub fn read_request(args: &RequestArgs) -> Result<RegistrationRequest, SubmitError> {
    let Some(path) = &args.body else {
        return Ok(RegistrationRequest {
            username: args.username.clone(),
            pubkey: args.pubkey.clone(),
        });
    };

    let text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| SubmitError::MalformedBody(format!("reading stdin: {e}")))?;
        buf
    } else {
        fs::read_to_string(path)
            .map_err(|e| SubmitError::MalformedBody(format!("reading {}: {e}", path.display())))?
    };
    RegistrationRequest::from_json(&text)
}

pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
