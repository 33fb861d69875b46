use anyhow::Result;
use std::process::ExitCode;

use nip05_register::config::Config;
use nip05_register::dispatch::GithubDispatcher;
use nip05_register::errors::SubmitError;
use nip05_register::process::submit_to_response;
use nip05_register::types::SubmitResponse;

use super::{print_json, read_request};
use crate::cli::RequestArgs;

pub struct Overrides {
    pub owner: Option<String>,
    pub repo: Option<String>,
    pub api_url: Option<String>,
}

fn dispatcher(mut config: Config, o: Overrides) -> Result<GithubDispatcher, SubmitError> {
    if o.owner.is_some() {
        config.github_owner = o.owner;
    }
    if o.repo.is_some() {
        config.github_repo = o.repo;
    }
    if let Some(url) = o.api_url {
        config.github_api_url = url;
    }
    GithubDispatcher::new(config.dispatch_target()?)
}

pub async fn run(config: Config, args: &RequestArgs, overrides: Overrides) -> Result<ExitCode> {
    let response = match read_request(args) {
        Ok(req) => match dispatcher(config, overrides) {
            Ok(d) => submit_to_response(&d, &req).await,
            Err(e) => SubmitResponse::failed(&e),
        },
        Err(e) => SubmitResponse::failed(&e),
    };

    print_json(&response)?;
    Ok(if response.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
