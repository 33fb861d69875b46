//! GithubDispatcher against a mock GitHub API.

use nip05_register::config::DispatchTarget;
use nip05_register::dispatch::{Dispatcher, GithubDispatcher};
use nip05_register::errors::SubmitError;
use nip05_register::nostr::npub::npub_from_hex;
use nip05_register::process::{submit, submit_to_response};
use nip05_register::types::{RegistrationRequest, SubmitResponse};
use wiremock::{
    matchers::{body_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

const HEX: &str = "3bf0c63fcb93463407af97a5e5ee64fa883d107ef9e558472c4eb9aaaefa459d";

fn dispatcher(server: &MockServer) -> GithubDispatcher {
    GithubDispatcher::new(DispatchTarget {
        api_url: server.uri(),
        owner: "bitkarrot".to_string(),
        repo: "bitkarrot.github.io".to_string(),
        token: "test_token".to_string(),
        timeout_secs: 5,
    })
    .unwrap()
}

#[tokio::test]
async fn submit_posts_repository_dispatch() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/repos/bitkarrot/bitkarrot.github.io/dispatches"))
        .and(header("authorization", "Bearer test_token"))
        .and(header("accept", "application/vnd.github.v3+json"))
        .and(header("user-agent", "nip05-register"))
        .and(body_json(serde_json::json!({
            "event_type": "add-nip05",
            "client_payload": { "username": "alice", "pubkey": HEX }
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let d = dispatcher(&server);
    let npub = npub_from_hex(HEX).unwrap();
    let resp = submit(&d, &RegistrationRequest::new("Alice", npub))
        .await
        .unwrap();

    assert_eq!(
        resp,
        SubmitResponse::Accepted {
            success: true,
            message: "Request submitted! A pull request will be created for alice@bitkarrot.github.io"
                .to_string(),
            username: "alice".to_string(),
            pubkey: HEX.to_string(),
        }
    );
}

#[tokio::test]
async fn non_success_status_is_a_dispatch_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/repos/bitkarrot/bitkarrot.github.io/dispatches"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .expect(1)
        .mount(&server)
        .await;

    let d = dispatcher(&server);
    let err = submit(&d, &RegistrationRequest::new("alice", HEX))
        .await
        .unwrap_err();

    match err {
        SubmitError::Dispatch { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body, "Not Found");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn invalid_input_makes_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    let d = dispatcher(&server);
    let resp = submit_to_response(&d, &RegistrationRequest::new("bad name!", HEX)).await;
    assert_eq!(
        resp,
        SubmitResponse::Failed {
            success: false,
            error: "Username can only contain lowercase letters, numbers, hyphens, underscores, and dots"
                .to_string(),
        }
    );
}

#[tokio::test]
async fn unreachable_api_is_a_transport_error() {
    let d = GithubDispatcher::new(DispatchTarget {
        api_url: "http://127.0.0.1:1".to_string(),
        owner: "o".to_string(),
        repo: "r".to_string(),
        token: "t".to_string(),
        timeout_secs: 2,
    })
    .unwrap();

    let event = nip05_register::types::DispatchEvent::add_nip05(
        nip05_register::process::normalize_request(&RegistrationRequest::new("alice", HEX))
            .unwrap(),
    );
    assert!(matches!(
        d.dispatch(&event).await,
        Err(SubmitError::Transport(_))
    ));
}
