mod common;

use nc2::api::Nc2Client;
use nc2::prompt::ScriptedPrompt;
use nc2::report::print_failure;
use nc2::services::select_account;
use nc2::{ApiStage, DeployError, Outcome};
use serde_json::json;
use wiremock::matchers::{bearer_token, body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ACCOUNTS_PATH: &str = "/api/v2/organizations/org-42/cloud-accounts";
const CREATE_PATH: &str = "/api/v2/clusters/aws";

async fn server_with_accounts() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(ACCOUNTS_PATH))
        .and(bearer_token(common::TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::accounts_body()))
        .expect(1)
        .mount(&server)
        .await;
    server
}

fn client_for(server: &MockServer) -> (nc2::Settings, Nc2Client) {
    yansi::disable();
    let settings = common::settings_for(&server.uri());
    let client = Nc2Client::new(&settings, None).unwrap();
    (settings, client)
}

#[tokio::test]
async fn test_accepted_request_reports_cluster_id() {
    let server = server_with_accounts().await;
    Mock::given(method("POST"))
        .and(path(CREATE_PATH))
        .and(bearer_token(common::TOKEN))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(json!({
            "data": { "cloud_account_id": "acct-2", "name": "nc2-lab" }
        })))
        .respond_with(
            ResponseTemplate::new(202).set_body_json(json!({"data": {"cluster_id": "abc-123"}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (settings, client) = client_for(&server);
    let mut prompt = ScriptedPrompt::new(["2", "", "y"]);
    let mut out = Vec::new();

    let outcome = nc2::run(&client, &settings, &mut prompt, &mut out).await.unwrap();

    match outcome {
        Outcome::Submitted(created) => {
            assert_eq!(created.cluster_id, "abc-123");
            assert_eq!(created.status, 202);
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    let text = common::output(out);
    assert!(text.contains("Status code: 202"));
    assert!(text.contains("Cluster ID is: abc-123"));
    assert!(text.contains("45-60 minutes"));
    assert!(!text.contains("Cluster creation payload:"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_workflow_runs_on_a_worker_thread_with_process_stdout() {
    let server = server_with_accounts().await;
    Mock::given(method("POST"))
        .and(path(CREATE_PATH))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"data": {"cluster_id": "on-stdout"}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (settings, client) = client_for(&server);
    let handle = tokio::spawn(async move {
        let mut prompt = ScriptedPrompt::new(["1", "n", "y"]);
        nc2::run(&client, &settings, &mut prompt, &mut std::io::stdout()).await
    });

    match handle.await.unwrap().unwrap() {
        Outcome::Submitted(created) => assert_eq!(created.cluster_id, "on-stdout"),
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[tokio::test]
async fn test_review_prints_payload_before_submitting() {
    let server = server_with_accounts().await;
    Mock::given(method("POST"))
        .and(path(CREATE_PATH))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"data": {"cluster_id": "c-1", "status": "PENDING"}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (settings, client) = client_for(&server);
    let mut prompt = ScriptedPrompt::new(["1", "y", "Y"]);
    let mut out = Vec::new();

    let outcome = nc2::run(&client, &settings, &mut prompt, &mut out).await.unwrap();

    assert!(matches!(outcome, Outcome::Submitted(ref c) if c.cluster_id == "c-1" && c.status == 201));
    let text = common::output(out);
    assert!(text.contains("Cluster creation payload:"));
    assert!(text.contains("\"cloud_account_id\": \"acct-1\""));
    assert!(text.contains("\"terminate_at\": null"));
}

#[tokio::test]
async fn test_rejected_request_prints_first_error_entry() {
    let server = server_with_accounts().await;
    Mock::given(method("POST"))
        .and(path(CREATE_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "errors": [{"field": "capacity", "message": "invalid host_type"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (settings, client) = client_for(&server);
    let mut prompt = ScriptedPrompt::new(["1", "n", "y"]);
    let mut out = Vec::new();

    let err = nc2::run(&client, &settings, &mut prompt, &mut out).await.unwrap_err();

    match &err {
        DeployError::Remote { stage, status, .. } => {
            assert_eq!(*stage, ApiStage::CreateCluster);
            assert_eq!(*status, 400);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.exit_code(), 1);

    let mut report = Vec::new();
    print_failure(&mut report, &err).unwrap();
    let text = common::output(report);
    assert!(text.contains("Cluster creation failed"));
    assert!(text.contains("field: capacity"));
    assert!(text.contains("message: invalid host_type"));
    assert_eq!(text.matches("invalid host_type").count(), 2);
    assert!(text.contains("Raw output: {\"errors\""));
}

#[tokio::test]
async fn test_spelled_out_yes_cancels_submission() {
    let server = server_with_accounts().await;
    Mock::given(method("POST"))
        .and(path(CREATE_PATH))
        .respond_with(ResponseTemplate::new(202))
        .expect(0)
        .mount(&server)
        .await;

    let (settings, client) = client_for(&server);
    let mut prompt = ScriptedPrompt::new(["1", "n", "yes"]);
    let mut out = Vec::new();

    let outcome = nc2::run(&client, &settings, &mut prompt, &mut out).await.unwrap();

    assert_eq!(outcome, Outcome::Cancelled);
}

#[tokio::test]
async fn test_declining_confirmation_sends_nothing() {
    let server = server_with_accounts().await;
    Mock::given(method("POST"))
        .and(path(CREATE_PATH))
        .respond_with(ResponseTemplate::new(202))
        .expect(0)
        .mount(&server)
        .await;

    let (settings, client) = client_for(&server);
    let mut prompt = ScriptedPrompt::new(["3", "n", "n"]);
    let mut out = Vec::new();

    let outcome = nc2::run(&client, &settings, &mut prompt, &mut out).await.unwrap();

    assert_eq!(outcome, Outcome::Cancelled);
    assert!(common::output(out).contains("Cluster creation cancelled."));
    assert_eq!(prompt.remaining(), 0);
}

#[tokio::test]
async fn test_empty_account_list_ends_run_without_prompting() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(ACCOUNTS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(202))
        .expect(0)
        .mount(&server)
        .await;

    let (settings, client) = client_for(&server);
    let mut prompt = ScriptedPrompt::new(["1", "y", "y"]);
    let mut out = Vec::new();

    let err = nc2::run(&client, &settings, &mut prompt, &mut out).await.unwrap_err();

    assert!(matches!(err, DeployError::NoCloudAccounts));
    assert_eq!(err.exit_code(), 1);
    assert!(prompt.asked().is_empty());
}

#[tokio::test]
async fn test_account_listing_failure_surfaces_error_entry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(ACCOUNTS_PATH))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "errors": [{"code": "FORBIDDEN", "message": "token lacks org access"}, {"code": "IGNORED"}]
        })))
        .mount(&server)
        .await;

    let (settings, client) = client_for(&server);
    let mut prompt = ScriptedPrompt::new(["1"]);
    let mut out = Vec::new();

    let err = select_account(&client, &settings.organization_id, &mut prompt, &mut out)
        .await
        .unwrap_err();

    match &err {
        DeployError::Remote { stage, status, detail, .. } => {
            assert_eq!(*stage, ApiStage::ListAccounts);
            assert_eq!(*status, 403);
            assert_eq!(
                detail,
                &vec![
                    ("code".to_string(), "FORBIDDEN".to_string()),
                    ("message".to_string(), "token lacks org access".to_string()),
                ]
            );
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(prompt.asked().is_empty());
}

#[tokio::test]
async fn test_unreachable_server_is_a_transport_error() {
    // nothing listens on port 1
    let settings = common::settings_for("http://127.0.0.1:1");
    let client = Nc2Client::new(&settings, None).unwrap();

    let mut prompt = ScriptedPrompt::new(["1"]);
    let mut out = Vec::new();

    let err = select_account(&client, &settings.organization_id, &mut prompt, &mut out)
        .await
        .unwrap_err();

    assert!(matches!(err, DeployError::Transport(_)));
    assert_eq!(err.exit_code(), 1);
}

#[tokio::test]
async fn test_accepted_status_without_cluster_id_is_malformed() {
    let server = server_with_accounts().await;
    Mock::given(method("POST"))
        .and(path(CREATE_PATH))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({"data": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let (settings, client) = client_for(&server);
    let mut prompt = ScriptedPrompt::new(["1", "n", "y"]);
    let mut out = Vec::new();

    let err = nc2::run(&client, &settings, &mut prompt, &mut out).await.unwrap_err();

    assert!(matches!(err, DeployError::Transport(ref msg) if msg.contains("no cluster id")));
}
