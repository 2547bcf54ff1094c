//! Integration tests for the HTTP submitter.
//!
//! Each test spins up an Axum server on a random port standing in for the
//! spreadsheet endpoint and submits a full registration to it.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tokio::net::TcpListener;

use theology_enroll::config::Settings;
use theology_enroll::form::{FormController, FormStep, SubmitOutcome};
use theology_enroll::models::{Address, RegistrationData};
use theology_enroll::notification::Notification;
use theology_enroll::submission::{HttpSubmitter, SubmissionError, SubmissionRequest, Submitter};

type Seen = Arc<Mutex<Vec<HashMap<String, String>>>>;

/// How the fake endpoint answers
#[derive(Clone, Copy)]
enum Reply {
    Json,
    ServerError,
    PlainText,
}

async fn exec(
    State((reply, seen)): State<(Reply, Seen)>,
    Query(params): Query<HashMap<String, String>>,
) -> axum::response::Response {
    use axum::response::IntoResponse;

    seen.lock().unwrap().push(params);
    match reply {
        Reply::Json => Json(json!({"result": "success"})).into_response(),
        Reply::ServerError => (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response(),
        Reply::PlainText => "<html>ok</html>".into_response(),
    }
}

/// Start an Axum server on a random port, return (endpoint, recorded queries).
async fn start_server(reply: Reply) -> (String, Seen) {
    let seen: Seen = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/exec", get(exec))
        .with_state((reply, Arc::clone(&seen)));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    // Give the server a moment to start accepting connections.
    tokio::time::sleep(Duration::from_millis(50)).await;

    (format!("http://127.0.0.1:{}/exec", port), seen)
}

fn registration() -> RegistrationData {
    RegistrationData {
        full_name: "Maria da Conceição".into(),
        birth_date: "1990-05-10".into(),
        superintendence: "RN".into(),
        position: "presbítero".into(),
        gender: "feminino".into(),
        marital_status: "casado".into(),
        address: Address {
            street: "Rua das Flores".into(),
            number: "123".into(),
            neighborhood: "Centro".into(),
            complement: "Apto 2 & 3".into(),
            city: "Natal".into(),
            state: "RN".into(),
            zip_code: "59000-000".into(),
        },
        username: "maria".into(),
        password: "s3nh@#1".into(),
    }
}

fn settings(endpoint: &str) -> Settings {
    Settings {
        endpoint: endpoint.to_string(),
        request_timeout_secs: Some(5),
        ..Default::default()
    }
}

fn request_for(endpoint: &str) -> SubmissionRequest {
    let url = reqwest::Url::parse(endpoint).unwrap();
    SubmissionRequest::new(&url, &registration())
}

#[tokio::test]
async fn sends_every_field_as_query_parameters() {
    let (endpoint, seen) = start_server(Reply::Json).await;
    let submitter = HttpSubmitter::from_settings(&settings(&endpoint)).unwrap();

    submitter.submit(&request_for(&endpoint)).await.unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    let params = &seen[0];
    assert_eq!(params["action"], "Create");
    assert_eq!(params["fullName"], "Maria da Conceição");
    assert_eq!(params["birthDate"], "10/05/1990");
    assert_eq!(params["position"], "presbítero");
    assert_eq!(params["complement"], "Apto 2 & 3");
    assert_eq!(params["zipCode"], "59000-000");
    assert_eq!(params["password"], "s3nh@#1");
    assert_eq!(params.len(), 16);
}

#[tokio::test]
async fn server_error_is_a_status_failure() {
    let (endpoint, _) = start_server(Reply::ServerError).await;
    let submitter = HttpSubmitter::new(None).unwrap();

    let err = submitter.submit(&request_for(&endpoint)).await.unwrap_err();
    assert_eq!(err, SubmissionError::Status(500));
}

#[tokio::test]
async fn non_json_body_is_a_decode_failure() {
    let (endpoint, seen) = start_server(Reply::PlainText).await;
    let submitter = HttpSubmitter::new(None).unwrap();

    let err = submitter.submit(&request_for(&endpoint)).await.unwrap_err();
    assert!(matches!(err, SubmissionError::Decode(_)));
    assert_eq!(seen.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_failure() {
    // Bind then drop to get a port nobody listens on.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let endpoint = format!("http://127.0.0.1:{}/exec", port);
    let submitter = HttpSubmitter::new(Some(Duration::from_secs(2))).unwrap();

    let err = submitter.submit(&request_for(&endpoint)).await.unwrap_err();
    assert!(matches!(err, SubmissionError::Transport(_)));
    assert!(!err.to_string().contains("s3nh"));
}

#[tokio::test]
async fn controller_submits_once_and_resets() {
    let (endpoint, seen) = start_server(Reply::Json).await;
    let settings = settings(&endpoint);
    let submitter = HttpSubmitter::from_settings(&settings).unwrap();
    let mut form = FormController::new(&settings)
        .unwrap()
        .with_data(registration());
    assert!(form.next_step());
    assert!(form.next_step());

    let mut shown: Vec<Notification> = Vec::new();
    let outcome = form.submit(&submitter, &mut shown).await.unwrap();

    assert_eq!(outcome, SubmitOutcome::Succeeded);
    assert_eq!(seen.lock().unwrap().len(), 1);
    assert_eq!(shown.len(), 1);
    assert_eq!(form.step(), FormStep::Personal);
    assert!(form.data().is_empty());
}

#[tokio::test]
async fn controller_reports_server_error_and_resets() {
    let (endpoint, _) = start_server(Reply::ServerError).await;
    let settings = settings(&endpoint);
    let submitter = HttpSubmitter::from_settings(&settings).unwrap();
    let mut form = FormController::new(&settings)
        .unwrap()
        .with_data(registration());
    form.next_step();
    form.next_step();

    let mut shown: Vec<Notification> = Vec::new();
    let outcome = form.submit(&submitter, &mut shown).await.unwrap();

    assert_eq!(outcome, SubmitOutcome::Failed(SubmissionError::Status(500)));
    assert_eq!(shown[0].duration_ms(), 600_000);
    assert_eq!(shown[0].description, settings.support_contact);
    assert!(form.data().is_empty());
}
