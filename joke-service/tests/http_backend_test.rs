//! Integration tests for [`joke_service::HttpJokeBackend`] and the facades built on it, against a
//! local `mockito` server standing in for the generation service.

use std::time::Duration;

use joke_service::{
    build_joke_service, BackendKind, GenerationParams, HttpJokeBackend, JokeBackend, JokeError,
    JokeService, JokeServiceConfig, SingleJokeService,
};
use mockito::Matcher;
use serde_json::json;
use std::sync::Arc;

fn backend(server: &mockito::ServerGuard) -> HttpJokeBackend {
    HttpJokeBackend::new(&server.url(), "models/gpt2-jokes", GenerationParams::default()).unwrap()
}

fn http_config(url: String, model_paths: &[&str], ab_test: bool) -> JokeServiceConfig {
    JokeServiceConfig {
        backend: BackendKind::Http,
        ab_test,
        generation_url: url,
        model_paths: model_paths.iter().map(|s| s.to_string()).collect(),
        dataset_paths: vec!["data/a.txt".to_string()],
        params: GenerationParams::default(),
        timeout: Duration::from_secs(5),
    }
}

/// **Test: generate posts prompt, model and params; numeric id is stringified.**
#[tokio::test]
async fn test_generate_sends_params_and_reads_joke() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/generate")
        .match_body(Matcher::PartialJson(json!({
            "prompt": "cats",
            "model_path": "models/gpt2-jokes",
            "max_len": 200,
            "buffer_size": 10,
            "device": "cpu"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": 42, "text": "Why did the cat..."}"#)
        .create_async()
        .await;

    let joke = backend(&server).generate("cats").await.unwrap();

    mock.assert_async().await;
    assert_eq!(joke.id, "42");
    assert_eq!(joke.text, "Why did the cat...");
}

/// **Test: a response without id gets a generated one.**
#[tokio::test]
async fn test_generate_without_id_gets_uuid() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/generate")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"text": "Knock knock."}"#)
        .create_async()
        .await;

    let joke = backend(&server).generate("").await.unwrap();

    assert!(uuid_like(&joke.id), "id {:?} should be a UUID", joke.id);
    assert_eq!(joke.text, "Knock knock.");
}

fn uuid_like(s: &str) -> bool {
    s.len() == 36 && s.chars().filter(|c| *c == '-').count() == 4
}

/// **Test: server error and empty text both surface as GenerationUnavailable through the facade.**
#[tokio::test]
async fn test_server_failure_is_generation_unavailable() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/generate")
        .with_status(503)
        .create_async()
        .await;

    let service = SingleJokeService::new(Arc::new(backend(&server)));
    assert!(matches!(
        service.generate_joke("").await,
        Err(JokeError::GenerationUnavailable(_))
    ));

    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/generate")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": "1", "text": ""}"#)
        .create_async()
        .await;

    let service = SingleJokeService::new(Arc::new(backend(&server)));
    assert!(matches!(
        service.generate_joke("").await,
        Err(JokeError::GenerationUnavailable(_))
    ));
}

/// **Test: positive then negative grade for the same pair both reach the server.**
#[tokio::test]
async fn test_grades_reach_server_without_dedup() {
    let mut server = mockito::Server::new_async().await;
    let positive = server
        .mock("POST", "/grade")
        .match_body(Matcher::Json(json!({
            "user_id": "7",
            "joke_id": "42",
            "grade": "positive",
            "model_path": "models/gpt2-jokes"
        })))
        .with_status(200)
        .expect(1)
        .create_async()
        .await;
    let negative = server
        .mock("POST", "/grade")
        .match_body(Matcher::PartialJson(json!({"joke_id": "42", "grade": "negative"})))
        .with_status(200)
        .expect(1)
        .create_async()
        .await;

    let service = SingleJokeService::new(Arc::new(backend(&server)));
    service.positive_grade("7", "42").await.unwrap();
    service.negative_grade("7", "42").await.unwrap();

    positive.assert_async().await;
    negative.assert_async().await;
}

/// **Test: grade rejected by the server is a Grade error.**
#[tokio::test]
async fn test_grade_failure() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/grade")
        .with_status(500)
        .create_async()
        .await;

    let service = SingleJokeService::new(Arc::new(backend(&server)));
    assert!(matches!(
        service.negative_grade("7", "42").await,
        Err(JokeError::Grade(_))
    ));
}

/// **Test: factory builds an A/B facade whose grades reach the model that produced the joke.**
#[tokio::test]
async fn test_factory_ab_routes_grades_by_variant() {
    let mut server = mockito::Server::new_async().await;
    let _gen_a = server
        .mock("POST", "/generate")
        .match_body(Matcher::PartialJson(json!({"model_path": "model-a", "dataset_path": "data/a.txt"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": "x1", "text": "joke from a"}"#)
        .create_async()
        .await;
    let _gen_b = server
        .mock("POST", "/generate")
        .match_body(Matcher::PartialJson(json!({"model_path": "model-b"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": "y1", "text": "joke from b"}"#)
        .create_async()
        .await;
    let grade_b = server
        .mock("POST", "/grade")
        .match_body(Matcher::PartialJson(json!({"joke_id": "y1", "model_path": "model-b"})))
        .with_status(200)
        .expect(1)
        .create_async()
        .await;

    let service = build_joke_service(&http_config(server.url(), &["model-a", "model-b"], true)).unwrap();

    let first = service.generate_joke("").await.unwrap();
    let second = service.generate_joke("").await.unwrap();
    assert_eq!(first.id, "0-x1");
    assert_eq!(first.text, "joke from a");
    assert_eq!(second.id, "1-y1");
    assert_eq!(second.text, "joke from b");

    service.positive_grade("7", &second.id).await.unwrap();
    grade_b.assert_async().await;
}

/// **Test: factory rejects configurations missing what the backend needs.**
#[test]
fn test_factory_rejects_invalid_config() {
    let config = http_config("http://127.0.0.1:8000".to_string(), &[], false);
    assert!(matches!(build_joke_service(&config), Err(JokeError::Config(_))));

    let mut config = http_config("http://127.0.0.1:8000".to_string(), &["m"], false);
    config.backend = BackendKind::Dataset;
    config.dataset_paths = vec!["/nonexistent/jokes.txt".to_string()];
    assert!(matches!(build_joke_service(&config), Err(JokeError::Io(_))));
}

/// **Test: a grade server that accepts connections but never answers fails with Grade after the timeout.**
#[tokio::test]
async fn test_unresponsive_grade_server_times_out() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    let _server = tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    let mut config = http_config(url, &["models/gpt2-jokes"], false);
    config.timeout = Duration::from_secs(1);
    let service = build_joke_service(&config).unwrap();

    let outcome = tokio::time::timeout(
        Duration::from_secs(5),
        service.positive_grade("7", "42"),
    )
    .await
    .expect("grade call is bounded by the service timeout");

    assert!(matches!(outcome, Err(JokeError::Grade(_))));
}
