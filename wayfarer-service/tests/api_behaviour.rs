//! In-process coverage of the HTTP routes.

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use rstest::rstest;
use serde_json::{Value, json};
use tower::ServiceExt;
use wayfarer_cf::{CollaborativeFilter, FallbackConfig, SourceStrategy};
use wayfarer_core::test_support::MemoryInteractions;
use wayfarer_core::{Interaction, InteractionSource, SourceError};
use wayfarer_service::{AppState, create_router};

/// Source whose every load panics, standing in for a crashing worker.
struct PanickingInteractions;

impl InteractionSource for PanickingInteractions {
    fn load_interactions(&self) -> Result<Vec<Interaction>, SourceError> {
        panic!("interaction store exploded");
    }
}

fn state_with(live: Box<dyn InteractionSource>) -> AppState {
    AppState::new(CollaborativeFilter::new(
        Some(live),
        FallbackConfig::new(vec![701, 702, 703, 704, 705, 706], Vec::new()),
        SourceStrategy::PreferLive,
    ))
}

fn sample_state() -> AppState {
    state_with(Box::new(MemoryInteractions::from_pairs([
        (1, 101),
        (1, 102),
        (2, 101),
    ])))
}

async fn get(state: AppState, uri: &str) -> (StatusCode, Value) {
    let response = create_router(state)
        .oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body");
    let body = serde_json::from_slice(&bytes).expect("json body");
    (status, body)
}

#[rstest]
#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = get(sample_state(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[rstest]
#[tokio::test]
async fn recommend_returns_neighbour_items() {
    let (status, body) = get(sample_state(), "/recommend?user_id=2&top_n=5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "user_id": 2, "recommendations": [102] }));
}

#[rstest]
#[tokio::test]
async fn top_n_defaults_to_five() {
    let (status, body) = get(sample_state(), "/recommend?user_id=999").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body.get("recommendations"),
        Some(&json!([701, 702, 703, 704, 705]))
    );
}

#[rstest]
#[case("/recommend?user_id=0")]
#[case("/recommend?user_id=-4&top_n=2")]
#[case("/recommend?user_id=3&top_n=0")]
#[case("/recommend?user_id=abc")]
#[case("/recommend?user_id=2&top_n=1.5")]
#[case("/recommend")]
#[tokio::test]
async fn invalid_parameters_are_rejected(#[case] uri: &str) {
    let (status, body) = get(sample_state(), uri).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.get("error").and_then(Value::as_str).is_some());
}

#[rstest]
#[tokio::test]
async fn worker_panic_is_an_internal_error() {
    let (status, body) = get(
        state_with(Box::new(PanickingInteractions)),
        "/recommend?user_id=1",
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "internal server error" }));
}
