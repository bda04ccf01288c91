pub mod health;

use axum::{routing::get, Router};

use crate::recommend::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/students/:student_id/recommendations",
            get(handlers::handle_recommendations),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::models::job_posting::OpportunityType;
    use crate::store::memory::InMemoryStore;

    fn test_state(store: InMemoryStore) -> AppState {
        AppState {
            store: Arc::new(store),
            config: Config {
                database_url: "postgres://unused".to_string(),
                port: 0,
                rust_log: "info".to_string(),
                recommendation_limit: 5,
            },
        }
    }

    async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let router = build_router(test_state(InMemoryStore::default()));
        let (status, body) = get_json(router, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "recommender");
    }

    #[tokio::test]
    async fn test_recommendations_returns_ranked_list() {
        let store = InMemoryStore::default()
            .with_resume("42", "python,sql,react")
            .with_posting(1, "Backend Dev", Some("python,django,sql"))
            .with_posting(2, "Frontend Dev", Some("react,css,html"))
            .with_posting(3, "DevOps", Some("docker,kubernetes"));
        let (status, body) = get_json(
            build_router(test_state(store)),
            "/api/v1/students/42/recommendations",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let list = body.as_array().unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list[0]["id"], 1);
        assert_eq!(list[0]["title"], "Backend Dev");
        assert_eq!(list[2]["match_score"], 0.0);
    }

    #[tokio::test]
    async fn test_recommendations_filter_by_opportunity_type() {
        let store = InMemoryStore::default()
            .with_resume("7", "rust")
            .with_posting_of(1, "Engineer", Some("rust"), OpportunityType::Job)
            .with_posting_of(2, "Intern", Some("rust"), OpportunityType::Internship);
        let (status, body) = get_json(
            build_router(test_state(store)),
            "/api/v1/students/7/recommendations?opportunity_type=internship",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([{ "id": 2, "title": "Intern", "match_score": 1.0 }]));
    }

    #[tokio::test]
    async fn test_unknown_student_is_not_found() {
        let store = InMemoryStore::default().with_posting(1, "Engineer", Some("rust"));
        let (status, body) = get_json(
            build_router(test_state(store)),
            "/api/v1/students/404/recommendations",
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "No resume found for this student" }));
    }

    #[tokio::test]
    async fn test_empty_corpus_is_not_found() {
        let store = InMemoryStore::default().with_resume("1", "rust");
        let (status, body) = get_json(
            build_router(test_state(store)),
            "/api/v1/students/1/recommendations",
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "No job postings found" }));
    }
}
