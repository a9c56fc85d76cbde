use axum::{
    http::{header, Method, StatusCode},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    config::Config,
    handlers::{
        books::{create_book, delete_book, get_book, list_books},
        health::{healthz, livez},
        root::index,
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState, config: &Config) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(index))
        .route("/books", get(list_books).post(create_book))
        .route("/books/{id}", get(get_book).delete(delete_book))
        .route("/livez", get(livez))
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout(),
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use booktracker_core::book::{Book, NewBook};
    use booktracker_core::storage::{BookRepository, RepositoryError, Result};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::handlers::error::BOOK_NOT_FOUND;
    use crate::seed::seed_sample_books;
    use crate::storage::InMemoryRepository;

    fn test_config() -> Config {
        Config {
            sqlite_path: ":memory:".to_string(),
            request_timeout_seconds: 10,
            seed_sample_books: true,
        }
    }

    fn app_with(state: AppState) -> Router {
        create_app(state, &test_config())
    }

    async fn seeded_app() -> Router {
        let repo = Arc::new(InMemoryRepository::new());
        seed_sample_books(repo.as_ref()).await.unwrap();
        app_with(AppState::with_repository(repo))
    }

    async fn send(app: &Router, request: Request<Body>) -> Response {
        app.clone().oneshot(request).await.unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn delete(uri: &str) -> Request<Body> {
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_index_welcome_message() {
        let app = app_with(AppState::default());

        let response = send(&app, get("/")).await;

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(
            json["message"],
            "Welcome to the Book Tracker API with in-memory storage!"
        );
    }

    #[tokio::test]
    async fn test_list_books_empty() {
        let app = app_with(AppState::default());

        let response = send(&app, get("/books")).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_list_after_seeding_returns_sample_books() {
        let app = seeded_app().await;

        let response = send(&app, get("/books")).await;

        assert_eq!(response.status(), StatusCode::OK);
        let books: Vec<Book> = serde_json::from_value(body_json(response).await).unwrap();
        assert_eq!(
            books,
            vec![
                Book {
                    id: 1,
                    title: "1984".to_string(),
                    author: "George Orwell".to_string(),
                    description: Some("Dystopian novel".to_string()),
                },
                Book {
                    id: 2,
                    title: "To Kill a Mockingbird".to_string(),
                    author: "Harper Lee".to_string(),
                    description: Some("Classic novel on justice".to_string()),
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let app = app_with(AppState::default());

        let request = Request::builder()
            .uri("/books")
            .header(header::ORIGIN, "http://example.com")
            .body(Body::empty())
            .unwrap();
        let response = send(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }

    #[tokio::test]
    async fn test_cors_preflight_for_delete() {
        let app = app_with(AppState::default());

        let request = Request::builder()
            .method("OPTIONS")
            .uri("/books/1")
            .header(header::ORIGIN, "http://example.com")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "DELETE")
            .body(Body::empty())
            .unwrap();
        let response = send(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
        let methods = response.headers()[header::ACCESS_CONTROL_ALLOW_METHODS]
            .to_str()
            .unwrap();
        assert!(methods.contains("DELETE"));
    }

    #[tokio::test]
    async fn test_create_and_get_book() {
        let app = app_with(AppState::default());

        let response = send(
            &app,
            post_json(
                "/books",
                json!({
                    "title": "The Hobbit",
                    "author": "J. R. R. Tolkien",
                    "description": "There and back again"
                }),
            ),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let created = body_json(response).await;
        assert_eq!(created["title"], "The Hobbit");

        let id = created["id"].as_i64().unwrap();
        let response = send(&app, get(&format!("/books/{id}"))).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, created);
    }

    #[tokio::test]
    async fn test_create_ignores_client_id() {
        let app = seeded_app().await;

        let response = send(
            &app,
            post_json(
                "/books",
                json!({ "id": 1, "title": "Beloved", "author": "Toni Morrison" }),
            ),
        )
        .await;

        let created = body_json(response).await;
        assert_eq!(created["id"], 3);
        assert!(created["description"].is_null());

        // The seeded book with id 1 is untouched
        let response = send(&app, get("/books/1")).await;
        assert_eq!(body_json(response).await["title"], "1984");
    }

    #[tokio::test]
    async fn test_create_missing_field_is_rejected() {
        let app = app_with(AppState::default());

        let response = send(&app, post_json("/books", json!({ "title": "Untitled" }))).await;

        assert!(response.status().is_client_error());
        let response = send(&app, get("/books")).await;
        assert_eq!(body_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_get_nonexistent_book() {
        let app = seeded_app().await;

        let response = send(&app, get("/books/999")).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["detail"], BOOK_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_non_integer_id_is_bad_request() {
        let app = app_with(AppState::default());

        let response = send(&app, get("/books/abc")).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_delete_nonexistent_book() {
        let app = seeded_app().await;

        let response = send(&app, delete("/books/999")).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["detail"], BOOK_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let app = seeded_app().await;

        let response = send(&app, delete("/books/2")).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({ "deleted": 2 }));

        let response = send(&app, get("/books/2")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = send(&app, delete("/books/2")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_count_grows_by_number_of_creates() {
        let app = seeded_app().await;
        let before = body_json(send(&app, get("/books")).await)
            .await
            .as_array()
            .unwrap()
            .len();

        for n in 0..4 {
            let response = send(
                &app,
                post_json(
                    "/books",
                    json!({ "title": format!("Volume {n}"), "author": "Anonymous" }),
                ),
            )
            .await;
            assert_eq!(response.status(), StatusCode::OK);
        }

        let after = body_json(send(&app, get("/books")).await)
            .await
            .as_array()
            .unwrap()
            .len();
        assert_eq!(after, before + 4);
    }

    #[tokio::test]
    async fn test_livez() {
        let app = app_with(AppState::default());

        let response = send(&app, get("/livez")).await;

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_healthz_reports_book_count() {
        let app = seeded_app().await;

        let response = send(&app, get("/healthz")).await;

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["books"], 2);
    }

    /// Repository whose every call fails, for error-path tests.
    struct UnavailableRepository;

    #[async_trait]
    impl BookRepository for UnavailableRepository {
        fn backend_name(&self) -> &'static str {
            "unavailable"
        }

        async fn create_book(&self, _book: &NewBook) -> Result<Book> {
            Err(RepositoryError::ConnectionFailed("offline".to_string()))
        }

        async fn list_books(&self) -> Result<Vec<Book>> {
            Err(RepositoryError::ConnectionFailed("offline".to_string()))
        }

        async fn get_book(&self, _id: i64) -> Result<Option<Book>> {
            Err(RepositoryError::QueryFailed("offline".to_string()))
        }

        async fn delete_book(&self, _id: i64) -> Result<()> {
            Err(RepositoryError::ConnectionFailed("offline".to_string()))
        }

        async fn count_books(&self) -> Result<u64> {
            Err(RepositoryError::ConnectionFailed("offline".to_string()))
        }
    }

    #[tokio::test]
    async fn test_healthz_unavailable_storage() {
        let app = app_with(AppState::with_repository(Arc::new(UnavailableRepository)));

        let response = send(&app, get("/healthz")).await;

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body_json(response).await["status"], "unavailable");
    }

    #[tokio::test]
    async fn test_storage_failure_is_not_reported_as_not_found() {
        let app = app_with(AppState::with_repository(Arc::new(UnavailableRepository)));

        let response = send(&app, get("/books/1")).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[cfg(feature = "sqlite")]
    #[tokio::test]
    async fn test_sqlite_backed_round_trip() {
        let repo = Arc::new(crate::storage::SqliteRepository::new_in_memory().await.unwrap());
        seed_sample_books(repo.as_ref()).await.unwrap();
        let app = app_with(AppState::with_repository(repo));

        let response = send(&app, get("/")).await;
        assert_eq!(
            body_json(response).await["message"],
            "Welcome to the Book Tracker API with SQLite!"
        );

        let response = send(
            &app,
            post_json("/books", json!({ "title": "Beloved", "author": "Toni Morrison" })),
        )
        .await;
        let created = body_json(response).await;
        assert_eq!(created["id"], 3);

        let response = send(&app, delete("/books/3")).await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = send(&app, get("/books/3")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
