use std::{env, net::SocketAddr, sync::Arc, time::Duration};

use axum::{
    error_handling::HandleErrorLayer,
    http::header::CONTENT_TYPE,
    http::Method,
    routing::{delete, get, patch, post},
    Router,
};
use sqlx::{postgres::PgPoolOptions, PgPool};
use tower::{buffer::BufferLayer, limit::RateLimitLayer, ServiceBuilder};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
};
use tracing_subscriber::EnvFilter;

use crate::app::env::Envy;

mod app;
mod authors;
mod posts;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub envy: Arc<Envy>,
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE])
        .allow_methods([Method::POST, Method::GET, Method::PATCH, Method::DELETE]);

    Router::new()
        .route("/", get(app::controller::get_root))
        // authors
        .route("/authors", post(authors::controller::create_author))
        .route("/authors", get(authors::controller::get_authors))
        .route("/authors/:id", get(authors::controller::get_author_by_id))
        .route("/authors/:id", patch(authors::controller::edit_author_by_id))
        .route(
            "/authors/:id",
            delete(authors::controller::delete_author_by_id),
        )
        // posts
        .route("/posts", post(posts::controller::create_post))
        .route("/posts", get(posts::controller::get_posts))
        .route("/posts/:id", get(posts::controller::get_post_by_id))
        .route("/posts/:id", patch(posts::controller::edit_post_by_id))
        .route("/posts/:id", delete(posts::controller::delete_post_by_id))
        .fallback(app::controller::not_found)
        .with_state(state)
        // layers
        .layer(CatchPanicLayer::custom(app::controller::handle_panic))
        .layer(cors)
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(
                    app::controller::handle_middleware_error,
                ))
                .layer(BufferLayer::new(1024))
                .layer(RateLimitLayer::new(5, Duration::from_secs(1))),
        )
}

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    // properties
    let port = envy.port.to_owned().unwrap_or(5555);

    let pool = PgPoolOptions::new()
        .max_connections(envy.max_connections.unwrap_or(10))
        .idle_timeout(Some(Duration::from_secs(60)))
        .connect(&envy.database_url)
        .await
        .expect("failed to connect to database");

    tracing::info!(app_env = %envy.app_env, "connected to db");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("failed to run migrations");

    let state = AppState {
        pool,
        envy: Arc::new(envy),
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!(%addr, "listening");

    axum::Server::bind(&addr)
        .serve(router(state).into_make_service())
        .await
        .expect("server error");
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;

    // never connects unless a handler reaches the database
    fn state() -> AppState {
        let database_url = "postgres://localhost/validations_test".to_string();
        let pool = PgPoolOptions::new().connect_lazy(&database_url).unwrap();

        AppState {
            pool,
            envy: Arc::new(Envy {
                app_env: "test".to_string(),
                port: None,
                database_url,
                max_connections: None,
            }),
        }
    }

    async fn send(request: Request<Body>) -> Response {
        router(state()).oneshot(request).await.unwrap()
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn root_returns_greeting() {
        let response = send(Request::get("/").body(Body::empty()).unwrap()).await;

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
        assert_eq!(&bytes[..], b"Validations lab");
    }

    #[tokio::test]
    async fn unknown_route_is_json_not_found() {
        let response = send(Request::get("/nope").body(Body::empty()).unwrap()).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({ "error": "Not Found" }));
    }

    #[tokio::test]
    async fn author_without_name_is_rejected_before_storage() {
        let request = json_request(
            "POST",
            "/authors",
            json!({ "name": "", "phone_number": "1231144321" }),
        );
        let response = send(request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Author must have a name." })
        );
    }

    #[tokio::test]
    async fn author_with_short_phone_number_is_rejected() {
        let request = json_request(
            "POST",
            "/authors",
            json!({ "name": "Jane Author", "phone_number": "3311" }),
        );
        let response = send(request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Phone number must be exactly 10 digits." })
        );
    }

    #[tokio::test]
    async fn malformed_body_is_bad_request() {
        let request = Request::builder()
            .method("POST")
            .uri("/authors")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = send(request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_json(response).await["error"].is_string());
    }

    #[tokio::test]
    async fn clickbait_post_is_rejected() {
        let request = json_request(
            "POST",
            "/posts",
            json!({
                "title": "You Won't Believe What Happens Next!",
                "content": "A".repeat(260),
                "category": "Technology",
            }),
        );
        let response = send(request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Title cannot be clickbait." })
        );
    }

    #[tokio::test]
    async fn post_with_missing_content_is_bad_request() {
        let request = json_request("POST", "/posts", json!({ "title": "Rust" }));
        let response = send(request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn empty_edit_is_rejected() {
        let request = json_request("PATCH", "/authors/some-id", json!({}));
        let response = send(request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Received nothing to edit." })
        );
    }

    #[tokio::test]
    async fn edit_with_invalid_summary_is_rejected() {
        let request = json_request(
            "PATCH",
            "/posts/some-id",
            json!({ "summary": "T".repeat(251) }),
        );
        let response = send(request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Summary cannot exceed 250 characters." })
        );
    }

    #[tokio::test]
    async fn malformed_query_is_json_bad_request() {
        for uri in ["/authors?limit=abc", "/posts?limit=300"] {
            let response = send(Request::get(uri).body(Body::empty()).unwrap()).await;

            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
            assert!(body_json(response).await["error"].is_string(), "{uri}");
        }
    }

    #[tokio::test]
    async fn post_filter_with_unknown_category_is_rejected() {
        let response = send(
            Request::get("/posts?category=Banana")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
