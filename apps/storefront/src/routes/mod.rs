pub mod api;
pub mod download;
pub mod health;
pub mod page;

use axum::{routing::get, Router};

use crate::render::page::DOWNLOAD_PATH;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page::handle_index))
        .route("/health", get(health::health_handler))
        .route(DOWNLOAD_PATH, get(download::handle_resume_pdf))
        // JSON API
        .route("/api/v1/profile", get(api::handle_get_profile))
        .route("/api/v1/categories", get(api::handle_get_categories))
        .route("/api/v1/listing", get(api::handle_get_listing))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::models::Catalog;

    fn app_with(config: Config) -> Router {
        build_router(AppState::new(Catalog::builtin().unwrap(), config))
    }

    fn app() -> Router {
        app_with(Config::default())
    }

    async fn request(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn body_json(response: Response) -> Value {
        serde_json::from_str(&body_text(response).await).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = request(app(), "/health").await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["service"], "storefront");
    }

    #[tokio::test]
    async fn test_index_renders_html() {
        let response = request(app(), "/").await;
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/html"));
        let html = body_text(response).await;
        assert!(html.contains("Showing 4 results"));
        assert!(html.contains("<h2>Departments</h2>"));
    }

    #[tokio::test]
    async fn test_index_applies_query_and_categories() {
        let response = request(app(), "/?q=react&cats=projects").await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Showing 3 results"));
        assert!(!html.contains("id=\"skills\""));
        assert!(!html.contains("id=\"education\""));
    }

    #[tokio::test]
    async fn test_index_with_empty_cats_has_no_sections() {
        let html = body_text(request(app(), "/?cats=").await).await;
        assert!(!html.contains("<section class=\"dept\""));
        assert!(html.contains("Amazon-style interactive resume."));
    }

    #[tokio::test]
    async fn test_unknown_category_is_bad_request() {
        let response = request(app(), "/?cats=projects,hobbies").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_listing_no_match() {
        let response = request(app(), "/api/v1/listing?q=zzz-no-match").await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let sections = json["sections"].as_array().unwrap();
        assert_eq!(sections.len(), 5);
        assert_eq!(sections[0]["category"], "projects");
        assert_eq!(sections[0]["result_count"], 0);
        assert_eq!(sections[2]["category"], "skills");
        assert_eq!(sections[2]["any_results"], false);
    }

    #[tokio::test]
    async fn test_listing_react_projects() {
        let json = body_json(request(app(), "/api/v1/listing?q=React&cats=projects").await).await;
        let ids: Vec<_> = json["sections"][0]["projects"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["id"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(ids, ["fitoholic", "ecommerce", "medium"]);
    }

    #[tokio::test]
    async fn test_categories_reflect_active_set() {
        let json = body_json(request(app(), "/api/v1/categories?cats=skills").await).await;
        let categories = json.as_array().unwrap();
        assert_eq!(categories.len(), 5);
        assert_eq!(categories[0]["key"], "projects");
        assert_eq!(categories[0]["active"], false);
        assert_eq!(categories[2]["key"], "skills");
        assert_eq!(categories[2]["active"], true);
        assert_eq!(categories[3]["heading"], "Achievements & Certifications");
    }

    #[tokio::test]
    async fn test_profile() {
        let json = body_json(request(app(), "/api/v1/profile").await).await;
        assert_eq!(json["name"], "Anish Agarwal");
        assert_eq!(json["email"], "agarwalanish270902@gmail.com");
    }

    #[tokio::test]
    async fn test_download_without_pdf_returns_notice() {
        let response = request(app(), "/resume.pdf").await;
        assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
        let json = body_json(response).await;
        assert_eq!(
            json["error"]["message"],
            crate::render::page::DOWNLOAD_NOTICE
        );
    }

    #[tokio::test]
    async fn test_download_serves_configured_pdf() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"%PDF-1.4 fake").unwrap();
        let config = Config {
            resume_pdf_path: Some(file.path().to_path_buf()),
            ..Config::default()
        };

        let response = request(app_with(config), "/resume.pdf").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/pdf"
        );
        assert_eq!(body_text(response).await, "%PDF-1.4 fake");
    }

    #[tokio::test]
    async fn test_download_missing_pdf_is_not_found() {
        let config = Config {
            resume_pdf_path: Some(PathBuf::from("/nonexistent/storefront/resume.pdf")),
            ..Config::default()
        };
        let response = request(app_with(config), "/resume.pdf").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
