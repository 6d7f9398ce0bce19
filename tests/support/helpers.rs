// tests/support/helpers.rs
use std::sync::Arc;

use axum::body;
use axum::http::{StatusCode, header};
use axum::response::Response;
use serde_json::Value;

use super::mocks::{
    FixedClock, InMemoryCategoryRepo, InMemoryPageRepo, InMemoryPostRepo, MemoryImageStore,
    TEST_BASE_URL,
};
use mokkan_content::application::commands::pages::UploadPolicy;
use mokkan_content::application::services::{ApplicationServices, ContentRepositories};
use mokkan_content::application::settings::SiteSettings;
use mokkan_content::infrastructure::{html::AmmoniaSanitizer, util::DefaultSlugGenerator};
use mokkan_content::presentation::http::{
    routes::{RouterOptions, build_router},
    state::HttpState,
};

/// アップロード上限（テストでは小さくしておく）
pub const TEST_UPLOAD_MAX_BYTES: usize = 1024;
/// カテゴリ表示の1ページあたり投稿数
pub const TEST_MAX_POSTS: u32 = 2;

/// ルーターと、その背後にあるインメモリストアへのハンドル
pub struct TestContext {
    pub services: Arc<ApplicationServices>,
    pub categories: Arc<InMemoryCategoryRepo>,
    pub pages: Arc<InMemoryPageRepo>,
    pub posts: Arc<InMemoryPostRepo>,
    pub images: Arc<MemoryImageStore>,
}

pub fn test_settings() -> SiteSettings {
    SiteSettings {
        name: "Mokkan Test".into(),
        separator: "|".into(),
        og_image: "images/og.png".into(),
        max_posts: TEST_MAX_POSTS,
        default_title: "Mokkan".into(),
        default_description: "Test site".into(),
        default_keywords: "rust, cms".into(),
        public_base_url: TEST_BASE_URL.into(),
    }
}

pub fn build_test_context() -> TestContext {
    let categories = Arc::new(InMemoryCategoryRepo::new());
    let pages = Arc::new(InMemoryPageRepo::new());
    let posts = Arc::new(InMemoryPostRepo::new());
    let images = Arc::new(MemoryImageStore::new());

    let repositories = ContentRepositories {
        category_write: categories.clone(),
        category_read: categories.clone(),
        category_slugs: categories.clone(),
        page_write: pages.clone(),
        page_read: pages.clone(),
        page_slugs: pages.clone(),
        posts: posts.clone(),
    };

    let services = Arc::new(ApplicationServices::new(
        repositories,
        Arc::new(AmmoniaSanitizer::default()),
        images.clone(),
        Arc::new(FixedClock),
        Arc::new(DefaultSlugGenerator),
        test_settings(),
        UploadPolicy {
            max_bytes: TEST_UPLOAD_MAX_BYTES,
        },
    ));

    TestContext {
        services,
        categories,
        pages,
        posts,
        images,
    }
}

impl TestContext {
    /// レート制限なしのルーター
    pub fn router(&self) -> axum::Router {
        let state = HttpState {
            services: Arc::clone(&self.services),
        };
        build_router(
            state,
            RouterOptions {
                uploads_dir: std::env::temp_dir().join("mokkan-content-test-uploads"),
                upload_max_bytes: TEST_UPLOAD_MAX_BYTES,
                allowed_origins: vec!["http://localhost:3000".into()],
                rate_limit: false,
            },
        )
    }
}

pub async fn read_body(resp: Response) -> (axum::http::response::Parts, Vec<u8>) {
    let (parts, body_stream) = resp.into_parts();
    let bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    (parts, bytes.to_vec())
}

pub async fn read_json(resp: Response) -> Value {
    let (parts, bytes) = read_body(resp).await;
    let ct = parts
        .headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    serde_json::from_slice(&bytes).expect("expected valid json body")
}

/// ErrorResponse 形式の JSON であることを確認し、本文を返す
pub async fn assert_error_response(
    resp: Response,
    expected_status: StatusCode,
    expected_error: &str,
) -> Value {
    assert_eq!(resp.status(), expected_status);
    let json = read_json(resp).await;
    let err_field = json.get("error").and_then(Value::as_str).unwrap_or("");
    let msg_field = json.get("message").and_then(Value::as_str).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
    json
}

/// 422 のフィールドエラーに `field` が含まれることを確認する
pub async fn assert_field_error(resp: Response, field: &str) -> Vec<String> {
    let json = assert_error_response(resp, StatusCode::UNPROCESSABLE_ENTITY, "Unprocessable Entity").await;
    json["fields"][field]
        .as_array()
        .unwrap_or_else(|| panic!("missing field error for {field}: {json}"))
        .iter()
        .map(|m| m.as_str().unwrap_or_default().to_string())
        .collect()
}

/// リダイレクトに付いた flash Cookie を `name=value` 形式で取り出す
pub fn flash_cookie(parts: &axum::http::response::Parts) -> String {
    let set_cookie = parts
        .headers
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .expect("missing Set-Cookie");
    set_cookie
        .split(';')
        .next()
        .unwrap_or_default()
        .to_string()
}
