// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::server::Server;
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::categories::list_categories,
        crate::presentation::http::controllers::categories::create_category,
        crate::presentation::http::controllers::categories::show_category,
        crate::presentation::http::controllers::categories::edit_category,
        crate::presentation::http::controllers::categories::update_category,
        crate::presentation::http::controllers::categories::delete_category,
        crate::presentation::http::controllers::categories::check_category_slug,
        crate::presentation::http::controllers::pages::list_pages,
        crate::presentation::http::controllers::pages::create_page,
        crate::presentation::http::controllers::pages::show_page,
        crate::presentation::http::controllers::pages::edit_page,
        crate::presentation::http::controllers::pages::update_page,
        crate::presentation::http::controllers::pages::delete_page,
        crate::presentation::http::controllers::pages::check_page_slug,
        crate::presentation::http::controllers::pages::upload_image,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::flash::FlashNotice,
            crate::presentation::http::controllers::categories::CategoryListResponse,
            crate::presentation::http::controllers::categories::CategoryRequest,
            crate::presentation::http::controllers::categories::CheckCategorySlugRequest,
            crate::presentation::http::controllers::pages::PageListResponse,
            crate::presentation::http::controllers::pages::PageRequest,
            crate::presentation::http::controllers::pages::CheckPageSlugRequest,
            crate::presentation::http::controllers::pages::UploadForm,
            crate::application::dto::CategoryDto,
            crate::application::dto::CategoryShowDto,
            crate::application::dto::PageDto,
            crate::application::dto::PageShowDto,
            crate::application::dto::PostDto,
            crate::application::dto::SeoMetadata,
            crate::application::dto::OpenGraphMetadata,
            crate::application::dto::SlugPreviewDto
        )
    ),
    tags(
        (name = "Categories", description = "Category management and public category views"),
        (name = "Pages", description = "Static page management, public page views and editor uploads"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Mokkan Content API",
        description = "Categories and static pages for the Mokkan CMS",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let mut urls: Vec<String> = env::var("PUBLIC_BASE_URL")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();

        if urls.is_empty() {
            urls.push("http://localhost:8080".to_string());
        }

        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

/// Swagger UI at `/docs` (serving the document at `/openapi.json`) and ReDoc
/// at `/redoc`.
pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

pub fn write_openapi_snapshot() -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| "spec/openapi.json".to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}
