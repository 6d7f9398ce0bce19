// src/presentation/http/controllers/categories.rs
use crate::application::{
    commands::categories::{CreateCategoryCommand, DeleteCategoryCommand, UpdateCategoryCommand},
    dto::{CategoryDto, CategoryShowDto, SlugPreviewDto},
    queries::categories::{CheckCategorySlugQuery, GetCategoryByIdQuery, ShowCategoryQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::FormOrJson;
use crate::presentation::http::flash::{FlashNotice, FlashRedirect, IncomingFlash};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{OriginalUri, Path, Query},
    response::Response,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

const INDEX: &str = "/categories";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CategoryListResponse {
    pub items: Vec<CategoryDto>,
    /// Notice left by the previous create, update or delete.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<FlashNotice>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CategoryRequest {
    pub name: Option<String>,
    pub slug: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CheckCategorySlugRequest {
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ShowCategoryParams {
    /// One-based page of the post listing.
    pub page: Option<u32>,
}

#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "All categories, ordered by id.", body = CategoryListResponse)
    ),
    tag = "Categories"
)]
pub async fn list_categories(
    Extension(state): Extension<HttpState>,
    flash: IncomingFlash,
) -> HttpResult<Response> {
    let items = state
        .services
        .category_queries
        .list_categories()
        .await
        .into_http()?;

    let notice = flash.0.clone();
    Ok(flash.consume(Json(CategoryListResponse { items, notice })))
}

#[utoipa::path(
    post,
    path = "/categories",
    request_body = CategoryRequest,
    responses(
        (status = 303, description = "Created; redirects to the listing with a notice."),
        (status = 422, description = "Invalid input.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn create_category(
    Extension(state): Extension<HttpState>,
    FormOrJson(payload): FormOrJson<CategoryRequest>,
) -> HttpResult<FlashRedirect> {
    state
        .services
        .category_commands
        .create_category(CreateCategoryCommand {
            name: payload.name,
            slug: payload.slug,
        })
        .await
        .into_http()?;

    Ok(FlashRedirect::to(
        INDEX,
        FlashNotice::success("Category created successfully."),
    ))
}

#[utoipa::path(
    get,
    path = "/categories/{category}",
    params(
        ("category" = String, Path, description = "Category slug"),
        ShowCategoryParams
    ),
    responses(
        (status = 200, description = "Category with one page of its published posts.", body = CategoryShowDto),
        (status = 404, description = "Unknown slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn show_category(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    Query(params): Query<ShowCategoryParams>,
    OriginalUri(uri): OriginalUri,
) -> HttpResult<Json<CategoryShowDto>> {
    state
        .services
        .category_queries
        .show_category(ShowCategoryQuery {
            slug,
            page: params.page.unwrap_or(1),
            request_path: uri.path().to_string(),
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/categories/{category}/edit",
    params(("category" = i64, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category to prefill the edit form.", body = CategoryDto),
        (status = 404, description = "Unknown id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn edit_category(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<CategoryDto>> {
    state
        .services
        .category_queries
        .get_category_by_id(GetCategoryByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/categories/{category}",
    params(("category" = i64, Path, description = "Category id")),
    request_body = CategoryRequest,
    responses(
        (status = 303, description = "Updated; redirects to the listing with a notice."),
        (status = 404, description = "Unknown id.", body = crate::presentation::http::error::ErrorResponse),
        (status = 422, description = "Invalid input or slug already taken.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn update_category(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    FormOrJson(payload): FormOrJson<CategoryRequest>,
) -> HttpResult<FlashRedirect> {
    state
        .services
        .category_commands
        .update_category(UpdateCategoryCommand {
            id,
            name: payload.name,
            slug: payload.slug,
        })
        .await
        .into_http()?;

    Ok(FlashRedirect::to(
        INDEX,
        FlashNotice::success("Category updated successfully."),
    ))
}

#[utoipa::path(
    delete,
    path = "/categories/{category}",
    params(("category" = i64, Path, description = "Category id")),
    responses(
        (status = 303, description = "Deleted; redirects to the listing with a notice."),
        (status = 404, description = "Unknown id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn delete_category(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<FlashRedirect> {
    state
        .services
        .category_commands
        .delete_category(DeleteCategoryCommand { id })
        .await
        .into_http()?;

    Ok(FlashRedirect::to(
        INDEX,
        FlashNotice::success("Category deleted successfully."),
    ))
}

#[utoipa::path(
    post,
    path = "/categories/check-slug",
    request_body = CheckCategorySlugRequest,
    responses(
        (status = 200, description = "Slug a category with this name would receive.", body = SlugPreviewDto),
        (status = 422, description = "Missing name.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn check_category_slug(
    Extension(state): Extension<HttpState>,
    FormOrJson(payload): FormOrJson<CheckCategorySlugRequest>,
) -> HttpResult<Json<SlugPreviewDto>> {
    state
        .services
        .category_queries
        .check_slug(CheckCategorySlugQuery { name: payload.name })
        .await
        .into_http()
        .map(Json)
}
