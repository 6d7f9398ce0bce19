// src/presentation/http/controllers/pages.rs
use crate::application::{
    commands::pages::{CreatePageCommand, DeletePageCommand, UpdatePageCommand, UploadImageCommand},
    dto::{PageDto, PageShowDto, SlugPreviewDto},
    queries::pages::{CheckPageSlugQuery, GetPageByIdQuery, ShowPageQuery},
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::FormOrJson;
use crate::presentation::http::flash::{FlashNotice, FlashRedirect, IncomingFlash};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Multipart, OriginalUri, Path, Query, multipart::MultipartError},
    response::{Html, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

const INDEX: &str = "/pages";
const UPLOAD_FIELD: &str = "upload";
const UPLOAD_MESSAGE: &str = "Image successfully uploaded";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PageListResponse {
    pub items: Vec<PageDto>,
    /// Notice left by the previous create, update or delete.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<FlashNotice>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PageRequest {
    pub title: Option<String>,
    pub slug: Option<String>,
    /// Editor HTML. Sanitized before it is stored.
    pub content: Option<String>,
    /// `true`/`1` publishes the page, `false`/`0` keeps it a draft.
    #[schema(value_type = Option<bool>)]
    pub status: Option<Value>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CheckPageSlugRequest {
    pub title: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UploadParams {
    /// Callback number the editor expects back.
    #[serde(rename = "CKEditorFuncNum")]
    pub callback: Option<String>,
}

/// Multipart body sent by the editor's upload widget.
#[derive(Debug, Default, ToSchema)]
pub struct UploadForm {
    /// Image file picked in the editor.
    #[schema(value_type = Option<String>, format = Binary)]
    pub upload: Option<UploadedFile>,
}

#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl UploadForm {
    /// Reads the first non-empty `upload` part and skips every other field.
    pub async fn from_multipart(multipart: &mut Multipart) -> HttpResult<Self> {
        while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
            if field.name() != Some(UPLOAD_FIELD) {
                continue;
            }
            let file_name = field.file_name().unwrap_or_default().to_string();
            let bytes = field.bytes().await.map_err(multipart_error)?;
            if bytes.is_empty() {
                break;
            }
            return Ok(Self {
                upload: Some(UploadedFile {
                    file_name,
                    bytes: bytes.to_vec(),
                }),
            });
        }
        Ok(Self::default())
    }
}

fn multipart_error(err: MultipartError) -> HttpError {
    HttpError::new(err.status(), err.body_text())
}

#[utoipa::path(
    get,
    path = "/pages",
    responses(
        (status = 200, description = "All pages, drafts included.", body = PageListResponse)
    ),
    tag = "Pages"
)]
pub async fn list_pages(
    Extension(state): Extension<HttpState>,
    flash: IncomingFlash,
) -> HttpResult<Response> {
    let items = state.services.page_queries.list_pages().await.into_http()?;

    let notice = flash.0.clone();
    Ok(flash.consume(Json(PageListResponse { items, notice })))
}

#[utoipa::path(
    post,
    path = "/pages",
    request_body = PageRequest,
    responses(
        (status = 303, description = "Created; redirects to the listing with a notice."),
        (status = 422, description = "Invalid input.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Pages"
)]
pub async fn create_page(
    Extension(state): Extension<HttpState>,
    FormOrJson(payload): FormOrJson<PageRequest>,
) -> HttpResult<FlashRedirect> {
    state
        .services
        .page_commands
        .create_page(CreatePageCommand {
            title: payload.title,
            slug: payload.slug,
            content: payload.content,
            status: payload.status,
        })
        .await
        .into_http()?;

    Ok(FlashRedirect::to(
        INDEX,
        FlashNotice::success("Page created successfully."),
    ))
}

#[utoipa::path(
    get,
    path = "/pages/{page}",
    params(("page" = String, Path, description = "Page slug")),
    responses(
        (status = 200, description = "Published page with its metadata.", body = PageShowDto),
        (status = 404, description = "Unknown slug or draft page.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Pages"
)]
pub async fn show_page(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    OriginalUri(uri): OriginalUri,
) -> HttpResult<Json<PageShowDto>> {
    state
        .services
        .page_queries
        .show_page(ShowPageQuery {
            slug,
            request_path: uri.path().to_string(),
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/pages/{page}/edit",
    params(("page" = i64, Path, description = "Page id")),
    responses(
        (status = 200, description = "Page to prefill the edit form.", body = PageDto),
        (status = 404, description = "Unknown id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Pages"
)]
pub async fn edit_page(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<PageDto>> {
    state
        .services
        .page_queries
        .get_page_by_id(GetPageByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/pages/{page}",
    params(("page" = i64, Path, description = "Page id")),
    request_body = PageRequest,
    responses(
        (status = 303, description = "Updated; redirects to the listing with a notice."),
        (status = 404, description = "Unknown id.", body = crate::presentation::http::error::ErrorResponse),
        (status = 422, description = "Invalid input or slug already taken.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Pages"
)]
pub async fn update_page(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    FormOrJson(payload): FormOrJson<PageRequest>,
) -> HttpResult<FlashRedirect> {
    state
        .services
        .page_commands
        .update_page(UpdatePageCommand {
            id,
            title: payload.title,
            slug: payload.slug,
            content: payload.content,
            status: payload.status,
        })
        .await
        .into_http()?;

    Ok(FlashRedirect::to(
        INDEX,
        FlashNotice::success("Page updated successfully."),
    ))
}

#[utoipa::path(
    delete,
    path = "/pages/{page}",
    params(("page" = i64, Path, description = "Page id")),
    responses(
        (status = 303, description = "Deleted; redirects to the listing with a notice."),
        (status = 404, description = "Unknown id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Pages"
)]
pub async fn delete_page(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<FlashRedirect> {
    state
        .services
        .page_commands
        .delete_page(DeletePageCommand { id })
        .await
        .into_http()?;

    Ok(FlashRedirect::to(
        INDEX,
        FlashNotice::success("Page deleted successfully."),
    ))
}

#[utoipa::path(
    post,
    path = "/pages/check-slug",
    request_body = CheckPageSlugRequest,
    responses(
        (status = 200, description = "Slug a page with this title would receive.", body = SlugPreviewDto),
        (status = 422, description = "Missing title.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Pages"
)]
pub async fn check_page_slug(
    Extension(state): Extension<HttpState>,
    FormOrJson(payload): FormOrJson<CheckPageSlugRequest>,
) -> HttpResult<Json<SlugPreviewDto>> {
    state
        .services
        .page_queries
        .check_slug(CheckPageSlugQuery {
            title: payload.title,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/pages/upload",
    params(UploadParams),
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Editor callback script, or an empty body when no file was sent.", body = String, content_type = "text/html"),
        (status = 413, description = "Request body too large."),
        (status = 422, description = "Bad callback number, file type or size.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Pages"
)]
pub async fn upload_image(
    Extension(state): Extension<HttpState>,
    Query(params): Query<UploadParams>,
    mut multipart: Multipart,
) -> HttpResult<Html<String>> {
    let Some(file) = UploadForm::from_multipart(&mut multipart).await?.upload else {
        return Ok(Html(String::new()));
    };

    let uploaded = state
        .services
        .page_commands
        .upload_image(UploadImageCommand {
            original_name: file.file_name,
            bytes: file.bytes,
            callback: params.callback,
        })
        .await
        .into_http()?;

    Ok(Html(editor_callback_script(
        uploaded.callback,
        &uploaded.url,
        UPLOAD_MESSAGE,
    )))
}

fn editor_callback_script(callback: u64, url: &str, message: &str) -> String {
    format!(
        "<script>window.parent.CKEDITOR.tools.callFunction({callback}, {}, {})</script>",
        script_string(url),
        script_string(message)
    )
}

/// JSON string literal that cannot close the surrounding script element.
fn script_string(value: &str) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| "\"\"".to_string())
        .replace("</", "<\\/")
}
