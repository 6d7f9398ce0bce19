// src/presentation/http/flash.rs
//! One-shot notices carried from a mutation to the next listing request.
//!
//! A redirect sets the `flash` cookie; the listing that follows reports the
//! notice once and expires the cookie in the same response.
use axum::{
    extract::FromRequestParts,
    http::{HeaderValue, header::SET_COOKIE, request::Parts},
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use headers::{Cookie, HeaderMapExt};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

const COOKIE_NAME: &str = "flash";
const COOKIE_ATTRIBUTES: &str = "Path=/; HttpOnly; SameSite=Lax";
const COOKIE_MAX_AGE_SECS: u32 = 60;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FlashNotice {
    /// `success` or `error`.
    pub kind: String,
    pub message: String,
}

impl FlashNotice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: "success".into(),
            message: message.into(),
        }
    }

    fn to_cookie(&self) -> Option<HeaderValue> {
        let encoded = serde_urlencoded::to_string(self).ok()?;
        HeaderValue::from_str(&format!(
            "{COOKIE_NAME}={encoded}; {COOKIE_ATTRIBUTES}; Max-Age={COOKIE_MAX_AGE_SECS}"
        ))
        .ok()
    }
}

fn expired_cookie() -> HeaderValue {
    HeaderValue::from_static("flash=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

/// Notice left by the previous request, if any. Malformed cookies are ignored.
#[derive(Debug, Clone, Default)]
pub struct IncomingFlash(pub Option<FlashNotice>);

impl<S> FromRequestParts<S> for IncomingFlash
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let notice = parts
            .headers
            .typed_get::<Cookie>()
            .and_then(|cookie| cookie.get(COOKIE_NAME).map(str::to_owned))
            .filter(|raw| !raw.is_empty())
            .and_then(|raw| serde_urlencoded::from_str::<FlashNotice>(&raw).ok());
        Ok(Self(notice))
    }
}

impl IncomingFlash {
    /// Wraps `body` so the notice is cleared once it has been read.
    pub fn consume<R: IntoResponse>(self, body: R) -> Response {
        if self.0.is_some() {
            (AppendHeaders([(SET_COOKIE, expired_cookie())]), body).into_response()
        } else {
            body.into_response()
        }
    }
}

/// `303 See Other` carrying a notice for the page it points to.
#[derive(Debug, Clone)]
pub struct FlashRedirect {
    location: String,
    notice: FlashNotice,
}

impl FlashRedirect {
    pub fn to(location: impl Into<String>, notice: FlashNotice) -> Self {
        Self {
            location: location.into(),
            notice,
        }
    }
}

impl IntoResponse for FlashRedirect {
    fn into_response(self) -> Response {
        let redirect = Redirect::to(&self.location);
        match self.notice.to_cookie() {
            Some(cookie) => (AppendHeaders([(SET_COOKIE, cookie)]), redirect).into_response(),
            None => redirect.into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{Request, StatusCode, header::LOCATION};

    #[test]
    fn redirect_sets_short_lived_cookie() {
        let response =
            FlashRedirect::to("/categories", FlashNotice::success("Category created successfully."))
                .into_response();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[LOCATION], "/categories");
        let cookie = response.headers()[SET_COOKIE].to_str().unwrap();
        assert!(cookie.starts_with("flash=kind=success&message=Category+created+successfully."));
        assert!(cookie.ends_with("Max-Age=60"));
    }

    #[tokio::test]
    async fn incoming_flash_reads_cookie() {
        let request = Request::builder()
            .header("cookie", "theme=dark; flash=kind=success&message=Page+deleted+successfully.")
            .body(())
            .unwrap();
        let (mut parts, ()) = request.into_parts();

        let IncomingFlash(notice) = IncomingFlash::from_request_parts(&mut parts, &())
            .await
            .unwrap();

        assert_eq!(notice, Some(FlashNotice::success("Page deleted successfully.")));
    }

    #[tokio::test]
    async fn missing_or_garbled_cookie_yields_none() {
        let request = Request::builder()
            .header("cookie", "flash=%%%")
            .body(())
            .unwrap();
        let (mut parts, ()) = request.into_parts();
        let IncomingFlash(notice) = IncomingFlash::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert!(notice.is_none());
    }
}
