//! One-shot status messages carried in redirect query strings.

use std::convert::Infallible;

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use axum::response::Redirect;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// `?success=` / `?error=` values read from the request query.
///
/// Both values are passed through as plain text; escaping happens when the
/// view renders them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub success: Option<String>,
    pub error: Option<String>,
}

/// Reads the flash from the query string.
///
/// A query that does not deserialize (a repeated key, say) yields no flash
/// rather than rejecting the request.
impl<S: Send + Sync> FromRequestParts<S> for Flash {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<Flash>::from_request_parts(parts, state).await {
            Ok(Query(flash)) => Ok(flash),
            Err(rejection) => {
                debug!(error = %rejection.body_text(), "ignoring unparseable flash query");
                Ok(Flash::default())
            }
        }
    }
}

/// Which query key a flash message travels under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Error,
}

impl FlashKind {
    fn key(self) -> &'static str {
        match self {
            FlashKind::Success => "success",
            FlashKind::Error => "error",
        }
    }
}

/// Builds `path?<kind>=<message>` with the message percent-encoded.
///
/// # Examples
///
/// ```
/// use taskdir::web::{FlashKind, flash_url};
///
/// assert_eq!(
///     flash_url("/", FlashKind::Error, "Title is required"),
///     "/?error=Title%20is%20required"
/// );
/// ```
pub fn flash_url(path: &str, kind: FlashKind, message: &str) -> String {
    format!("{}?{}={}", path, kind.key(), urlencoding::encode(message))
}

/// Redirects (303 See Other) to `path` carrying a flash message.
pub fn flash_redirect(path: &str, kind: FlashKind, message: &str) -> Redirect {
    Redirect::to(&flash_url(path, kind, message))
}
