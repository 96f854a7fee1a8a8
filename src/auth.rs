use axum::extract::{Request, State};
use axum::http::{header, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::sync::Arc;
use tracing::warn;

/// Shared secret callers must present as `Authorization: Bearer <token>`.
#[derive(Clone)]
pub struct ApiToken(Arc<str>);

impl ApiToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(Arc::from(token.into()))
    }

    pub fn verify(&self, authorization: Option<&str>) -> bool {
        let Some(presented) = authorization.and_then(bearer_credentials) else {
            return false;
        };
        !self.0.is_empty() && constant_time_eq(presented.as_bytes(), self.0.as_bytes())
    }
}

/// Credentials of a `Bearer` header; the scheme name is case-insensitive.
fn bearer_credentials(value: &str) -> Option<&str> {
    let (scheme, credentials) = value.trim().split_once(' ')?;
    scheme
        .eq_ignore_ascii_case("bearer")
        .then(|| credentials.trim())
}

pub async fn require_auth(State(token): State<ApiToken>, request: Request, next: Next) -> Response {
    let authorization = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    if token.verify(authorization) {
        return next.run(request).await;
    }

    warn!(
        "Rejected unauthenticated {} {}",
        request.method(),
        request.uri().path()
    );
    (StatusCode::UNAUTHORIZED, axum::Json(json!({"error": "unauthorized"}))).into_response()
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_only_matching_bearer() {
        let token = ApiToken::new("s3cret");
        assert!(token.verify(Some("Bearer s3cret")));
        assert!(!token.verify(Some("Bearer s3cre")));
        assert!(!token.verify(Some("Bearer other!")));
        assert!(!token.verify(Some("s3cret")));
        assert!(!token.verify(Some("Basic s3cret")));
        assert!(!token.verify(None));
    }

    #[test]
    fn scheme_name_ignores_case() {
        let token = ApiToken::new("s3cret");
        assert!(token.verify(Some("bearer s3cret")));
        assert!(token.verify(Some("BEARER s3cret")));
        assert!(token.verify(Some("  Bearer   s3cret ")));
        assert!(!token.verify(Some("bearer S3CRET")));
        assert!(!token.verify(Some("bearers3cret")));
    }

    #[test]
    fn empty_token_rejects_everything() {
        let token = ApiToken::new("");
        assert!(!token.verify(Some("Bearer ")));
        assert!(!token.verify(None));
    }
}
