//! Translation of the error facility into HTTP responses

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use zenith_core::types::RequestContext;
use zenith_core::{ExError, ExErrorKind, ZenithError};

/// Error body returned to clients
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub message: String,
    pub code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

/// Handler error wrapping the canonical `ExError`
#[derive(Debug)]
pub struct ApiError(pub ExError);

impl ApiError {
    /// Attach the operation name and request id of the failing call
    pub fn from_domain(err: ZenithError, op: &str, ctx: &RequestContext) -> Self {
        Self(
            ExError::from(err)
                .with_op(op)
                .with_request_id(ctx.request_id.clone()),
        )
    }

    pub fn status(&self) -> StatusCode {
        status_for(self.0.kind())
    }
}

/// HTTP status for each error kind
pub fn status_for(kind: ExErrorKind) -> StatusCode {
    match kind {
        ExErrorKind::NotFound => StatusCode::NOT_FOUND,
        ExErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
        ExErrorKind::AlreadyExists | ExErrorKind::ConstraintViolation => StatusCode::CONFLICT,
        ExErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<ExError> for ApiError {
    fn from(err: ExError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if self.0.message().is_empty() {
            self.0.code().to_string()
        } else {
            self.0.message().to_string()
        };
        let body = ErrorBody {
            message,
            code: self.0.code(),
            request_id: self.0.request_id().map(|id| id.to_string()),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_for(ExErrorKind::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_for(ExErrorKind::InvalidInput), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(ExErrorKind::AlreadyExists), StatusCode::CONFLICT);
        assert_eq!(
            status_for(ExErrorKind::Internal),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_from_domain_carries_request_id() {
        let ctx = RequestContext::new();
        let err = ApiError::from_domain(
            ZenithError::QuotesNotFound {
                emotion: "bored".to_string(),
            },
            "list_quotes",
            &ctx,
        );

        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.0.op(), Some("list_quotes"));
        assert_eq!(err.0.request_id(), Some(&ctx.request_id));
    }
}
