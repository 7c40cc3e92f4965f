use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Errors returned by the parameter generator endpoint.
///
/// Callers only ever see a fixed message; the underlying cause is logged
/// where the error is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamsError {
    /// The body is not JSON or does not have the expected shape.
    InvalidRequest,
    /// The scan or the conversion of its items failed.
    ScanFailed,
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

impl ParamsError {
    pub fn status_code(self) -> StatusCode {
        match self {
            Self::InvalidRequest => StatusCode::BAD_REQUEST,
            Self::ScanFailed => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::InvalidRequest => "Failed to parse request body",
            Self::ScanFailed => "Failed to retrieve data from DynamoDB",
        }
    }
}

impl IntoResponse for ParamsError {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            Json(ErrorBody {
                error: self.message(),
            }),
        )
            .into_response()
    }
}
