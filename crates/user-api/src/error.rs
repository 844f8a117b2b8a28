use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use shared::models::api::ErrorResponse;
use std::fmt;

#[derive(Debug)]
pub enum ApiError {
    InvalidJson(serde_json::Error),
    UserNotFound(String),
    RouteNotFound,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidJson(_) => StatusCode::BAD_REQUEST,
            ApiError::UserNotFound(_) | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
        }
    }

    /// Client-facing body. Internal details such as the parser error stay in logs.
    pub fn to_error_response(&self) -> ErrorResponse {
        match self {
            ApiError::InvalidJson(_) => ErrorResponse::new("Bad Request", "Invalid JSON format"),
            ApiError::UserNotFound(_) => ErrorResponse::new("Not Found", "User not found"),
            ApiError::RouteNotFound => ErrorResponse::new("Not Found", "Resource not found"),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidJson(e) => write!(f, "Invalid JSON body: {e}"),
            ApiError::UserNotFound(id) => write!(f, "User not found: {id}"),
            ApiError::RouteNotFound => write!(f, "Resource not found"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::InvalidJson(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::InvalidJson(err)
    }
}

impl From<ApiError> for HttpResponse {
    fn from(err: ApiError) -> Self {
        HttpResponse::build(err.status_code()).json(err.to_error_response())
    }
}
