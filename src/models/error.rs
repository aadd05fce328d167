use std::fmt;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;
use serde_json::Value;
use thiserror::Error;

/// Which rank failed range validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankKind {
    Race,
    Overall,
    Final,
}

impl fmt::Display for RankKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RankKind::Race => "race rank",
            RankKind::Overall => "overall rank",
            RankKind::Final => "final rank",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MogiError {
    #[error("race input must look like `X / Y`: {0}")]
    BadFormat(String),
    #[error("{kind} {value} is outside 1..={participants}")]
    RankOutOfRange {
        kind: RankKind,
        value: String,
        participants: u32,
    },
    #[error("unknown course: {0}")]
    UnknownCourse(String),
    #[error("course catalog is not loaded")]
    CatalogNotLoaded,
    #[error("course {0} was already used in this mogi")]
    DuplicateCourse(String),
    #[error("this mogi already has 12 races")]
    SessionFull,
    #[error("a mogi can only be saved after 12 races (has {0})")]
    IncompleteSession(usize),
    #[error("invalid import format: {0}")]
    InvalidImportFormat(String),
    #[error("failed to load course catalog: {0}")]
    CatalogLoadFailure(String),
    #[error("participants must be a positive integer, got {0}")]
    InvalidParticipants(String),
    #[error("no archived mogi with id {0}")]
    SessionNotFound(String),
}

impl MogiError {
    pub fn kind(&self) -> &'static str {
        match self {
            MogiError::BadFormat(_) => "BadFormat",
            MogiError::RankOutOfRange { .. } => "RankOutOfRange",
            MogiError::UnknownCourse(_) => "UnknownCourse",
            MogiError::CatalogNotLoaded => "CatalogNotLoaded",
            MogiError::DuplicateCourse(_) => "DuplicateCourse",
            MogiError::SessionFull => "SessionFull",
            MogiError::IncompleteSession(_) => "IncompleteSession",
            MogiError::InvalidImportFormat(_) => "InvalidImportFormat",
            MogiError::CatalogLoadFailure(_) => "CatalogLoadFailure",
            MogiError::InvalidParticipants(_) => "InvalidParticipants",
            MogiError::SessionNotFound(_) => "SessionNotFound",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            MogiError::SessionNotFound(_) => StatusCode::NOT_FOUND,
            MogiError::CatalogNotLoaded | MogiError::CatalogLoadFailure(_) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

#[derive(Debug)]
pub struct Error {
    pub code: StatusCode,
    pub body: Json<Value>,
}

impl Error {
    pub fn new(code: StatusCode, message: &str) -> Self {
        Self {
            code,
            body: Json(json!({"message": message})),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        (self.code, self.body).into_response()
    }
}

impl From<MogiError> for Error {
    fn from(error: MogiError) -> Self {
        Self {
            code: error.status_code(),
            body: Json(json!({"error": error.kind(), "message": error.to_string()})),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_map_to_bad_request() {
        let err: Error = MogiError::SessionFull.into();
        assert_eq!(err.code, StatusCode::BAD_REQUEST);
        assert_eq!(err.body.0["error"], "SessionFull");
    }

    #[test]
    fn missing_catalog_maps_to_unavailable() {
        let err: Error = MogiError::CatalogNotLoaded.into();
        assert_eq!(err.code, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn rank_message_names_the_rank() {
        let err = MogiError::RankOutOfRange {
            kind: RankKind::Overall,
            value: "13".to_string(),
            participants: 12,
        };
        assert_eq!(err.to_string(), "overall rank 13 is outside 1..=12");
    }
}
