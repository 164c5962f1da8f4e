// src/api/schemas.rs
//! Documentation shapes for the page envelopes written by `ApiResponse`.

use serde::Serialize;
use utoipa::ToSchema;

/// A rendered page model.
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct PageEnvelope<T> {
    #[schema(example = true)]
    pub success: bool,
    /// The page, ready for the template named in each section.
    pub data: T,
}

/// Returned when a page cannot be rendered. No `data` field is present.
#[derive(Serialize, ToSchema)]
pub struct PageErrorEnvelope {
    #[schema(example = false)]
    pub success: bool,
    pub error: PageError,
}

#[derive(Serialize, ToSchema)]
pub struct PageError {
    pub code: ErrorCode,
    #[schema(example = "Project not found.")]
    pub message: String,
}

/// Machine-readable failure reasons a page route can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// The project row or its details row is absent, or failed to load.
    ProjectNotFound,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::ProjectNotFound => "PROJECT_NOT_FOUND",
        }
    }

    /// Text shown to visitors alongside the code.
    pub fn message(self) -> &'static str {
        match self {
            ErrorCode::ProjectNotFound => "Project not found.",
        }
    }
}
