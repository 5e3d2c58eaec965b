//! Public content routes: blogs, projects, resume, users.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use models::{BlogPost, Project, Resume, SitemapEntry, UserSummary};
use serde::Serialize;

use crate::error::{ApiError, ErrorCode};
use crate::services::content::{self, ContentError};
use crate::state::AppState;

impl From<ContentError> for ApiError {
    fn from(err: ContentError) -> Self {
        let status = content_error_to_status(&err);
        if status.is_server_error() {
            tracing::error!(error = %err, code = err.error_code(), "content request failed");
        } else {
            tracing::debug!(error = %err, "content request rejected");
        }
        ApiError::new(status, &err)
    }
}

pub(crate) fn content_error_to_status(err: &ContentError) -> StatusCode {
    match err {
        ContentError::BlogNotFound(_) | ContentError::UserNotFound(_) | ContentError::DocumentNotFound { .. } => {
            StatusCode::NOT_FOUND
        }
        ContentError::Invalid(_) => StatusCode::BAD_REQUEST,
        ContentError::SlugTaken(_) => StatusCode::CONFLICT,
        ContentError::Malformed { .. } | ContentError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewRecorded {
    pub success: bool,
    pub view_count: i64,
}

/// `GET /api/blogs/published`
pub async fn published_blogs(State(state): State<AppState>) -> Result<Json<Vec<BlogPost>>, ApiError> {
    Ok(Json(content::published_blogs(state.documents.as_ref()).await?))
}

/// `GET /api/blogs/sitemap`. Always 200; an unreadable store yields `[]`.
pub async fn sitemap(State(state): State<AppState>) -> Json<Vec<SitemapEntry>> {
    Json(content::sitemap(state.documents.as_ref()).await)
}

/// `GET /api/blogs/{slug}`
pub async fn blog(State(state): State<AppState>, Path(slug): Path<String>) -> Result<Json<BlogPost>, ApiError> {
    Ok(Json(content::blog_by_slug(state.documents.as_ref(), &slug).await?))
}

/// `POST /api/blogs/{slug}/view`
pub async fn record_view(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ViewRecorded>, ApiError> {
    let view_count = content::record_view(state.documents.as_ref(), &slug).await?;
    Ok(Json(ViewRecorded { success: true, view_count }))
}

/// `GET /api/projects`
pub async fn projects(State(state): State<AppState>) -> Result<Json<Vec<Project>>, ApiError> {
    Ok(Json(content::projects(state.documents.as_ref()).await?))
}

/// `GET /api/resume`: the resume, or `null` before one is written.
pub async fn resume(State(state): State<AppState>) -> Result<Json<Option<Resume>>, ApiError> {
    Ok(Json(content::resume(state.documents.as_ref()).await?))
}

/// `GET /api/users/{id}`
pub async fn user(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<UserSummary>, ApiError> {
    Ok(Json(content::user(state.documents.as_ref(), &id).await?))
}
