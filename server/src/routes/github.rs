//! Repository content proxy routes.

#[cfg(test)]
#[path = "github_test.rs"]
mod github_test;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;

use crate::error::{ApiError, ErrorCode};
use crate::services::github::{DirEntry, FileContent, GithubError};
use crate::state::AppState;

impl From<GithubError> for ApiError {
    fn from(err: GithubError) -> Self {
        let status = github_error_to_status(&err);
        if status.is_server_error() {
            tracing::error!(error = %err, code = err.error_code(), "github request failed");
        } else {
            tracing::debug!(error = %err, "github request rejected");
        }
        ApiError::new(status, &err)
    }
}

pub(crate) fn github_error_to_status(err: &GithubError) -> StatusCode {
    match err {
        GithubError::NotAFile(_) | GithubError::NotADirectory(_) => StatusCode::BAD_REQUEST,
        GithubError::ApiResponse { status: 404, .. } => StatusCode::NOT_FOUND,
        GithubError::HttpClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
        GithubError::ApiRequest(_) | GithubError::ApiResponse { .. } | GithubError::ApiParse(_) | GithubError::Decode(_) => {
            StatusCode::BAD_GATEWAY
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FileQuery {
    pub path: String,
    #[serde(rename = "ref")]
    pub git_ref: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DirQuery {
    #[serde(default)]
    pub path: String,
}

/// `GET /api/github/{owner}/{repo}/file?path=&ref=`
pub async fn file(
    State(state): State<AppState>,
    Path((owner, repo)): Path<(String, String)>,
    Query(query): Query<FileQuery>,
) -> Result<Json<FileContent>, ApiError> {
    let file = state.github.file(&owner, &repo, &query.path, query.git_ref.as_deref()).await?;
    Ok(Json(file))
}

/// `GET /api/github/{owner}/{repo}/dir?path=`
pub async fn dir(
    State(state): State<AppState>,
    Path((owner, repo)): Path<(String, String)>,
    Query(query): Query<DirQuery>,
) -> Result<Json<Vec<DirEntry>>, ApiError> {
    Ok(Json(state.github.dir(&owner, &repo, &query.path).await?))
}
