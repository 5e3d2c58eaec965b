//! Admin-only routes, gated by a static bearer token: content writes and
//! translation.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use axum::extract::{FromRef, FromRequestParts, Path, State};
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::response::Json;
use models::{BlogPost, Project, Resume, TranslatedText};
use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::error::{ApiError, ErrorCode};
use crate::services::content::{self, BLOGS, PROJECTS, RESUME};
use crate::services::translate;
use crate::state::AppState;

// =============================================================================
// ADMIN EXTRACTOR
// =============================================================================

/// Proof that the request carried `Authorization: Bearer <ADMIN_API_TOKEN>`.
/// Without a configured token every admin route answers 503.
pub struct AdminToken;

impl<S> FromRequestParts<S> for AdminToken
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        let Some(expected) = app_state.config.admin_token.as_deref() else {
            return Err(ApiError::plain(
                StatusCode::SERVICE_UNAVAILABLE,
                "E_ADMIN_DISABLED",
                "admin endpoints are not configured",
            ));
        };

        let presented = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(bearer_token);
        match presented {
            Some(token) if token_matches(token, expected) => Ok(Self),
            _ => {
                tracing::warn!("rejected admin request");
                Err(ApiError::plain(StatusCode::UNAUTHORIZED, "E_UNAUTHORIZED", "missing or invalid admin token"))
            }
        }
    }
}

pub(crate) fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.trim().split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

/// Compares SHA-256 digests, not the raw strings.
pub(crate) fn token_matches(presented: &str, expected: &str) -> bool {
    Sha256::digest(presented.as_bytes()) == Sha256::digest(expected.as_bytes())
}

// =============================================================================
// CONTENT WRITES
// =============================================================================

/// `GET /api/admin/blogs`: every post, drafts included.
pub async fn list_blogs(State(state): State<AppState>, _admin: AdminToken) -> Result<Json<Vec<BlogPost>>, ApiError> {
    Ok(Json(content::all_blogs(state.documents.as_ref()).await?))
}

/// `PUT /api/admin/blogs/{id}`
pub async fn put_blog(
    State(state): State<AppState>,
    _admin: AdminToken,
    Path(id): Path<String>,
    Json(post): Json<BlogPost>,
) -> Result<Json<BlogPost>, ApiError> {
    Ok(Json(content::save_blog(state.documents.as_ref(), &id, &post).await?))
}

/// `DELETE /api/admin/blogs/{id}`
pub async fn delete_blog(
    State(state): State<AppState>,
    _admin: AdminToken,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    content::delete(state.documents.as_ref(), BLOGS, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `PUT /api/admin/projects/{id}`
pub async fn put_project(
    State(state): State<AppState>,
    _admin: AdminToken,
    Path(id): Path<String>,
    Json(project): Json<Project>,
) -> Result<Json<Project>, ApiError> {
    Ok(Json(content::save_project(state.documents.as_ref(), &id, &project).await?))
}

/// `DELETE /api/admin/projects/{id}`
pub async fn delete_project(
    State(state): State<AppState>,
    _admin: AdminToken,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    content::delete(state.documents.as_ref(), PROJECTS, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `PUT /api/admin/resume/{id}`
pub async fn put_resume(
    State(state): State<AppState>,
    _admin: AdminToken,
    Path(id): Path<String>,
    Json(resume): Json<Resume>,
) -> Result<Json<Resume>, ApiError> {
    Ok(Json(content::save_resume(state.documents.as_ref(), &id, &resume).await?))
}

/// `DELETE /api/admin/resume/{id}`
pub async fn delete_resume(
    State(state): State<AppState>,
    _admin: AdminToken,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    content::delete(state.documents.as_ref(), RESUME, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// TRANSLATE
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
}

/// `POST /api/translate`: `{ "text" }` to `{ "en", "pl" }`.
pub async fn translate(
    State(state): State<AppState>,
    _admin: AdminToken,
    Json(body): Json<TranslateRequest>,
) -> Result<Json<TranslatedText>, ApiError> {
    let Some(translator) = state.translator.as_deref() else {
        return Err(ApiError::plain(
            StatusCode::SERVICE_UNAVAILABLE,
            "E_TRANSLATION_DISABLED",
            "translation is not configured",
        ));
    };

    match translate::translate_preserving_whitespace(translator, &body.text).await {
        Ok(pair) => Ok(Json(pair)),
        Err(e) => {
            tracing::error!(error = %e, code = e.error_code(), chars = body.text.len(), "translation failed");
            Err(ApiError::new(StatusCode::BAD_GATEWAY, &e))
        }
    }
}
