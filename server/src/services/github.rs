//! Read-only proxy over the GitHub repository contents API.
//!
//! The optional token raises the rate limit and unlocks private
//! repositories; without it requests go out anonymously.

#[cfg(test)]
#[path = "github_test.rs"]
mod github_test;

use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use crate::config::HttpTimeouts;
use crate::error::ErrorCode;

const USER_AGENT: &str = "portfolio-server";
const ACCEPT: &str = "application/vnd.github+json";

#[derive(Debug, thiserror::Error)]
pub enum GithubError {
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
    #[error("API request failed: {0}")]
    ApiRequest(String),
    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },
    #[error("API response parse failed: {0}")]
    ApiParse(String),
    #[error("path is a directory, not a file: {0}")]
    NotAFile(String),
    #[error("path is a file, not a directory: {0}")]
    NotADirectory(String),
    #[error("file content could not be decoded: {0}")]
    Decode(String),
}

impl ErrorCode for GithubError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
            Self::ApiRequest(_) => "E_API_REQUEST",
            Self::ApiResponse { .. } => "E_API_RESPONSE",
            Self::ApiParse(_) => "E_API_PARSE",
            Self::NotAFile(_) => "E_NOT_A_FILE",
            Self::NotADirectory(_) => "E_NOT_A_DIRECTORY",
            Self::Decode(_) => "E_DECODE",
        }
    }

    fn retryable(&self) -> bool {
        matches!(self, Self::ApiRequest(_) | Self::ApiResponse { status: 429 | 500..=599, .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileContent {
    pub content: String,
    pub sha: String,
    pub size: u64,
    pub download_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirEntry {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub size: u64,
    pub sha: String,
    pub download_url: Option<String>,
}

/// Raw contents-API item; snake_case as GitHub sends it.
#[derive(Deserialize)]
struct ContentItem {
    name: String,
    path: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    size: u64,
    sha: String,
    download_url: Option<String>,
    #[serde(default)]
    content: Option<String>,
}

pub struct GithubClient {
    http: reqwest::Client,
    token: Option<String>,
    base_url: String,
}

impl GithubClient {
    /// # Errors
    ///
    /// Returns [`GithubError::HttpClientBuild`] if the HTTP client cannot be built.
    pub fn new(token: Option<String>, base_url: String, timeouts: HttpTimeouts) -> Result<Self, GithubError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| GithubError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, token, base_url })
    }

    async fn contents(&self, owner: &str, repo: &str, path: &str, git_ref: Option<&str>) -> Result<String, GithubError> {
        let url = contents_url(&self.base_url, owner, repo, path);
        let mut request = self.http.get(url).header(reqwest::header::ACCEPT, ACCEPT);
        if let Some(git_ref) = git_ref {
            request = request.query(&[("ref", git_ref)]);
        }
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| GithubError::ApiRequest(e.to_string()))?;
        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| GithubError::ApiRequest(e.to_string()))?;
        if status != 200 {
            return Err(GithubError::ApiResponse { status, body: text });
        }
        Ok(text)
    }

    /// A file's decoded content at an optional branch, tag, or commit.
    ///
    /// # Errors
    ///
    /// Upstream failures, or [`GithubError::NotAFile`] for directories.
    pub async fn file(&self, owner: &str, repo: &str, path: &str, git_ref: Option<&str>) -> Result<FileContent, GithubError> {
        let body = self.contents(owner, repo, path, git_ref).await?;
        parse_file(path, &body)
    }

    /// A directory listing; `path` may be empty for the repository root.
    ///
    /// # Errors
    ///
    /// Upstream failures, or [`GithubError::NotADirectory`] for files.
    pub async fn dir(&self, owner: &str, repo: &str, path: &str) -> Result<Vec<DirEntry>, GithubError> {
        let body = self.contents(owner, repo, path, None).await?;
        parse_dir(path, &body)
    }
}

pub(crate) fn contents_url(base_url: &str, owner: &str, repo: &str, path: &str) -> String {
    let path = path.trim_matches('/');
    if path.is_empty() {
        format!("{base_url}/repos/{owner}/{repo}/contents")
    } else {
        format!("{base_url}/repos/{owner}/{repo}/contents/{path}")
    }
}

/// Parse a contents-API body expected to describe one file.
///
/// # Errors
///
/// [`GithubError::NotAFile`] for listings and non-file items,
/// [`GithubError::Decode`] for content that is not base64 UTF-8.
pub fn parse_file(path: &str, body: &str) -> Result<FileContent, GithubError> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| GithubError::ApiParse(e.to_string()))?;
    if value.is_array() {
        return Err(GithubError::NotAFile(path.to_owned()));
    }
    let item: ContentItem = serde_json::from_value(value).map_err(|e| GithubError::ApiParse(e.to_string()))?;
    if item.kind != "file" {
        return Err(GithubError::NotAFile(path.to_owned()));
    }

    let encoded: String = item.content.unwrap_or_default().split_whitespace().collect();
    let bytes = STANDARD.decode(encoded).map_err(|e| GithubError::Decode(e.to_string()))?;
    let content = String::from_utf8(bytes).map_err(|e| GithubError::Decode(e.to_string()))?;
    Ok(FileContent { content, sha: item.sha, size: item.size, download_url: item.download_url })
}

/// Parse a contents-API body expected to be a directory listing.
///
/// # Errors
///
/// [`GithubError::NotADirectory`] when the body describes a single item.
pub fn parse_dir(path: &str, body: &str) -> Result<Vec<DirEntry>, GithubError> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| GithubError::ApiParse(e.to_string()))?;
    if !value.is_array() {
        return Err(GithubError::NotADirectory(path.to_owned()));
    }
    let items: Vec<ContentItem> = serde_json::from_value(value).map_err(|e| GithubError::ApiParse(e.to_string()))?;
    Ok(items
        .into_iter()
        .map(|item| DirEntry {
            name: item.name,
            path: item.path,
            kind: item.kind,
            size: item.size,
            sha: item.sha,
            download_url: item.download_url,
        })
        .collect())
}
