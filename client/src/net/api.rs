//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning empty results; pages fetch their
//! content after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs with a display message instead of panics so a
//! failed fetch degrades to an inline notice without breaking hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use models::{BlogPost, Project, Resume};

#[cfg(any(test, feature = "hydrate"))]
fn blog_endpoint(slug: &str) -> String {
    format!("/api/blogs/{slug}")
}

#[cfg(any(test, feature = "hydrate"))]
fn blog_view_endpoint(slug: &str) -> String {
    format!("/api/blogs/{slug}/view")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} request failed: {status}")
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str, what: &str) -> Result<Option<T>, String> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if resp.status() == 404 {
        return Ok(None);
    }
    if !resp.ok() {
        return Err(request_failed_message(what, resp.status()));
    }
    resp.json::<T>().await.map(Some).map_err(|e| e.to_string())
}

/// Fetch every published post from `/api/blogs/published`.
pub async fn fetch_published_blogs() -> Result<Vec<BlogPost>, String> {
    #[cfg(feature = "hydrate")]
    {
        Ok(get_json("/api/blogs/published", "blog list").await?.unwrap_or_default())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Ok(Vec::new())
    }
}

/// Fetch one published post. `Ok(None)` when the slug is unknown.
pub async fn fetch_blog(slug: &str) -> Result<Option<BlogPost>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&blog_endpoint(slug), "blog").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = slug;
        Ok(None)
    }
}

/// Count a view of a post. Failures are logged and ignored.
pub async fn record_view(slug: &str) {
    #[cfg(feature = "hydrate")]
    {
        match gloo_net::http::Request::post(&blog_view_endpoint(slug)).send().await {
            Ok(resp) if resp.ok() => {}
            Ok(resp) => log::debug!("{}", request_failed_message("view count", resp.status())),
            Err(e) => log::debug!("view count request failed: {e}"),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = slug;
    }
}

/// Fetch the project list from `/api/projects`.
pub async fn fetch_projects() -> Result<Vec<Project>, String> {
    #[cfg(feature = "hydrate")]
    {
        Ok(get_json("/api/projects", "project list").await?.unwrap_or_default())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Ok(Vec::new())
    }
}

/// Fetch the resume. The endpoint answers `null` when none is stored.
pub async fn fetch_resume() -> Result<Option<Resume>, String> {
    #[cfg(feature = "hydrate")]
    {
        Ok(get_json::<Option<Resume>>("/api/resume", "resume").await?.flatten())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Ok(None)
    }
}
