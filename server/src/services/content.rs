//! Public content: blogs, projects, resume, users.
//!
//! DESIGN
//! ======
//! Stored documents are loosely shaped: references may be bare ids or
//! `{ "id": .. }` objects, dates come in several encodings, blog bodies are
//! whitespace-encoded. `normalize_*` rewrite a raw document into the public
//! JSON shape, and serde does the rest against the `models` types. A
//! document that still fails to deserialize is logged and left out of lists.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use models::{BlogPost, Project, Resume, SitemapEntry, UserSummary, whitespace};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::documents::{Document, DocumentStore, Filter, StoreError};
use super::timestamp::{now_rfc3339, to_rfc3339};
use crate::error::ErrorCode;

pub const BLOGS: &str = "blogs";
pub const PROJECTS: &str = "projects";
pub const RESUME: &str = "resume";
pub const USERS: &str = "users";

const SITEMAP_CHANGEFREQ: &str = "weekly";
const SITEMAP_PRIORITY: f32 = 0.8;
const VIEW_COUNT_FIELD: &str = "viewCount";

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("blog not found: {0}")]
    BlogNotFound(String),
    #[error("user not found: {0}")]
    UserNotFound(String),
    #[error("document not found: {collection}/{id}")]
    DocumentNotFound { collection: &'static str, id: String },
    #[error("invalid content: {0}")]
    Invalid(String),
    #[error("slug already used by another blog: {0}")]
    SlugTaken(String),
    #[error("malformed {collection} document {id}: {reason}")]
    Malformed { collection: &'static str, id: String, reason: String },
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ErrorCode for ContentError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::BlogNotFound(_) => "E_BLOG_NOT_FOUND",
            Self::UserNotFound(_) => "E_USER_NOT_FOUND",
            Self::DocumentNotFound { .. } => "E_DOCUMENT_NOT_FOUND",
            Self::Invalid(_) => "E_INVALID_CONTENT",
            Self::SlugTaken(_) => "E_SLUG_TAKEN",
            Self::Malformed { .. } => "E_MALFORMED_DOCUMENT",
            Self::Store(e) => e.error_code(),
        }
    }

    fn retryable(&self) -> bool {
        matches!(self, Self::Store(e) if e.retryable())
    }
}

// =============================================================================
// NORMALIZATION
// =============================================================================

fn object(data: &Value) -> Map<String, Value> {
    data.as_object().cloned().unwrap_or_default()
}

/// `{ "id": "x" }` or `"x"` to `"x"`; anything else to `null`.
fn reference_id(value: &Value) -> Value {
    match value {
        Value::String(id) => Value::String(id.clone()),
        Value::Object(map) => map.get("id").filter(|id| id.is_string()).cloned().unwrap_or(Value::Null),
        _ => Value::Null,
    }
}

fn decoded(text: Option<&Value>) -> Value {
    let mut pair = Map::new();
    for language in ["en", "pl"] {
        let raw = text.and_then(|t| t.get(language)).and_then(Value::as_str).unwrap_or_default();
        pair.insert(language.to_owned(), Value::String(whitespace::decode(raw)));
    }
    Value::Object(pair)
}

/// Rewrite a stored blog document into the public `BlogPost` shape.
pub fn normalize_blog(data: &Value) -> Value {
    let mut blog = object(data);
    blog.insert("content".to_owned(), decoded(data.get("content")));

    let projects: Vec<Value> = data
        .get("projects")
        .and_then(Value::as_array)
        .map(|refs| refs.iter().map(reference_id).filter(|id| !id.is_null()).collect())
        .unwrap_or_default();
    blog.insert("projects".to_owned(), Value::Array(projects));

    let author = data.get("author").map_or(Value::Null, reference_id);
    blog.insert("author".to_owned(), author);

    let published = data.get("publishDate").and_then(to_rfc3339);
    blog.insert("publishDate".to_owned(), published.map_or(Value::Null, Value::String));

    if !data.get("mainLanguage").and_then(Value::as_str).is_some_and(|l| l == "en" || l == "pl") {
        blog.insert("mainLanguage".to_owned(), Value::Null);
    }
    if !data.get("category").is_some_and(Value::is_string) {
        blog.remove("category");
    }
    if !data.get(VIEW_COUNT_FIELD).is_some_and(Value::is_u64) {
        blog.remove(VIEW_COUNT_FIELD);
    }
    Value::Object(blog)
}

fn normalize_dates(entry: &Value) -> Value {
    let mut entry = object(entry);
    let start = entry.get("startDate").and_then(to_rfc3339).unwrap_or_else(now_rfc3339);
    let end = entry.get("endDate").and_then(to_rfc3339);
    entry.insert("startDate".to_owned(), Value::String(start));
    entry.insert("endDate".to_owned(), end.map_or(Value::Null, Value::String));
    Value::Object(entry)
}

/// Rewrite a stored resume: every dated section gets RFC 3339 dates. A
/// missing start date reads as now; a missing end date stays `null`.
pub fn normalize_resume(data: &Value) -> Value {
    let mut resume = object(data);
    for section in ["education", "workExperience", "additionalActivities"] {
        let entries: Vec<Value> = data
            .get(section)
            .and_then(Value::as_array)
            .map(|entries| entries.iter().map(normalize_dates).collect())
            .unwrap_or_default();
        resume.insert(section.to_owned(), Value::Array(entries));
    }
    Value::Object(resume)
}

fn parse<T: DeserializeOwned>(collection: &'static str, document: &Document, data: Value) -> Result<T, ContentError> {
    serde_json::from_value(data).map_err(|e| ContentError::Malformed {
        collection,
        id: document.id.clone(),
        reason: e.to_string(),
    })
}

fn parse_all<T: DeserializeOwned>(
    collection: &'static str,
    documents: &[Document],
    normalize: impl Fn(&Value) -> Value,
) -> Vec<T> {
    documents
        .iter()
        .filter_map(|document| match parse(collection, document, normalize(&document.data)) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::warn!(error = %e, "skipping document");
                None
            }
        })
        .collect()
}

/// Rewrite an admin-submitted blog into its stored shape: bodies encoded,
/// view count carried over from the stored document.
fn storable_blog(post: &BlogPost, view_count: u64) -> Result<Value, ContentError> {
    let mut data = serde_json::to_value(post).map_err(|e| ContentError::Invalid(e.to_string()))?;
    if let Some(blog) = data.as_object_mut() {
        let content = post.content.map(whitespace::encode);
        blog.insert("content".to_owned(), serde_json::json!({ "en": content.en, "pl": content.pl }));
        blog.insert(VIEW_COUNT_FIELD.to_owned(), Value::from(view_count));
    }
    Ok(data)
}

fn require(field: &str, value: &str) -> Result<(), ContentError> {
    if value.trim().is_empty() {
        return Err(ContentError::Invalid(format!("{field} must not be empty")));
    }
    Ok(())
}

fn blog_post(document: &Document) -> Result<BlogPost, ContentError> {
    let mut post: BlogPost = parse(BLOGS, document, normalize_blog(&document.data))?;
    post.is_published = true;
    Ok(post)
}

fn published() -> Filter {
    Filter::eq("isPublished", true)
}

// =============================================================================
// OPERATIONS
// =============================================================================

/// Every published blog post, bodies decoded.
///
/// # Errors
///
/// Store failures.
pub async fn published_blogs(store: &dyn DocumentStore) -> Result<Vec<BlogPost>, ContentError> {
    let documents = store.query(BLOGS, &[published()], None).await?;
    let mut posts: Vec<BlogPost> = parse_all(BLOGS, &documents, normalize_blog);
    for post in &mut posts {
        post.is_published = true;
    }
    Ok(posts)
}

/// A published post by slug. Drafts are indistinguishable from missing posts.
///
/// # Errors
///
/// [`ContentError::BlogNotFound`] when no published post has this slug.
pub async fn blog_by_slug(store: &dyn DocumentStore, slug: &str) -> Result<BlogPost, ContentError> {
    let documents = store.query(BLOGS, &[Filter::eq("value", slug), published()], Some(1)).await?;
    let document = documents.first().ok_or_else(|| ContentError::BlogNotFound(slug.to_owned()))?;
    blog_post(document)
}

/// Count one view of any post with this slug, published or not. Returns the
/// new count.
///
/// # Errors
///
/// [`ContentError::BlogNotFound`] when no post has this slug.
pub async fn record_view(store: &dyn DocumentStore, slug: &str) -> Result<i64, ContentError> {
    let documents = store.query(BLOGS, &[Filter::eq("value", slug)], Some(1)).await?;
    let document = documents.first().ok_or_else(|| ContentError::BlogNotFound(slug.to_owned()))?;
    Ok(store.increment(BLOGS, &document.id, VIEW_COUNT_FIELD, 1).await?)
}

/// Sitemap entries for published posts. Never fails: a store error yields an
/// empty list so sitemap generation keeps working.
pub async fn sitemap(store: &dyn DocumentStore) -> Vec<SitemapEntry> {
    let documents = match store.query(BLOGS, &[published()], None).await {
        Ok(documents) => documents,
        Err(e) => {
            tracing::error!(error = %e, "sitemap query failed; serving empty list");
            return Vec::new();
        }
    };
    documents
        .iter()
        .filter_map(|document| {
            let slug = document.data.get("value").and_then(Value::as_str)?;
            let lastmod = document.data.get("publishDate").and_then(to_rfc3339).unwrap_or_else(now_rfc3339);
            Some(SitemapEntry {
                url: format!("/blog/{slug}"),
                lastmod,
                changefreq: SITEMAP_CHANGEFREQ.to_owned(),
                priority: SITEMAP_PRIORITY,
            })
        })
        .collect()
}

/// Every project.
///
/// # Errors
///
/// Store failures.
pub async fn projects(store: &dyn DocumentStore) -> Result<Vec<Project>, ContentError> {
    let documents = store.query(PROJECTS, &[], None).await?;
    Ok(parse_all(PROJECTS, &documents, Value::clone))
}

/// The first resume document, or `None` when the collection is empty.
///
/// # Errors
///
/// Store failures or a resume that cannot be read.
pub async fn resume(store: &dyn DocumentStore) -> Result<Option<Resume>, ContentError> {
    let documents = store.query(RESUME, &[], Some(1)).await?;
    documents
        .first()
        .map(|document| parse(RESUME, document, normalize_resume(&document.data)))
        .transpose()
}

/// Public summary of a user.
///
/// # Errors
///
/// [`ContentError::UserNotFound`] for unknown ids.
pub async fn user(store: &dyn DocumentStore, id: &str) -> Result<UserSummary, ContentError> {
    let document = store.get(USERS, id).await?.ok_or_else(|| ContentError::UserNotFound(id.to_owned()))?;
    let summary = UserSummary {
        email: document.data.get("email").and_then(Value::as_str).unwrap_or_default().to_owned(),
        username: document.data.get("username").and_then(Value::as_str).unwrap_or_default().to_owned(),
    };
    Ok(summary)
}

// =============================================================================
// ADMIN WRITES
// =============================================================================

/// Every blog post, drafts included, bodies decoded.
///
/// # Errors
///
/// Store failures.
pub async fn all_blogs(store: &dyn DocumentStore) -> Result<Vec<BlogPost>, ContentError> {
    let documents = store.query(BLOGS, &[], None).await?;
    Ok(parse_all(BLOGS, &documents, normalize_blog))
}

/// Create or replace the blog stored under `id`. The slug must not belong
/// to a different document; the view count is never taken from the input.
///
/// # Errors
///
/// [`ContentError::Invalid`] for an empty id or slug,
/// [`ContentError::SlugTaken`] when another blog owns the slug.
pub async fn save_blog(store: &dyn DocumentStore, id: &str, post: &BlogPost) -> Result<BlogPost, ContentError> {
    require("id", id)?;
    require("slug", &post.value)?;

    let owners = store.query(BLOGS, &[Filter::eq("value", post.value.as_str())], None).await?;
    if owners.iter().any(|owner| owner.id != id) {
        return Err(ContentError::SlugTaken(post.value.clone()));
    }

    let view_count = store
        .get(BLOGS, id)
        .await?
        .and_then(|existing| existing.data.get(VIEW_COUNT_FIELD).and_then(Value::as_u64))
        .unwrap_or(0);
    let document = Document { id: id.to_owned(), data: storable_blog(post, view_count)? };
    store.put(BLOGS, id, document.data.clone()).await?;
    tracing::info!(id, slug = %post.value, published = post.is_published, "blog saved");
    parse(BLOGS, &document, normalize_blog(&document.data))
}

/// Create or replace the project stored under `id`.
///
/// # Errors
///
/// [`ContentError::Invalid`] for an empty id or slug; store failures.
pub async fn save_project(store: &dyn DocumentStore, id: &str, project: &Project) -> Result<Project, ContentError> {
    require("id", id)?;
    require("slug", &project.value)?;
    let data = serde_json::to_value(project).map_err(|e| ContentError::Invalid(e.to_string()))?;
    store.put(PROJECTS, id, data).await?;
    tracing::info!(id, slug = %project.value, "project saved");
    Ok(project.clone())
}

/// Create or replace the resume stored under `id`. Dates come back
/// normalized exactly as `resume` would serve them.
///
/// # Errors
///
/// [`ContentError::Invalid`] for an empty id; store failures.
pub async fn save_resume(store: &dyn DocumentStore, id: &str, resume: &Resume) -> Result<Resume, ContentError> {
    require("id", id)?;
    let document = Document {
        id: id.to_owned(),
        data: serde_json::to_value(resume).map_err(|e| ContentError::Invalid(e.to_string()))?,
    };
    store.put(RESUME, id, document.data.clone()).await?;
    tracing::info!(id, "resume saved");
    parse(RESUME, &document, normalize_resume(&document.data))
}

/// Delete one document from an admin-managed collection.
///
/// # Errors
///
/// [`ContentError::DocumentNotFound`] when nothing was stored under `id`.
pub async fn delete(store: &dyn DocumentStore, collection: &'static str, id: &str) -> Result<(), ContentError> {
    if !store.delete(collection, id).await? {
        return Err(ContentError::DocumentNotFound { collection, id: id.to_owned() });
    }
    tracing::info!(collection, id, "document deleted");
    Ok(())
}
