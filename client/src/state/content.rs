//! Page content load state and list helpers.
//!
//! DESIGN
//! ======
//! Pages keep one `RwSignal<Loadable<T>>` each and fill it from a
//! `spawn_local` fetch after hydration. SSR always renders the `Loading`
//! arm, which is also what the browser shows before the fetch lands, so the
//! hydrated markup matches.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use models::{BlogCategory, BlogPost};

#[derive(Clone, Debug, PartialEq)]
pub enum Loadable<T> {
    Loading,
    Ready(T),
    Missing,
    Failed(String),
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> Loadable<T> {
    /// Map a fetch outcome: `Ok(None)` is a 404-style miss.
    pub fn from_fetch(result: Result<Option<T>, String>) -> Self {
        match result {
            Ok(Some(value)) => Self::Ready(value),
            Ok(None) => Self::Missing,
            Err(message) => Self::Failed(message),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Featured posts first, then newest first by publish date. Posts without a
/// date sort last.
pub fn order_posts(mut posts: Vec<BlogPost>) -> Vec<BlogPost> {
    posts.sort_by(|a, b| {
        b.featured
            .cmp(&a.featured)
            .then_with(|| b.publish_date.is_some().cmp(&a.publish_date.is_some()))
            .then_with(|| b.publish_date.cmp(&a.publish_date))
    });
    posts
}

/// Categories that actually occur in `posts`, in declaration order.
pub fn categories_in(posts: &[BlogPost]) -> Vec<BlogCategory> {
    BlogCategory::ALL
        .into_iter()
        .filter(|category| posts.iter().any(|post| post.category == *category))
        .collect()
}

pub fn filter_by_category(posts: &[BlogPost], category: Option<BlogCategory>) -> Vec<BlogPost> {
    posts
        .iter()
        .filter(|post| category.is_none_or(|c| post.category == c))
        .cloned()
        .collect()
}
