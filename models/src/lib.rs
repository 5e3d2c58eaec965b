//! Content wire models shared by `server` and `client`.
//!
//! This crate owns the JSON shape of everything the public API returns
//! (camelCase field names) plus the whitespace codec used around the
//! translation step.

pub mod content;
pub mod whitespace;

pub use content::{
    AdditionalActivity, BlogCategory, BlogPost, Education, Interest, PersonalInfo, Project, Resume, ResumeLink, Skill,
    SkillCategory, SitemapEntry, TableOfContentsItem, TranslatedText, UserSummary, WorkExperience,
};
