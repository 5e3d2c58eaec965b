//! Public content models.
//!
//! Field names serialize as camelCase to match the JSON the site has always
//! served. Every collection field defaults to empty so partially filled
//! documents still deserialize.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use prefs::Language;
use serde::{Deserialize, Serialize};

// =============================================================================
// TRANSLATED TEXT
// =============================================================================

/// A string in both site languages.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatedText {
    pub en: String,
    pub pl: String,
}

impl TranslatedText {
    #[must_use]
    pub fn new(en: impl Into<String>, pl: impl Into<String>) -> Self {
        Self { en: en.into(), pl: pl.into() }
    }

    /// Text for `language`, falling back to the other one when empty.
    #[must_use]
    pub fn get(&self, language: Language) -> &str {
        let (primary, fallback) = match language {
            Language::En => (&self.en, &self.pl),
            Language::Pl => (&self.pl, &self.en),
        };
        if primary.is_empty() { fallback } else { primary }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.en.is_empty() && self.pl.is_empty()
    }

    /// Apply `f` to both languages.
    #[must_use]
    pub fn map(&self, f: impl Fn(&str) -> String) -> Self {
        Self { en: f(&self.en), pl: f(&self.pl) }
    }
}

// =============================================================================
// BLOG
// =============================================================================

/// Closed set of blog categories. Anything unrecognized reads as `Other`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BlogCategory {
    Frontend,
    Backend,
    Fullstack,
    WebDev,
    Databases,
    Cloud,
    Algorithms,
    Devops,
    Career,
    Productivity,
    WorkLife,
    Personal,
    AiMl,
    #[default]
    Other,
}

impl BlogCategory {
    pub const ALL: [Self; 14] = [
        Self::Frontend,
        Self::Backend,
        Self::Fullstack,
        Self::WebDev,
        Self::Databases,
        Self::Cloud,
        Self::Algorithms,
        Self::Devops,
        Self::Career,
        Self::Productivity,
        Self::WorkLife,
        Self::Personal,
        Self::AiMl,
        Self::Other,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Fullstack => "fullstack",
            Self::WebDev => "web dev",
            Self::Databases => "data bases",
            Self::Cloud => "cloud",
            Self::Algorithms => "algorithms",
            Self::Devops => "devops",
            Self::Career => "career",
            Self::Productivity => "productivity",
            Self::WorkLife => "work-life",
            Self::Personal => "personal",
            Self::AiMl => "ai-ml",
            Self::Other => "other",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self::ALL.into_iter().find(|c| c.as_str() == raw).unwrap_or(Self::Other)
    }
}

impl From<String> for BlogCategory {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<BlogCategory> for String {
    fn from(category: BlogCategory) -> Self {
        category.as_str().to_owned()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableOfContentsItem {
    pub title: TranslatedText,
    pub id: String,
    pub main_level: u32,
    pub sub_level: Option<u32>,
}

/// A blog post as served by the public API. `content` is decoded text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlogPost {
    pub title: TranslatedText,
    /// URL slug.
    pub value: String,
    pub content: TranslatedText,
    pub featured: bool,
    pub links: Vec<String>,
    /// Referenced project ids.
    pub projects: Vec<String>,
    pub image: Option<String>,
    pub is_published: bool,
    /// RFC 3339 timestamp.
    pub publish_date: Option<String>,
    /// Author user id.
    pub author: Option<String>,
    pub table_of_contents: Vec<TableOfContentsItem>,
    pub category: BlogCategory,
    pub view_count: u64,
    pub main_language: Option<Language>,
}

/// One `<url>` entry for the sitemap.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SitemapEntry {
    pub url: String,
    pub lastmod: String,
    pub changefreq: String,
    pub priority: f32,
}

// =============================================================================
// PROJECT
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    /// URL slug.
    pub value: String,
    pub short_description: TranslatedText,
    pub description: TranslatedText,
    pub url: String,
    pub demo_url: Option<String>,
    pub featured: bool,
    pub category: String,
    pub technologies: Vec<String>,
    pub learned: Vec<TranslatedText>,
    pub image: Option<String>,
}

// =============================================================================
// RESUME
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub title: TranslatedText,
    pub email: String,
    pub phone: String,
    pub location: TranslatedText,
    pub birth_date: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Education {
    pub institution: TranslatedText,
    pub start_date: String,
    pub end_date: Option<String>,
    pub field: TranslatedText,
    pub specialization: TranslatedText,
    pub level: TranslatedText,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkExperience {
    pub position: TranslatedText,
    pub company: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub responsibilities: Vec<TranslatedText>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AdditionalActivity {
    pub title: TranslatedText,
    pub project: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub activities: Vec<TranslatedText>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    pub name: String,
    pub color: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillCategory {
    pub title: TranslatedText,
    pub skills: Vec<Skill>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Interest {
    pub name: TranslatedText,
    pub icon: String,
    pub color: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeLink {
    pub name: TranslatedText,
    pub url: String,
    pub icon: String,
    pub color: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Resume {
    pub personal_info: PersonalInfo,
    pub education: Vec<Education>,
    pub work_experience: Vec<WorkExperience>,
    pub additional_activities: Vec<AdditionalActivity>,
    pub skills: Vec<SkillCategory>,
    pub interests: Vec<Interest>,
    pub links: Vec<ResumeLink>,
    pub footer_text: TranslatedText,
}

// =============================================================================
// USER
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSummary {
    pub email: String,
    pub username: String,
}
