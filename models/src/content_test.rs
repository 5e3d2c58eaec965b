use super::*;
use serde_json::json;

#[test]
fn translated_text_falls_back_to_other_language() {
    let text = TranslatedText::new("Hello", "");
    assert_eq!(text.get(Language::En), "Hello");
    assert_eq!(text.get(Language::Pl), "Hello");

    let both = TranslatedText::new("Hello", "Cześć");
    assert_eq!(both.get(Language::Pl), "Cześć");
}

#[test]
fn translated_text_map_applies_to_both() {
    let text = TranslatedText::new("a", "b").map(str::to_uppercase);
    assert_eq!(text, TranslatedText::new("A", "B"));
}

#[test]
fn blog_category_uses_display_strings() {
    assert_eq!(serde_json::to_value(BlogCategory::WebDev).unwrap(), json!("web dev"));
    assert_eq!(serde_json::to_value(BlogCategory::AiMl).unwrap(), json!("ai-ml"));
    let parsed: BlogCategory = serde_json::from_value(json!("data bases")).unwrap();
    assert_eq!(parsed, BlogCategory::Databases);
}

#[test]
fn unknown_blog_category_reads_as_other() {
    let parsed: BlogCategory = serde_json::from_value(json!("gardening")).unwrap();
    assert_eq!(parsed, BlogCategory::Other);
}

#[test]
fn every_category_parses_back_to_itself() {
    for category in BlogCategory::ALL {
        assert_eq!(BlogCategory::parse(category.as_str()), category);
    }
}

#[test]
fn blog_post_serializes_camel_case() {
    let post = BlogPost {
        value: "hello-world".into(),
        is_published: true,
        view_count: 3,
        main_language: Some(Language::Pl),
        ..BlogPost::default()
    };
    let value = serde_json::to_value(&post).unwrap();
    assert_eq!(value["value"], "hello-world");
    assert_eq!(value["isPublished"], true);
    assert_eq!(value["viewCount"], 3);
    assert_eq!(value["mainLanguage"], "pl");
    assert_eq!(value["category"], "other");
    assert!(value["tableOfContents"].as_array().unwrap().is_empty());
}

#[test]
fn sparse_documents_deserialize_with_defaults() {
    let project: Project = serde_json::from_value(json!({"title": "Site", "technologies": ["rust"]})).unwrap();
    assert_eq!(project.title, "Site");
    assert_eq!(project.technologies, vec!["rust".to_owned()]);
    assert!(project.demo_url.is_none());
    assert!(project.short_description.is_empty());

    let resume: Resume = serde_json::from_value(json!({"personalInfo": {"name": "J"}})).unwrap();
    assert_eq!(resume.personal_info.name, "J");
    assert!(resume.education.is_empty());
}
