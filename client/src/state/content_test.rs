use super::*;

fn post(slug: &str, featured: bool, date: Option<&str>, category: BlogCategory) -> BlogPost {
    BlogPost {
        value: slug.to_owned(),
        featured,
        publish_date: date.map(str::to_owned),
        category,
        ..BlogPost::default()
    }
}

fn slugs(posts: &[BlogPost]) -> Vec<&str> {
    posts.iter().map(|p| p.value.as_str()).collect()
}

#[test]
fn from_fetch_maps_each_outcome() {
    assert_eq!(Loadable::from_fetch(Ok(Some(3))), Loadable::Ready(3));
    assert_eq!(Loadable::<i32>::from_fetch(Ok(None)), Loadable::Missing);
    assert_eq!(Loadable::<i32>::from_fetch(Err("boom".into())), Loadable::Failed("boom".into()));
    assert!(Loadable::<i32>::default().is_loading());
}

#[test]
fn order_posts_puts_featured_then_newest_first() {
    let ordered = order_posts(vec![
        post("old", false, Some("2023-01-01T00:00:00Z"), BlogCategory::Other),
        post("undated", false, None, BlogCategory::Other),
        post("new", false, Some("2024-06-01T00:00:00Z"), BlogCategory::Other),
        post("pinned", true, Some("2022-01-01T00:00:00Z"), BlogCategory::Other),
    ]);
    assert_eq!(slugs(&ordered), ["pinned", "new", "old", "undated"]);
}

#[test]
fn categories_and_filtering_follow_posts() {
    let posts = vec![
        post("a", false, None, BlogCategory::Backend),
        post("b", false, None, BlogCategory::Other),
        post("c", false, None, BlogCategory::Backend),
    ];
    assert_eq!(categories_in(&posts), [BlogCategory::Backend, BlogCategory::Other]);
    assert_eq!(slugs(&filter_by_category(&posts, Some(BlogCategory::Backend))), ["a", "c"]);
    assert_eq!(filter_by_category(&posts, None).len(), 3);
}
