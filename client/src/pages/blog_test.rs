use super::*;

#[test]
fn day_of_truncates_timestamps() {
    assert_eq!(day_of("2024-05-17T08:30:00Z"), "2024-05-17");
    assert_eq!(day_of("soon"), "soon");
}

#[test]
fn toc_class_combines_levels_and_caps_depth() {
    let top = TableOfContentsItem { main_level: 1, ..TableOfContentsItem::default() };
    assert_eq!(toc_class(&top), "toc__item toc__item--level-1");

    let nested = TableOfContentsItem { main_level: 2, sub_level: Some(1), ..TableOfContentsItem::default() };
    assert_eq!(toc_class(&nested), "toc__item toc__item--level-3");

    let deep = TableOfContentsItem { main_level: 3, sub_level: Some(5), ..TableOfContentsItem::default() };
    assert_eq!(toc_class(&deep), "toc__item toc__item--level-4");
}
