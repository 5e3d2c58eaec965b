use super::*;

#[test]
fn blog_endpoint_formats_expected_path() {
    assert_eq!(blog_endpoint("rust-hydration"), "/api/blogs/rust-hydration");
}

#[test]
fn blog_view_endpoint_formats_expected_path() {
    assert_eq!(blog_view_endpoint("rust-hydration"), "/api/blogs/rust-hydration/view");
}

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message("resume", 503), "resume request failed: 503");
}
