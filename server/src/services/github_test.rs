use super::*;

// "hello\nworld\n" base64-encoded and wrapped the way GitHub wraps it.
const FILE_BODY: &str = r#"{
    "type": "file",
    "name": "README.md",
    "path": "README.md",
    "sha": "abc123",
    "size": 12,
    "download_url": "https://raw.githubusercontent.com/o/r/main/README.md",
    "content": "aGVsbG8K\nd29ybGQK\n",
    "encoding": "base64"
}"#;

const DIR_BODY: &str = r#"[
    { "type": "file", "name": "Cargo.toml", "path": "Cargo.toml", "sha": "s1", "size": 120, "download_url": "https://raw/x" },
    { "type": "dir", "name": "src", "path": "src", "sha": "s2", "size": 0, "download_url": null }
]"#;

#[test]
fn contents_url_handles_root_and_nested_paths() {
    assert_eq!(contents_url("https://api.github.com", "o", "r", ""), "https://api.github.com/repos/o/r/contents");
    assert_eq!(
        contents_url("https://api.github.com", "o", "r", "/src/lib.rs"),
        "https://api.github.com/repos/o/r/contents/src/lib.rs"
    );
}

#[test]
fn parse_file_decodes_wrapped_base64() {
    let file = parse_file("README.md", FILE_BODY).unwrap();
    assert_eq!(file.content, "hello\nworld\n");
    assert_eq!(file.sha, "abc123");
    assert_eq!(file.size, 12);
    assert_eq!(file.download_url.as_deref(), Some("https://raw.githubusercontent.com/o/r/main/README.md"));
}

#[test]
fn parse_file_rejects_directories() {
    let err = parse_file("src", DIR_BODY).unwrap_err();
    assert!(matches!(err, GithubError::NotAFile(ref p) if p == "src"));
    assert_eq!(err.error_code(), "E_NOT_A_FILE");

    let symlink = r#"{"type":"symlink","name":"l","path":"l","sha":"s","size":1,"download_url":null}"#;
    assert!(matches!(parse_file("l", symlink), Err(GithubError::NotAFile(_))));
}

#[test]
fn parse_file_reports_undecodable_content() {
    let body = r#"{"type":"file","name":"x","path":"x","sha":"s","size":1,"download_url":null,"content":"!!!"}"#;
    assert!(matches!(parse_file("x", body), Err(GithubError::Decode(_))));
}

#[test]
fn parse_dir_lists_entries() {
    let entries = parse_dir("", DIR_BODY).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].kind, "dir");
    assert_eq!(entries[1].download_url, None);

    let json = serde_json::to_value(&entries[0]).unwrap();
    assert_eq!(json["type"], "file");
    assert_eq!(json["downloadUrl"], "https://raw/x");
}

#[test]
fn parse_dir_rejects_files() {
    assert!(matches!(parse_dir("README.md", FILE_BODY), Err(GithubError::NotADirectory(_))));
}
