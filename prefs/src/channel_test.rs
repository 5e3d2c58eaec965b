use super::*;

#[test]
fn cookie_value_finds_named_pair() {
    let header = "a=1; tuta-theme=dark; tuta-lang=pl";
    assert_eq!(cookie_value(header, "tuta-theme").as_deref(), Some("dark"));
    assert_eq!(cookie_value(header, "tuta-lang").as_deref(), Some("pl"));
    assert_eq!(cookie_value(header, "missing"), None);
}

#[test]
fn cookie_value_skips_malformed_pairs() {
    let header = "garbage; tuta-lang=en";
    assert_eq!(cookie_value(header, "tuta-lang").as_deref(), Some("en"));
}

#[test]
fn persistent_cookie_is_script_readable_lax_and_long_lived() {
    let cookie = persistent_cookie("tuta-theme", "dark", true);
    assert_eq!(cookie.http_only(), Some(false));
    assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    assert_eq!(cookie.secure(), Some(true));
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.max_age(), Some(Duration::days(COOKIE_MAX_AGE_DAYS)));

    let rendered = cookie.to_string();
    assert!(rendered.starts_with("tuta-theme=dark"));
    assert!(!rendered.contains("HttpOnly"));
}

#[test]
fn insecure_cookie_omits_secure_flag() {
    let rendered = persistent_cookie("tuta-lang", "pl", false).to_string();
    assert!(!rendered.contains("Secure"));
}

#[test]
fn cookie_channel_reads_request_header() {
    let channel = CookieChannel::from_header(Some("tuta-lang=pl; other=x"), false);
    assert_eq!(channel.get("tuta-lang").unwrap().as_deref(), Some("pl"));
    assert_eq!(channel.get("tuta-theme").unwrap(), None);
}

#[test]
fn cookie_channel_merges_multiple_headers() {
    let channel = CookieChannel::from_headers(["tuta-lang=pl", "tuta-theme=dark"], false);
    assert_eq!(channel.get("tuta-lang").unwrap().as_deref(), Some("pl"));
    assert_eq!(channel.get("tuta-theme").unwrap().as_deref(), Some("dark"));
}

#[test]
fn cookie_channel_without_header_is_empty() {
    let channel = CookieChannel::from_header(None, false);
    assert_eq!(channel.get("tuta-lang").unwrap(), None);
    assert!(channel.set_cookie_headers().is_empty());
}

#[test]
fn cookie_channel_writes_show_up_as_set_cookie() {
    let mut channel = CookieChannel::from_header(Some("tuta-lang=en"), false);
    channel.set("tuta-lang", "pl").unwrap();
    assert_eq!(channel.get("tuta-lang").unwrap().as_deref(), Some("pl"));

    let headers = channel.set_cookie_headers();
    assert_eq!(headers.len(), 1);
    assert!(headers[0].starts_with("tuta-lang=pl"));
    assert!(headers[0].contains("SameSite=Lax"));
}

#[test]
fn memory_channel_round_trips() {
    let mut channel = MemoryChannel::new("local");
    channel.set("k", "v").unwrap();
    assert_eq!(channel.get("k").unwrap().as_deref(), Some("v"));
    assert_eq!(channel.raw("k"), Some("v"));
}

#[test]
fn unavailable_memory_channel_fails_both_ways() {
    let mut channel = MemoryChannel::unavailable("local");
    assert_eq!(channel.get("k"), Err(StorageError::Unavailable("local")));
    assert_eq!(channel.set("k", "v"), Err(StorageError::Unavailable("local")));
}
