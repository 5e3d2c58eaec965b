use super::*;

#[test]
fn tab_double_space_newline_round_trip() {
    let input = "a\tb  c\nd";
    let encoded = encode(input);
    assert_eq!(encoded, "a|||TAB|||b|||SPACES_2|||c|||NEWLINE|||d");
    assert_eq!(decode(&encoded), input);
}

#[test]
fn single_spaces_are_left_alone() {
    assert_eq!(encode("hello big world"), "hello big world");
}

#[test]
fn crlf_and_long_runs_round_trip() {
    let input = "line one\r\n    indented\r\n\t\tcode  x";
    let encoded = encode(input);
    assert!(!encoded.contains('\n'));
    assert!(!encoded.contains('\r'));
    assert!(!encoded.contains('\t'));
    assert!(!encoded.contains("  "));
    assert!(encoded.contains("|||SPACES_4|||"));
    assert_eq!(decode(&encoded), input);
}

#[test]
fn round_trip_survives_a_translation_like_rewrite() {
    let encoded = encode("Hello\n\nworld  !");
    // A translator that only touches the words keeps the sentinels.
    let translated = encoded.replace("Hello", "Cześć").replace("world", "świecie");
    assert_eq!(decode(&translated), "Cześć\n\nświecie  !");
}

#[test]
fn empty_and_plain_text_are_identity() {
    assert_eq!(encode(""), "");
    assert_eq!(decode(""), "");
    assert_eq!(decode("no markers here"), "no markers here");
}

#[test]
fn decode_leaves_unknown_markers() {
    assert_eq!(decode("a|||BOLD|||b"), "a|||BOLD|||b");
    assert_eq!(decode("|||SPACES_x|||"), "|||SPACES_x|||");
    assert_eq!(decode("|||SPACES_3"), "|||SPACES_3");
}

#[test]
fn decode_finds_sentinel_after_extra_pipe() {
    assert_eq!(decode("||||NEWLINE|||"), "|\n");
}

#[test]
fn decode_refuses_oversized_space_runs() {
    let huge = format!("|||SPACES_{}|||", MAX_SPACES_RUN + 1);
    assert_eq!(decode(&huge), huge);
}

#[test]
fn non_ascii_text_round_trips() {
    let input = "zażółć  gęślą\tjaźń\n";
    assert_eq!(decode(&encode(input)), input);
}

#[test]
fn space_runs_longer_than_one_sentinel_round_trip() {
    let input = format!("a{}b", " ".repeat(MAX_SPACES_RUN + 1));
    let encoded = encode(&input);
    assert_eq!(encoded, format!("a|||SPACES_{MAX_SPACES_RUN}||| b"));
    assert_eq!(decode(&encoded), input);

    let input = format!("x{}y", " ".repeat(2 * MAX_SPACES_RUN + 3));
    assert_eq!(decode(&encode(&input)), input);
}

#[test]
fn sentinel_literals_in_input_round_trip() {
    let input = "use |||TAB||| as marker";
    let encoded = encode(input);
    assert_eq!(encoded, "use |||PIPES|||TAB|||PIPES||| as marker");
    assert_eq!(decode(&encoded), input);
}

#[test]
fn stray_pipes_next_to_sentinels_round_trip() {
    for input in ["|\n", "||\n|", "|||||", "a||  b", "\t||NEWLINE|||", "||||||\r\n", "|||SPACES_4|||"] {
        assert_eq!(decode(&encode(input)), input, "input {input:?}");
    }
}
