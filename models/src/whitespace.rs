//! Whitespace sentinel codec.
//!
//! Machine translation collapses or rewrites formatting whitespace. Before
//! text goes out for translation, newlines, tabs, carriage returns and runs
//! of two or more spaces are replaced with `|||…|||` sentinels that the
//! translator is told to keep verbatim; [`decode`] restores them exactly.
//! Stored blog bodies use the encoded form as well.
//!
//! A literal `|||` in the input is itself escaped as `|||PIPES|||`, so text
//! that happens to contain sentinel-like markers still round-trips.

#[cfg(test)]
#[path = "whitespace_test.rs"]
mod whitespace_test;

use std::fmt::Write;

const MARK: &str = "|||";
const NEWLINE: &str = "|||NEWLINE|||";
const TAB: &str = "|||TAB|||";
const CARRIAGE_RETURN: &str = "|||CARRIAGE_RETURN|||";
const PIPES: &str = "|||PIPES|||";
const SPACES_PREFIX: &str = "|||SPACES_";

/// Longest space run a `SPACES_n` sentinel may expand to.
pub const MAX_SPACES_RUN: usize = 4096;

/// Replace formatting-significant whitespace with sentinels.
#[must_use]
pub fn encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(c) = rest.chars().next() {
        if rest.starts_with(MARK) {
            out.push_str(PIPES);
            rest = &rest[MARK.len()..];
            continue;
        }
        match c {
            '\n' => out.push_str(NEWLINE),
            '\t' => out.push_str(TAB),
            '\r' => out.push_str(CARRIAGE_RETURN),
            ' ' => {
                let run = rest.bytes().take_while(|&b| b == b' ').count();
                push_spaces(&mut out, run);
                rest = &rest[run..];
                continue;
            }
            other => out.push(other),
        }
        rest = &rest[c.len_utf8()..];
    }
    out
}

/// Runs longer than [`MAX_SPACES_RUN`] are split across several sentinels.
fn push_spaces(out: &mut String, mut run: usize) {
    while run > 0 {
        let chunk = run.min(MAX_SPACES_RUN);
        if chunk == 1 {
            out.push(' ');
        } else {
            let _ = write!(out, "{SPACES_PREFIX}{chunk}{MARK}");
        }
        run -= chunk;
    }
}

/// Restore whitespace from sentinels. Unknown `|||` sequences pass through.
#[must_use]
pub fn decode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find(MARK) {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        if let Some(consumed) = decode_sentinel(tail, &mut out) {
            rest = &tail[consumed..];
        } else {
            out.push('|');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    out
}

/// Expand the sentinel at the start of `tail` into `out`, returning how many
/// bytes it occupied.
fn decode_sentinel(tail: &str, out: &mut String) -> Option<usize> {
    for (sentinel, replacement) in [(NEWLINE, "\n"), (TAB, "\t"), (CARRIAGE_RETURN, "\r"), (PIPES, MARK)] {
        if tail.starts_with(sentinel) {
            out.push_str(replacement);
            return Some(sentinel.len());
        }
    }

    let body = tail.strip_prefix(SPACES_PREFIX)?;
    let digits = body.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 || !body[digits..].starts_with(MARK) {
        return None;
    }
    let run: usize = body[..digits].parse().ok()?;
    if run > MAX_SPACES_RUN {
        return None;
    }
    out.extend(std::iter::repeat_n(' ', run));
    Some(SPACES_PREFIX.len() + digits + MARK.len())
}
