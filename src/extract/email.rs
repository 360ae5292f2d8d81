// src/extract/email.rs
// =============================================================================
// This module extracts email addresses from page text.
//
// We don't parse HTML here. The whole body is scanned with a single regex,
// so addresses are found in text, attributes, scripts, comments, anywhere.
//
// Shape of a match:
//   local-part  = one or more of letters, digits, ~ _ + -
//   domain      = one or more label groups of letters/hyphens, each
//                 optionally followed by a dot (so a trailing dot is kept)
//
// Rust concepts:
// - lazy_static!: A global that is built on first use, then shared
// - Iterators: find_iter() walks all non-overlapping matches in order
// =============================================================================

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"[a-zA-Z0-9~_\-+]+@([a-zA-Z\-]+\.?)+").expect("email regex is valid");
}

// Extracts every email address in `body`
//
// Returns matches in order of appearance. Duplicates are kept: a page that
// mentions the same address twice yields it twice.
//
// Example:
//   body = "contact a@b.co and x@y-z.org"
//   result = ["a@b.co", "x@y-z.org"]
pub fn extract_emails(body: &str) -> Vec<String> {
    EMAIL_REGEX
        .find_iter(body)
        .map(|m| m.as_str().to_string())
        .collect()
}
