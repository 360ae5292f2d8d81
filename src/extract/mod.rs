// src/extract/mod.rs
// =============================================================================
// This module pulls data out of a downloaded page body.
//
// Submodules:
// - email: Finds email addresses in the page text
// - links: Finds outbound links, drops asset links, caps how many we follow
//
// Everything here is a pure function over &str. The regexes are compiled once
// and shared, so any number of crawl tasks can call these at the same time.
// =============================================================================

mod email;
mod links;

pub use email::extract_emails;
pub use links::{extract_links, select_links};
