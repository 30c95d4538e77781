//! Text helper commands: price normalization, slugs and truncation.

use storefront_query::{extract_numeric_price, normalize_price, slugify, truncate};

pub(crate) fn run_price(raw: &str) {
    println!("{}", normalize_price(raw));
    println!("numeric: {}", extract_numeric_price(raw));
}

/// Slugify the words joined by single spaces.
pub(crate) fn run_slug(words: &[String]) {
    println!("{}", slugify(&words.join(" ")));
}

pub(crate) fn run_truncate(text: &str, max_len: usize) {
    println!("{}", truncate(text, max_len));
}
