//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Formats a count as "N author" / "N authors".
///
/// Usage in templates: `{{ authors.len()|author_count }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn author_count(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    let count = value.to_string();
    let noun = if count == "1" { "author" } else { "authors" };
    Ok(format!("{count} {noun}"))
}
