//! Output formatting helpers.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print a value as compact or pretty-printed JSON.
pub fn json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", json);
    Ok(())
}

/// Print one JSON document per item, then the next page token if any.
pub fn items<T: Serialize>(items: &[T], next_page_token: Option<&str>, pretty: bool) -> Result<()> {
    if items.is_empty() {
        eprintln!("{}", "No results.".dimmed());
    }

    for item in items {
        json(item, pretty)?;
    }

    if let Some(token) = next_page_token {
        eprintln!("{}: {}", "Next page token".dimmed(), token);
    }

    Ok(())
}
