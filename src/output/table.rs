//
//  hub-cli
//  output/table.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Table formatting helpers built on `comfy_table`.

use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use console::style;

/// A table with box-drawing borders that fits the terminal width.
pub fn create_table<I, S>(headers: I) -> Table
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers.into_iter().map(Into::into).collect::<Vec<String>>());
    table
}

/// Colors an issue, pull request or commit status.
pub fn format_status(status: &str, color: bool) -> String {
    if !color {
        return status.to_string();
    }

    match status.to_lowercase().as_str() {
        "open" | "success" => style(status).green().to_string(),
        "merged" => style(status).blue().to_string(),
        "closed" | "failure" | "error" => style(status).red().to_string(),
        "pending" | "draft" => style(status).yellow().to_string(),
        _ => status.to_string(),
    }
}

/// Shortens `s` to at most `max_len` characters, ending in `...` when cut.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len > 3 {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{kept}...")
    } else {
        s.chars().take(max_len).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a long issue title", 10), "a long ...");
        assert_eq!(truncate("héllo wörld", 8), "héllo...");
        assert_eq!(truncate("abcdef", 2), "ab");
    }

    #[test]
    fn test_format_status_without_color() {
        assert_eq!(format_status("success", false), "success");
    }

    #[test]
    fn test_table_has_headers() {
        let mut table = create_table(["#", "Title"]);
        table.add_row(vec!["1", "Fix bug"]);
        let rendered = table.to_string();
        assert!(rendered.contains("Title"));
        assert!(rendered.contains("Fix bug"));
    }
}
