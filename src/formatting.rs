/// Shared formatting utilities for terminal output
use unicode_width::UnicodeWidthStr;

use crate::config::DisplayConfig;

/// Box-drawing and symbol characters used for output
///
/// Supports both Unicode and ASCII variants so the output stays
/// readable on terminals without Unicode support.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxChars {
    pub horizontal: String,
    pub double_horizontal: String,
    pub vertical: String,
    pub selector: String,
    pub liked: String,
    pub not_liked: String,
    pub sort_asc: String,
    pub sort_desc: String,
    pub page_prev: String,
    pub page_next: String,
}

impl BoxChars {
    /// Unicode box-drawing characters
    pub fn unicode() -> Self {
        BoxChars {
            horizontal: "─".to_string(),
            double_horizontal: "═".to_string(),
            vertical: "│".to_string(),
            selector: "►".to_string(),
            liked: "♥".to_string(),
            not_liked: "♡".to_string(),
            sort_asc: "▲".to_string(),
            sort_desc: "▼".to_string(),
            page_prev: "‹".to_string(),
            page_next: "›".to_string(),
        }
    }

    /// ASCII fallback characters
    pub fn ascii() -> Self {
        BoxChars {
            horizontal: "-".to_string(),
            double_horizontal: "=".to_string(),
            vertical: "|".to_string(),
            selector: ">".to_string(),
            liked: "*".to_string(),
            not_liked: "-".to_string(),
            sort_asc: "^".to_string(),
            sort_desc: "v".to_string(),
            page_prev: "<".to_string(),
            page_next: ">".to_string(),
        }
    }

    /// Select the character set based on the use_unicode setting
    pub fn from_use_unicode(use_unicode: bool) -> Self {
        if use_unicode {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }
}

impl Default for BoxChars {
    fn default() -> Self {
        Self::unicode()
    }
}

/// Format a header with an underline
///
/// `double_line` selects the heavier separator for top-level headers.
pub fn format_header(text: &str, double_line: bool, display: &DisplayConfig) -> String {
    let separator_char = if double_line {
        &display.box_chars.double_horizontal
    } else {
        &display.box_chars.horizontal
    };
    format!("{}\n{}\n", text, separator_char.repeat(text.len()))
}

/// Pad or truncate `text` to exactly `width` display columns
///
/// Width is measured in terminal columns, not bytes or chars, so
/// double-width characters count as two.
pub fn fit_width(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width <= width {
        let padding = width - text_width;
        return format!("{}{}", text, " ".repeat(padding));
    }

    let mut result = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.to_string().width();
        if used + w > width {
            break;
        }
        result.push(c);
        used += w;
    }
    // A truncated double-width char can leave one column short
    result.push_str(&" ".repeat(width - used));
    result
}
