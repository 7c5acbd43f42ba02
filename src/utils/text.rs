use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate text to the given display width, ending with an ellipsis.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    const ELLIPSIS: &str = "...";
    let ellipsis_width = ELLIPSIS.width();

    if max_width <= ellipsis_width {
        return ELLIPSIS[..max_width].to_string();
    }

    let target_width = max_width - ellipsis_width;
    let mut result = String::new();
    let mut current_width = 0;

    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if current_width + ch_width > target_width {
            break;
        }
        result.push(ch);
        current_width += ch_width;
    }

    result.push_str(ELLIPSIS);
    result
}

/// Pad text with trailing spaces up to the given display width.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - text_width))
    }
}

/// Display width of a string, Unicode-aware.
pub fn display_width(text: &str) -> usize {
    text.width()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Hello", 10), "Hello");
        assert_eq!(truncate_to_width("Hello World", 8), "Hello...");
        // Width smaller than the ellipsis itself
        assert_eq!(truncate_to_width("Hello World", 2), "..");
    }

    #[test]
    fn test_pad_to_width() {
        assert_eq!(pad_to_width("Hello", 8), "Hello   ");
        assert_eq!(pad_to_width("Hello World", 5), "Hello World");
    }

    #[test]
    fn test_display_width_wide_chars() {
        // CJK characters are two columns wide
        assert_eq!(display_width("サーバ"), 6);
        assert_eq!(pad_to_width("サーバ", 8).len(), "サーバ".len() + 2);
    }
}
