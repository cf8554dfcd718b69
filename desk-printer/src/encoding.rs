//! Column width utilities for CJK text
//!
//! Terminals render a CJK character across two columns, the same way
//! thermal printers spend two GBK bytes on it. The GBK byte length of a
//! character is therefore used as its column width:
//! - ASCII is one column
//! - GBK-encodable CJK is two columns
//! - Anything GBK cannot encode (emoji etc.) is counted as two columns

/// Column width of a single character
fn char_width(c: char) -> usize {
    if c.is_ascii() {
        return 1;
    }
    let mut tmp = [0u8; 4];
    let (cow, _, had_errors) = encoding_rs::GBK.encode(c.encode_utf8(&mut tmp));
    if had_errors { 2 } else { cow.len().max(1) }
}

/// Get the display width of a string in terminal columns
pub fn display_width(s: &str) -> usize {
    s.chars().map(char_width).sum()
}

/// Truncate a string to fit within a display width
///
/// A wide character that would straddle the limit is dropped.
pub fn truncate_display(s: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut result = String::new();
    for c in s.chars() {
        let w = char_width(c);
        if width + w > max_width {
            break;
        }
        result.push(c);
        width += w;
    }
    result
}

/// Pad a string to a specific display width
///
/// If the string is longer than the width, it will be truncated.
pub fn pad_display(s: &str, width: usize, align_right: bool) -> String {
    let current_width = display_width(s);
    if current_width > width {
        // Truncation may leave one column free when a wide char is cut
        return pad_display(&truncate_display(s, width), width, align_right);
    }
    let spaces = width - current_width;
    if align_right {
        format!("{}{}", " ".repeat(spaces), s)
    } else {
        format!("{}{}", s, " ".repeat(spaces))
    }
}
