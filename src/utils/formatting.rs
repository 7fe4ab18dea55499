//! Formatting utilities used for CLI outputs.

use unicode_width::UnicodeWidthStr;

/// Pads to `width` terminal columns; accented letters count as one column.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{s}{}", " ".repeat(width - w))
    }
}

/// Display width of the widest value, at least `min`.
pub fn max_width<'a, I>(values: I, min: usize) -> usize
where
    I: IntoIterator<Item = &'a str>,
{
    values
        .into_iter()
        .map(UnicodeWidthStr::width)
        .fold(min, usize::max)
}
