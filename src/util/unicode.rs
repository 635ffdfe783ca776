use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width of a string in terminal cells.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate to at most `max_cells` terminal cells, appending `…` when
/// anything was cut.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if max_cells == 0 {
        return String::new();
    }
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 1 {
        return "\u{2026}".to_string();
    }

    let budget = max_cells - 1;
    let mut out = String::new();
    let mut used = 0;
    for g in s.graphemes(true) {
        let w = UnicodeWidthStr::width(g);
        if used + w > budget {
            break;
        }
        used += w;
        out.push_str(g);
    }
    out.push('\u{2026}');
    out
}

/// Byte offset of the grapheme boundary after `offset`, or None at the end.
pub fn next_grapheme_boundary(s: &str, offset: usize) -> Option<usize> {
    if offset >= s.len() {
        return None;
    }
    let rest = &s[offset..];
    let step = rest.graphemes(true).next().map_or(rest.len(), str::len);
    Some(offset + step)
}

/// Byte offset of the grapheme boundary before `offset`, or None at the start.
pub fn prev_grapheme_boundary(s: &str, offset: usize) -> Option<usize> {
    if offset == 0 {
        return None;
    }
    s[..offset]
        .grapheme_indices(true)
        .last()
        .map(|(i, _)| i)
        .or(Some(0))
}

/// Byte offset of the start of the word left of `offset` (whitespace-delimited).
pub fn word_boundary_left(s: &str, offset: usize) -> usize {
    let mut graphemes: Vec<(usize, &str)> = s[..offset].grapheme_indices(true).collect();

    // Drop trailing whitespace, then the word itself
    while graphemes
        .last()
        .is_some_and(|(_, g)| g.chars().all(char::is_whitespace))
    {
        graphemes.pop();
    }
    while graphemes
        .last()
        .is_some_and(|(_, g)| !g.chars().all(char::is_whitespace))
    {
        graphemes.pop();
    }

    graphemes.last().map_or(0, |(i, g)| i + g.len())
}

/// Terminal column of the given byte offset.
pub fn byte_offset_to_col(s: &str, offset: usize) -> usize {
    display_width(&s[..offset.min(s.len())])
}
