use unicode_width::UnicodeWidthStr;

/// Return the number of terminal columns that `s` occupies, saturating at
/// `u16::MAX`
pub(crate) fn text_width(s: &str) -> u16 {
    u16::try_from(s.width()).unwrap_or(u16::MAX)
}

/// Return the column at which `s` should start in order to be centered on a
/// line `line_width` columns wide.  Text wider than the line starts at the
/// left edge.
pub(crate) fn centered_col(line_width: u16, s: &str) -> u16 {
    line_width.saturating_sub(text_width(s)) / 2
}
