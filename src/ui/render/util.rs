use lipgloss::Style;

/// Truncates plain (unstyled) text to at most `width` characters. Styling
/// happens after truncation so escape sequences are never cut.
pub fn truncate_chars(s: &str, width: usize) -> String {
    s.chars().take(width).collect()
}

/// Pads every line to `width` columns and the block to exactly `rows`
/// lines. Padding goes through a lipgloss width style so already-styled
/// lines are measured by display width, not byte length.
pub fn pad_block(lines: Vec<String>, width: usize, rows: usize) -> Vec<String> {
    let line_style = Style::new().width(width as i32);
    let mut normalized: Vec<String> = lines.into_iter().map(|l| line_style.render(&l)).collect();
    if normalized.len() > rows {
        normalized.truncate(rows);
    } else {
        while normalized.len() < rows {
            normalized.push(line_style.render(""));
        }
    }
    normalized
}

/// Joins equally tall pane columns row by row.
pub fn join_columns(cols: Vec<Vec<String>>) -> Vec<String> {
    let rows = cols.iter().map(|c| c.len()).max().unwrap_or(0);
    (0..rows)
        .map(|row| {
            cols.iter()
                .map(|col| col.get(row).map(String::as_str).unwrap_or(""))
                .collect::<Vec<_>>()
                .concat()
        })
        .collect()
}

/// Scroll window over `len` items keeping `cursor` visible in `rows` rows.
/// Returns the half-open range to render.
pub fn window(len: usize, cursor: usize, rows: usize) -> (usize, usize) {
    if rows == 0 || len == 0 {
        return (0, 0);
    }
    let start = if cursor >= rows { cursor + 1 - rows } else { 0 };
    (start, usize::min(len, start + rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("hello", 3), "hel");
        assert_eq!(truncate_chars("hi", 10), "hi");
    }

    #[test]
    fn test_window_keeps_cursor_visible() {
        assert_eq!(window(10, 0, 4), (0, 4));
        assert_eq!(window(10, 3, 4), (0, 4));
        assert_eq!(window(10, 4, 4), (1, 5));
        assert_eq!(window(10, 9, 4), (6, 10));
        assert_eq!(window(2, 0, 4), (0, 2));
        assert_eq!(window(0, 0, 4), (0, 0));
    }

    #[test]
    fn test_join_columns_concatenates_rows() {
        let joined = join_columns(vec![
            vec!["a1".to_string(), "a2".to_string()],
            vec!["b1".to_string(), "b2".to_string()],
        ]);
        assert_eq!(joined, vec!["a1b1", "a2b2"]);
    }

    #[test]
    fn test_pad_block_fixes_row_count() {
        let block = pad_block(vec!["x".to_string()], 4, 3);
        assert_eq!(block.len(), 3);
    }
}
