use crate::ui::model::{Model, Pane, FOLDERS_PANE_WIDTH, PANE_CHROME_LINES};
use crate::ui::render::util::{pad_block, truncate_chars, window};

/// Renders the folders pane as a fixed-width column of exactly `height`
/// lines: title bar, spacer, then a scrolling window of folder rows.
pub fn render_folders(m: &Model, height: usize) -> Vec<String> {
    let focused = m.focus == Pane::Folders;
    let s = if focused {
        &m.styles.folders.focused
    } else {
        &m.styles.folders.blurred
    };
    let width = FOLDERS_PANE_WIDTH;

    let bar_text = truncate_chars("Folders", width - 4);
    let bar = s
        .title_bar
        .clone()
        .width((width - 2) as i32)
        .render(&bar_text);
    let mut lines = vec![format!(" {bar}"), String::new()];

    let rows = m.folder_rows();
    let visible_rows = height.saturating_sub(PANE_CHROME_LINES);
    let (start, end) = window(rows.len(), m.folder_cursor, visible_rows);
    for (i, (name, count)) in rows[start..end].iter().enumerate() {
        let style = if start + i == m.folder_cursor {
            &s.selected
        } else {
            &s.unselected
        };
        let label = truncate_chars(&format!("{name} ({count})"), width - 4);
        lines.push(format!("  {}", style.render(&label)));
    }

    pad_block(lines, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::model::test_model;
    use regex::Regex;

    fn strip_ansi(s: &str) -> String {
        let re = Regex::new(r"\x1b\[[0-9;?]*[ -/]*[@-~]").unwrap();
        re.replace_all(s, "").to_string()
    }

    #[test]
    fn test_folder_rows_show_all_and_counts() {
        let m = test_model(&[("a", "folder1"), ("b", "folder1"), ("c", "folder2")]);
        let out = strip_ansi(&render_folders(&m, 20).join("\n"));
        assert!(out.contains("Folders"));
        assert!(out.contains("All (3)"));
        assert!(out.contains("folder1 (2)"));
        assert!(out.contains("folder2 (1)"));
    }

    #[test]
    fn test_deleted_folder_disappears_from_projection_render() {
        let mut m = test_model(&[("a", "folder1"), ("c", "folder2")]);
        let id = m
            .store
            .snippets()
            .iter()
            .find(|s| s.folder == "folder2")
            .map(|s| s.id)
            .unwrap();
        m.store.delete(id);
        m.clamp_cursors();
        let out = strip_ansi(&render_folders(&m, 20).join("\n"));
        assert!(!out.contains("folder2"));
        assert!(out.contains("folder1"));
    }

    #[test]
    fn test_block_height_is_exact() {
        let m = test_model(&[("a", "folder1")]);
        assert_eq!(render_folders(&m, 12).len(), 12);
    }
}
