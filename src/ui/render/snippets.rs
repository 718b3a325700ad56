use crate::ui::model::{Mode, Model, Pane, PANE_CHROME_LINES, SNIPPETS_PANE_WIDTH};
use crate::ui::render::util::{pad_block, truncate_chars, window};

/// Renders the snippets pane. The title bar doubles as the modal surface:
/// it shows the filter or name-entry buffer, the delete confirmation
/// prompt, and the copied/deleted flashes.
pub fn render_snippets(m: &Model, height: usize) -> Vec<String> {
    let focused = m.focus == Pane::Snippets;
    let s = if focused {
        &m.styles.snippets.focused
    } else {
        &m.styles.snippets.blurred
    };
    let width = SNIPPETS_PANE_WIDTH;

    let (bar_style, bar_text) = match m.mode {
        Mode::Browsing => (&s.title_bar, "Snippets".to_string()),
        Mode::Filtering => (&s.title_bar, format!("Find: {}", m.input)),
        Mode::AwaitingNewName => (&s.title_bar, format!("New: {}", m.input)),
        Mode::AwaitingRename => (&s.title_bar, format!("Rename: {}", m.input)),
        Mode::ConfirmingDelete => (&s.deleted_title_bar, "Delete? (y/N)".to_string()),
        Mode::FlashCopied => (&s.copied_title_bar, "Copied!".to_string()),
        Mode::FlashDeleted => (&s.deleted_title_bar, "Deleted!".to_string()),
    };
    let bar = bar_style
        .clone()
        .width((width - 2) as i32)
        .render(&truncate_chars(&bar_text, width - 4));
    let mut lines = vec![format!(" {bar}"), String::new()];

    let indices = m.filtered_indices();
    // two rows per item: title and folder/language subtitle
    let visible_items = height.saturating_sub(PANE_CHROME_LINES) / 2;
    let (start, end) = window(indices.len(), m.snippet_cursor, visible_items);
    for (i, &store_idx) in indices[start..end].iter().enumerate() {
        let snippet = &m.store.snippets()[store_idx];
        let selected = start + i == m.snippet_cursor;
        let (title_style, subtitle_style) = match (m.mode, selected) {
            (Mode::FlashCopied, true) => (&s.copied_title, &s.copied_subtitle),
            (Mode::ConfirmingDelete | Mode::FlashDeleted, true) => {
                (&s.deleted_title, &s.deleted_subtitle)
            }
            (_, true) => (&s.selected_title, &s.selected_subtitle),
            (_, false) => (&s.unselected_title, &s.unselected_subtitle),
        };
        let title = truncate_chars(&snippet.title, width - 4);
        let subtitle = truncate_chars(
            &format!("{} • {}", snippet.folder, snippet.language),
            width - 4,
        );
        lines.push(format!("  {}", title_style.render(&title)));
        lines.push(format!("  {}", subtitle_style.render(&subtitle)));
    }

    pad_block(lines, width, height)
}
