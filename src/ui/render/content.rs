use crate::ui::model::{Model, Pane, PANE_CHROME_LINES};
use crate::ui::render::util::{pad_block, truncate_chars};

const GUTTER_WIDTH: usize = 6; // "nnn │ "

/// Renders the content preview: the selected snippet's lines from the
/// scroll offset, or the empty-state hint when the filtered set is empty.
pub fn render_content(m: &Model, width: usize, height: usize) -> Vec<String> {
    let focused = m.focus == Pane::Content;
    let s = if focused {
        &m.styles.content.focused
    } else {
        &m.styles.content.blurred
    };

    let Some(snippet) = m.selected_snippet() else {
        return pad_block(empty_hint(m, width), width, height);
    };

    let bar = s
        .title_bar
        .clone()
        .width((width.saturating_sub(2)) as i32)
        .render(&truncate_chars(&snippet.title, width.saturating_sub(4)));
    let mut lines = vec![format!(" {bar}"), String::new()];

    // the scroll offset is the top visible line
    let body_rows = height.saturating_sub(PANE_CHROME_LINES);
    let start = m.content_scroll.min(snippet.content.len());
    let end = usize::min(snippet.content.len(), start + body_rows);
    let text_width = width.saturating_sub(GUTTER_WIDTH + 2);
    for (i, line) in snippet.content[start..end].iter().enumerate() {
        let number = s.line_number.render(&format!("{:>3} │ ", start + i + 1));
        lines.push(format!(" {number}{}", truncate_chars(line, text_width)));
    }

    pad_block(lines, width, height)
}

// Hint block shown instead of a blank area, naming the key that creates a
// snippet.
fn empty_hint(m: &Model, width: usize) -> Vec<String> {
    let s = if m.focus == Pane::Content {
        &m.styles.content.focused
    } else {
        &m.styles.content.blurred
    };
    let key = m.keys.new_snippet.help_key;
    let plain = format!("Press {key} to create a new snippet.");
    let line = if plain.chars().count() + 2 > width {
        format!(" {}", s.empty_hint.render(&truncate_chars(&plain, width.saturating_sub(2))))
    } else {
        format!(
            " {}{}{}",
            s.empty_hint.render("Press "),
            s.empty_hint_key.render(key),
            s.empty_hint.render(" to create a new snippet.")
        )
    };
    vec![String::new(), line]
}
