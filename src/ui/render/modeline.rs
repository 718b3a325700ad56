use crate::keymap::Binding;
use crate::ui::model::Model;
use crate::ui::render::util::truncate_chars;

/// Renders the bottom line: the transient status message when one is set,
/// otherwise the short (or full, when toggled) help pairs.
pub fn render_modeline(m: &Model) -> String {
    let width = m.width;
    if !m.status.is_empty() {
        let text = truncate_chars(&m.status, width.saturating_sub(2));
        return m
            .styles
            .status_bar
            .clone()
            .width(width as i32)
            .render(&text);
    }

    let bindings = if m.show_help {
        m.keys.full_help()
    } else {
        m.keys.short_help()
    };
    render_help(m, &bindings, width)
}

// Key/description pairs fitted to the width; pairs that no longer fit are
// dropped from the right.
fn render_help(m: &Model, bindings: &[&Binding], width: usize) -> String {
    let sep = "  ";
    let mut plain_len = 0usize;
    let mut rendered = String::new();
    let mut first = true;
    for b in bindings {
        let pair_len = b.help_key.chars().count() + 1 + b.help_desc.chars().count();
        let added = pair_len + if first { 0 } else { sep.len() };
        if plain_len + added + 2 > width {
            break;
        }
        if !first {
            rendered.push_str(&m.styles.status_bar.clone().padding(0, 0, 0, 0).render(sep));
        }
        rendered.push_str(&m.styles.status_key.render(b.help_key));
        rendered.push_str(
            &m.styles
                .status_bar
                .clone()
                .padding(0, 0, 0, 0)
                .render(&format!(" {}", b.help_desc)),
        );
        plain_len += added;
        first = false;
    }
    // pad the remainder so the bar spans the full width
    let remainder = width.saturating_sub(plain_len + 2);
    format!(
        "{}{}{}",
        m.styles.status_bar.clone().padding(0, 0, 0, 0).render(" "),
        rendered,
        m.styles
            .status_bar
            .clone()
            .padding(0, 0, 0, 0)
            .render(&" ".repeat(remainder + 1)),
    )
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
    fn test_shows_short_help_by_default() {
        let mut m = test_model(&[]);
        m.set_size(80, 24);
        let out = strip_ansi(&render_modeline(&m));
        assert!(out.contains("/ search"));
        assert!(out.contains("n new"));
        assert!(!out.contains("q exit"));
    }

    #[test]
    fn test_full_help_when_toggled() {
        let mut m = test_model(&[]);
        m.set_size(120, 24);
        m.show_help = true;
        let out = strip_ansi(&render_modeline(&m));
        assert!(out.contains("q exit"));
        assert!(out.contains("r rename"));
    }

    #[test]
    fn test_status_message_takes_over_the_line() {
        let mut m = test_model(&[]);
        m.set_size(80, 24);
        m.set_status("unable to persist snippets: disk full");
        let out = strip_ansi(&render_modeline(&m));
        assert!(out.contains("disk full"));
        assert!(!out.contains("search"));
    }
}
