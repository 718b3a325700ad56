use crate::ui::model::{Model, FOLDERS_PANE_WIDTH, MODELINE_LINES, SNIPPETS_PANE_WIDTH};
use crate::ui::render::content::render_content;
use crate::ui::render::folders::render_folders;
use crate::ui::render::modeline::render_modeline;
use crate::ui::render::snippets::render_snippets;
use crate::ui::render::util::join_columns;

/// Assembles the full frame: the visible pane columns joined row-wise with
/// the modeline appended.
pub fn render_full(m: &Model) -> String {
    let body_height = m.height.saturating_sub(MODELINE_LINES).max(1);

    let mut cols: Vec<Vec<String>> = Vec::new();
    let mut used = 0usize;
    if m.folders_visible() {
        cols.push(render_folders(m, body_height));
        used += FOLDERS_PANE_WIDTH;
    }
    cols.push(render_snippets(m, body_height));
    used += SNIPPETS_PANE_WIDTH;

    let content_width = m.width.saturating_sub(used).max(10);
    cols.push(render_content(m, content_width, body_height));

    let mut lines = join_columns(cols);
    lines.push(render_modeline(m));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::model::{test_model, Pane};
    use crate::ui::Msg;
    use regex::Regex;

    // helper to strip ANSI CSI sequences from rendered output for assertions
    fn strip_ansi(s: &str) -> String {
        let re = Regex::new(r"\x1b\[[0-9;?]*[ -/]*[@-~]").unwrap();
        re.replace_all(s, "").to_string()
    }

    #[test]
    fn render_full_matches_dimensions() {
        // sample sizes to validate behavior across terminal shapes, both
        // with and without the folders pane
        let sizes = [(100usize, 24usize), (120, 40), (70, 20)];

        for (w, h) in sizes.iter().cloned() {
            let mut m = test_model(&[
                ("list dir", "shell"),
                ("greet", "rust"),
                ("loop", "rust"),
            ]);
            m.store.update(1, "ls -la\npwd");
            crate::ui::handle_update(
                &mut m,
                Msg::WindowSize {
                    width: w,
                    height: h,
                },
            );

            let out = render_full(&m);
            let stripped = strip_ansi(&out);
            let lines: Vec<&str> = stripped.lines().collect();
            assert_eq!(
                lines.len(),
                h,
                "height mismatch for {w}x{h}: got {} lines\n<<output>>\n{stripped}",
                lines.len(),
            );
            for (idx, line) in lines.iter().enumerate() {
                let lw = line.chars().count();
                assert_eq!(
                    lw, w,
                    "width mismatch at line {idx} for {w}x{h}: got {lw} chars\nline: `{line}`\n<<output>>\n{stripped}"
                );
            }
        }
    }

    #[test]
    fn folders_pane_hidden_on_narrow_terminals() {
        let mut m = test_model(&[("a", "folder1")]);
        crate::ui::handle_update(
            &mut m,
            Msg::WindowSize {
                width: 70,
                height: 20,
            },
        );
        let stripped = strip_ansi(&render_full(&m));
        assert!(!stripped.contains("Folders"));
        assert!(stripped.contains("Snippets"));
    }

    #[test]
    fn scenario_folder_selection_drives_list_and_content() {
        let mut m = test_model(&[("A", "folder1"), ("B", "folder1"), ("C", "folder2")]);
        m.store.update(1, "alpha content");
        m.store.update(3, "gamma content");
        crate::ui::handle_update(
            &mut m,
            Msg::WindowSize {
                width: 120,
                height: 30,
            },
        );
        m.set_focus(Pane::Folders);
        m.move_cursor(1); // folder1

        let stripped = strip_ansi(&render_full(&m));
        assert!(stripped.contains("A"));
        assert!(stripped.contains("B"));
        assert!(!stripped.contains("gamma content"));
        assert!(stripped.contains("alpha content"), "content pane shows A");
    }

    #[test]
    fn modeline_is_the_last_line() {
        let mut m = test_model(&[]);
        crate::ui::handle_update(
            &mut m,
            Msg::WindowSize {
                width: 100,
                height: 24,
            },
        );
        let out = render_full(&m);
        let stripped = strip_ansi(&out);
        let last = stripped.lines().last().unwrap();
        assert!(last.contains("search"));
    }
}
