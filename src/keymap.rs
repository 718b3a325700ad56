use crossterm::event::{KeyCode, KeyModifiers};

/// One action's key binding: the key combinations that trigger it and the
/// key/description pair shown in help.
#[derive(Clone, Debug)]
pub struct Binding {
    keys: Vec<(KeyCode, KeyModifiers)>,
    pub help_key: &'static str,
    pub help_desc: &'static str,
}

impl Binding {
    pub fn new(
        keys: Vec<(KeyCode, KeyModifiers)>,
        help_key: &'static str,
        help_desc: &'static str,
    ) -> Self {
        Self {
            keys,
            help_key,
            help_desc,
        }
    }

    pub fn matches(&self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        self.keys.iter().any(|(k, m)| *k == code && *m == modifiers)
    }
}

/// Mappings of actions to key bindings.
#[derive(Clone, Debug)]
pub struct KeyMap {
    pub quit: Binding,
    pub search: Binding,
    pub toggle_help: Binding,
    pub new_snippet: Binding,
    pub rename_snippet: Binding,
    pub delete_snippet: Binding,
    pub edit_snippet: Binding,
    pub copy_snippet: Binding,
    pub confirm: Binding,
    pub cancel: Binding,
    pub next_pane: Binding,
    pub previous_pane: Binding,
}

fn ch(c: char) -> (KeyCode, KeyModifiers) {
    (KeyCode::Char(c), KeyModifiers::NONE)
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            quit: Binding::new(
                vec![ch('q'), (KeyCode::Char('c'), KeyModifiers::CONTROL)],
                "q",
                "exit",
            ),
            search: Binding::new(vec![ch('/')], "/", "search"),
            toggle_help: Binding::new(
                vec![ch('?'), (KeyCode::Char('?'), KeyModifiers::SHIFT)],
                "?",
                "help",
            ),
            new_snippet: Binding::new(vec![ch('n')], "n", "new"),
            rename_snippet: Binding::new(vec![ch('r')], "r", "rename"),
            delete_snippet: Binding::new(vec![ch('x')], "x", "delete"),
            edit_snippet: Binding::new(vec![ch('e')], "e", "edit"),
            copy_snippet: Binding::new(vec![ch('c')], "c", "copy"),
            confirm: Binding::new(
                vec![ch('y'), (KeyCode::Enter, KeyModifiers::NONE)],
                "y",
                "confirm",
            ),
            cancel: Binding::new(
                vec![
                    (KeyCode::Char('N'), KeyModifiers::SHIFT),
                    (KeyCode::Char('N'), KeyModifiers::NONE),
                    (KeyCode::Esc, KeyModifiers::NONE),
                ],
                "N",
                "cancel",
            ),
            next_pane: Binding::new(vec![(KeyCode::Tab, KeyModifiers::NONE)], "tab", "navigate"),
            previous_pane: Binding::new(
                vec![(KeyCode::BackTab, KeyModifiers::SHIFT), (KeyCode::BackTab, KeyModifiers::NONE)],
                "shift+tab",
                "navigate",
            ),
        }
    }
}

impl KeyMap {
    /// Quick help shown on the modeline.
    pub fn short_help(&self) -> Vec<&Binding> {
        vec![
            &self.next_pane,
            &self.search,
            &self.edit_snippet,
            &self.delete_snippet,
            &self.copy_snippet,
            &self.new_snippet,
        ]
    }

    /// Expanded help shown when toggled.
    pub fn full_help(&self) -> Vec<&Binding> {
        vec![
            &self.next_pane,
            &self.previous_pane,
            &self.search,
            &self.new_snippet,
            &self.rename_snippet,
            &self.edit_snippet,
            &self.delete_snippet,
            &self.copy_snippet,
            &self.toggle_help,
            &self.quit,
        ]
    }
}
