use crate::config::Config;
use crate::keymap::KeyMap;
use crate::snippet::{Snippet, SnippetStore};
use crate::ui::render::styles::{default_styles, Styles};

// layout constants reused by rendering code
pub const FOLDERS_PANE_WIDTH: usize = 22;
pub const SNIPPETS_PANE_WIDTH: usize = 35;
pub const MIN_FOLDERS_WIDTH: usize = 80;
pub const MODELINE_LINES: usize = 1;
pub const PANE_CHROME_LINES: usize = 2;
pub const DEFAULT_WIDTH: usize = 80;
pub const DEFAULT_HEIGHT: usize = 24;

/// The three visual regions. Exactly one holds input focus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pane {
    Folders,
    Snippets,
    Content,
}

// Fixed cyclic focus order; hidden panes are skipped.
const FOCUS_ORDER: [Pane; 3] = [Pane::Snippets, Pane::Content, Pane::Folders];

/// Modal sub-state gating which key events reach the panes. Exactly one is
/// active; dispatch matches exhaustively so impossible combinations cannot
/// be represented.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Browsing,
    Filtering,
    ConfirmingDelete,
    AwaitingNewName,
    AwaitingRename,
    FlashCopied,
    FlashDeleted,
}

#[derive(Clone)]
pub struct Model {
    pub store: SnippetStore,
    pub config: Config,
    pub styles: Styles,
    pub keys: KeyMap,

    pub focus: Pane,
    pub mode: Mode,

    // cursors
    pub folder_cursor: usize,  // 0 is the synthetic "All" row
    pub snippet_cursor: usize, // index into the filtered view
    pub content_scroll: usize,

    pub filter: String, // applied filter; `input` is live while Filtering
    pub input: String,  // shared text-entry buffer for the modal states
    pub status: String, // one-line transient status message
    pub show_help: bool,

    pub width: usize,
    pub height: usize,

    // effect hand-off fields drained by the runtime adapter after update
    pub pending_edit: Option<u64>,
    pub pending_copy: Option<String>,
    pub should_quit: bool,
}

impl Model {
    pub fn new(config: Config, store: SnippetStore) -> Self {
        let styles = default_styles(&config);
        Self {
            store,
            config,
            styles,
            keys: KeyMap::default(),
            focus: Pane::Snippets,
            mode: Mode::Browsing,
            folder_cursor: 0,
            snippet_cursor: 0,
            content_scroll: 0,
            filter: String::new(),
            input: String::new(),
            status: String::new(),
            show_help: false,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            pending_edit: None,
            pending_copy: None,
            should_quit: false,
        }
    }

    // ---- focus controller ----

    pub fn folders_visible(&self) -> bool {
        self.width >= MIN_FOLDERS_WIDTH
    }

    /// The currently visible panes in focus-cycle order. Never empty: the
    /// snippets pane is always visible.
    pub fn visible_panes(&self) -> Vec<Pane> {
        FOCUS_ORDER
            .iter()
            .copied()
            .filter(|p| *p != Pane::Folders || self.folders_visible())
            .collect()
    }

    fn shift_focus(&mut self, step: isize) {
        let panes = self.visible_panes();
        let pos = panes.iter().position(|p| *p == self.focus).unwrap_or(0);
        let len = panes.len() as isize;
        let next = (pos as isize + step).rem_euclid(len) as usize;
        self.focus = panes[next];
    }

    pub fn advance_focus(&mut self) {
        self.shift_focus(1);
    }

    pub fn retreat_focus(&mut self) {
        self.shift_focus(-1);
    }

    pub fn set_focus(&mut self, pane: Pane) {
        self.focus = pane;
    }

    // ---- projections ----

    /// Folder rows as rendered: the "All" row followed by the store's
    /// folder projection.
    pub fn folder_rows(&self) -> Vec<(String, usize)> {
        let mut rows = vec![("All".to_string(), self.store.len())];
        rows.extend(self.store.folders());
        rows
    }

    /// The folder scoping the snippet view; `None` when "All" is selected.
    pub fn selected_folder(&self) -> Option<String> {
        if self.folder_cursor == 0 {
            return None;
        }
        self.store
            .folders()
            .get(self.folder_cursor - 1)
            .map(|(name, _)| name.clone())
    }

    /// The filter the snippet view honors right now: the in-progress buffer
    /// while Filtering, the applied filter otherwise.
    pub fn active_filter(&self) -> &str {
        match self.mode {
            Mode::Filtering => &self.input,
            _ => &self.filter,
        }
    }

    /// Store indices of the snippets currently visible in the list pane.
    pub fn filtered_indices(&self) -> Vec<usize> {
        let folder = self.selected_folder();
        self.store.filtered(folder.as_deref(), self.active_filter())
    }

    pub fn selected_snippet(&self) -> Option<&Snippet> {
        let indices = self.filtered_indices();
        indices
            .get(self.snippet_cursor)
            .map(|&i| &self.store.snippets()[i])
    }

    // ---- cursor movement ----

    fn clamp_step(cursor: usize, delta: isize, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let moved = cursor as isize + delta;
        moved.clamp(0, len as isize - 1) as usize
    }

    /// Moves the focused pane's cursor, clamped to bounds with no
    /// wraparound. Selection changes reset the dependent cursors.
    pub fn move_cursor(&mut self, delta: isize) {
        match self.focus {
            Pane::Folders => {
                let len = self.folder_rows().len();
                let next = Self::clamp_step(self.folder_cursor, delta, len);
                if next != self.folder_cursor {
                    self.folder_cursor = next;
                    self.snippet_cursor = 0;
                    self.content_scroll = 0;
                }
            }
            Pane::Snippets => {
                let len = self.filtered_indices().len();
                let next = Self::clamp_step(self.snippet_cursor, delta, len);
                if next != self.snippet_cursor {
                    self.snippet_cursor = next;
                    self.content_scroll = 0;
                }
            }
            Pane::Content => {
                let len = self
                    .selected_snippet()
                    .map(|s| s.content.len())
                    .unwrap_or(0);
                self.content_scroll = Self::clamp_step(self.content_scroll, delta, len);
            }
        }
    }

    /// Pulls every cursor back into range after a mutation or resize.
    pub fn clamp_cursors(&mut self) {
        let folder_len = self.folder_rows().len();
        if self.folder_cursor >= folder_len {
            self.folder_cursor = folder_len.saturating_sub(1);
        }
        let snippet_len = self.filtered_indices().len();
        if self.snippet_cursor >= snippet_len {
            self.snippet_cursor = snippet_len.saturating_sub(1);
        }
        let content_len = self
            .selected_snippet()
            .map(|s| s.content.len())
            .unwrap_or(0);
        if self.content_scroll >= content_len {
            self.content_scroll = content_len.saturating_sub(1);
        }
    }

    pub fn set_size(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        if !self.folders_visible() && self.focus == Pane::Folders {
            self.focus = Pane::Snippets;
        }
        self.clamp_cursors();
    }

    // ---- modal transitions ----

    pub fn start_filter(&mut self) {
        self.input = self.filter.clone();
        self.mode = Mode::Filtering;
    }

    pub fn confirm_filter(&mut self) {
        self.filter = std::mem::take(&mut self.input);
        self.mode = Mode::Browsing;
        self.clamp_cursors();
    }

    pub fn cancel_filter(&mut self) {
        self.input.clear();
        self.filter.clear();
        self.mode = Mode::Browsing;
        self.clamp_cursors();
    }

    pub fn start_new(&mut self) {
        self.input.clear();
        self.mode = Mode::AwaitingNewName;
    }

    pub fn start_rename(&mut self) {
        let Some(title) = self.selected_snippet().map(|s| s.title.clone()) else {
            return;
        };
        self.input = title;
        self.mode = Mode::AwaitingRename;
    }

    /// Confirms the name-entry buffer: creates a snippet in the selected
    /// folder (or the configured default) or renames the selection. Empty
    /// input confirms nothing.
    pub fn confirm_name(&mut self) {
        let name = self.input.trim().to_string();
        if name.is_empty() {
            return;
        }
        match self.mode {
            Mode::AwaitingNewName => {
                let folder = self
                    .selected_folder()
                    .unwrap_or_else(|| self.config.default_folder.clone());
                let language = self.config.default_language.clone();
                let id = self.store.create(&name, &folder, &language);
                self.persist();
                // surface the new snippet: drop any narrowing filter and
                // select it
                self.filter.clear();
                if let Some(pos) = self
                    .filtered_indices()
                    .iter()
                    .position(|&i| self.store.snippets()[i].id == id)
                {
                    self.snippet_cursor = pos;
                    self.content_scroll = 0;
                }
            }
            Mode::AwaitingRename => {
                if let Some(id) = self.selected_snippet().map(|s| s.id) {
                    self.store.rename(id, &name);
                    self.persist();
                }
            }
            _ => {}
        }
        self.input.clear();
        self.mode = Mode::Browsing;
        self.clamp_cursors();
    }

    pub fn cancel_name(&mut self) {
        self.input.clear();
        self.mode = Mode::Browsing;
    }

    pub fn request_delete(&mut self) {
        if self.selected_snippet().is_some() {
            self.mode = Mode::ConfirmingDelete;
        }
    }

    pub fn confirm_delete(&mut self) {
        if let Some(id) = self.selected_snippet().map(|s| s.id) {
            self.store.delete(id);
            self.persist();
            self.clamp_cursors();
            self.mode = Mode::FlashDeleted;
        } else {
            self.mode = Mode::Browsing;
        }
    }

    pub fn cancel_delete(&mut self) {
        self.mode = Mode::Browsing;
    }

    /// Flash states clear on the next input event.
    pub fn clear_flash(&mut self) {
        if matches!(self.mode, Mode::FlashCopied | Mode::FlashDeleted) {
            self.mode = Mode::Browsing;
        }
    }

    // ---- operations with external effects ----

    pub fn copy_selected(&mut self) {
        let Some(text) = self.selected_snippet().map(|s| s.content_text()) else {
            return;
        };
        self.pending_copy = Some(text);
        self.mode = Mode::FlashCopied;
    }

    pub fn copy_failed(&mut self, message: &str) {
        self.status = format!("unable to copy: {message}");
        self.mode = Mode::Browsing;
    }

    pub fn request_edit(&mut self) {
        let Some(id) = self.selected_snippet().map(|s| s.id) else {
            return;
        };
        self.pending_edit = Some(id);
    }

    /// Applies edited content after the editor bridge returns.
    pub fn apply_edit(&mut self, id: u64, text: &str) {
        self.store.update(id, text);
        self.persist();
        self.content_scroll = 0;
    }

    /// Rewrites the store file; a failure becomes a status message and the
    /// in-memory state is kept so the operator can retry.
    pub fn persist(&mut self) {
        if let Err(e) = self.store.save() {
            self.status = e.to_string();
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = message.into();
    }
}

#[cfg(test)]
pub(crate) fn test_model(snippets: &[(&str, &str)]) -> Model {
    let mut store = SnippetStore::default();
    for (title, folder) in snippets {
        store.create(title, folder, "go");
    }
    let config = Config {
        // keep tests away from any real store location
        home: "/nonexistent/snips-test".to_string(),
        ..Config::default()
    };
    Model::new(config, store)
}
