// UI module root: split implementation into focused submodules under `ui/`

pub mod model;
pub mod render;
pub mod update;

// Re-export commonly used symbols so call sites read as `crate::ui::Model`.
pub use model::{Mode, Model, Pane};
pub use render::render_full;
pub use update::handle_update;

use crossterm::event::{KeyCode, KeyModifiers};

// Messages consumed by the update logic. Raw terminal events are translated
// into these at the runtime adapter boundary so the model stays testable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    WindowSize {
        width: usize,
        height: usize,
    },
    Key {
        code: KeyCode,
        modifiers: KeyModifiers,
    },
}

impl Msg {
    /// Plain keypress without modifiers.
    pub fn key(code: KeyCode) -> Self {
        Msg::Key {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// Printable character without modifiers.
    pub fn rune(c: char) -> Self {
        Msg::key(KeyCode::Char(c))
    }
}
