use crate::ui::model::{Mode, Model};
use crate::ui::Msg;
use crossterm::event::{KeyCode, KeyModifiers};

pub fn handle_update(m: &mut Model, msg: Msg) {
    match msg {
        Msg::WindowSize { width, height } => handle_window_size(m, width, height),
        Msg::Key { code, modifiers } => handle_key(m, code, modifiers),
    }
}

// Resizes re-render with the new dimensions; they never touch an
// in-progress text-entry buffer.
fn handle_window_size(m: &mut Model, width: usize, height: usize) {
    m.set_size(width, height);
}

// Ctrl-C is a hard quit accepted in every state, including text entry.
fn is_hard_quit(code: KeyCode, modifiers: KeyModifiers) -> bool {
    modifiers.contains(KeyModifiers::CONTROL) && matches!(code, KeyCode::Char('c' | 'C'))
}

fn handle_key(m: &mut Model, code: KeyCode, modifiers: KeyModifiers) {
    if is_hard_quit(code, modifiers) {
        m.should_quit = true;
        return;
    }
    // any keypress retires the previous status line
    m.status.clear();

    match m.mode {
        Mode::Filtering => handle_filter_key(m, code, modifiers),
        Mode::AwaitingNewName | Mode::AwaitingRename => handle_name_key(m, code, modifiers),
        Mode::ConfirmingDelete => handle_confirm_key(m, code, modifiers),
        Mode::FlashCopied | Mode::FlashDeleted => {
            // a flash ends on the next input, which is then handled normally
            m.clear_flash();
            handle_browsing_key(m, code, modifiers);
        }
        Mode::Browsing => handle_browsing_key(m, code, modifiers),
    }
}

// Text entry for the live filter. Modal keys always win over pane
// navigation; command runes are plain text here.
fn handle_filter_key(m: &mut Model, code: KeyCode, modifiers: KeyModifiers) {
    match code {
        KeyCode::Enter => m.confirm_filter(),
        KeyCode::Esc => m.cancel_filter(),
        KeyCode::Backspace => {
            m.input.pop();
            m.snippet_cursor = 0;
        }
        KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => {
            m.input.push(c);
            m.snippet_cursor = 0;
        }
        _ => {}
    }
}

// Text entry for new/rename names. Enter confirms only non-empty input.
fn handle_name_key(m: &mut Model, code: KeyCode, modifiers: KeyModifiers) {
    match code {
        KeyCode::Enter => m.confirm_name(),
        KeyCode::Esc => m.cancel_name(),
        KeyCode::Backspace => {
            m.input.pop();
        }
        KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => {
            m.input.push(c);
        }
        _ => {}
    }
}

// Delete confirmation: only the confirm and cancel bindings (and quit) do
// anything, so stray keys cannot mutate the store.
fn handle_confirm_key(m: &mut Model, code: KeyCode, modifiers: KeyModifiers) {
    let keys = m.keys.clone();
    if keys.confirm.matches(code, modifiers) {
        m.confirm_delete();
    } else if keys.cancel.matches(code, modifiers) {
        m.cancel_delete();
    } else if keys.quit.matches(code, modifiers) {
        m.should_quit = true;
    }
}

fn pane_nav_delta(code: KeyCode) -> Option<isize> {
    match code {
        KeyCode::Up | KeyCode::Char('k') => Some(-1),
        KeyCode::Down | KeyCode::Char('j') => Some(1),
        _ => None,
    }
}

// Browsing dispatch: the focused pane sees cursor keys first, then the
// global command keys are checked.
fn handle_browsing_key(m: &mut Model, code: KeyCode, modifiers: KeyModifiers) {
    if modifiers.is_empty() {
        if let Some(delta) = pane_nav_delta(code) {
            m.move_cursor(delta);
            return;
        }
    }

    let keys = m.keys.clone();
    if keys.quit.matches(code, modifiers) {
        m.should_quit = true;
    } else if keys.search.matches(code, modifiers) {
        m.start_filter();
    } else if keys.new_snippet.matches(code, modifiers) {
        m.start_new();
    } else if keys.rename_snippet.matches(code, modifiers) {
        m.start_rename();
    } else if keys.delete_snippet.matches(code, modifiers) {
        m.request_delete();
    } else if keys.edit_snippet.matches(code, modifiers) {
        m.request_edit();
    } else if keys.copy_snippet.matches(code, modifiers) {
        m.copy_selected();
    } else if keys.toggle_help.matches(code, modifiers) {
        m.show_help = !m.show_help;
    } else if keys.next_pane.matches(code, modifiers) {
        m.advance_focus();
    } else if keys.previous_pane.matches(code, modifiers) {
        m.retreat_focus();
    }
}
