// Entry point: resolves configuration, loads the snippet store (fatal if
// unreadable), and runs the TUI through a bubbletea-rs adapter.

use std::env;
use std::fs;
use std::io;
use std::process;

use bubbletea_rs::{
    command::Cmd, event::KeyMsg, event::WindowSizeMsg, model::Model as TeaModel, window_size,
    Program,
};
use crossterm::event::KeyCode;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use once_cell::sync::OnceCell;

use snips::config::{read_config, Config};
use snips::editor;
use snips::snippet::SnippetStore;
use snips::ui::{handle_update, render_full, Model, Msg};

// Boot data resolved in main before the runtime constructs the adapter.
static BOOT: OnceCell<(Config, SnippetStore)> = OnceCell::new();

// Adapter implementing the bubbletea-rs Model trait by delegating to the
// pure UI model, then draining its effect hand-off fields.
struct TeaAdapter {
    inner: Model,
}

impl TeaAdapter {
    // Runs after every key dispatch: quit, clipboard, editor hand-off.
    fn after_update(&mut self) -> Option<Cmd> {
        if self.inner.should_quit {
            return Some(bubbletea_rs::quit());
        }
        if let Some(text) = self.inner.pending_copy.take() {
            if let Err(e) = copy_to_clipboard(&text) {
                self.inner.copy_failed(&e);
            }
        }
        if let Some(id) = self.inner.pending_edit.take() {
            self.edit_snippet(id);
            // force a relayout after the child released the terminal
            return Some(window_size());
        }
        None
    }

    // Suspends the whole application while the external editor owns the
    // terminal; resumes synchronously on child exit. A failure leaves the
    // pre-edit content untouched.
    fn edit_snippet(&mut self, id: u64) {
        let Some(snippet) = self.inner.store.get(id) else {
            return;
        };
        let path = env::temp_dir().join(format!("snips_edit.{}", snippet.extension));
        if let Err(e) = fs::write(&path, snippet.content_text()) {
            self.inner.set_status(format!("unable to write temp file: {e}"));
            return;
        }
        let editor_command = self.inner.config.editor.clone();

        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let result = editor::open(&editor_command, &path);
        let _ = execute!(io::stdout(), EnterAlternateScreen);
        let _ = enable_raw_mode();
        let _ = fs::remove_file(&path);

        match result {
            Ok(content) => self.inner.apply_edit(id, &content),
            Err(e) => self.inner.set_status(e.to_string()),
        }
    }
}

fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let mut clipboard = arboard::Clipboard::new().map_err(|e| e.to_string())?;
    clipboard.set_text(text.to_string()).map_err(|e| e.to_string())
}

impl TeaModel for TeaAdapter {
    fn init() -> (Self, Option<Cmd>) {
        let (config, store) = BOOT.get().cloned().unwrap_or_else(|| {
            let config = read_config();
            let store = SnippetStore::load(config.snippets_path()).unwrap_or_default();
            (config, store)
        });
        let mut adapter = TeaAdapter {
            inner: Model::new(config, store),
        };
        let (width, height) = crossterm::terminal::size().unwrap_or((80, 24));
        handle_update(
            &mut adapter.inner,
            Msg::WindowSize {
                width: width as usize,
                height: height as usize,
            },
        );
        let cmd = window_size();
        (adapter, Some(cmd))
    }

    fn update(&mut self, msg: bubbletea_rs::event::Msg) -> Option<Cmd> {
        if let Some(km) = msg.downcast_ref::<KeyMsg>() {
            if let KeyCode::Char(ch) = km.key {
                // Ctrl-C delivered as ETX on some terminals
                if ch == '\u{03}' {
                    return Some(bubbletea_rs::quit());
                }
            }
            handle_update(
                &mut self.inner,
                Msg::Key {
                    code: km.key,
                    modifiers: km.modifiers,
                },
            );
            return self.after_update();
        }
        if let Some(ws) = msg.downcast_ref::<WindowSizeMsg>() {
            handle_update(
                &mut self.inner,
                Msg::WindowSize {
                    width: ws.width as usize,
                    height: ws.height as usize,
                },
            );
        }
        None
    }

    fn view(&self) -> String {
        render_full(&self.inner)
    }
}

#[tokio::main]
async fn main() {
    let config = read_config();
    let store = match SnippetStore::load(config.snippets_path()) {
        Ok(s) => s,
        // unreadable persisted data is fatal: there is nothing to display
        Err(e) => {
            eprintln!("unable to read snippets: {e}");
            process::exit(1);
        }
    };
    let _ = BOOT.set((config, store));

    let builder = Program::<TeaAdapter>::builder()
        .alt_screen(true)
        .signal_handler(true);
    let program = match builder.build() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("failed to build program: {e:?}");
            process::exit(2);
        }
    };
    match program.run().await {
        Ok(_final_model) => {}
        Err(e) => {
            eprintln!("program error: {e:?}");
            process::exit(2);
        }
    }
}
