use crate::error::{Result, SnipError};
use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

pub const DEFAULT_EDITOR: &str = "nano";

/// Resolves the editor command: `$VISUAL`, then `$EDITOR`, then the
/// built-in default.
pub fn get_editor() -> String {
    if let Ok(v) = env::var("VISUAL") {
        if !v.is_empty() {
            return v;
        }
    }
    if let Ok(e) = env::var("EDITOR") {
        if !e.is_empty() {
            return e;
        }
    }
    DEFAULT_EDITOR.to_string()
}

/// Builds the command to edit `path` from an editor string that may carry
/// arguments ("code --wait"). `None` when the string is empty.
pub fn editor_cmd(editor: &str, path: &Path) -> Option<Command> {
    let mut parts = editor.split_whitespace();
    let program = parts.next()?;
    let mut cmd = Command::new(program);
    cmd.args(parts);
    cmd.arg(path);
    Some(cmd)
}

/// Opens `path` in the editor, blocks until it exits, and returns the file
/// content afterwards. The caller owns the terminal hand-off around this
/// call; nothing else runs while the child does.
pub fn open(editor: &str, path: &Path) -> Result<String> {
    let mut cmd = editor_cmd(editor, path).ok_or(SnipError::InvalidEditorKind)?;
    let status = cmd.status()?;
    if !status.success() {
        return Err(SnipError::EditorExit(status.code().unwrap_or(-1)));
    }
    Ok(fs::read_to_string(path)?)
}
