use crate::editor::get_editor;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Configuration options for the application.
///
/// Colors are `#RRGGBB` strings; they are parsed when the style tree is
/// built at startup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub home: String,
    pub file: String,
    pub editor: String,
    pub default_language: String,
    pub default_folder: String,

    pub background: String,
    pub foreground: String,
    pub black: String,
    pub gray: String,
    pub bright_gray: String,
    pub white: String,
    pub primary_color: String,
    pub primary_color_subdued: String,
    pub red: String,
    pub bright_red: String,
    pub green: String,
    pub bright_green: String,
    pub status_color: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            home: default_home(),
            file: "snippets.json".to_string(),
            editor: String::new(), // filled at config build
            default_language: "go".to_string(),
            default_folder: "misc".to_string(),
            background: "#262626".to_string(),
            foreground: "#FFFFFF".to_string(),
            black: "#373B41".to_string(),
            gray: "#262626".to_string(),
            bright_gray: "#626262".to_string(),
            white: "#FFFFFF".to_string(),
            primary_color: "#AFBEE1".to_string(),
            primary_color_subdued: "#64708D".to_string(),
            red: "#A46060".to_string(),
            bright_red: "#E49393".to_string(),
            green: "#527251".to_string(),
            bright_green: "#BCE1AF".to_string(),
            status_color: String::new(), // falls back to gray
        }
    }
}

fn default_home() -> String {
    ProjectDirs::from("", "", "snips")
        .map(|dirs| dirs.data_dir().to_string_lossy().to_string())
        .unwrap_or_else(|| ".".to_string())
}

/// Path of the configuration file: `$SNIPS_CONFIG` wins, then the platform
/// config directory, then the working directory.
pub fn config_path() -> PathBuf {
    if let Ok(p) = env::var("SNIPS_CONFIG") {
        if !p.is_empty() {
            return PathBuf::from(p);
        }
    }
    ProjectDirs::from("", "", "snips")
        .map(|dirs| dirs.config_dir().join("config.yaml"))
        .unwrap_or_else(|| PathBuf::from("config.yaml"))
}

// Env overlay: each variable that is set replaces the field, regardless of
// where the current value came from. Precedence is therefore
// default < file < environment, per field.
fn overlay_env(config: &mut Config) {
    let fields: [(&str, &mut String); 18] = [
        ("SNIPS_HOME", &mut config.home),
        ("SNIPS_FILE", &mut config.file),
        ("SNIPS_EDITOR", &mut config.editor),
        ("SNIPS_DEFAULT_LANGUAGE", &mut config.default_language),
        ("SNIPS_DEFAULT_FOLDER", &mut config.default_folder),
        ("SNIPS_BACKGROUND", &mut config.background),
        ("SNIPS_FOREGROUND", &mut config.foreground),
        ("SNIPS_BLACK", &mut config.black),
        ("SNIPS_GRAY", &mut config.gray),
        ("SNIPS_BRIGHT_GRAY", &mut config.bright_gray),
        ("SNIPS_WHITE", &mut config.white),
        ("SNIPS_PRIMARY_COLOR", &mut config.primary_color),
        ("SNIPS_PRIMARY_COLOR_SUBDUED", &mut config.primary_color_subdued),
        ("SNIPS_RED", &mut config.red),
        ("SNIPS_BRIGHT_RED", &mut config.bright_red),
        ("SNIPS_GREEN", &mut config.green),
        ("SNIPS_BRIGHT_GREEN", &mut config.bright_green),
        ("SNIPS_STATUS_COLOR", &mut config.status_color),
    ];
    for (var, slot) in fields {
        if let Ok(v) = env::var(var) {
            *slot = v;
        }
    }
}

/// Returns the resolved configuration: built-in defaults, the YAML file
/// decoded over them, then the environment overlaid per field. A missing
/// file is fine; an unreadable or malformed file falls back to the pure
/// built-in defaults, skipping the overlay.
pub fn read_config() -> Config {
    let mut config = Config::default();
    match fs::read_to_string(config_path()) {
        Ok(raw) => {
            config = match serde_yaml::from_str(&raw) {
                Ok(c) => c,
                Err(_) => return Config::default(),
            };
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(_) => return Config::default(),
    }
    overlay_env(&mut config);

    if let Some(rest) = config.home.strip_prefix('~') {
        if let Some(home) = env::var_os("HOME") {
            let mut p = PathBuf::from(home);
            p.push(rest.trim_start_matches('/'));
            config.home = p.to_string_lossy().to_string();
        }
    }
    if config.editor.is_empty() {
        config.editor = get_editor();
    }

    config
}

impl Config {
    /// Full path of the snippet store file.
    pub fn snippets_path(&self) -> PathBuf {
        PathBuf::from(&self.home).join(&self.file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_env::env_lock;

    fn clear_env() {
        for var in [
            "SNIPS_CONFIG",
            "SNIPS_HOME",
            "SNIPS_FILE",
            "SNIPS_EDITOR",
            "SNIPS_DEFAULT_LANGUAGE",
            "SNIPS_DEFAULT_FOLDER",
            "SNIPS_PRIMARY_COLOR",
        ] {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_defaults() {
        let _guard = env_lock();
        clear_env();
        let config = Config::default();
        assert_eq!(config.file, "snippets.json");
        assert_eq!(config.default_language, "go");
        assert_eq!(config.default_folder, "misc");
        assert!(config.editor.is_empty());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let _guard = env_lock();
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "file: other.json\ndefault_language: rust\n").unwrap();
        env::set_var("SNIPS_CONFIG", &path);
        env::set_var("SNIPS_EDITOR", "vim");

        let config = read_config();
        assert_eq!(config.file, "other.json");
        assert_eq!(config.default_language, "rust");
        // untouched fields keep their defaults
        assert_eq!(config.default_folder, "misc");
        clear_env();
    }

    #[test]
    fn test_env_overrides_file() {
        let _guard = env_lock();
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "file: from-file.json\n").unwrap();
        env::set_var("SNIPS_CONFIG", &path);
        env::set_var("SNIPS_FILE", "from-env.json");
        env::set_var("SNIPS_EDITOR", "vim");

        let config = read_config();
        assert_eq!(config.file, "from-env.json");
        clear_env();
    }

    #[test]
    fn test_malformed_file_falls_back_to_pure_defaults() {
        let _guard = env_lock();
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, ":\n  - not: [valid yaml").unwrap();
        env::set_var("SNIPS_CONFIG", &path);
        // the overlay is skipped on the fallback path
        env::set_var("SNIPS_FILE", "from-env.json");

        let config = read_config();
        assert_eq!(config.file, "snippets.json");
        clear_env();
    }

    #[test]
    fn test_empty_editor_falls_back_to_resolution_order() {
        let _guard = env_lock();
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        env::set_var("SNIPS_CONFIG", dir.path().join("missing.yaml"));
        env::remove_var("VISUAL");
        env::set_var("EDITOR", "hx");

        let config = read_config();
        assert_eq!(config.editor, "hx");
        env::remove_var("EDITOR");
        clear_env();
    }

    #[test]
    fn test_snippets_path_joins_home_and_file() {
        let config = Config {
            home: "/tmp/snips-home".to_string(),
            ..Config::default()
        };
        assert_eq!(
            config.snippets_path(),
            PathBuf::from("/tmp/snips-home/snippets.json")
        );
    }
}
