use crate::error::{Result, SnipError};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// A single snippet record as persisted in the store file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub id: u64,
    pub title: String,
    pub folder: String,
    pub language: String,
    #[serde(default)]
    pub content: Vec<String>,
    pub extension: String,
}

impl Snippet {
    pub fn content_text(&self) -> String {
        self.content.join("\n")
    }

    pub fn set_content_text(&mut self, text: &str) {
        self.content = text.lines().map(str::to_string).collect();
    }
}

static EXTENSIONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("bash", "sh"),
        ("c", "c"),
        ("cpp", "cpp"),
        ("go", "go"),
        ("java", "java"),
        ("javascript", "js"),
        ("json", "json"),
        ("markdown", "md"),
        ("python", "py"),
        ("ruby", "rb"),
        ("rust", "rs"),
        ("sh", "sh"),
        ("sql", "sql"),
        ("toml", "toml"),
        ("typescript", "ts"),
        ("yaml", "yaml"),
    ])
});

/// File extension for a language tag, `txt` when the language is unknown.
pub fn language_extension(language: &str) -> &'static str {
    EXTENSIONS
        .get(language.to_lowercase().as_str())
        .copied()
        .unwrap_or("txt")
}

/// In-memory snippet collection backed by a single JSON file.
///
/// The file is read once at startup and rewritten in full on every mutating
/// operation. All list views are projections over `snippets` in store order.
#[derive(Clone, Debug, Default)]
pub struct SnippetStore {
    path: PathBuf,
    snippets: Vec<Snippet>,
}

impl SnippetStore {
    /// Reads the store file. A missing file is a first run and yields an
    /// empty store; any other read or parse failure is returned to the
    /// caller, which treats it as fatal at startup.
    pub fn load(path: PathBuf) -> Result<Self> {
        match fs::read_to_string(&path) {
            Ok(raw) => {
                let snippets: Vec<Snippet> = serde_json::from_str(&raw)?;
                Ok(Self { path, snippets })
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self {
                path,
                snippets: Vec::new(),
            }),
            Err(e) => Err(e.into()),
        }
    }

    /// Rewrites the whole store file. In-memory state is untouched on
    /// failure so the operator can retry.
    pub fn save(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|e| SnipError::StorePersistence(e.to_string()))?;
        }
        let raw = serde_json::to_string_pretty(&self.snippets)
            .map_err(|e| SnipError::StorePersistence(e.to_string()))?;
        fs::write(&self.path, raw).map_err(|e| SnipError::StorePersistence(e.to_string()))
    }

    pub fn snippets(&self) -> &[Snippet] {
        &self.snippets
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&Snippet> {
        self.snippets.iter().find(|s| s.id == id)
    }

    fn next_id(&self) -> u64 {
        self.snippets.iter().map(|s| s.id).max().map_or(1, |m| m + 1)
    }

    /// Appends a new empty snippet and returns its id.
    pub fn create(&mut self, title: &str, folder: &str, language: &str) -> u64 {
        let id = self.next_id();
        self.snippets.push(Snippet {
            id,
            title: title.to_string(),
            folder: folder.to_string(),
            language: language.to_string(),
            content: Vec::new(),
            extension: language_extension(language).to_string(),
        });
        id
    }

    /// No-op when the id is unknown; the UI only offers valid ids.
    pub fn rename(&mut self, id: u64, new_title: &str) {
        if let Some(s) = self.snippets.iter_mut().find(|s| s.id == id) {
            s.title = new_title.to_string();
        }
    }

    pub fn delete(&mut self, id: u64) {
        self.snippets.retain(|s| s.id != id);
    }

    /// Replaces a snippet's content lines from edited text.
    pub fn update(&mut self, id: u64, text: &str) {
        if let Some(s) = self.snippets.iter_mut().find(|s| s.id == id) {
            s.set_content_text(text);
        }
    }

    /// Folder projection: distinct folder names with snippet counts, ordered
    /// by first appearance. Folders are never stored independently, so this
    /// is recomputed from the snippet set and cannot drift.
    pub fn folders(&self) -> Vec<(String, usize)> {
        let mut order: Vec<String> = Vec::new();
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for s in &self.snippets {
            if !counts.contains_key(s.folder.as_str()) {
                order.push(s.folder.clone());
            }
            *counts.entry(s.folder.as_str()).or_insert(0) += 1;
        }
        order
            .into_iter()
            .map(|name| {
                let n = counts.get(name.as_str()).copied().unwrap_or(0);
                (name, n)
            })
            .collect()
    }

    /// Indices of snippets in store order scoped to `folder` (all folders
    /// when `None`) whose title or content contains `query`,
    /// case-insensitively. An empty query matches everything.
    pub fn filtered(&self, folder: Option<&str>, query: &str) -> Vec<usize> {
        let q = query.to_lowercase();
        self.snippets
            .iter()
            .enumerate()
            .filter(|(_, s)| folder.map_or(true, |f| s.folder == f))
            .filter(|(_, s)| {
                q.is_empty()
                    || s.title.to_lowercase().contains(&q)
                    || s.content.iter().any(|l| l.to_lowercase().contains(&q))
            })
            .map(|(i, _)| i)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(titles: &[(&str, &str)]) -> SnippetStore {
        let mut store = SnippetStore::default();
        for (title, folder) in titles {
            store.create(title, folder, "go");
        }
        store
    }

    #[test]
    fn test_create_assigns_increasing_ids() {
        let mut store = SnippetStore::default();
        let a = store.create("a", "misc", "go");
        let b = store.create("b", "misc", "go");
        assert_eq!(a, 1);
        assert_eq!(b, 2);
        store.delete(a);
        let c = store.create("c", "misc", "go");
        assert_eq!(c, 3, "ids are never reused while a higher id exists");
    }

    #[test]
    fn test_folder_projection_order_and_counts() {
        let store = store_with(&[("a", "folder1"), ("b", "folder1"), ("c", "folder2")]);
        assert_eq!(
            store.folders(),
            vec![("folder1".to_string(), 2), ("folder2".to_string(), 1)]
        );
    }

    #[test]
    fn test_deleting_last_snippet_removes_folder() {
        let mut store = store_with(&[("a", "folder1"), ("c", "folder2")]);
        let id = store
            .snippets()
            .iter()
            .find(|s| s.folder == "folder2")
            .map(|s| s.id)
            .unwrap();
        store.delete(id);
        assert_eq!(store.folders(), vec![("folder1".to_string(), 1)]);
    }

    #[test]
    fn test_creating_snippet_in_new_folder_adds_it() {
        let mut store = store_with(&[("a", "folder1")]);
        store.create("b", "brand-new", "go");
        let names: Vec<String> = store.folders().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["folder1", "brand-new"]);
    }

    #[test]
    fn test_filtered_scopes_to_folder_in_store_order() {
        let store = store_with(&[("A", "folder1"), ("B", "folder1"), ("C", "folder2")]);
        let idx = store.filtered(Some("folder1"), "");
        let titles: Vec<&str> = idx
            .iter()
            .map(|&i| store.snippets()[i].title.as_str())
            .collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[test]
    fn test_filtered_matches_title_or_content() {
        let mut store = store_with(&[("ls pretty", "misc"), ("other", "misc")]);
        let id = store.snippets()[1].id;
        store.update(id, "ls -la\necho done");
        assert_eq!(store.filtered(None, "ls"), vec![0, 1]);
        assert_eq!(store.filtered(None, "echo"), vec![1]);
        assert_eq!(store.filtered(None, "PRETTY"), vec![0], "matching ignores case");
        assert!(store.filtered(None, "nothing").is_empty());
    }

    #[test]
    fn test_clearing_filter_restores_folder_scoped_set() {
        let store = store_with(&[("A", "folder1"), ("B", "folder1"), ("C", "folder2")]);
        let narrowed = store.filtered(Some("folder1"), "A");
        assert_eq!(narrowed, vec![0]);
        let restored = store.filtered(Some("folder1"), "");
        assert_eq!(restored, vec![0, 1]);
    }

    #[test]
    fn test_rename_unknown_id_is_noop() {
        let mut store = store_with(&[("a", "misc")]);
        store.rename(99, "zzz");
        assert_eq!(store.snippets()[0].title, "a");
    }

    #[test]
    fn test_round_trip_create_update_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snippets.json");

        let mut store = SnippetStore::load(path.clone()).unwrap();
        assert!(store.is_empty(), "missing file is an empty first run");

        let id = store.create("greeting", "misc", "rust");
        store.update(id, "fn main() {\n    println!(\"hi\");\n}");
        store.save().unwrap();

        let reloaded = SnippetStore::load(path).unwrap();
        let s = reloaded.get(id).unwrap();
        assert_eq!(s.title, "greeting");
        assert_eq!(s.extension, "rs");
        assert_eq!(s.content_text(), "fn main() {\n    println!(\"hi\");\n}");
    }

    #[test]
    fn test_load_rejects_malformed_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snippets.json");
        fs::write(&path, "not json at all").unwrap();
        assert!(SnippetStore::load(path).is_err());
    }

    #[test]
    fn test_language_extension_fallback() {
        assert_eq!(language_extension("rust"), "rs");
        assert_eq!(language_extension("Go"), "go");
        assert_eq!(language_extension("klingon"), "txt");
    }
}
