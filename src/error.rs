use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnipError {
    #[error("unable to load configuration: {0}")]
    ConfigLoad(String),

    #[error("unable to persist snippets: {0}")]
    StorePersistence(String),

    #[error("no editor configured")]
    InvalidEditorKind,

    #[error("editor exited with status {0}")]
    EditorExit(i32),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SnipError>;
