use thiserror::Error;

#[derive(Debug, Error)]
/// Errors produced by the command dispatch layer.
pub enum CommandError {
    #[error("no command registered under id '{0}'")]
    /// The dispatched id is not in the registry.
    UnknownCommand(String),

    #[error("no file is currently open")]
    /// A file utility command ran without an active file.
    NoActiveFile,

    #[error("clipboard error: {0}")]
    /// The system clipboard could not be read or written.
    Clipboard(#[from] arboard::Error),

    #[error("invalid command set: {0}")]
    /// A JSON command set failed to deserialize.
    InvalidCommandSet(#[from] serde_json::Error),
}
