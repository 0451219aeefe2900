use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    InputNotFound { path: String, source: io::Error },

    #[error("malformed header: {0}")]
    MalformedHeader(String),

    #[error("malformed edge line `{line}`: {reason}")]
    MalformedEdgeLine { line: String, reason: String },

    #[error("edge references undeclared node `{0}`")]
    UnresolvedNode(String),

    #[error("no output selected: pass --file-output and/or --terminal-output")]
    NoOutputSelected,

    #[error("failed to write {path}: {source}")]
    OutputWrite { path: String, source: io::Error },

    #[error("rendering backend failed: {0}")]
    Backend(String),
}
