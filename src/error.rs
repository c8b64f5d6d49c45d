use std::path::PathBuf;

/// Errors raised while loading and parsing a Dockerfile.
///
/// Parse failures are atomic: no partial instruction sequence is ever
/// returned. A missing `.dockerignore` is not an error anywhere in the
/// crate; only the Dockerfile itself is mandatory.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Dockerfile not found, path: {0}")]
    NotFound(PathBuf),

    #[error("line {line}: unknown instruction: {token}")]
    UnknownInstruction { line: usize, token: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
