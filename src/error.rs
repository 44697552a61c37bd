use miette::Diagnostic;
use thiserror::Error;

/// Main error type for spx operations
#[derive(Error, Diagnostic, Debug)]
pub enum SpxError {
    #[error("IO error: {0}")]
    #[diagnostic(code(spx::io))]
    IoError(#[from] std::io::Error),

    #[error("cannot read {path}: {message}")]
    #[diagnostic(code(spx::input))]
    Input {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("invalid layer \"{layer}\": {message}")]
    #[diagnostic(code(spx::input))]
    Layer {
        layer: String,
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("integrity check failed for layer \"{layer}\": {message}")]
    #[diagnostic(code(spx::integrity))]
    Integrity { layer: String, message: String },

    #[error("cannot write {path}: {message}")]
    #[diagnostic(code(spx::output))]
    Output {
        path: std::path::PathBuf,
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, SpxError>;
