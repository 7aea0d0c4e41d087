use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocateError {
    /// Every search root, version directory and architecture was exhausted.
    #[error("unable to locate {executable} executable")]
    CompilerNotFound { executable: String },
}
