use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FibError {
    #[error("unknown method '{0}', expected 'recursive' or 'iterative'")]
    UnknownMethod(String),
}
