use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    #[error("cell value must be 0 or 1, got {0}")]
    InvalidValue(u8),

    #[error("cannot pop from an empty chain")]
    EmptyChain,
}
