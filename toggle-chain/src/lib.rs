pub mod error;
pub mod cell;
pub mod chain;

pub use cell::Cell;
pub use chain::Chain;
pub use error::ChainError;
