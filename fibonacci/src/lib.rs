//! Fibonacci numbers with `fib(0) = 0` and `fib(1) = 1`.
//!
//! Two interchangeable implementations are provided: memoized recursion
//! ([`Memo`]) and a running-pair loop ([`iterative`]). Both return the same
//! arbitrary-precision value for every index.

pub mod error;
pub mod iterative;
pub mod memo;

use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;

pub use error::FibError;
pub use iterative::iterative;
pub use memo::{recursive, Memo};

/// Which implementation to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    Recursive,
    #[default]
    Iterative,
}

impl Method {
    pub const ALL: [Method; 2] = [Method::Recursive, Method::Iterative];

    pub fn name(self) -> &'static str {
        match self {
            Method::Recursive => "recursive",
            Method::Iterative => "iterative",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = FibError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| FibError::UnknownMethod(s.to_string()))
    }
}

/// Compute `fib(n)` with the chosen method.
pub fn fibonacci(n: u32, method: Method) -> BigUint {
    match method {
        Method::Recursive => recursive(n),
        Method::Iterative => iterative(n),
    }
}
