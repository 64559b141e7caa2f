use std::collections::HashMap;

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Deepest a single recursive descent goes before it hits a cached value.
const MAX_DESCENT: u32 = 256;

/// Cache for memoized recursive Fibonacci.
///
/// Values computed by one call are reused by later calls on the same memo.
#[derive(Debug, Clone, Default)]
pub struct Memo {
    values: HashMap<u32, BigUint>,
}

impl Memo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Compute `fib(n)`, recursing on `n - 1` and `n - 2` through the cache.
    ///
    /// Large indices are reached in steps of [`MAX_DESCENT`], each step
    /// recursing only until it meets the values cached by the step before,
    /// so stack use does not grow with `n`.
    pub fn get(&mut self, n: u32) -> BigUint {
        let mut step = MAX_DESCENT;
        while step < n {
            self.descend(step);
            step += MAX_DESCENT;
        }
        self.descend(n)
    }

    fn descend(&mut self, n: u32) -> BigUint {
        if let Some(v) = self.values.get(&n) {
            return v.clone();
        }
        let v = match n {
            0 => BigUint::zero(),
            1 => BigUint::one(),
            _ => self.descend(n - 1) + self.descend(n - 2),
        };
        self.values.insert(n, v.clone());
        v
    }
}

/// Compute `fib(n)` by memoized recursion with a fresh cache.
pub fn recursive(n: u32) -> BigUint {
    Memo::new().get(n)
}
