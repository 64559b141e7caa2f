use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Compute `fib(n)` by carrying the last two values forward.
pub fn iterative(n: u32) -> BigUint {
    let (mut a, mut b) = (BigUint::zero(), BigUint::one());
    for _ in 0..n {
        let next = &a + &b;
        a = std::mem::replace(&mut b, next);
    }
    a
}
