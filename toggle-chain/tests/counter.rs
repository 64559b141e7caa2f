//! Counter behaviour of whole chains: toggling walks through binary values.
use proptest::prelude::*;
use toggle_chain::{Chain, ChainError};

/// Read a chain as an unsigned integer, head as the least significant bit.
fn as_number(chain: &Chain) -> u64 {
    chain
        .values()
        .enumerate()
        .map(|(i, v)| u64::from(v) << i)
        .sum()
}

fn expected_rendering(k: u64, links: usize) -> String {
    let bits: Vec<String> = (0..links).map(|i| ((k >> i) & 1).to_string()).collect();
    format!("[ {} ]", bits.join(" "))
}

#[test]
fn fresh_chain_is_all_zeros() {
    for links in 1..=8 {
        let chain = Chain::zeroed(links);
        assert_eq!(chain.to_string(), expected_rendering(0, links));
    }
}

#[test]
fn every_state_is_visited_in_order() {
    let links = 6;
    let mut chain = Chain::zeroed(links);
    for k in 0..(1u64 << links) {
        assert_eq!(as_number(&chain), k);
        assert_eq!(chain.to_string(), expected_rendering(k, links));
        chain.toggle();
    }
    assert_eq!(as_number(&chain), 0, "chain should wrap to zero");
}

#[test]
fn wrap_keeps_length() {
    let mut chain = Chain::zeroed(4);
    for _ in 0..16 {
        chain.toggle();
    }
    assert_eq!(chain.len(), 4);
    assert_eq!(chain.to_string(), "[ 0 0 0 0 ]");
}

#[test]
fn pop_shortens_counter() {
    let mut chain = Chain::zeroed(3);
    for _ in 0..5 {
        chain.toggle();
    }
    // 5 = 101, head is the low bit
    assert_eq!(chain.pop(), Ok(1));
    assert_eq!(as_number(&chain), 2);
    assert_eq!(chain.pop(), Ok(0));
    assert_eq!(chain.pop(), Ok(1));
    assert_eq!(chain.pop(), Err(ChainError::EmptyChain));
}

#[test]
fn push_extends_low_end() {
    let mut chain = Chain::zeroed(2);
    chain.toggle(); // [ 1 0 ]
    chain.push(1).unwrap(); // [ 1 1 0 ] = 3
    assert_eq!(as_number(&chain), 3);
    chain.toggle();
    assert_eq!(chain.to_string(), "[ 0 0 1 ]");
}

proptest! {
    #[test]
    fn k_toggles_give_binary_k(links in 1usize..=12, seed in any::<u64>()) {
        let k = seed % (1u64 << links);
        let mut chain = Chain::zeroed(links);
        for _ in 0..k {
            chain.toggle();
        }
        prop_assert_eq!(as_number(&chain), k);
        prop_assert_eq!(chain.to_string(), expected_rendering(k, links));
    }

    #[test]
    fn full_cycle_returns_to_zero(links in 1usize..=10) {
        let mut chain = Chain::zeroed(links);
        for _ in 0..(1u64 << links) {
            chain.toggle();
        }
        prop_assert!(chain.values().all(|v| v == 0));
    }

    #[test]
    fn invalid_values_are_rejected(value in 2u8..=u8::MAX) {
        let mut chain = Chain::new();
        prop_assert_eq!(chain.push(value), Err(ChainError::InvalidValue(value)));
        prop_assert!(chain.is_empty());
    }
}
