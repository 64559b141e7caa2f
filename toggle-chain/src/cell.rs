use log::trace;

use crate::error::ChainError;

/// One binary stage of a chain: a value of 0 or 1 and the stage after it.
///
/// A cell owns its successor, so dropping a cell drops everything behind it.
/// [`Chain`](crate::Chain) is the usual owner and tears long tails down
/// iteratively.
#[derive(Debug, PartialEq, Eq)]
pub struct Cell {
    value: u8,
    next: Option<Box<Cell>>,
}

fn check_value(value: u8) -> Result<u8, ChainError> {
    match value {
        0 | 1 => Ok(value),
        _ => Err(ChainError::InvalidValue(value)),
    }
}

impl Cell {
    /// Create an unlinked cell holding `value`.
    pub fn new(value: u8) -> Result<Self, ChainError> {
        Ok(Self {
            value: check_value(value)?,
            next: None,
        })
    }

    pub(crate) fn zero() -> Self {
        Self {
            value: 0,
            next: None,
        }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    /// Replace the stored value. The cell is left untouched on error.
    pub fn set_value(&mut self, value: u8) -> Result<(), ChainError> {
        self.value = check_value(value)?;
        Ok(())
    }

    pub fn next(&self) -> Option<&Cell> {
        self.next.as_deref()
    }

    /// Link `next` behind this cell, returning whatever was linked before.
    pub fn set_next(&mut self, next: Option<Box<Cell>>) -> Option<Box<Cell>> {
        std::mem::replace(&mut self.next, next)
    }

    pub(crate) fn take_next(&mut self) -> Option<Box<Cell>> {
        self.next.take()
    }

    /// Flip this cell alone. Returns `true` when the flip was 1 -> 0,
    /// i.e. when it produced a carry.
    pub fn flip(&mut self) -> bool {
        self.value ^= 1;
        self.value == 0
    }

    /// Flip this cell and ripple the carry down the chain.
    ///
    /// 0 -> 1 absorbs the carry and stops. 1 -> 0 passes it on to the next
    /// cell. A carry leaving the tail is dropped, so the chain wraps around
    /// to all zeros after its largest value.
    pub fn toggle(&mut self) {
        let mut cell = self;
        let mut depth = 0usize;
        while cell.flip() {
            depth += 1;
            match cell.next.as_deref_mut() {
                Some(next) => cell = next,
                None => {
                    trace!("carry dropped past tail after {depth} cells");
                    return;
                }
            }
        }
    }
}
