use std::fmt;

use log::debug;

use crate::cell::Cell;
use crate::error::ChainError;

/// An ordered chain of binary cells with head-only access.
///
/// Toggling the chain increments it as a binary counter whose least
/// significant bit is the head.
#[derive(Debug, Default)]
pub struct Chain {
    head: Option<Box<Cell>>,
    len: usize,
}

impl Chain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a chain of `links` cells, all zero.
    pub fn zeroed(links: usize) -> Self {
        let mut chain = Self::new();
        for _ in 0..links {
            chain.push_cell(Box::new(Cell::zero()));
        }
        chain
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn head(&self) -> Option<&Cell> {
        self.head.as_deref()
    }

    /// Push a new cell holding `value` in front of the current head.
    pub fn push(&mut self, value: u8) -> Result<(), ChainError> {
        let cell = Cell::new(value)?;
        self.push_cell(Box::new(cell));
        debug!("pushed {value}, chain length {}", self.len);
        Ok(())
    }

    fn push_cell(&mut self, mut cell: Box<Cell>) {
        cell.set_next(self.head.take());
        self.head = Some(cell);
        self.len += 1;
    }

    /// Remove the head cell and return its value.
    pub fn pop(&mut self) -> Result<u8, ChainError> {
        let mut cell = self.head.take().ok_or(ChainError::EmptyChain)?;
        self.head = cell.take_next();
        self.len -= 1;
        debug!("popped {}, chain length {}", cell.value(), self.len);
        Ok(cell.value())
    }

    /// Toggle the head cell, rippling carries toward the tail.
    /// Does nothing on an empty chain.
    pub fn toggle(&mut self) {
        if let Some(head) = self.head.as_deref_mut() {
            head.toggle();
        }
    }

    /// Iterate over cell values from head to tail.
    pub fn values(&self) -> Values<'_> {
        Values {
            cell: self.head.as_deref(),
        }
    }
}

impl Drop for Chain {
    fn drop(&mut self) {
        // Unlink one cell at a time so long chains don't recurse in Box's drop.
        let mut cell = self.head.take();
        while let Some(mut c) = cell {
            cell = c.take_next();
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[ ")?;
        for value in self.values() {
            write!(f, "{value} ")?;
        }
        f.write_str("]")
    }
}

/// Iterator over a chain's values, head first.
pub struct Values<'a> {
    cell: Option<&'a Cell>,
}

impl Iterator for Values<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        let cell = self.cell?;
        self.cell = cell.next();
        Some(cell.value())
    }
}
