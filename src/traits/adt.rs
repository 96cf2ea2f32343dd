//! Abstract Data Type Traits

use crate::error::{EmptyStack, IndexOutOfBounds};

/// An index addressable sequence.
///
/// Valid indices for reading, replacing and removing are `0..len`,
/// inserting also accepts `len` (appending).
pub trait List<T> {
    /// appends to the end of the list
    fn add(&mut self, item: T);
    /// inserts `item` so that it ends up at `index`
    fn insert(&mut self, index: usize, item: T) -> Result<(), IndexOutOfBounds>;
    fn get(&self, index: usize) -> Result<&T, IndexOutOfBounds>;
    /// replaces the element at `index`, returning the old value
    fn set(&mut self, index: usize, item: T) -> Result<T, IndexOutOfBounds>;
    fn remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds>;
    fn contains(&self, item: &T) -> bool
    where
        T: PartialEq;
    fn clear(&mut self);
    //inspection:
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// First in, first out.
///
/// Polling an empty queue is not an error, it yields `None`.
pub trait Queue<T> {
    fn add(&mut self, item: T);
    fn poll(&mut self) -> Option<T>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Last in, first out.
///
/// Unlike [`Queue::poll`], popping an empty stack is an error.
pub trait Stack<T> {
    fn push(&mut self, item: T);
    fn pop(&mut self) -> Result<T, EmptyStack>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
