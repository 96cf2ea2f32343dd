#![cfg_attr(not(test), no_std)]

//! Singly linked list, queue and stack.
//!
//! The three structures are independent of each other. Each owns a private
//! node type whose links only point forward, and each is described by one of
//! the contracts in [`traits::adt`].
//!
//! Invalid access is reported differently per structure: list indices out of
//! range give [`IndexOutOfBounds`], popping an empty stack gives
//! [`EmptyStack`], polling an empty queue just yields `None`.

extern crate alloc;

pub mod error;
pub mod linked_lists;
pub mod queue;
pub mod stack;
pub mod traits;

pub use error::{EmptyStack, IndexOutOfBounds};
pub use linked_lists::SinglyLinkedList;
pub use queue::SinglyLinkedQueue;
pub use stack::SinglyLinkedStack;
