pub mod adt;

pub use adt::{List, Queue, Stack};
