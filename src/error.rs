use thiserror::Error;

/// Returned by list operations when an index does not address a valid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("index {index} out of bounds for length {len}")]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl IndexOutOfBounds {
    /// checks `index < len`, the range for reading or replacing an element
    pub(crate) fn check(index: usize, len: usize) -> Result<(), Self> {
        if index < len {
            Ok(())
        } else {
            Err(Self::rejected(index, len))
        }
    }

    /// checks `index <= len`, inserting at `len` appends
    pub(crate) fn check_insert(index: usize, len: usize) -> Result<(), Self> {
        if index <= len {
            Ok(())
        } else {
            Err(Self::rejected(index, len))
        }
    }

    fn rejected(index: usize, len: usize) -> Self {
        log::debug!("rejected index {index} for length {len}");
        Self { index, len }
    }
}

/// Returned by `pop` on a stack with no elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("stack is empty")]
pub struct EmptyStack;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let e = IndexOutOfBounds { index: 5, len: 2 };
        assert_eq!(e.to_string(), "index 5 out of bounds for length 2");
        assert_eq!(EmptyStack.to_string(), "stack is empty");
    }

    #[test]
    fn check_bounds() {
        assert!(IndexOutOfBounds::check(0, 1).is_ok());
        assert_eq!(
            IndexOutOfBounds::check(1, 1),
            Err(IndexOutOfBounds { index: 1, len: 1 })
        );
        assert!(IndexOutOfBounds::check(0, 0).is_err());
    }

    #[test]
    fn check_insert_bounds() {
        assert!(IndexOutOfBounds::check_insert(0, 0).is_ok());
        assert!(IndexOutOfBounds::check_insert(1, 1).is_ok());
        assert!(IndexOutOfBounds::check_insert(0, 3).is_ok());
        assert_eq!(
            IndexOutOfBounds::check_insert(2, 1),
            Err(IndexOutOfBounds { index: 2, len: 1 })
        );
        assert_eq!(
            IndexOutOfBounds::check_insert(1, 0),
            Err(IndexOutOfBounds { index: 1, len: 0 })
        );
    }
}
