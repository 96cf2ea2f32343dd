use alloc::boxed::Box;
use core::{
    fmt::{self, Debug, Formatter},
    iter::{Extend, FromIterator, FusedIterator},
};

use crate::{error::EmptyStack, traits::adt::Stack};

type Link<T> = Option<Box<SinglyLinkedStackNode<T>>>;

/// A LIFO stack, the head node is the top.
pub struct SinglyLinkedStack<T> {
    head: Link<T>,
    len: usize,
}

impl<T> SinglyLinkedStack<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Puts an element on top of the stack
    pub fn push(&mut self, item: T) {
        let node = SinglyLinkedStackNode {
            value: item,
            next: self.head.take(),
        };
        self.head = Some(Box::new(node));
        self.len += 1;
    }

    /// Removes the top element, the node under it (if any) becomes the new top
    pub fn pop(&mut self) -> Result<T, EmptyStack> {
        if let Some(node) = self.head.take() {
            let SinglyLinkedStackNode { value, next } = *node;
            self.head = next;
            self.len -= 1;
            Ok(value)
        } else {
            log::debug!("pop on empty stack");
            Err(EmptyStack)
        }
    }

    pub fn peek(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.head.as_mut().map(|node| &mut node.value)
    }

    pub fn clear(&mut self) {
        log::trace!("clearing stack of length {}", self.len);
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.len = 0;
    }

    /// Iterates from the top of the stack down
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            node: self.head.as_deref(),
            remaining: self.len,
        }
    }
}

impl<T> Default for SinglyLinkedStack<T> {
    fn default() -> Self {
        Self { head: None, len: 0 }
    }
}

impl<T> Drop for SinglyLinkedStack<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Debug> Debug for SinglyLinkedStack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinglyLinkedStack")
            .field("len", &self.len)
            .field("top", &self.peek())
            .finish()
    }
}

impl<T> FromIterator<T> for SinglyLinkedStack<T> {
    /// pushes in iteration order, the last item ends up on top
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = SinglyLinkedStack::new();
        stack.extend(iter);
        stack
    }
}

impl<T> Extend<T> for SinglyLinkedStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for i in iter.into_iter() {
            self.push(i);
        }
    }
}

impl<T> Stack<T> for SinglyLinkedStack<T> {
    fn push(&mut self, item: T) {
        SinglyLinkedStack::push(self, item)
    }
    fn pop(&mut self) -> Result<T, EmptyStack> {
        SinglyLinkedStack::pop(self)
    }
    fn len(&self) -> usize {
        self.len
    }
}

pub struct Iter<'a, T> {
    node: Option<&'a SinglyLinkedStackNode<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<Self::Item> {
        self.node.map(|node| {
            self.node = node.next.as_deref();
            self.remaining -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}
impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> IntoIterator for &'a SinglyLinkedStack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Pops the stack from the top down
pub struct IntoIter<T> {
    inner: SinglyLinkedStack<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.pop().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.inner.len, Some(self.inner.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for SinglyLinkedStack<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { inner: self }
    }
}

struct SinglyLinkedStackNode<T> {
    value: T,
    next: Link<T>,
}

#[cfg(test)]
mod tests {
    use super::SinglyLinkedStack;
    use crate::{error::EmptyStack, traits::adt::Stack};

    #[test]
    fn push_pop() {
        let mut stack = SinglyLinkedStack::new();
        stack.push(1);
        stack.push(2);
        assert_eq!(stack.pop(), Ok(2));
        assert_eq!(stack.pop(), Ok(1));
        assert_eq!(stack.pop(), Err(EmptyStack));
    }

    #[test]
    fn last_pop_empties() {
        let mut stack = SinglyLinkedStack::new();
        stack.push("only");
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.pop(), Ok("only"));
        assert_eq!(stack.len(), 0);
        assert!(stack.is_empty());
        assert_eq!(stack.peek(), None);
        assert_eq!(stack.pop(), Err(EmptyStack));
        assert_eq!(stack.len(), 0);
    }

    #[test]
    fn lifo_order() {
        let mut stack = SinglyLinkedStack::new();
        for i in 0..1000 {
            stack.push(i);
            assert_eq!(stack.peek(), Some(&i));
        }
        for i in (0..1000).rev() {
            assert_eq!(stack.pop(), Ok(i));
        }
        assert!(stack.is_empty());
    }

    #[test]
    fn stores_options() {
        let mut stack = SinglyLinkedStack::new();
        stack.push(None);
        stack.push(Some(2));
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.pop(), Ok(Some(2)));
        assert_eq!(stack.pop(), Ok(None));
        assert!(stack.is_empty());
    }

    #[test]
    fn collect_and_iter() {
        let stack: SinglyLinkedStack<i32> = (0..5).collect();
        assert_eq!(stack.peek(), Some(&4));
        assert_eq!(stack.iter().len(), 5);
        assert_eq!(
            stack.iter().copied().collect::<Vec<_>>(),
            vec![4, 3, 2, 1, 0]
        );
    }

    #[test]
    fn into_iter_pops_from_top() {
        let stack: SinglyLinkedStack<i32> = (0..5).collect();
        let mut iter = stack.into_iter();
        assert_eq!(iter.len(), 5);
        assert_eq!(iter.next(), Some(4));
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.collect::<Vec<_>>(), vec![3, 2, 1, 0]);

        let stack: SinglyLinkedStack<String> =
            ["a", "b", "c"].into_iter().map(String::from).collect();
        let mut iter = stack.into_iter();
        assert_eq!(iter.next().as_deref(), Some("c"));
        // the rest is released when the iterator is dropped
        drop(iter);

        let mut empty = SinglyLinkedStack::<u8>::new().into_iter();
        assert_eq!(empty.next(), None);
        assert_eq!(empty.next(), None);
    }

    #[test]
    fn peek_mut_and_clear() {
        let mut stack: SinglyLinkedStack<i32> = (0..3).collect();
        if let Some(top) = stack.peek_mut() {
            *top *= 10;
        }
        assert_eq!(stack.pop(), Ok(20));
        stack.clear();
        assert!(stack.is_empty());
        stack.push(9);
        assert_eq!(stack.pop(), Ok(9));
    }

    #[test]
    fn through_trait() {
        fn unwind<S: Stack<char>>(s: &mut S) -> String {
            let mut out = String::new();
            while let Ok(c) = s.pop() {
                out.push(c);
            }
            out
        }
        let mut stack: SinglyLinkedStack<char> = "abc".chars().collect();
        assert_eq!(Stack::len(&stack), 3);
        assert_eq!(unwind(&mut stack), "cba");
        assert!(Stack::is_empty(&stack));
    }

    #[test]
    fn debug() {
        let stack: SinglyLinkedStack<i32> = (1..=2).collect();
        assert_eq!(
            format!("{stack:?}"),
            "SinglyLinkedStack { len: 2, top: Some(2) }"
        );
    }

    #[test]
    fn long_stack_drop() {
        let stack: SinglyLinkedStack<u32> = (0..1_000_000).collect();
        assert_eq!(stack.len(), 1_000_000);
    }
}
