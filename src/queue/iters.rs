use super::{NodePtr, SinglyLinkedQueue};
use core::{iter::FusedIterator, marker::PhantomData};

pub struct Iter<'a, T> {
    pub(crate) node: Option<NodePtr<T>>,
    pub(crate) remaining: usize,
    pub(crate) marker: PhantomData<&'a SinglyLinkedQueue<T>>,
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<Self::Item> {
        self.node.map(|node| {
            // the queue is borrowed for 'a so none of its nodes can be freed
            let node = unsafe { &*node.as_ptr() };
            self.node = node.next;
            self.remaining -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T: 'a> ExactSizeIterator for Iter<'a, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

impl<'a, T> IntoIterator for &'a SinglyLinkedQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Polls the queue until it is empty
pub struct IntoIter<T> {
    pub(crate) inner: SinglyLinkedQueue<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.poll()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.inner.len(), Some(self.inner.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for SinglyLinkedQueue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { inner: self }
    }
}
