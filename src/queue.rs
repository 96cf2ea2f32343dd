use alloc::boxed::Box;
use core::{
    fmt::{self, Debug, Formatter},
    iter::{Extend, FromIterator},
    marker::PhantomData,
    ptr::NonNull,
};

use crate::traits::adt::Queue;

mod iters;
pub use iters::*;

type NodePtr<T> = NonNull<SinglyLinkedQueueNode<T>>;

/// A FIFO queue over singly linked nodes.
///
/// Keeps a pointer to both ends so `add` and `poll` are constant time. Nodes
/// only link forward, the tail pointer is the one reference that doesn't own
/// what it points at.
///
/// use `add` to enqueue and `poll` to dequeue
pub struct SinglyLinkedQueue<T> {
    head: Option<NodePtr<T>>,
    tail: Option<NodePtr<T>>,
    len: usize,
    marker: PhantomData<Box<SinglyLinkedQueueNode<T>>>,
}

impl<T> SinglyLinkedQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Adds an element to the back of the queue
    pub fn add(&mut self, item: T) {
        let node = SinglyLinkedQueueNode::ptr_to_new(item);
        match self.tail {
            // the old tail has no successor yet, it gets the new node
            Some(mut tail) => unsafe { tail.as_mut().next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Removes and returns the front element, `None` if the queue is empty
    pub fn poll(&mut self) -> Option<T> {
        let head = self.head?;
        // head came from `SinglyLinkedQueueNode::ptr_to_new` and is unlinked before being freed
        let SinglyLinkedQueueNode { value, next } =
            unsafe { SinglyLinkedQueueNode::into_inner(head) };
        self.head = next;
        if self.head.is_none() {
            log::trace!("queue drained, resetting tail");
            self.tail = None;
        }
        self.len -= 1;
        Some(value)
    }

    pub fn peek(&self) -> Option<&T> {
        self.head.map(|x| unsafe { &x.as_ref().value })
    }

    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.head.map(|mut x| unsafe { &mut x.as_mut().value })
    }

    pub fn clear(&mut self) {
        log::trace!("clearing queue of length {}", self.len);
        while self.poll().is_some() {}
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            node: self.head,
            remaining: self.len,
            marker: PhantomData,
        }
    }
}

impl<T> Default for SinglyLinkedQueue<T> {
    fn default() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            marker: PhantomData,
        }
    }
}

impl<T> Drop for SinglyLinkedQueue<T> {
    fn drop(&mut self) {
        while self.poll().is_some() {}
    }
}

impl<T: Debug> Debug for SinglyLinkedQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "SinglyLinkedQueue {{ len: {}, items: {{", self.len)?;
        let mut iter = self.iter();
        if let Some(elem) = iter.next() {
            write!(f, "{elem:?}")?;
        }
        for elem in iter {
            write!(f, ", {elem:?}")?;
        }
        write!(f, "}} }}")
    }
}

impl<T> Extend<T> for SinglyLinkedQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter.into_iter() {
            self.add(elem)
        }
    }
}

impl<T> FromIterator<T> for SinglyLinkedQueue<T> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T> Queue<T> for SinglyLinkedQueue<T> {
    fn add(&mut self, item: T) {
        SinglyLinkedQueue::add(self, item)
    }
    fn poll(&mut self) -> Option<T> {
        SinglyLinkedQueue::poll(self)
    }
    fn len(&self) -> usize {
        self.len
    }
}

pub(crate) struct SinglyLinkedQueueNode<T> {
    value: T,
    next: Option<NodePtr<T>>,
}

impl<T> SinglyLinkedQueueNode<T> {
    /// the caller is in charge of deallocation, see `into_inner`
    fn ptr_to_new(value: T) -> NodePtr<T> {
        let node = Box::new(Self { value, next: None });
        // a box is never null
        unsafe { NonNull::new_unchecked(Box::into_raw(node)) }
    }

    /// # Safety
    /// `ptr` must come from `ptr_to_new` and must not be used again afterwards
    unsafe fn into_inner(ptr: NodePtr<T>) -> Self {
        *Box::from_raw(ptr.as_ptr())
    }
}
