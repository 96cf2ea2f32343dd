use alloc::boxed::Box;

use core::{
    fmt::{self, Debug, Formatter},
    iter::{Extend, FromIterator},
    mem,
};

use crate::{error::IndexOutOfBounds, traits::adt::List};

type Link<T> = Option<Box<SinglyLinkedListNode<T>>>;

/// An index addressable list built from forward-only nodes.
///
/// Every node is owned by its predecessor (the head by the list itself), so
/// inserting or removing in the middle only rewrites a single link.
pub struct SinglyLinkedList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> SinglyLinkedList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends an element to the end of the list
    pub fn add(&mut self, item: T) {
        let slot = last_link_mut(&mut self.head);
        *slot = Some(SinglyLinkedListNode::boxed(item, None));
        self.len += 1;
    }

    /// Inserts an element so that it ends up at `index`, shifting everything after it back by one.
    ///
    /// `index == len` appends.
    pub fn insert(&mut self, index: usize, item: T) -> Result<(), IndexOutOfBounds> {
        let len = self.len;
        IndexOutOfBounds::check_insert(index, len)?;
        let slot = link_at_mut(&mut self.head, index).ok_or(IndexOutOfBounds { index, len })?;
        let next = slot.take();
        *slot = Some(SinglyLinkedListNode::boxed(item, next));
        self.len += 1;
        Ok(())
    }

    pub fn get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        IndexOutOfBounds::check(index, self.len)?;
        self.iter().nth(index).ok_or(IndexOutOfBounds {
            index,
            len: self.len,
        })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        let len = self.len;
        IndexOutOfBounds::check(index, len)?;
        self.iter_mut()
            .nth(index)
            .ok_or(IndexOutOfBounds { index, len })
    }

    /// Overwrites the element at `index` and hands back the one it replaced
    pub fn set(&mut self, index: usize, item: T) -> Result<T, IndexOutOfBounds> {
        let slot = self.get_mut(index)?;
        Ok(mem::replace(slot, item))
    }

    /// Detaches the node at `index` and links its predecessor to its successor
    pub fn remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let len = self.len;
        IndexOutOfBounds::check(index, len)?;
        let slot = link_at_mut(&mut self.head, index).ok_or(IndexOutOfBounds { index, len })?;
        let SinglyLinkedListNode { value, next } =
            *slot.take().ok_or(IndexOutOfBounds { index, len })?;
        *slot = next;
        self.len -= 1;
        Ok(value)
    }

    pub fn contains<Q: PartialEq<T>>(&self, item: &Q) -> bool {
        self.iter().any(|s| item.eq(s))
    }

    pub fn first(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    pub fn last(&self) -> Option<&T> {
        self.iter().last()
    }

    /// Drops every node and resets the length
    pub fn clear(&mut self) {
        log::trace!("clearing list of length {}", self.len);
        drop_chain(self.head.take());
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            node: &self.head,
            remaining: self.len,
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            node: self.head.as_deref_mut(),
            remaining: self.len,
        }
    }
}

/// Follows `hops` links from `link`, returning `None` if the chain ends first.
fn link_at_mut<T>(mut link: &mut Link<T>, hops: usize) -> Option<&mut Link<T>> {
    for _ in 0..hops {
        link = match link {
            Some(node) => &mut node.next,
            None => return None,
        };
    }
    Some(link)
}

/// The trailing `None` after the last node.
fn last_link_mut<T>(mut link: &mut Link<T>) -> &mut Link<T> {
    while let Some(node) = link {
        link = &mut node.next;
    }
    link
}

/// Unlinks nodes one at a time so long chains don't recurse through `Box::drop`.
fn drop_chain<T>(mut link: Link<T>) {
    while let Some(mut node) = link {
        link = node.next.take();
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        drop_chain(self.head.take());
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self { head: None, len: 0 }
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: Debug> Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "SinglyLinkedList {{ length: {}, items: {{", self.len)?;
        let mut iter = self.iter();
        if let Some(elem) = iter.next() {
            write!(f, "{elem:?}")?
        }
        for elem in iter {
            write!(f, ", {elem:?}")?;
        }
        write!(f, "}} }}")
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut lst = SinglyLinkedList::new();
        lst.extend(iter);
        lst
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    /// appends in iteration order, walking to the end only once
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut slot = last_link_mut(&mut self.head);
        for item in iter.into_iter() {
            let node = slot.insert(SinglyLinkedListNode::boxed(item, None));
            slot = &mut node.next;
            // counted per node, the source iterator may still panic
            self.len += 1;
        }
    }
}

impl<T, const N: usize> From<[T; N]> for SinglyLinkedList<T> {
    fn from(items: [T; N]) -> Self {
        items.into_iter().collect()
    }
}

impl<T> List<T> for SinglyLinkedList<T> {
    fn add(&mut self, item: T) {
        SinglyLinkedList::add(self, item)
    }
    fn insert(&mut self, index: usize, item: T) -> Result<(), IndexOutOfBounds> {
        SinglyLinkedList::insert(self, index, item)
    }
    fn get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        SinglyLinkedList::get(self, index)
    }
    fn set(&mut self, index: usize, item: T) -> Result<T, IndexOutOfBounds> {
        SinglyLinkedList::set(self, index, item)
    }
    fn remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        SinglyLinkedList::remove(self, index)
    }
    fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        SinglyLinkedList::contains(self, item)
    }
    fn clear(&mut self) {
        SinglyLinkedList::clear(self)
    }
    fn len(&self) -> usize {
        self.len
    }
}

pub use iters::*;
mod iters {
    use super::*;
    use core::iter::FusedIterator;

    impl<T> IntoIterator for SinglyLinkedList<T> {
        type Item = T;
        type IntoIter = IntoIter<T>;
        fn into_iter(mut self) -> Self::IntoIter {
            let len = mem::take(&mut self.len);
            IntoIter {
                head: self.head.take(),
                remaining: len,
            }
        }
    }

    impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
        type Item = &'a T;
        type IntoIter = Iter<'a, T>;
        fn into_iter(self) -> Self::IntoIter {
            self.iter()
        }
    }

    impl<'a, T> IntoIterator for &'a mut SinglyLinkedList<T> {
        type Item = &'a mut T;
        type IntoIter = IterMut<'a, T>;
        fn into_iter(self) -> Self::IntoIter {
            self.iter_mut()
        }
    }

    pub struct IntoIter<T> {
        pub(crate) head: Link<T>,
        pub(crate) remaining: usize,
    }

    impl<T> Iterator for IntoIter<T> {
        type Item = T;
        fn next(&mut self) -> Option<Self::Item> {
            if let Some(s) = self.head.take() {
                let SinglyLinkedListNode { value, next } = *s;
                self.head = next;
                self.remaining -= 1;
                Some(value)
            } else {
                None
            }
        }

        fn size_hint(&self) -> (usize, Option<usize>) {
            (self.remaining, Some(self.remaining))
        }
    }

    impl<T> ExactSizeIterator for IntoIter<T> {}
    impl<T> FusedIterator for IntoIter<T> {}

    impl<T> Drop for IntoIter<T> {
        fn drop(&mut self) {
            drop_chain(self.head.take());
        }
    }

    pub struct Iter<'a, T> {
        pub(crate) node: &'a Link<T>,
        pub(crate) remaining: usize,
    }

    impl<'a, T> Iterator for Iter<'a, T> {
        type Item = &'a T;
        fn next(&mut self) -> Option<Self::Item> {
            if let Some(s) = self.node {
                self.node = &s.next;
                self.remaining -= 1;
                Some(&s.value)
            } else {
                None
            }
        }

        fn size_hint(&self) -> (usize, Option<usize>) {
            (self.remaining, Some(self.remaining))
        }
    }

    impl<'a, T> ExactSizeIterator for Iter<'a, T> {}
    impl<'a, T> FusedIterator for Iter<'a, T> {}

    pub struct IterMut<'a, T> {
        pub(crate) node: Option<&'a mut SinglyLinkedListNode<T>>,
        pub(crate) remaining: usize,
    }

    impl<'a, T> Iterator for IterMut<'a, T> {
        type Item = &'a mut T;
        fn next(&mut self) -> Option<Self::Item> {
            self.node.take().map(|s| {
                let SinglyLinkedListNode { value, next } = s;
                self.node = next.as_deref_mut();
                self.remaining -= 1;
                value
            })
        }

        fn size_hint(&self) -> (usize, Option<usize>) {
            (self.remaining, Some(self.remaining))
        }
    }

    impl<'a, T> ExactSizeIterator for IterMut<'a, T> {}
    impl<'a, T> FusedIterator for IterMut<'a, T> {}
}

pub(crate) struct SinglyLinkedListNode<T> {
    value: T,
    next: Link<T>,
}

impl<T> SinglyLinkedListNode<T> {
    fn boxed(value: T, next: Link<T>) -> Box<Self> {
        Box::new(Self { value, next })
    }
}

impl<T: Debug> Debug for SinglyLinkedListNode<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::SinglyLinkedList;
    use crate::error::IndexOutOfBounds;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn new_and_add() {
        let mut a = SinglyLinkedList::new();
        for i in 0..10 {
            a.add(i)
        }
        assert_eq!(a.len(), 10);
        for i in 0..10 {
            assert_eq!(a.get(i), Ok(&i));
        }
        println!("list: {a:?}")
    }

    #[test]
    fn insert_at_head() {
        let mut lst = SinglyLinkedList::new();
        lst.add(1);
        lst.add(2);
        lst.insert(0, 0).expect("index in range");
        assert_eq!(lst.get(0), Ok(&0));
        assert_eq!(lst.get(1), Ok(&1));
        assert_eq!(lst.get(2), Ok(&2));
        assert_eq!(lst.len(), 3);
    }

    #[test]
    fn insert_middle_and_end() {
        let mut lst: SinglyLinkedList<i32> = [0, 2].into();
        lst.insert(1, 1).expect("index in range");
        lst.insert(3, 3).expect("appending is allowed");
        assert_eq!(lst.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        assert_eq!(lst.insert(5, 5), Err(IndexOutOfBounds { index: 5, len: 4 }));
        assert_eq!(lst.len(), 4);
    }

    #[test]
    fn insert_into_empty() {
        let mut lst = SinglyLinkedList::new();
        assert!(lst.insert(1, 'a').is_err());
        lst.insert(0, 'a').expect("index in range");
        assert_eq!(lst.first(), Some(&'a'));
        assert_eq!(lst.last(), Some(&'a'));
    }

    #[test]
    fn get_out_of_bounds() {
        let lst: SinglyLinkedList<i32> = [1, 2].into();
        assert_eq!(lst.get(5), Err(IndexOutOfBounds { index: 5, len: 2 }));
        assert_eq!(lst.get(2), Err(IndexOutOfBounds { index: 2, len: 2 }));
        assert!(SinglyLinkedList::<i32>::new().get(0).is_err());
    }

    #[test]
    fn set_replaces() {
        let mut lst: SinglyLinkedList<&str> = ["a", "b", "c"].into();
        assert_eq!(lst.set(1, "x"), Ok("b"));
        assert_eq!(lst.get(1), Ok(&"x"));
        assert_eq!(lst.set(3, "y"), Err(IndexOutOfBounds { index: 3, len: 3 }));
        assert_eq!(lst.len(), 3);
    }

    #[test]
    fn remove_relinks() {
        let mut lst: SinglyLinkedList<i32> = (0..5).collect();
        assert_eq!(lst.remove(2), Ok(2));
        assert_eq!(lst.get(2), Ok(&3));
        assert_eq!(lst.remove(0), Ok(0));
        assert_eq!(lst.get(0), Ok(&1));
        assert_eq!(lst.remove(2), Ok(4));
        assert_eq!(lst.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(lst.remove(2), Err(IndexOutOfBounds { index: 2, len: 2 }));
        assert_eq!(lst.len(), 2);
    }

    #[test]
    fn remove_then_add() {
        let mut lst: SinglyLinkedList<i32> = [7].into();
        assert_eq!(lst.remove(0), Ok(7));
        assert!(lst.is_empty());
        lst.add(8);
        assert_eq!(lst.get(0), Ok(&8));
    }

    #[test]
    fn contains() {
        let lst: SinglyLinkedList<i32> = (0..10).collect();
        assert!(lst.contains(&3));
        assert!(!lst.contains(&10));
        assert!(!SinglyLinkedList::<i32>::new().contains(&0));
    }

    #[test]
    fn clear_resets() {
        let mut lst: SinglyLinkedList<i32> = (0..10).collect();
        lst.clear();
        assert_eq!(lst.len(), 0);
        assert!(lst.is_empty());
        assert_eq!(lst.get(0), Err(IndexOutOfBounds { index: 0, len: 0 }));
        lst.add(1);
        assert_eq!(lst.len(), 1);
        assert_eq!(lst.get(0), Ok(&1));
    }

    #[test]
    fn iter_mut_test() {
        let mut lst: SinglyLinkedList<i32> = (0..10).collect();
        for i in lst.iter_mut() {
            *i += 1;
        }
        assert_eq!(
            lst.iter().copied().collect::<Vec<_>>(),
            (1..11).collect::<Vec<_>>()
        );
    }

    #[test]
    fn into_iter_and_extend() {
        let mut lst: SinglyLinkedList<i32> = (0..5).collect();
        lst.extend(5..10);
        assert_eq!(lst.len(), 10);
        assert_eq!(lst.iter().len(), 10);
        assert_eq!(
            lst.into_iter().collect::<Vec<_>>(),
            (0..10).collect::<Vec<_>>()
        );
    }

    #[test]
    fn extend_from_panicking_iter() {
        let mut lst: SinglyLinkedList<i32> = [-1].into();
        let source = (0..5).map(|i| {
            assert!(i < 3, "source ran dry");
            i
        });
        let res = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| lst.extend(source)));
        assert!(res.is_err());
        assert_eq!(lst.len(), 4);
        assert_eq!(lst.iter().count(), lst.len());
        assert_eq!(lst.iter().copied().collect::<Vec<_>>(), vec![-1, 0, 1, 2]);
        lst.add(9);
        assert_eq!(lst.get(4), Ok(&9));
    }

    #[test]
    fn clone_eq() {
        let a: SinglyLinkedList<i32> = (0..100).collect();
        let mut b = a.clone();
        assert_eq!(a, b);
        b.set(50, -1).expect("index in range");
        assert_ne!(a, b);
        assert_eq!(
            format!("{:?}", SinglyLinkedList::from([1, 2])),
            "SinglyLinkedList { length: 2, items: {1, 2} }"
        );
    }

    #[test]
    fn long_list_drop() {
        let lst: SinglyLinkedList<u32> = (0..1_000_000).collect();
        assert_eq!(lst.len(), 1_000_000);
        drop(lst);
    }

    #[test]
    fn random_against_vec() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut lst = SinglyLinkedList::new();
        let mut reference = Vec::new();
        for _ in 0..5_000 {
            let len = reference.len();
            match rng.gen_range(0..4) {
                0 => {
                    let index = rng.gen_range(0..=len);
                    let value: u16 = rng.gen();
                    lst.insert(index, value).expect("index in range");
                    reference.insert(index, value);
                }
                1 if len > 0 => {
                    let index = rng.gen_range(0..len);
                    assert_eq!(lst.remove(index), Ok(reference.remove(index)));
                }
                2 if len > 0 => {
                    let index = rng.gen_range(0..len);
                    let value: u16 = rng.gen();
                    let old = core::mem::replace(&mut reference[index], value);
                    assert_eq!(lst.set(index, value), Ok(old));
                }
                _ => {
                    let value: u16 = rng.gen();
                    lst.add(value);
                    reference.push(value);
                }
            }
            assert_eq!(lst.len(), reference.len());
            assert_eq!(lst.is_empty(), reference.is_empty());
        }
        assert!(lst.iter().eq(reference.iter()));
    }
}
