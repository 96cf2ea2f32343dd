use linked_structures::{EmptyStack, IndexOutOfBounds};
use rand::{Rng, SeedableRng};

/// deterministically applies an operation to a target returning the result
pub trait Operation {
    type Result: Sized;
    type Target;
    fn apply(&self, target: &mut Self::Target) -> Self::Result;
}

// deterministically generates a sequence of operations paired with the result the reference gives
pub trait OperationGenerator<R>:
    Iterator<Item = (Self::Operation, <Self::Operation as Operation>::Result)> + Sized
where
    R: Rng + SeedableRng,
{
    type Operation: Operation;
    type ReferenceImpl;
    fn from_rng(rng: R) -> Self;
    fn from_seed(seed: u64) -> Self {
        Self::from_rng(R::seed_from_u64(seed))
    }
    fn data(self) -> Self::ReferenceImpl;
}

/// What a single operation observed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome<T> {
    Done,
    Value(T),
    /// queue polled while empty
    Absent,
    Flag(bool),
    Len(usize),
    OutOfBounds(IndexOutOfBounds),
    EmptyStack,
}

impl<T> From<Result<T, IndexOutOfBounds>> for Outcome<T> {
    fn from(r: Result<T, IndexOutOfBounds>) -> Self {
        r.map_or_else(Outcome::OutOfBounds, Outcome::Value)
    }
}

impl<T> From<Result<T, EmptyStack>> for Outcome<T> {
    fn from(r: Result<T, EmptyStack>) -> Self {
        r.map_or(Outcome::EmptyStack, Outcome::Value)
    }
}

impl<T> From<Option<T>> for Outcome<T> {
    fn from(o: Option<T>) -> Self {
        o.map_or(Outcome::Absent, Outcome::Value)
    }
}

mod impls {
    use super::*;
    use core::fmt::Debug;
    use linked_structures::{
        traits::adt::{List, Queue, Stack},
        SinglyLinkedList, SinglyLinkedQueue, SinglyLinkedStack,
    };
    use rand::distributions::{Distribution, Standard};
    use std::collections::VecDeque;

    /// picks an index, mostly valid, sometimes just past the end
    fn pick_index<R: Rng>(rng: &mut R, len: usize, inclusive: bool) -> usize {
        let valid = if inclusive { len + 1 } else { len };
        if valid == 0 || rng.gen_bool(0.1) {
            rng.gen_range(len..len + 3)
        } else {
            rng.gen_range(0..valid)
        }
    }

    #[derive(Clone, Copy, Debug)]
    pub enum ListOperation<T> {
        Add(T),
        Insert(usize, T),
        Get(usize),
        Set(usize, T),
        Remove(usize),
        Contains(T),
        Clear,
        Len,
        IsEmpty,
    }

    impl<T: Copy + PartialEq> Operation for ListOperation<T> {
        type Result = Outcome<T>;
        type Target = SinglyLinkedList<T>;

        fn apply(&self, list: &mut Self::Target) -> Self::Result {
            match *self {
                Self::Add(v) => {
                    List::add(list, v);
                    Outcome::Done
                }
                Self::Insert(i, v) => match List::insert(list, i, v) {
                    Ok(()) => Outcome::Done,
                    Err(e) => Outcome::OutOfBounds(e),
                },
                Self::Get(i) => List::get(list, i).copied().into(),
                Self::Set(i, v) => List::set(list, i, v).into(),
                Self::Remove(i) => List::remove(list, i).into(),
                Self::Contains(v) => Outcome::Flag(List::contains(list, &v)),
                Self::Clear => {
                    List::clear(list);
                    Outcome::Done
                }
                Self::Len => Outcome::Len(List::len(list)),
                Self::IsEmpty => Outcome::Flag(List::is_empty(list)),
            }
        }
    }

    pub struct ListOperationGenerator<T, R> {
        rng: R,
        data: Vec<T>,
    }

    impl<T, R> OperationGenerator<R> for ListOperationGenerator<T, R>
    where
        R: Rng + SeedableRng,
        T: Copy + PartialEq + Debug,
        Standard: Distribution<T>,
    {
        type Operation = ListOperation<T>;
        type ReferenceImpl = Vec<T>;
        fn from_rng(rng: R) -> Self {
            Self {
                rng,
                data: Vec::new(),
            }
        }
        fn data(self) -> Self::ReferenceImpl {
            self.data
        }
    }

    impl<T, R> Iterator for ListOperationGenerator<T, R>
    where
        R: Rng,
        T: Copy + PartialEq,
        Standard: Distribution<T>,
    {
        type Item = (ListOperation<T>, Outcome<T>);

        fn next(&mut self) -> Option<Self::Item> {
            let len = self.data.len();
            let item = match self.rng.gen_range(0..100) {
                0..=24 => {
                    let v: T = self.rng.gen();
                    self.data.push(v);
                    (ListOperation::Add(v), Outcome::Done)
                }
                25..=44 => {
                    let i = pick_index(&mut self.rng, len, true);
                    let v: T = self.rng.gen();
                    let res = if i <= len {
                        self.data.insert(i, v);
                        Outcome::Done
                    } else {
                        Outcome::OutOfBounds(IndexOutOfBounds { index: i, len })
                    };
                    (ListOperation::Insert(i, v), res)
                }
                45..=59 => {
                    let i = pick_index(&mut self.rng, len, false);
                    let res: Outcome<T> = self
                        .data
                        .get(i)
                        .copied()
                        .ok_or(IndexOutOfBounds { index: i, len })
                        .into();
                    (ListOperation::Get(i), res)
                }
                60..=69 => {
                    let i = pick_index(&mut self.rng, len, false);
                    let v: T = self.rng.gen();
                    let res: Outcome<T> = self
                        .data
                        .get_mut(i)
                        .map(|slot| core::mem::replace(slot, v))
                        .ok_or(IndexOutOfBounds { index: i, len })
                        .into();
                    (ListOperation::Set(i, v), res)
                }
                70..=84 => {
                    let i = pick_index(&mut self.rng, len, false);
                    let res = if i < len {
                        Outcome::Value(self.data.remove(i))
                    } else {
                        Outcome::OutOfBounds(IndexOutOfBounds { index: i, len })
                    };
                    (ListOperation::Remove(i), res)
                }
                85..=91 => {
                    let v: T = self.rng.gen();
                    (
                        ListOperation::Contains(v),
                        Outcome::Flag(self.data.contains(&v)),
                    )
                }
                92 => {
                    self.data.clear();
                    (ListOperation::Clear, Outcome::Done)
                }
                93..=96 => (ListOperation::Len, Outcome::Len(len)),
                _ => (ListOperation::IsEmpty, Outcome::Flag(len == 0)),
            };
            Some(item)
        }
    }

    #[derive(Clone, Copy, Debug)]
    pub enum QueueOperation<T> {
        Add(T),
        Poll,
        Len,
        IsEmpty,
    }

    impl<T> Operation for QueueOperation<T>
    where
        T: Copy,
    {
        type Result = Outcome<T>;
        type Target = SinglyLinkedQueue<T>;

        fn apply(&self, queue: &mut Self::Target) -> Self::Result {
            match *self {
                Self::Add(v) => {
                    Queue::add(queue, v);
                    Outcome::Done
                }
                Self::Poll => Queue::poll(queue).into(),
                Self::Len => Outcome::Len(Queue::len(queue)),
                Self::IsEmpty => Outcome::Flag(Queue::is_empty(queue)),
            }
        }
    }

    pub struct QueueOperationGenerator<T, R> {
        rng: R,
        data: VecDeque<T>,
    }

    impl<T, R> OperationGenerator<R> for QueueOperationGenerator<T, R>
    where
        R: Rng + SeedableRng,
        T: Copy + Debug,
        Standard: Distribution<T>,
    {
        type Operation = QueueOperation<T>;
        type ReferenceImpl = VecDeque<T>;
        fn from_rng(rng: R) -> Self {
            Self {
                rng,
                data: VecDeque::new(),
            }
        }
        fn data(self) -> Self::ReferenceImpl {
            self.data
        }
    }

    impl<T, R> Iterator for QueueOperationGenerator<T, R>
    where
        R: Rng,
        T: Copy,
        Standard: Distribution<T>,
    {
        type Item = (QueueOperation<T>, Outcome<T>);

        fn next(&mut self) -> Option<Self::Item> {
            let item = match self.rng.gen_range(0..10) {
                0..=4 => {
                    let v: T = self.rng.gen();
                    self.data.push_back(v);
                    (QueueOperation::Add(v), Outcome::Done)
                }
                5..=7 => (QueueOperation::Poll, Outcome::from(self.data.pop_front())),
                8 => (QueueOperation::Len, Outcome::Len(self.data.len())),
                _ => (QueueOperation::IsEmpty, Outcome::Flag(self.data.is_empty())),
            };
            Some(item)
        }
    }

    #[derive(Clone, Copy, Debug)]
    pub enum StackOperation<T> {
        Push(T),
        Pop,
        Len,
        IsEmpty,
    }

    impl<T> Operation for StackOperation<T>
    where
        T: Copy,
    {
        type Result = Outcome<T>;
        type Target = SinglyLinkedStack<T>;

        fn apply(&self, stack: &mut Self::Target) -> Self::Result {
            match *self {
                Self::Push(v) => {
                    Stack::push(stack, v);
                    Outcome::Done
                }
                Self::Pop => Stack::pop(stack).into(),
                Self::Len => Outcome::Len(Stack::len(stack)),
                Self::IsEmpty => Outcome::Flag(Stack::is_empty(stack)),
            }
        }
    }

    pub struct StackOperationGenerator<T, R> {
        rng: R,
        data: Vec<T>,
    }

    impl<T, R> OperationGenerator<R> for StackOperationGenerator<T, R>
    where
        R: Rng + SeedableRng,
        T: Copy + Debug,
        Standard: Distribution<T>,
    {
        type Operation = StackOperation<T>;
        type ReferenceImpl = Vec<T>;
        fn from_rng(rng: R) -> Self {
            Self {
                rng,
                data: Vec::new(),
            }
        }
        fn data(self) -> Self::ReferenceImpl {
            self.data
        }
    }

    impl<T, R> Iterator for StackOperationGenerator<T, R>
    where
        R: Rng,
        T: Copy,
        Standard: Distribution<T>,
    {
        type Item = (StackOperation<T>, Outcome<T>);

        fn next(&mut self) -> Option<Self::Item> {
            let item = match self.rng.gen_range(0..10) {
                0..=4 => {
                    let v: T = self.rng.gen();
                    self.data.push(v);
                    (StackOperation::Push(v), Outcome::Done)
                }
                5..=7 => {
                    let res: Outcome<T> = self.data.pop().ok_or(EmptyStack).into();
                    (StackOperation::Pop, res)
                }
                8 => (StackOperation::Len, Outcome::Len(self.data.len())),
                _ => (StackOperation::IsEmpty, Outcome::Flag(self.data.is_empty())),
            };
            Some(item)
        }
    }
}

pub use impls::*;
