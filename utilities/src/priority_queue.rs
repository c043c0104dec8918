//! A binary-heap priority queue whose pop order is chosen by a type parameter.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;
use std::marker::PhantomData;

/// A payload tagged with the priority it is ordered by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PriorityElement<T, P = i64> {
    pub value: T,
    pub priority: P,
}

impl<T, P> PriorityElement<T, P> {
    pub fn new(value: T, priority: P) -> Self {
        Self { value, priority }
    }
}

/// Decides which of two priorities leaves the heap first.
pub trait HeapOrder {
    /// `Ordering::Greater` means `a` pops before `b`.
    fn order<P: Ord>(a: &P, b: &P) -> Ordering;
}

/// Lowest priority first.
#[derive(Clone, Copy, Debug, Default)]
pub struct Min;

/// Highest priority first.
#[derive(Clone, Copy, Debug, Default)]
pub struct Max;

impl HeapOrder for Min {
    fn order<P: Ord>(a: &P, b: &P) -> Ordering {
        b.cmp(a)
    }
}

impl HeapOrder for Max {
    fn order<P: Ord>(a: &P, b: &P) -> Ordering {
        a.cmp(b)
    }
}

struct Entry<T, O, P> {
    element: PriorityElement<T, P>,
    order: PhantomData<O>,
}

impl<T, O: HeapOrder, P: Ord> PartialEq for Entry<T, O, P> {
    fn eq(&self, other: &Self) -> bool {
        self.element.priority == other.element.priority
    }
}

impl<T, O: HeapOrder, P: Ord> Eq for Entry<T, O, P> {}

impl<T, O: HeapOrder, P: Ord> PartialOrd for Entry<T, O, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, O: HeapOrder, P: Ord> Ord for Entry<T, O, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        O::order(&self.element.priority, &other.element.priority)
    }
}

/// Binary heap of [`PriorityElement`]s. The payload needs no ordering of its
/// own and ties between equal priorities pop in unspecified order.
pub struct PriorityQueue<T, O: HeapOrder, P: Ord = i64> {
    heap: BinaryHeap<Entry<T, O, P>>,
}

pub type MinPriorityQueue<T, P = i64> = PriorityQueue<T, Min, P>;
pub type MaxPriorityQueue<T, P = i64> = PriorityQueue<T, Max, P>;

impl<T, O: HeapOrder, P: Ord> Default for PriorityQueue<T, O, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, O: HeapOrder, P: Ord> PriorityQueue<T, O, P> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    pub fn push(&mut self, element: PriorityElement<T, P>) {
        self.heap.push(Entry {
            element,
            order: PhantomData,
        });
    }

    pub fn push_with(&mut self, value: T, priority: P) {
        self.push(PriorityElement::new(value, priority));
    }

    pub fn pop(&mut self) -> Option<PriorityElement<T, P>> {
        self.heap.pop().map(|entry| entry.element)
    }

    pub fn peek(&self) -> Option<&PriorityElement<T, P>> {
        self.heap.peek().map(|entry| &entry.element)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T, O: HeapOrder, P: Ord> Extend<PriorityElement<T, P>> for PriorityQueue<T, O, P> {
    fn extend<I: IntoIterator<Item = PriorityElement<T, P>>>(&mut self, iter: I) {
        for element in iter {
            self.push(element);
        }
    }
}

impl<T, O: HeapOrder, P: Ord> FromIterator<PriorityElement<T, P>> for PriorityQueue<T, O, P> {
    fn from_iter<I: IntoIterator<Item = PriorityElement<T, P>>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T, O: HeapOrder, P: Ord> fmt::Debug for PriorityQueue<T, O, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("len", &self.heap.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain<O: HeapOrder>(mut queue: PriorityQueue<&'static str, O>) -> Vec<i64> {
        std::iter::from_fn(|| queue.pop().map(|element| element.priority)).collect()
    }

    fn sample<O: HeapOrder>() -> PriorityQueue<&'static str, O> {
        [("c", 7), ("a", -2), ("d", 10), ("b", 3), ("e", 3)]
            .into_iter()
            .map(|(value, priority)| PriorityElement::new(value, priority))
            .collect()
    }

    #[test]
    fn min_queue_pops_lowest_first() {
        assert_eq!(drain(sample::<Min>()), vec![-2, 3, 3, 7, 10]);
    }

    #[test]
    fn max_queue_pops_highest_first() {
        assert_eq!(drain(sample::<Max>()), vec![10, 7, 3, 3, -2]);
    }

    #[test]
    fn len_tracks_push_and_pop() {
        let mut queue = MinPriorityQueue::new();
        assert!(queue.is_empty());
        queue.push_with('x', 4);
        queue.push_with('y', 1);
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.peek().map(|e| e.value), Some('y'));
        assert_eq!(queue.pop(), Some(PriorityElement::new('y', 1)));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.pop(), Some(PriorityElement::new('x', 4)));
        assert_eq!(queue.pop(), None);
    }
}
