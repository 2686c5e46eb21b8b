//! A binary min-heap whose order is given by a comparison function instead of
//! the element's [`Ord`] implementation.
//!
//! The standard library's [`BinaryHeap`](std::collections::BinaryHeap) is a
//! max-heap over `Ord`, so building a Huffman tree with it means flipping the
//! ordering of the nodes. Here the comparator is injected, and the heap always
//! hands out the smallest element under it.

use std::cmp::Ordering;

use crate::error::HuffmanError;

/// A priority queue backed by a `Vec` laid out as a binary heap: the children
/// of the element at `i` live at `2i + 1` and `2i + 2`, its parent at
/// `(i - 1) / 2`.
///
/// Elements that compare equal come out in an unspecified order, decided only
/// by the heap mechanics.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    data: Vec<T>,
    compare: F,
}

impl<T: Ord> PriorityQueue<T, fn(&T, &T) -> Ordering> {
    /// Creates an empty queue ordered by `T`'s natural ordering.
    ///
    /// # Examples
    ///
    /// ```
    /// use huffman_coding::PriorityQueue;
    ///
    /// let mut queue = PriorityQueue::new();
    /// queue.enqueue(3);
    /// queue.enqueue(1);
    /// queue.enqueue(2);
    /// assert_eq!(queue.dequeue(), Ok(1));
    /// assert_eq!(queue.count(), 2);
    /// ```
    pub fn new() -> Self {
        Self::with_comparator(T::cmp as fn(&T, &T) -> Ordering)
    }
}

impl<T: Ord> Default for PriorityQueue<T, fn(&T, &T) -> Ordering> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, F> PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    /// Creates an empty queue that hands out the minimum under `compare`.
    pub fn with_comparator(compare: F) -> Self {
        PriorityQueue {
            data: Vec::new(),
            compare,
        }
    }

    /// Creates an empty queue with room for `capacity` elements.
    pub fn with_capacity(capacity: usize, compare: F) -> Self {
        PriorityQueue {
            data: Vec::with_capacity(capacity),
            compare,
        }
    }

    /// Number of elements currently queued.
    pub fn count(&self) -> usize {
        self.data.len()
    }

    pub fn len(&self) -> usize {
        self.count()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the minimum without removing it.
    pub fn peek_min(&self) -> Option<&T> {
        self.data.first()
    }

    /// Inserts `item`, then sifts it up until its parent is not greater.
    pub fn enqueue(&mut self, item: T) {
        self.data.push(item);
        let mut child = self.data.len() - 1;
        while child > 0 {
            let parent = (child - 1) / 2;
            if (self.compare)(&self.data[child], &self.data[parent]) != Ordering::Less {
                break;
            }
            self.data.swap(child, parent);
            child = parent;
        }
    }

    /// Removes and returns the minimum.
    ///
    /// The last element takes the place of the root and sifts down, always
    /// towards the smaller child; the right child is only chosen when it is
    /// strictly smaller than the left one.
    ///
    /// # Errors
    ///
    /// Returns [`HuffmanError::EmptyQueue`] if there is nothing to dequeue.
    pub fn dequeue(&mut self) -> Result<T, HuffmanError> {
        if self.data.is_empty() {
            return Err(HuffmanError::EmptyQueue);
        }
        let front = self.data.swap_remove(0);

        let len = self.data.len();
        let mut parent = 0;
        loop {
            let mut child = 2 * parent + 1;
            if child >= len {
                break;
            }
            let right = child + 1;
            if right < len && (self.compare)(&self.data[right], &self.data[child]) == Ordering::Less
            {
                child = right;
            }
            if (self.compare)(&self.data[parent], &self.data[child]) != Ordering::Greater {
                break;
            }
            self.data.swap(parent, child);
            parent = child;
        }
        Ok(front)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_heap<T, F: Fn(&T, &T) -> Ordering>(queue: &PriorityQueue<T, F>) -> bool {
        (1..queue.data.len())
            .all(|i| (queue.compare)(&queue.data[(i - 1) / 2], &queue.data[i]) != Ordering::Greater)
    }

    #[test]
    fn dequeue_in_ascending_order() {
        let mut queue = PriorityQueue::new();
        for n in [5, 3, 8, 1, 9, 1, 4, 7] {
            queue.enqueue(n);
            assert!(is_heap(&queue));
        }
        let mut drained = vec![];
        while !queue.is_empty() {
            drained.push(queue.dequeue().unwrap());
            assert!(is_heap(&queue));
        }
        assert_eq!(drained, vec![1, 1, 3, 4, 5, 7, 8, 9]);
    }

    #[test]
    fn empty() {
        let mut queue: PriorityQueue<u32, _> = PriorityQueue::new();
        assert_eq!(queue.count(), 0);
        assert_eq!(queue.peek_min(), None);
        assert_eq!(queue.dequeue(), Err(HuffmanError::EmptyQueue));

        queue.enqueue(1);
        assert_eq!(queue.dequeue(), Ok(1));
        assert_eq!(queue.dequeue(), Err(HuffmanError::EmptyQueue));
    }

    #[test]
    fn peek_min() {
        let mut queue = PriorityQueue::new();
        queue.enqueue('c');
        assert_eq!(queue.peek_min(), Some(&'c'));
        queue.enqueue('a');
        queue.enqueue('b');
        assert_eq!(queue.peek_min(), Some(&'a'));
        assert_eq!(queue.count(), 3);
    }

    #[test]
    fn comparator() {
        // Longest string first.
        let mut queue =
            PriorityQueue::with_capacity(3, |a: &&str, b: &&str| b.len().cmp(&a.len()));
        queue.enqueue("ab");
        queue.enqueue("abcd");
        queue.enqueue("a");
        assert_eq!(queue.dequeue(), Ok("abcd"));
        assert_eq!(queue.dequeue(), Ok("ab"));
        assert_eq!(queue.dequeue(), Ok("a"));
    }

    #[test]
    fn ties_keep_the_heap_layout() {
        // Only the first field is compared, the second tags the insertion.
        let mut queue = PriorityQueue::with_comparator(|a: &(u8, u8), b: &(u8, u8)| a.0.cmp(&b.0));
        queue.enqueue((1, 0));
        queue.enqueue((1, 1));
        queue.enqueue((1, 2));
        // No sift happens between equal keys: the root stays, then the last
        // element is moved up and kept there.
        assert_eq!(queue.dequeue(), Ok((1, 0)));
        assert_eq!(queue.dequeue(), Ok((1, 2)));
        assert_eq!(queue.dequeue(), Ok((1, 1)));
    }
}
