use std::fmt;

/// Misuse of a [`BoundedQueue`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// A queue must be able to hold at least one element
    ZeroCapacity,
    /// Append on a queue that already holds `capacity` elements
    Full { capacity: usize },
    /// Pop or peek on a queue with no elements
    Empty,
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::ZeroCapacity => write!(f, "queue capacity must be at least 1"),
            QueueError::Full { capacity } => write!(f, "queue is full (capacity {})", capacity),
            QueueError::Empty => write!(f, "queue is empty"),
        }
    }
}

impl std::error::Error for QueueError {}

/// Fixed-capacity FIFO backed by a ring of slots.
///
/// Elements are appended at the rear and removed from the front. The queue
/// never grows: appending to a full queue is an error, as is popping or
/// peeking an empty one.
#[derive(Debug, Clone)]
pub struct BoundedQueue<T> {
    slots: Box<[Option<T>]>,
    front: usize,
    rear: usize,
    len: usize,
}

impl<T> BoundedQueue<T> {
    /// Create an empty queue holding at most `capacity` elements
    pub fn new(capacity: usize) -> Result<Self, QueueError> {
        if capacity == 0 {
            return Err(QueueError::ZeroCapacity);
        }

        let slots = std::iter::repeat_with(|| None).take(capacity).collect();

        Ok(Self {
            slots,
            front: 0,
            // The first append lands on slot 0
            rear: capacity - 1,
            len: 0,
        })
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Append an element after the current newest one
    pub fn append(&mut self, element: T) -> Result<(), QueueError> {
        if self.is_full() {
            return Err(QueueError::Full {
                capacity: self.capacity(),
            });
        }

        self.rear = (self.rear + 1) % self.capacity();
        self.slots[self.rear] = Some(element);
        self.len += 1;
        Ok(())
    }

    /// Remove and return the oldest element
    pub fn pop_oldest(&mut self) -> Result<T, QueueError> {
        if self.is_empty() {
            return Err(QueueError::Empty);
        }

        let element = self.slots[self.front].take().ok_or(QueueError::Empty)?;
        self.front = (self.front + 1) % self.capacity();
        self.len -= 1;
        Ok(element)
    }

    /// The most recently appended element
    pub fn peek_newest(&self) -> Result<&T, QueueError> {
        if self.is_empty() {
            return Err(QueueError::Empty);
        }

        self.slots[self.rear].as_ref().ok_or(QueueError::Empty)
    }

    /// Visit every element from oldest to newest, threading `context`
    /// through each call.
    pub fn for_each<C, F>(&self, context: &mut C, mut visitor: F)
    where
        F: FnMut(&mut C, &T),
    {
        for element in self.iter() {
            visitor(context, element);
        }
    }

    /// Iterate from oldest to newest
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            queue: self,
            offset: 0,
        }
    }

    /// Pop every element. The queue keeps its capacity.
    pub fn clear(&mut self) {
        while self.pop_oldest().is_ok() {}
    }
}

impl<T: PartialEq> BoundedQueue<T> {
    pub fn contains(&self, element: &T) -> bool {
        self.iter().any(|e| e == element)
    }
}

/// Oldest-to-newest iterator over a [`BoundedQueue`]
pub struct Iter<'a, T> {
    queue: &'a BoundedQueue<T>,
    offset: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.queue.len {
            return None;
        }

        let index = (self.queue.front + self.offset) % self.queue.capacity();
        self.offset += 1;
        self.queue.slots[index].as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.queue.len - self.offset;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a BoundedQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect<T: Copy>(queue: &BoundedQueue<T>) -> Vec<T> {
        queue.iter().copied().collect()
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let result = BoundedQueue::<i32>::new(0);
        assert_eq!(result.unwrap_err(), QueueError::ZeroCapacity);
    }

    #[test]
    fn test_new_queue_is_empty() {
        let queue = BoundedQueue::<i32>::new(4).unwrap();
        assert!(queue.is_empty());
        assert!(!queue.is_full());
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.capacity(), 4);
        assert_eq!(queue.iter().count(), 0);
    }

    #[test]
    fn test_append_until_full() {
        let mut queue = BoundedQueue::new(3).unwrap();
        queue.append(1).unwrap();
        queue.append(2).unwrap();
        queue.append(3).unwrap();

        assert!(queue.is_full());
        assert_eq!(queue.append(4), Err(QueueError::Full { capacity: 3 }));
        // Failed append leaves the contents alone
        assert_eq!(collect(&queue), vec![1, 2, 3]);
    }

    #[test]
    fn test_pop_oldest_is_fifo() {
        let mut queue = BoundedQueue::new(3).unwrap();
        queue.append('a').unwrap();
        queue.append('b').unwrap();

        assert_eq!(queue.pop_oldest(), Ok('a'));
        assert_eq!(queue.pop_oldest(), Ok('b'));
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn test_pop_empty_is_checked() {
        let mut queue = BoundedQueue::<u8>::new(2).unwrap();
        assert_eq!(queue.pop_oldest(), Err(QueueError::Empty));
        assert_eq!(queue.len(), 0);

        queue.append(7).unwrap();
        queue.pop_oldest().unwrap();
        assert_eq!(queue.pop_oldest(), Err(QueueError::Empty));
    }

    #[test]
    fn test_peek_newest() {
        let mut queue = BoundedQueue::new(2).unwrap();
        assert_eq!(queue.peek_newest(), Err(QueueError::Empty));

        queue.append(10).unwrap();
        assert_eq!(queue.peek_newest(), Ok(&10));

        queue.append(20).unwrap();
        assert_eq!(queue.peek_newest(), Ok(&20));
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_wraps_around_capacity() {
        let mut queue = BoundedQueue::new(3).unwrap();
        for i in 0..3 {
            queue.append(i).unwrap();
        }

        // Slide the window over the ring several times
        for i in 3..10 {
            queue.pop_oldest().unwrap();
            queue.append(i).unwrap();
            assert_eq!(queue.peek_newest(), Ok(&i));
            assert_eq!(collect(&queue), vec![i - 2, i - 1, i]);
        }
    }

    #[test]
    fn test_for_each_visits_oldest_to_newest() {
        let mut queue = BoundedQueue::new(4).unwrap();
        queue.append(1).unwrap();
        queue.append(2).unwrap();
        queue.pop_oldest().unwrap();
        queue.append(3).unwrap();
        queue.append(4).unwrap();
        queue.append(5).unwrap();

        let mut seen = Vec::new();
        queue.for_each(&mut seen, |seen, value| seen.push(*value));
        assert_eq!(seen, vec![2, 3, 4, 5]);

        // Traversal is repeatable and does not consume anything
        let mut again = Vec::new();
        queue.for_each(&mut again, |again, value| again.push(*value));
        assert_eq!(again, seen);
    }

    #[test]
    fn test_for_each_shares_context() {
        let mut queue = BoundedQueue::new(5).unwrap();
        for value in [3, 4, 5] {
            queue.append(value).unwrap();
        }

        let mut sum = 0;
        queue.for_each(&mut sum, |sum, value| *sum += value);
        assert_eq!(sum, 12);
    }

    #[test]
    fn test_clear_matches_fresh_queue() {
        let mut queue = BoundedQueue::new(3).unwrap();
        queue.append(1).unwrap();
        queue.append(2).unwrap();
        queue.append(3).unwrap();
        queue.pop_oldest().unwrap();
        queue.append(4).unwrap();

        queue.clear();

        assert!(queue.is_empty());
        assert_eq!(queue.capacity(), 3);
        assert_eq!(queue.peek_newest(), Err(QueueError::Empty));

        // Refill to capacity after the clear
        for value in [7, 8, 9] {
            queue.append(value).unwrap();
        }
        assert_eq!(collect(&queue), vec![7, 8, 9]);
    }

    #[test]
    fn test_contains() {
        let mut queue = BoundedQueue::new(3).unwrap();
        queue.append((1, 1)).unwrap();
        queue.append((2, 1)).unwrap();

        assert!(queue.contains(&(1, 1)));
        assert!(!queue.contains(&(3, 1)));

        queue.pop_oldest().unwrap();
        assert!(!queue.contains(&(1, 1)));
    }

    #[test]
    fn test_iter_exact_size() {
        let mut queue = BoundedQueue::new(4).unwrap();
        queue.append(1).unwrap();
        queue.append(2).unwrap();

        let mut iter = queue.iter();
        assert_eq!(iter.len(), 2);
        iter.next();
        assert_eq!(iter.len(), 1);
    }
}
