/// Binary min-heap of items prioritized by a key.
///
/// Only keys are compared; the order of items with equal keys is unspecified.
/// There is no decrease-key operation. Users that need to lower the priority
/// of an item push it again and skip the stale entry when it is popped later.
#[derive(Debug, Clone)]
pub struct MinHeap<K, T> {
    entries: Vec<(K, T)>,
}

impl<K: Ord, T> MinHeap<K, T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, key: K, item: T) {
        self.entries.push((key, item));
        self.sift_up(self.entries.len() - 1);
    }

    /// Removes the entry with the minimum key.
    ///
    /// Returns `None` if the heap is empty.
    pub fn pop(&mut self) -> Option<(K, T)> {
        if self.entries.is_empty() {
            return None;
        }

        let top = self.entries.swap_remove(0);

        if !self.entries.is_empty() {
            self.sift_down(0);
        }

        Some(top)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;

            if self.entries[index].0 < self.entries[parent].0 {
                self.entries.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.entries.len();

        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;

            if left < len && self.entries[left].0 < self.entries[smallest].0 {
                smallest = left;
            }

            if right < len && self.entries[right].0 < self.entries[smallest].0 {
                smallest = right;
            }

            if smallest == index {
                break;
            }

            self.entries.swap(index, smallest);
            index = smallest;
        }
    }
}

impl<K: Ord, T> Default for MinHeap<K, T> {
    fn default() -> Self {
        Self::new()
    }
}
