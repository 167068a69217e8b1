use std::collections::VecDeque;

use serde::Serialize;

/// Appends `element` and evicts from the front until `window.len() <= limit`.
///
/// A `limit` of zero leaves the window empty.
pub fn push_bounded<T>(window: &mut VecDeque<T>, element: T, limit: usize) {
    window.push_back(element);
    while window.len() > limit {
        window.pop_front();
    }
}

/// Upper bound on the samples reserved up front; larger windows grow on push.
const PREALLOCATED_SAMPLES: usize = 256;

/// FIFO buffer keeping at most `limit` most recent samples in arrival order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundedWindow<T> {
    items: VecDeque<T>,
    limit: usize,
}

impl<T> BoundedWindow<T> {
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(limit.min(PREALLOCATED_SAMPLES)),
            limit,
        }
    }

    pub fn push(&mut self, element: T) {
        push_bounded(&mut self.items, element, self.limit);
    }

    /// Changes the capacity, evicting the oldest samples when shrinking.
    pub fn set_limit(&mut self, limit: usize) {
        self.limit = limit;
        while self.items.len() > limit {
            self.items.pop_front();
        }
    }

    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.limit
    }

    #[must_use]
    pub fn latest(&self) -> Option<&T> {
        self.items.back()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        self.items.iter()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T: Clone> BoundedWindow<T> {
    /// Copies the retained samples, oldest first.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.items.iter().cloned().collect()
    }
}

impl<T> Extend<T> for BoundedWindow<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.push(element);
        }
    }
}
