use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

type Callback<T> = Box<dyn FnMut(&T)>;

struct Inner<T> {
    value: T,
    next_id: u64,
    subscribers: Vec<(u64, Callback<T>)>,
    // Ids released while their callbacks were detached for notification.
    released_during_notify: Vec<u64>,
    notifying: bool,
    // A `set` landed while callbacks were running; another round is owed.
    pending: bool,
}

/// Shared single-value observable.
///
/// Clones share the same value. Subscribers are called once with the current
/// value on subscription and again after every change. Cells are
/// single-threaded: they live on the UI thread together with the binders that
/// read them.
pub struct ThemeCell<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for ThemeCell<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ThemeCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ThemeCell")
            .field("value", &inner.value)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}

impl<T: Clone + PartialEq + 'static> ThemeCell<T> {
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value,
                next_id: 0,
                subscribers: Vec::new(),
                released_during_notify: Vec::new(),
                notifying: false,
                pending: false,
            })),
        }
    }

    #[must_use]
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Stores `value` and notifies subscribers. Setting an equal value is a no-op.
    ///
    /// A `set` made from inside a subscriber is queued: the running
    /// notification finishes its round, then every subscriber is called
    /// again with the latest value.
    pub fn set(&self, value: T) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.value == value {
                return;
            }
            inner.value = value;
            if inner.notifying {
                inner.pending = true;
                return;
            }
            inner.notifying = true;
        }
        self.notify();
    }

    pub fn update(&self, f: impl FnOnce(&T) -> T) {
        let next = f(&self.inner.borrow().value);
        self.set(next);
    }

    /// Registers `callback`, invoking it immediately with the current value.
    ///
    /// The callback stays registered until the returned [`Subscription`] is
    /// dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, mut callback: impl FnMut(&T) + 'static) -> Subscription {
        let current = self.get();
        callback(&current);

        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.subscribers.push((id, Box::new(callback)));

        let weak: Weak<RefCell<Inner<T>>> = Rc::downgrade(&self.inner);
        Subscription {
            release: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    let mut inner = inner.borrow_mut();
                    let before = inner.subscribers.len();
                    inner.subscribers.retain(|(existing, _)| *existing != id);
                    if inner.subscribers.len() == before {
                        inner.released_during_notify.push(id);
                    }
                }
            })),
        }
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    fn notify(&self) {
        loop {
            // Callbacks run without holding the borrow so they may read the
            // cell, set it, or subscribe further.
            let (value, mut subscribers) = {
                let mut inner = self.inner.borrow_mut();
                inner.pending = false;
                (inner.value.clone(), std::mem::take(&mut inner.subscribers))
            };
            for (id, callback) in &mut subscribers {
                if self.inner.borrow().released_during_notify.contains(id) {
                    continue;
                }
                callback(&value);
            }

            let mut inner = self.inner.borrow_mut();
            let released = std::mem::take(&mut inner.released_during_notify);
            subscribers.retain(|(id, _)| !released.contains(id));
            subscribers.append(&mut inner.subscribers);
            inner.subscribers = subscribers;
            if !inner.pending {
                inner.notifying = false;
                return;
            }
        }
    }
}

/// Handle returned by [`ThemeCell::subscribe`]; dropping it unsubscribes.
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Unsubscribes now instead of at drop time.
    pub fn cancel(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}
