//! Fire-and-forget notifications to zero or more observers.

use std::fmt;

/// Handle returned by [`Observers::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer<T> = Box<dyn FnMut(&T)>;

/// An ordered list of observers for events of type `T`.
///
/// Observers are called in subscription order.
///
/// # Example
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use switchyard::track::Observers;
///
/// let seen = Rc::new(Cell::new(0));
/// let mut hovered = Observers::new();
/// let counter = Rc::clone(&seen);
/// let id = hovered.subscribe(move |on: &bool| {
///     if *on {
///         counter.set(counter.get() + 1);
///     }
/// });
///
/// hovered.emit(&true);
/// hovered.unsubscribe(id);
/// hovered.emit(&true);
/// assert_eq!(seen.get(), 1);
/// ```
pub struct Observers<T> {
    next_id: u64,
    observers: Vec<(SubscriptionId, Observer<T>)>,
}

impl<T> Observers<T> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            observers: Vec::new(),
        }
    }

    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&T) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns `false` if it was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    pub fn emit(&mut self, event: &T) {
        for (_, observer) in &mut self.observers {
            observer(event);
        }
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl<T> Default for Observers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Observers<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("len", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn emit_reaches_observers_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut observers = Observers::new();

        let first = Rc::clone(&log);
        observers.subscribe(move |v: &i32| first.borrow_mut().push(("first", *v)));
        let second = Rc::clone(&log);
        observers.subscribe(move |v: &i32| second.borrow_mut().push(("second", *v)));

        observers.emit(&7);

        assert_eq!(*log.borrow(), vec![("first", 7), ("second", 7)]);
    }

    #[test]
    fn emit_without_observers_is_harmless() {
        let mut observers: Observers<()> = Observers::new();
        observers.emit(&());
        assert!(observers.is_empty());
    }

    #[test]
    fn unsubscribe_removes_only_that_observer() {
        let mut observers: Observers<()> = Observers::new();
        let a = observers.subscribe(|_| {});
        let b = observers.subscribe(|_| {});

        assert!(observers.unsubscribe(a));
        assert!(!observers.unsubscribe(a));
        assert_eq!(observers.len(), 1);
        assert!(observers.unsubscribe(b));
        assert!(observers.is_empty());
    }
}
