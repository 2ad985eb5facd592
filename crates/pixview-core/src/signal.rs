//! Single-threaded observable channel.
//!
//! All state in the viewer is mutated synchronously from the host's event
//! loop, so subscribers are plain `FnMut` closures invoked in subscription
//! order. Nothing here is `Send`.

/// Handle returned by [`Signal::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback<T> = Box<dyn FnMut(&T)>;

pub struct Signal<T> {
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Callback<T>)>,
}

impl<T> Default for Signal<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            subscribers: Vec::new(),
        }
    }
}

impl<T> Signal<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    pub fn emit(&mut self, value: &T) {
        for (_, callback) in &mut self.subscribers {
            callback(value);
        }
    }

    pub fn clear(&mut self) {
        self.subscribers.clear();
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl<T> std::fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn test_emit_reaches_all_subscribers_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut signal = Signal::new();

        let a = Rc::clone(&seen);
        signal.subscribe(move |v: &i32| a.borrow_mut().push(("a", *v)));
        let b = Rc::clone(&seen);
        signal.subscribe(move |v: &i32| b.borrow_mut().push(("b", *v)));

        signal.emit(&7);
        assert_eq!(*seen.borrow(), vec![("a", 7), ("b", 7)]);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let count = Rc::new(RefCell::new(0));
        let mut signal = Signal::new();
        let c = Rc::clone(&count);
        let id = signal.subscribe(move |_: &()| *c.borrow_mut() += 1);

        signal.emit(&());
        assert!(signal.unsubscribe(id));
        assert!(!signal.unsubscribe(id));
        signal.emit(&());

        assert_eq!(*count.borrow(), 1);
        assert_eq!(signal.subscriber_count(), 0);
    }
}
