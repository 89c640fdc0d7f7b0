//! Process-wide scroll position publisher.
//!
//! The page installs a single document scroll listener and fans every offset
//! out to the subscribers registered here (navigation bar, hero parallax).
//! Subscribers hold a [`FeedSubscription`] and release it when their
//! component is torn down.

use tracing::trace;

/// Something the document reported about the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportEvent {
    /// Vertical scroll offset in CSS pixels.
    Scrolled(f64),
    /// The viewport changed size; cached measurements are stale.
    Resized,
}

/// Handle identifying one registered subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedSubscription(u64);

type Subscriber = Box<dyn FnMut(ViewportEvent)>;

#[derive(Default)]
pub struct ScrollFeed {
    offset: f64,
    next_id: u64,
    subscribers: Vec<(FeedSubscription, Subscriber)>,
}

impl ScrollFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last published scroll offset.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Register a callback invoked once per published event.
    pub fn subscribe(&mut self, callback: impl FnMut(ViewportEvent) + 'static) -> FeedSubscription {
        let handle = FeedSubscription(self.next_id);
        self.next_id += 1;
        self.subscribers.push((handle, Box::new(callback)));
        trace!(subscription = handle.0, "scroll feed subscriber added");
        handle
    }

    /// Remove a subscriber. Unknown handles are ignored.
    pub fn unsubscribe(&mut self, handle: FeedSubscription) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(id, _)| *id != handle);
        before != self.subscribers.len()
    }

    /// Deliver an event to every subscriber exactly once.
    pub fn publish(&mut self, event: ViewportEvent) {
        if let ViewportEvent::Scrolled(offset) = event {
            // Non-finite offsets would poison every downstream computation.
            if !offset.is_finite() {
                return;
            }
            self.offset = offset;
        }
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(event);
        }
    }
}

impl std::fmt::Debug for ScrollFeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollFeed")
            .field("offset", &self.offset)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_every_subscriber_sees_each_event_once() {
        let mut feed = ScrollFeed::new();
        let seen_a = Rc::new(RefCell::new(Vec::new()));
        let seen_b = Rc::new(RefCell::new(Vec::new()));
        let a = seen_a.clone();
        let b = seen_b.clone();
        feed.subscribe(move |e| a.borrow_mut().push(e));
        feed.subscribe(move |e| b.borrow_mut().push(e));

        feed.publish(ViewportEvent::Scrolled(120.0));
        feed.publish(ViewportEvent::Resized);

        let expected = vec![ViewportEvent::Scrolled(120.0), ViewportEvent::Resized];
        assert_eq!(*seen_a.borrow(), expected);
        assert_eq!(*seen_b.borrow(), expected);
        assert_eq!(feed.offset(), 120.0);
    }

    #[test]
    fn test_unsubscribed_callbacks_stop_receiving() {
        let mut feed = ScrollFeed::new();
        let count = Rc::new(RefCell::new(0));
        let c = count.clone();
        let handle = feed.subscribe(move |_| *c.borrow_mut() += 1);

        feed.publish(ViewportEvent::Scrolled(10.0));
        assert!(feed.unsubscribe(handle));
        assert!(!feed.unsubscribe(handle));
        feed.publish(ViewportEvent::Scrolled(20.0));

        assert_eq!(*count.borrow(), 1);
        assert_eq!(feed.subscriber_count(), 0);
    }

    #[test]
    fn test_non_finite_offsets_are_dropped() {
        let mut feed = ScrollFeed::new();
        feed.publish(ViewportEvent::Scrolled(40.0));
        feed.publish(ViewportEvent::Scrolled(f64::NAN));
        assert_eq!(feed.offset(), 40.0);
    }
}
