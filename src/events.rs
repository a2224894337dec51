//! In-process publish/subscribe used to keep views in sync after mutations.
//!
//! Transactions pages publish [`Topic::TransactionsChanged`] after every
//! create/update/delete; any mounted view showing derived transaction data
//! subscribes and re-runs its full fetch-and-aggregate cycle. The signal
//! carries no payload, is same-tab only, and is lost if nobody is
//! subscribed — views always fetch fresh data on mount anyway.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use yew::Callback;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Topic {
    TransactionsChanged,
}

struct Subscriber {
    id: usize,
    topic: Topic,
    callback: Callback<Topic>,
}

#[derive(Default)]
struct Registry {
    next_id: usize,
    subscribers: Vec<Subscriber>,
}

/// Cheaply cloneable; all clones share one subscriber registry.
#[derive(Clone, Default)]
pub struct EventBus {
    registry: Rc<RefCell<Registry>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus").finish_non_exhaustive()
    }
}

impl PartialEq for EventBus {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.registry, &other.registry)
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a callback for a topic. The subscription lasts as long as
    /// the returned guard is held; dropping it unsubscribes.
    pub fn subscribe(&self, topic: Topic, callback: Callback<Topic>) -> Subscription {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.subscribers.push(Subscriber { id, topic, callback });
        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Notifies every current subscriber of `topic`. No delivery
    /// confirmation and no ordering guarantee across rapid publishes.
    pub fn publish(&self, topic: Topic) {
        // Collect first so a callback may subscribe or drop without
        // holding the borrow.
        let callbacks: Vec<Callback<Topic>> = self
            .registry
            .borrow()
            .subscribers
            .iter()
            .filter(|s| s.topic == topic)
            .map(|s| s.callback.clone())
            .collect();
        for callback in callbacks {
            callback.emit(topic);
        }
    }
}

pub struct Subscription {
    id: usize,
    registry: Weak<RefCell<Registry>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().subscribers.retain(|s| s.id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counting_callback() -> (Callback<Topic>, Rc<Cell<u32>>) {
        let count = Rc::new(Cell::new(0));
        let seen = count.clone();
        let callback = Callback::from(move |_| seen.set(seen.get() + 1));
        (callback, count)
    }

    #[test]
    fn subscriber_receives_published_topic() {
        let bus = EventBus::new();
        let (callback, count) = counting_callback();
        let _sub = bus.subscribe(Topic::TransactionsChanged, callback);

        bus.publish(Topic::TransactionsChanged);
        bus.publish(Topic::TransactionsChanged);
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn dropped_subscription_stops_delivery() {
        let bus = EventBus::new();
        let (callback, count) = counting_callback();
        let sub = bus.subscribe(Topic::TransactionsChanged, callback);

        bus.publish(Topic::TransactionsChanged);
        drop(sub);
        bus.publish(Topic::TransactionsChanged);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn publish_without_subscribers_is_lost() {
        let bus = EventBus::new();
        bus.publish(Topic::TransactionsChanged);

        // A late subscriber gets no catch-up.
        let (callback, count) = counting_callback();
        let _sub = bus.subscribe(Topic::TransactionsChanged, callback);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn clones_share_one_registry() {
        let bus = EventBus::new();
        let other = bus.clone();
        let (callback, count) = counting_callback();
        let _sub = bus.subscribe(Topic::TransactionsChanged, callback);

        other.publish(Topic::TransactionsChanged);
        assert_eq!(count.get(), 1);
        assert_eq!(bus, other);
    }

    #[test]
    fn every_subscriber_is_notified() {
        let bus = EventBus::new();
        let (first, first_count) = counting_callback();
        let (second, second_count) = counting_callback();
        let _a = bus.subscribe(Topic::TransactionsChanged, first);
        let _b = bus.subscribe(Topic::TransactionsChanged, second);

        bus.publish(Topic::TransactionsChanged);
        assert_eq!(first_count.get(), 1);
        assert_eq!(second_count.get(), 1);
    }
}
