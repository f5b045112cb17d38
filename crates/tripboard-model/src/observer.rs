use std::sync::mpsc::{channel, Receiver, Sender};

/// Publish/subscribe fan-out for model notifications.
///
/// Each subscriber gets its own channel; events are cloned to every live
/// receiver in registration order. Dropping a receiver deregisters it — the
/// dead sender is pruned on the next publish.
#[derive(Debug)]
pub struct ObserverSet<T: Clone> {
    subscribers: Vec<Sender<T>>,
}

impl<T: Clone> Default for ObserverSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> ObserverSet<T> {
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self) -> Receiver<T> {
        let (tx, rx) = channel();
        self.subscribers.push(tx);
        rx
    }

    pub fn publish(&mut self, event: T) {
        self.subscribers
            .retain(|subscriber| subscriber.send(event.clone()).is_ok());
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivers_to_every_subscriber_in_order() {
        let mut observers = ObserverSet::new();
        let first = observers.subscribe();
        let second = observers.subscribe();

        observers.publish(1);
        observers.publish(2);

        assert_eq!(first.try_iter().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(second.try_iter().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn prunes_dropped_receivers_on_publish() {
        let mut observers = ObserverSet::new();
        let kept = observers.subscribe();
        let dropped = observers.subscribe();
        drop(dropped);

        observers.publish("tick");
        assert_eq!(observers.len(), 1);
        assert_eq!(kept.try_iter().count(), 1);
    }
}
