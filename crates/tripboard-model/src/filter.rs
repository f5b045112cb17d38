use std::sync::mpsc::Receiver;

use tracing::debug;
use tripboard_types::{FilterKind, UpdateScope};

use crate::event::{Change, ModelEvent};
use crate::observer::ObserverSet;

/// Holder of the active filter selection.
///
/// Same observer contract as [`crate::PointsModel`]; a filter switch is a
/// structural change for every consumer, so callers publish it as `Major`.
#[derive(Debug, Default)]
pub struct FilterModel {
    current: FilterKind,
    observers: ObserverSet<ModelEvent>,
}

impl FilterModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> FilterKind {
        self.current
    }

    pub fn subscribe(&mut self) -> Receiver<ModelEvent> {
        self.observers.subscribe()
    }

    /// Switch the active filter; no-op (and no notification) when unchanged
    pub fn set(&mut self, scope: UpdateScope, filter: FilterKind) {
        if self.current == filter {
            return;
        }
        self.current = filter;
        debug!(?filter, ?scope, "filter switched");
        self.observers
            .publish(ModelEvent::new(scope, Change::Filter(filter)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_everything() {
        assert_eq!(FilterModel::new().current(), FilterKind::Everything);
    }

    #[test]
    fn set_notifies_once_per_change() {
        let mut model = FilterModel::new();
        let events = model.subscribe();

        model.set(UpdateScope::Major, FilterKind::Future);
        model.set(UpdateScope::Major, FilterKind::Future);

        let received: Vec<_> = events.try_iter().collect();
        assert_eq!(received.len(), 1, "repeated selection must not notify");
        assert_eq!(received[0].scope, UpdateScope::Major);
        assert!(matches!(
            received[0].change,
            Change::Filter(FilterKind::Future)
        ));
        assert_eq!(model.current(), FilterKind::Future);
    }
}
