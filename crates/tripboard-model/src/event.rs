use tripboard_types::{FilterKind, Point, PointId, UpdateScope};

/// What changed, carried alongside the reconciliation scope.
///
/// `Patch` notifications always carry `Change::Point`; consumers patch that
/// one item in place. For `Minor`/`Major` the change is informational — the
/// consumer re-reads the authoritative collection either way.
#[derive(Debug, Clone)]
pub enum Change {
    Point(Point),
    Removed(PointId),
    Filter(FilterKind),
    /// Collection-level transition (seed finished, load failed)
    Reloaded,
}

/// Notification published to every model observer
#[derive(Debug, Clone)]
pub struct ModelEvent {
    pub scope: UpdateScope,
    pub change: Change,
}

impl ModelEvent {
    pub fn new(scope: UpdateScope, change: Change) -> Self {
        Self { scope, change }
    }
}
