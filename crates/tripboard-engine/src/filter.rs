use chrono::{DateTime, Utc};
use tripboard_types::{FilterKind, Point};

/// Predicate for a single point under the given filter selection
pub fn matches(filter: FilterKind, point: &Point, now: DateTime<Utc>) -> bool {
    match filter {
        FilterKind::Everything => true,
        FilterKind::Past => point.is_past(now),
        FilterKind::Present => point.is_present(now),
        FilterKind::Future => point.is_future(now),
    }
}

/// Filtered copy of the working sequence, input order preserved
pub fn apply(filter: FilterKind, points: &[Point], now: DateTime<Utc>) -> Vec<Point> {
    points
        .iter()
        .filter(|point| matches(filter, point, now))
        .cloned()
        .collect()
}
