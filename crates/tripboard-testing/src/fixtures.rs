//! Deterministic sample data.
//!
//! All fixture points are placed relative to [`fixed_now`] so that
//! Past/Present/Future classification is reproducible; ids derive from the
//! builder tag, never from entropy.

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use once_cell::sync::Lazy;
use uuid::Uuid;

use tripboard_types::{DestinationId, OfferId, OfferSelection, Point, PointId, PointKind};

static FIXED_NOW: Lazy<DateTime<Utc>> =
    Lazy::new(|| Utc.with_ymd_and_hms(2024, 3, 18, 12, 0, 0).unwrap());

/// The frozen clock every fixture is placed against
pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

/// Builder over a fully-populated default point.
///
/// The tag seeds the id, so two builders with the same tag address the same
/// point — convenient for update fixtures.
pub struct PointBuilder {
    point: Point,
}

impl PointBuilder {
    pub fn new(tag: u32) -> Self {
        let date_from = fixed_now() + TimeDelta::hours(1);
        Self {
            point: Point {
                id: PointId::from_uuid(Uuid::from_u128(tag as u128)),
                kind: PointKind::Taxi,
                destination: DestinationId::new("Amsterdam"),
                date_from,
                date_to: date_from + TimeDelta::hours(1),
                base_price: 100,
                offers: Vec::new(),
                is_favorite: false,
            },
        }
    }

    pub fn kind(mut self, kind: PointKind) -> Self {
        self.point.kind = kind;
        self
    }

    pub fn destination(mut self, name: &str) -> Self {
        self.point.destination = DestinationId::new(name);
        self
    }

    /// Start offset from [`fixed_now`], in hours
    pub fn starting_in(mut self, hours: i64) -> Self {
        let length = self.point.duration();
        self.point.date_from = fixed_now() + TimeDelta::hours(hours);
        self.point.date_to = self.point.date_from + length;
        self
    }

    pub fn lasting_hours(mut self, hours: i64) -> Self {
        self.point.date_to = self.point.date_from + TimeDelta::hours(hours);
        self
    }

    pub fn price(mut self, price: u32) -> Self {
        self.point.base_price = price;
        self
    }

    pub fn with_offers(mut self, count: usize) -> Self {
        self.point.offers = (0..count)
            .map(|n| OfferSelection {
                id: OfferId::new(format!("offer-{}", n)),
                price: 15,
            })
            .collect();
        self
    }

    pub fn favorite(mut self) -> Self {
        self.point.is_favorite = true;
        self
    }

    pub fn build(self) -> Point {
        self.point
    }
}

/// Canonical five-point board: two past, one in progress, two upcoming.
///
/// Day order is p1..p5; prices, durations and offer counts are all distinct
/// so every sort selection produces a different, predictable order.
pub fn sample_points() -> Vec<Point> {
    vec![
        PointBuilder::new(1)
            .kind(PointKind::Flight)
            .destination("Geneva")
            .starting_in(-72)
            .lasting_hours(3)
            .price(600)
            .with_offers(2)
            .build(),
        PointBuilder::new(2)
            .kind(PointKind::CheckIn)
            .destination("Geneva")
            .starting_in(-48)
            .lasting_hours(20)
            .price(250)
            .build(),
        PointBuilder::new(3)
            .kind(PointKind::Sightseeing)
            .destination("Chamonix")
            .starting_in(-2)
            .lasting_hours(6)
            .price(40)
            .with_offers(1)
            .favorite()
            .build(),
        PointBuilder::new(4)
            .kind(PointKind::Bus)
            .destination("Chamonix")
            .starting_in(5)
            .lasting_hours(2)
            .price(110)
            .with_offers(3)
            .build(),
        PointBuilder::new(5)
            .kind(PointKind::Restaurant)
            .destination("Amsterdam")
            .starting_in(30)
            .lasting_hours(1)
            .price(180)
            .build(),
    ]
}

/// Ids in iteration order
pub fn ids(points: &[Point]) -> Vec<PointId> {
    points.iter().map(|point| point.id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_points_cover_every_filter_bucket() {
        let now = fixed_now();
        let points = sample_points();
        assert!(points.iter().any(|point| point.is_past(now)));
        assert!(points.iter().any(|point| point.is_present(now)));
        assert!(points.iter().any(|point| point.is_future(now)));
    }

    #[test]
    fn builder_tags_are_stable_ids() {
        let first = PointBuilder::new(7).build();
        let second = PointBuilder::new(7).price(999).build();
        assert_eq!(first.id, second.id);
    }

    #[test]
    fn sample_points_are_valid_and_day_ordered() {
        let points = sample_points();
        for point in &points {
            point.validate().unwrap();
        }
        for pair in points.windows(2) {
            assert!(pair[0].date_from <= pair[1].date_from);
        }
    }
}
