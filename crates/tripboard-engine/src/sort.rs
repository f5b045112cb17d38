use std::cmp::Ordering;

use tripboard_types::{Point, SortKind};

/// Total comparator for the given sort selection.
///
/// `Day` and `Event` order by start timestamp ascending; `Time`, `Price` and
/// `Offers` put the largest key first. Equal keys compare `Equal`, so a
/// stable sort preserves the input order of ties.
pub fn compare(sort: SortKind, a: &Point, b: &Point) -> Ordering {
    match sort {
        SortKind::Day | SortKind::Event => a.date_from.cmp(&b.date_from),
        SortKind::Time => b.duration().cmp(&a.duration()),
        SortKind::Price => b.base_price.cmp(&a.base_price),
        SortKind::Offers => b.offers.len().cmp(&a.offers.len()),
    }
}

/// Stable in-place sort under the given selection
pub fn sort_points(points: &mut [Point], sort: SortKind) {
    points.sort_by(|a, b| compare(sort, a, b));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone, Utc};
    use tripboard_types::{DestinationId, OfferId, OfferSelection, PointId, PointKind};

    fn point(name: &str, start_hour: u32, hours: i64, price: u32, offers: usize) -> Point {
        let date_from = Utc.with_ymd_and_hms(2024, 3, 18, start_hour, 0, 0).unwrap();
        Point {
            id: PointId::new(),
            kind: PointKind::Taxi,
            destination: DestinationId::new(name),
            date_from,
            date_to: date_from + TimeDelta::hours(hours),
            base_price: price,
            offers: (0..offers)
                .map(|n| OfferSelection {
                    id: OfferId::new(format!("offer-{}", n)),
                    price: 10,
                })
                .collect(),
            is_favorite: false,
        }
    }

    fn names(points: &[Point]) -> Vec<&str> {
        points
            .iter()
            .map(|point| point.destination.as_str())
            .collect()
    }

    #[test]
    fn day_orders_by_start_ascending() {
        let mut points = vec![
            point("late", 14, 1, 100, 0),
            point("early", 8, 1, 100, 0),
            point("middle", 11, 1, 100, 0),
        ];
        sort_points(&mut points, SortKind::Day);
        assert_eq!(names(&points), vec!["early", "middle", "late"]);
    }

    #[test]
    fn event_matches_day_ordering() {
        let mut by_day = vec![point("b", 14, 1, 0, 0), point("a", 8, 1, 0, 0)];
        let mut by_event = by_day.clone();
        sort_points(&mut by_day, SortKind::Day);
        sort_points(&mut by_event, SortKind::Event);
        assert_eq!(names(&by_day), names(&by_event));
    }

    #[test]
    fn time_puts_longest_first() {
        let mut points = vec![
            point("short", 8, 1, 100, 0),
            point("long", 9, 8, 100, 0),
            point("medium", 10, 3, 100, 0),
        ];
        sort_points(&mut points, SortKind::Time);
        assert_eq!(names(&points), vec!["long", "medium", "short"]);
    }

    #[test]
    fn price_puts_most_expensive_first() {
        let mut points = vec![
            point("cheap", 8, 1, 20, 0),
            point("pricey", 9, 1, 900, 0),
            point("mid", 10, 1, 200, 0),
        ];
        sort_points(&mut points, SortKind::Price);
        assert_eq!(names(&points), vec!["pricey", "mid", "cheap"]);
    }

    #[test]
    fn offers_orders_by_selection_count() {
        let mut points = vec![
            point("none", 8, 1, 100, 0),
            point("three", 9, 1, 100, 3),
            point("one", 10, 1, 100, 1),
        ];
        sort_points(&mut points, SortKind::Offers);
        assert_eq!(names(&points), vec!["three", "one", "none"]);
    }

    #[test]
    fn equal_keys_preserve_input_order() {
        let mut points = vec![
            point("first", 8, 2, 150, 1),
            point("second", 9, 2, 150, 1),
            point("third", 10, 2, 150, 1),
        ];
        for sort in [SortKind::Time, SortKind::Price, SortKind::Offers] {
            sort_points(&mut points, sort);
            assert_eq!(
                names(&points),
                vec!["first", "second", "third"],
                "{:?} must be stable",
                sort
            );
        }
    }

    #[test]
    fn sorting_never_changes_membership() {
        let original = vec![
            point("a", 8, 1, 10, 0),
            point("b", 9, 5, 20, 2),
            point("c", 10, 2, 30, 1),
        ];
        for sort in SortKind::ALL {
            let mut sorted = original.clone();
            sort_points(&mut sorted, sort);
            assert_eq!(sorted.len(), original.len());
            for point in &original {
                assert!(sorted.iter().any(|candidate| candidate.id == point.id));
            }
        }
    }
}
