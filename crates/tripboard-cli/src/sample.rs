use chrono::{TimeDelta, Utc};
use tripboard_types::{
    DestinationId, OfferId, OfferSelection, Point, PointId, PointKind,
};

/// Built-in demo board used when no points file is given.
///
/// Offsets are relative to the current time so every filter bucket has
/// content whenever the demo runs.
pub fn sample_board() -> Vec<Point> {
    let now = Utc::now();
    let mut board = vec![
        point(
            PointKind::Flight,
            "Geneva",
            now - TimeDelta::hours(72),
            TimeDelta::hours(3),
            600,
            &[("luggage", 30), ("meal", 15)],
        ),
        point(
            PointKind::CheckIn,
            "Geneva",
            now - TimeDelta::hours(48),
            TimeDelta::hours(20),
            250,
            &[],
        ),
        point(
            PointKind::Sightseeing,
            "Chamonix",
            now - TimeDelta::hours(2),
            TimeDelta::hours(6),
            40,
            &[("guide", 25)],
        ),
        point(
            PointKind::Bus,
            "Chamonix",
            now + TimeDelta::hours(5),
            TimeDelta::hours(2),
            110,
            &[("seat", 5), ("wifi", 3), ("coffee", 4)],
        ),
        point(
            PointKind::Restaurant,
            "Amsterdam",
            now + TimeDelta::hours(30),
            TimeDelta::hours(1),
            180,
            &[],
        ),
        point(
            PointKind::Taxi,
            "Amsterdam",
            now + TimeDelta::hours(54),
            TimeDelta::minutes(40),
            35,
            &[("comfort", 12)],
        ),
    ];
    board[2].is_favorite = true;
    board
}

/// Template for a point added from the board; `seq` cycles the catalogs
pub fn template_point(seq: usize) -> Point {
    let kinds = PointKind::ALL;
    let destinations = ["Rotterdam", "Geneva", "Chamonix", "Amsterdam"];
    let now = Utc::now();

    point(
        kinds[seq % kinds.len()],
        destinations[seq % destinations.len()],
        now + TimeDelta::hours(6 * (seq as i64 + 1)),
        TimeDelta::hours(2),
        80 + 20 * seq as u32,
        &[],
    )
}

fn point(
    kind: PointKind,
    destination: &str,
    date_from: chrono::DateTime<Utc>,
    length: TimeDelta,
    base_price: u32,
    offers: &[(&str, u32)],
) -> Point {
    Point {
        id: PointId::new(),
        kind,
        destination: DestinationId::new(destination),
        date_from,
        date_to: date_from + length,
        base_price,
        offers: offers
            .iter()
            .map(|(id, price)| OfferSelection {
                id: OfferId::new(*id),
                price: *price,
            })
            .collect(),
        is_favorite: false,
    }
}
