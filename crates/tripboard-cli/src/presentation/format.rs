use chrono::TimeDelta;
use tripboard_types::Point;

/// Compact duration in the board notation: `02D 04H 30M`, `04H 30M`, `30M`
pub fn duration_label(duration: TimeDelta) -> String {
    let minutes = duration.num_minutes().max(0);
    let days = minutes / (24 * 60);
    let hours = minutes % (24 * 60) / 60;
    let mins = minutes % 60;

    if days > 0 {
        format!("{:02}D {:02}H {:02}M", days, hours, mins)
    } else if hours > 0 {
        format!("{:02}H {:02}M", hours, mins)
    } else {
        format!("{:02}M", mins)
    }
}

pub fn event_label(point: &Point) -> String {
    format!("{} {}", point.kind.label(), point.destination.as_str())
}

pub fn day_label(point: &Point) -> String {
    point.date_from.format("%d %b %H:%M").to_string()
}

pub fn price_label(point: &Point) -> String {
    format!("\u{20ac} {}", point.total_price())
}
