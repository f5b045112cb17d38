use owo_colors::OwoColorize;

use tripboard_types::{FilterKind, PlugKind, Point, SortKind};

use crate::presentation::format;

pub fn render_guidance() {
    println!("tripboard - Itinerary board for the terminal\n");
    println!("Quick commands:");
    println!("  tripboard show                    # Print the board");
    println!("  tripboard show --sort price       # Most expensive first");
    println!("  tripboard show --filter future    # Upcoming points only");
    println!("  tripboard board                   # Open the interactive board\n");
    println!("For more commands:");
    println!("  tripboard --help");
}

/// One-shot projection of the derived list.
///
/// The console is append-only, so this renders the already-derived visible
/// sequence top to bottom; an empty sequence prints the plug keyed by the
/// active filter instead of the sort bar and table.
pub fn render_list(visible: &[Point], sort: SortKind, filter: FilterKind, color: bool) {
    if visible.is_empty() {
        println!("{}", PlugKind::Empty(filter).message());
        return;
    }

    render_sort_bar(sort, color);
    println!(
        "{:<14} {:<26} {:<12} {:>7}  {:<7} FAV",
        "DAY", "EVENT", "DURATION", "PRICE", "OFFERS"
    );
    println!("{}", "-".repeat(80));

    for point in visible {
        let line = format!(
            "{:<14} {:<26} {:<12} {:>7}  {:<7} {}",
            format::day_label(point),
            format::event_label(point),
            format::duration_label(point.duration()),
            format::price_label(point),
            point.offers.len(),
            if point.is_favorite { "\u{2605}" } else { "" }
        );

        if color && point.is_favorite {
            println!("{}", line.yellow());
        } else {
            println!("{}", line);
        }
    }
}

fn render_sort_bar(active: SortKind, color: bool) {
    let labels: Vec<String> = SortKind::ALL
        .iter()
        .map(|sort| {
            if *sort == active {
                let label = format!("[{}]", sort.label());
                if color {
                    label.cyan().bold().to_string()
                } else {
                    label
                }
            } else {
                sort.label().to_string()
            }
        })
        .collect();

    println!("Sort: {}", labels.join("  "));
}
