//! End-to-end tests for the one-shot `show` command.

use assert_cmd::Command;
use chrono::{TimeDelta, Utc};
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

use tripboard_types::{DestinationId, Point, PointId, PointKind};

fn point(kind: PointKind, destination: &str, offset_hours: i64, price: u32) -> Point {
    let date_from = Utc::now() + TimeDelta::hours(offset_hours);
    Point {
        id: PointId::new(),
        kind,
        destination: DestinationId::new(destination),
        date_from,
        date_to: date_from + TimeDelta::hours(2),
        base_price: price,
        offers: Vec::new(),
        is_favorite: false,
    }
}

fn write_points(dir: &Path, points: &[Point]) -> std::path::PathBuf {
    let path = dir.join("points.json");
    std::fs::write(&path, serde_json::to_string_pretty(points).unwrap()).unwrap();
    path
}

fn tripboard() -> Command {
    let mut cmd = Command::cargo_bin("tripboard").unwrap();
    cmd.env_remove("TRIPBOARD_CONFIG");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let assert = cmd.assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

fn appears_in_order(haystack: &str, needles: &[&str]) -> bool {
    let mut pos = 0;
    for needle in needles {
        match haystack[pos..].find(needle) {
            Some(found) => pos += found + needle.len(),
            None => return false,
        }
    }
    true
}

#[test]
fn lists_points_in_day_order_by_default() {
    let temp = TempDir::new().unwrap();
    let points = vec![
        point(PointKind::Restaurant, "Amsterdam", 30, 180),
        point(PointKind::Flight, "Geneva", -72, 600),
    ];
    let file = write_points(temp.path(), &points);

    let out = stdout_of(tripboard().arg("show").arg("--points").arg(&file));

    assert!(out.contains("[Day]"), "sort bar must mark Day: {}", out);
    assert!(
        appears_in_order(&out, &["Flight Geneva", "Restaurant Amsterdam"]),
        "day order puts the earlier point first:\n{}",
        out
    );
}

#[test]
fn price_sort_puts_most_expensive_first() {
    let temp = TempDir::new().unwrap();
    let points = vec![
        point(PointKind::Bus, "Chamonix", 5, 40),
        point(PointKind::Flight, "Geneva", 10, 600),
    ];
    let file = write_points(temp.path(), &points);

    let out = stdout_of(
        tripboard()
            .arg("show")
            .arg("--points")
            .arg(&file)
            .args(["--sort", "price"]),
    );

    assert!(out.contains("[Price]"));
    assert!(appears_in_order(&out, &["Flight Geneva", "Bus Chamonix"]));
}

#[test]
fn unknown_sort_tag_falls_back_to_day() {
    let temp = TempDir::new().unwrap();
    let file = write_points(temp.path(), &[point(PointKind::Taxi, "Amsterdam", 1, 35)]);

    let out = stdout_of(
        tripboard()
            .arg("show")
            .arg("--points")
            .arg(&file)
            .args(["--sort", "distance"]),
    );

    assert!(out.contains("[Day]"), "unknown tags never fail:\n{}", out);
}

#[test]
fn empty_filter_result_prints_the_keyed_plug() {
    let temp = TempDir::new().unwrap();
    let file = write_points(
        temp.path(),
        &[point(PointKind::Flight, "Geneva", -72, 600)],
    );

    tripboard()
        .arg("show")
        .arg("--points")
        .arg(&file)
        .args(["--filter", "future"])
        .assert()
        .success()
        .stdout(predicate::str::contains("There are no future events now"));
}

#[test]
fn sample_board_renders_without_a_points_file() {
    tripboard()
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sort:"));
}

#[test]
fn missing_points_file_is_a_readable_error() {
    tripboard()
        .arg("show")
        .args(["--points", "definitely-not-here.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("read points file"));
}

#[test]
fn invalid_interval_in_points_file_is_rejected() {
    let temp = TempDir::new().unwrap();
    let mut broken = point(PointKind::Drive, "Chamonix", 4, 90);
    std::mem::swap(&mut broken.date_from, &mut broken.date_to);
    let file = write_points(temp.path(), &[broken]);

    tripboard()
        .arg("show")
        .arg("--points")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid point"));
}

#[test]
fn offers_sort_orders_the_fixture_board_by_selection_count() {
    let temp = TempDir::new().unwrap();
    let file = write_points(temp.path(), &tripboard_testing::fixtures::sample_points());

    let out = stdout_of(
        tripboard()
            .arg("show")
            .arg("--points")
            .arg(&file)
            .args(["--sort", "offers"]),
    );

    assert!(out.contains("[Offers]"));
    assert!(appears_in_order(
        &out,
        &["Bus Chamonix", "Flight Geneva", "Sightseeing Chamonix"]
    ));
}

#[test]
fn config_file_supplies_default_sort() {
    let temp = TempDir::new().unwrap();
    let points = vec![
        point(PointKind::Bus, "Chamonix", 5, 40),
        point(PointKind::Flight, "Geneva", 10, 600),
    ];
    let file = write_points(temp.path(), &points);

    let config_path = temp.path().join("tripboard.toml");
    std::fs::write(&config_path, "[board]\ndefault_sort = \"price\"\n").unwrap();

    let out = stdout_of(
        tripboard()
            .arg("show")
            .arg("--config")
            .arg(&config_path)
            .arg("--points")
            .arg(&file),
    );

    assert!(out.contains("[Price]"));
    assert!(appears_in_order(&out, &["Flight Geneva", "Bus Chamonix"]));
}
