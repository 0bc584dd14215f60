//! Integration tests for the dashboard pipeline.
//!
//! Runs a roster through time computation and timeline rendering at fixed
//! instants and checks what a viewer in New York would see.

use chrono::{DateTime, Utc};
use chrono_tz::America;
use worldclock_core::{
    catalog, compute_times, hour_labels, render_rows, search, CellClass, Config, RosterEntry,
    Status, TimelineMode, ViewerZone,
};

fn instant(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

fn new_york_viewer() -> ViewerZone {
    ViewerZone::from(America::New_York)
}

fn alice_and_bob() -> Vec<RosterEntry> {
    vec![
        RosterEntry::new("Alice", "America/New_York").with_work_hours(9, 17),
        RosterEntry::new("Bob", "Europe/London").with_work_hours(9, 17),
    ]
}

#[test]
fn test_weekday_afternoon_in_london() {
    // Wednesday, 10:00 in New York and 15:00 in London
    let now = instant("2024-01-17T15:00:00Z");
    let computed = compute_times(&alice_and_bob(), &new_york_viewer(), now);

    assert_eq!(computed.len(), 2);

    let alice = &computed[0];
    assert!(alice.is_working_time);
    assert!(!alice.is_weekend);
    assert_eq!(alice.offset_label, "same");
    assert_eq!(alice.status(), Status::Working);

    let bob = &computed[1];
    assert!(bob.is_working_time);
    assert!(!bob.is_weekend);
    assert_eq!(bob.offset_label, "+5h");
    assert_eq!(bob.offset_seconds, 5 * 3600);
}

#[test]
fn test_tokyo_is_asleep_and_on_the_next_day() {
    let now = instant("2024-01-17T15:00:00Z");
    let roster = vec![RosterEntry::new("Charlie", "Asia/Tokyo").with_work_hours(9, 17)];
    let computed = compute_times(&roster, &new_york_viewer(), now);

    let charlie = &computed[0];
    assert_eq!(charlie.offset_label, "+14h");
    assert!(!charlie.is_working_time);
    assert_eq!(charlie.local_time.format("%a %H:%M").to_string(), "Thu 00:00");
}

#[test]
fn test_saturday_is_weekend_regardless_of_hours() {
    let now = instant("2024-01-20T15:00:00Z");
    let computed = compute_times(&alice_and_bob(), &new_york_viewer(), now);

    for ct in &computed {
        assert!(ct.is_weekend);
        assert!(!ct.is_working_time);
        assert_eq!(ct.status(), Status::Weekend);
    }
}

#[test]
fn test_invalid_entry_is_dropped_and_order_kept() {
    let now = instant("2024-01-17T15:00:00Z");
    let roster = vec![
        RosterEntry::new("Alice", "America/New_York"),
        RosterEntry::new("Ghost", "Mars/Olympus_Mons"),
        RosterEntry::new("Bob", "Europe/London"),
    ];
    let computed = compute_times(&roster, &new_york_viewer(), now);

    let names: Vec<&str> = computed.iter().map(|c| c.entry.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob"]);
}

#[test]
fn test_shared_timeline_shifts_london_by_five_hours() {
    let now = instant("2024-01-17T15:00:00Z");
    let viewer = new_york_viewer();
    let computed = compute_times(&alice_and_bob(), &viewer, now);
    let viewer_now = viewer.local_time(now);

    let rows = render_rows(&computed, 24, TimelineMode::Shared, &viewer_now);
    let alice = &rows[0].bar;
    let bob = &rows[1].bar;

    // 10:00 on the viewer's axis
    assert_eq!(alice.marker_index(), Some(10));
    assert_eq!(bob.marker_index(), Some(10));

    // Alice works cells 9..17, Bob works cells 4..12 on the New York axis
    assert_eq!(alice.cells[9].class, CellClass::Work);
    assert_eq!(alice.cells[8].class, CellClass::AwakeOff);
    assert_eq!(bob.cells[4].class, CellClass::Work);
    assert_eq!(bob.cells[11].class, CellClass::Work);
    assert_eq!(bob.cells[12].class, CellClass::AwakeOff);
    assert_eq!(bob.cells[1].class, CellClass::Sleep);
}

#[test]
fn test_individual_timeline_uses_own_clock() {
    let now = instant("2024-01-17T15:00:00Z");
    let viewer = new_york_viewer();
    let computed = compute_times(&alice_and_bob(), &viewer, now);
    let viewer_now = viewer.local_time(now);

    let rows = render_rows(&computed, 48, TimelineMode::Individual, &viewer_now);
    let alice: Vec<CellClass> = rows[0].bar.classes().collect();
    let bob: Vec<CellClass> = rows[1].bar.classes().collect();

    assert_eq!(alice, bob);
    assert_eq!(rows[1].bar.marker_index(), Some(20));
    assert_eq!(rows[1].offset_label, "+5h");
}

#[test]
fn test_weekend_work_hours_are_marked() {
    let now = instant("2024-01-20T15:00:00Z");
    let viewer = new_york_viewer();
    let computed = compute_times(&alice_and_bob(), &viewer, now);
    let viewer_now = viewer.local_time(now);

    let rows = render_rows(&computed, 24, TimelineMode::Individual, &viewer_now);
    let classes: Vec<CellClass> = rows[0].bar.classes().collect();

    assert_eq!(classes[9], CellClass::WeekendWork);
    assert!(!classes.contains(&CellClass::Work));
}

#[test]
fn test_axis_matches_bar_width() {
    for width in [24, 30, 48] {
        assert_eq!(hour_labels(width, TimelineMode::Shared).chars().count(), width + 2);
        assert_eq!(hour_labels(width, TimelineMode::Individual).chars().count(), width + 2);
    }
}

#[test]
fn test_search_then_place_colleague() {
    let now = instant("2024-01-17T15:00:00Z");
    let results = search("tokyo", catalog::all(), now);
    let top = results.first().unwrap();
    assert_eq!(top.city.city, "Tokyo");

    let mut cfg = Config::default();
    let index = cfg.add_from_search("Dana", &top.city, "tokyo").unwrap();
    assert_eq!(cfg.colleagues[index].name, "Dana (Tokyo)");

    let computed = compute_times(&cfg.colleagues, &new_york_viewer(), now);
    assert_eq!(computed.len(), 4);
    assert_eq!(computed[3].offset_label, "+14h");
}
