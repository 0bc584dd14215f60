//! Property-based tests for the pure helpers.

use chrono::{DateTime, NaiveTime, TimeZone, Utc};
use proptest::prelude::*;
use worldclock_core::catalog;
use worldclock_core::clock::offset_label;
use worldclock_core::search::search;
use worldclock_core::timeline::{
    bar_width_for_terminal, in_range, marker_index, represented_hour, IDEAL_BAR_WIDTH,
    MIN_BAR_WIDTH,
};

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 17, 15, 0, 0).unwrap()
}

proptest! {
    #[test]
    fn prop_in_range_matches_definition(hour in 0u8..24, start in 0u8..=24, end in 0u8..=24) {
        let expected = if start <= end {
            start <= hour && hour < end
        } else {
            hour >= start || hour < end
        };
        prop_assert_eq!(in_range(hour, start, end), expected);
    }

    #[test]
    fn prop_wrapping_range_is_complement(hour in 0u8..24, start in 1u8..24, end in 0u8..24) {
        prop_assume!(end < start);
        prop_assert_eq!(in_range(hour, start, end), !in_range(hour, end, start));
    }

    #[test]
    fn prop_represented_hour_is_periodic(index in 0usize..48, width in 24usize..=48, offset in -50_400i64..=50_400) {
        prop_assume!(index < width);
        let base = represented_hour(index, width, offset);
        prop_assert!(base < 24);
        prop_assert_eq!(base, represented_hour(index, width, offset + 86_400));
        prop_assert_eq!(base, represented_hour(index, width, offset - 86_400));
    }

    #[test]
    fn prop_marker_stays_inside_bar(hour in 0u32..24, minute in 0u32..60, width in 1usize..200) {
        let t = NaiveTime::from_hms_opt(hour, minute, 0).unwrap();
        let index = marker_index(&t, width).unwrap();
        prop_assert!(index < width);
    }

    #[test]
    fn prop_bar_width_is_clamped(columns in 0usize..1000) {
        let width = bar_width_for_terminal(columns);
        prop_assert!((MIN_BAR_WIDTH..=IDEAL_BAR_WIDTH).contains(&width));
    }

    #[test]
    fn prop_offset_label_sign(hours in -14i32..=14) {
        let label = offset_label(hours * 3600);
        match hours.signum() {
            0 => prop_assert_eq!(label, "same"),
            1 => prop_assert_eq!(label, format!("+{hours}h")),
            _ => prop_assert_eq!(label, format!("{hours}h")),
        }
    }

    #[test]
    fn prop_search_scores_positive_and_sorted(query in "[a-z]{1,4}") {
        let results = search(&query, catalog::all(), fixed_now());
        for pair in results.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
        for r in &results {
            prop_assert!(r.score > 0);
        }
    }
}

#[test]
fn empty_query_lists_catalog_by_popularity() {
    let results = search("", catalog::all(), fixed_now());
    assert_eq!(results.len(), catalog::all().len());
    for pair in results.windows(2) {
        assert!(pair[0].city.popularity <= pair[1].city.popularity);
    }
}

#[test]
fn exact_match_outranks_substring() {
    let results = search("york", catalog::all(), fixed_now());
    let york = results.iter().position(|r| r.city.city == "York").unwrap();
    let new_york = results.iter().position(|r| r.city.city == "New York").unwrap();
    assert_eq!(york, 0);
    assert!(york < new_york);
}

#[test]
fn fractional_offsets_truncate_toward_zero() {
    assert_eq!(offset_label(5 * 3600 + 1800), "+5h");
    assert_eq!(offset_label(-(3 * 3600 + 1800)), "-3h");
    assert_eq!(offset_label(1800), "same");
}
