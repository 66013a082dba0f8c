mod common;
use common::{cleaned, reference, wall};
use gazetrail::core::calculator::alignment::{clock_offset, rebase};
use gazetrail::core::matcher::{assign, match_posts, pair_screenshots};
use gazetrail::import::parse_screenshot_name;
use gazetrail::models::{CleanedSample, Post, Screenshot};

fn post(id: i64, start: f64, end: f64) -> Post {
    Post {
        post_id: id,
        start_time_seconds: start,
        end_time_seconds: end,
        reference_wall_clock: reference(),
        user_name: None,
    }
}

fn shot(name: &str) -> Screenshot {
    parse_screenshot_name(name)
        .expect("raw capture name")
        .expect("valid timestamp")
}

/// Samples every 0.5 s starting 1 s before the reference clock.
fn trace(n: usize) -> Vec<CleanedSample> {
    (0..n)
        .map(|i| {
            let t = i as f64 * 0.5;
            cleaned(t, t - 1.0, Some(100 + i as i32), Some(200 + i as i32))
        })
        .collect()
}

fn times(points: &[gazetrail::models::SegmentPoint]) -> Vec<f64> {
    points.iter().map(|p| p.time_seconds).collect()
}

#[test]
fn test_clock_offset_uses_last_sample_strictly_before_reference() {
    // wall clocks: -1.0, -0.5, 0.0, 0.5 → last strictly before is t = 0.5
    assert_eq!(clock_offset(&trace(4), reference()), 0.5);
}

#[test]
fn test_clock_offset_is_negative_when_recording_starts_late() {
    let samples = vec![
        cleaned(0.0, 2.5, Some(1), Some(1)),
        cleaned(0.5, 3.0, Some(1), Some(1)),
    ];
    assert_eq!(clock_offset(&samples, reference()), -2.5);

    let aligned = rebase(&samples, -2.5);
    assert_eq!(aligned.len(), 2);
    assert_eq!(aligned[0].time_seconds, 2.5);
    assert_eq!(aligned[1].time_seconds, 3.0);
}

#[test]
fn test_rebase_drops_samples_before_zero() {
    let aligned = rebase(&trace(4), 0.5);
    let t: Vec<f64> = aligned.iter().map(|s| s.time_seconds).collect();
    assert_eq!(t, vec![0.0, 0.5, 1.0]);
}

#[test]
fn test_samples_are_assigned_to_inclusive_windows() {
    let posts = vec![post(1, 0.0, 1.0), post(2, 1.5, 2.0)];
    let segments = match_posts(&trace(8), &posts, &[]);

    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].post_id, 1);
    assert_eq!(times(&segments[0].points), vec![0.0, 0.5, 1.0]);
    assert_eq!(segments[1].post_id, 2);
    assert_eq!(times(&segments[1].points), vec![1.5, 2.0]);
}

#[test]
fn test_overlapping_posts_earlier_listed_wins() {
    let posts = vec![post(7, 0.0, 1.0), post(3, 1.0, 2.0)];
    let segments = match_posts(&trace(8), &posts, &[]);

    assert_eq!(times(&segments[0].points), vec![0.0, 0.5, 1.0]);
    assert_eq!(times(&segments[1].points), vec![1.5, 2.0]);
    assert_eq!(assign(&posts, 1.0), Some(0));
    assert_eq!(assign(&posts, 2.5), None);
}

#[test]
fn test_every_sample_claimed_at_most_once() {
    let posts = vec![post(1, 0.0, 2.0), post(2, 0.5, 1.5), post(3, 1.0, 3.0)];
    let samples = trace(10);
    let segments = match_posts(&samples, &posts, &[]);

    let mut all: Vec<f64> = segments.iter().flat_map(|s| times(&s.points)).collect();
    let claimed = all.len();
    all.dedup();
    assert_eq!(all.len(), claimed);
    // post 2 is fully shadowed by post 1
    assert!(segments.iter().all(|s| s.post_id != 2));
}

#[test]
fn test_post_without_samples_is_skipped() {
    let posts = vec![post(1, 0.0, 1.0), post(2, 50.0, 60.0)];
    let segments = match_posts(&trace(4), &posts, &[]);

    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].post_id, 1);
}

#[test]
fn test_post_without_screenshot_still_emitted() {
    let posts = vec![post(1, 0.0, 1.0)];
    let shots = vec![shot("screenshot_2024-05-01T13_00_00.png")];
    let segments = match_posts(&trace(4), &posts, &shots);

    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].screenshot, None);
}

#[test]
fn test_earliest_screenshot_wins_within_a_post() {
    let posts = vec![post(1, 0.0, 1.0), post(2, 1.0, 2.0)];
    let shots = vec![
        shot("screenshot_2024-05-01T12_00_01.png"),
        shot("screenshot_2024-05-01T12_00_02.png"),
        shot("screenshot_2024-05-01T12_00_00.png"),
    ];

    let paired = pair_screenshots(&posts, &shots);
    assert_eq!(
        paired[0].map(|s| s.filename.as_str()),
        Some("screenshot_2024-05-01T12_00_00.png")
    );
    // 12:00:01 belongs to post 1 (listed first) and loses to 12:00:00
    assert_eq!(
        paired[1].map(|s| s.filename.as_str()),
        Some("screenshot_2024-05-01T12_00_02.png")
    );

    let segments = match_posts(&trace(8), &posts, &shots);
    assert_eq!(
        segments[0].screenshot.as_deref(),
        Some("screenshot_2024-05-01T12_00_00.png")
    );
}

#[test]
fn test_screenshot_outside_every_post_is_discarded() {
    let posts = vec![post(1, 0.0, 1.0)];
    let shots = vec![shot("screenshot_2024-05-01T11_59_59.png")];
    assert_eq!(pair_screenshots(&posts, &shots), vec![None]);
}

#[test]
fn test_samples_without_coordinates_are_left_out() {
    let mut samples = trace(6);
    samples[4].x = None;
    samples[5].y = None;
    let segments = match_posts(&samples, &[post(1, 0.0, 10.0)], &[]);

    assert_eq!(times(&segments[0].points), vec![0.0, 0.5, 1.0]);
}

#[test]
fn test_no_posts_no_segments() {
    assert!(match_posts(&trace(4), &[], &[]).is_empty());
}

#[test]
fn test_empty_trace_no_segments() {
    assert!(match_posts(&[], &[post(1, 0.0, 1.0)], &[]).is_empty());
}

#[test]
fn test_post_windows_are_absolute_per_post_reference() {
    let mut late = post(5, 0.0, 1.0);
    late.reference_wall_clock = wall(3600.0);
    assert!(late.contains_instant(wall(3600.5)));
    assert!(!late.contains_instant(wall(0.5)));
}

#[test]
fn test_post_window_beyond_calendar_contains_nothing() {
    // 8.5e12 s fits in microseconds but not in the calendar; 1e13 fits in neither
    for end in [8.5e12, 1e13] {
        let far = post(1, 0.0, end);
        assert!(far.wall_clock_window().is_none());
        assert!(!far.contains_instant(wall(1.0)));

        let shots = vec![shot("screenshot_2024-05-01T12_00_01.png")];
        let segments = match_posts(&trace(4), &[far], &shots);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].screenshot, None);
    }
}
