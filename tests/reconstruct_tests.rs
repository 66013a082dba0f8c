mod common;
use common::{both, cleaned, lost, raw};
use gazetrail::core::calculator::gaps::{find_gaps, linear_interpolate};
use gazetrail::core::reconstruct::{average_sample, fill_gaps, reconstruct};
use gazetrail::errors::AppError;

#[test]
fn test_binocular_sample_is_rounded_average() {
    let (lx, ly, rx, ry) = (0.3127, 0.4411, 0.3391, 0.4702);
    let sample = raw(0.0, 0.0, (Some(lx), Some(ly)), (Some(rx), Some(ry)));

    let out = reconstruct(&[sample], 1920, 1080).expect("reconstruct");

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].x, Some(((lx + rx) / 2.0 * 1920.0).round() as i32));
    assert_eq!(out[0].y, Some(((ly + ry) / 2.0 * 1080.0).round() as i32));
}

#[test]
fn test_binocular_samples_are_never_interpolated() {
    let samples = vec![both(0.0, 0.1, 0.1), both(0.1, 0.9, 0.9), both(0.2, 0.5, 0.5)];
    let out = reconstruct(&samples, 1000, 1000).expect("reconstruct");

    let xs: Vec<_> = out.iter().map(|s| s.x).collect();
    assert_eq!(xs, vec![Some(100), Some(900), Some(500)]);
}

#[test]
fn test_missing_eye_falls_back_per_axis() {
    // left x lost, right y lost
    let sample = raw(0.0, 0.0, (None, Some(0.2)), (Some(0.5), None));
    let out = average_sample(&sample, 1000, 1000);

    assert_eq!(out.x, Some(500));
    assert_eq!(out.y, Some(200));
}

#[test]
fn test_both_eyes_missing_stays_missing() {
    let out = average_sample(&lost(0.0), 1920, 1080);
    assert!(out.is_missing());
    assert_eq!(out.y, None);
}

#[test]
fn test_leading_gap_is_trimmed_and_time_rebased() {
    let samples = vec![
        lost(0.0),
        lost(0.1),
        both(0.2, 0.5, 0.5),
        both(0.3, 0.6, 0.6),
    ];

    let out = reconstruct(&samples, 1920, 1080).expect("reconstruct");

    assert_eq!(out.len(), 2);
    assert_eq!(out[0].time_seconds, 0.0);
    assert_eq!(out[0].x, Some(960));
    assert_eq!(out[0].y, Some(540));
    assert_eq!(out[0].wall_clock, samples[2].wall_clock);
    assert!((out[1].time_seconds - 0.1).abs() < 1e-9);
    assert_eq!(out[1].x, Some(1152));
}

#[test]
fn test_without_leading_gap_times_are_untouched() {
    let samples = vec![both(5.0, 0.5, 0.5), both(5.5, 0.5, 0.5)];
    let out = reconstruct(&samples, 100, 100).expect("reconstruct");

    assert_eq!(out[0].time_seconds, 5.0);
    assert_eq!(out[1].time_seconds, 5.5);
}

#[test]
fn test_interior_gap_is_linearly_interpolated_and_truncated() {
    let trace = vec![
        cleaned(0.0, 0.0, Some(0), Some(0)),
        cleaned(0.1, 0.1, None, None),
        cleaned(0.2, 0.2, None, None),
        cleaned(0.3, 0.3, None, None),
        cleaned(0.4, 0.4, Some(10), Some(20)),
    ];

    let out = fill_gaps(trace);

    let xs: Vec<_> = out.iter().map(|s| s.x.expect("x filled")).collect();
    let ys: Vec<_> = out.iter().map(|s| s.y.expect("y filled")).collect();
    assert_eq!(xs, vec![0, 2, 5, 7, 10]);
    assert_eq!(ys, vec![0, 5, 10, 15, 20]);
}

#[test]
fn test_trailing_gap_is_left_missing() {
    let samples = vec![both(0.0, 0.5, 0.5), lost(0.1), lost(0.2)];
    let out = reconstruct(&samples, 100, 100).expect("reconstruct");

    assert_eq!(out.len(), 3);
    assert_eq!(out[0].x, Some(50));
    assert!(out[1].is_missing());
    assert!(out[2].is_missing());
}

#[test]
fn test_missing_y_alone_does_not_open_a_gap() {
    let trace = vec![
        cleaned(0.0, 0.0, Some(10), Some(10)),
        cleaned(0.1, 0.1, Some(20), None),
        cleaned(0.2, 0.2, Some(30), Some(30)),
    ];

    assert!(find_gaps(&trace).is_empty());
    let out = fill_gaps(trace.clone());
    assert_eq!(out, trace);
}

#[test]
fn test_interpolation_keeps_y_when_an_endpoint_y_is_missing() {
    let trace = vec![
        cleaned(0.0, 0.0, Some(0), None),
        cleaned(0.1, 0.1, None, Some(7)),
        cleaned(0.2, 0.2, Some(4), Some(8)),
    ];

    let out = fill_gaps(trace);
    assert_eq!(out[1].x, Some(2));
    assert_eq!(out[1].y, Some(7));
}

#[test]
fn test_fill_gaps_is_idempotent() {
    let trace = vec![
        cleaned(0.0, 0.0, None, None),
        cleaned(0.1, 0.1, Some(100), Some(100)),
        cleaned(0.2, 0.2, None, None),
        cleaned(0.3, 0.3, None, Some(3)),
        cleaned(0.4, 0.4, Some(400), Some(200)),
        cleaned(0.5, 0.5, Some(410), None),
        cleaned(0.6, 0.6, None, None),
    ];

    let once = fill_gaps(trace);
    let twice = fill_gaps(once.clone());
    assert_eq!(once, twice);
}

#[test]
fn test_gap_classification() {
    let trace = vec![
        cleaned(0.0, 0.0, None, None),
        cleaned(0.1, 0.1, Some(1), Some(1)),
        cleaned(0.2, 0.2, None, None),
        cleaned(0.3, 0.3, None, None),
        cleaned(0.4, 0.4, Some(1), Some(1)),
        cleaned(0.5, 0.5, None, None),
    ];

    let gaps = find_gaps(&trace);
    assert_eq!(gaps.len(), 3);

    assert!(gaps[0].is_leading());
    assert_eq!(gaps[0].after, Some(1));

    assert!(gaps[1].is_interior());
    assert_eq!((gaps[1].before, gaps[1].after, gaps[1].len), (Some(1), Some(4), 2));

    assert!(gaps[2].is_trailing());
    assert_eq!(gaps[2].before, Some(4));
}

#[test]
fn test_linear_interpolate_excludes_endpoints() {
    assert_eq!(linear_interpolate(0.0, 10.0, 4), vec![2.5, 5.0, 7.5]);
    assert!(linear_interpolate(3.0, 9.0, 1).is_empty());
}

#[test]
fn test_empty_recording_is_not_an_error() {
    let out = reconstruct(&[], 1920, 1080).expect("empty input");
    assert!(out.is_empty());
}

#[test]
fn test_recording_without_any_gaze_fails_fast() {
    let samples = vec![lost(0.0), lost(0.1), raw(0.2, 0.2, (None, Some(0.5)), (None, Some(0.5)))];
    let err = reconstruct(&samples, 1920, 1080).expect_err("no valid data");
    assert!(matches!(err, AppError::NoValidData(_)));
}
