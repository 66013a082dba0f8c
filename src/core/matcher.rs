//! Interval matching: clock alignment, post assignment, screenshot pairing.

use crate::core::calculator::alignment::{clock_offset, rebase};
use crate::models::{CleanedSample, Post, PostSegment, Screenshot, SegmentPoint};

/// Index of the first post (in list order) whose window contains `time_seconds`.
pub fn assign(posts: &[Post], time_seconds: f64) -> Option<usize> {
    posts.iter().position(|p| p.contains_offset(time_seconds))
}

/// For each post, the earliest screenshot captured inside its wall-clock
/// window. A screenshot is claimed by the first matching post only.
pub fn pair_screenshots<'a>(
    posts: &[Post],
    screenshots: &'a [Screenshot],
) -> Vec<Option<&'a Screenshot>> {
    let mut ordered: Vec<&Screenshot> = screenshots.iter().collect();
    // stable: equal capture times keep directory order
    ordered.sort_by_key(|s| s.captured_at);

    let mut paired: Vec<Option<&Screenshot>> = vec![None; posts.len()];
    for shot in ordered {
        match posts.iter().position(|p| p.contains_instant(shot.captured_at)) {
            Some(index) if paired[index].is_none() => paired[index] = Some(shot),
            Some(_) => log::debug!("{} superseded by an earlier capture", shot.filename),
            None => log::debug!("{} falls outside every post", shot.filename),
        }
    }

    paired
}

/// Split a cleaned trace into per-post segments.
///
/// Times are aligned against the first post's reference clock. Posts that
/// end up without samples are skipped; posts without a screenshot still
/// produce a segment. Samples with an unknown coordinate (trailing gap) are
/// left out, segment coordinates being whole pixels.
pub fn match_posts(
    samples: &[CleanedSample],
    posts: &[Post],
    screenshots: &[Screenshot],
) -> Vec<PostSegment> {
    let Some(first) = posts.first() else {
        log::info!("no posts to match against");
        return Vec::new();
    };

    let offset = clock_offset(samples, first.reference_wall_clock);
    let aligned = rebase(samples, offset);
    log::debug!(
        "clock offset {offset}s, {} of {} sample(s) after reference",
        aligned.len(),
        samples.len()
    );

    let mut buckets: Vec<Vec<SegmentPoint>> = vec![Vec::new(); posts.len()];
    let mut unplottable = 0usize;
    for sample in &aligned {
        let Some(index) = assign(posts, sample.time_seconds) else {
            continue;
        };
        match sample.point() {
            Some((x, y)) => buckets[index].push(SegmentPoint {
                x,
                y,
                time_seconds: sample.time_seconds,
            }),
            None => unplottable += 1,
        }
    }
    if unplottable > 0 {
        log::debug!("{unplottable} matched sample(s) without coordinates left out");
    }

    let paired = pair_screenshots(posts, screenshots);

    posts
        .iter()
        .zip(buckets)
        .zip(paired)
        .filter_map(|((post, points), shot)| {
            if points.is_empty() {
                log::info!("post {} has no gaze samples, skipped", post.post_id);
                return None;
            }
            if shot.is_none() {
                log::info!("post {} has no screenshot", post.post_id);
            }
            Some(PostSegment {
                post_id: post.post_id,
                points,
                screenshot: shot.map(|s| s.filename.clone()),
            })
        })
        .collect()
}
