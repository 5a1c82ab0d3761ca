//! Duplicate-run collapsing
//!
//! Walks a capture sequence left to right, merges consecutive frames
//! classified as duplicates of the current run representative, and
//! rewrites the kept frame's delay per the policy. Frames are never
//! reordered; every output frame is one of the inputs.

use tracing::debug;

use loopcap_core::{DedupConfig, DedupPolicy, DelayAdjust, Frame, KeepMode, Raster, Region};

use crate::similarity::similarity;

/// Result of collapsing a frame sequence
#[derive(Debug)]
pub struct Collapsed<'a> {
    /// Kept frames in input order
    pub frames: Vec<Frame<'a>>,
    /// Indices of removed input frames, ascending
    pub removed_indices: Vec<usize>,
}

impl Collapsed<'_> {
    /// Number of input frames removed
    pub fn removed_count(&self) -> usize {
        self.removed_indices.len()
    }
}

/// Test whether two adjacent frames are duplicates under `cfg`
///
/// Returns the threshold decision and the raw similarity score. The
/// comparison region is the current frame's sub-region when set and
/// non-empty, else the previous frame's, else the full common bounds.
/// A missing raster on either side is never a duplicate, score 0.0.
pub fn is_duplicate(prev: &Frame<'_>, cur: &Frame<'_>, cfg: &DedupConfig) -> (bool, f64) {
    let (Some(a), Some(b)) = (prev.raster, cur.raster) else {
        return (false, 0.0);
    };

    let roi = cur
        .comparison_region()
        .or_else(|| prev.comparison_region())
        .unwrap_or_else(|| Region::new(0, 0, a.width().min(b.width()), a.height().min(b.height())));

    let sim = similarity(a, b, Some(roi), cfg);
    (sim >= cfg.similarity_threshold, sim)
}

/// Remove consecutive duplicate frames from a capture sequence
///
/// Single pass: each frame is compared against the pending run
/// representative. Under [`KeepMode::First`] the representative stays
/// the run's first frame; under [`KeepMode::Last`] it is replaced by
/// each new duplicate, so subsequent comparisons track the latest
/// content. When a run ends, the representative's delay is rewritten
/// per [`DelayAdjust`] and it is appended to the output.
pub fn remove_duplicates<'a>(
    input: &[Frame<'a>],
    cfg: &DedupConfig,
    policy: &DedupPolicy,
) -> Collapsed<'a> {
    if input.is_empty() {
        return Collapsed {
            frames: Vec::new(),
            removed_indices: Vec::new(),
        };
    }

    // Sized for the common case of heavy duplication.
    let mut frames = Vec::with_capacity(input.len() / 2 + 1);
    let mut removed_indices = Vec::with_capacity(input.len() / 4);

    let mut pending = input[0];
    let mut run_length: u64 = 1;
    let mut run_delay_sum: u64 = pending.delay_ms;

    for (i, cur) in input.iter().enumerate().skip(1) {
        let (dup, _sim) = is_duplicate(&pending, cur, cfg);

        if dup {
            run_length += 1;
            run_delay_sum += cur.delay_ms;
            match policy.keep_mode {
                KeepMode::First => {
                    removed_indices.push(i);
                }
                KeepMode::Last => {
                    // The prior representative is dropped in favor of
                    // the latest duplicate.
                    removed_indices.push(i - 1);
                    pending = *cur;
                }
            }
            continue;
        }

        frames.push(flush(pending, policy, run_delay_sum, run_length));
        pending = *cur;
        run_length = 1;
        run_delay_sum = cur.delay_ms;
    }

    frames.push(flush(pending, policy, run_delay_sum, run_length));

    debug!(
        input = input.len(),
        kept = frames.len(),
        removed = removed_indices.len(),
        "collapsed duplicate runs"
    );

    Collapsed {
        frames,
        removed_indices,
    }
}

/// Apply the delay-adjustment rule to a run's kept representative
fn flush<'a>(
    mut pending: Frame<'a>,
    policy: &DedupPolicy,
    run_delay_sum: u64,
    run_length: u64,
) -> Frame<'a> {
    match policy.delay_adjust {
        DelayAdjust::Unchanged => {}
        DelayAdjust::Sum => pending.delay_ms = run_delay_sum,
        DelayAdjust::Average => pending.delay_ms = run_delay_sum / run_length,
    }
    pending
}
