//! Pixel-level frame similarity
//!
//! Computes a normalized score in [0,1] between two equal-sized
//! rasters, optionally restricted to a sub-region, with uniform
//! spatial sub-sampling, per-channel tolerance and channel masking.

use loopcap_core::{DedupConfig, Pixel, Raster, Region};

use crate::compare::compare_exact;

/// Compute the similarity between two rasters
///
/// Returns 0.0 for mismatched dimensions and 1.0 for an empty
/// effective region. When the configuration requests an exact
/// full-frame comparison (zero tolerance, 1x1 sampling, no sub-region)
/// the whole-frame compare primitive is used instead of the generic
/// scan: identical frames score exactly 1.0, and differing frames
/// score an area-ratio approximation `1 - diff_area / total_area`
/// derived from the difference bounding box. That estimate trades
/// exactness for speed and is not symmetric in general; callers that
/// need the exact sampled ratio should set a sub-region or a sampling
/// stride, which forces the generic scan.
pub fn similarity(a: &dyn Raster, b: &dyn Raster, roi: Option<Region>, cfg: &DedupConfig) -> f64 {
    if a.width() != b.width() || a.height() != b.height() {
        return 0.0;
    }

    let r = effective_region(a, b, roi);
    if r.is_empty() {
        return 1.0;
    }

    let (sx, sy) = cfg.effective_sample_steps();

    // Fast path: exact full-frame comparison requested.
    if cfg.per_channel_tolerance <= 0
        && sx == 1
        && sy == 1
        && r == Region::new(0, 0, a.width(), a.height())
    {
        return match compare_exact(a, b, cfg.channel_mask) {
            None => 1.0,
            Some(diff) => {
                let total = a.width() as i64 * a.height() as i64;
                if total <= 0 {
                    return 0.0;
                }
                (1.0 - diff.area() as f64 / total as f64).clamp(0.0, 1.0)
            }
        };
    }

    // Generic scan with sampling and optional early-out. The total is
    // fixed up front; an early exit divides by the same total, so it
    // can only under-report relative to a full scan.
    let cols = ((r.width() + sx - 1) / sx) as i64;
    let rows = ((r.height() + sy - 1) / sy) as i64;
    let total_samples = cols * rows;
    if total_samples <= 0 {
        return 1.0;
    }

    let mut equal_count: i64 = 0;
    let mut processed: i64 = 0;

    'scan: for yy in (r.top..r.bottom).step_by(sy as usize) {
        let row_a = a.row(yy);
        let row_b = b.row(yy);
        for xx in (r.left..r.right).step_by(sx as usize) {
            if pixels_equal(row_a[xx as usize], row_b[xx as usize], cfg) {
                equal_count += 1;
            }
            processed += 1;

            if cfg.enable_early_out {
                // Stop once even all-equal remaining samples cannot
                // reach the threshold.
                let best_case = (equal_count + (total_samples - processed)) as f64
                    / total_samples as f64;
                if best_case < cfg.similarity_threshold {
                    break 'scan;
                }
            }
        }
    }

    (equal_count as f64 / total_samples as f64).clamp(0.0, 1.0)
}

/// Intersect the requested region with the rasters' common bounds
fn effective_region(a: &dyn Raster, b: &dyn Raster, roi: Option<Region>) -> Region {
    let w = a.width().min(b.width());
    let h = a.height().min(b.height());
    match roi {
        Some(r) => r.clamped_to(w, h),
        None => Region::new(0, 0, w, h),
    }
}

/// Pixel equality under the configured tolerance and channel mask
fn pixels_equal(p1: Pixel, p2: Pixel, cfg: &DedupConfig) -> bool {
    let mask = cfg.channel_mask;
    if cfg.per_channel_tolerance <= 0 {
        return (p1.bits() ^ p2.bits()) & mask.bits() == 0;
    }

    let tol = cfg.per_channel_tolerance;
    if mask.has_red() && (p1.r() as i32 - p2.r() as i32).abs() > tol {
        return false;
    }
    if mask.has_green() && (p1.g() as i32 - p2.g() as i32).abs() > tol {
        return false;
    }
    if mask.has_blue() && (p1.b() as i32 - p2.b() as i32).abs() > tol {
        return false;
    }
    if mask.has_alpha() && (p1.a() as i32 - p2.a() as i32).abs() > tol {
        return false;
    }
    true
}
