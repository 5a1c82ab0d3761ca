//! Loopcap Dedup - Duplicate-frame detection and removal
//!
//! Captured screen sequences are full of temporally-redundant frames:
//! nothing moves between timer ticks, yet every tick produces a frame.
//! This crate scores adjacent frames for pixel-level similarity and
//! collapses runs of near-identical frames before encoding, folding
//! the removed frames' display delays into the kept representative so
//! playback timing is preserved.
//!
//! All operations are pure, synchronous computations over borrowed
//! rasters; nothing here allocates beyond the output sequence, mutates
//! an input, or reads global state.

pub mod collapse;
pub mod compare;
pub mod similarity;

pub use collapse::{is_duplicate, remove_duplicates, Collapsed};
pub use compare::compare_exact;
pub use similarity::similarity;
